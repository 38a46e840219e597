//! Selection resolution
//!
//! Turns a raw operand list (explicit names, or empty for the active
//! selection) into a typed, ordered operand group. Resolution never mutates
//! the scene and runs before any validation.

use crate::errors::Result;
use crate::model::{Capability, NodeHandle, OperandGroup};
use crate::scene::ObjectQuery;

/// Resolve operand names into a capability-filtered group
///
/// With non-empty `explicit_names`, each name is resolved individually and
/// the first unresolvable name aborts the whole request; no partial group
/// is ever produced. With empty `explicit_names`, the active selection is
/// used instead.
///
/// Either way the gathered handles are then filtered to `capability` in
/// their original order. Mixed inputs are expected: the same argument list
/// is routinely resolved once per capability, so non-matching items are
/// silently dropped rather than rejected.
///
/// # Errors
///
/// Returns `SymError::NameResolution` for the first explicit name with no
/// scene match.
pub fn resolve(
    scene: &dyn ObjectQuery,
    explicit_names: &[String],
    capability: Capability,
) -> Result<OperandGroup> {
    let handles: Vec<NodeHandle> = if explicit_names.is_empty() {
        scene.active_selection()
    } else {
        let mut resolved = Vec::with_capacity(explicit_names.len());
        for name in explicit_names {
            resolved.push(scene.resolve_by_name(name)?);
        }
        resolved
    };

    let members = handles
        .into_iter()
        .filter(|handle| scene.has_capability(handle, capability))
        .collect();

    Ok(OperandGroup::new(capability, members))
}

/// Resolve the mesh operands of a request
pub fn resolve_meshes(scene: &dyn ObjectQuery, explicit_names: &[String]) -> Result<OperandGroup> {
    resolve(scene, explicit_names, Capability::Mesh)
}

/// Resolve the deforming-operator operands of a request
pub fn resolve_operators(
    scene: &dyn ObjectQuery,
    explicit_names: &[String],
) -> Result<OperandGroup> {
    resolve(scene, explicit_names, Capability::Operator)
}
