//! Skin-weights commands
//!
//! Copy skin weights between two meshes, or mirror them in place on each
//! selected mesh. Binders are looked up per item at execution time, so an
//! unskinned mesh in a batch is skipped with a warning instead of failing
//! the whole call.

use polysym_core::{
    resolve_meshes, validate, BatchReport, Capability, ObjectQuery, OperandGroup, OperationKind,
    Result,
};

use crate::commands::options::SkinWeightsOptions;
use crate::engine::WeightTransferEngine;
use crate::executor::execute;
use crate::undo::UndoHost;

/// Copy the skin weights from one mesh to another
///
/// Expects exactly two meshes: source first, destination second. Either
/// mesh lacking a skin binder downgrades the single item to skipped.
///
/// # Errors
///
/// `SymError::NameResolution` for an unknown explicit name,
/// `SymError::Arity` unless exactly two meshes resolve.
pub fn copy_skin_weights(
    scene: &dyn ObjectQuery,
    engine: &dyn WeightTransferEngine,
    undo: &dyn UndoHost,
    names: &[String],
    options: &SkinWeightsOptions,
) -> Result<BatchReport> {
    skin_command(
        scene,
        engine,
        undo,
        names,
        OperationKind::CopySkinWeights,
        options,
    )
}

/// Mirror the skin weights on the selected mesh(es), each via its own binder
///
/// # Errors
///
/// `SymError::NameResolution` for an unknown explicit name,
/// `SymError::SelectionShape` when no mesh is selected.
pub fn mirror_skin_weights(
    scene: &dyn ObjectQuery,
    engine: &dyn WeightTransferEngine,
    undo: &dyn UndoHost,
    names: &[String],
    options: &SkinWeightsOptions,
) -> Result<BatchReport> {
    skin_command(
        scene,
        engine,
        undo,
        names,
        OperationKind::MirrorSkinWeights,
        options,
    )
}

fn skin_command(
    scene: &dyn ObjectQuery,
    engine: &dyn WeightTransferEngine,
    undo: &dyn UndoHost,
    names: &[String],
    kind: OperationKind,
    options: &SkinWeightsOptions,
) -> Result<BatchReport> {
    let meshes = resolve_meshes(scene, names)?;
    let plan = validate(
        kind,
        &meshes,
        &OperandGroup::empty(Capability::Operator),
        &options.settings(),
    )?;
    Ok(execute(plan, scene, engine, undo))
}
