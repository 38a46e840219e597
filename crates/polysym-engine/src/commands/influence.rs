//! Influence-symmetry commands
//!
//! `set` applies the left/right pairing patterns to each selected skinned
//! mesh's binder inside one undo chunk. `print` is a pure query: it reports
//! each binder's influence pairs and mutates nothing, so it bypasses the
//! executor and opens no chunk.

use tracing::{info, warn};

use polysym_core::{
    resolve_meshes, validate, BatchReport, Capability, ItemOutcome, ObjectQuery, OperandGroup,
    OperationKind, Result, SymError, TransferSettings,
};

use crate::commands::options::InfluenceSymmetryOptions;
use crate::engine::WeightTransferEngine;
use crate::executor::execute;
use crate::undo::UndoHost;

/// Apply influence pairing patterns to the selected skinned mesh(es)
///
/// # Errors
///
/// `SymError::NameResolution` for an unknown explicit name,
/// `SymError::SelectionShape` when no mesh is selected.
pub fn set_influence_symmetry(
    scene: &dyn ObjectQuery,
    engine: &dyn WeightTransferEngine,
    undo: &dyn UndoHost,
    names: &[String],
    options: &InfluenceSymmetryOptions,
) -> Result<BatchReport> {
    let meshes = resolve_meshes(scene, names)?;
    let settings = TransferSettings {
        influence_symmetry: Some(options.pattern()),
        ..TransferSettings::default()
    };
    let plan = validate(
        OperationKind::SetInfluenceSymmetry,
        &meshes,
        &OperandGroup::empty(Capability::Operator),
        &settings,
    )?;
    Ok(execute(plan, scene, engine, undo))
}

/// Print the influence pairs of each selected skinned mesh's binder
///
/// Emits one info line per pair for the operator audit trail and returns a
/// report mirroring the batch statuses: unskinned meshes are skipped, a
/// failing query is recorded against its mesh.
///
/// # Errors
///
/// `SymError::NameResolution` for an unknown explicit name,
/// `SymError::SelectionShape` when no mesh is selected.
pub fn print_influence_symmetry(
    scene: &dyn ObjectQuery,
    engine: &dyn WeightTransferEngine,
    names: &[String],
) -> Result<BatchReport> {
    let meshes = resolve_meshes(scene, names)?;
    if meshes.is_empty() {
        return Err(SymError::SelectionShape {
            op: "printInfluenceSymmetry".to_string(),
            expected: "Select a skinned mesh and try again.".to_string(),
            actual: "0 mesh(es)".to_string(),
        });
    }

    let mut report = BatchReport::new();
    for mesh in meshes.iter() {
        let Some(binder) = scene.find_binder(mesh) else {
            let message = format!("Skipping '{}' since it is not skinned.", mesh);
            warn!(item = %mesh, "{}", message);
            report.push(ItemOutcome::skipped(mesh.name(), message));
            continue;
        };

        match engine.influence_symmetry(&binder) {
            Ok(pairs) => {
                for (lhs, rhs) in &pairs {
                    info!(item = %mesh, "{}: '{}' <-> '{}'", binder, lhs, rhs);
                }
                report.push(ItemOutcome::ok(
                    mesh.name(),
                    format!("{} influence pair(s) on {}", pairs.len(), binder),
                ));
            }
            Err(err) => {
                let err = SymError::ExternalOperation {
                    target: mesh.name().to_string(),
                    message: err.message,
                };
                warn!(item = %mesh, "{}", err);
                report.push(ItemOutcome::failed(mesh.name(), err.to_string()));
            }
        }
    }

    Ok(report)
}
