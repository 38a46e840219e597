//! Mesh topology commands
//!
//! Flip and mirror vertex positions on meshes with computed symmetry data.
//! The engine commands do the geometry; these façades only resolve, validate,
//! and batch.

use polysym_core::{
    resolve_meshes, validate, BatchReport, Capability, ObjectQuery, OperandGroup, OperationKind,
    Result, TransferSettings,
};

use crate::engine::WeightTransferEngine;
use crate::executor::execute;
use crate::undo::UndoHost;

/// Flip the vertex positions of the selected mesh(es), in place
///
/// # Errors
///
/// `SymError::NameResolution` for an unknown explicit name,
/// `SymError::SelectionShape` when no mesh is selected.
pub fn flip_mesh(
    scene: &dyn ObjectQuery,
    engine: &dyn WeightTransferEngine,
    undo: &dyn UndoHost,
    names: &[String],
) -> Result<BatchReport> {
    mesh_command(scene, engine, undo, names, OperationKind::FlipMesh)
}

/// Mirror the vertex positions of target mesh(es) from a base mesh
///
/// The first mesh is the base; every following mesh is mirrored from it.
///
/// # Errors
///
/// `SymError::NameResolution` for an unknown explicit name,
/// `SymError::SelectionShape` unless a base and at least one target are
/// selected.
pub fn mirror_mesh(
    scene: &dyn ObjectQuery,
    engine: &dyn WeightTransferEngine,
    undo: &dyn UndoHost,
    names: &[String],
) -> Result<BatchReport> {
    mesh_command(scene, engine, undo, names, OperationKind::MirrorMesh)
}

fn mesh_command(
    scene: &dyn ObjectQuery,
    engine: &dyn WeightTransferEngine,
    undo: &dyn UndoHost,
    names: &[String],
    kind: OperationKind,
) -> Result<BatchReport> {
    let meshes = resolve_meshes(scene, names)?;
    let plan = validate(
        kind,
        &meshes,
        &OperandGroup::empty(Capability::Operator),
        &TransferSettings::default(),
    )?;
    Ok(execute(plan, scene, engine, undo))
}
