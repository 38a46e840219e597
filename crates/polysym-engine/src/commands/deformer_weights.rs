//! Deformer-weights commands
//!
//! Copies, flips, or mirrors the weights of generic weighted deformers. The
//! same operand list is resolved once per capability, so callers can pass a
//! mixed mesh/deformer selection in any order.

use polysym_core::{
    resolve_meshes, resolve_operators, validate, BatchReport, Direction, ObjectQuery,
    OperationKind, Result, TransferSettings,
};

use crate::engine::WeightTransferEngine;
use crate::executor::execute;
use crate::undo::UndoHost;

/// Copy the weights from one deformer to another
///
/// Expects one or two meshes and exactly two deformers: source mesh and
/// deformer first, destination mesh (optional, defaults to the source mesh)
/// and deformer second.
///
/// # Errors
///
/// `SymError::NameResolution` for an unknown explicit name,
/// `SymError::SelectionShape` when the operand counts do not match.
pub fn copy_deformer_weights(
    scene: &dyn ObjectQuery,
    engine: &dyn WeightTransferEngine,
    undo: &dyn UndoHost,
    names: &[String],
) -> Result<BatchReport> {
    deformer_weights(
        scene,
        engine,
        undo,
        names,
        OperationKind::CopyDeformerWeights,
        TransferSettings::default(),
    )
}

/// Flip the weights on the selected deformer(s), each on its own mesh
///
/// # Errors
///
/// `SymError::NameResolution` for an unknown explicit name,
/// `SymError::SelectionShape` unless exactly one deformer is paired per
/// mesh.
pub fn flip_deformer_weights(
    scene: &dyn ObjectQuery,
    engine: &dyn WeightTransferEngine,
    undo: &dyn UndoHost,
    names: &[String],
) -> Result<BatchReport> {
    deformer_weights(
        scene,
        engine,
        undo,
        names,
        OperationKind::FlipDeformerWeights,
        TransferSettings::default(),
    )
}

/// Mirror the weights on the selected deformer(s), each on its own mesh
///
/// # Errors
///
/// `SymError::NameResolution` for an unknown explicit name,
/// `SymError::SelectionShape` unless exactly one deformer is paired per
/// mesh.
pub fn mirror_deformer_weights(
    scene: &dyn ObjectQuery,
    engine: &dyn WeightTransferEngine,
    undo: &dyn UndoHost,
    names: &[String],
    direction: Direction,
) -> Result<BatchReport> {
    deformer_weights(
        scene,
        engine,
        undo,
        names,
        OperationKind::MirrorDeformerWeights,
        TransferSettings {
            direction,
            ..TransferSettings::default()
        },
    )
}

fn deformer_weights(
    scene: &dyn ObjectQuery,
    engine: &dyn WeightTransferEngine,
    undo: &dyn UndoHost,
    names: &[String],
    kind: OperationKind,
    settings: TransferSettings,
) -> Result<BatchReport> {
    let meshes = resolve_meshes(scene, names)?;
    let operators = resolve_operators(scene, names)?;
    let plan = validate(kind, &meshes, &operators, &settings)?;
    Ok(execute(plan, scene, engine, undo))
}
