//! Undo Transaction Scope Tests
//!
//! The host's undo history must see every batch as exactly one entry. These
//! tests pin the guarantee on the exit paths the guard has to survive:
//! normal completion, validation short-circuit, and a panic unwinding out of
//! the batch loop.

mod common;

use std::panic::{catch_unwind, AssertUnwindSafe};

use common::{names, ScriptedEngine};
use polysym_core::{InfluencePattern, NodeHandle, WeightTransferRequest};
use polysym_engine::{
    flip_mesh, mirror_mesh, EngineError, EngineResult, RecordingUndoHost, WeightTransferEngine,
};

#[test]
fn test_facade_call_is_one_chunk() {
    let mut scene = common::deformer_scene();
    scene.select(&["meshA", "meshB"]);
    let engine = ScriptedEngine::new();
    let undo = RecordingUndoHost::new();

    flip_mesh(&scene, &engine, &undo, &[]).unwrap();

    // Two items, one chunk.
    assert_eq!(engine.call_count(), 2);
    assert_eq!(undo.opened(), 1);
    assert_eq!(undo.closed(), 1);
}

#[test]
fn test_validation_failure_opens_no_chunk() {
    let scene = common::deformer_scene();
    let engine = ScriptedEngine::new();
    let undo = RecordingUndoHost::new();

    // A single mesh cannot be mirrored onto itself.
    let result = mirror_mesh(&scene, &engine, &undo, &names(&["meshA"]));

    assert!(result.is_err());
    assert_eq!(engine.call_count(), 0);
    // Validation aborts before the transaction exists.
    assert_eq!(undo.opened(), 0);
}

/// Engine whose flip call panics mid-batch
struct PanickingEngine;

impl WeightTransferEngine for PanickingEngine {
    fn transfer_deformer_weights(&self, _request: &WeightTransferRequest) -> EngineResult {
        Ok(())
    }

    fn transfer_skin_weights(&self, _request: &WeightTransferRequest) -> EngineResult {
        Ok(())
    }

    fn flip_mesh(&self, mesh: &NodeHandle) -> EngineResult {
        panic!("host crashed while flipping {}", mesh);
    }

    fn mirror_mesh(&self, _base: &NodeHandle, _target: &NodeHandle) -> EngineResult {
        Ok(())
    }

    fn set_influence_symmetry(
        &self,
        _skin: &NodeHandle,
        _pattern: &InfluencePattern,
    ) -> EngineResult {
        Ok(())
    }

    fn influence_symmetry(
        &self,
        _skin: &NodeHandle,
    ) -> std::result::Result<Vec<(String, String)>, EngineError> {
        Ok(Vec::new())
    }
}

#[test]
fn test_chunk_closes_when_batch_loop_unwinds() {
    let mut scene = common::deformer_scene();
    scene.select(&["meshA", "meshB"]);
    let undo = RecordingUndoHost::new();

    let result = catch_unwind(AssertUnwindSafe(|| {
        let _ = flip_mesh(&scene, &PanickingEngine, &undo, &[]);
    }));

    assert!(result.is_err());
    // The chunk was opened exactly once and closed exactly once even though
    // the loop never completed.
    assert_eq!(undo.opened(), 1);
    assert_eq!(undo.closed(), 1);
}
