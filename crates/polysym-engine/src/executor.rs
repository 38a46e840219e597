//! Transactional batch executor
//!
//! Runs a validated plan inside one undo chunk. Per-item failures never
//! abort the batch: a missing binder downgrades the item to skipped, an
//! engine failure is recorded against the item, and the remaining items
//! still execute. Validation failures, by contrast, abort the whole call
//! before the chunk ever opens.

use tracing::{error, info, warn};

use polysym_core::{
    log_op_end, log_op_start, BatchPlan, BatchReport, ItemOutcome, ItemStatus, NodeHandle,
    ObjectQuery, PlanItem, PlannedOp, SymError, TransferMode, TransferSettings,
    WeightTransferRequest,
};

use crate::engine::WeightTransferEngine;
use crate::undo::{UndoChunk, UndoHost};

/// Execute a validated batch plan as one undoable transaction
///
/// Opens exactly one undo chunk for the entire plan - even an empty one -
/// and guarantees it closes on every exit path. Returns the ordered per-item
/// outcomes; nothing about an individual item is raised.
pub fn execute(
    plan: BatchPlan,
    scene: &dyn ObjectQuery,
    engine: &dyn WeightTransferEngine,
    undo: &dyn UndoHost,
) -> BatchReport {
    let op = plan.kind().as_str();
    log_op_start!(op, items = plan.len());

    let mut report = BatchReport::new();
    {
        let _chunk = UndoChunk::open(undo);

        for item in plan.into_items() {
            let outcome = run_item(item, scene, engine);
            match outcome.status {
                ItemStatus::Ok => info!(item = %outcome.label, "{}", outcome.message),
                ItemStatus::Skipped => warn!(item = %outcome.label, "{}", outcome.message),
                ItemStatus::Failed => error!(item = %outcome.label, "{}", outcome.message),
            }
            report.push(outcome);
        }
    }

    log_op_end!(op, summary = report.summary().as_str());
    report
}

fn run_item(
    item: PlanItem,
    scene: &dyn ObjectQuery,
    engine: &dyn WeightTransferEngine,
) -> ItemOutcome {
    let PlanItem { label, op } = item;

    match op {
        PlannedOp::TransferDeformerWeights(request) => {
            let message = deformer_audit_line(&request);
            engine_outcome(label, message, engine.transfer_deformer_weights(&request))
        }

        PlannedOp::FlipMesh { mesh } => {
            let message = format!("Flipped vertex positions on {}.", mesh);
            engine_outcome(label, message, engine.flip_mesh(&mesh))
        }

        PlannedOp::MirrorMesh { base, target } => {
            let message = format!("Mirrored vertex positions on {} from {}.", target, base);
            engine_outcome(label, message, engine.mirror_mesh(&base, &target))
        }

        PlannedOp::TransferSkinWeights {
            source_mesh,
            destination_mesh,
            settings,
        } => copy_skin_item(label, source_mesh, destination_mesh, settings, scene, engine),

        PlannedOp::MirrorSkinWeights { mesh, settings } => {
            let Some(binder) = scene.find_binder(&mesh) else {
                return skip_unskinned(label, &mesh);
            };
            let request = WeightTransferRequest::in_place(
                mesh.clone(),
                binder.clone(),
                TransferMode::Mirror,
                settings,
            );
            let message = format!("Mirrored skin weights on {} ({}).", mesh, binder);
            engine_outcome(label, message, engine.transfer_skin_weights(&request))
        }

        PlannedOp::SetInfluenceSymmetry { mesh, pattern } => {
            let Some(binder) = scene.find_binder(&mesh) else {
                return skip_unskinned(label, &mesh);
            };
            let message = format!(
                "Set influence symmetry on {} to ('{}', '{}').",
                binder, pattern.left, pattern.right
            );
            engine_outcome(label, message, engine.set_influence_symmetry(&binder, &pattern))
        }
    }
}

fn copy_skin_item(
    label: String,
    source_mesh: NodeHandle,
    destination_mesh: NodeHandle,
    settings: TransferSettings,
    scene: &dyn ObjectQuery,
    engine: &dyn WeightTransferEngine,
) -> ItemOutcome {
    // Both endpoints need a binder; either missing downgrades the item.
    let Some(source_binder) = scene.find_binder(&source_mesh) else {
        let err = SymError::NotConfigured {
            node: source_mesh.name().to_string(),
        };
        return ItemOutcome::skipped(label, err.to_string());
    };
    let Some(destination_binder) = scene.find_binder(&destination_mesh) else {
        let err = SymError::NotConfigured {
            node: destination_mesh.name().to_string(),
        };
        return ItemOutcome::skipped(label, err.to_string());
    };

    let message = format!(
        "Copied skin weights from {} ({}) to {} ({})",
        source_binder, source_mesh, destination_binder, destination_mesh
    );
    let request = WeightTransferRequest {
        source_mesh,
        source_operator: source_binder,
        destination_mesh,
        destination_operator: destination_binder,
        mode: TransferMode::Copy,
        settings,
    };
    engine_outcome(label, message, engine.transfer_skin_weights(&request))
}

fn deformer_audit_line(request: &WeightTransferRequest) -> String {
    match request.mode {
        TransferMode::Copy => format!(
            "Copied weights from {} ({}) to {} ({})",
            request.source_operator,
            request.source_mesh,
            request.destination_operator,
            request.destination_mesh
        ),
        TransferMode::Flip | TransferMode::Mirror => format!(
            "{} weights on {} ({}).",
            request.mode.past_tense(),
            request.destination_mesh,
            request.destination_operator
        ),
    }
}

fn engine_outcome(
    label: String,
    success_message: String,
    result: crate::engine::EngineResult,
) -> ItemOutcome {
    match result {
        Ok(()) => ItemOutcome::ok(label, success_message),
        Err(err) => {
            let err = SymError::ExternalOperation {
                target: label.clone(),
                message: err.message,
            };
            ItemOutcome::failed(label, err.to_string())
        }
    }
}

fn skip_unskinned(label: String, mesh: &NodeHandle) -> ItemOutcome {
    ItemOutcome::skipped(
        label,
        format!("Skipping '{}' since it is not skinned.", mesh),
    )
}
