//! Pairing validation
//!
//! Enforces per-operation cardinality rules over resolved operand groups and
//! builds the batch plan. Validation runs entirely before any external
//! command: a violated rule aborts the call with zero mutation.

use crate::errors::{Result, SymError};
use crate::model::{
    BatchPlan, OperandGroup, OperationKind, PlanItem, PlannedOp, TransferMode, TransferSettings,
    WeightTransferRequest,
};

/// Validate operand groups for `kind` and build the batch plan
///
/// `operators` is consulted only by the deformer-weights kinds; mesh and
/// skin kinds pair meshes against their own relationships instead. The
/// shared `settings` parameterize every transfer request in the plan.
///
/// Cardinality rules:
///
/// | kind | meshes | operators |
/// |---|---|---|
/// | CopyDeformerWeights | 1 or 2 | exactly 2 |
/// | Flip/MirrorDeformerWeights | N >= 1 | N |
/// | FlipMesh | N >= 1 | - |
/// | MirrorMesh | N >= 2 | - |
/// | CopySkinWeights | exactly 2 | - |
/// | MirrorSkinWeights | N >= 1 | - |
/// | SetInfluenceSymmetry | N >= 1 | - |
///
/// # Errors
///
/// `SymError::SelectionShape` for a violated rule; `SymError::Arity` when a
/// copy-skin-weights group cannot be unpacked into exactly two meshes.
pub fn validate(
    kind: OperationKind,
    meshes: &OperandGroup,
    operators: &OperandGroup,
    settings: &TransferSettings,
) -> Result<BatchPlan> {
    let items = match kind {
        OperationKind::CopyDeformerWeights => copy_deformer_items(meshes, operators, settings)?,
        OperationKind::FlipDeformerWeights => {
            paired_deformer_items(kind, meshes, operators, TransferMode::Flip, settings)?
        }
        OperationKind::MirrorDeformerWeights => {
            paired_deformer_items(kind, meshes, operators, TransferMode::Mirror, settings)?
        }
        OperationKind::FlipMesh => flip_mesh_items(meshes)?,
        OperationKind::MirrorMesh => mirror_mesh_items(meshes)?,
        OperationKind::CopySkinWeights => copy_skin_items(meshes, settings)?,
        OperationKind::MirrorSkinWeights => mirror_skin_items(meshes, settings)?,
        OperationKind::SetInfluenceSymmetry => influence_items(meshes, settings)?,
    };

    Ok(BatchPlan::new(kind, items))
}

fn copy_deformer_items(
    meshes: &OperandGroup,
    operators: &OperandGroup,
    settings: &TransferSettings,
) -> Result<Vec<PlanItem>> {
    const EXPECTED: &str = "Must select a source mesh, a destination mesh (optional), \
                            a source deformer, and a destination deformer.";

    // A single mesh is both source and destination.
    let (source_mesh, destination_mesh) = match meshes.as_slice() {
        [only] => (only.clone(), only.clone()),
        [source, destination] => (source.clone(), destination.clone()),
        _ => return Err(mixed_shape_error(OperationKind::CopyDeformerWeights, EXPECTED, meshes, operators)),
    };
    let [source_operator, destination_operator] = operators.as_slice() else {
        return Err(mixed_shape_error(
            OperationKind::CopyDeformerWeights,
            EXPECTED,
            meshes,
            operators,
        ));
    };

    let request = WeightTransferRequest {
        source_mesh,
        source_operator: source_operator.clone(),
        destination_mesh: destination_mesh.clone(),
        destination_operator: destination_operator.clone(),
        mode: TransferMode::Copy,
        settings: settings.clone(),
    };

    Ok(vec![PlanItem::new(
        destination_mesh.name(),
        PlannedOp::TransferDeformerWeights(request),
    )])
}

fn paired_deformer_items(
    kind: OperationKind,
    meshes: &OperandGroup,
    operators: &OperandGroup,
    mode: TransferMode,
    settings: &TransferSettings,
) -> Result<Vec<PlanItem>> {
    if meshes.is_empty() || operators.is_empty() {
        return Err(mixed_shape_error(
            kind,
            "Must select at least one mesh and one deformer.",
            meshes,
            operators,
        ));
    }
    if meshes.len() != operators.len() {
        return Err(mixed_shape_error(
            kind,
            "Must select exactly one deformer per mesh.",
            meshes,
            operators,
        ));
    }

    Ok(meshes
        .iter()
        .zip(operators.iter())
        .map(|(mesh, operator)| {
            PlanItem::new(
                mesh.name(),
                PlannedOp::TransferDeformerWeights(WeightTransferRequest::in_place(
                    mesh.clone(),
                    operator.clone(),
                    mode,
                    settings.clone(),
                )),
            )
        })
        .collect())
}

fn flip_mesh_items(meshes: &OperandGroup) -> Result<Vec<PlanItem>> {
    if meshes.is_empty() {
        return Err(mesh_shape_error(
            OperationKind::FlipMesh,
            "Select a mesh and try again.",
            meshes,
        ));
    }

    Ok(meshes
        .iter()
        .map(|mesh| PlanItem::new(mesh.name(), PlannedOp::FlipMesh { mesh: mesh.clone() }))
        .collect())
}

fn mirror_mesh_items(meshes: &OperandGroup) -> Result<Vec<PlanItem>> {
    match meshes.as_slice() {
        [base, targets @ ..] if !targets.is_empty() => Ok(targets
            .iter()
            .map(|target| {
                PlanItem::new(
                    target.name(),
                    PlannedOp::MirrorMesh {
                        base: base.clone(),
                        target: target.clone(),
                    },
                )
            })
            .collect()),
        _ => Err(mesh_shape_error(
            OperationKind::MirrorMesh,
            "Select a base mesh and a target mesh and try again.",
            meshes,
        )),
    }
}

fn copy_skin_items(meshes: &OperandGroup, settings: &TransferSettings) -> Result<Vec<PlanItem>> {
    let [source_mesh, destination_mesh] = meshes.as_slice() else {
        return Err(SymError::Arity {
            op: OperationKind::CopySkinWeights.as_str().to_string(),
            expected: 2,
            actual: meshes.len(),
        });
    };

    Ok(vec![PlanItem::new(
        destination_mesh.name(),
        PlannedOp::TransferSkinWeights {
            source_mesh: source_mesh.clone(),
            destination_mesh: destination_mesh.clone(),
            settings: settings.clone(),
        },
    )])
}

fn mirror_skin_items(meshes: &OperandGroup, settings: &TransferSettings) -> Result<Vec<PlanItem>> {
    if meshes.is_empty() {
        return Err(mesh_shape_error(
            OperationKind::MirrorSkinWeights,
            "Select a skinned mesh and try again.",
            meshes,
        ));
    }

    Ok(meshes
        .iter()
        .map(|mesh| {
            PlanItem::new(
                mesh.name(),
                PlannedOp::MirrorSkinWeights {
                    mesh: mesh.clone(),
                    settings: settings.clone(),
                },
            )
        })
        .collect())
}

fn influence_items(meshes: &OperandGroup, settings: &TransferSettings) -> Result<Vec<PlanItem>> {
    if meshes.is_empty() {
        return Err(mesh_shape_error(
            OperationKind::SetInfluenceSymmetry,
            "Select a skinned mesh and try again.",
            meshes,
        ));
    }

    let pattern = settings.influence_symmetry.clone().unwrap_or_default();
    Ok(meshes
        .iter()
        .map(|mesh| {
            PlanItem::new(
                mesh.name(),
                PlannedOp::SetInfluenceSymmetry {
                    mesh: mesh.clone(),
                    pattern: pattern.clone(),
                },
            )
        })
        .collect())
}

fn mixed_shape_error(
    kind: OperationKind,
    expected: &str,
    meshes: &OperandGroup,
    operators: &OperandGroup,
) -> SymError {
    SymError::SelectionShape {
        op: kind.as_str().to_string(),
        expected: expected.to_string(),
        actual: format!(
            "{} mesh(es) and {} deformer(s)",
            meshes.len(),
            operators.len()
        ),
    }
}

fn mesh_shape_error(kind: OperationKind, expected: &str, meshes: &OperandGroup) -> SymError {
    SymError::SelectionShape {
        op: kind.as_str().to_string(),
        expected: expected.to_string(),
        actual: format!("{} mesh(es)", meshes.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Capability, NodeHandle};

    fn group(capability: Capability, names: &[&str]) -> OperandGroup {
        OperandGroup::new(capability, names.iter().map(|n| NodeHandle::new(*n)).collect())
    }

    fn meshes(names: &[&str]) -> OperandGroup {
        group(Capability::Mesh, names)
    }

    fn operators(names: &[&str]) -> OperandGroup {
        group(Capability::Operator, names)
    }

    #[test]
    fn test_copy_deformer_single_mesh_is_source_and_destination() {
        let plan = validate(
            OperationKind::CopyDeformerWeights,
            &meshes(&["m"]),
            &operators(&["d1", "d2"]),
            &TransferSettings::default(),
        )
        .unwrap();

        assert_eq!(plan.len(), 1);
        match &plan.items()[0].op {
            PlannedOp::TransferDeformerWeights(req) => {
                assert_eq!(req.source_mesh.name(), "m");
                assert_eq!(req.destination_mesh.name(), "m");
                assert_eq!(req.source_operator.name(), "d1");
                assert_eq!(req.destination_operator.name(), "d2");
                assert_eq!(req.mode, TransferMode::Copy);
            }
            other => panic!("Wrong planned op: {:?}", other),
        }
    }

    #[test]
    fn test_copy_deformer_wrong_operator_count_fails() {
        let err = validate(
            OperationKind::CopyDeformerWeights,
            &meshes(&["m"]),
            &operators(&["d1"]),
            &TransferSettings::default(),
        )
        .unwrap_err();
        assert_eq!(err.code(), "ERR_SELECTION_SHAPE");
    }

    #[test]
    fn test_paired_deformer_count_mismatch_fails() {
        let err = validate(
            OperationKind::MirrorDeformerWeights,
            &meshes(&["m1", "m2"]),
            &operators(&["d1"]),
            &TransferSettings::default(),
        )
        .unwrap_err();
        assert!(
            matches!(err, SymError::SelectionShape { ref expected, .. }
                if expected == "Must select exactly one deformer per mesh.")
        );
    }

    #[test]
    fn test_paired_deformer_zips_one_to_one() {
        let plan = validate(
            OperationKind::FlipDeformerWeights,
            &meshes(&["m1", "m2"]),
            &operators(&["d1", "d2"]),
            &TransferSettings::default(),
        )
        .unwrap();

        assert_eq!(plan.len(), 2);
        let labels: Vec<&str> = plan.items().iter().map(|i| i.label.as_str()).collect();
        assert_eq!(labels, ["m1", "m2"]);
    }

    #[test]
    fn test_mirror_mesh_first_is_base() {
        let plan = validate(
            OperationKind::MirrorMesh,
            &meshes(&["base", "t1", "t2"]),
            &OperandGroup::empty(Capability::Operator),
            &TransferSettings::default(),
        )
        .unwrap();

        assert_eq!(plan.len(), 2);
        for item in plan.items() {
            match &item.op {
                PlannedOp::MirrorMesh { base, .. } => assert_eq!(base.name(), "base"),
                other => panic!("Wrong planned op: {:?}", other),
            }
        }
    }

    #[test]
    fn test_mirror_mesh_requires_two() {
        let err = validate(
            OperationKind::MirrorMesh,
            &meshes(&["only"]),
            &OperandGroup::empty(Capability::Operator),
            &TransferSettings::default(),
        )
        .unwrap_err();
        assert!(matches!(err, SymError::SelectionShape { ref actual, .. } if actual == "1 mesh(es)"));
    }

    #[test]
    fn test_copy_skin_arity_is_distinct() {
        let err = validate(
            OperationKind::CopySkinWeights,
            &meshes(&["a", "b", "c"]),
            &OperandGroup::empty(Capability::Operator),
            &TransferSettings::default(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            SymError::Arity {
                expected: 2,
                actual: 3,
                ..
            }
        ));
    }

    #[test]
    fn test_mirror_skin_plans_every_mesh() {
        let plan = validate(
            OperationKind::MirrorSkinWeights,
            &meshes(&["m1", "m2", "m3"]),
            &OperandGroup::empty(Capability::Operator),
            &TransferSettings::default(),
        )
        .unwrap();
        assert_eq!(plan.len(), 3);
    }

    #[test]
    fn test_set_influence_symmetry_defaults_pattern() {
        let plan = validate(
            OperationKind::SetInfluenceSymmetry,
            &meshes(&["m"]),
            &OperandGroup::empty(Capability::Operator),
            &TransferSettings::default(),
        )
        .unwrap();
        match &plan.items()[0].op {
            PlannedOp::SetInfluenceSymmetry { pattern, .. } => {
                assert_eq!(pattern.left, "L_*");
                assert_eq!(pattern.right, "R_*");
            }
            other => panic!("Wrong planned op: {:?}", other),
        }
    }
}
