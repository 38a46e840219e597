use crate::model::{InfluencePattern, NodeHandle, TransferSettings, WeightTransferRequest};

/// Public operation kinds exposed by the command façade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    CopyDeformerWeights,
    FlipDeformerWeights,
    MirrorDeformerWeights,
    FlipMesh,
    MirrorMesh,
    CopySkinWeights,
    MirrorSkinWeights,
    SetInfluenceSymmetry,
}

impl OperationKind {
    /// Command-style name used in log fields and error messages
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationKind::CopyDeformerWeights => "copyDeformerWeights",
            OperationKind::FlipDeformerWeights => "flipDeformerWeights",
            OperationKind::MirrorDeformerWeights => "mirrorDeformerWeights",
            OperationKind::FlipMesh => "flipMesh",
            OperationKind::MirrorMesh => "mirrorMesh",
            OperationKind::CopySkinWeights => "copySkinWeights",
            OperationKind::MirrorSkinWeights => "mirrorSkinWeights",
            OperationKind::SetInfluenceSymmetry => "setInfluenceSymmetry",
        }
    }
}

impl std::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One executable step of a validated batch plan
///
/// Skin variants carry meshes only: the binder is a per-item relationship the
/// executor resolves at execution time, so a missing binder can downgrade one
/// item without invalidating the plan.
#[derive(Debug, Clone, PartialEq)]
pub enum PlannedOp {
    TransferDeformerWeights(WeightTransferRequest),
    FlipMesh {
        mesh: NodeHandle,
    },
    MirrorMesh {
        base: NodeHandle,
        target: NodeHandle,
    },
    TransferSkinWeights {
        source_mesh: NodeHandle,
        destination_mesh: NodeHandle,
        settings: TransferSettings,
    },
    MirrorSkinWeights {
        mesh: NodeHandle,
        settings: TransferSettings,
    },
    SetInfluenceSymmetry {
        mesh: NodeHandle,
        pattern: InfluencePattern,
    },
}

/// A planned operation plus the target label it is reported under
#[derive(Debug, Clone, PartialEq)]
pub struct PlanItem {
    pub label: String,
    pub op: PlannedOp,
}

impl PlanItem {
    pub fn new(label: impl Into<String>, op: PlannedOp) -> Self {
        Self {
            label: label.into(),
            op,
        }
    }
}

/// Ordered, validated sequence of operations executed as one transaction
///
/// A plan only exists after the pairing validator accepted the operand
/// groups; building one performs zero mutation.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchPlan {
    kind: OperationKind,
    items: Vec<PlanItem>,
}

impl BatchPlan {
    pub fn new(kind: OperationKind, items: Vec<PlanItem>) -> Self {
        Self { kind, items }
    }

    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[PlanItem] {
        &self.items
    }

    /// Consume the plan, yielding its items in order
    pub fn into_items(self) -> Vec<PlanItem> {
        self.items
    }
}
