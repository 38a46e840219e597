use serde::{Deserialize, Serialize};

use crate::model::NodeHandle;

/// Transfer direction across the symmetry axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// Left to right
    Forward,
    /// Right to left
    Reverse,
}

impl Direction {
    /// Wire encoding the engine command expects (`1` / `-1`)
    pub fn wire_value(&self) -> i32 {
        match self {
            Direction::Forward => 1,
            Direction::Reverse => -1,
        }
    }
}

impl Default for Direction {
    fn default() -> Self {
        Direction::Forward
    }
}

/// Weight table transform forwarded to the engine command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransferMode {
    Copy,
    Flip,
    Mirror,
}

impl TransferMode {
    /// Past-tense verb used in audit lines ("Copied weights on ...")
    pub fn past_tense(&self) -> &'static str {
        match self {
            TransferMode::Copy => "Copied",
            TransferMode::Flip => "Flipped",
            TransferMode::Mirror => "Mirrored",
        }
    }
}

/// Shell-style glob pair the engine uses to pair left/right influence names
///
/// The core stores and passes these verbatim; it performs no matching itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfluencePattern {
    pub left: String,
    pub right: String,
}

impl InfluencePattern {
    pub fn new(left: impl Into<String>, right: impl Into<String>) -> Self {
        Self {
            left: left.into(),
            right: right.into(),
        }
    }
}

impl Default for InfluencePattern {
    fn default() -> Self {
        Self::new("L_*", "R_*")
    }
}

/// Repeatable parameters shared by every weight transfer in one batch
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TransferSettings {
    pub direction: Direction,
    pub normalize: bool,
    /// Influence pairing patterns; `None` leaves pairing to the engine's
    /// joint labels
    pub influence_symmetry: Option<InfluencePattern>,
}

/// Fully-specified request for one external weight transfer call
///
/// Built by the pairing validator from resolved operands plus merged
/// options. Immutable once built; consumed exactly once by the executor.
/// For in-place operations source and destination name the same nodes; for
/// skin transfers the operators are the binders resolved at execution time.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightTransferRequest {
    pub source_mesh: NodeHandle,
    pub source_operator: NodeHandle,
    pub destination_mesh: NodeHandle,
    pub destination_operator: NodeHandle,
    pub mode: TransferMode,
    pub settings: TransferSettings,
}

impl WeightTransferRequest {
    /// In-place request: one mesh, one operator, source == destination
    pub fn in_place(
        mesh: NodeHandle,
        operator: NodeHandle,
        mode: TransferMode,
        settings: TransferSettings,
    ) -> Self {
        Self {
            source_mesh: mesh.clone(),
            source_operator: operator.clone(),
            destination_mesh: mesh,
            destination_operator: operator,
            mode,
            settings,
        }
    }
}
