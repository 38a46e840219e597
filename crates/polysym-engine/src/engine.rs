//! External weight-transfer engine boundary
//!
//! The native engine commands perform all geometric and weight computation;
//! this crate treats them as a black box that either succeeds silently or
//! fails with an operation-specific message.

use thiserror::Error;

use polysym_core::{InfluencePattern, NodeHandle, WeightTransferRequest};

/// Opaque failure reported by an engine command
///
/// Only the textual message is interpreted; the executor records it against
/// the failing item and moves on.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct EngineError {
    pub message: String,
}

impl EngineError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Result type for engine command invocations
pub type EngineResult = std::result::Result<(), EngineError>;

/// Boundary to the native weight-transfer and mirroring commands
///
/// Implementations wrap the host's command layer. Each call is assumed to be
/// transactional at the single-call level; batching and undo scoping happen
/// above this trait.
pub trait WeightTransferEngine {
    /// Copy/flip/mirror deformer weights per `request`
    fn transfer_deformer_weights(&self, request: &WeightTransferRequest) -> EngineResult;

    /// Copy/flip/mirror skin weights per `request`; the operators are the
    /// source and destination binders
    fn transfer_skin_weights(&self, request: &WeightTransferRequest) -> EngineResult;

    /// Flip vertex positions of `mesh` in place, in object space
    fn flip_mesh(&self, mesh: &NodeHandle) -> EngineResult;

    /// Mirror vertex positions of `target` using `base` as the symmetric
    /// reference
    fn mirror_mesh(&self, base: &NodeHandle, target: &NodeHandle) -> EngineResult;

    /// Apply the left/right influence pairing patterns to `skin`
    fn set_influence_symmetry(&self, skin: &NodeHandle, pattern: &InfluencePattern)
        -> EngineResult;

    /// Query the influence pairs of `skin` as (lhs, rhs) name tuples
    ///
    /// # Errors
    ///
    /// Returns `EngineError` when the query fails for the binder.
    fn influence_symmetry(
        &self,
        skin: &NodeHandle,
    ) -> std::result::Result<Vec<(String, String)>, EngineError>;
}

/// Engine implementation that accepts every call and does nothing
///
/// Useful for plan-only dry runs and wiring tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopEngine;

impl WeightTransferEngine for NoopEngine {
    fn transfer_deformer_weights(&self, _request: &WeightTransferRequest) -> EngineResult {
        Ok(())
    }

    fn transfer_skin_weights(&self, _request: &WeightTransferRequest) -> EngineResult {
        Ok(())
    }

    fn flip_mesh(&self, _mesh: &NodeHandle) -> EngineResult {
        Ok(())
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
