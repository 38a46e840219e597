//! Error taxonomy for polysym operations
//!
//! Every error that crosses the command façade surfaces to the caller as a
//! single human-readable `Display` message; the structured variants exist so
//! the executor and tests can classify failures without parsing text.

use thiserror::Error;

/// Result type alias using SymError
pub type Result<T> = std::result::Result<T, SymError>;

/// Error taxonomy for polysym operations
///
/// Propagation policy:
/// - `NameResolution`, `SelectionShape`, and `Arity` are raised before any
///   mutation and abort the whole call.
/// - `NotConfigured` for an individual batch item is downgraded to a warning
///   and the item is skipped; the batch continues.
/// - `Serialization` is always recovered locally by the options store and
///   never surfaces as a raised error.
/// - `ExternalOperation` for one item is recorded in the batch report but
///   does not block the remaining items.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SymError {
    /// Explicit operand name with no scene match
    #[error("No object matches name '{name}'")]
    NameResolution { name: String },

    /// Resolved operand counts violate an operation's cardinality contract
    #[error("{op}: {expected}")]
    SelectionShape {
        op: String,
        expected: String,
        actual: String,
    },

    /// Resolved group cannot be unpacked into the exact operand count
    #[error("{op}: must select exactly {expected} meshes (got {actual})")]
    Arity {
        op: String,
        expected: usize,
        actual: usize,
    },

    /// Expected relationship (e.g. skin binder) absent for one item
    #[error("'{node}' is not skinned")]
    NotConfigured { node: String },

    /// Options payload could not be encoded or decoded
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// The external engine command reported failure for one item
    #[error("Operation failed for '{target}': {message}")]
    ExternalOperation { target: String, message: String },

    /// Store backend fault (open, read, or write)
    #[error("Persistence error: {message}")]
    Persistence { message: String },

    /// Generic internal error
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl SymError {
    /// Get the stable error code for this error
    pub fn code(&self) -> &'static str {
        match self {
            SymError::NameResolution { .. } => "ERR_NAME_RESOLUTION",
            SymError::SelectionShape { .. } => "ERR_SELECTION_SHAPE",
            SymError::Arity { .. } => "ERR_ARITY",
            SymError::NotConfigured { .. } => "ERR_NOT_CONFIGURED",
            SymError::Serialization { .. } => "ERR_SERIALIZATION",
            SymError::ExternalOperation { .. } => "ERR_EXTERNAL_OPERATION",
            SymError::Persistence { .. } => "ERR_PERSISTENCE",
            SymError::Internal { .. } => "ERR_INTERNAL",
        }
    }
}

/// Conversion from serde_json::Error to SymError
impl From<serde_json::Error> for SymError {
    fn from(err: serde_json::Error) -> Self {
        SymError::Serialization {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_are_stable() {
        let cases = [
            (
                SymError::NameResolution {
                    name: "pCube1".into(),
                },
                "ERR_NAME_RESOLUTION",
            ),
            (
                SymError::NotConfigured {
                    node: "pCube1".into(),
                },
                "ERR_NOT_CONFIGURED",
            ),
            (
                SymError::Serialization {
                    message: "bad".into(),
                },
                "ERR_SERIALIZATION",
            ),
        ];
        for (err, expected_code) in cases {
            assert_eq!(err.code(), expected_code, "Wrong code for {:?}", err);
        }
    }

    #[test]
    fn test_name_resolution_display_matches_host_message() {
        let err = SymError::NameResolution {
            name: "pSphere3".into(),
        };
        assert_eq!(err.to_string(), "No object matches name 'pSphere3'");
    }

    #[test]
    fn test_serde_error_maps_to_serialization() {
        let bad = serde_json::from_str::<serde_json::Value>("{not json");
        let err: SymError = bad.unwrap_err().into();
        assert_eq!(err.code(), "ERR_SERIALIZATION");
    }
}
