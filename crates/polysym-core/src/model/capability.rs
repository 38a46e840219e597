use serde::{Deserialize, Serialize};

/// Node capability tested through the `ObjectQuery` boundary
///
/// Capabilities replace ad hoc type probes: the resolver filters a selection
/// with a single `has_capability` query instead of asking the host whether a
/// node supports a particular function set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Capability {
    /// Polygon surface that weights and vertex positions live on
    Mesh,
    /// Weighted deforming operator (generic weight-painted deformer)
    Operator,
    /// Skin-binding owner; the binder relationship is looked up separately
    Bindable,
}

impl Capability {
    /// Short name used in log fields and error messages
    pub fn as_str(&self) -> &'static str {
        match self {
            Capability::Mesh => "mesh",
            Capability::Operator => "operator",
            Capability::Bindable => "bindable",
        }
    }
}

impl std::fmt::Display for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
