use serde::{Deserialize, Serialize};

/// Stable handle to a resolved scene node
///
/// A handle is only obtained through `ObjectQuery` (by-name resolution or the
/// active selection), so holding one means the node existed at resolution
/// time. The wrapped name is the host's scene-unique node name and is what
/// every audit line and error message prints.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeHandle {
    name: String,
}

impl NodeHandle {
    /// Create a handle for a resolved node name
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The scene-unique node name
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Display for NodeHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_displays_bare_name() {
        let handle = NodeHandle::new("L_arm_mesh");
        assert_eq!(handle.to_string(), "L_arm_mesh");
        assert_eq!(handle.name(), "L_arm_mesh");
    }

    #[test]
    fn test_handles_compare_by_name() {
        assert_eq!(NodeHandle::new("a"), NodeHandle::new("a"));
        assert_ne!(NodeHandle::new("a"), NodeHandle::new("b"));
    }
}
