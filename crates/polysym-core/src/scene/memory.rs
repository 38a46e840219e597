use std::collections::HashMap;

use crate::errors::{Result, SymError};
use crate::model::{Capability, NodeHandle};
use crate::scene::ObjectQuery;

/// One registered node: its capabilities and optional binder relationship
#[derive(Debug, Clone, Default)]
struct SceneNode {
    capabilities: Vec<Capability>,
    binder: Option<String>,
}

/// In-memory reference scene
///
/// HashMap-backed, single-threaded (no Arc/RwLock), mirroring how the host
/// serializes UI-originated calls. Used by tests and headless tooling; a
/// real plugin adapts the host's object model to `ObjectQuery` instead.
#[derive(Debug, Clone, Default)]
pub struct MemoryScene {
    nodes: HashMap<String, SceneNode>,
    selection: Vec<String>,
}

impl MemoryScene {
    /// Create a new empty scene
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a polygon mesh
    pub fn add_mesh(&mut self, name: &str) -> NodeHandle {
        self.add_node(name, vec![Capability::Mesh])
    }

    /// Register a weighted deforming operator
    pub fn add_operator(&mut self, name: &str) -> NodeHandle {
        self.add_node(name, vec![Capability::Operator])
    }

    /// Register a skin-binding node (an operator that owns a binding)
    pub fn add_skin(&mut self, name: &str) -> NodeHandle {
        self.add_node(name, vec![Capability::Operator, Capability::Bindable])
    }

    /// Register a mesh deformed by `skin`; registers both nodes as needed
    pub fn add_skinned_mesh(&mut self, mesh: &str, skin: &str) -> NodeHandle {
        self.add_skin(skin);
        let handle = self.add_mesh(mesh);
        if let Some(node) = self.nodes.get_mut(mesh) {
            node.binder = Some(skin.to_string());
        }
        handle
    }

    /// Replace the active selection, in the given order
    ///
    /// Names must already be registered; unknown names are ignored so test
    /// setup mistakes surface as empty resolutions rather than panics.
    pub fn select(&mut self, names: &[&str]) {
        self.selection = names
            .iter()
            .filter(|n| self.nodes.contains_key(**n))
            .map(|n| n.to_string())
            .collect();
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    fn add_node(&mut self, name: &str, capabilities: Vec<Capability>) -> NodeHandle {
        let node = self.nodes.entry(name.to_string()).or_default();
        for capability in capabilities {
            if !node.capabilities.contains(&capability) {
                node.capabilities.push(capability);
            }
        }
        NodeHandle::new(name)
    }
}

impl ObjectQuery for MemoryScene {
    fn resolve_by_name(&self, name: &str) -> Result<NodeHandle> {
        if self.nodes.contains_key(name) {
            Ok(NodeHandle::new(name))
        } else {
            Err(SymError::NameResolution {
                name: name.to_string(),
            })
        }
    }

    fn active_selection(&self) -> Vec<NodeHandle> {
        self.selection.iter().map(NodeHandle::new).collect()
    }

    fn has_capability(&self, node: &NodeHandle, capability: Capability) -> bool {
        self.nodes
            .get(node.name())
            .is_some_and(|n| n.capabilities.contains(&capability))
    }

    fn find_binder(&self, mesh: &NodeHandle) -> Option<NodeHandle> {
        self.nodes
            .get(mesh.name())
            .and_then(|n| n.binder.as_deref())
            .map(NodeHandle::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_unknown_name_fails() {
        let scene = MemoryScene::new();
        let err = scene.resolve_by_name("ghost").unwrap_err();
        assert_eq!(err.code(), "ERR_NAME_RESOLUTION");
    }

    #[test]
    fn test_selection_preserves_order() {
        let mut scene = MemoryScene::new();
        scene.add_mesh("b");
        scene.add_mesh("a");
        scene.select(&["a", "b"]);
        let names: Vec<String> = scene
            .active_selection()
            .iter()
            .map(|h| h.name().to_string())
            .collect();
        assert_eq!(names, ["a", "b"]);
    }

    #[test]
    fn test_skinned_mesh_has_binder() {
        let mut scene = MemoryScene::new();
        let mesh = scene.add_skinned_mesh("body", "bodySkin");
        let binder = scene.find_binder(&mesh).unwrap();
        assert_eq!(binder.name(), "bodySkin");
        assert!(scene.has_capability(&binder, Capability::Bindable));
        assert!(scene.has_capability(&binder, Capability::Operator));
    }

    #[test]
    fn test_plain_mesh_has_no_binder() {
        let mut scene = MemoryScene::new();
        let mesh = scene.add_mesh("prop");
        assert!(scene.find_binder(&mesh).is_none());
    }
}
