//! Scene graph boundary
//!
//! The host's scene is consumed entirely through the `ObjectQuery` trait;
//! the core never walks the scene graph itself.

pub mod memory;

pub use memory::MemoryScene;

use crate::errors::Result;
use crate::model::{Capability, NodeHandle};

/// Read-only scene queries the resolver and executor depend on
///
/// Implementations wrap the host's object model. `MemoryScene` is the
/// reference implementation for tests and headless use.
pub trait ObjectQuery {
    /// Resolve a node name to a handle
    ///
    /// # Errors
    ///
    /// Returns `SymError::NameResolution` if no scene node matches `name`.
    fn resolve_by_name(&self, name: &str) -> Result<NodeHandle>;

    /// The active selection, in selection order
    fn active_selection(&self) -> Vec<NodeHandle>;

    /// Test whether a node has the given capability
    fn has_capability(&self, node: &NodeHandle, capability: Capability) -> bool;

    /// Relationship lookup: the skin binder deforming `mesh`, if any
    ///
    /// Unlike a capability test this is allowed to return `None`; callers
    /// treat "no binder" as a soft per-item condition, not an error.
    fn find_binder(&self, mesh: &NodeHandle) -> Option<NodeHandle>;
}
