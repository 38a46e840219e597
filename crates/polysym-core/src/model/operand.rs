use crate::model::{Capability, NodeHandle};

/// Ordered group of resolved operands of one capability kind
///
/// Order matches the caller-specified or active-selection encounter order.
/// Duplicates are not deduplicated: selecting a mesh twice pairs it twice.
/// Groups are created per invocation and discarded after the call.
#[derive(Debug, Clone, PartialEq)]
pub struct OperandGroup {
    capability: Capability,
    members: Vec<NodeHandle>,
}

impl OperandGroup {
    /// Create a group from already-filtered members
    pub fn new(capability: Capability, members: Vec<NodeHandle>) -> Self {
        Self {
            capability,
            members,
        }
    }

    /// Create an empty group of the given capability
    pub fn empty(capability: Capability) -> Self {
        Self::new(capability, Vec::new())
    }

    /// The capability every member was filtered by
    pub fn capability(&self) -> Capability {
        self.capability
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&NodeHandle> {
        self.members.get(index)
    }

    pub fn first(&self) -> Option<&NodeHandle> {
        self.members.first()
    }

    pub fn last(&self) -> Option<&NodeHandle> {
        self.members.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, NodeHandle> {
        self.members.iter()
    }

    pub fn as_slice(&self) -> &[NodeHandle] {
        &self.members
    }

    /// Consume the group, yielding its members in order
    pub fn into_members(self) -> Vec<NodeHandle> {
        self.members
    }
}
