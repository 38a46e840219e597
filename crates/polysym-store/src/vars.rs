//! Option-var key-value boundary
//!
//! The host's persistent preference store is consumed as a plain
//! string-keyed, string-valued map. The profile layer serializes its own
//! structured mapping into the value.

use std::collections::BTreeMap;

use polysym_core::Result;

/// String key-value store the options profiles persist into
///
/// Implementations wrap the host's preference store. `MemoryOptionVars` is
/// the reference implementation for tests; `SqliteOptionVars` persists to
/// disk for headless use.
pub trait OptionVars {
    /// Read the stored value for `key`, if any
    ///
    /// # Errors
    ///
    /// Returns `SymError::Persistence` on a backend read fault.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write `value` under `key`, replacing any previous value
    ///
    /// # Errors
    ///
    /// Returns `SymError::Persistence` on a backend write fault.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`; returns whether a value was present
    ///
    /// # Errors
    ///
    /// Returns `SymError::Persistence` on a backend write fault.
    fn remove(&mut self, key: &str) -> Result<bool>;
}

/// In-memory option-var store
///
/// BTreeMap-backed, single-threaded, never fails. Values do not survive the
/// process; tests and dry runs use this.
#[derive(Debug, Clone, Default)]
pub struct MemoryOptionVars {
    values: BTreeMap<String, String>,
}

impl MemoryOptionVars {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored vars
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl OptionVars for MemoryOptionVars {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<bool> {
        Ok(self.values.remove(key).is_some())
    }
}
