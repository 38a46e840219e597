//! polysym Store - options-profile persistence layer
//!
//! Provides:
//! - The `OptionVars` string key-value boundary over the host's persistent
//!   preference store
//! - An in-memory implementation for tests and a SQLite-backed one for
//!   headless/durable use
//! - Named options-profile load/save/reset with default-fallback and
//!   corruption recovery

pub mod profile;
pub mod sqlite;
pub mod vars;

// Re-export key types
pub use profile::{delete_options, load_options, option_var_name, save_options, ProfileMap};
pub use sqlite::SqliteOptionVars;
pub use vars::{MemoryOptionVars, OptionVars};
