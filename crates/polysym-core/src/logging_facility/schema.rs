//! Canonical schema constants for structured logging
//!
//! These constants keep field keys consistent across the resolver, the
//! executor, and the options store.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";

// Operand identifiers
pub const FIELD_MESH: &str = "mesh";
pub const FIELD_OPERATOR: &str = "operator";
pub const FIELD_BINDER: &str = "binder";
pub const FIELD_COMMAND: &str = "command";

// Error fields
pub const FIELD_ERR_CODE: &str = "err_code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
