//! Structured logging facility for polysym
//!
//! This module provides a canonical logging facility with:
//! - Single initialization point via `init(profile)`
//! - Structured logging macros (`log_op_start!`, `log_op_end!`, `log_op_error!`)
//! - Canonical schema constants for field keys and event names
//! - Test capture mode for deterministic assertions
//!
//! Batch audit lines (one info line per successful item) and skip warnings
//! are emitted through `tracing` by the executor; hosts that embed the core
//! route them to their own script-editor/log surface by installing a
//! subscriber instead of calling `init`.

pub mod init;
pub mod macros;
pub mod schema;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
