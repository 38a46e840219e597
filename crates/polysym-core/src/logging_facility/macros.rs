//! Canonical logging macros
//!
//! These macros provide a structured, consistent way to log façade
//! operations.

/// Log the start of an operation
///
/// # Example
///
/// ```
/// # use polysym_core::log_op_start;
/// log_op_start!("mirrorSkinWeights");
/// log_op_start!("mirrorSkinWeights", mesh = "body");
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::logging_facility::schema::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::logging_facility::schema::EVENT_START,
            $($field)*
        );
    };
}

/// Log the successful end of an operation
///
/// # Example
///
/// ```
/// # use polysym_core::log_op_end;
/// log_op_end!("mirrorSkinWeights", summary = "2 ok, 1 skipped, 0 failed");
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::logging_facility::schema::EVENT_END,
        );
    };
    ($op:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::logging_facility::schema::EVENT_END,
            $($field)*
        );
    };
}

/// Log an operation error
///
/// # Example
///
/// ```
/// # use polysym_core::{log_op_error, SymError};
/// let err = SymError::NameResolution { name: "pCube1".to_string() };
/// log_op_error!("flipMesh", err);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr) => {{
        let err: &$crate::SymError = &$err;
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = $crate::logging_facility::schema::EVENT_END_ERROR,
            err_code = err.code(),
            message = %err,
        );
    }};
    ($op:expr, $err:expr, $($field:tt)*) => {{
        let err: &$crate::SymError = &$err;
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = $crate::logging_facility::schema::EVENT_END_ERROR,
            err_code = err.code(),
            message = %err,
            $($field)*
        );
    }};
}
