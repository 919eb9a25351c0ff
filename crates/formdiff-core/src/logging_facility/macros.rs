//! Operation boundary macros
//!
//! Every event carries `component`, `op` and `event`; `event` is one of the
//! schema constants so log consumers can pair starts with ends.

/// Log the start of an operation, with optional extra fields
///
/// ```
/// # use formdiff_core::log_op_start;
/// log_op_start!("diff_snapshots");
/// log_op_start!("diff_snapshots", before_bytes = 128, after_bytes = 96);
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr $(, $($field:tt)+)?) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_START,
            $($($field)+)?
        )
    };
}

/// Log the successful end of an operation
///
/// `duration_ms` is mandatory; change-set counts or other fields may follow.
///
/// ```
/// # use formdiff_core::log_op_end;
/// log_op_end!("diff_snapshots", duration_ms = 3, settings_changes = 1);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr $(, $($field:tt)+)?) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_END,
            duration_ms = $duration,
            $($($field)+)?
        )
    };
}

/// Log a failed operation with the stable error kind and code
///
/// ```
/// # use formdiff_core::{log_op_error, errors::FormDiffError};
/// log_op_error!("diff_snapshots", FormDiffError::SnapshotNotObject, duration_ms = 1);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {{
        let err: $crate::errors::ExError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err.kind = ?err.kind(),
            err.code = err.code(),
        )
    }};
}
