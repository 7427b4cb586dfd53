//! Error macros for waypath

/// Macro for creating usage errors
#[macro_export]
macro_rules! bail_usage {
    ($msg:expr) => {
        return Err($crate::error::WaypathError::UsageError($msg.to_string()))
    };
}

/// Macro for bailing out on a malformed dataset record
#[macro_export]
macro_rules! bail_record {
    ($dataset:expr, $line:expr, $reason:expr) => {
        return Err($crate::error::WaypathError::invalid_record(
            $dataset, $line, $reason,
        ))
    };
}
