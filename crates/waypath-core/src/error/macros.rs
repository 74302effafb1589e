//! Error macros for waypath

/// Macro for creating invalid value errors
#[macro_export]
macro_rules! bail_invalid {
    ($context:expr, $value:expr) => {
        return Err($crate::error::WaypathError::invalid_value($context, $value))
    };
}

/// Macro for creating malformed input errors
#[macro_export]
macro_rules! bail_malformed {
    ($context:expr, $reason:expr) => {
        return Err($crate::error::WaypathError::malformed($context, $reason))
    };
}
