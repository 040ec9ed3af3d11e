//! Error macros for multitrail

/// Macro for returning a parse error from the current function
#[macro_export]
macro_rules! bail_parse {
    ($line:expr, $($arg:tt)+) => {
        return Err($crate::error::TrailError::parse($line, format!($($arg)+)))
    };
}

/// Macro for returning an invalid reference error
#[macro_export]
macro_rules! bail_invalid_reference {
    ($vertex:expr) => {
        return Err($crate::error::TrailError::invalid_reference($vertex))
    };
}
