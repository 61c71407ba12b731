//! Logging abstraction
//!
//! Unified logging macros for every target:
//! - Host (`log` feature, enabled by `std`): forwards to the `log` facade
//! - Embedded (`defmt` feature): forwards to `defmt`
//! - Neither: compiled out, arguments are type-checked but never evaluated
//!
//! Arguments must implement both `Display` and `defmt::Format` so the same
//! call site builds for either backend.

#[doc(hidden)]
#[cfg(feature = "log")]
pub use log as __log;

#[doc(hidden)]
#[cfg(all(feature = "defmt", not(feature = "log")))]
pub use defmt as __defmt;

/// Log at error level
#[cfg(feature = "log")]
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => { $crate::logging::__log::error!($($arg)*) };
}

/// Log at error level
#[cfg(all(feature = "defmt", not(feature = "log")))]
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => { $crate::logging::__defmt::error!($($arg)*) };
}

/// Log at error level
#[cfg(not(any(feature = "log", feature = "defmt")))]
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {{
        if false {
            let _ = core::format_args!($($arg)*);
        }
    }};
}

/// Log at warn level
#[cfg(feature = "log")]
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => { $crate::logging::__log::warn!($($arg)*) };
}

/// Log at warn level
#[cfg(all(feature = "defmt", not(feature = "log")))]
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => { $crate::logging::__defmt::warn!($($arg)*) };
}

/// Log at warn level
#[cfg(not(any(feature = "log", feature = "defmt")))]
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {{
        if false {
            let _ = core::format_args!($($arg)*);
        }
    }};
}

/// Log at info level
#[cfg(feature = "log")]
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => { $crate::logging::__log::info!($($arg)*) };
}

/// Log at info level
#[cfg(all(feature = "defmt", not(feature = "log")))]
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => { $crate::logging::__defmt::info!($($arg)*) };
}

/// Log at info level
#[cfg(not(any(feature = "log", feature = "defmt")))]
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {{
        if false {
            let _ = core::format_args!($($arg)*);
        }
    }};
}

/// Log at debug level
#[cfg(feature = "log")]
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => { $crate::logging::__log::debug!($($arg)*) };
}

/// Log at debug level
#[cfg(all(feature = "defmt", not(feature = "log")))]
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => { $crate::logging::__defmt::debug!($($arg)*) };
}

/// Log at debug level
#[cfg(not(any(feature = "log", feature = "defmt")))]
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {{
        if false {
            let _ = core::format_args!($($arg)*);
        }
    }};
}
