//! Logging abstraction
//!
//! Provides the crate's logging macros. All of them forward to the `log`
//! facade under the `tour_guide` target, so the host decides where records
//! go (serial console, RTT, a file, or nowhere when no logger is installed).
//!
//! Use them the same way everywhere in the crate:
//!
//! ```ignore
//! crate::log_info!("Mode transition: {} -> {}", from, to);
//! ```

/// Log target shared by every record this crate emits
pub const LOG_TARGET: &str = "tour_guide";

/// Log warning message
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {{
        ::log::warn!(target: $crate::logging::LOG_TARGET, $($arg)*);
    }};
}

/// Log informational message
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {{
        ::log::info!(target: $crate::logging::LOG_TARGET, $($arg)*);
    }};
}

/// Log debug message
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {{
        ::log::debug!(target: $crate::logging::LOG_TARGET, $($arg)*);
    }};
}

/// Log trace message
#[macro_export]
macro_rules! log_trace {
    ($($arg:tt)*) => {{
        ::log::trace!(target: $crate::logging::LOG_TARGET, $($arg)*);
    }};
}
