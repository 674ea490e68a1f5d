//! crates/logging/src/tracing_macros.rs
//! Convenience macros for crc-hash tracing.
//!
//! These macros wrap the standard tracing macros with the targets that
//! [`DebugFlag::target`](crate::DebugFlag::target) names, so the filters built
//! by [`VerbosityConfig::directives`](crate::VerbosityConfig::directives)
//! apply to them. Callers must depend on `tracing` themselves.

/// Emit an algorithm resolution trace.
///
/// # Example
/// ```ignore
/// trace_registry!("resolved {:?} to {}", name, algorithm);
/// ```
#[macro_export]
macro_rules! trace_registry {
    ($($arg:tt)*) => {
        ::tracing::info!(target: "crc_hash::registry", $($arg)*);
    };
}

/// Emit a chunk accumulation or finalization trace.
///
/// # Example
/// ```ignore
/// trace_hash!("{} absorbed {} bytes", algorithm, chunk.len());
/// ```
#[macro_export]
macro_rules! trace_hash {
    ($($arg:tt)*) => {
        ::tracing::debug!(target: "crc_hash::hash", $($arg)*);
    };
}

/// Emit an I/O trace.
///
/// # Example
/// ```ignore
/// trace_io!("read {} bytes", total);
/// ```
#[macro_export]
macro_rules! trace_io {
    ($($arg:tt)*) => {
        ::tracing::trace!(target: "crc_hash::io", $($arg)*);
    };
}
