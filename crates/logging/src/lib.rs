#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging` holds the diagnostic plumbing shared by the crc-hash workspace:
//! per-subsystem [`DebugFlag`]s with numeric levels, a [`VerbosityConfig`]
//! built from `-v` counts and `--debug` tokens, and target-scoped tracing
//! macros ([`trace_hash!`], [`trace_registry!`], [`trace_io!`]).
//!
//! # Design
//!
//! Library crates only emit events through the macros. Binaries decide
//! whether anything is printed by installing a subscriber with
//! `init_tracing` (behind the `tracing` feature), which renders the
//! configuration into an `EnvFilter`.
//!
//! # Examples
//!
//! ```
//! use logging::{DebugFlag, VerbosityConfig};
//!
//! let mut config = VerbosityConfig::from_verbose_level(1);
//! config.apply_debug_flag("io3").unwrap();
//! assert_eq!(config.debug.get(DebugFlag::Io), 3);
//! assert!(config.directives().contains("crc_hash::io=trace"));
//! ```

mod config;
mod levels;
#[cfg(feature = "tracing")]
mod tracing_bridge;
mod tracing_macros;

pub use config::VerbosityConfig;
pub use levels::{DebugFlag, DebugLevels};
#[cfg(feature = "tracing")]
pub use tracing_bridge::{env_filter, init_tracing};
