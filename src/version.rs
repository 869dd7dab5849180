//! saltrun version information.
//!
//! The value is taken from Cargo metadata (`CARGO_PKG_VERSION`) at compile time so the CLI and any other consumer
//! agree on one string.

/// The saltrun version string (for example, `0.1.0`).
pub const SALTRUN_VERSION: &str = env!("CARGO_PKG_VERSION");
