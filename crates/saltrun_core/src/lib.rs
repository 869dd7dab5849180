//! Provide the shared, pure vocabulary of the saltrun fixture runner.
//!
//! This crate is intentionally small. It describes *what* a fixture run produces without doing any of the work:
//! - the ordered fixture list the runner walks,
//! - the capture streams and the names of their redirect files,
//! - line splitting for captured output, and
//! - the per-fixture result record and its human-readable rendering.
//!
//! ## Notes
//!
//! - **No IO** and no logging: launching the validator, reading captures and deleting them live in the `saltrun`
//!   crate. A guard test in the root crate keeps this boundary in place.

pub mod capture;
pub mod fixtures;
pub mod record;

pub use capture::{CaptureStream, capture_file_name, split_lines};
pub use fixtures::{DEFAULT_FIXTURES, FixtureList, FixtureListError};
pub use record::{FixtureRecord, ValidatorExit};
