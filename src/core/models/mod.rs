//! Domain models for vigil
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Threshold`] - "These values are acceptable"
//! - [`Status`] - How bad the situation is (maps 1:1 to exit codes)
//! - [`Verdict`] - A validator's conclusion about one measurement

mod status;
mod threshold;
mod verdict;

pub use status::Status;
pub use threshold::{InvalidThreshold, Threshold};
pub use verdict::Verdict;
