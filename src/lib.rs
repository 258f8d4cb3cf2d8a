//! vigil - a framework for writing single-shot monitoring checks
//!
//! This library provides the shared execution engine behind small check
//! programs: threshold-range parsing, declarative argument binding, the
//! four-valued status model with its fixed exit codes, and the plugin
//! lifecycle that ties a measurement to a validated, templated result.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod args;
pub mod core;
pub mod plugin;

pub use crate::args::{ArgSpec, BindError, Bindings, Bound};
pub use crate::core::models::{InvalidThreshold, Status, Threshold, Verdict};
pub use crate::core::services::{renderer, validator};
pub use crate::plugin::{DEFAULT_TEMPLATE, Plugin, PluginBuilder};
