//! Core domain logic for vigil
//!
//! This module contains pure business logic with no I/O dependencies.
//! Argument parsing and process concerns live outside `core`.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Threshold, Status, Verdict)
//! - `services/` - Validation strategies and template rendering

pub mod models;
pub mod services;
