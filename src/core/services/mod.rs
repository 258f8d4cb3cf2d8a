//! Business logic services
//!
//! Pure logic that operates on domain models. These services have no
//! I/O dependencies - they operate on data passed in and return results.
//!
//! - [`renderer`] - Interpolate `${variable}` templates
//! - [`validator`] - The built-in validation strategies

pub mod renderer;
pub mod validator;

pub use renderer::render;
pub use validator::{numeric, string_match};
