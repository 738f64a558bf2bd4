//! Browser and backend services.
//!
//! # Services
//!
//! - [`file`] - reading and validating user-selected files
//! - [`classify`] - image upload to the `/predict` endpoint

pub mod file;
pub mod classify;

pub use file::*;
pub use classify::*;
