//! UI Components for the classifier application.
//!
//! # Layout Components
//! - [`Hero`] - Main title and description
//!
//! # Feature Components
//! - [`ClassifierWidget`] - Owns the widget state and wires events
//! - [`UploadArea`] - Image drop zone, file picker and preview
//! - [`ClassifyButton`] - Classify trigger with busy indicator
//! - [`ResultCard`] - Prediction headline and confidence bar
//! - [`ErrorMessage`] - Error slot

mod hero;
mod widget;
mod upload;
mod classify_button;
mod result;
mod error;

pub use hero::*;
pub use widget::*;
pub use upload::*;
pub use classify_button::*;
pub use result::*;
pub use error::*;
