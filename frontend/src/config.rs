//! Application configuration.
//!
//! Centralized configuration for the classifier frontend.
//! These are compile-time constants; the page is served by the same
//! origin as the prediction endpoint, so paths stay relative.

/// Prediction endpoint, relative to the page origin.
pub const PREDICT_ENDPOINT: &str = "/predict";

/// Multipart field name carrying the image bytes.
pub const UPLOAD_FIELD: &str = "file";

/// Document title.
pub const APP_TITLE: &str = "Cat vs Dog Classifier";

/// Declared content types must start with this prefix to be accepted.
pub const IMAGE_MIME_PREFIX: &str = "image/";

/// Label that gets the primary result styling (compared case-insensitively).
pub const PRIMARY_LABEL: &str = "cat";

/// Delay before the confidence bar is widened, so the CSS transition
/// starts from zero width.
pub const BAR_ANIMATION_DELAY_MS: u32 = 100;

/// Classify button caption while idle.
pub const IDLE_BUTTON_LABEL: &str = "Classify Image";

/// Classify button caption while a request is in flight.
pub const BUSY_BUTTON_LABEL: &str = "Analyzing...";

/// Shown when the selected file is not an image.
pub const NOT_AN_IMAGE_MESSAGE: &str = "Please upload an image file.";

/// Shown for any classification failure without a server-provided message.
pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to classify image.";

// Result styling, variant A (primary label) and variant B (anything else).

pub const PRIMARY_TITLE_COLOR: &str = "#60A5FA";
pub const PRIMARY_FILL_GRADIENT: &str = "linear-gradient(90deg, #3B82F6, #60A5FA)";
pub const SECONDARY_TITLE_COLOR: &str = "#F472B6";
pub const SECONDARY_FILL_GRADIENT: &str = "linear-gradient(90deg, #EC4899, #F472B6)";
