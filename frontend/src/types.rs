//! Common types used across the frontend application.
//!
//! # Categories
//!
//! - **Input Types** - the image currently held by the widget
//! - **API Types** - `/predict` response structures
//! - **Display Types** - result styling variants
//! - **Error Types** - validation and classification failures

use std::rc::Rc;

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::config::{
    GENERIC_FAILURE_MESSAGE, NOT_AN_IMAGE_MESSAGE, PRIMARY_FILL_GRADIENT, PRIMARY_LABEL,
    PRIMARY_TITLE_COLOR, SECONDARY_FILL_GRADIENT, SECONDARY_TITLE_COLOR,
};

// =============================================================================
// Input Types
// =============================================================================

/// The image the widget currently holds.
///
/// Bytes are shared so a request ticket can carry the image without
/// copying it.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectedImage {
    /// File name as reported by the browser
    pub name: String,
    /// Declared content type, always `image/*`
    pub mime_type: String,
    /// Raw file contents
    pub bytes: Rc<[u8]>,
}

impl SelectedImage {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, bytes: impl Into<Rc<[u8]>>) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            bytes: bytes.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }
}

// =============================================================================
// API Types
// =============================================================================

/// A label and its confidence, as returned by the classifier.
#[derive(Clone, Debug, PartialEq)]
pub struct ClassificationResult {
    pub label: String,
    /// Percentage, nominally 0-100. Not validated.
    pub confidence: f64,
}

/// Body of a `/predict` response.
///
/// Success and failure share one shape; every field is optional and
/// [`crate::services::interpret_response`] decides which case applies.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct PredictResponse {
    pub prediction: Option<String>,
    pub confidence: Option<f64>,
    /// Usually a string, but any JSON value is accepted
    pub error: Option<Value>,
    /// Raw model score, diagnostic only
    pub raw_score: Option<f64>,
}

// =============================================================================
// Display Types
// =============================================================================

/// Two-way styling rule for the result card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResultStyle {
    /// Label matched the primary category
    Primary,
    /// Any other label
    Secondary,
}

impl ResultStyle {
    pub fn for_label(label: &str) -> Self {
        if label.to_lowercase() == PRIMARY_LABEL {
            ResultStyle::Primary
        } else {
            ResultStyle::Secondary
        }
    }

    /// Headline text color.
    pub fn title_color(&self) -> &'static str {
        match self {
            ResultStyle::Primary => PRIMARY_TITLE_COLOR,
            ResultStyle::Secondary => SECONDARY_TITLE_COLOR,
        }
    }

    /// Confidence bar background.
    pub fn fill_gradient(&self) -> &'static str {
        match self {
            ResultStyle::Primary => PRIMARY_FILL_GRADIENT,
            ResultStyle::Secondary => SECONDARY_FILL_GRADIENT,
        }
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// Widget errors.
///
/// `NotAnImage` and `Read` happen while acquiring input; the rest happen
/// during a classify round-trip. None of them is fatal to the widget.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum WidgetError {
    /// Selected file does not declare an image content type.
    #[error("Not an image: {mime_type:?}")]
    NotAnImage { mime_type: String },

    /// The browser could not read the selected file.
    #[error("Failed to read file: {0}")]
    Read(String),

    /// The server reported an error message.
    #[error("Server error: {0}")]
    Server(String),

    /// Non-success HTTP status without a usable message.
    #[error("Request rejected with status {status}")]
    Rejected { status: u16 },

    /// The request never completed.
    #[error("Network error: {0}")]
    Network(String),

    /// Response body unreadable or missing fields.
    #[error("Malformed response: {0}")]
    Malformed(String),
}

impl WidgetError {
    /// Text for the error slot.
    pub fn user_message(&self) -> String {
        match self {
            WidgetError::NotAnImage { .. } => NOT_AN_IMAGE_MESSAGE.to_string(),
            WidgetError::Server(msg) => msg.clone(),
            WidgetError::Read(_)
            | WidgetError::Rejected { .. }
            | WidgetError::Network(_)
            | WidgetError::Malformed(_) => GENERIC_FAILURE_MESSAGE.to_string(),
        }
    }
}

/// Result type alias for widget operations.
pub type WidgetResult<T> = Result<T, WidgetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_matches_primary_label_case_insensitively() {
        assert_eq!(ResultStyle::for_label("Cat"), ResultStyle::Primary);
        assert_eq!(ResultStyle::for_label("CAT"), ResultStyle::Primary);
        assert_eq!(ResultStyle::for_label("cat"), ResultStyle::Primary);
        assert_eq!(ResultStyle::for_label("Dog"), ResultStyle::Secondary);
        assert_eq!(ResultStyle::for_label("cats"), ResultStyle::Secondary);
        assert_eq!(ResultStyle::for_label(""), ResultStyle::Secondary);
    }

    #[test]
    fn test_style_palette() {
        assert_eq!(ResultStyle::Primary.title_color(), "#60A5FA");
        assert_eq!(ResultStyle::Secondary.title_color(), "#F472B6");
        assert!(ResultStyle::Primary.fill_gradient().contains("#3B82F6"));
        assert!(ResultStyle::Secondary.fill_gradient().contains("#EC4899"));
    }

    #[test]
    fn test_user_message() {
        let server = WidgetError::Server("model unavailable".to_string());
        assert_eq!(server.user_message(), "model unavailable");

        let not_image = WidgetError::NotAnImage { mime_type: "text/plain".to_string() };
        assert_eq!(not_image.user_message(), NOT_AN_IMAGE_MESSAGE);

        for err in [
            WidgetError::Rejected { status: 502 },
            WidgetError::Network("Failed to fetch".to_string()),
            WidgetError::Malformed("expected value".to_string()),
            WidgetError::Read("aborted".to_string()),
        ] {
            assert_eq!(err.user_message(), GENERIC_FAILURE_MESSAGE);
        }
    }

    #[test]
    fn test_response_deserialization() {
        let json = r#"{"prediction": "Dog", "confidence": 91.27, "raw_score": 0.9127}"#;
        let response: PredictResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.prediction.as_deref(), Some("Dog"));
        assert_eq!(response.confidence, Some(91.27));
        assert_eq!(response.raw_score, Some(0.9127));
        assert!(response.error.is_none());

        let json = r#"{"error": "Model not loaded. Please check server logs."}"#;
        let response: PredictResponse = serde_json::from_str(json).unwrap();
        assert!(response.prediction.is_none());
        assert_eq!(
            response.error,
            Some(Value::from("Model not loaded. Please check server logs."))
        );
    }
}
