//! HTTP client for the `/predict` classification endpoint.

use gloo_net::http::Request;
use js_sys::{Array, Uint8Array};
use serde_json::Value;
use web_sys::{Blob, BlobPropertyBag, FormData};

use crate::config::UPLOAD_FIELD;
use crate::types::{ClassificationResult, PredictResponse, SelectedImage, WidgetError, WidgetResult};

/// Post an image to the classifier and interpret the reply.
pub async fn classify_image(image: &SelectedImage, endpoint: &str) -> WidgetResult<ClassificationResult> {
    let form_data = build_form(image)?;

    let response = Request::post(endpoint)
        .body(form_data)
        .map_err(|e| WidgetError::Network(format!("Failed to build request: {}", e)))?
        .send()
        .await
        .map_err(|e| WidgetError::Network(e.to_string()))?;

    let body = response
        .json::<PredictResponse>()
        .await
        .map_err(|e| e.to_string());

    interpret_response(response.status(), response.ok(), body)
}

/// Multipart body with the image under the upload field.
fn build_form(image: &SelectedImage) -> WidgetResult<FormData> {
    let form_data = FormData::new().map_err(|e| WidgetError::Network(format!("Failed to create FormData: {:?}", e)))?;

    let parts = Array::of1(&Uint8Array::from(&image.bytes[..]));
    let options = BlobPropertyBag::new();
    options.set_type(&image.mime_type);
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(|e| WidgetError::Network(format!("Failed to create Blob: {:?}", e)))?;

    form_data
        .append_with_blob_and_filename(UPLOAD_FIELD, &blob, &image.name)
        .map_err(|e| WidgetError::Network(format!("Failed to append file: {:?}", e)))?;

    Ok(form_data)
}

/// Decide between a result and an error.
///
/// A truthy `error` field wins under any status. Otherwise a
/// non-success status or an unreadable body is a failure, and a
/// successful body must carry both `prediction` and `confidence`.
pub fn interpret_response(
    status: u16,
    ok: bool,
    body: Result<PredictResponse, String>,
) -> WidgetResult<ClassificationResult> {
    let body = match body {
        Ok(body) => body,
        Err(_) if !ok => return Err(WidgetError::Rejected { status }),
        Err(e) => return Err(WidgetError::Malformed(e)),
    };

    if let Some(message) = body.error.as_ref().and_then(error_text) {
        return Err(WidgetError::Server(message));
    }
    if !ok {
        return Err(WidgetError::Rejected { status });
    }

    if let Some(raw_score) = body.raw_score {
        log::debug!("Raw model score: {}", raw_score);
    }

    match (body.prediction, body.confidence) {
        (Some(label), Some(confidence)) => Ok(ClassificationResult { label, confidence }),
        (None, _) => Err(WidgetError::Malformed("missing `prediction`".to_string())),
        (_, None) => Err(WidgetError::Malformed("missing `confidence`".to_string())),
    }
}

/// Message carried by an `error` field, if it holds a truthy value.
///
/// Empty strings, `false`, zero and `null` count as no error.
fn error_text(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        other => Some(other.to_string()),
    }
}
