//! Reading user-selected files into [`SelectedImage`] values.

use base64::Engine;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FileList};

use crate::config::IMAGE_MIME_PREFIX;
use crate::types::{SelectedImage, WidgetError, WidgetResult};

/// Anything carrying a browser-declared content type.
pub trait DeclaredType {
    fn declared_type(&self) -> String;
}

impl DeclaredType for File {
    fn declared_type(&self) -> String {
        self.type_()
    }
}

impl DeclaredType for SelectedImage {
    fn declared_type(&self) -> String {
        self.mime_type.clone()
    }
}

/// Files of a drop or picker selection, in order.
pub fn file_entries(files: Option<FileList>) -> impl Iterator<Item = File> {
    files
        .into_iter()
        .flat_map(|list| (0..list.length()).filter_map(move |i| list.get(i)))
}

/// Accept only declared `image/*` content types.
pub fn validate_mime(mime_type: &str) -> WidgetResult<()> {
    if mime_type.starts_with(IMAGE_MIME_PREFIX) {
        Ok(())
    } else {
        Err(WidgetError::NotAnImage {
            mime_type: mime_type.to_string(),
        })
    }
}

/// Read a browser file fully into memory.
pub async fn read_image(file: &File) -> WidgetResult<SelectedImage> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| WidgetError::Read(format!("{:?}", e)))?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();

    Ok(SelectedImage::new(file.name(), file.type_(), bytes))
}

/// Inline `data:` URI for previewing an image without a round-trip.
pub fn data_uri(image: &SelectedImage) -> String {
    let payload = base64::engine::general_purpose::STANDARD.encode(&image.bytes);
    format!("data:{};base64,{}", image.mime_type, payload)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_mime() {
        assert!(validate_mime("image/png").is_ok());
        assert!(validate_mime("image/jpeg").is_ok());
        assert!(validate_mime("image/svg+xml").is_ok());

        assert_eq!(
            validate_mime("text/plain"),
            Err(WidgetError::NotAnImage { mime_type: "text/plain".to_string() })
        );
        // Browsers report an empty type when they cannot guess one.
        assert!(validate_mime("").is_err());
        assert!(validate_mime("application/image").is_err());
        assert!(validate_mime("IMAGE/PNG").is_err());
    }

    #[test]
    fn test_data_uri() {
        let image = SelectedImage::new("tiny.png", "image/png", vec![0x89, b'P', b'N', b'G']);
        assert_eq!(data_uri(&image), "data:image/png;base64,iVBORw==");

        let empty = SelectedImage::new("empty.gif", "image/gif", Vec::<u8>::new());
        assert_eq!(data_uri(&empty), "data:image/gif;base64,");
    }
}
