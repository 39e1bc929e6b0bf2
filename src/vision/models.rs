// Vision models and types
// Author: kelexine (https://github.com/kelexine)

use crate::error::{Result, TranslateError};

/// MIME type used when none is declared or detectable.
pub const DEFAULT_MIME_TYPE: &str = "image/jpeg";

/// Validation limits
pub const MAX_IMAGE_SIZE_BYTES: usize = 20 * 1024 * 1024; // 20MB (Gemini inline limit)

/// Image formats recognized from magic bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Jpeg,
    Png,
    WebP,
    Gif,
    Heic,
}

impl ImageFormat {
    /// Get MIME type for this format
    pub fn mime_type(&self) -> &'static str {
        match self {
            ImageFormat::Jpeg => "image/jpeg",
            ImageFormat::Png => "image/png",
            ImageFormat::WebP => "image/webp",
            ImageFormat::Gif => "image/gif",
            ImageFormat::Heic => "image/heic",
        }
    }

    /// Detect format from magic bytes at start of image data
    pub fn detect(data: &[u8]) -> Option<Self> {
        if data.starts_with(b"\xFF\xD8\xFF") {
            return Some(ImageFormat::Jpeg);
        }
        if data.starts_with(b"\x89PNG\r\n\x1a\n") {
            return Some(ImageFormat::Png);
        }
        if data.starts_with(b"GIF87a") || data.starts_with(b"GIF89a") {
            return Some(ImageFormat::Gif);
        }
        if data.len() < 12 {
            return None;
        }
        if data.starts_with(b"RIFF") && data[8..12] == *b"WEBP" {
            Some(ImageFormat::WebP)
        } else if data[4..12] == *b"ftypheic" || data[4..12] == *b"ftypheix" {
            Some(ImageFormat::Heic)
        } else {
            None
        }
    }
}

/// Validate decoded image size
pub fn validate_image_size(data_len: usize) -> Result<()> {
    if data_len > MAX_IMAGE_SIZE_BYTES {
        return Err(TranslateError::InvalidInput(format!(
            "Image size {} bytes exceeds maximum of {} bytes (20MB)",
            data_len, MAX_IMAGE_SIZE_BYTES
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_formats() {
        assert_eq!(ImageFormat::detect(b"\xFF\xD8\xFF\xE0"), Some(ImageFormat::Jpeg));
        assert_eq!(
            ImageFormat::detect(b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR"),
            Some(ImageFormat::Png)
        );
        assert_eq!(ImageFormat::detect(b"GIF89a"), Some(ImageFormat::Gif));
        assert_eq!(ImageFormat::detect(b"RIFF\0\0\0\0WEBPVP8 "), Some(ImageFormat::WebP));
        assert_eq!(ImageFormat::detect(b"\0\0\0\x18ftypheic"), Some(ImageFormat::Heic));
        assert_eq!(ImageFormat::detect(b"plain text, no image"), None);
    }

    #[test]
    fn test_size_limit() {
        assert!(validate_image_size(MAX_IMAGE_SIZE_BYTES).is_ok());
        assert!(matches!(
            validate_image_size(MAX_IMAGE_SIZE_BYTES + 1),
            Err(TranslateError::InvalidInput(_))
        ));
    }
}
