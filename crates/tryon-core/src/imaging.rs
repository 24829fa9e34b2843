//! Image decoding and re-encoding for uploads.
//!
//! Uploads are decoded once to prove they are real images (and to catch
//! oversized inputs) before any provider call is paid for. Decoding runs on
//! the blocking pool under a timeout.

use image::{codecs::jpeg::JpegEncoder, DynamicImage, GenericImageView, ImageFormat};
use std::io::Cursor;
use std::time::Duration;
use tokio::time::timeout;

use crate::config::LimitsConfig;
use crate::error::ImageError;

/// Image decoder with configurable limits and timeout.
#[derive(Debug, Clone)]
pub struct ImageDecoder {
    max_dimension: u32,
    timeout_ms: u64,
}

/// Result of decoding an image.
pub struct DecodedImage {
    /// The decoded image data
    pub image: DynamicImage,
    /// Detected image format
    pub format: ImageFormat,
    pub width: u32,
    pub height: u32,
}

impl DecodedImage {
    /// Short format name ("jpeg", "png", ...) for MIME mapping.
    pub fn format_name(&self) -> &'static str {
        format_name(self.format)
    }
}

impl ImageDecoder {
    pub fn new(limits: &LimitsConfig) -> Self {
        Self {
            max_dimension: limits.max_image_dimension,
            timeout_ms: limits.decode_timeout_ms,
        }
    }

    /// Decode an in-memory image with validation and timeout.
    pub async fn decode(&self, bytes: Vec<u8>) -> Result<DecodedImage, ImageError> {
        let result = timeout(
            Duration::from_millis(self.timeout_ms),
            tokio::task::spawn_blocking(move || decode_sync(bytes)),
        )
        .await;

        let decoded = match result {
            Ok(Ok(decoded)) => decoded?,
            Ok(Err(e)) => return Err(ImageError::Decode(format!("Task join error: {e}"))),
            Err(_) => {
                return Err(ImageError::Timeout {
                    timeout_ms: self.timeout_ms,
                })
            }
        };

        if decoded.width > self.max_dimension || decoded.height > self.max_dimension {
            return Err(ImageError::TooLarge {
                width: decoded.width,
                height: decoded.height,
                max_dim: self.max_dimension,
            });
        }
        Ok(decoded)
    }
}

/// Synchronous decode (runs in spawn_blocking).
fn decode_sync(bytes: Vec<u8>) -> Result<DecodedImage, ImageError> {
    let reader = image::ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| ImageError::Decode(format!("Cannot detect image format: {e}")))?;
    let format = reader
        .format()
        .ok_or_else(|| ImageError::UnsupportedFormat("unknown".to_string()))?;
    let image = reader
        .decode()
        .map_err(|e| ImageError::Decode(e.to_string()))?;
    let (width, height) = image.dimensions();

    Ok(DecodedImage {
        image,
        format,
        width,
        height,
    })
}

/// Map an image format to the short name used for MIME types.
pub fn format_name(format: ImageFormat) -> &'static str {
    match format {
        ImageFormat::Jpeg => "jpeg",
        ImageFormat::Png => "png",
        ImageFormat::WebP => "webp",
        ImageFormat::Gif => "gif",
        _ => "unknown",
    }
}

/// Guess the format of raw image bytes from their magic number.
pub fn sniff_format(bytes: &[u8]) -> Option<&'static str> {
    image::guess_format(bytes).ok().map(format_name)
}

/// Downscale so the longest edge is at most `max_edge` and encode as JPEG.
///
/// Smaller payloads make vision calls noticeably faster; images already within
/// the limit are only re-encoded.
pub fn encode_jpeg(image: &DynamicImage, max_edge: u32, quality: u8) -> Result<Vec<u8>, ImageError> {
    let resized;
    let source = if image.width().max(image.height()) > max_edge {
        resized = image.thumbnail(max_edge, max_edge);
        &resized
    } else {
        image
    };

    // JPEG has no alpha channel
    let rgb = source.to_rgb8();
    let mut buffer = Cursor::new(Vec::new());
    let encoder = JpegEncoder::new_with_quality(&mut buffer, quality);
    rgb.write_with_encoder(encoder)
        .map_err(|e| ImageError::Encode(e.to_string()))?;
    Ok(buffer.into_inner())
}
