// jersey_app/src/services/image_upload.rs

//! Jersey image uploads: base64 transport and the JPEG/PNG-only rule.

use crate::errors::{AppError, Result as AppResult};
use base64::{engine::general_purpose::STANDARD, Engine as _};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
  Jpeg,
  Png,
}

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
const JPEG_SIGNATURE: [u8; 3] = [0xFF, 0xD8, 0xFF];

/// Identifies an upload by its leading magic bytes.
pub fn detect_image_format(bytes: &[u8]) -> Option<ImageFormat> {
  if bytes.starts_with(&PNG_SIGNATURE) {
    Some(ImageFormat::Png)
  } else if bytes.starts_with(&JPEG_SIGNATURE) {
    Some(ImageFormat::Jpeg)
  } else {
    None
  }
}

/// Decodes the `image_base64` request field. Blank input means no upload.
///
/// Payloads that cannot fit `max_bytes` once decoded are refused before
/// decoding; the exact size check happens in the intake pipeline.
pub fn decode_image_base64(encoded: Option<&str>, max_bytes: usize) -> AppResult<Option<Vec<u8>>> {
  let encoded = match encoded.map(str::trim) {
    Some(s) if !s.is_empty() => s,
    _ => return Ok(None),
  };
  // Accept data URLs as produced by browser file readers.
  let payload = match encoded.split_once(";base64,") {
    Some((_, data)) => data,
    None => encoded,
  };
  // The estimate rounds up to whole 3-byte groups, so padding may add 2.
  if base64::decoded_len_estimate(payload.len()) > max_bytes.saturating_add(2) {
    return Err(AppError::Validation(format!(
      "image is larger than the {} byte limit",
      max_bytes
    )));
  }
  STANDARD
    .decode(payload)
    .map(Some)
    .map_err(|e| AppError::Validation(format!("image_base64 is not valid base64: {}", e)))
}
