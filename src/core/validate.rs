use crate::models::UploadedFile;
use thiserror::Error;

/// Hard cap on upload size: 5 MB.
pub const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// Only these declared content types are accepted.
pub const ALLOWED_CONTENT_TYPES: [&str; 2] = ["image/jpeg", "image/png"];

/// Rejections produced before any network call is made
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Only JPEG and PNG image files are allowed (got {0})")]
    UnsupportedMediaType(String),

    #[error("File size too large. Max size is 5MB ({0} bytes received)")]
    PayloadTooLarge(usize),
}

/// Check a candidate upload against the acceptance policy.
///
/// The check trusts the declared content type and does not sniff the bytes;
/// a client can lie about what it is uploading. Known weakness, kept because
/// the downstream detection call fails cleanly on non-image payloads anyway.
pub fn validate_upload(file: &UploadedFile) -> Result<(), ValidationError> {
    if !ALLOWED_CONTENT_TYPES.contains(&file.content_type.as_str()) {
        return Err(ValidationError::UnsupportedMediaType(
            file.content_type.clone(),
        ));
    }

    if file.data.len() > MAX_UPLOAD_BYTES {
        return Err(ValidationError::PayloadTooLarge(file.data.len()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;

    fn file(content_type: &str, len: usize) -> UploadedFile {
        UploadedFile {
            data: Bytes::from(vec![0u8; len]),
            content_type: content_type.to_string(),
            file_name: "photo.jpg".to_string(),
        }
    }

    #[test]
    fn test_accepts_jpeg_and_png() {
        assert!(validate_upload(&file("image/jpeg", 1024)).is_ok());
        assert!(validate_upload(&file("image/png", 1024)).is_ok());
    }

    #[test]
    fn test_rejects_other_content_types() {
        let err = validate_upload(&file("image/gif", 1024)).unwrap_err();
        assert_eq!(
            err,
            ValidationError::UnsupportedMediaType("image/gif".to_string())
        );
    }

    #[test]
    fn test_size_boundary() {
        // Exactly at the limit is still accepted
        assert!(validate_upload(&file("image/jpeg", MAX_UPLOAD_BYTES)).is_ok());
        assert_eq!(
            validate_upload(&file("image/jpeg", MAX_UPLOAD_BYTES + 1)).unwrap_err(),
            ValidationError::PayloadTooLarge(MAX_UPLOAD_BYTES + 1)
        );
    }
}
