use async_trait::async_trait;
use aws_sdk_rekognition::error::DisplayErrorContext;
use aws_sdk_rekognition::types::{Image, S3Object};
use thiserror::Error;

/// Upper bound on labels requested from the vision service.
pub const MAX_LABELS: i32 = 10;

/// Minimum confidence (out of 100) a label must reach to be returned.
pub const MIN_CONFIDENCE: f32 = 80.0;

/// Errors that can occur when calling the vision service
///
/// A reference to a missing object is not special-cased; it comes back as the
/// underlying service's error message.
#[derive(Debug, Error)]
pub enum DetectionError {
    #[error("label detection request failed: {0}")]
    Request(String),
}

/// Label detection against an object already in the store.
#[async_trait]
pub trait LabelDetector: Send + Sync {
    /// Returns label names in the order the service ranked them
    /// (confidence-descending by service convention).
    async fn detect(&self, bucket: &str, key: &str) -> Result<Vec<String>, DetectionError>;
}

/// Rekognition-backed label detector
pub struct RekognitionDetector {
    client: aws_sdk_rekognition::Client,
}

impl RekognitionDetector {
    pub fn new(client: aws_sdk_rekognition::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl LabelDetector for RekognitionDetector {
    async fn detect(&self, bucket: &str, key: &str) -> Result<Vec<String>, DetectionError> {
        tracing::debug!("Detecting labels for s3://{}/{}", bucket, key);

        let image = Image::builder()
            .s3_object(S3Object::builder().bucket(bucket).name(key).build())
            .build();

        let output = self
            .client
            .detect_labels()
            .image(image)
            .max_labels(MAX_LABELS)
            .min_confidence(MIN_CONFIDENCE)
            .send()
            .await
            .map_err(|e| DetectionError::Request(DisplayErrorContext(&e).to_string()))?;

        let labels = output
            .labels()
            .iter()
            .filter_map(|label| label.name())
            .map(str::to_string)
            .collect();

        Ok(labels)
    }
}
