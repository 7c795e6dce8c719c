use crate::models::StoredObject;
use async_trait::async_trait;
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::primitives::ByteStream;
use bytes::Bytes;
use thiserror::Error;

/// Errors that can occur when writing to the object store
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("object store request failed: {0}")]
    Request(String),
}

/// Write access to the object store.
///
/// Handlers hold this as a trait object so tests can substitute a stub for
/// the real S3 client.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Write one object under `key`. Re-invoking with the same key overwrites.
    async fn put(
        &self,
        key: &str,
        data: Bytes,
        content_type: &str,
    ) -> Result<StoredObject, StorageError>;
}

/// S3-backed object store
///
/// Writes into a single configured bucket and derives the public URL in
/// virtual-hosted style from bucket, region and key. No second call is made
/// to confirm the object exists.
pub struct S3ObjectStore {
    client: aws_sdk_s3::Client,
    bucket: String,
    region: String,
}

impl S3ObjectStore {
    pub fn new(client: aws_sdk_s3::Client, bucket: String, region: String) -> Self {
        Self {
            client,
            bucket,
            region,
        }
    }

    fn object_url(&self, key: &str) -> String {
        format!(
            "https://{}.s3.{}.amazonaws.com/{}",
            self.bucket, self.region, key
        )
    }
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    async fn put(
        &self,
        key: &str,
        data: Bytes,
        content_type: &str,
    ) -> Result<StoredObject, StorageError> {
        tracing::debug!("Putting object {} ({} bytes) into {}", key, data.len(), self.bucket);

        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(ByteStream::from(data))
            .content_type(content_type)
            .send()
            .await
            .map_err(|e| StorageError::Request(DisplayErrorContext(&e).to_string()))?;

        Ok(StoredObject {
            bucket: self.bucket.clone(),
            key: key.to_string(),
            url: self.object_url(key),
        })
    }
}
