// Service exports
pub mod detection;
pub mod storage;

pub use detection::{DetectionError, LabelDetector, RekognitionDetector, MAX_LABELS, MIN_CONFIDENCE};
pub use storage::{ObjectStore, S3ObjectStore, StorageError};
