//! Snaplabel - image upload and label-detection service
//!
//! Accepts image uploads over HTTP, stores them in S3 and describes their
//! contents through Rekognition label detection. All heavy lifting
//! (durability, inference) is delegated to the external services; this crate
//! validates input, names objects and shapes responses.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{describe_labels, generate_storage_key, validate_upload};
pub use crate::models::{
    AnalyzeRequest, AnalyzeResponse, ErrorResponse, StoredObject, UploadResponse, UploadedFile,
};
