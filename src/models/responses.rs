use serde::{Deserialize, Serialize};

/// Response for a successful upload + analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    pub success: bool,
    pub message: String,
    pub url: String,
    pub description: String,
    pub labels: Vec<String>,
}

/// Response for analyzing an existing stored object (no upload, no URL)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    pub success: bool,
    pub description: String,
    pub labels: Vec<String>,
}

/// Error response
///
/// `error` is a short machine-usable code, `details` the human-readable
/// message. Downstream service internals never travel further than the
/// message string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub details: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}
