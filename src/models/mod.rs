// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{StoredObject, UploadedFile};
pub use requests::AnalyzeRequest;
pub use responses::{AnalyzeResponse, ErrorResponse, HealthResponse, UploadResponse};
