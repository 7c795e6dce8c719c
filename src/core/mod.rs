// Core exports
pub mod describe;
pub mod naming;
pub mod validate;

pub use describe::describe_labels;
pub use naming::generate_storage_key;
pub use validate::{validate_upload, ValidationError, ALLOWED_CONTENT_TYPES, MAX_UPLOAD_BYTES};
