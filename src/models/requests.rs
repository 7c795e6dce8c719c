use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to analyze an object already present in the store
///
/// Both fields default to empty so a missing field fails validation with the
/// same message as an explicitly empty one, instead of a deserialization
/// error.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AnalyzeRequest {
    #[validate(length(min = 1))]
    #[serde(default)]
    pub bucket: String,
    #[validate(length(min = 1))]
    #[serde(default)]
    pub key: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_fails_validation() {
        let req: AnalyzeRequest = serde_json::from_str(r#"{"bucket":"photos"}"#).unwrap();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_complete_request_validates() {
        let req: AnalyzeRequest =
            serde_json::from_str(r#"{"bucket":"photos","key":"a.jpg"}"#).unwrap();
        assert!(req.validate().is_ok());
    }
}
