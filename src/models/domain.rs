use bytes::Bytes;

/// An upload as received from the multipart body, before validation.
/// Lives for the duration of one request.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub data: Bytes,
    /// Declared content type, taken from the multipart part header.
    pub content_type: String,
    /// Original file name as sent by the client; used only to derive the
    /// storage key's extension.
    pub file_name: String,
}

/// A reference to an object written to the store.
///
/// The URL is computed from bucket, region and key (virtual-hosted style),
/// not fetched back from the store. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredObject {
    pub bucket: String,
    pub key: String,
    pub url: String,
}
