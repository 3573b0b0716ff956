use serde::Serialize;

/// What is reported about an uploaded file; the bytes themselves are dropped.
#[derive(Debug, Serialize)]
pub struct FileMetadata {
    pub name: String,
    #[serde(rename = "type")]
    pub mime_type: String,
    pub size: u64,
}
