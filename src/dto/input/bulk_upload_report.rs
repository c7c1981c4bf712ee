use serde::Deserialize;
use serde_json::Value;

///
/// Per row outcome of a bulk upload.
/// Successful rows are kept verbatim, their shape belongs to the server.
///
#[derive(Debug, Deserialize)]
pub struct BulkUploadReport {
    #[serde(default)]
    pub success: Vec<Value>,
    #[serde(default)]
    pub failed: Vec<BulkUploadFailure>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BulkUploadFailure {
    pub row: usize,
    pub error: String,
}
