//! Shared response envelope types for API handlers.
//!
//! All API responses use a `{ "data": ... }` envelope. Use [`DataResponse`]
//! instead of ad-hoc `serde_json::json!({ "data": ... })`.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// Envelope for upload endpoints: the updated entity plus the public URL of
/// the stored file.
#[derive(Debug, Serialize)]
pub struct UploadResponse<T: Serialize> {
    pub data: T,
    pub url: String,
}
