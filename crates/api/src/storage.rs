//! The public disk: uploaded files written under `STORAGE_ROOT` and served
//! read-only under the public URL prefix.

use std::io::ErrorKind;
use std::path::PathBuf;

use axum::body::Bytes;
use axum::extract::Multipart;
use folio_core::uploads::{self, UploadKind};

use crate::error::{AppError, AppResult};

/// Multipart field name carrying the file on every upload route.
pub const FILE_FIELD: &str = "file";

/// A file read from a multipart request, not yet validated.
#[derive(Debug)]
pub struct UploadedFile {
    pub filename: String,
    pub bytes: Bytes,
}

/// Read the `file` field of a multipart form. Other fields are ignored.
pub async fn read_file_field(multipart: &mut Multipart) -> AppResult<UploadedFile> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        let filename = field
            .file_name()
            .map(str::to_string)
            .ok_or_else(|| AppError::BadRequest("The 'file' field has no filename".into()))?;
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;
        return Ok(UploadedFile { filename, bytes });
    }
    Err(AppError::BadRequest(format!(
        "Missing required '{FILE_FIELD}' field"
    )))
}

/// Directory-backed store for uploads.
#[derive(Debug, Clone)]
pub struct PublicDisk {
    root: PathBuf,
    url_prefix: String,
}

impl PublicDisk {
    pub fn new(root: PathBuf, url_prefix: String) -> Self {
        Self { root, url_prefix }
    }

    /// Public URL of a stored relative path.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{path}", self.url_prefix)
    }

    /// Validate `file` for `kind` and write it under a fresh name.
    ///
    /// Returns the relative path to persist on the owning row.
    pub async fn store(&self, kind: UploadKind, file: &UploadedFile) -> AppResult<String> {
        let ext = uploads::validate_upload(kind, &file.filename, &file.bytes)?;
        let relative = uploads::stored_file_name(kind, &ext);
        let full = self.root.join(&relative);

        if let Some(parent) = full.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| AppError::InternalError(format!("Failed to create {parent:?}: {e}")))?;
        }
        tokio::fs::write(&full, &file.bytes)
            .await
            .map_err(|e| AppError::InternalError(format!("Failed to write {full:?}: {e}")))?;

        tracing::info!(path = %relative, bytes = file.bytes.len(), "Stored upload");
        Ok(relative)
    }

    /// Remove a previously stored file. Missing files are ignored and other
    /// failures are logged, never returned: the row change already happened.
    pub async fn delete(&self, path: &str) {
        if !uploads::is_safe_relative_path(path) {
            tracing::warn!(path, "Refusing to delete path outside the public disk");
            return;
        }
        match tokio::fs::remove_file(self.root.join(path)).await {
            Ok(()) => tracing::debug!(path, "Deleted upload"),
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => tracing::warn!(path, error = %e, "Failed to delete upload"),
        }
    }

    /// Delete `previous` when it was replaced by a different file.
    pub async fn delete_replaced(&self, previous: Option<&str>, current: &str) {
        if let Some(old) = previous.filter(|old| *old != current) {
            self.delete(old).await;
        }
    }
}
