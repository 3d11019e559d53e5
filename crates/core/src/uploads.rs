//! Upload rules for files stored on the public disk.
//!
//! Each [`UploadKind`] fixes the directory a file lands in, the extensions it
//! accepts and its size limit. Image uploads are additionally sniffed with
//! the `image` crate so a renamed binary cannot pass as a picture.

use crate::error::CoreError;

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "gif"];
const DOCUMENT_EXTENSIONS: &[&str] = &["pdf", "doc", "docx"];

/// Size limit for image uploads (2 MiB).
pub const MAX_IMAGE_BYTES: usize = 2 * 1024 * 1024;

/// Size limit for the resume document (5 MiB).
pub const MAX_DOCUMENT_BYTES: usize = 5 * 1024 * 1024;

/// What an uploaded file is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadKind {
    Avatar,
    Resume,
    Logo,
    ServiceImage,
    ProjectImage,
    TestimonialImage,
}

impl UploadKind {
    /// Directory on the public disk, relative to its root.
    pub fn directory(self) -> &'static str {
        match self {
            Self::Avatar => "avatars",
            Self::Resume => "resumes",
            Self::Logo => "logos",
            Self::ServiceImage => "services",
            Self::ProjectImage => "projects",
            Self::TestimonialImage => "testimonials",
        }
    }

    pub fn allowed_extensions(self) -> &'static [&'static str] {
        match self {
            Self::Resume => DOCUMENT_EXTENSIONS,
            _ => IMAGE_EXTENSIONS,
        }
    }

    pub fn max_bytes(self) -> usize {
        match self {
            Self::Resume => MAX_DOCUMENT_BYTES,
            _ => MAX_IMAGE_BYTES,
        }
    }

    pub fn is_image(self) -> bool {
        !matches!(self, Self::Resume)
    }
}

/// Lowercased extension of `filename`, without the dot.
pub fn extension_of(filename: &str) -> Option<String> {
    let (stem, ext) = filename.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

/// Validate an uploaded file and return its normalized extension.
pub fn validate_upload(kind: UploadKind, filename: &str, bytes: &[u8]) -> Result<String, CoreError> {
    if bytes.is_empty() {
        return Err(CoreError::Validation("Uploaded file is empty".into()));
    }

    let max = kind.max_bytes();
    if bytes.len() > max {
        return Err(CoreError::Validation(format!(
            "File is too large ({} bytes). Maximum is {max} bytes",
            bytes.len()
        )));
    }

    let allowed = kind.allowed_extensions();
    let ext = extension_of(filename)
        .filter(|ext| allowed.contains(&ext.as_str()))
        .ok_or_else(|| {
            CoreError::Validation(format!(
                "Unsupported file type for '{filename}'. Allowed: {allowed:?}"
            ))
        })?;

    if kind.is_image() && image::guess_format(bytes).is_err() {
        return Err(CoreError::Validation(format!(
            "'{filename}' is not a recognised image"
        )));
    }

    Ok(ext)
}

/// Relative path for a newly stored file: `{directory}/{uuid}.{ext}`.
pub fn stored_file_name(kind: UploadKind, ext: &str) -> String {
    format!("{}/{}.{ext}", kind.directory(), uuid::Uuid::new_v4())
}

/// Reject stored paths that could escape the public disk root.
pub fn is_safe_relative_path(path: &str) -> bool {
    !path.is_empty()
        && !path.starts_with('/')
        && !path.contains('\\')
        && path.split('/').all(|seg| !seg.is_empty() && seg != "..")
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    /// Smallest valid PNG signature + IHDR start; enough for format sniffing.
    const PNG_HEADER: &[u8] = &[
        0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, b'I', b'H', b'D',
        b'R',
    ];

    #[test]
    fn extension_is_lowercased() {
        assert_eq!(extension_of("Photo.JPG").as_deref(), Some("jpg"));
        assert_eq!(extension_of("archive.tar.gz").as_deref(), Some("gz"));
        assert_eq!(extension_of("noext"), None);
        assert_eq!(extension_of(".hidden"), None);
        assert_eq!(extension_of("trailing."), None);
    }

    #[test]
    fn png_avatar_accepted() {
        let ext = validate_upload(UploadKind::Avatar, "me.PNG", PNG_HEADER).unwrap();
        assert_eq!(ext, "png");
    }

    #[test]
    fn renamed_text_file_rejected_as_image() {
        let result = validate_upload(UploadKind::ProjectImage, "shot.png", b"plain text");
        assert_matches!(result, Err(CoreError::Validation(msg)) if msg.contains("not a recognised image"));
    }

    #[test]
    fn resume_accepts_pdf_without_sniffing() {
        let ext = validate_upload(UploadKind::Resume, "cv.pdf", b"%PDF-1.7").unwrap();
        assert_eq!(ext, "pdf");
    }

    #[test]
    fn resume_rejects_images() {
        assert!(validate_upload(UploadKind::Resume, "cv.png", PNG_HEADER).is_err());
    }

    #[test]
    fn empty_and_oversized_files_rejected() {
        assert!(validate_upload(UploadKind::Logo, "logo.png", &[]).is_err());
        let big = vec![0u8; MAX_IMAGE_BYTES + 1];
        assert_matches!(
            validate_upload(UploadKind::Logo, "logo.png", &big),
            Err(CoreError::Validation(msg)) if msg.contains("too large")
        );
    }

    #[test]
    fn stored_name_lands_in_kind_directory() {
        let name = stored_file_name(UploadKind::TestimonialImage, "webp");
        assert!(name.starts_with("testimonials/"));
        assert!(name.ends_with(".webp"));
        assert!(is_safe_relative_path(&name));
    }

    #[test]
    fn unsafe_paths_detected() {
        assert!(!is_safe_relative_path("../etc/passwd"));
        assert!(!is_safe_relative_path("/abs/path.png"));
        assert!(!is_safe_relative_path("avatars//x.png"));
        assert!(!is_safe_relative_path(""));
        assert!(is_safe_relative_path("avatars/x.png"));
    }
}
