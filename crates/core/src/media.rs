//! Upload constraints for user-supplied images.

use crate::error::CoreError;

/// What an uploaded file is destined to become.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadKind {
    /// Profile avatar: jpeg/png/webp, up to 2 MB.
    Avatar,
    /// Gallery or project image: jpeg/png/webp/gif, up to 5 MB.
    Gallery,
}

/// Maximum avatar size in bytes (2 MB).
pub const MAX_AVATAR_BYTES: usize = 2 * 1024 * 1024;

/// Maximum gallery image size in bytes (5 MB).
pub const MAX_GALLERY_BYTES: usize = 5 * 1024 * 1024;

const AVATAR_MIME_TYPES: &[&str] = &["image/jpeg", "image/png", "image/webp"];
const GALLERY_MIME_TYPES: &[&str] = &["image/jpeg", "image/png", "image/webp", "image/gif"];

impl UploadKind {
    pub fn parse(value: &str) -> Result<Self, CoreError> {
        match value {
            "avatar" => Ok(UploadKind::Avatar),
            "gallery" => Ok(UploadKind::Gallery),
            other => Err(CoreError::Validation(format!(
                "Unknown upload kind: {other}. Must be avatar or gallery"
            ))),
        }
    }

    pub fn allowed_mime_types(&self) -> &'static [&'static str] {
        match self {
            UploadKind::Avatar => AVATAR_MIME_TYPES,
            UploadKind::Gallery => GALLERY_MIME_TYPES,
        }
    }

    pub fn max_bytes(&self) -> usize {
        match self {
            UploadKind::Avatar => MAX_AVATAR_BYTES,
            UploadKind::Gallery => MAX_GALLERY_BYTES,
        }
    }
}

/// Validate an upload's content type and size against the kind's constraints.
pub fn validate_upload(kind: UploadKind, content_type: &str, size: usize) -> Result<(), CoreError> {
    if !kind.allowed_mime_types().contains(&content_type) {
        return Err(CoreError::Validation(format!(
            "Unsupported content type {content_type}. Allowed: {}",
            kind.allowed_mime_types().join(", ")
        )));
    }
    if size > kind.max_bytes() {
        return Err(CoreError::Validation(format!(
            "File too large: {size} bytes exceeds the {} byte limit",
            kind.max_bytes()
        )));
    }
    Ok(())
}
