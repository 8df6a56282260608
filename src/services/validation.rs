use std::path::Path;

use crate::models::Identity;

/// Client-declared media types the workflow endpoint accepts.
pub const ALLOWED_MIME_TYPES: [&str; 5] = [
    "image/jpeg",
    "image/jpg",
    "image/png",
    "image/webp",
    "image/gif",
];

/// Extension filter for the file picker. Mirrors the MIME allow-list; the
/// declared type can be spoofed, so this is a convenience, not a boundary.
pub const ALLOWED_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "webp", "gif"];

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ValidationError {
    #[error("Bitte gib deinen vollständigen Namen ein.")]
    EmptyFullName,
    #[error("Bitte gib deine Personalnummer ein.")]
    EmptyEmployeeId,
    #[error("Bitte speichere zuerst Name und Personalnummer.")]
    IdentityRequired,
    #[error("Bitte füge ein Beleg-Foto oder eine Beschreibung hinzu.")]
    EmptySubmission,
    #[error("Dateiformat nicht unterstützt ({0}). Erlaubt: JPEG, PNG, WEBP, GIF.")]
    UnsupportedFileType(String),
}

/// Maps a file path to its declared media type via the extension, or None
/// when the extension is not on the allow-list.
pub fn mime_for_path(path: &str) -> Option<&'static str> {
    let ext = Path::new(path).extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "jpg" => Some("image/jpg"),
        "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "webp" => Some("image/webp"),
        "gif" => Some("image/gif"),
        _ => None,
    }
}

fn declared_type(path: &str) -> String {
    Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_else(|| "unbekannt".to_string())
}

/// Submission preconditions, checked in order; the first failure wins and
/// no network call is attempted.
pub fn validate_submission(
    identity: Option<&Identity>,
    comment: &str,
    file_path: Option<&str>,
) -> Result<(), ValidationError> {
    let identity = identity.ok_or(ValidationError::IdentityRequired)?;
    if identity.full_name.trim().is_empty() || identity.employee_id.trim().is_empty() {
        return Err(ValidationError::IdentityRequired);
    }

    if file_path.is_none() && comment.trim().is_empty() {
        return Err(ValidationError::EmptySubmission);
    }

    if let Some(path) = file_path {
        if mime_for_path(path).is_none() {
            return Err(ValidationError::UnsupportedFileType(declared_type(path)));
        }
    }

    Ok(())
}
