//! Local form checks: attachment file type and password confirmation.

use std::path::Path;

use crate::error::{PortalError, Result};

/// MIME type for a file, from its extension. Unrecognized extensions map to
/// `application/octet-stream`.
pub fn mime_for_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    match ext.as_str() {
        "pdf" => "application/pdf",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        "svg" => "image/svg+xml",
        "tif" | "tiff" => "image/tiff",
        "heic" => "image/heic",
        "txt" => "text/plain",
        "csv" => "text/csv",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "xls" => "application/vnd.ms-excel",
        "xlsx" => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        "zip" => "application/zip",
        _ => "application/octet-stream",
    }
}

/// Payment receipts may be images or PDFs only.
pub fn is_accepted_attachment(mime: &str) -> bool {
    mime.starts_with("image/") || mime == "application/pdf"
}

/// Returns the MIME type of an acceptable attachment.
pub fn validate_attachment(path: &Path) -> Result<&'static str> {
    let mime = mime_for_path(path);
    if !is_accepted_attachment(mime) {
        return Err(PortalError::InvalidFileType {
            file: path.display().to_string(),
            mime: mime.to_string(),
        });
    }
    Ok(mime)
}

pub fn validate_password_change(new_password: &str, confirmation: &str) -> Result<()> {
    if new_password.is_empty() {
        return Err(PortalError::EmptyPassword);
    }
    if new_password != confirmation {
        return Err(PortalError::PasswordMismatch);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn images_and_pdfs_are_accepted() {
        for name in ["receipt.pdf", "scan.PNG", "photo.jpeg", "x.webp"] {
            assert!(validate_attachment(Path::new(name)).is_ok(), "{name}");
        }
        assert_eq!(
            validate_attachment(Path::new("r.Pdf")).unwrap(),
            "application/pdf"
        );
    }

    #[test]
    fn other_types_are_rejected() {
        for name in ["notes.txt", "sheet.xlsx", "archive.zip", "no_extension"] {
            let err = validate_attachment(Path::new(name)).unwrap_err();
            assert!(matches!(err, PortalError::InvalidFileType { .. }), "{name}");
        }
    }

    #[test]
    fn prefix_check_is_on_the_mime_type() {
        assert!(is_accepted_attachment("image/x-anything"));
        assert!(!is_accepted_attachment("application/pdfx"));
        assert!(!is_accepted_attachment("text/image"));
    }

    #[test]
    fn password_confirmation_must_match() {
        assert!(validate_password_change("s3cret", "s3cret").is_ok());
        assert!(matches!(
            validate_password_change("s3cret", "s3cre7"),
            Err(PortalError::PasswordMismatch)
        ));
        assert!(matches!(
            validate_password_change("", ""),
            Err(PortalError::EmptyPassword)
        ));
    }
}
