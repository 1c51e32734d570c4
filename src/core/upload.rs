//! # Resume Upload Validation
//!
//! Local validation for the resume attach flow. Nothing is transmitted
//! anywhere: an accepted file only drives a simulated review cycle (one bot
//! acknowledgment after a short delay, then the attachment slot is cleared).
//!
//! Validation order matches the original widget: document type first, then
//! size. A rejected file changes no state beyond the blocking alert shown
//! by the UI.

use std::fmt;
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Attachments at or above this size are rejected.
pub const MAX_RESUME_BYTES: u64 = 5 * 1024 * 1024;

/// Delay before the simulated review acknowledgment is posted.
pub const REVIEW_ACK_DELAY: Duration = Duration::from_millis(2000);
/// Delay after the acknowledgment before the attachment slot is cleared.
pub const ATTACHMENT_CLEAR_DELAY: Duration = Duration::from_millis(3000);

/// Accepted resume document types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Doc,
    Docx,
}

impl DocumentKind {
    /// Maps a file extension (without the dot, any case) to a kind.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "pdf" => Some(Self::Pdf),
            "doc" => Some(Self::Doc),
            "docx" => Some(Self::Docx),
            _ => None,
        }
    }

    pub fn mime(&self) -> &'static str {
        match self {
            Self::Pdf => "application/pdf",
            Self::Doc => "application/msword",
            Self::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
        }
    }
}

/// An accepted attachment. Holds metadata only — file content is never read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeFile {
    pub name: String,
    pub kind: DocumentKind,
    pub size: u64,
}

/// Why an attachment was rejected. `Display` output is the user-facing
/// alert text.
#[derive(Debug)]
pub enum UploadError {
    UnsupportedType,
    TooLarge(u64),
    Unreadable(std::io::Error),
}

impl fmt::Display for UploadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UploadError::UnsupportedType => {
                write!(f, "Please upload a PDF or Word document (.pdf, .doc, .docx)")
            }
            UploadError::TooLarge(_) => write!(f, "File size must be less than 5MB"),
            UploadError::Unreadable(e) => write!(f, "Could not read file: {e}"),
        }
    }
}

impl std::error::Error for UploadError {}

/// Pure validation over a file name and size.
pub fn validate(name: &str, size: u64) -> Result<ResumeFile, UploadError> {
    let kind = Path::new(name)
        .extension()
        .and_then(|e| e.to_str())
        .and_then(DocumentKind::from_extension)
        .ok_or(UploadError::UnsupportedType)?;

    if size >= MAX_RESUME_BYTES {
        return Err(UploadError::TooLarge(size));
    }

    Ok(ResumeFile {
        name: name.to_string(),
        kind,
        size,
    })
}

/// Validates a file on disk: type by extension, size from metadata.
pub fn inspect(path: &Path) -> Result<ResumeFile, UploadError> {
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or(UploadError::UnsupportedType)?
        .to_string();

    // Type is checked before size so an unreadable .txt still reports the
    // type problem, matching the original validation order.
    Path::new(&name)
        .extension()
        .and_then(|e| e.to_str())
        .and_then(DocumentKind::from_extension)
        .ok_or(UploadError::UnsupportedType)?;

    let metadata = fs::metadata(path).map_err(UploadError::Unreadable)?;
    validate(&name, metadata.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn accepts_each_document_kind() {
        assert_eq!(validate("cv.pdf", 1024).unwrap().kind, DocumentKind::Pdf);
        assert_eq!(validate("cv.doc", 1024).unwrap().kind, DocumentKind::Doc);
        assert_eq!(validate("cv.DOCX", 1024).unwrap().kind, DocumentKind::Docx);
    }

    #[test]
    fn rejects_unsupported_type_before_size() {
        // A huge .txt must report the type problem, not the size problem.
        let err = validate("notes.txt", MAX_RESUME_BYTES * 2).unwrap_err();
        assert!(matches!(err, UploadError::UnsupportedType));
    }

    #[test]
    fn rejects_missing_extension() {
        assert!(matches!(
            validate("resume", 1024),
            Err(UploadError::UnsupportedType)
        ));
    }

    #[test]
    fn rejects_file_at_size_cap() {
        assert!(matches!(
            validate("cv.pdf", MAX_RESUME_BYTES),
            Err(UploadError::TooLarge(_))
        ));
        assert!(validate("cv.pdf", MAX_RESUME_BYTES - 1).is_ok());
    }

    #[test]
    fn inspect_reads_size_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.pdf");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(b"%PDF-1.4 stub").unwrap();

        let accepted = inspect(&path).unwrap();
        assert_eq!(accepted.name, "resume.pdf");
        assert_eq!(accepted.kind, DocumentKind::Pdf);
        assert_eq!(accepted.size, 13);
    }

    #[test]
    fn inspect_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = inspect(&dir.path().join("ghost.pdf")).unwrap_err();
        assert!(matches!(err, UploadError::Unreadable(_)));
    }

    #[test]
    fn alert_text_matches_widget_copy() {
        assert_eq!(
            UploadError::UnsupportedType.to_string(),
            "Please upload a PDF or Word document (.pdf, .doc, .docx)"
        );
        assert_eq!(
            UploadError::TooLarge(MAX_RESUME_BYTES).to_string(),
            "File size must be less than 5MB"
        );
    }
}
