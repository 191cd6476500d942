//! Text extraction from uploaded résumé documents.
//!
//! The scorer consumes flat text only; this module turns raw PDF/DOCX bytes
//! into that text. Dispatch goes by leading magic bytes rather than the
//! uploaded extension, so a mislabeled file fails loudly here instead of
//! producing garbage text downstream.

use std::fmt;

use thiserror::Error;

pub mod docx;
pub mod pdf;

/// PDF file signature.
const PDF_SIGNATURE: &[u8] = b"%PDF";
/// Zip local-file-header signature; DOCX is a zip container.
const ZIP_SIGNATURE: &[u8] = b"PK";

/// Document formats the service can extract text from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Docx,
}

impl DocumentFormat {
    /// Maps an uploaded file extension to a format tag. Case-insensitive.
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "pdf" => Some(Self::Pdf),
            "docx" => Some(Self::Docx),
            _ => None,
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            Self::Pdf => "application/pdf",
            Self::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pdf => write!(f, "pdf"),
            Self::Docx => write!(f, "docx"),
        }
    }
}

#[derive(Debug, Error)]
pub enum ExtractError {
    /// The bytes carry no known signature. The declared format (from the
    /// upload's extension) is kept for the error message only.
    #[error("unrecognized document signature (declared format: {declared})")]
    UnsupportedFormat { declared: DocumentFormat },

    #[error("failed to parse {format} document: {message}")]
    Parse {
        format: DocumentFormat,
        message: String,
    },
}

/// Sniffs the document format from leading magic bytes.
pub fn sniff_format(bytes: &[u8]) -> Option<DocumentFormat> {
    if bytes.starts_with(PDF_SIGNATURE) {
        Some(DocumentFormat::Pdf)
    } else if bytes.starts_with(ZIP_SIGNATURE) {
        Some(DocumentFormat::Docx)
    } else {
        None
    }
}

/// Extracts plain text from document bytes, dispatching on the sniffed
/// signature. `declared` only feeds the unsupported-format error message.
pub fn extract_text(bytes: &[u8], declared: DocumentFormat) -> Result<String, ExtractError> {
    match sniff_format(bytes) {
        Some(DocumentFormat::Pdf) => pdf::extract(bytes),
        Some(DocumentFormat::Docx) => docx::extract(bytes),
        None => Err(ExtractError::UnsupportedFormat { declared }),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sniff_recognizes_pdf_signature() {
        assert_eq!(sniff_format(b"%PDF-1.7 rest"), Some(DocumentFormat::Pdf));
    }

    #[test]
    fn test_sniff_recognizes_zip_signature() {
        assert_eq!(
            sniff_format(b"PK\x03\x04 payload"),
            Some(DocumentFormat::Docx)
        );
    }

    #[test]
    fn test_sniff_rejects_unknown_and_short_input() {
        assert_eq!(sniff_format(b"plain text resume"), None);
        assert_eq!(sniff_format(b"P"), None);
        assert_eq!(sniff_format(b""), None);
    }

    #[test]
    fn test_extension_mapping_is_case_insensitive() {
        assert_eq!(DocumentFormat::from_extension("PDF"), Some(DocumentFormat::Pdf));
        assert_eq!(DocumentFormat::from_extension("Docx"), Some(DocumentFormat::Docx));
        assert_eq!(DocumentFormat::from_extension("doc"), None);
        assert_eq!(DocumentFormat::from_extension(""), None);
    }

    #[test]
    fn test_unknown_signature_reports_declared_format() {
        let err = extract_text(b"not a document", DocumentFormat::Pdf).unwrap_err();
        assert!(matches!(
            err,
            ExtractError::UnsupportedFormat {
                declared: DocumentFormat::Pdf
            }
        ));
        assert!(err.to_string().contains("pdf"));
    }

    #[test]
    fn test_zip_bytes_that_are_not_docx_fail_as_parse_error() {
        let err = extract_text(b"PK\x03\x04 not really a docx", DocumentFormat::Docx).unwrap_err();
        assert!(matches!(
            err,
            ExtractError::Parse {
                format: DocumentFormat::Docx,
                ..
            }
        ));
    }

    #[test]
    fn test_pdf_bytes_without_a_body_fail_as_parse_error() {
        let err = extract_text(b"%PDF-1.4 garbage with no xref", DocumentFormat::Pdf).unwrap_err();
        assert!(matches!(
            err,
            ExtractError::Parse {
                format: DocumentFormat::Pdf,
                ..
            }
        ));
    }
}
