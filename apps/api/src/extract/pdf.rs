use super::{DocumentFormat, ExtractError};

/// Extracts text from an in-memory PDF.
///
/// Digital-native PDFs only. Scanned documents carry no text layer, so they
/// come back (near-)empty and simply score low downstream; OCR is out of
/// scope here.
pub fn extract(bytes: &[u8]) -> Result<String, ExtractError> {
    pdf_extract::extract_text_from_mem(bytes).map_err(|e| ExtractError::Parse {
        format: DocumentFormat::Pdf,
        message: e.to_string(),
    })
}
