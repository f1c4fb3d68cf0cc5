// PDF text extraction.
// Kept behind a trait so the loader can be exercised without real brochures.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PdfError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to extract text: {0}")]
    Extract(String),

    #[error("extraction task aborted: {0}")]
    Panicked(String),
}

/// Turns raw PDF bytes into plain text. Called from a blocking thread.
pub trait PdfExtractor: Send + Sync {
    fn extract_text(&self, bytes: &[u8]) -> Result<String, PdfError>;
}

/// Thin wrapper over the `pdf-extract` crate.
pub struct PdfExtractCrate;

impl PdfExtractor for PdfExtractCrate {
    fn extract_text(&self, bytes: &[u8]) -> Result<String, PdfError> {
        if !looks_like_pdf(bytes) {
            return Err(PdfError::Extract("missing %PDF- header".to_string()));
        }
        pdf_extract::extract_text_from_mem(bytes).map_err(|e| PdfError::Extract(e.to_string()))
    }
}

/// Returns true if the bytes start with the PDF magic header.
pub fn looks_like_pdf(head: &[u8]) -> bool {
    head.starts_with(b"%PDF-")
}
