// PDF text extraction via the `pdf-extract` crate.
//
// Page text is concatenated in document order. Encrypted or image-only PDFs
// either fail here or come back empty; both end up as an extraction error
// in the comparison pipeline.

use std::path::Path;

use anyhow::{anyhow, Result};
use tracing::debug;

use super::traits::TextExtractor;

#[derive(Debug, Default, Clone, Copy)]
pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    fn extract_text(&self, path: &Path) -> Result<String> {
        // pdf-extract panics on some malformed files instead of returning an error
        let text = match std::panic::catch_unwind(|| pdf_extract::extract_text(path)) {
            Ok(result) => result.map_err(|e| {
                anyhow!("Failed to extract text from PDF {}: {e}", path.display())
            })?,
            Err(_) => anyhow::bail!("PDF parser crashed on {}", path.display()),
        };
        debug!(path = %path.display(), chars = text.len(), "Extracted PDF text");
        Ok(text.to_lowercase())
    }
}

/// Cheap content sniff: does this look like a PDF file?
pub fn looks_like_pdf(head: &[u8]) -> bool {
    head.starts_with(b"%PDF-")
}
