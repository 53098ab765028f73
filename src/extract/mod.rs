// Text extraction — turning uploaded files into lower-cased plain text.

pub mod pdf;
pub mod plain;
pub mod traits;

use std::path::Path;

use anyhow::Result;

use self::pdf::PdfExtractor;
use self::plain::PlainTextExtractor;
use self::traits::TextExtractor;

/// Picks an extractor by file extension: PDFs go through `pdf-extract`,
/// `.txt` and `.md` files are read as-is.
#[derive(Debug, Default, Clone, Copy)]
pub struct DocumentExtractor {
    pdf: PdfExtractor,
    plain: PlainTextExtractor,
}

impl TextExtractor for DocumentExtractor {
    fn extract_text(&self, path: &Path) -> Result<String> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "pdf" => self.pdf.extract_text(path),
            "txt" | "md" => self.plain.extract_text(path),
            _ => anyhow::bail!(
                "Unsupported document type for {} (expected .pdf, .txt or .md)",
                path.display()
            ),
        }
    }
}
