// Plain-text extraction for .txt / .md documents.

use std::path::Path;

use anyhow::{Context, Result};

use super::traits::TextExtractor;

#[derive(Debug, Default, Clone, Copy)]
pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    fn extract_text(&self, path: &Path) -> Result<String> {
        let bytes = std::fs::read(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        // Lossy decode: a stray invalid byte shouldn't sink the whole document
        Ok(String::from_utf8_lossy(&bytes).to_lowercase())
    }
}
