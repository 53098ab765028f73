// Text extractor trait — the swap-ready seam between file formats and the
// comparison pipeline.

use std::path::Path;

use anyhow::Result;

/// Trait for pulling plain text out of a stored document.
///
/// Implementations return lower-cased text. Extraction is blocking; async
/// callers should run it on `spawn_blocking`.
pub trait TextExtractor: Send + Sync {
    fn extract_text(&self, path: &Path) -> Result<String>;
}
