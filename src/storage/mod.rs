// Document storage — one "test" slot and one "reference" slot on disk.
//
// Each slot holds at most one document. Uploading into a slot clears its
// directory first, so a comparison always sees exactly the latest upload
// for each role.

pub mod sanitize;
pub mod slots;

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::models::DocumentRole;

pub use self::sanitize::sanitize_filename;
pub use self::slots::{DocumentStore, SlotSnapshot, StoredDocument, UploadError};

/// Where the two slots live and which file types they accept.
#[derive(Debug, Clone, Serialize)]
pub struct StorageConfig {
    pub reference_dir: PathBuf,
    pub test_dir: PathBuf,
    /// Lower-case extensions without the dot, e.g. `["pdf"]`
    pub allowed_extensions: Vec<String>,
}

impl StorageConfig {
    /// Slots under `<base>/reference` and `<base>/test`, PDFs only.
    pub fn under(base: impl AsRef<Path>) -> Self {
        let base = base.as_ref();
        Self {
            reference_dir: base.join("reference"),
            test_dir: base.join("test"),
            allowed_extensions: vec!["pdf".to_string()],
        }
    }

    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.allowed_extensions = extensions
            .into_iter()
            .map(|e| e.as_ref().trim().trim_start_matches('.').to_ascii_lowercase())
            .filter(|e| !e.is_empty())
            .collect();
        self
    }

    pub fn dir_for(&self, role: DocumentRole) -> &Path {
        match role {
            DocumentRole::Test => &self.test_dir,
            DocumentRole::Reference => &self.reference_dir,
        }
    }

    /// True when the filename has an extension on the allow-list.
    /// The check is case-insensitive and only looks at the last extension.
    pub fn is_allowed(&self, filename: &str) -> bool {
        match filename.rsplit_once('.') {
            Some((_, ext)) => {
                let ext = ext.to_ascii_lowercase();
                self.allowed_extensions.iter().any(|allowed| *allowed == ext)
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_allowed() {
        let config = StorageConfig::under("/tmp/plagcheck");
        assert!(config.is_allowed("essay.pdf"));
        assert!(config.is_allowed("ESSAY.PDF"));
        assert!(config.is_allowed("essay.final.pdf"));
        assert!(!config.is_allowed("essay.pdf.exe"));
        assert!(!config.is_allowed("pdf"));
        assert!(!config.is_allowed("essay.txt"));
    }

    #[test]
    fn test_with_extensions_normalizes() {
        let config = StorageConfig::under("/tmp/plagcheck").with_extensions([" .PDF", "txt", ""]);
        assert_eq!(config.allowed_extensions, vec!["pdf", "txt"]);
        assert!(config.is_allowed("notes.txt"));
    }

    #[test]
    fn test_dir_for_role() {
        let config = StorageConfig::under("/srv/uploads");
        assert_eq!(
            config.dir_for(DocumentRole::Test),
            Path::new("/srv/uploads/test")
        );
        assert_eq!(
            config.dir_for(DocumentRole::Reference),
            Path::new("/srv/uploads/reference")
        );
    }
}
