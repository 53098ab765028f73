// Single-slot document store.
//
// Each role owns one directory and one in-memory slot behind a tokio RwLock.
// Uploads take the slot's write lock for the whole write-and-swap, and
// comparisons hold read locks on both slots while they extract, so a check
// never sees a half-written file.
//
// Lock order is always test before reference.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::{info, warn};

use super::sanitize::sanitize_filename;
use super::StorageConfig;
use crate::extract::pdf::looks_like_pdf;
use crate::models::DocumentRole;

/// The document currently held in a slot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoredDocument {
    pub role: DocumentRole,
    /// Sanitized filename as written to disk
    pub filename: String,
    /// Full path on disk (not exposed over the API)
    #[serde(skip)]
    pub path: PathBuf,
    pub size_bytes: u64,
    /// RFC 3339 timestamp of the upload
    pub uploaded_at: String,
}

/// Both slots at one point in time.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SlotSnapshot {
    pub test: Option<StoredDocument>,
    pub reference: Option<StoredDocument>,
}

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("No selected file")]
    NoSelectedFile,

    #[error("Invalid file type: {0}")]
    InvalidType(String),

    #[error("Invalid file name: {0}")]
    InvalidFilename(String),

    #[error("Failed to store upload: {0}")]
    Io(#[from] std::io::Error),
}

pub struct DocumentStore {
    config: StorageConfig,
    test: RwLock<Option<StoredDocument>>,
    reference: RwLock<Option<StoredDocument>>,
}

impl DocumentStore {
    /// Create both slot directories and pick up a document left over from a
    /// previous run, if its directory holds exactly one allowed file.
    pub fn open(config: StorageConfig) -> Result<Self> {
        let mut slots = [None, None];
        for (i, role) in [DocumentRole::Test, DocumentRole::Reference]
            .into_iter()
            .enumerate()
        {
            let dir = config.dir_for(role);
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create {role} directory {}", dir.display()))?;
            slots[i] = recover_slot(&config, role)?;
        }
        let [test, reference] = slots;

        Ok(Self {
            config,
            test: RwLock::new(test),
            reference: RwLock::new(reference),
        })
    }

    pub fn config(&self) -> &StorageConfig {
        &self.config
    }

    /// The lock guarding a role's slot. Hold read guards on both slots for
    /// the duration of a comparison.
    pub fn slot(&self, role: DocumentRole) -> &RwLock<Option<StoredDocument>> {
        match role {
            DocumentRole::Test => &self.test,
            DocumentRole::Reference => &self.reference,
        }
    }

    pub async fn current(&self, role: DocumentRole) -> Option<StoredDocument> {
        self.slot(role).read().await.clone()
    }

    pub async fn snapshot(&self) -> SlotSnapshot {
        let test = self.test.read().await;
        let reference = self.reference.read().await;
        SlotSnapshot {
            test: test.clone(),
            reference: reference.clone(),
        }
    }

    /// Store an upload in a role's slot, replacing whatever was there.
    pub async fn upload(
        &self,
        role: DocumentRole,
        filename: &str,
        bytes: &[u8],
    ) -> Result<StoredDocument, UploadError> {
        if filename.trim().is_empty() {
            return Err(UploadError::NoSelectedFile);
        }
        if !self.config.is_allowed(filename) {
            return Err(UploadError::InvalidType(filename.to_string()));
        }
        let safe_name = sanitize_filename(filename);
        if safe_name.is_empty() || !self.config.is_allowed(&safe_name) {
            return Err(UploadError::InvalidFilename(filename.to_string()));
        }
        if safe_name.to_ascii_lowercase().ends_with(".pdf") && !looks_like_pdf(bytes) {
            return Err(UploadError::InvalidType(filename.to_string()));
        }

        let mut slot = self.slot(role).write().await;
        let dir = self.config.dir_for(role);
        fs::create_dir_all(dir)?;

        // Write beside the final name and rename into place. Until the rename
        // succeeds the previous document stays on disk and in the slot.
        let path = dir.join(&safe_name);
        let partial = dir.join(format!(".{safe_name}.partial"));
        if let Err(e) = fs::write(&partial, bytes).and_then(|_| fs::rename(&partial, &path)) {
            let _ = fs::remove_file(&partial);
            warn!(error = %e, %role, filename = %safe_name, "Upload not stored; keeping previous document");
            return Err(e.into());
        }
        clear_directory_except(dir, &path);

        let doc = StoredDocument {
            role,
            filename: safe_name,
            path,
            size_bytes: bytes.len() as u64,
            uploaded_at: Utc::now().to_rfc3339(),
        };
        info!(%role, filename = %doc.filename, size = doc.size_bytes, "Stored upload");
        *slot = Some(doc.clone());
        Ok(doc)
    }
}

/// Remove every regular file in a directory except `keep`. Failures are
/// logged, not fatal: a stale file left behind is never read because the
/// slot points at the new upload.
fn clear_directory_except(dir: &Path, keep: &Path) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            warn!(error = %e, dir = %dir.display(), "Failed to list slot directory");
            return;
        }
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_file() && path != keep {
            if let Err(e) = fs::remove_file(&path) {
                warn!(error = %e, path = %path.display(), "Failed to remove old upload");
            }
        }
    }
}

fn recover_slot(config: &StorageConfig, role: DocumentRole) -> Result<Option<StoredDocument>> {
    let dir = config.dir_for(role);
    let mut candidates = Vec::new();
    for entry in fs::read_dir(dir).with_context(|| format!("Failed to list {}", dir.display()))? {
        let entry = entry?;
        let path = entry.path();
        let name = entry.file_name().to_string_lossy().into_owned();
        if path.is_file() && config.is_allowed(&name) {
            candidates.push((name, path, entry.metadata()?));
        }
    }

    if candidates.len() > 1 {
        warn!(
            %role,
            files = candidates.len(),
            dir = %dir.display(),
            "Slot directory holds several documents; starting with an empty slot"
        );
        return Ok(None);
    }

    Ok(candidates.pop().map(|(filename, path, meta)| {
        let uploaded_at = meta
            .modified()
            .map(|t| DateTime::<Utc>::from(t).to_rfc3339())
            .unwrap_or_default();
        info!(%role, %filename, "Recovered stored document");
        StoredDocument {
            role,
            filename,
            path,
            size_bytes: meta.len(),
            uploaded_at,
        }
    }))
}
