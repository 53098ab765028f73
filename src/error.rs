// Comparison errors — the failures the core pipeline can report.
//
// A score of 0.0 always means "no lexical overlap"; it's never used to
// paper over one of these.

use thiserror::Error;

use crate::models::DocumentRole;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompareError {
    /// A document produced no text (empty file, unreadable PDF, scanned images).
    #[error("no text could be extracted from the {role} document: {message}")]
    Extraction {
        role: DocumentRole,
        message: String,
    },

    /// Vectors of different lengths reached the scorer.
    #[error("vector dimension mismatch: {left} vs {right}")]
    DimensionMismatch { left: usize, right: usize },
}

impl CompareError {
    /// Empty-text failure for the given document.
    pub fn empty(role: DocumentRole) -> Self {
        CompareError::Extraction {
            role,
            message: "the extracted text is empty".to_string(),
        }
    }
}
