// Data models shared across the pipeline, the store, and the web layer.

use serde::{Deserialize, Serialize};

use crate::scoring::level::PlagiarismLevel;

/// Which side of a comparison a document sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentRole {
    /// The document being checked
    Test,
    /// The document it's checked against
    Reference,
}

impl DocumentRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentRole::Test => "test",
            DocumentRole::Reference => "reference",
        }
    }
}

impl std::fmt::Display for DocumentRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The outcome of comparing two documents.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Comparison {
    /// Cosine similarity in [0, 1]
    pub similarity: f64,
    /// Severity band derived from `similarity`
    pub level: PlagiarismLevel,
}

impl Comparison {
    pub fn from_similarity(similarity: f64) -> Self {
        Self {
            similarity,
            level: PlagiarismLevel::from_score(similarity),
        }
    }

    /// Similarity as a percentage with two decimals, e.g. "87.50%".
    pub fn percentage(&self) -> String {
        format!("{:.2}%", self.similarity * 100.0)
    }
}
