// Shared-vocabulary frequency vectors for a pair of documents.
//
// Both documents are projected onto the same vocabulary: the sorted union of
// their tokens. Sorting makes the layout reproducible, so two builds over
// the same inputs produce identical vectors.

use std::collections::BTreeMap;

use serde::Serialize;

use super::normalize::{normalize, tokenize};

/// The vocabulary of a document pair and one count vector per document,
/// index-aligned to the vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VectorSpace {
    /// Distinct tokens from either document, lexicographically ascending
    pub vocabulary: Vec<String>,
    /// Token counts for the test document
    pub test: Vec<u32>,
    /// Token counts for the reference document
    pub reference: Vec<u32>,
}

impl VectorSpace {
    /// Number of dimensions (vocabulary size).
    pub fn len(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vocabulary.is_empty()
    }

    /// Iterate `(word, test_count, reference_count)` rows in vocabulary order.
    pub fn rows(&self) -> impl Iterator<Item = (&str, u32, u32)> + '_ {
        self.vocabulary
            .iter()
            .zip(self.test.iter().zip(self.reference.iter()))
            .map(|(word, (&t, &r))| (word.as_str(), t, r))
    }
}

/// Normalize both texts and build their aligned frequency vectors.
///
/// Two empty inputs give an empty space; that's not an error at this layer.
pub fn build_vectors(test_text: &str, reference_text: &str) -> VectorSpace {
    let test_norm = normalize(test_text);
    let reference_norm = normalize(reference_text);
    build_from_normalized(&test_norm, &reference_norm)
}

/// Build vectors from texts that have already been normalized.
pub(crate) fn build_from_normalized(test_norm: &str, reference_norm: &str) -> VectorSpace {
    // BTreeMap keeps keys sorted, which gives us the vocabulary order for free
    let mut counts: BTreeMap<&str, (u32, u32)> = BTreeMap::new();
    for word in tokenize(test_norm) {
        counts.entry(word).or_default().0 += 1;
    }
    for word in tokenize(reference_norm) {
        counts.entry(word).or_default().1 += 1;
    }

    let mut space = VectorSpace {
        vocabulary: Vec::with_capacity(counts.len()),
        test: Vec::with_capacity(counts.len()),
        reference: Vec::with_capacity(counts.len()),
    };
    for (word, (t, r)) in counts {
        space.vocabulary.push(word.to_string());
        space.test.push(t);
        space.reference.push(r);
    }
    space
}
