// Comparison pipeline — normalize, vectorize, score, classify.
//
// `compare` is the whole contract: two extracted texts in, a similarity and
// a severity band out. `analyze` runs the same steps but keeps the
// intermediate results around for the `--details` dump.
//
// The first argument is always the test document, the second the reference.

use std::path::Path;

use serde::Serialize;
use tracing::{debug, warn};

use crate::error::CompareError;
use crate::extract::traits::TextExtractor;
use crate::models::{Comparison, DocumentRole};
use crate::scoring::cosine::cosine_similarity;
use crate::text::normalize::normalize;
use crate::text::vectors::{build_from_normalized, VectorSpace};

/// A comparison together with everything computed along the way.
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    pub normalized_test: String,
    pub normalized_reference: String,
    pub space: VectorSpace,
    pub comparison: Comparison,
}

/// Compare two extracted document texts.
///
/// Fails with `CompareError::Extraction` if either text is empty, before any
/// vectorization happens.
pub fn compare(test_text: &str, reference_text: &str) -> Result<Comparison, CompareError> {
    analyze(test_text, reference_text).map(|analysis| analysis.comparison)
}

/// Like `compare`, but returns the normalized texts and vectors as well.
pub fn analyze(test_text: &str, reference_text: &str) -> Result<Analysis, CompareError> {
    if test_text.is_empty() {
        return Err(CompareError::empty(DocumentRole::Test));
    }
    if reference_text.is_empty() {
        return Err(CompareError::empty(DocumentRole::Reference));
    }

    let normalized_test = normalize(test_text);
    let normalized_reference = normalize(reference_text);
    let space = build_from_normalized(&normalized_test, &normalized_reference);
    let similarity = cosine_similarity(&space.test, &space.reference)?;
    let comparison = Comparison::from_similarity(similarity);

    debug!(
        vocabulary = space.len(),
        similarity,
        level = %comparison.level,
        "Compared documents"
    );

    Ok(Analysis {
        normalized_test,
        normalized_reference,
        space,
        comparison,
    })
}

/// Extract both documents from disk and analyze them.
///
/// An extractor failure is logged and treated like an empty document, so it
/// surfaces as `CompareError::Extraction` rather than a score.
pub fn check_documents(
    extractor: &dyn TextExtractor,
    test_path: &Path,
    reference_path: &Path,
) -> Result<Analysis, CompareError> {
    let test_text = extract_or_empty(extractor, test_path, DocumentRole::Test);
    let reference_text = extract_or_empty(extractor, reference_path, DocumentRole::Reference);
    analyze(&test_text, &reference_text)
}

fn extract_or_empty(extractor: &dyn TextExtractor, path: &Path, role: DocumentRole) -> String {
    match extractor.extract_text(path) {
        Ok(text) => text,
        Err(e) => {
            warn!(error = %e, path = %path.display(), %role, "Text extraction failed");
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::level::PlagiarismLevel;

    #[test]
    fn test_cat_and_dog() {
        let result = compare("The cat sat on the mat.", "The dog sat on the mat.").unwrap();
        assert!((result.similarity - 0.875).abs() < 1e-12);
        assert_eq!(result.level, PlagiarismLevel::Heavy);
    }

    #[test]
    fn test_empty_inputs_fail() {
        assert_eq!(
            compare("", "anything").unwrap_err(),
            CompareError::empty(DocumentRole::Test)
        );
        assert_eq!(
            compare("anything", "").unwrap_err(),
            CompareError::empty(DocumentRole::Reference)
        );
    }

    #[test]
    fn test_punctuation_only_scores_zero() {
        // Non-empty text that normalizes to nothing is a legitimate zero, not an error
        let result = compare("!!! 123 ???", "some words here").unwrap();
        assert_eq!(result.similarity, 0.0);
        assert_eq!(result.level, PlagiarismLevel::None);
    }

    #[test]
    fn test_analysis_carries_intermediates() {
        let analysis = analyze("Hello, World!", "hello there").unwrap();
        assert_eq!(analysis.normalized_test, "hello world");
        assert_eq!(analysis.normalized_reference, "hello there");
        assert_eq!(analysis.space.vocabulary, vec!["hello", "there", "world"]);
        assert_eq!(analysis.comparison.percentage(), "50.00%");
    }
}
