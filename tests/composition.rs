// Composition tests — verifying that the pipeline stages chain together.
//
// These tests exercise the data flow between modules:
//   normalize -> build_vectors -> cosine_similarity -> PlagiarismLevel
// through compare/analyze, plus check_documents reading real files from a
// temp directory.

use std::path::Path;

use plagcheck::compare::{analyze, check_documents, compare};
use plagcheck::error::CompareError;
use plagcheck::extract::traits::TextExtractor;
use plagcheck::extract::DocumentExtractor;
use plagcheck::models::DocumentRole;
use plagcheck::scoring::level::PlagiarismLevel;

const ESSAY: &str = "Plagiarism is the representation of another author's language, \
    thoughts, ideas, or expressions as one's own original work. In educational \
    contexts there are differing definitions of plagiarism depending on the institution.";

const PARAPHRASE: &str = "Plagiarism means presenting another author's language or ideas \
    as your own original work. Definitions of plagiarism differ between institutions \
    in educational contexts.";

const UNRELATED: &str = "Sourdough bread needs flour water salt and a lively starter; \
    knead gently then bake hot.";

// ============================================================
// End-to-end example
// ============================================================

#[test]
fn cat_and_dog_end_to_end() {
    let analysis = analyze("The cat sat on the mat.", "The dog sat on the mat.").unwrap();
    assert_eq!(
        analysis.space.vocabulary,
        vec!["cat", "dog", "mat", "on", "sat", "the"]
    );
    assert_eq!(analysis.space.test, vec![1, 0, 1, 1, 1, 2]);
    assert_eq!(analysis.space.reference, vec![0, 1, 1, 1, 1, 2]);
    assert!((analysis.comparison.similarity - 0.875).abs() < 1e-9);
    assert_eq!(analysis.comparison.level, PlagiarismLevel::Heavy);
    assert_eq!(analysis.comparison.level.as_str(), "Heavy plagiarism");
}

#[test]
fn compare_matches_analyze() {
    let direct = compare(ESSAY, PARAPHRASE).unwrap();
    let via_analysis = analyze(ESSAY, PARAPHRASE).unwrap().comparison;
    assert_eq!(direct, via_analysis);
}

// ============================================================
// Properties
// ============================================================

#[test]
fn compare_is_deterministic() {
    let first = compare(ESSAY, PARAPHRASE).unwrap();
    let second = compare(ESSAY, PARAPHRASE).unwrap();
    assert_eq!(first.similarity.to_bits(), second.similarity.to_bits());
    assert_eq!(first.level, second.level);
}

#[test]
fn compare_is_symmetric() {
    for (a, b) in [(ESSAY, PARAPHRASE), (ESSAY, UNRELATED), (PARAPHRASE, UNRELATED)] {
        let ab = compare(a, b).unwrap().similarity;
        let ba = compare(b, a).unwrap().similarity;
        assert_eq!(ab, ba, "asymmetric score for pair");
    }
}

#[test]
fn self_similarity_is_one() {
    for text in [ESSAY, PARAPHRASE, UNRELATED, "single"] {
        let score = compare(text, text).unwrap().similarity;
        assert!((score - 1.0).abs() < 1e-9, "self-similarity {score}");
    }
}

#[test]
fn disjoint_vocabularies_score_zero() {
    let result = compare("apples oranges pears", "granite basalt obsidian").unwrap();
    assert_eq!(result.similarity, 0.0);
    assert_eq!(result.level, PlagiarismLevel::None);
    assert_eq!(result.level.as_str(), "No plagiarism");
}

#[test]
fn paraphrase_scores_between_unrelated_and_identical() {
    let paraphrase = compare(ESSAY, PARAPHRASE).unwrap().similarity;
    let unrelated = compare(ESSAY, UNRELATED).unwrap().similarity;
    assert!(paraphrase > unrelated);
    assert!(paraphrase < 1.0);
}

#[test]
fn empty_input_is_extraction_error() {
    let err = compare("", "anything").unwrap_err();
    assert!(matches!(
        err,
        CompareError::Extraction {
            role: DocumentRole::Test,
            ..
        }
    ));

    let err = compare("anything", "").unwrap_err();
    assert!(matches!(
        err,
        CompareError::Extraction {
            role: DocumentRole::Reference,
            ..
        }
    ));
    assert!(err.to_string().contains("reference"));
}

#[test]
fn percentage_formatting() {
    let result = compare("The cat sat on the mat.", "The dog sat on the mat.").unwrap();
    assert_eq!(result.percentage(), "87.50%");
}

// ============================================================
// check_documents — extraction feeding the pipeline
// ============================================================

/// Extractor that always fails, standing in for an unreadable PDF.
struct BrokenExtractor;

impl TextExtractor for BrokenExtractor {
    fn extract_text(&self, path: &Path) -> anyhow::Result<String> {
        anyhow::bail!("cannot read {}", path.display())
    }
}

#[test]
fn check_documents_reads_text_files() {
    let dir = tempfile::tempdir().unwrap();
    let test = dir.path().join("test.txt");
    let reference = dir.path().join("reference.txt");
    std::fs::write(&test, "The Cat sat on the mat.").unwrap();
    std::fs::write(&reference, "The dog SAT on the mat.").unwrap();

    let analysis = check_documents(&DocumentExtractor::default(), &test, &reference).unwrap();
    assert!((analysis.comparison.similarity - 0.875).abs() < 1e-9);
}

#[test]
fn check_documents_empty_file_is_extraction_error() {
    let dir = tempfile::tempdir().unwrap();
    let test = dir.path().join("test.txt");
    let reference = dir.path().join("reference.txt");
    std::fs::write(&test, "").unwrap();
    std::fs::write(&reference, "some reference text").unwrap();

    let err = check_documents(&DocumentExtractor::default(), &test, &reference).unwrap_err();
    assert!(matches!(err, CompareError::Extraction { .. }));
}

#[test]
fn check_documents_extractor_failure_is_extraction_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("whatever.pdf");
    let err = check_documents(&BrokenExtractor, &path, &path).unwrap_err();
    assert!(matches!(
        err,
        CompareError::Extraction {
            role: DocumentRole::Test,
            ..
        }
    ));
}
