// Cosine similarity between two bag-of-words count vectors.
//
//   cos = dot(v1, v2) / (|v1| * |v2|)
//
// Counts are non-negative, so the result lands in [0, 1]. A zero-magnitude
// vector (a document with no tokens) scores exactly 0.0.

use crate::error::CompareError;

/// Cosine similarity of two equal-length count vectors.
///
/// Fails with `DimensionMismatch` if the lengths differ; the vectors are
/// never truncated or padded.
pub fn cosine_similarity(v1: &[u32], v2: &[u32]) -> Result<f64, CompareError> {
    if v1.len() != v2.len() {
        return Err(CompareError::DimensionMismatch {
            left: v1.len(),
            right: v2.len(),
        });
    }

    let dot: f64 = v1
        .iter()
        .zip(v2.iter())
        .map(|(&a, &b)| f64::from(a) * f64::from(b))
        .sum();
    let mag1 = magnitude(v1);
    let mag2 = magnitude(v2);

    if mag1 == 0.0 || mag2 == 0.0 {
        return Ok(0.0);
    }

    // Rounding can push identical vectors a hair above 1.0
    Ok((dot / (mag1 * mag2)).clamp(0.0, 1.0))
}

fn magnitude(v: &[u32]) -> f64 {
    v.iter()
        .map(|&x| f64::from(x) * f64::from(x))
        .sum::<f64>()
        .sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cat_and_dog_vectors() {
        let score = cosine_similarity(&[1, 0, 1, 1, 1, 2], &[0, 1, 1, 1, 1, 2]).unwrap();
        assert!((score - 0.875).abs() < 1e-12, "Expected 0.875, got {score}");
    }

    #[test]
    fn test_identical_vectors() {
        let score = cosine_similarity(&[3, 1, 4, 1, 5], &[3, 1, 4, 1, 5]).unwrap();
        assert!((score - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_orthogonal_vectors() {
        assert_eq!(cosine_similarity(&[1, 0], &[0, 1]).unwrap(), 0.0);
    }

    #[test]
    fn test_zero_magnitude_is_zero() {
        assert_eq!(cosine_similarity(&[0, 0, 0], &[1, 2, 3]).unwrap(), 0.0);
        assert_eq!(cosine_similarity(&[1, 2, 3], &[0, 0, 0]).unwrap(), 0.0);
        assert_eq!(cosine_similarity(&[], &[]).unwrap(), 0.0);
    }

    #[test]
    fn test_dimension_mismatch() {
        let err = cosine_similarity(&[1, 2], &[1, 2, 3]).unwrap_err();
        assert_eq!(err, CompareError::DimensionMismatch { left: 2, right: 3 });
    }
}
