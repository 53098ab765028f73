// Plagiarism severity bands.
//
//   > 0.70        Heavy
//   0.30 ..= 0.70 Moderate
//   (0, 0.30)     Light
//   0             None
//
// Both 0.30 and 0.70 belong to the moderate band.

use serde::{Deserialize, Serialize};

const HEAVY_ABOVE: f64 = 0.70;
const MODERATE_FROM: f64 = 0.30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PlagiarismLevel {
    #[serde(rename = "No plagiarism")]
    None,
    #[serde(rename = "Light plagiarism")]
    Light,
    #[serde(rename = "Moderate plagiarism")]
    Moderate,
    #[serde(rename = "Heavy plagiarism")]
    Heavy,
}

impl PlagiarismLevel {
    /// Classify a similarity score.
    ///
    /// Zero, negative, and NaN scores all land in `None`.
    pub fn from_score(score: f64) -> Self {
        match score {
            s if s > HEAVY_ABOVE => PlagiarismLevel::Heavy,
            s if s >= MODERATE_FROM => PlagiarismLevel::Moderate,
            s if s > 0.0 => PlagiarismLevel::Light,
            _ => PlagiarismLevel::None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PlagiarismLevel::None => "No plagiarism",
            PlagiarismLevel::Light => "Light plagiarism",
            PlagiarismLevel::Moderate => "Moderate plagiarism",
            PlagiarismLevel::Heavy => "Heavy plagiarism",
        }
    }
}

impl std::fmt::Display for PlagiarismLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bands() {
        assert_eq!(PlagiarismLevel::from_score(0.95), PlagiarismLevel::Heavy);
        assert_eq!(PlagiarismLevel::from_score(0.5), PlagiarismLevel::Moderate);
        assert_eq!(PlagiarismLevel::from_score(0.1), PlagiarismLevel::Light);
        assert_eq!(PlagiarismLevel::from_score(0.0), PlagiarismLevel::None);
    }

    #[test]
    fn test_levels_are_ordered() {
        assert!(PlagiarismLevel::None < PlagiarismLevel::Light);
        assert!(PlagiarismLevel::Light < PlagiarismLevel::Moderate);
        assert!(PlagiarismLevel::Moderate < PlagiarismLevel::Heavy);
    }
}
