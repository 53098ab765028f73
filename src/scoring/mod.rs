// Scoring — cosine similarity and the plagiarism severity bands.

pub mod cosine;
pub mod level;
