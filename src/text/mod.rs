// Text processing — normalization and bag-of-words vector construction.

pub mod normalize;
pub mod vectors;
