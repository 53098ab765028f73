pub mod check;
pub mod documents;
pub mod upload;
