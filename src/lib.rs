// plagcheck: bag-of-words plagiarism checking for PDF documents.
//
// This is the library root. The comparison core (text, scoring, compare)
// is pure; extract, storage and web are the I/O around it.

pub mod compare;
pub mod config;
pub mod error;
pub mod extract;
pub mod models;
pub mod output;
pub mod scoring;
pub mod storage;
pub mod text;

#[cfg(feature = "web")]
pub mod web;

pub use compare::{analyze, compare, Analysis};
pub use error::CompareError;
pub use models::{Comparison, DocumentRole};
pub use scoring::level::PlagiarismLevel;
