//! Document input: file type detection and plain-text extraction

pub mod extractor;

pub use extractor::{extract_text, FileType};
