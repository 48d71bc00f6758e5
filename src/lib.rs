pub mod config;
pub mod constants;
pub mod date;
pub mod error;
pub mod evidence;
pub mod extractor;
pub mod fragment;
pub mod fragmenter;
pub mod kinsi;
pub mod measure_words;
pub mod normalizer;
pub mod number_group;
pub mod single_char;
pub mod whitespace;

pub use config::FragmenterConfig;
pub use error::{FragmenterError, Result};
pub use evidence::{EvidenceState, WritingStyle};
pub use extractor::{ExtractContext, TextExtractor};
pub use fragment::*;
pub use fragmenter::{Fragments, MyanmarTextFragmenter};

/// Fragments `text` with the default configuration.
pub fn fragment(text: &str) -> Vec<TextFragment> {
    MyanmarTextFragmenter::default().fragment(text)
}
