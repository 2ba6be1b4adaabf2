//! Spanish language module: syllable counting and verse classification.
//!
//! # Architecture
//!
//! - [`syllables`] -- The syllable engine: word/text syllable counts, word
//!   counts and verse-length names
//! - [`tokenizer`] -- Whitespace tokenization and letter-only token cleaning
//! - [`meter`] -- Live metrical feedback for lines, selections and whole texts
//! - [`forms`] -- Catalog of classical poem forms and meter checking
//! - [`handle`] -- `VersoHandle`, a single entry point carrying options
//!
//! The counting functions are total: they accept any string or integer and
//! never panic, so they can run on every keystroke of an editing surface.

pub(crate) mod spanish;
pub mod syllables;
pub mod tokenizer;

#[cfg(feature = "meter")]
pub mod meter;

#[cfg(feature = "forms")]
pub mod forms;

#[cfg(feature = "handle")]
pub mod handle;

pub use syllables::{count_text, count_word, count_words, verse_name};

/// Error type for the fallible surfaces of the language module.
///
/// The counting functions themselves never fail; errors only arise when
/// resolving user-supplied names.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VersoError {
    /// A poem form name did not match any known form.
    #[error("unknown poem form: {0}")]
    UnknownForm(String),
}
