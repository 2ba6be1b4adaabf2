//! Shared types and character utilities for Spanish verse analysis.
//!
//! - [`character`] -- Spanish letter/vowel classification, whitespace, case
//!   folding and composed-form normalization
//! - [`token`] -- Whitespace-delimited text tokens
//! - [`metric`] -- Syllable readouts and text statistics shared by the
//!   language module and its bindings

pub mod character;
pub mod metric;
pub mod token;
