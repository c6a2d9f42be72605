//! # wordindex
//!
//! In-memory inverted index over a small, fixed corpus of text documents.
//!
//! ## Architecture
//! - **Tokenizer**: ASCII alphanumeric runs, lowercased (nom byte parsers)
//! - **WordIndex**: chained hash table (djb2 by default), append-only entry arena
//! - **DocumentSet**: deduplicated, insertion-ordered document ids per word
//! - **Corpus**: loads documents once at startup, skipping unreadable ones
//!
//! The index is built once and is read-only afterwards; see the
//! `wordcache` crate for the query side.

#![warn(missing_docs)]

mod corpus;
mod docset;
mod error;
mod index;
mod tokenizer;

pub use corpus::{load, DocumentReader, DocumentSource, FsReader, LoadReport, DEFAULT_DOCUMENTS};
pub use docset::DocumentSet;
pub use error::{Error, Result};
pub use index::{Djb2, Djb2Hasher, EntryId, IndexConfig, WordIndex, DEFAULT_BUCKETS};
pub use tokenizer::{
    is_word_byte, to_lower, Tokenizer, TokenizerConfig, Tokens, DEFAULT_MAX_WORD_LEN,
};
