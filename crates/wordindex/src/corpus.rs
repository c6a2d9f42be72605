//! Corpus loading
//!
//! Reads each configured document once and feeds its words into a
//! [`WordIndex`]. Documents that cannot be read are left out of the index.

use std::hash::BuildHasher;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::debug;

use crate::error::Result;
use crate::index::WordIndex;
use crate::tokenizer::Tokenizer;

/// Display names of the built-in corpus
pub const DEFAULT_DOCUMENTS: &[&str] = &["doc1.txt", "doc2.txt", "doc3.txt"];

/// A document to index: the name shown to users and where to read it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentSource {
    /// Identifier stored in the index
    pub name: Arc<str>,
    /// Storage path
    pub path: PathBuf,
}

impl DocumentSource {
    /// Create a source from a display name and path
    pub fn new(name: &str, path: impl Into<PathBuf>) -> Self {
        Self {
            name: Arc::from(name),
            path: path.into(),
        }
    }

    /// The built-in corpus, resolved against `dir`
    pub fn defaults(dir: &Path) -> Vec<Self> {
        DEFAULT_DOCUMENTS
            .iter()
            .map(|name| Self::new(name, dir.join(name)))
            .collect()
    }
}

/// Source of document contents
pub trait DocumentReader {
    /// Read a whole document into memory
    fn read_whole_file(&self, path: &Path) -> Result<Vec<u8>>;
}

/// Reads documents from the local filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct FsReader;

impl DocumentReader for FsReader {
    fn read_whole_file(&self, path: &Path) -> Result<Vec<u8>> {
        Ok(std::fs::read(path)?)
    }
}

/// Outcome of a corpus load
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Documents whose words made it into the index
    pub indexed: Vec<Arc<str>>,
    /// Documents left out because they could not be read or indexed
    pub skipped: Vec<Arc<str>>,
    /// Total words read across indexed documents
    pub words: usize,
}

/// Index every readable document in `sources`
///
/// Read failures never propagate; the document is recorded in
/// [`LoadReport::skipped`] instead.
pub fn load<S: BuildHasher>(
    index: &mut WordIndex<S>,
    tokenizer: &Tokenizer,
    reader: &dyn DocumentReader,
    sources: &[DocumentSource],
) -> LoadReport {
    let mut report = LoadReport::default();

    for source in sources {
        let bytes = match reader.read_whole_file(&source.path) {
            Ok(bytes) => bytes,
            Err(e) => {
                debug!("Skipping {} ({}): {}", source.name, source.path.display(), e);
                report.skipped.push(Arc::clone(&source.name));
                continue;
            }
        };

        match index.index_document(tokenizer, &source.name, &bytes) {
            Ok(words) => {
                debug!("Indexed {} ({} words)", source.name, words);
                report.words += words;
                report.indexed.push(Arc::clone(&source.name));
            }
            Err(e) => {
                // Words before the failure stay indexed
                debug!("Stopped indexing {}: {}", source.name, e);
                report.skipped.push(Arc::clone(&source.name));
            }
        }
    }

    report
}
