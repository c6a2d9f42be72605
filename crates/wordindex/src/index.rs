//! Inverted index implementation
//!
//! Chained hash table from normalized word to the documents containing it.
//! Entries live in an append-only arena and buckets chain through arena
//! slots, so an [`EntryId`] handed out once stays valid for the life of
//! the index.

use std::hash::{BuildHasher, BuildHasherDefault, Hasher};
use std::sync::Arc;

use crate::docset::DocumentSet;
use crate::error::Result;
use crate::tokenizer::Tokenizer;

/// Default bucket count (prime)
pub const DEFAULT_BUCKETS: usize = 10007;

/// djb2 string hash: `h = h * 33 + byte`, seeded with 5381
#[derive(Debug, Clone, Copy)]
pub struct Djb2Hasher(u64);

impl Default for Djb2Hasher {
    fn default() -> Self {
        Self(5381)
    }
}

impl Hasher for Djb2Hasher {
    fn write(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.0 = (self.0 << 5).wrapping_add(self.0).wrapping_add(b as u64);
        }
    }

    fn finish(&self) -> u64 {
        self.0
    }
}

/// Default hasher for [`WordIndex`]
pub type Djb2 = BuildHasherDefault<Djb2Hasher>;

/// Index settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexConfig {
    /// Number of hash buckets. Any positive value is correct; it only
    /// affects chain length.
    pub buckets: usize,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            buckets: DEFAULT_BUCKETS,
        }
    }
}

/// Handle to a word entry inside a [`WordIndex`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntryId(usize);

/// Bucket element: one word and the documents containing it
#[derive(Debug)]
struct WordEntry {
    word: Arc<str>,
    documents: DocumentSet,
    next: Option<EntryId>,
}

/// Inverted index mapping words to document sets
pub struct WordIndex<S = Djb2> {
    buckets: Vec<Option<EntryId>>,
    entries: Vec<WordEntry>,
    hasher: S,
}

impl WordIndex {
    /// Create an empty index using djb2
    pub fn new(config: IndexConfig) -> Self {
        Self::with_hasher(config, Djb2::default())
    }
}

impl Default for WordIndex {
    fn default() -> Self {
        Self::new(IndexConfig::default())
    }
}

impl<S: BuildHasher> WordIndex<S> {
    /// Create an empty index with a custom hasher
    pub fn with_hasher(config: IndexConfig, hasher: S) -> Self {
        assert!(config.buckets > 0, "Bucket count must be greater than 0");

        Self {
            buckets: vec![None; config.buckets],
            entries: Vec::new(),
            hasher,
        }
    }

    /// Record that `word` occurs in `document`
    ///
    /// Empty words are ignored. Repeating the same pair is a no-op.
    ///
    /// # Returns
    /// * `Result<()>` - `Error::OutOfMemory` if growing the index failed;
    ///   the index is left as it was for this word
    pub fn insert(&mut self, word: &str, document: &Arc<str>) -> Result<()> {
        if word.is_empty() {
            return Ok(());
        }

        let bucket = self.bucket_of(word);
        if let Some(id) = self.find_in_bucket(bucket, word) {
            self.entries[id.0].documents.insert(document)?;
            return Ok(());
        }

        // Fill the set before linking so an entry never exists without documents
        let mut documents = DocumentSet::new();
        documents.insert(document)?;
        self.entries.try_reserve(1)?;

        let id = EntryId(self.entries.len());
        self.entries.push(WordEntry {
            word: Arc::from(word),
            documents,
            next: self.buckets[bucket],
        });
        self.buckets[bucket] = Some(id);

        Ok(())
    }

    /// Tokenize a whole document into the index
    ///
    /// # Returns
    /// * `Result<usize>` - Number of words read from the document
    pub fn index_document(
        &mut self,
        tokenizer: &Tokenizer,
        document: &Arc<str>,
        bytes: &[u8],
    ) -> Result<usize> {
        let mut count = 0;
        for word in tokenizer.tokens(bytes) {
            self.insert(&word, document)?;
            count += 1;
        }
        Ok(count)
    }

    /// Look up the documents containing `word`
    pub fn find(&self, word: &str) -> Option<&DocumentSet> {
        self.find_entry(word).map(|id| self.documents(id))
    }

    /// Look up the entry handle for `word`
    pub fn find_entry(&self, word: &str) -> Option<EntryId> {
        self.find_in_bucket(self.bucket_of(word), word)
    }

    /// Get the word stored in an entry
    ///
    /// # Panics
    /// If `id` was not produced by this index.
    pub fn word(&self, id: EntryId) -> &Arc<str> {
        &self.entries[id.0].word
    }

    /// Get the documents stored in an entry
    ///
    /// # Panics
    /// If `id` was not produced by this index.
    pub fn documents(&self, id: EntryId) -> &DocumentSet {
        &self.entries[id.0].documents
    }

    /// Get the number of distinct words
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the index is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the number of hash buckets
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Length of the longest collision chain
    pub fn longest_chain(&self) -> usize {
        self.buckets
            .iter()
            .map(|&head| self.chain(head).count())
            .max()
            .unwrap_or(0)
    }

    fn bucket_of(&self, word: &str) -> usize {
        let mut hasher = self.hasher.build_hasher();
        hasher.write(word.as_bytes());
        (hasher.finish() % self.buckets.len() as u64) as usize
    }

    fn find_in_bucket(&self, bucket: usize, word: &str) -> Option<EntryId> {
        self.chain(self.buckets[bucket])
            .find(|&id| &*self.entries[id.0].word == word)
    }

    fn chain(&self, head: Option<EntryId>) -> impl Iterator<Item = EntryId> + '_ {
        std::iter::successors(head, move |id| self.entries[id.0].next)
    }
}
