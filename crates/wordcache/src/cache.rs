//! CachedIndex: LRU cache in front of a WordIndex

use std::fmt;
use std::hash::BuildHasher;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, trace};
use wordindex::{Djb2, DocumentSet, EntryId, Error, Result, Tokenizer, WordIndex};

use crate::lru::LruCache;
use crate::stats::CacheStats;

/// Where a lookup result came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provenance {
    /// Served from the LRU cache
    Cache,
    /// Served from the inverted index (and now cached)
    Index,
}

impl fmt::Display for Provenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Provenance::Cache => write!(f, "cache"),
            Provenance::Index => write!(f, "index"),
        }
    }
}

/// A successful lookup
#[derive(Debug, Clone, Copy)]
pub struct Hit<'a> {
    /// Documents containing the word, borrowed from the index
    pub documents: &'a DocumentSet,
    /// Whether the cache or the index answered
    pub provenance: Provenance,
}

/// Query layer combining an LRU cache with a read-only WordIndex
///
/// Cache slots hold the index's own word and an entry handle, never a copy
/// of the document set. The index is owned here and never mutated again,
/// so every cached handle stays valid.
pub struct CachedIndex<S = Djb2> {
    /// Underlying inverted index, frozen
    index: WordIndex<S>,

    /// Query normalizer, same rules as indexing
    tokenizer: Tokenizer,

    /// LRU cache of word -> entry handle
    cache: RwLock<LruCache<Arc<str>, EntryId>>,

    /// Lookup statistics
    stats: CacheStats,
}

impl<S: BuildHasher> CachedIndex<S> {
    /// Create a CachedIndex over a fully built index
    ///
    /// # Arguments
    /// * `index` - Inverted index; loading must be complete
    /// * `tokenizer` - Tokenizer the index was built with
    /// * `capacity` - Maximum number of cached words (must be > 0)
    pub fn new(index: WordIndex<S>, tokenizer: Tokenizer, capacity: usize) -> Self {
        Self {
            index,
            tokenizer,
            cache: RwLock::new(LruCache::new(capacity)),
            stats: CacheStats::new(),
        }
    }

    /// Look up the documents containing a word
    ///
    /// # Arguments
    /// * `raw` - User input; normalized before lookup
    ///
    /// # Returns
    /// * `Result<Option<Hit>>` - `Ok(None)` if no document has the word,
    ///   `Err(Error::InvalidQuery)` if `raw` has no letters or digits
    pub fn lookup(&self, raw: &str) -> Result<Option<Hit<'_>>> {
        let word = self.tokenizer.normalize(raw);
        if word.is_empty() {
            self.stats.record_invalid();
            return Err(Error::InvalidQuery(raw.to_string()));
        }

        // Held across get and put so the reorder is never observed half-done
        let mut cache = self.cache.write();

        if let Some(&id) = cache.get(word.as_str()) {
            self.stats.record_hit();
            trace!("{} served from cache", word);
            return Ok(Some(Hit {
                documents: self.index.documents(id),
                provenance: Provenance::Cache,
            }));
        }

        // Cache miss - consult the index
        self.stats.record_miss();
        let Some(id) = self.index.find_entry(&word) else {
            self.stats.record_not_found();
            return Ok(None);
        };

        if let Some((evicted, _)) = cache.put(Arc::clone(self.index.word(id)), id) {
            self.stats.record_eviction();
            debug!("Evicted {} from cache", evicted);
        }
        trace!("{} served from index", word);

        Ok(Some(Hit {
            documents: self.index.documents(id),
            provenance: Provenance::Index,
        }))
    }

    /// Get the underlying index
    pub fn index(&self) -> &WordIndex<S> {
        &self.index
    }

    /// Get lookup statistics
    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }

    /// Words currently cached, most recently used first
    pub fn cached_words(&self) -> Vec<Arc<str>> {
        self.cache.read().keys().cloned().collect()
    }

    /// Get current cache size
    pub fn cache_len(&self) -> usize {
        self.cache.read().len()
    }

    /// Get cache capacity
    pub fn capacity(&self) -> usize {
        self.cache.read().capacity()
    }

    /// Clear the cache (index remains unchanged)
    pub fn clear_cache(&self) {
        self.cache.write().clear();
        self.stats.reset();
    }
}
