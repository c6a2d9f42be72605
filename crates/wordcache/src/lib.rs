//! # wordcache
//!
//! Fixed-capacity LRU lookup cache in front of a `wordindex::WordIndex`.
//!
//! ## Architecture
//! - **LRU**: `Vec` of slots, most recently used first, move-to-front on hit
//! - **Aliasing**: slots hold the index's `Arc<str>` word and an entry
//!   handle; document sets are never copied
//! - **CachedIndex**: normalize, try the cache, fall back to the index and
//!   cache the result, reporting where the answer came from

#![warn(missing_docs)]

mod cache;
mod lru;
mod stats;

pub use cache::{CachedIndex, Hit, Provenance};
pub use lru::LruCache;
pub use stats::CacheStats;

/// Default number of cached words
pub const DEFAULT_CAPACITY: usize = 5;
