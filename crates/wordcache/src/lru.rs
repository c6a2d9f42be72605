//! LRU (Least Recently Used) cache implementation
//!
//! Slots are kept in a `Vec`, most recently used first. Lookups scan and
//! hits rotate to the front, so every operation is O(capacity). That is the
//! right trade for a handful of slots; a map plus intrusive list only pays
//! off at capacities in the thousands.

use std::borrow::Borrow;

/// One cached key/value pair
#[derive(Debug)]
struct Slot<K, V> {
    key: K,
    value: V,
}

/// Move-to-front LRU cache with fixed capacity
#[derive(Debug)]
pub struct LruCache<K, V> {
    slots: Vec<Slot<K, V>>,
    capacity: usize,
}

impl<K: Eq, V> LruCache<K, V> {
    /// Create a new LRU cache with the given capacity
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "Capacity must be greater than 0");

        Self {
            slots: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Get a value and mark it most recently used
    pub fn get<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        let idx = self.position(key)?;
        self.move_to_front(idx);
        Some(&self.slots[0].value)
    }

    /// Get a value without touching recency
    pub fn peek<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.position(key).map(|idx| &self.slots[idx].value)
    }

    /// Insert or refresh a key-value pair at the front
    ///
    /// # Returns
    /// * `Option<(K, V)>` - The least recently used pair, if one had to be
    ///   evicted to make room
    pub fn put(&mut self, key: K, value: V) -> Option<(K, V)> {
        if let Some(idx) = self.position(&key) {
            self.slots[idx].value = value;
            self.move_to_front(idx);
            return None;
        }

        let evicted = if self.slots.len() >= self.capacity {
            self.slots.pop().map(|slot| (slot.key, slot.value))
        } else {
            None
        };
        self.slots.insert(0, Slot { key, value });

        evicted
    }

    /// Iterate over keys, most recently used first
    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.slots.iter().map(|slot| &slot.key)
    }

    /// Get the current size of the cache
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Check if the cache is empty
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Get the maximum number of slots
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Clear the cache
    pub fn clear(&mut self) {
        self.slots.clear();
    }

    fn position<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.slots.iter().position(|slot| slot.key.borrow() == key)
    }

    fn move_to_front(&mut self, idx: usize) {
        self.slots[..=idx].rotate_right(1);
    }
}
