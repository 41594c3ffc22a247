//! FILENAME: core/cellset-engine/src/insensitive_map.rs
//! Ordered map with case and space insensitive keys.
//!
//! Lookups, updates and deletes go through the normalized form of the key
//! (see [`crate::normalize`]). Every entry also remembers the key exactly as
//! it was last written, and iteration hands those display keys back in
//! insertion order.
//!
//! ```
//! use cellset_engine::InsensitiveOrderedMap;
//!
//! let mut elements: InsensitiveOrderedMap<String, i32> = InsensitiveOrderedMap::new();
//! elements.set("Travel Expenses".to_string(), 100);
//! assert_eq!(*elements.get("travelexpenses").unwrap(), 100);
//! ```

use std::fmt;
use std::slice;
use std::vec;

use rustc_hash::FxHashMap;

use crate::error::{CellsetError, Result};
use crate::normalize::KeyCodec;

struct Entry<K, N, V> {
    display: K,
    normalized: N,
    value: V,
}

impl<K: Clone, N: Clone, V: Clone> Clone for Entry<K, N, V> {
    fn clone(&self) -> Self {
        Entry {
            display: self.display.clone(),
            normalized: self.normalized.clone(),
            value: self.value.clone(),
        }
    }
}

/// Insertion-ordered map whose key identity is the normalized key.
///
/// Re-setting an existing identity replaces value and display key in place;
/// the entry keeps its position.
pub struct InsensitiveOrderedMap<K: KeyCodec, V> {
    entries: Vec<Entry<K, K::Normalized, V>>,
    /// normalized key -> position in `entries`
    index: FxHashMap<K::Normalized, usize>,
}

impl<K: KeyCodec, V> InsensitiveOrderedMap<K, V> {
    pub fn new() -> Self {
        InsensitiveOrderedMap {
            entries: Vec::new(),
            index: FxHashMap::default(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let mut index = FxHashMap::default();
        index.reserve(capacity);
        InsensitiveOrderedMap {
            entries: Vec::with_capacity(capacity),
            index,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Stores `value` under `key`, returning the value it replaced.
    pub fn set(&mut self, key: K, value: V) -> Option<V> {
        let normalized = key.normalize_key();
        match self.index.get(&normalized) {
            Some(&pos) => {
                let entry = &mut self.entries[pos];
                entry.display = key;
                Some(std::mem::replace(&mut entry.value, value))
            }
            None => {
                self.index.insert(normalized.clone(), self.entries.len());
                self.entries.push(Entry {
                    display: key,
                    normalized,
                    value,
                });
                None
            }
        }
    }

    fn position<Q>(&self, key: &Q) -> Result<usize>
    where
        Q: KeyCodec<Normalized = K::Normalized> + ?Sized,
    {
        let normalized = key.normalize_key();
        self.index
            .get(&normalized)
            .copied()
            .ok_or_else(|| CellsetError::KeyNotFound(normalized.to_string()))
    }

    pub fn get<Q>(&self, key: &Q) -> Result<&V>
    where
        Q: KeyCodec<Normalized = K::Normalized> + ?Sized,
    {
        let pos = self.position(key)?;
        Ok(&self.entries[pos].value)
    }

    pub fn get_mut<Q>(&mut self, key: &Q) -> Result<&mut V>
    where
        Q: KeyCodec<Normalized = K::Normalized> + ?Sized,
    {
        let pos = self.position(key)?;
        Ok(&mut self.entries[pos].value)
    }

    /// The key as it was last written for this identity.
    pub fn display_key<Q>(&self, key: &Q) -> Result<&K>
    where
        Q: KeyCodec<Normalized = K::Normalized> + ?Sized,
    {
        let pos = self.position(key)?;
        Ok(&self.entries[pos].display)
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        Q: KeyCodec<Normalized = K::Normalized> + ?Sized,
    {
        self.index.contains_key(&key.normalize_key())
    }

    /// Removes the entry for `key`. Remaining entries keep their order.
    pub fn delete<Q>(&mut self, key: &Q) -> Result<V>
    where
        Q: KeyCodec<Normalized = K::Normalized> + ?Sized,
    {
        let pos = self.position(key)?;
        let removed = self.entries.remove(pos);
        self.index.remove(&removed.normalized);
        for (i, entry) in self.entries.iter().enumerate().skip(pos) {
            if let Some(slot) = self.index.get_mut(&entry.normalized) {
                *slot = i;
            }
        }
        Ok(removed.value)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.index.clear();
    }

    /// `(display_key, value)` pairs in insertion order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            inner: self.entries.iter(),
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.entries.iter().map(|e| &e.display)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.entries.iter().map(|e| &e.value)
    }

    /// Normalized keys in insertion order, for insensitive comparisons.
    pub fn keys_normalized(&self) -> impl Iterator<Item = &K::Normalized> + '_ {
        self.entries.iter().map(|e| &e.normalized)
    }

    pub fn items_normalized(&self) -> impl Iterator<Item = (&K::Normalized, &V)> + '_ {
        self.entries.iter().map(|e| (&e.normalized, &e.value))
    }
}

impl<K: KeyCodec, V> Default for InsensitiveOrderedMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: KeyCodec + Clone, V: Clone> Clone for InsensitiveOrderedMap<K, V> {
    fn clone(&self) -> Self {
        InsensitiveOrderedMap {
            entries: self.entries.clone(),
            index: self.index.clone(),
        }
    }
}

/// Order-independent comparison of normalized key -> value pairings.
impl<K: KeyCodec, V: PartialEq> PartialEq for InsensitiveOrderedMap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self.entries.iter().all(|entry| {
                other
                    .index
                    .get(&entry.normalized)
                    .is_some_and(|&pos| other.entries[pos].value == entry.value)
            })
    }
}

impl<K: KeyCodec, V: Eq> Eq for InsensitiveOrderedMap<K, V> {}

impl<K: KeyCodec + fmt::Debug, V: fmt::Debug> fmt::Debug for InsensitiveOrderedMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.entries.iter().map(|e| (&e.display, &e.value)))
            .finish()
    }
}

impl<K: KeyCodec, V> FromIterator<(K, V)> for InsensitiveOrderedMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K: KeyCodec, V> Extend<(K, V)> for InsensitiveOrderedMap<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.set(key, value);
        }
    }
}

// ============================================================================
// ITERATORS
// ============================================================================

pub struct Iter<'a, K: KeyCodec, V> {
    inner: slice::Iter<'a, Entry<K, K::Normalized, V>>,
}

impl<'a, K: KeyCodec, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|e| (&e.display, &e.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K: KeyCodec, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<'a, K: KeyCodec, V> IntoIterator for &'a InsensitiveOrderedMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub struct IntoIter<K: KeyCodec, V> {
    inner: vec::IntoIter<Entry<K, K::Normalized, V>>,
}

impl<K: KeyCodec, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|e| (e.display, e.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K: KeyCodec, V> ExactSizeIterator for IntoIter<K, V> {}

impl<K: KeyCodec, V> IntoIterator for InsensitiveOrderedMap<K, V> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.entries.into_iter(),
        }
    }
}
