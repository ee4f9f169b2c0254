use std::{fmt, mem};

/// Number of buckets allocated by `ChainedHashMap::new`
const DEFAULT_CAPACITY: usize = 16;

/// Seed value of the DJB2 string hash
const DJB2_SEED: u32 = 5381;

/// Multiplier of the DJB2 string hash
const DJB2_MULTIPLIER: u32 = 33;

/// Hashes a key with the DJB2 algorithm.
///
/// Starting from the seed 5381, every character folds in as
/// `hash * 33 + code_point`, in wrapping 32-bit arithmetic. Equal keys always
/// produce equal hashes; distinct keys may collide and the table resolves
/// that by chaining.
fn djb2(key: &str) -> u32 {
    key.chars().fold(DJB2_SEED, |hash, c| {
        hash.wrapping_mul(DJB2_MULTIPLIER).wrapping_add(u32::from(c))
    })
}

/// A single key/value pair in a bucket chain
#[derive(Debug, Clone)]
struct Entry<V> {
    /// The key under which the value is stored
    key: String,
    /// The value associated with the key
    value: V,
    /// The next entry of the chain, `None` at the chain tail
    next: Option<Box<Entry<V>>>,
}

/// Error returned when a table is constructed with zero buckets.
///
/// A table with no buckets cannot map a hash onto a slot index, so
/// construction rejects the capacity up front instead of leaving a modulo
/// by zero behind every operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZeroCapacity;

impl fmt::Display for ZeroCapacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hash table capacity must be at least one bucket")
    }
}

impl std::error::Error for ZeroCapacity {}

/// Allocates a bucket array of `capacity` empty slots
fn empty_storage<V>(capacity: usize) -> Vec<Option<Box<Entry<V>>>> {
    let mut storage = Vec::with_capacity(capacity);
    storage.resize_with(capacity, || None);
    storage
}

/// A hash table mapping string keys to values, with separate chaining.
///
/// Every operation hashes the key with DJB2, reduces the hash modulo the
/// current bucket count, and walks the chain at that slot. Colliding keys
/// share a slot as a singly linked chain of entries, so a chain has no upper
/// length bound and insertion never fails.
///
/// The table never grows on its own: [`resize`](Self::resize) doubles the
/// bucket count and rehashes every entry, and callers decide when to invoke
/// it (typically by watching [`load_factor`](Self::load_factor)).
///
/// Note: This implementation is not thread-safe. Callers that share a table
/// across threads must serialize access externally.
#[derive(Debug, Clone)]
pub struct ChainedHashMap<V> {
    /// The bucket array; each slot owns the head entry of its chain
    storage: Vec<Option<Box<Entry<V>>>>,
    /// Current number of entries in the table
    size: usize,
}

impl<V> Default for ChainedHashMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Extend<(String, V)> for ChainedHashMap<V> {
    fn extend<T: IntoIterator<Item = (String, V)>>(&mut self, iter: T) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl<V> ChainedHashMap<V> {
    /// Creates a new `ChainedHashMap` with the default number of buckets
    #[must_use]
    pub fn new() -> Self {
        Self { storage: empty_storage(DEFAULT_CAPACITY), size: 0 }
    }

    /// Creates a new `ChainedHashMap` with exactly `capacity` buckets.
    ///
    /// The capacity is used as-is; it does not need to be a power of two,
    /// since slot indices are reduced by modulo rather than a bitmask.
    ///
    /// # Errors
    ///
    /// Returns [`ZeroCapacity`] when `capacity` is `0`.
    pub fn with_capacity(capacity: usize) -> Result<Self, ZeroCapacity> {
        if capacity == 0 {
            return Err(ZeroCapacity);
        }
        Ok(Self { storage: empty_storage(capacity), size: 0 })
    }

    /// Maps a key to a slot index in the current bucket array.
    ///
    /// Recomputed fresh on every operation, never cached: the bucket count
    /// changes across a resize and a stale index would land entries in the
    /// wrong chain.
    #[allow(clippy::arithmetic_side_effects, clippy::cast_possible_truncation)]
    fn bucket_index(&self, key: &str) -> usize {
        // storage always holds at least one bucket, so the modulo is defined
        (djb2(key) as usize) % self.storage.len()
    }

    /// Inserts a key/value pair, returning the previous value if the key was
    /// already present.
    ///
    /// An existing entry is overwritten in place, leaving the chain length
    /// unchanged; a new key is appended at the tail of its slot's chain.
    /// Insertion always succeeds and never triggers a resize.
    pub fn insert(&mut self, key: String, value: V) -> Option<V> {
        let index = self.bucket_index(&key);
        let mut cursor = self.storage.get_mut(index)?;

        loop {
            match cursor {
                None => {
                    *cursor = Some(Box::new(Entry { key, value, next: None }));
                    self.size = self.size.saturating_add(1);
                    return None;
                }
                Some(entry) if entry.key == key => {
                    return Some(mem::replace(&mut entry.value, value));
                }
                Some(entry) => cursor = &mut entry.next,
            }
        }
    }

    /// Returns a reference to the value stored under `key`.
    ///
    /// Walks the chain at the key's slot until a match or the chain end; an
    /// empty slot yields `None` immediately.
    pub fn get(&self, key: &str) -> Option<&V> {
        let index = self.bucket_index(key);
        let mut cursor = self.storage.get(index)?.as_deref();

        while let Some(entry) = cursor {
            if entry.key == key {
                return Some(&entry.value);
            }
            cursor = entry.next.as_deref();
        }

        None
    }

    /// Returns a mutable reference to the value stored under `key`
    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        let index = self.bucket_index(key);
        let mut cursor = self.storage.get_mut(index)?.as_deref_mut();

        while let Some(entry) = cursor {
            if entry.key == key {
                return Some(&mut entry.value);
            }
            cursor = entry.next.as_deref_mut();
        }

        None
    }

    /// Removes the entry stored under `key`, returning its value.
    ///
    /// The removed entry's successor takes its place in the chain, whether
    /// the entry was the chain head or an interior link. `None` reports that
    /// the key was absent (including when the slot holds no chain at all)
    /// and the table is left unchanged.
    pub fn remove(&mut self, key: &str) -> Option<V> {
        let index = self.bucket_index(key);
        let mut cursor = self.storage.get_mut(index)?;

        loop {
            match cursor {
                None => return None,
                Some(entry) if entry.key == key => {
                    let tail = entry.next.take();
                    let removed = mem::replace(cursor, tail);
                    self.size = self.size.saturating_sub(1);
                    return removed.map(|entry| entry.value);
                }
                Some(entry) => cursor = &mut entry.next,
            }
        }
    }

    /// Doubles the bucket count and rehashes every entry.
    ///
    /// A fresh bucket array of twice the current capacity replaces the old
    /// one, and every entry of the old chains is reinserted through the
    /// standard insert path, landing at its slot under the new capacity.
    /// Runs in O(entries) time and allocates the new bucket array up front.
    pub fn resize(&mut self) {
        let new_capacity = self.storage.len().saturating_mul(2);
        let old_storage = mem::replace(&mut self.storage, empty_storage(new_capacity));
        self.size = 0;

        for slot in old_storage {
            let mut cursor = slot;
            while let Some(mut entry) = cursor {
                cursor = entry.next.take();
                self.insert(entry.key, entry.value);
            }
        }
    }

    /// Returns the number of entries in the table
    #[must_use]
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns true if the table holds no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the number of buckets in the table
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    /// Returns the ratio of stored entries to buckets.
    ///
    /// The table never acts on this value itself; callers watch it to decide
    /// when to invoke [`resize`](Self::resize).
    #[must_use]
    #[allow(clippy::arithmetic_side_effects, clippy::cast_precision_loss)]
    pub fn load_factor(&self) -> f64 {
        self.size as f64 / self.storage.len() as f64
    }

    /// Removes every entry, keeping the current bucket count
    pub fn clear(&mut self) {
        for slot in &mut self.storage {
            *slot = None;
        }
        self.size = 0;
    }

    /// Returns an iterator over the stored key/value pairs.
    ///
    /// Pairs are yielded in bucket-then-chain order, which carries no
    /// meaning and changes across a resize.
    #[must_use]
    #[allow(clippy::iter_without_into_iter)]
    pub fn iter(&self) -> Iter<'_, V> {
        Iter { buckets: &self.storage, index: 0, cursor: None }
    }
}

/// Iterator over the key/value pairs of a `ChainedHashMap`
#[derive(Debug, Clone)]
pub struct Iter<'a, V> {
    /// The bucket array being walked
    buckets: &'a [Option<Box<Entry<V>>>],
    /// Index of the next bucket to visit
    index: usize,
    /// Position within the current chain, `None` between buckets
    cursor: Option<&'a Entry<V>>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a str, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.cursor {
                self.cursor = entry.next.as_deref();
                return Some((entry.key.as_str(), &entry.value));
            }
            let slot = self.buckets.get(self.index)?;
            self.index = self.index.saturating_add(1);
            self.cursor = slot.as_deref();
        }
    }
}
