//! An in-memory ordered sequence positioned by order keys.
//!
//! This is the consumer side of key generation: every item sits under an
//! [`OrderKey`], and inserting or moving an item only mints one new key.
//! Nothing else in the sequence is renumbered.

use std::ops::Bound;
use std::sync::Arc;

use crossbeam_skiplist::SkipMap;
use parking_lot::{Mutex, RwLock};
use tracing::debug;

use crate::keys::{Alphabet, KeyError, OrderKey};

/// A snapshot of one position in an [`OrderedSequence`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item<T> {
    pub key: OrderKey,
    pub value: T,
}

/// An ordered collection whose positions are order keys.
///
/// Reads are lock-free through the skip map. Key allocation reads the
/// neighbours of the insertion point and then writes the new entry; those
/// steps run under one mutex so two writers never mint the same key.
///
/// # Example
///
/// ```
/// use order_keys::OrderedSequence;
///
/// let list = OrderedSequence::default();
/// let a = list.push_back("a").unwrap();
/// let c = list.push_back("c").unwrap();
/// let b = list.insert_after(&a, "b").unwrap();
///
/// assert!(a < b && b < c);
/// assert_eq!(list.values(), vec!["a", "b", "c"]);
/// ```
pub struct OrderedSequence<T> {
    alphabet: Alphabet,
    /// Items sorted by key. Values sit behind a lock so they can be
    /// updated in place without re-keying.
    entries: SkipMap<OrderKey, Arc<RwLock<T>>>,
    /// Held across every neighbour lookup + insert.
    allocation: Mutex<()>,
}

impl<T> OrderedSequence<T>
where
    T: Clone + Send + Sync + 'static,
{
    pub fn new(alphabet: Alphabet) -> Self {
        OrderedSequence {
            alphabet,
            entries: SkipMap::new(),
            allocation: Mutex::new(()),
        }
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains_key(&self, key: &OrderKey) -> bool {
        self.entries.contains_key(key)
    }

    pub fn first_key(&self) -> Option<OrderKey> {
        self.entries.front().map(|entry| entry.key().clone())
    }

    pub fn last_key(&self) -> Option<OrderKey> {
        self.entries.back().map(|entry| entry.key().clone())
    }

    /// Appends `value` after the current last item.
    pub fn push_back(&self, value: T) -> Result<OrderKey, KeyError> {
        let _guard = self.allocation.lock();
        let key = self.key_at_end()?;
        self.place(key.clone(), value);
        debug!(%key, "pushed back");
        Ok(key)
    }

    /// Inserts `value` before the current first item.
    pub fn push_front(&self, value: T) -> Result<OrderKey, KeyError> {
        let _guard = self.allocation.lock();
        let key = match self.entries.front() {
            Some(first) => self.alphabet.between(&OrderKey::empty(), first.key())?,
            None => self.alphabet.first_key(),
        };
        self.place(key.clone(), value);
        debug!(%key, "pushed front");
        Ok(key)
    }

    /// Inserts `value` directly after the item at `anchor`.
    ///
    /// # Errors
    ///
    /// Returns `KeyError::UnknownEntry` if `anchor` is not in the sequence.
    pub fn insert_after(&self, anchor: &OrderKey, value: T) -> Result<OrderKey, KeyError> {
        let _guard = self.allocation.lock();
        self.require(anchor)?;
        let key = self.key_after(anchor)?;
        self.place(key.clone(), value);
        debug!(%anchor, %key, "inserted after");
        Ok(key)
    }

    /// Inserts `value` directly before the item at `anchor`.
    ///
    /// # Errors
    ///
    /// Returns `KeyError::UnknownEntry` if `anchor` is not in the sequence.
    pub fn insert_before(&self, anchor: &OrderKey, value: T) -> Result<OrderKey, KeyError> {
        let _guard = self.allocation.lock();
        self.require(anchor)?;
        let key = self.key_before(anchor)?;
        self.place(key.clone(), value);
        debug!(%anchor, %key, "inserted before");
        Ok(key)
    }

    /// Moves the item at `key` to directly after `target` and returns its new
    /// key. Moving an item relative to itself leaves it where it is.
    pub fn move_after(&self, key: &OrderKey, target: &OrderKey) -> Result<OrderKey, KeyError> {
        self.relocate(key, target, |this, target| this.key_after(target))
    }

    /// Moves the item at `key` to directly before `target` and returns its new
    /// key.
    pub fn move_before(&self, key: &OrderKey, target: &OrderKey) -> Result<OrderKey, KeyError> {
        self.relocate(key, target, |this, target| this.key_before(target))
    }

    /// Removes the item at `key`, returning its value.
    pub fn remove(&self, key: &OrderKey) -> Option<T> {
        let entry = self.entries.remove(key)?;
        debug!(%key, "removed");
        let value = entry.value().read().clone();
        Some(value)
    }

    pub fn get(&self, key: &OrderKey) -> Option<T> {
        self.entries
            .get(key)
            .map(|entry| entry.value().read().clone())
    }

    /// Applies `f` to the value at `key` in place. The key does not change.
    pub fn update<F>(&self, key: &OrderKey, f: F) -> Result<(), KeyError>
    where
        F: FnOnce(&mut T),
    {
        let entry = self
            .entries
            .get(key)
            .ok_or_else(|| KeyError::UnknownEntry(key.clone()))?;
        let mut value = entry.value().write();
        f(&mut *value);
        Ok(())
    }

    pub fn keys(&self) -> Vec<OrderKey> {
        self.entries.iter().map(|entry| entry.key().clone()).collect()
    }

    pub fn values(&self) -> Vec<T> {
        self.entries
            .iter()
            .map(|entry| entry.value().read().clone())
            .collect()
    }

    pub fn items(&self) -> Vec<Item<T>> {
        self.entries
            .iter()
            .map(|entry| Item {
                key: entry.key().clone(),
                value: entry.value().read().clone(),
            })
            .collect()
    }

    fn relocate<F>(&self, key: &OrderKey, target: &OrderKey, mint: F) -> Result<OrderKey, KeyError>
    where
        F: FnOnce(&Self, &OrderKey) -> Result<OrderKey, KeyError>,
    {
        let _guard = self.allocation.lock();
        self.require(key)?;
        self.require(target)?;
        if key == target {
            return Ok(key.clone());
        }

        // Take the item out first so it is not its own neighbour.
        let Some(entry) = self.entries.remove(key) else {
            return Err(KeyError::UnknownEntry(key.clone()));
        };
        let value = Arc::clone(entry.value());

        match mint(self, target) {
            Ok(new_key) => {
                self.entries.insert(new_key.clone(), value);
                debug!(from = %key, to = %new_key, %target, "moved");
                Ok(new_key)
            }
            Err(err) => {
                self.entries.insert(key.clone(), value);
                Err(err)
            }
        }
    }

    fn key_at_end(&self) -> Result<OrderKey, KeyError> {
        match self.entries.back() {
            Some(last) => self.alphabet.next(last.key()),
            None => Ok(self.alphabet.first_key()),
        }
    }

    fn key_after(&self, anchor: &OrderKey) -> Result<OrderKey, KeyError> {
        match self.entries.lower_bound(Bound::Excluded(anchor)) {
            Some(upper) => self.alphabet.between(anchor, upper.key()),
            None => self.alphabet.next(anchor),
        }
    }

    fn key_before(&self, anchor: &OrderKey) -> Result<OrderKey, KeyError> {
        match self.entries.upper_bound(Bound::Excluded(anchor)) {
            Some(lower) => self.alphabet.between(lower.key(), anchor),
            None => self.alphabet.between(&OrderKey::empty(), anchor),
        }
    }

    fn require(&self, key: &OrderKey) -> Result<(), KeyError> {
        if self.entries.contains_key(key) {
            Ok(())
        } else {
            Err(KeyError::UnknownEntry(key.clone()))
        }
    }

    fn place(&self, key: OrderKey, value: T) {
        self.entries.insert(key, Arc::new(RwLock::new(value)));
    }
}

impl<T> Default for OrderedSequence<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new(Alphabet::default())
    }
}
