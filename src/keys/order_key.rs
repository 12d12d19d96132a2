//! The order key value type.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::keys::alphabet::Alphabet;
use crate::keys::error::KeyError;

/// An immutable, lexicographically ordered position key.
///
/// The string form is the persisted form: sorting a text column of keys
/// reproduces the sequence order. Keys compare as plain strings, so
/// `"c" < "cb" < "cc" < "d"`.
///
/// Keys are produced by [`Alphabet::between`], [`Alphabet::next`] or read back
/// from storage with [`OrderKey::parse`]. The empty key stands for "before
/// every real key" and is the starting point for the first `next`.
///
/// Deserialization does not know the alphabet, so it accepts any string;
/// generation re-validates its inputs against the alphabet it runs with.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderKey(String);

impl OrderKey {
    /// The canonical empty key.
    pub fn empty() -> Self {
        OrderKey(String::new())
    }

    /// Reads a stored key, checking every symbol against `alphabet`.
    ///
    /// # Errors
    ///
    /// Returns `KeyError::InvalidSymbol` for the first character outside the
    /// alphabet.
    pub fn parse(value: impl Into<String>, alphabet: &Alphabet) -> Result<Self, KeyError> {
        let value = value.into();
        alphabet.digits(&value)?;
        Ok(OrderKey(value))
    }

    pub(crate) fn from_generated(value: String) -> Self {
        OrderKey(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of symbols in the key.
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// A key strictly between `self` and `other` over the lowercase alphabet.
    ///
    /// See [`Alphabet::between`].
    pub fn between(&self, other: &OrderKey) -> Result<OrderKey, KeyError> {
        Alphabet::lowercase().between(self, other)
    }

    /// A key strictly after `self` over the lowercase alphabet.
    ///
    /// See [`Alphabet::next`].
    pub fn next(&self) -> Result<OrderKey, KeyError> {
        Alphabet::lowercase().next(self)
    }
}

impl fmt::Display for OrderKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for OrderKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for OrderKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<OrderKey> for String {
    fn from(key: OrderKey) -> Self {
        key.0
    }
}
