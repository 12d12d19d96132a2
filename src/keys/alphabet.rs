//! The ordered symbol set that order keys are spelled in.
//!
//! An [`Alphabet`] is a sorted list of at least four distinct characters.
//! Its first symbol acts as the implicit padding below every key and its
//! last symbol as the padding above every key. Symbols are kept in code
//! point order, so plain string comparison of two keys agrees with the
//! alphabet order.

use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, LazyLock};

use serde::{Deserialize, Serialize};

use crate::keys::error::KeyError;

/// Smallest alphabet for which a midpoint always exists.
pub const MIN_ALPHABET_LEN: usize = 4;

static LOWERCASE: LazyLock<Alphabet> = LazyLock::new(|| Alphabet {
    symbols: ('a'..='z').collect::<Vec<_>>().into(),
});

/// A closed, totally ordered set of key symbols.
///
/// Cloning is cheap; the symbols are shared.
///
/// # Example
///
/// ```
/// use order_keys::Alphabet;
///
/// let abet = Alphabet::lowercase();
/// assert_eq!(abet.len(), 26);
/// assert_eq!(abet.first(), 'a');
/// assert_eq!(abet.last(), 'z');
/// assert_eq!(abet.middle(), 'n');
///
/// // Symbols are sorted on construction.
/// let digits: Alphabet = "71530".parse().unwrap();
/// assert_eq!(digits.to_string(), "01357");
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Alphabet {
    symbols: Arc<[char]>,
}

impl Alphabet {
    /// Builds an alphabet from any collection of symbols.
    ///
    /// # Errors
    ///
    /// Returns `KeyError::AlphabetTooSmall` for fewer than four symbols and
    /// `KeyError::DuplicateSymbol` if a symbol repeats.
    pub fn new(symbols: impl IntoIterator<Item = char>) -> Result<Self, KeyError> {
        let mut symbols: Vec<char> = symbols.into_iter().collect();
        symbols.sort_unstable();

        if let Some(pair) = symbols.windows(2).find(|pair| pair[0] == pair[1]) {
            return Err(KeyError::DuplicateSymbol(pair[0]));
        }
        if symbols.len() < MIN_ALPHABET_LEN {
            return Err(KeyError::AlphabetTooSmall { len: symbols.len() });
        }

        Ok(Alphabet {
            symbols: symbols.into(),
        })
    }

    /// The 26 lowercase Latin letters.
    pub fn lowercase() -> Self {
        LOWERCASE.clone()
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// The lower sentinel, implicitly padding every key on the right.
    pub fn first(&self) -> char {
        self.symbols[0]
    }

    /// The upper sentinel.
    pub fn last(&self) -> char {
        self.symbols[self.symbols.len() - 1]
    }

    /// The symbol that starts every fresh subtree.
    pub fn middle(&self) -> char {
        self.symbols[self.symbols.len() / 2]
    }

    pub fn symbol(&self, index: usize) -> Option<char> {
        self.symbols.get(index).copied()
    }

    pub fn index_of(&self, symbol: char) -> Option<usize> {
        self.symbols.binary_search(&symbol).ok()
    }

    pub fn contains(&self, symbol: char) -> bool {
        self.index_of(symbol).is_some()
    }

    /// Maps every character of `value` to its alphabet index.
    pub(crate) fn digits(&self, value: &str) -> Result<Vec<usize>, KeyError> {
        value
            .chars()
            .enumerate()
            .map(|(position, symbol)| {
                self.index_of(symbol)
                    .ok_or(KeyError::InvalidSymbol { symbol, position })
            })
            .collect()
    }

    /// Spells a digit string back out. Digits come from `digits` or from the
    /// generator, so they are always in range.
    pub(crate) fn spell(&self, digits: &[usize]) -> String {
        digits.iter().map(|&digit| self.symbols[digit]).collect()
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::lowercase()
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.symbols.iter().try_for_each(|symbol| write!(f, "{symbol}"))
    }
}

impl fmt::Debug for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Alphabet").field(&self.to_string()).finish()
    }
}

impl FromStr for Alphabet {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Alphabet::new(s.chars())
    }
}

impl TryFrom<String> for Alphabet {
    type Error = KeyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Alphabet> for String {
    fn from(alphabet: Alphabet) -> Self {
        alphabet.to_string()
    }
}
