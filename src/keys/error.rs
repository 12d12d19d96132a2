//! Error type shared by alphabet construction, key parsing and key generation.

use thiserror::Error;

use crate::keys::order_key::OrderKey;

/// Errors raised while building alphabets, parsing keys or minting new keys.
///
/// `Unordered` and `NoRoom` are caller contract violations: the bounds handed
/// to `between` must be strictly ordered with room between them.
/// `InvariantBreach` means the generator itself produced a misordered key and
/// always indicates a bug.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum KeyError {
    #[error("alphabet needs at least 4 symbols, got {len}")]
    AlphabetTooSmall { len: usize },

    #[error("alphabet contains duplicate symbol {0:?}")]
    DuplicateSymbol(char),

    #[error("symbol {symbol:?} at position {position} is not in the alphabet")]
    InvalidSymbol { symbol: char, position: usize },

    #[error("lower bound '{lower}' is not below upper bound '{upper}'")]
    Unordered { lower: OrderKey, upper: OrderKey },

    /// The upper bound is the lower bound followed only by the first symbol,
    /// so no string sorts strictly between them.
    #[error("no key fits between '{lower}' and '{upper}'")]
    NoRoom { lower: OrderKey, upper: OrderKey },

    #[error("{op} produced {output:?} from {input}, which breaks key ordering")]
    InvariantBreach {
        op: &'static str,
        input: String,
        output: String,
    },

    #[error("no entry with key '{0}'")]
    UnknownEntry(OrderKey),
}
