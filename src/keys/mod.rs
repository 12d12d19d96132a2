//! Order key generation.
//!
//! This module contains the alphabet configuration, the key value type and
//! the `between` / `next` algorithms that mint new keys.

pub mod alphabet;
pub mod error;
mod generate;
pub mod order_key;

// Re-export the main public API
pub use alphabet::{Alphabet, MIN_ALPHABET_LEN};
pub use error::KeyError;
pub use order_key::OrderKey;
