//! # Order Keys - dense string position keys
//!
//! Generates short, totally ordered string keys for items in a sequence so that
//! a new item can always be placed strictly between two neighbours, or after the
//! last one, without renumbering anything already stored.
//!
//! ## Features
//!
//! - **Dense**: a key always exists between any two distinct keys with room between them
//! - **Plain strings**: keys sort with ordinary string comparison, so a text column orders them
//! - **Configurable alphabet**: any sorted set of four or more symbols; lowercase `a..=z` by default
//! - **Pure**: generation is deterministic and holds no state
//!
//! ## Example
//!
//! ```rust
//! use order_keys::{Alphabet, OrderKey};
//!
//! let abet = Alphabet::lowercase();
//! let first = abet.next(&OrderKey::empty()).unwrap(); // "n"
//! let second = abet.next(&first).unwrap();            // "t"
//! let middle = abet.between(&first, &second).unwrap(); // "q"
//!
//! assert!(first < middle && middle < second);
//! ```

pub mod keys;
pub mod sequence;

// Re-export the main public API
pub use keys::{Alphabet, KeyError, MIN_ALPHABET_LEN, OrderKey};
pub use sequence::{Item, OrderedSequence};
