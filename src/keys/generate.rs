//! Key generation: bisection over a tree of alphabet digits.
//!
//! Every key is a path in a tree whose nodes have one child per symbol.
//! The first and last symbols of each level are kept as open ends: a key
//! never ends in the first symbol, and the last symbol only appears with a
//! deeper level behind it or as part of a run of maximal digits.
//!
//! `between` copies the shared prefix of its bounds, then bisects the first
//! digit where they differ. When those digits are adjacent there is no
//! symbol in between, so it keeps the lower digit and places the successor
//! of the rest of the lower key behind it, one level deeper. `next` bisects
//! toward the upper end of the first digit that is not already maximal.
//!
//! With the lowercase alphabet:
//!
//! ```text
//! next("")          -> "n"
//! next("n")         -> "t"
//! next("y")         -> "zn"
//! next("z")         -> "zn"
//! between("c", "d") -> "cn"
//! between("c","cc") -> "cb"
//! between("cn","d") -> "ct"
//! ```
//!
//! Generation is a pure function of its inputs. Two callers that read the
//! same neighbours will mint the same key, so allocation against a shared
//! store has to be serialized per insertion point by the caller.

use tracing::{error, trace};

use crate::keys::alphabet::Alphabet;
use crate::keys::error::KeyError;
use crate::keys::order_key::OrderKey;

impl Alphabet {
    /// The key for the first item of an empty sequence: the middle symbol.
    pub fn first_key(&self) -> OrderKey {
        OrderKey::from_generated(self.middle().to_string())
    }

    /// Returns a key strictly between `lower` and `upper`.
    ///
    /// The empty key is a valid lower bound and means "before everything".
    ///
    /// # Errors
    ///
    /// - `KeyError::InvalidSymbol` if either bound uses a symbol outside this
    ///   alphabet.
    /// - `KeyError::Unordered` unless `lower < upper`.
    /// - `KeyError::NoRoom` if `upper` is `lower` followed only by the first
    ///   symbol (`"c"` and `"caa"`), which leaves no string in between.
    /// - `KeyError::InvariantBreach` if the result is not strictly inside the
    ///   bounds.
    ///
    /// # Example
    ///
    /// ```
    /// use order_keys::{Alphabet, OrderKey};
    ///
    /// let abet = Alphabet::lowercase();
    /// let c = OrderKey::parse("c", &abet).unwrap();
    /// let d = OrderKey::parse("d", &abet).unwrap();
    ///
    /// let mid = abet.between(&c, &d).unwrap();
    /// assert_eq!(mid.as_str(), "cn");
    /// assert!(c < mid && mid < d);
    /// ```
    pub fn between(&self, lower: &OrderKey, upper: &OrderKey) -> Result<OrderKey, KeyError> {
        let lo_digits = self.digits(lower.as_str())?;
        let hi_digits = self.digits(upper.as_str())?;

        if lower >= upper {
            return Err(KeyError::Unordered {
                lower: lower.clone(),
                upper: upper.clone(),
            });
        }
        let first = self.first();
        let no_room = upper
            .as_str()
            .strip_prefix(lower.as_str())
            .is_some_and(|rest| rest.chars().all(|symbol| symbol == first));
        if no_room {
            return Err(KeyError::NoRoom {
                lower: lower.clone(),
                upper: upper.clone(),
            });
        }

        let key = OrderKey::from_generated(self.spell(&self.between_digits(&lo_digits, &hi_digits)));
        trace!(%lower, %upper, %key, "between");

        if lower < &key && &key < upper {
            Ok(key)
        } else {
            error!(%lower, %upper, %key, "between produced a key outside its bounds");
            Err(KeyError::InvariantBreach {
                op: "between",
                input: format!("('{lower}', '{upper}')"),
                output: key.into_string(),
            })
        }
    }

    /// Returns a key strictly after `key`, for appending past the current
    /// last item. Pass the empty key for an empty sequence.
    ///
    /// # Errors
    ///
    /// - `KeyError::InvalidSymbol` if `key` uses a symbol outside this
    ///   alphabet.
    /// - `KeyError::InvariantBreach` if the result does not sort after `key`.
    ///
    /// # Example
    ///
    /// ```
    /// use order_keys::{Alphabet, OrderKey};
    ///
    /// let abet = Alphabet::lowercase();
    /// let first = abet.next(&OrderKey::empty()).unwrap();
    /// assert_eq!(first.as_str(), "n");
    ///
    /// let second = abet.next(&first).unwrap();
    /// assert!(first < second);
    /// ```
    pub fn next(&self, key: &OrderKey) -> Result<OrderKey, KeyError> {
        let digits = self.digits(key.as_str())?;
        let next = OrderKey::from_generated(self.spell(&self.successor_digits(&digits)));
        trace!(%key, %next, "next");

        if key < &next {
            Ok(next)
        } else {
            error!(%key, %next, "next produced a key that does not sort after its input");
            Err(KeyError::InvariantBreach {
                op: "next",
                input: format!("'{key}'"),
                output: next.into_string(),
            })
        }
    }

    /// Digit walk behind `between`. Past its end the lower bound reads as the
    /// first symbol and the upper bound as the last.
    fn between_digits(&self, lower: &[usize], upper: &[usize]) -> Vec<usize> {
        let last = self.len() - 1;
        let mut out = Vec::with_capacity(lower.len().max(upper.len()) + 2);

        for position in 0.. {
            let lo = lower.get(position).copied().unwrap_or(0);
            let hi = upper.get(position).copied().unwrap_or(last);

            if lo == hi {
                out.push(lo);
                continue;
            }

            // Floor division: mid can equal lo but never hi.
            let mid = (lo + hi) / 2;
            if mid != lo && mid != hi {
                out.push(mid);
            } else {
                out.push(lo);
                let rest = lower.get(position + 1..).unwrap_or(&[]);
                out.extend(self.successor_digits(rest));
            }
            break;
        }

        out
    }

    /// Digit walk behind `next`.
    fn successor_digits(&self, digits: &[usize]) -> Vec<usize> {
        let last = self.len() - 1;
        let middle = self.len() / 2;

        if digits.is_empty() {
            return vec![middle];
        }

        let mut out = Vec::with_capacity(digits.len() + 2);
        for &digit in digits {
            if digit == last {
                out.push(digit);
                continue;
            }

            // Round toward the end so the upper sentinel gets used.
            let bumped = (digit + last) / 2;
            if bumped == digit {
                out.extend([last, middle]);
            } else {
                out.push(bumped);
            }
            return out;
        }

        // Only maximal digits: open a subtree under them.
        out.push(middle);
        out
    }
}
