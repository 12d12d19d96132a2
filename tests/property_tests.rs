//! Property-based tests for key generation.
//!
//! These tests use proptest to check the ordering guarantees across
//! randomly generated keys, alphabets and insertion orders.

use proptest::prelude::*;

use order_keys::{Alphabet, KeyError, OrderKey};

/// Strategy for arbitrary keys over the lowercase alphabet, including keys
/// the generator itself would never mint (trailing `a`, runs of `z`).
fn any_key() -> impl Strategy<Value = OrderKey> {
    "[a-z]{0,8}".prop_map(|value| OrderKey::parse(value, &Alphabet::lowercase()).unwrap())
}

/// Strategy for alphabets of 4 to 40 symbols drawn from a contiguous range.
fn any_alphabet() -> impl Strategy<Value = Alphabet> {
    (4usize..=40, 0u32..200).prop_map(|(len, offset)| {
        let start = 0x21 + offset;
        Alphabet::new((start..start + len as u32).filter_map(char::from_u32)).unwrap()
    })
}

/// True when some string sorts strictly between `lower` and `upper`.
fn has_room(lower: &OrderKey, upper: &OrderKey, first: char) -> bool {
    match upper.as_str().strip_prefix(lower.as_str()) {
        Some(rest) => rest.chars().any(|symbol| symbol != first),
        None => lower < upper,
    }
}

proptest! {
    /// Any ordered pair with room gets a key strictly inside it.
    #[test]
    fn between_is_strictly_inside(a in any_key(), b in any_key()) {
        let abet = Alphabet::lowercase();
        let (lower, upper) = if a <= b { (a, b) } else { (b, a) };

        match abet.between(&lower, &upper) {
            Ok(mid) => {
                prop_assert!(lower < mid, "{} !< {}", lower, mid);
                prop_assert!(mid < upper, "{} !< {}", mid, upper);
                prop_assert!(!mid.as_str().ends_with('a'));
            }
            Err(KeyError::Unordered { .. }) => prop_assert_eq!(&lower, &upper),
            Err(KeyError::NoRoom { .. }) => prop_assert!(!has_room(&lower, &upper, 'a')),
            Err(other) => prop_assert!(false, "unexpected error: {}", other),
        }
    }

    /// Swapped bounds are always rejected.
    #[test]
    fn between_rejects_reversed_bounds(a in any_key(), b in any_key()) {
        prop_assume!(a != b);
        let (lower, upper) = if a < b { (a, b) } else { (b, a) };
        let result = Alphabet::lowercase().between(&upper, &lower);
        prop_assert!(
            matches!(result, Err(KeyError::Unordered { .. })),
            "expected Unordered, got {:?}",
            result
        );
    }

    /// `next` always sorts after its input.
    #[test]
    fn next_is_strictly_after(key in any_key()) {
        let next = Alphabet::lowercase().next(&key).unwrap();
        prop_assert!(key < next);
    }

    /// Generation is a pure function of its inputs.
    #[test]
    fn generation_is_deterministic(a in any_key(), b in any_key()) {
        let abet = Alphabet::lowercase();
        prop_assert_eq!(abet.between(&a, &b), abet.between(&a, &b));
        prop_assert_eq!(abet.next(&a), abet.next(&a));
    }

    /// Random insertion positions keep a sequence sorted and duplicate-free,
    /// whatever the alphabet.
    #[test]
    fn random_insertions_keep_order(
        abet in any_alphabet(),
        positions in prop::collection::vec(any::<prop::sample::Index>(), 1..300),
    ) {
        let mut keys: Vec<OrderKey> = Vec::new();

        for position in positions {
            let at = position.index(keys.len() + 1);
            let key = if at == keys.len() {
                let last = keys.last().cloned().unwrap_or_default();
                abet.next(&last).unwrap()
            } else {
                let lower = if at == 0 { OrderKey::empty() } else { keys[at - 1].clone() };
                abet.between(&lower, &keys[at]).unwrap()
            };
            keys.insert(at, key);
        }

        prop_assert!(keys.windows(2).all(|pair| pair[0] < pair[1]));
        prop_assert!(keys.iter().all(|key| !key.as_str().ends_with(abet.first())));
    }
}
