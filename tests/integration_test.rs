//! Integration tests for order key generation.
//!
//! These tests walk through the everyday insertion scenarios over the
//! default lowercase alphabet and through the sequence layer built on it.

use order_keys::{Alphabet, KeyError, OrderKey, OrderedSequence};

fn key(value: &str) -> OrderKey {
    OrderKey::parse(value, &Alphabet::lowercase()).unwrap()
}

#[test]
fn test_first_key_is_middle_symbol() {
    let first = OrderKey::empty().next().unwrap();
    assert_eq!(first.as_str(), "n");
}

#[test]
fn test_between_adjacent_single_symbols() {
    let (c, d) = (key("c"), key("d"));
    let mid = c.between(&d).unwrap();

    assert_eq!(mid.len(), 2);
    assert!(mid.as_str().starts_with('c'));
    assert!(c < mid && mid < d);
}

#[test]
fn test_between_key_and_its_extension() {
    let (c, cc) = (key("c"), key("cc"));
    let mid = c.between(&cc).unwrap();

    assert_eq!(mid.as_str(), "cb");
    assert!(c < mid && mid < cc);
}

#[test]
fn test_repeated_inserts_toward_lower_bound() {
    let a = key("a");
    let k1 = a.between(&key("z")).unwrap();
    let k2 = a.between(&k1).unwrap();
    let k3 = a.between(&k2).unwrap();

    assert!(a < k3 && k3 < k2 && k2 < k1);
    assert_eq!(
        [k1.as_str(), k2.as_str(), k3.as_str()],
        ["m", "g", "d"]
    );
}

#[test]
fn test_next_of_max_symbol() {
    let z = key("z");
    let next = z.next().unwrap();

    assert_eq!(next.as_str(), "zn");
    assert!(z < next);
}

#[test]
fn test_generation_is_deterministic() {
    let (lower, upper) = (key("cn"), key("d"));
    assert_eq!(lower.between(&upper), lower.between(&upper));
    assert_eq!(upper.next(), upper.next());
}

#[test]
fn test_append_run_stays_sorted() {
    let abet = Alphabet::lowercase();
    let mut keys = vec![abet.next(&OrderKey::empty()).unwrap()];
    for _ in 0..500 {
        let next = abet.next(keys.last().unwrap()).unwrap();
        keys.push(next);
    }

    assert!(keys.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn test_precondition_violations_fail_fast() {
    let abet = Alphabet::lowercase();

    let err = abet.between(&key("m"), &key("c")).unwrap_err();
    assert!(matches!(err, KeyError::Unordered { .. }));
    assert_eq!(err.to_string(), "lower bound 'm' is not below upper bound 'c'");

    let err = abet.between(&key("m"), &key("maa")).unwrap_err();
    assert_eq!(err.to_string(), "no key fits between 'm' and 'maa'");
}

#[test]
fn test_sequence_insert_and_reorder() {
    let list = OrderedSequence::default();
    let intro = list.push_back("intro").unwrap();
    let outro = list.push_back("outro").unwrap();
    let body = list.insert_after(&intro, "body").unwrap();
    let preface = list.push_front("preface").unwrap();

    assert_eq!(list.values(), vec!["preface", "intro", "body", "outro"]);
    assert!(preface < intro && intro < body && body < outro);

    let outro = list.move_before(&outro, &body).unwrap();
    assert_eq!(list.values(), vec!["preface", "intro", "outro", "body"]);

    let items = list.items();
    assert_eq!(items[2].key, outro);
    assert_eq!(items[2].value, "outro");
}

#[test]
fn test_sequence_keys_survive_reload() {
    let list = OrderedSequence::default();
    let mut anchor = list.push_back(0u32).unwrap();
    for i in 1..50 {
        anchor = list.insert_before(&anchor, i).unwrap();
    }

    // Persisted keys are plain strings; sorting them restores the order.
    let mut stored: Vec<String> = list.keys().into_iter().map(String::from).collect();
    stored.reverse();
    stored.sort();

    let restored: Vec<OrderKey> = stored
        .iter()
        .map(|value| OrderKey::parse(value.as_str(), list.alphabet()).unwrap())
        .collect();
    assert_eq!(restored, list.keys());
    assert_eq!(list.values(), (0..50).rev().collect::<Vec<_>>());
}
