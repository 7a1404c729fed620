//! Predicates over whole code-unit sequences: does a sequence contain
//! surrogates of some kind, or consist only of them?
//!
//! Every predicate accepts any [`CodeUnits`], treats an absent sequence as an
//! empty one, and returns `false` for both.  None of them allocate or panic.

use crate::scan::{scan_pairs, scan_units, Pairing, Quantifier, Step};
use crate::surrogate::{is_high_surrogate, is_low_surrogate, is_surrogate, is_surrogate_pair};
use crate::types::CodeUnits;

/// Whether `seq` contains at least one surrogate code unit.
pub fn contains_surrogates<S: CodeUnits + ?Sized>(seq: &S) -> bool {
    scan_units(seq.code_units(), Quantifier::Any, is_surrogate)
}

/// Whether `seq` is non-empty and every code unit in it is a surrogate.
pub fn contains_surrogates_only<S: CodeUnits + ?Sized>(seq: &S) -> bool {
    scan_units(seq.code_units(), Quantifier::All, is_surrogate)
}

/// Whether `seq` contains at least one high surrogate.
pub fn contains_high_surrogates<S: CodeUnits + ?Sized>(seq: &S) -> bool {
    scan_units(seq.code_units(), Quantifier::Any, is_high_surrogate)
}

/// Whether `seq` is non-empty and consists only of high surrogates.
pub fn contains_high_surrogates_only<S: CodeUnits + ?Sized>(seq: &S) -> bool {
    scan_units(seq.code_units(), Quantifier::All, is_high_surrogate)
}

/// Whether `seq` contains at least one low surrogate.
pub fn contains_low_surrogates<S: CodeUnits + ?Sized>(seq: &S) -> bool {
    scan_units(seq.code_units(), Quantifier::Any, is_low_surrogate)
}

/// Whether `seq` is non-empty and consists only of low surrogates.
pub fn contains_low_surrogates_only<S: CodeUnits + ?Sized>(seq: &S) -> bool {
    scan_units(seq.code_units(), Quantifier::All, is_low_surrogate)
}

/// Whether a high surrogate immediately followed by a low surrogate appears
/// anywhere in `seq`.
pub fn contains_surrogate_pairs<S: CodeUnits + ?Sized>(seq: &S) -> bool {
    match seq.code_units() {
        [] | [_] => false,
        [high, low] => is_surrogate_pair(*high, *low),
        units => scan_pairs(units, false, |pairing| match pairing {
            Pairing::Pair => Step::Stop(true),
            Pairing::Lone | Pairing::Other => Step::Advance(1),
        }),
    }
}

/// Whether `seq` splits entirely into adjacent surrogate pairs, with no
/// non-surrogate or unpaired surrogate left over.  Odd-length sequences never
/// qualify.
pub fn contains_surrogate_pairs_only<S: CodeUnits + ?Sized>(seq: &S) -> bool {
    match seq.code_units() {
        [] | [_] => false,
        [high, low] => is_surrogate_pair(*high, *low),
        units if units.len() % 2 != 0 => false,
        units => scan_pairs(units, true, |pairing| match pairing {
            Pairing::Pair => Step::Advance(2),
            Pairing::Lone | Pairing::Other => Step::Stop(false),
        }),
    }
}

/// Whether `seq` contains a surrogate that is not half of a surrogate pair:
/// a high surrogate not immediately followed by a low one, or a low surrogate
/// not immediately preceded by a high one.
pub fn contains_unattached_surrogates<S: CodeUnits + ?Sized>(seq: &S) -> bool {
    match seq.code_units() {
        [] => false,
        [ch] => is_surrogate(*ch),
        [ch0, ch1] => !is_surrogate_pair(*ch0, *ch1) && (is_surrogate(*ch0) || is_surrogate(*ch1)),
        units => scan_pairs(units, false, |pairing| match pairing {
            Pairing::Pair => Step::Advance(2),
            Pairing::Lone => Step::Stop(true),
            Pairing::Other => Step::Advance(1),
        }),
    }
}

#[cfg(test)]
use crate::display::code_units;
#[cfg(test)]
use crate::types::CodeUnit;
#[cfg(test)]
use itertools::Itertools;

/// Code units exercising each class: plain text, whitespace, and both ends of
/// both surrogate ranges.
#[cfg(test)]
static ALPHABET: [CodeUnit; 8] = [
    0x0061, // LATIN SMALL LETTER A
    0x0020, // SPACE
    0xD800, 0xDBFF, // high surrogates
    0xDC00, 0xDFFF, // low surrogates
    0xD7FF, // just below the surrogate range
    0xE000, // just above the surrogate range
];

/// Every sequence of length `0..=max_len` over [`ALPHABET`].
#[cfg(test)]
fn all_sequences(max_len: usize) -> Vec<Vec<CodeUnit>> {
    let mut sequences = vec![vec![]];
    for len in 1..=max_len {
        sequences.extend(
            (0..len)
                .map(|_| ALPHABET.iter().copied())
                .multi_cartesian_product(),
        );
    }
    sequences
}

/// Index-by-index decomposition of `units` into pairs and single code units,
/// reading strictly left to right.  Returns `(paired, unattached)` counts of
/// surrogates.
#[cfg(test)]
fn naive_pairing(units: &[CodeUnit]) -> (usize, usize) {
    let mut paired = 0;
    let mut unattached = 0;
    let mut i = 0;
    while i < units.len() {
        if i + 1 < units.len() && is_surrogate_pair(units[i], units[i + 1]) {
            paired += 2;
            i += 2;
        } else {
            if is_surrogate(units[i]) {
                unattached += 1;
            }
            i += 1;
        }
    }
    (paired, unattached)
}

#[test]
fn absent_and_empty_are_false() {
    let absent: Option<Vec<CodeUnit>> = None;
    let empty: Option<Vec<CodeUnit>> = Some(vec![]);

    let predicates: [fn(&Option<Vec<CodeUnit>>) -> bool; 9] = [
        contains_surrogates,
        contains_surrogates_only,
        contains_high_surrogates,
        contains_high_surrogates_only,
        contains_low_surrogates,
        contains_low_surrogates_only,
        contains_surrogate_pairs,
        contains_surrogate_pairs_only,
        contains_unattached_surrogates,
    ];
    for predicate in predicates.iter() {
        assert!(!predicate(&absent));
        assert!(!predicate(&empty));
    }
}

#[test]
fn single_unit_predicates_match_reference() {
    for seq in all_sequences(6) {
        let any = |test: fn(CodeUnit) -> bool| seq.iter().any(|&ch| test(ch));
        let all = |test: fn(CodeUnit) -> bool| !seq.is_empty() && seq.iter().all(|&ch| test(ch));
        let shown = code_units(&seq);

        assert_eq!(contains_surrogates(&seq), any(is_surrogate), "{}", shown);
        assert_eq!(contains_surrogates_only(&seq), all(is_surrogate), "{}", shown);
        assert_eq!(contains_high_surrogates(&seq), any(is_high_surrogate), "{}", shown);
        assert_eq!(contains_high_surrogates_only(&seq), all(is_high_surrogate), "{}", shown);
        assert_eq!(contains_low_surrogates(&seq), any(is_low_surrogate), "{}", shown);
        assert_eq!(contains_low_surrogates_only(&seq), all(is_low_surrogate), "{}", shown);
    }
}

#[test]
fn pair_predicates_match_reference() {
    for seq in all_sequences(6) {
        let shown = code_units(&seq);
        let has_pair = seq.windows(2).any(|w| is_surrogate_pair(w[0], w[1]));
        let (paired, unattached) = naive_pairing(&seq);

        assert_eq!(contains_surrogate_pairs(&seq), has_pair, "{}", shown);
        assert_eq!(
            contains_surrogate_pairs_only(&seq),
            !seq.is_empty() && paired == seq.len(),
            "{}",
            shown
        );
        assert_eq!(contains_unattached_surrogates(&seq), unattached > 0, "{}", shown);
    }
}

#[test]
fn only_variants_imply_contains() {
    for seq in all_sequences(5) {
        let shown = code_units(&seq);
        if contains_surrogates_only(&seq) {
            assert!(contains_surrogates(&seq), "{}", shown);
        }
        if contains_high_surrogates_only(&seq) {
            assert!(contains_high_surrogates(&seq), "{}", shown);
        }
        if contains_low_surrogates_only(&seq) {
            assert!(contains_low_surrogates(&seq), "{}", shown);
        }
        if contains_surrogate_pairs_only(&seq) {
            assert!(contains_surrogate_pairs(&seq), "{}", shown);
            assert!(!contains_unattached_surrogates(&seq), "{}", shown);
        }
    }

    // The converse does not hold.
    let mixed = [0x0061u16, 0xD800, 0x0062];
    assert!(contains_surrogates(&mixed));
    assert!(!contains_surrogates_only(&mixed));
}

#[test]
fn unattached_complements_pairing() {
    for seq in all_sequences(6).iter().filter(|seq| contains_surrogates(*seq)) {
        let every_surrogate_paired = seq
            .iter()
            .filter(|&&ch| is_surrogate(ch))
            .count()
            == naive_pairing(seq).0;
        assert_eq!(
            contains_unattached_surrogates(seq),
            !every_surrogate_paired,
            "{}",
            code_units(seq)
        );
    }
}

#[test]
fn lone_high_surrogate() {
    assert!(contains_surrogates(&[0xD800u16]));
    assert!(contains_high_surrogates(&[0xD800u16]));
    assert!(!contains_low_surrogates(&[0xD800u16]));
    assert!(contains_unattached_surrogates(&[0xD800u16]));
}

#[test]
fn single_pair() {
    let pair = [0xD800u16, 0xDC00];
    assert!(contains_surrogate_pairs(&pair));
    assert!(contains_surrogate_pairs_only(&pair));
    assert!(!contains_unattached_surrogates(&pair));

    let reversed = [0xDC00u16, 0xD800];
    assert!(!contains_surrogate_pairs(&reversed));
    assert!(contains_unattached_surrogates(&reversed));
}

#[test]
fn doubled_high_surrogate_is_unattached() {
    assert!(contains_unattached_surrogates(&[0xD800u16, 0xD800]));
    assert!(!contains_surrogate_pairs(&[0xD800u16, 0xD800]));
}

#[test]
fn pairs_only_rejects_gaps_and_odd_lengths() {
    let emoji: Vec<CodeUnit> = "\u{1F600}\u{1F601}\u{1F602}".encode_utf16().collect();
    assert!(contains_surrogate_pairs_only(&emoji));
    assert!(!contains_unattached_surrogates(&emoji));

    let gapped: Vec<CodeUnit> = "\u{1F600}a\u{1F601}".encode_utf16().collect();
    assert!(contains_surrogate_pairs(&gapped));
    assert!(!contains_surrogate_pairs_only(&gapped));
    assert!(!contains_unattached_surrogates(&gapped));

    let dangling = [0xD800u16, 0xDC00, 0xD800];
    assert!(!contains_surrogate_pairs_only(&dangling));
    assert!(contains_unattached_surrogates(&dangling));
}

#[test]
fn pairs_straddling_the_midpoint() {
    // len 7: max 6, mid 3.  The pair at (2, 3) is split between the halves.
    let units = [0x0061u16, 0x0062, 0xD83D, 0xDE00, 0x0063, 0x0064, 0x0065];
    assert!(contains_surrogate_pairs(&units));
    assert!(!contains_unattached_surrogates(&units));

    // A pair consumed from the front ends at mid; the back half re-reads it.
    let units = [0xD83Du16, 0xDE00, 0xD83D, 0xDE01, 0x0061];
    assert!(!contains_unattached_surrogates(&units));
}

#[test]
fn accepts_any_code_unit_container() {
    let text: Vec<CodeUnit> = "plain text".encode_utf16().collect();
    assert!(!contains_surrogates(&text));
    assert!(!contains_surrogates(text.as_slice()));
    assert!(!contains_surrogates(&Some(&text)));
    assert!(contains_surrogates(&std::borrow::Cow::Borrowed(&[0xDFFFu16][..])));
}
