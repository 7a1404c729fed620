//! The bidirectional short-circuit scan that every sequence predicate is built
//! on.
//!
//! A scan reads a sequence of length `len` from the front over `[0, mid)` and
//! then from the back over `[mid, max]` in descending order, where
//! `max = len - 1` and `mid = max / 2`.  Together the two halves visit every
//! position exactly once.  Surrogates tend to cluster near the ends of real
//! text, so reading inward from both ends finds them sooner on average than a
//! single forward pass.
//!
//! The walk itself requires `len >= 3`; shorter sequences are decided directly
//! by the callers.

use crate::surrogate::{classify, is_high_surrogate, is_low_surrogate, Surrogate};
use crate::types::CodeUnit;

/// What a scan concluded about the position it just examined.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Step {
    /// Move this many code units further from the boundary being scanned from.
    Advance(usize),
    /// Stop scanning, with this as the result.
    Stop(bool),
}

/// Whether a single-unit scan looks for one matching code unit or requires
/// every code unit to match.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Quantifier {
    /// Stop with `true` on the first match; `false` if none.
    Any,
    /// Stop with `false` on the first mismatch; `true` if none.
    All,
}

/// How the code unit at a scan position relates to the neighbour that would
/// complete a surrogate pair with it: the following unit when scanning from
/// the front, the preceding unit when scanning from the back.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Pairing {
    /// The position and its neighbour form a surrogate pair.
    Pair,
    /// The position holds a surrogate that does not pair with the neighbour.
    Lone,
    /// The position holds a non-surrogate.
    Other,
}

/// Walk positions of a sequence of length `len >= 3` from both ends toward
/// the middle, asking `front` and then `back` what to do at each position.
/// Returns the first `Step::Stop` verdict, or `fallthrough` if both halves
/// run to completion.
fn bidirectional<F, B>(len: usize, fallthrough: bool, mut front: F, mut back: B) -> bool
where
    F: FnMut(usize) -> Step,
    B: FnMut(usize) -> Step,
{
    debug_assert!(len >= 3, "short sequences must be decided directly");

    let max = len - 1;
    let mid = max / 2;

    let mut i = 0;
    while i < mid {
        match front(i) {
            Step::Advance(n) => i += n,
            Step::Stop(verdict) => return verdict,
        }
    }

    // `end` is one past the position examined next, so stepping back past
    // index 0 saturates instead of wrapping.
    let mut end = len;
    while end > mid {
        match back(end - 1) {
            Step::Advance(n) => end = end.saturating_sub(n),
            Step::Stop(verdict) => return verdict,
        }
    }

    fallthrough
}

/// Test every code unit of `units` against `test`, stopping as soon as the
/// `quantifier` is decided.  Empty sequences never satisfy either quantifier.
pub(crate) fn scan_units<T>(units: &[CodeUnit], quantifier: Quantifier, test: T) -> bool
where
    T: Fn(CodeUnit) -> bool,
{
    match (units, quantifier) {
        ([], _) => false,
        ([ch], _) => test(*ch),
        ([ch0, ch1], Quantifier::Any) => test(*ch0) || test(*ch1),
        ([ch0, ch1], Quantifier::All) => test(*ch0) && test(*ch1),
        _ => {
            let step = |i: usize| match (test(units[i]), quantifier) {
                (true, Quantifier::Any) => Step::Stop(true),
                (false, Quantifier::All) => Step::Stop(false),
                _ => Step::Advance(1),
            };
            bidirectional(units.len(), quantifier == Quantifier::All, step, step)
        }
    }
}

/// Scan `units` (of length at least 3) for surrogate pairs, letting `decide`
/// turn the [`Pairing`] found at each position into a [`Step`].  A decider
/// that consumes a pair should advance by 2 so the pair's second half is not
/// examined again as the start of a new one.
pub(crate) fn scan_pairs<D>(units: &[CodeUnit], fallthrough: bool, decide: D) -> bool
where
    D: Fn(Pairing) -> Step,
{
    let front = |i: usize| {
        decide(match classify(units[i]) {
            Some(Surrogate::High) if is_low_surrogate(units[i + 1]) => Pairing::Pair,
            Some(_) => Pairing::Lone,
            None => Pairing::Other,
        })
    };
    let back = |i: usize| {
        decide(match classify(units[i]) {
            Some(Surrogate::Low) if is_high_surrogate(units[i - 1]) => Pairing::Pair,
            Some(_) => Pairing::Lone,
            None => Pairing::Other,
        })
    };
    bidirectional(units.len(), fallthrough, front, back)
}

#[cfg(test)]
use std::cell::RefCell;

#[test]
fn walk_visits_every_position_once() {
    for len in 3..40 {
        let visited = RefCell::new(vec![]);
        let result = bidirectional(
            len,
            false,
            |i| {
                visited.borrow_mut().push(i);
                Step::Advance(1)
            },
            |i| {
                visited.borrow_mut().push(i);
                Step::Advance(1)
            },
        );
        assert!(!result);

        let mut visited = visited.into_inner();
        let mid = (len - 1) / 2;
        assert_eq!(visited[..mid], (0..mid).collect::<Vec<_>>()[..]);
        assert_eq!(visited[mid..], (mid..len).rev().collect::<Vec<_>>()[..]);

        visited.sort_unstable();
        assert_eq!(visited, (0..len).collect::<Vec<_>>(), "len {}", len);
    }
}

#[test]
fn walk_stops_on_first_verdict() {
    let calls = RefCell::new(0);
    let result = bidirectional(
        9,
        false,
        |i| {
            *calls.borrow_mut() += 1;
            if i == 2 {
                Step::Stop(true)
            } else {
                Step::Advance(1)
            }
        },
        |_| unreachable!("back half must not run after a front verdict"),
    );
    assert!(result);
    assert_eq!(calls.into_inner(), 3);
}

#[test]
fn walk_back_half_saturates_at_start() {
    // Advancing by 4 from position 2 would step before index 0.
    let result = bidirectional(3, true, |_| Step::Advance(1), |_| Step::Advance(4));
    assert!(result);
}

#[test]
fn scan_units_quantifiers() {
    let is_a = |ch: CodeUnit| ch == 'a' as CodeUnit;
    let units: Vec<CodeUnit> = "xxxxaxxxx".encode_utf16().collect();
    assert!(scan_units(&units, Quantifier::Any, is_a));
    assert!(!scan_units(&units, Quantifier::All, is_a));

    let all_a: Vec<CodeUnit> = "aaaaa".encode_utf16().collect();
    assert!(scan_units(&all_a, Quantifier::All, is_a));

    assert!(!scan_units(&[], Quantifier::Any, is_a));
    assert!(!scan_units(&[], Quantifier::All, is_a));
}

#[test]
fn scan_pairs_reports_pairing_from_both_ends() {
    // Pair at the front, lone low surrogate in the back half.
    let units = [0xD800u16, 0xDC00, 0x0061, 0x0062, 0xDC00];
    let seen = RefCell::new(vec![]);
    let result = scan_pairs(&units, false, |pairing| {
        seen.borrow_mut().push(pairing);
        match pairing {
            Pairing::Pair => Step::Advance(2),
            Pairing::Lone => Step::Stop(true),
            Pairing::Other => Step::Advance(1),
        }
    });
    assert!(result);
    assert_eq!(seen.into_inner(), vec![Pairing::Pair, Pairing::Lone]);
}
