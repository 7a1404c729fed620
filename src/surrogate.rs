//! Classification of single UTF-16 code units as surrogates.
//!
//! These tests look only at the high bits of a code unit rather than comparing
//! against range bounds: every surrogate starts with `11011`, every high
//! surrogate with `110110` and every low surrogate with `110111`.

use crate::constants::{HIGH_SURROGATE_TAG, LOW_SURROGATE_TAG, SURROGATE_TAG};
use crate::types::CodeUnit;

/// Which half of a surrogate pair a code unit may occupy.
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq)]
pub enum Surrogate {
    /// U+D800..=U+DBFF, the first half of a pair.
    High,
    /// U+DC00..=U+DFFF, the second half of a pair.
    Low,
}

/// Whether `ch` is in the surrogate range U+D800..=U+DFFF.
#[inline]
pub const fn is_surrogate(ch: CodeUnit) -> bool {
    ch >> 11 == SURROGATE_TAG
}

/// Whether `ch` is a high (leading) surrogate, U+D800..=U+DBFF.
#[inline]
pub const fn is_high_surrogate(ch: CodeUnit) -> bool {
    ch >> 10 == HIGH_SURROGATE_TAG
}

/// Whether `ch` is a low (trailing) surrogate, U+DC00..=U+DFFF.
#[inline]
pub const fn is_low_surrogate(ch: CodeUnit) -> bool {
    ch >> 10 == LOW_SURROGATE_TAG
}

/// Whether `high` followed by `low` forms a surrogate pair.  Order matters:
/// a low surrogate followed by a high surrogate is never a pair.
#[inline]
pub const fn is_surrogate_pair(high: CodeUnit, low: CodeUnit) -> bool {
    is_high_surrogate(high) && is_low_surrogate(low)
}

/// Classify `ch`, returning `None` for code units outside the surrogate range.
pub const fn classify(ch: CodeUnit) -> Option<Surrogate> {
    if is_high_surrogate(ch) {
        Some(Surrogate::High)
    } else if is_low_surrogate(ch) {
        Some(Surrogate::Low)
    } else {
        None
    }
}

#[cfg(test)]
use crate::constants::{MAX_HIGH_SURROGATE, MAX_SURROGATE, MIN_LOW_SURROGATE, MIN_SURROGATE};

#[test]
fn classification_partitions_every_code_unit() {
    for ch in 0..=CodeUnit::MAX {
        let high = is_high_surrogate(ch);
        let low = is_low_surrogate(ch);
        assert!(!(high && low), "U+{:04X} is both high and low", ch);
        assert_eq!(is_surrogate(ch), high || low, "U+{:04X}", ch);
        assert_eq!(
            is_surrogate(ch),
            (MIN_SURROGATE..=MAX_SURROGATE).contains(&ch),
            "U+{:04X} disagrees with the range check",
            ch
        );
        assert_eq!(
            high,
            (MIN_SURROGATE..=MAX_HIGH_SURROGATE).contains(&ch),
            "U+{:04X}",
            ch
        );

        let expected = if high {
            Some(Surrogate::High)
        } else if low {
            Some(Surrogate::Low)
        } else {
            None
        };
        assert_eq!(classify(ch), expected, "U+{:04X}", ch);
    }
}

#[test]
fn range_boundaries() {
    assert!(!is_surrogate(MIN_SURROGATE - 1));
    assert!(is_surrogate(MIN_SURROGATE));
    assert!(is_surrogate(MAX_SURROGATE));
    assert!(!is_surrogate(MAX_SURROGATE + 1));

    assert!(is_high_surrogate(MAX_HIGH_SURROGATE));
    assert!(!is_low_surrogate(MAX_HIGH_SURROGATE));
    assert!(is_low_surrogate(MIN_LOW_SURROGATE));
    assert!(!is_high_surrogate(MIN_LOW_SURROGATE));

    assert!(!is_surrogate(0x0000));
    assert!(!is_surrogate(0xFFFF));
    assert!(!is_surrogate('a' as CodeUnit));
}

#[test]
fn surrogate_pair_is_order_sensitive() {
    use itertools::iproduct;

    let samples = [
        0x0000u16, 0x0020, 0xD7FF, 0xD800, 0xDA12, 0xDBFF, 0xDC00, 0xDD34, 0xDFFF, 0xE000,
        0xFFFF,
    ];
    for (a, b) in iproduct!(samples.iter().copied(), samples.iter().copied()) {
        assert_eq!(
            is_surrogate_pair(a, b),
            is_high_surrogate(a) && is_low_surrogate(b),
            "U+{:04X} U+{:04X}",
            a,
            b
        );
        assert!(
            !(is_surrogate_pair(a, b) && is_surrogate_pair(b, a)),
            "U+{:04X} U+{:04X} pairs in both orders",
            a,
            b
        );
    }

    assert!(is_surrogate_pair(0xD800, 0xDC00));
    assert!(!is_surrogate_pair(0xDC00, 0xD800));
    assert!(is_surrogate_pair(0xDBFF, 0xDFFF));
    assert!(!is_surrogate_pair(0xD800, 0xD800));
}
