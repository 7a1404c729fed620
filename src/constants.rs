//! Named code units and the bit patterns that identify surrogates.

use crate::types::CodeUnit;

pub const CHARACTER_TABULATION: CodeUnit = 0x0009;
pub const LINE_FEED: CodeUnit = 0x000A;
pub const CARRIAGE_RETURN: CodeUnit = 0x000D;
pub const SPACE: CodeUnit = 0x0020;

/// The first code unit of the surrogate range, which is also the first high
/// surrogate.
pub const MIN_SURROGATE: CodeUnit = 0xD800;

/// The last high surrogate.
pub const MAX_HIGH_SURROGATE: CodeUnit = 0xDBFF;

/// The first low surrogate.
pub const MIN_LOW_SURROGATE: CodeUnit = 0xDC00;

/// The last code unit of the surrogate range, which is also the last low
/// surrogate.
pub const MAX_SURROGATE: CodeUnit = 0xDFFF;

/// The top 5 bits shared by every surrogate (`0xD800 >> 11`).
pub const SURROGATE_TAG: CodeUnit = 0b11011;

/// The top 6 bits shared by every high surrogate (`0xD800 >> 10`).
pub const HIGH_SURROGATE_TAG: CodeUnit = 0b110110;

/// The top 6 bits shared by every low surrogate (`0xDC00 >> 10`).
pub const LOW_SURROGATE_TAG: CodeUnit = 0b110111;

#[test]
fn tags_match_range_bounds() {
    assert_eq!(MIN_SURROGATE >> 11, SURROGATE_TAG);
    assert_eq!(MAX_SURROGATE >> 11, SURROGATE_TAG);
    assert_eq!(MIN_SURROGATE >> 10, HIGH_SURROGATE_TAG);
    assert_eq!(MAX_HIGH_SURROGATE >> 10, HIGH_SURROGATE_TAG);
    assert_eq!(MIN_LOW_SURROGATE >> 10, LOW_SURROGATE_TAG);
    assert_eq!(MAX_SURROGATE >> 10, LOW_SURROGATE_TAG);
    assert_eq!(MAX_HIGH_SURROGATE + 1, MIN_LOW_SURROGATE);
}
