//! Trimming selected classes of code units from both ends of a sequence.

use bitflags::bitflags;
use log::trace;

use crate::constants::{CARRIAGE_RETURN, CHARACTER_TABULATION, LINE_FEED, SPACE};
use crate::display::code_units;
use crate::surrogate::is_surrogate;
use crate::types::CodeUnit;

bitflags! {
    /// The classes of code units that [`trim_with`] strips from the ends of a
    /// sequence.  A code unit is stripped if it belongs to any selected class.
    #[derive(Copy, Clone, Debug, Hash, PartialEq, Eq)]
    pub struct TrimTarget: u32 {
        /// U+0020 SPACE.
        const SPACE        = 0b1;
        /// U+0009 CHARACTER TABULATION.
        const TAB          = 0b10;
        /// U+000A LINE FEED.
        const LINE_BREAK   = 0b100;
        /// U+000D CARRIAGE RETURN.
        const RETURN_CARET = 0b1000;
        /// Any surrogate, U+D800..=U+DFFF.
        const SURROGATE    = 0b10000;

        /// What [`trim`] strips: spaces, tabs, line feeds and carriage
        /// returns, but not surrogates.
        const WHITESPACE = Self::SPACE.bits()
            | Self::TAB.bits()
            | Self::LINE_BREAK.bits()
            | Self::RETURN_CARET.bits();
    }
}

impl Default for TrimTarget {
    fn default() -> TrimTarget {
        TrimTarget::WHITESPACE
    }
}

impl TrimTarget {
    /// Whether `ch` belongs to any class selected by this target.
    #[inline]
    pub fn matches(self, ch: CodeUnit) -> bool {
        match ch {
            SPACE => self.contains(TrimTarget::SPACE),
            CHARACTER_TABULATION => self.contains(TrimTarget::TAB),
            LINE_FEED => self.contains(TrimTarget::LINE_BREAK),
            CARRIAGE_RETURN => self.contains(TrimTarget::RETURN_CARET),
            _ => self.contains(TrimTarget::SURROGATE) && is_surrogate(ch),
        }
    }
}

/// A sequence that can be trimmed into a view of itself.
///
/// Implemented for borrowed slices, which trim to a sub-slice of the same
/// storage, and for `Option`, which keeps an absent sequence absent.
pub trait Trim: Sized {
    fn trim_target(self, target: TrimTarget) -> Self;
}

impl<'a> Trim for &'a [CodeUnit] {
    fn trim_target(self, target: TrimTarget) -> &'a [CodeUnit] {
        trim_units(self, target)
    }
}

impl<T: Trim> Trim for Option<T> {
    fn trim_target(self, target: TrimTarget) -> Option<T> {
        self.map(|seq| seq.trim_target(target))
    }
}

/// Strip code units selected by `target` from both ends of `seq`.
///
/// Code units that match `target` but are not contiguous with either end are
/// kept.  If nothing is stripped the original sequence is returned.
pub fn trim_with<S: Trim>(seq: S, target: TrimTarget) -> S {
    seq.trim_target(target)
}

/// Strip spaces, tabs, line feeds and carriage returns from both ends of
/// `seq`.
pub fn trim<S: Trim>(seq: S) -> S {
    trim_with(seq, TrimTarget::WHITESPACE)
}

fn trim_units(units: &[CodeUnit], target: TrimTarget) -> &[CodeUnit] {
    if units.is_empty() || target.is_empty() {
        return units;
    }

    let last = units.len() - 1;

    let begin = units[..last]
        .iter()
        .take_while(|&&ch| target.matches(ch))
        .count();
    if begin == last && target.matches(units[last]) {
        trace!(target: "utf16_surrogates::trim", "{} trimmed to nothing", code_units(units));
        return &units[..0];
    }

    // `units[begin]` does not match unless `begin == last`, where `units[last]`
    // does not match, so this stops at or after `begin`.
    let end = last
        - units[begin..]
            .iter()
            .rev()
            .take_while(|&&ch| target.matches(ch))
            .count();

    if begin > end {
        return &units[..0];
    }
    if begin == 0 && end == last {
        return units;
    }

    trace!(
        target: "utf16_surrogates::trim",
        "kept [{}, {}] of {} code units",
        begin,
        end,
        units.len()
    );
    &units[begin..=end]
}

#[cfg(test)]
use itertools::Itertools;

#[cfg(test)]
fn utf16(s: &str) -> Vec<CodeUnit> {
    s.encode_utf16().collect()
}

#[cfg(test)]
fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn target_matches_selected_classes() {
    let all = TrimTarget::all();
    for &ch in &[SPACE, CHARACTER_TABULATION, LINE_FEED, CARRIAGE_RETURN, 0xD800, 0xDFFF] {
        assert!(all.matches(ch), "U+{:04X}", ch);
        assert!(!TrimTarget::empty().matches(ch), "U+{:04X}", ch);
    }
    assert!(!all.matches('a' as CodeUnit));
    assert!(!all.matches(0x000B)); // LINE TABULATION
    assert!(!all.matches(0x00A0)); // NO-BREAK SPACE

    assert!(TrimTarget::TAB.matches(CHARACTER_TABULATION));
    assert!(!TrimTarget::TAB.matches(SPACE));
    assert!(!TrimTarget::WHITESPACE.matches(0xD800));
    assert_eq!(TrimTarget::default(), TrimTarget::WHITESPACE);
}

#[test]
fn target_bits_are_stable() {
    assert_eq!(TrimTarget::SPACE.bits(), 1);
    assert_eq!(TrimTarget::TAB.bits(), 2);
    assert_eq!(TrimTarget::LINE_BREAK.bits(), 4);
    assert_eq!(TrimTarget::RETURN_CARET.bits(), 8);
    assert_eq!(TrimTarget::SURROGATE.bits(), 16);
    assert_eq!(TrimTarget::WHITESPACE.bits(), 15);
}

#[test]
fn trims_default_whitespace() {
    init_logging();
    let seq = utf16(" \t\ntest\r\n\t ");
    assert_eq!(trim(&seq[..]), &utf16("test")[..]);
}

#[test]
fn trims_surrogates() {
    init_logging();
    let mut seq = vec![0xD800u16];
    seq.extend(utf16("test"));
    seq.push(0xDC00);
    assert_eq!(trim_with(&seq[..], TrimTarget::SURROGATE), &utf16("test")[..]);

    // Surrogates are not whitespace.
    assert_eq!(trim(&seq[..]), &seq[..]);
}

#[test]
fn absent_stays_absent_and_empty_stays_empty() {
    let absent: Option<&[CodeUnit]> = None;
    assert_eq!(trim_with(absent, TrimTarget::all()), None);
    assert_eq!(trim(absent), None);

    let empty: &[CodeUnit] = &[];
    assert_eq!(trim_with(empty, TrimTarget::all()), empty);
    assert_eq!(trim(Some(empty)), Some(empty));
}

#[test]
fn each_target_strips_its_own_class() {
    let targets = [
        (TrimTarget::SPACE, SPACE),
        (TrimTarget::TAB, CHARACTER_TABULATION),
        (TrimTarget::LINE_BREAK, LINE_FEED),
        (TrimTarget::RETURN_CARET, CARRIAGE_RETURN),
        (TrimTarget::SURROGATE, 0xD800),
        (TrimTarget::SURROGATE, 0xDBFF),
        (TrimTarget::SURROGATE, 0xDC00),
        (TrimTarget::SURROGATE, 0xDFFF),
    ];
    let test = utf16("test");
    for &(target, ch) in targets.iter() {
        let mut seq = vec![ch];
        seq.extend(&test);
        seq.push(ch);
        assert_eq!(
            trim_with(&seq[..], target),
            &test[..],
            "{} with {:?}",
            code_units(&seq),
            target
        );
        assert_eq!(trim_with(&seq[..], TrimTarget::all()), &test[..]);
    }
}

#[test]
fn keeps_interior_matches() {
    let seq = utf16(" a b ");
    assert_eq!(trim_with(&seq[..], TrimTarget::SPACE), &utf16("a b")[..]);

    let seq = utf16("\t\ta \t b\t\t");
    assert_eq!(trim_with(&seq[..], TrimTarget::TAB), &utf16("a \t b")[..]);
}

#[test]
fn everything_matching_trims_to_empty() {
    for s in &[" ", "  ", " \t\r\n", "\n\n\n\n\n"] {
        let seq = utf16(s);
        assert!(trim(&seq[..]).is_empty(), "{}", code_units(&seq));
    }
}

#[test]
fn short_sequences_keep_their_survivor() {
    assert_eq!(trim(&utf16("a")[..]), &utf16("a")[..]);
    assert_eq!(trim(&utf16(" a")[..]), &utf16("a")[..]);
    assert_eq!(trim(&utf16("a ")[..]), &utf16("a")[..]);
    assert_eq!(trim(&utf16(" a ")[..]), &utf16("a")[..]);
}

#[test]
fn empty_target_returns_original() {
    let seq = utf16("  padded  ");
    let trimmed = trim_with(&seq[..], TrimTarget::empty());
    assert_eq!(trimmed.as_ptr(), seq.as_ptr());
    assert_eq!(trimmed.len(), seq.len());
}

#[test]
fn result_is_a_view_of_the_input() {
    let seq = utf16("  view  ");
    let trimmed = trim(&seq[..]);
    assert_eq!(trimmed, &utf16("view")[..]);
    assert_eq!(trimmed.as_ptr(), seq[2..].as_ptr());

    let untouched = utf16("view");
    assert_eq!(trim(&untouched[..]).as_ptr(), untouched.as_ptr());
}

#[test]
fn trimming_is_idempotent_and_boundary_only() {
    let alphabet = [0x0061u16, SPACE, CHARACTER_TABULATION, LINE_FEED, 0xD800, 0xDC00];
    let targets = [
        TrimTarget::empty(),
        TrimTarget::SPACE,
        TrimTarget::WHITESPACE,
        TrimTarget::SURROGATE | TrimTarget::SPACE,
        TrimTarget::all(),
    ];
    for len in 1..=5 {
        for seq in (0..len)
            .map(|_| alphabet.iter().copied())
            .multi_cartesian_product()
        {
            for &target in targets.iter() {
                let once = trim_with(&seq[..], target);
                let twice = trim_with(once, target);
                assert_eq!(once, twice, "{} with {:?}", code_units(&seq), target);

                let expected_begin = seq.iter().position(|&ch| !target.matches(ch));
                let expected: &[CodeUnit] = match expected_begin {
                    None => &[],
                    Some(begin) => {
                        let end = seq.iter().rposition(|&ch| !target.matches(ch)).unwrap_or(begin);
                        &seq[begin..=end]
                    }
                };
                assert_eq!(once, expected, "{} with {:?}", code_units(&seq), target);
            }
        }
    }
}
