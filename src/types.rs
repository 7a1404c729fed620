//! Common types used across this crate, with meaning not defined within a
//! specific module.

use std::borrow::Cow;

/// A single UTF-16 storage unit.  Not a code point: code points outside the
/// BMP occupy two of these.
pub type CodeUnit = u16;

/// A read-only sequence of UTF-16 code units that may be absent.
///
/// Every scanning function in this crate accepts any `CodeUnits`.  An absent
/// sequence (`None`) reads as zero code units, so it behaves exactly like an
/// empty one.
pub trait CodeUnits {
    /// The code units of this sequence, or an empty slice if it is absent.
    fn code_units(&self) -> &[CodeUnit];

    /// Whether this is the absent sequence rather than a present one, empty
    /// or not.
    fn is_absent(&self) -> bool {
        false
    }
}

impl CodeUnits for [CodeUnit] {
    fn code_units(&self) -> &[CodeUnit] {
        self
    }
}

impl<const N: usize> CodeUnits for [CodeUnit; N] {
    fn code_units(&self) -> &[CodeUnit] {
        self
    }
}

impl CodeUnits for Vec<CodeUnit> {
    fn code_units(&self) -> &[CodeUnit] {
        self
    }
}

impl CodeUnits for Cow<'_, [CodeUnit]> {
    fn code_units(&self) -> &[CodeUnit] {
        self
    }
}

impl<T: CodeUnits + ?Sized> CodeUnits for &T {
    fn code_units(&self) -> &[CodeUnit] {
        (**self).code_units()
    }

    fn is_absent(&self) -> bool {
        (**self).is_absent()
    }
}

impl<T: CodeUnits> CodeUnits for Option<T> {
    fn code_units(&self) -> &[CodeUnit] {
        match self {
            Some(seq) => seq.code_units(),
            None => &[],
        }
    }

    fn is_absent(&self) -> bool {
        match self {
            Some(seq) => seq.is_absent(),
            None => true,
        }
    }
}

#[test]
fn absent_reads_as_empty() {
    let absent: Option<&[CodeUnit]> = None;
    assert!(absent.code_units().is_empty());
    assert!(absent.is_absent());
    let empty: Option<&[CodeUnit]> = Some(&[]);
    assert!(!empty.is_absent());

    let present = Some(vec![0x0061u16, 0xD800]);
    assert_eq!(present.code_units(), &[0x0061u16, 0xD800][..]);
}

#[test]
fn borrowed_and_owned_agree() {
    let owned: Vec<CodeUnit> = "abc".encode_utf16().collect();
    let borrowed: Cow<[CodeUnit]> = Cow::Borrowed(&owned);
    let array = [0x0061u16, 0x0062, 0x0063];
    assert_eq!(owned.code_units(), borrowed.code_units());
    assert_eq!(owned.code_units(), array.code_units());
    assert_eq!((&&owned).code_units(), array.code_units());
}
