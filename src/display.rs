//! Human-readable rendering of code-unit sequences, for diagnostics and
//! failure messages.  Lone surrogates cannot be shown as text, so every code
//! unit is written in `U+XXXX` form.

use std::fmt;

use itertools::Itertools;

use crate::types::{CodeUnit, CodeUnits};

/// A sequence rendered as space-separated `U+XXXX` code units, or `<absent>`.
#[derive(Copy, Clone)]
pub struct CodeUnitsDisplay<'a> {
    units: Option<&'a [CodeUnit]>,
}

/// Wrap `seq` for display.
pub fn code_units<S: CodeUnits + ?Sized>(seq: &S) -> CodeUnitsDisplay<'_> {
    CodeUnitsDisplay {
        units: if seq.is_absent() {
            None
        } else {
            Some(seq.code_units())
        },
    }
}

impl fmt::Display for CodeUnitsDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.units {
            None => f.write_str("<absent>"),
            Some(units) => write!(
                f,
                "{}",
                units
                    .iter()
                    .format_with(" ", |unit, f| f(&format_args!("U+{:04X}", unit)))
            ),
        }
    }
}

impl fmt::Debug for CodeUnitsDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

#[test]
fn renders_code_units() {
    let units = [0xD800u16, 0x0074, 0x000A, 0xDFFF];
    assert_eq!(code_units(&units).to_string(), "U+D800 U+0074 U+000A U+DFFF");

    let single: Vec<CodeUnit> = "a".encode_utf16().collect();
    assert_eq!(format!("{:?}", code_units(&single)), "U+0061");
}

#[test]
fn renders_absent_and_empty() {
    let absent: Option<&[CodeUnit]> = None;
    assert_eq!(code_units(&absent).to_string(), "<absent>");

    let empty: Option<&[CodeUnit]> = Some(&[]);
    assert_eq!(code_units(&empty).to_string(), "");
}
