//! A crate that classifies UTF-16 code units as surrogates, scans code-unit
//! sequences for high, low, paired and unattached surrogates, and trims
//! whitespace or surrogates from sequence boundaries.
//!
//! Everything here is a pure function over borrowed code units: nothing
//! allocates, and absent (`None`) sequences are accepted wherever a sequence
//! is.

pub mod constants;
pub mod display;
mod scan;
pub mod sequence;
pub mod surrogate;
pub mod trim;
pub mod types;

pub use sequence::{
    contains_high_surrogates, contains_high_surrogates_only, contains_low_surrogates,
    contains_low_surrogates_only, contains_surrogate_pairs, contains_surrogate_pairs_only,
    contains_surrogates, contains_surrogates_only, contains_unattached_surrogates,
};
pub use surrogate::{
    classify, is_high_surrogate, is_low_surrogate, is_surrogate, is_surrogate_pair, Surrogate,
};
pub use trim::{trim, trim_with, Trim, TrimTarget};
pub use types::{CodeUnit, CodeUnits};
