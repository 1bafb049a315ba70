//! # BIN Validation Module
//!
//! Format checks for Bank Identification Numbers. A BIN is accepted only when
//! the whole input is exactly six ASCII digits; surrounding whitespace, signs
//! and separators are all rejected here. Trimming user input is the caller's job.

use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;

use crate::lookup_errors::InvalidBin;

/// Number of digits in a BIN
pub const BIN_LENGTH: usize = 6;

lazy_static! {
    // `\d` is Unicode-aware in the regex crate, so the class is spelled out
    static ref BIN_REGEX: Regex = Regex::new(&format!("^[0-9]{{{BIN_LENGTH}}}$"))
        .expect("BIN pattern should be valid");
}

/// Check whether `input` is a well-formed BIN
///
/// Absent input is treated the same as an empty string: invalid, not an error.
///
/// # Examples
///
/// ```rust
/// use bin_lookup_bot::bin_validation::is_valid_bin;
///
/// assert!(is_valid_bin(Some("464235")));
/// assert!(!is_valid_bin(Some("46423")));
/// assert!(!is_valid_bin(None));
/// ```
pub fn is_valid_bin(input: Option<&str>) -> bool {
    BIN_REGEX.is_match(input.unwrap_or(""))
}

/// A validated 6-digit BIN
///
/// The only way to obtain one is through [`Bin::parse`], so holders can skip
/// re-validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Bin(String);

impl Bin {
    /// Validate `input` and wrap it
    pub fn parse(input: &str) -> Result<Self, InvalidBin> {
        if is_valid_bin(Some(input)) {
            Ok(Self(input.to_string()))
        } else {
            Err(InvalidBin {
                input: input.to_string(),
            })
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Bin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
