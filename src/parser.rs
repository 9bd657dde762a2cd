//! Scanner for the suffixed number text format.

use crate::defs::Error;

/// Raw parts of a scanned number: the numeral text and the optional unit
/// suffix, both borrowed from the input.
#[derive(Debug)]
pub(crate) struct ParsedParts<'a> {
    pub numeral: &'a str,
    pub unit: Option<&'a str>,
}

/// Splits `s` into its numeral and unit parts, validating the overall
/// `[-]digits[.digits][letters]` shape end to end. Surrounding whitespace is
/// ignored. The unit symbol is not resolved here; the caller looks it up in
/// the unit table.
///
/// ## Errors
///
///  - EmptyInput: the string is empty or whitespace only.
///  - InvalidFormat: the string does not match the grammar.
pub(crate) fn parse(s: &str) -> Result<ParsedParts<'_>, Error> {
    let s = s.trim();
    if s.is_empty() {
        return Err(Error::EmptyInput);
    }

    let b = s.as_bytes();
    let mut i = 0;

    if b[i] == b'-' {
        i += 1;
    }

    let int_start = i;
    while i < b.len() && b[i].is_ascii_digit() {
        i += 1;
    }
    if i == int_start {
        return Err(Error::InvalidFormat);
    }

    if i < b.len() && b[i] == b'.' {
        i += 1;
        let frac_start = i;
        while i < b.len() && b[i].is_ascii_digit() {
            i += 1;
        }
        if i == frac_start {
            return Err(Error::InvalidFormat);
        }
    }

    let unit_start = i;
    while i < b.len() && b[i].is_ascii_alphabetic() {
        i += 1;
    }
    if i != b.len() {
        return Err(Error::InvalidFormat);
    }

    Ok(ParsedParts {
        numeral: &s[..unit_start],
        unit: if unit_start < s.len() { Some(&s[unit_start..]) } else { None },
    })
}
