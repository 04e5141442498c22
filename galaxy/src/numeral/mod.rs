//! Roman numeral encoding and decoding
//!
//! Decoding accepts only the canonical form described by `roman.pest`:
//! at most three repeats of I, X, C and M, no repeats of V, L and D, and the
//! subtractive pairs IV, IX, XL, XC, CD and CM. Anything else, including the
//! empty string, is rejected.

use crate::error::GalaxyError;
use crate::GalaxyResult;
use pest::Parser;
use pest_derive::Parser;

#[derive(Parser)]
#[grammar = "src/numeral/roman.pest"]
struct RomanParser;

/// Largest value `encode` accepts. 3999 is deliberately excluded.
pub const MAX_ENCODABLE: u32 = 3998;

/// The seven single-character digits
pub const DIGITS: [char; 7] = ['I', 'V', 'X', 'L', 'C', 'D', 'M'];

/// Symbol values in the order they are consumed while decoding
const DECODE_TABLE: [(&str, u32); 13] = [
    ("M", 1000),
    ("CM", 900),
    ("D", 500),
    ("CD", 400),
    ("C", 100),
    ("XC", 90),
    ("L", 50),
    ("XL", 40),
    ("X", 10),
    ("IX", 9),
    ("V", 5),
    ("IV", 4),
    ("I", 1),
];

const UNITS: [&str; 10] = ["", "I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX"];
const TENS: [&str; 10] = ["", "X", "XX", "XXX", "XL", "L", "LX", "LXX", "LXXX", "XC"];
const HUNDREDS: [&str; 10] = ["", "C", "CC", "CCC", "CD", "D", "DC", "DCC", "DCCC", "CM"];
const THOUSANDS: [&str; 4] = ["", "M", "MM", "MMM"];

/// Whether `c` is one of the seven roman digits (upper case only)
pub fn is_digit(c: char) -> bool {
    DIGITS.contains(&c)
}

/// Parse a single-character token as a roman digit, ignoring case
pub fn parse_digit(token: &str) -> Option<char> {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => {
            let upper = c.to_ascii_uppercase();
            is_digit(upper).then_some(upper)
        }
        _ => None,
    }
}

/// Whether `roman` is a canonical roman numeral
pub fn is_canonical(roman: &str) -> bool {
    RomanParser::parse(Rule::numeral, roman).is_ok()
}

/// Decode a canonical roman numeral
pub fn decode(roman: &str) -> GalaxyResult<u32> {
    if !is_canonical(roman) {
        return Err(GalaxyError::InvalidNumeral(roman.to_string()));
    }

    let mut rest = roman;
    let mut total = 0;
    for (symbol, value) in DECODE_TABLE {
        while let Some(tail) = rest.strip_prefix(symbol) {
            total += value;
            rest = tail;
        }
    }

    Ok(total)
}

/// Encode a value in `1..=MAX_ENCODABLE` as a canonical roman numeral
pub fn encode(value: u32) -> GalaxyResult<String> {
    if !(1..=MAX_ENCODABLE).contains(&value) {
        return Err(GalaxyError::OutOfRange(value));
    }

    let place = |divisor: u32| (value / divisor % 10) as usize;
    let mut roman = String::with_capacity(15);
    roman.push_str(THOUSANDS[(value / 1000) as usize]);
    roman.push_str(HUNDREDS[place(100)]);
    roman.push_str(TENS[place(10)]);
    roman.push_str(UNITS[place(1)]);
    Ok(roman)
}
