use crate::error::GalaxyError;
use crate::numeral::{decode, encode, is_canonical, parse_digit, MAX_ENCODABLE};

#[test]
fn test_decode_simple_numerals() {
    assert_eq!(decode("I").unwrap(), 1);
    assert_eq!(decode("III").unwrap(), 3);
    assert_eq!(decode("IV").unwrap(), 4);
    assert_eq!(decode("IX").unwrap(), 9);
    assert_eq!(decode("XLII").unwrap(), 42);
    assert_eq!(decode("XC").unwrap(), 90);
    assert_eq!(decode("CD").unwrap(), 400);
    assert_eq!(decode("CM").unwrap(), 900);
}

#[test]
fn test_decode_long_numerals() {
    assert_eq!(decode("MCMIII").unwrap(), 1903);
    assert_eq!(decode("MCMXLIV").unwrap(), 1944);
    assert_eq!(decode("MMVI").unwrap(), 2006);
    assert_eq!(decode("MMMDCCCLXXXVIII").unwrap(), 3888);
    assert_eq!(decode("MMMCMXCIX").unwrap(), 3999);
}

#[test]
fn test_decode_rejects_too_many_repeats() {
    assert_eq!(
        decode("IIII"),
        Err(GalaxyError::InvalidNumeral("IIII".to_string()))
    );
    assert!(decode("XXXX").is_err());
    assert!(decode("CCCC").is_err());
    assert!(decode("MMMM").is_err());
}

#[test]
fn test_decode_rejects_leftover_characters() {
    assert_eq!(
        decode("IIIXM"),
        Err(GalaxyError::InvalidNumeral("IIIXM".to_string()))
    );
    assert!(decode("XIIV").is_err());
}

#[test]
fn test_decode_rejects_repeated_fives() {
    assert!(decode("VV").is_err());
    assert!(decode("LL").is_err());
    assert!(decode("DD").is_err());
    assert!(decode("VX").is_err());
}

#[test]
fn test_decode_rejects_bad_subtraction() {
    assert!(decode("IL").is_err());
    assert!(decode("IC").is_err());
    assert!(decode("XD").is_err());
    assert!(decode("VL").is_err());
    assert!(decode("IXIX").is_err());
    assert!(decode("CMCM").is_err());
}

#[test]
fn test_decode_rejects_empty_and_foreign_input() {
    assert!(decode("").is_err());
    assert!(decode("iv").is_err());
    assert!(decode("ABC").is_err());
    assert!(decode("X I").is_err());
}

#[test]
fn test_encode_by_decimal_place() {
    assert_eq!(encode(1).unwrap(), "I");
    assert_eq!(encode(4).unwrap(), "IV");
    assert_eq!(encode(14).unwrap(), "XIV");
    assert_eq!(encode(999).unwrap(), "CMXCIX");
    assert_eq!(encode(1994).unwrap(), "MCMXCIV");
    assert_eq!(encode(2024).unwrap(), "MMXXIV");
}

#[test]
fn test_encode_range() {
    assert_eq!(encode(0), Err(GalaxyError::OutOfRange(0)));
    assert_eq!(encode(3999), Err(GalaxyError::OutOfRange(3999)));
    assert_eq!(encode(4000), Err(GalaxyError::OutOfRange(4000)));
    assert_eq!(encode(MAX_ENCODABLE).unwrap(), "MMMCMXCVIII");
}

#[test]
fn test_encoded_numerals_are_canonical() {
    for value in 1..=MAX_ENCODABLE {
        let roman = encode(value).unwrap();
        assert!(is_canonical(&roman), "{} encoded as {}", value, roman);
    }
}

#[test]
fn test_parse_digit() {
    assert_eq!(parse_digit("I"), Some('I'));
    assert_eq!(parse_digit("m"), Some('M'));
    assert_eq!(parse_digit("II"), None);
    assert_eq!(parse_digit("Q"), None);
    assert_eq!(parse_digit(""), None);
}
