//! Card brand detection using prefix and length matching.
//!
//! A number belongs to a brand when its length is one the brand issues and its
//! leading digits fall in the brand's IIN ranges. No checksum is computed: this
//! is a format classifier only.
//!
//! | Brand | Prefix | Length |
//! |-------|--------|--------|
//! | Visa | 4 | 13, 16 |
//! | MasterCard | 51-55, 2221-2720 | 16 |
//! | American Express | 34, 37 | 15 |

use thiserror::Error;

use crate::card::{CardBrand, MAX_CARD_DIGITS, MIN_CARD_DIGITS};
use crate::error::UnrecognizedBrand;

/// Errors describing why a card number was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumberError {
    /// The input string was empty.
    #[error("card number is empty")]
    Empty,

    /// A non-digit character was found. Separators are not accepted.
    #[error(
        "invalid character '{}' at position {} (only digits allowed)",
        .character.escape_default(),
        .position
    )]
    InvalidCharacter {
        /// The invalid character that was found.
        character: char,
        /// The position in the input string (0-indexed).
        position: usize,
    },

    /// The number is shorter or longer than any card number.
    #[error("card number has {length} digits, expected 13 to 19")]
    InvalidLength {
        /// The actual number of digits.
        length: usize,
    },

    /// The digits did not match any brand's prefix for their length.
    #[error(transparent)]
    UnrecognizedBrand(#[from] UnrecognizedBrand),
}

/// Matches the Visa pattern: prefix 4, 13 or 16 digits.
#[inline]
fn visa(digits: &[u8]) -> bool {
    matches!(digits, [b'4', ..]) && CardBrand::Visa.is_valid_length(digits.len())
}

/// Matches the MasterCard pattern: 16 digits, prefix 51-55 or 2221-2720.
#[inline]
fn mastercard(digits: &[u8]) -> bool {
    if !CardBrand::MasterCard.is_valid_length(digits.len()) {
        return false;
    }

    matches!(
        digits,
        [b'5', b'1'..=b'5', ..]
            | [b'2', b'2', b'2', b'1'..=b'9', ..] // 2221-2229
            | [b'2', b'2', b'3'..=b'9', _, ..] // 2230-2299
            | [b'2', b'3'..=b'6', _, _, ..] // 2300-2699
            | [b'2', b'7', b'0'..=b'1', _, ..] // 2700-2719
            | [b'2', b'7', b'2', b'0', ..] // 2720
    )
}

/// Matches the American Express pattern: prefix 34 or 37, 15 digits.
#[inline]
fn american_express(digits: &[u8]) -> bool {
    matches!(digits, [b'3', b'4' | b'7', ..])
        && CardBrand::AmericanExpress.is_valid_length(digits.len())
}

/// Returns the input as ASCII digit bytes, or `None` if any other character appears.
#[inline]
fn ascii_digits(input: &str) -> Option<&[u8]> {
    let bytes = input.as_bytes();
    bytes.iter().all(u8::is_ascii_digit).then_some(bytes)
}

/// Returns true if the number is a well-formed Visa number.
///
/// # Example
///
/// ```
/// use card_validation::detect::is_visa;
///
/// assert!(is_visa("4111111111111111"));
/// assert!(is_visa("4222222222222"));
/// assert!(!is_visa("411111111111111"));
/// ```
pub fn is_visa(number: &str) -> bool {
    ascii_digits(number).is_some_and(visa)
}

/// Returns true if the number is a well-formed MasterCard number.
///
/// # Example
///
/// ```
/// use card_validation::detect::is_mastercard;
///
/// assert!(is_mastercard("5500000000000004"));
/// assert!(is_mastercard("2221000000000009"));
/// assert!(!is_mastercard("2220000000000000"));
/// ```
pub fn is_mastercard(number: &str) -> bool {
    ascii_digits(number).is_some_and(mastercard)
}

/// Returns true if the number is a well-formed American Express number.
///
/// # Example
///
/// ```
/// use card_validation::detect::is_american_express;
///
/// assert!(is_american_express("378282246310005"));
/// assert!(!is_american_express("358282246310005"));
/// ```
pub fn is_american_express(number: &str) -> bool {
    ascii_digits(number).is_some_and(american_express)
}

/// Detects the brand of a sequence of ASCII digits.
///
/// Brands are tried in the order Visa, MasterCard, American Express.
#[inline]
pub fn detect_brand(digits: &[u8]) -> Option<CardBrand> {
    if visa(digits) {
        Some(CardBrand::Visa)
    } else if mastercard(digits) {
        Some(CardBrand::MasterCard)
    } else if american_express(digits) {
        Some(CardBrand::AmericanExpress)
    } else {
        None
    }
}

/// Parses a card number and classifies it, explaining any rejection.
///
/// # Example
///
/// ```
/// use card_validation::detect::{parse_number, NumberError};
/// use card_validation::CardBrand;
///
/// assert_eq!(parse_number("341234567890123"), Ok(CardBrand::AmericanExpress));
/// assert_eq!(parse_number(""), Err(NumberError::Empty));
/// assert!(matches!(parse_number("1234"), Err(NumberError::InvalidLength { length: 4 })));
/// ```
pub fn parse_number(input: &str) -> Result<CardBrand, NumberError> {
    if input.is_empty() {
        return Err(NumberError::Empty);
    }

    let invalid = input.chars().enumerate().find(|(_, c)| !c.is_ascii_digit());
    if let Some((position, character)) = invalid {
        return Err(NumberError::InvalidCharacter {
            character,
            position,
        });
    }

    let length = input.len();
    if !(MIN_CARD_DIGITS..=MAX_CARD_DIGITS).contains(&length) {
        return Err(NumberError::InvalidLength { length });
    }

    detect_brand(input.as_bytes()).ok_or(NumberError::UnrecognizedBrand(UnrecognizedBrand))
}

/// Returns the brand of a card number.
///
/// Fails with [`UnrecognizedBrand`] when no brand pattern matches; it never
/// falls back to [`CardBrand::Unknown`].
///
/// # Example
///
/// ```
/// use card_validation::{get_brand, CardBrand, UnrecognizedBrand};
///
/// assert_eq!(get_brand("4111111111111111"), Ok(CardBrand::Visa));
/// assert_eq!(get_brand("1234567890123456"), Err(UnrecognizedBrand));
/// ```
pub fn get_brand(number: &str) -> Result<CardBrand, UnrecognizedBrand> {
    ascii_digits(number)
        .and_then(detect_brand)
        .ok_or(UnrecognizedBrand)
}

/// Returns true if the number matches any supported brand.
///
/// # Example
///
/// ```
/// use card_validation::validate_number;
///
/// assert!(validate_number("5412345678901234"));
/// assert!(!validate_number("1234567890123456"));
/// assert!(!validate_number("4111-1111-1111-1111"));
/// ```
#[inline]
pub fn validate_number(number: &str) -> bool {
    is_visa(number) || is_mastercard(number) || is_american_express(number)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visa_detection() {
        assert_eq!(get_brand("4111111111111111"), Ok(CardBrand::Visa));
        assert_eq!(get_brand("4532123456788901"), Ok(CardBrand::Visa));
        assert_eq!(get_brand("4222222222222"), Ok(CardBrand::Visa));
    }

    #[test]
    fn test_visa_rejects_other_lengths() {
        // 19 digits is a real Visa length but not one accepted here
        assert!(!is_visa("4111111111111111111"));
        assert!(!is_visa("41111111111111"));
        assert!(!is_visa("411111111111"));
    }

    #[test]
    fn test_mastercard_detection() {
        // 51-55 range
        assert!(is_mastercard("5100000000000000"));
        assert!(is_mastercard("5412345678901234"));
        assert!(is_mastercard("5599999999999999"));
        assert!(!is_mastercard("5000000000000000"));
        assert!(!is_mastercard("5600000000000000"));
    }

    #[test]
    fn test_mastercard_2_series_bounds() {
        assert!(!is_mastercard("2220999999999999"));
        assert!(is_mastercard("2221000000000000"));
        assert!(is_mastercard("2229000000000000"));
        assert!(is_mastercard("2230000000000000"));
        assert!(is_mastercard("2299000000000000"));
        assert!(is_mastercard("2300000000000000"));
        assert!(is_mastercard("2699000000000000"));
        assert!(is_mastercard("2700000000000000"));
        assert!(is_mastercard("2719000000000000"));
        assert!(is_mastercard("2720999999999999"));
        assert!(!is_mastercard("2721000000000000"));
        assert!(!is_mastercard("2800000000000000"));
    }

    #[test]
    fn test_mastercard_requires_16_digits() {
        assert!(!is_mastercard("541234567890123"));
        assert!(!is_mastercard("54123456789012345"));
    }

    #[test]
    fn test_amex_detection() {
        assert_eq!(get_brand("341234567890123"), Ok(CardBrand::AmericanExpress));
        assert_eq!(get_brand("378282246310005"), Ok(CardBrand::AmericanExpress));
        assert!(!is_american_express("351234567890123"));
        assert!(!is_american_express("3412345678901234"));
    }

    #[test]
    fn test_unknown_brand() {
        assert_eq!(get_brand("1234567890123456"), Err(UnrecognizedBrand));
        assert_eq!(get_brand("6011111111111117"), Err(UnrecognizedBrand));
        assert_eq!(get_brand(""), Err(UnrecognizedBrand));
        assert_eq!(get_brand("abc"), Err(UnrecognizedBrand));
    }

    #[test]
    fn test_non_digits_rejected() {
        assert!(!validate_number("4111 1111 1111 1111"));
        assert!(!validate_number("4111-1111-1111-1111"));
        assert!(!validate_number("411111111111111a"));
        assert!(!validate_number("４111111111111111"));
    }

    #[test]
    fn test_detect_brand_digits() {
        assert_eq!(detect_brand(b"4111111111111111"), Some(CardBrand::Visa));
        assert_eq!(
            detect_brand(b"2720000000000000"),
            Some(CardBrand::MasterCard)
        );
        assert_eq!(detect_brand(b""), None);
    }

    #[test]
    fn test_parse_number_errors() {
        assert_eq!(parse_number(""), Err(NumberError::Empty));
        assert_eq!(
            parse_number("4111x"),
            Err(NumberError::InvalidCharacter {
                character: 'x',
                position: 4
            })
        );
        assert_eq!(
            parse_number("123456"),
            Err(NumberError::InvalidLength { length: 6 })
        );
        assert_eq!(
            parse_number("1234567890123456"),
            Err(NumberError::UnrecognizedBrand(UnrecognizedBrand))
        );
    }

    #[test]
    fn test_parse_number_agrees_with_get_brand() {
        for number in ["4111111111111111", "5500000000000004", "378282246310005"] {
            assert_eq!(parse_number(number).ok(), get_brand(number).ok());
        }
    }
}
