//! CVC validation.
//!
//! A card verification code is three or four ASCII digits and nothing else:
//! letters, punctuation and whitespace (including leading or trailing) fail.
//!
//! # Example
//!
//! ```
//! use card_validation::cvc::{parse_cvc, validate_cvc};
//!
//! assert!(validate_cvc("123"));
//! assert!(validate_cvc("1234"));
//! assert!(!validate_cvc(" 133"));
//!
//! let cvc = parse_cvc("0001").unwrap();
//! assert!(cvc.is_four_digit());
//! ```

use std::fmt;

use thiserror::Error;

/// A validated CVC. Only its length is kept; the code itself is never stored.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct ValidatedCvc {
    length: u8,
}

impl ValidatedCvc {
    /// Returns the number of digits.
    #[inline]
    pub const fn length(&self) -> usize {
        self.length as usize
    }

    /// Returns true if this is a 4-digit code.
    #[inline]
    pub const fn is_four_digit(&self) -> bool {
        self.length == 4
    }
}

impl fmt::Debug for ValidatedCvc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatedCvc")
            .field("value", &"***")
            .field("length", &self.length)
            .finish()
    }
}

impl fmt::Display for ValidatedCvc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", "*".repeat(self.length as usize))
    }
}

/// Errors that can occur during CVC validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CvcError {
    /// The input is empty.
    #[error("CVC is empty")]
    Empty,

    /// The CVC contains non-digit characters.
    #[error("invalid character '{}' at position {}", .character.escape_default(), .position)]
    InvalidCharacter {
        /// The invalid character found.
        character: char,
        /// Position of the invalid character.
        position: usize,
    },

    /// The CVC has an invalid length.
    #[error("CVC must be 3 or 4 digits, got {length}")]
    InvalidLength {
        /// Actual length provided.
        length: usize,
    },
}

/// Validates a CVC string (accepts 3 or 4 digits).
///
/// # Example
///
/// ```
/// use card_validation::cvc::{parse_cvc, CvcError};
///
/// assert_eq!(parse_cvc("123").unwrap().length(), 3);
/// assert_eq!(parse_cvc("12345").unwrap_err(), CvcError::InvalidLength { length: 5 });
/// ```
pub fn parse_cvc(input: &str) -> Result<ValidatedCvc, CvcError> {
    if input.is_empty() {
        return Err(CvcError::Empty);
    }

    let mut count = 0;

    for (pos, c) in input.chars().enumerate() {
        if !c.is_ascii_digit() {
            return Err(CvcError::InvalidCharacter {
                character: c,
                position: pos,
            });
        }
        count += 1;
    }

    if !(3..=4).contains(&count) {
        return Err(CvcError::InvalidLength { length: count });
    }

    Ok(ValidatedCvc {
        length: count as u8,
    })
}

/// Checks if a string is a valid CVC (3 or 4 digits).
#[inline]
pub fn validate_cvc(input: &str) -> bool {
    parse_cvc(input).is_ok()
}
