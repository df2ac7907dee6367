//! Card holder name validation.
//!
//! A holder name is one to three tokens of ASCII letters separated by a
//! single space. Digits, punctuation, tabs, accented letters, and leading,
//! trailing or doubled spaces are all rejected.
//!
//! # Example
//!
//! ```
//! use card_validation::owner::{parse_owner, validate_owner};
//!
//! assert!(validate_owner("John Doe"));
//! assert!(validate_owner("Ana Maria Silva"));
//! assert!(!validate_owner("Maria Silva Santos Costa"));
//!
//! let name = parse_owner("Amy Doe").unwrap();
//! assert_eq!(name.token_count(), 2);
//! ```

use std::fmt;

use thiserror::Error;

/// Maximum number of tokens in a holder name.
pub const MAX_OWNER_TOKENS: usize = 3;

/// A validated card holder name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnerName {
    name: String,
    token_count: u8,
}

impl OwnerName {
    /// Returns the name as given.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.name
    }

    /// Returns the number of space-separated tokens (1-3).
    #[inline]
    pub const fn token_count(&self) -> usize {
        self.token_count as usize
    }

    /// Iterates over the name's tokens.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.name.split(' ')
    }
}

impl fmt::Display for OwnerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Errors that can occur during holder name validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OwnerError {
    /// The input is empty or whitespace only.
    #[error("owner name is empty")]
    Empty,

    /// A character other than an ASCII letter or a space was found.
    #[error("invalid character '{}' at position {}", .character.escape_default(), .position)]
    InvalidCharacter {
        /// The invalid character found.
        character: char,
        /// Position of the invalid character.
        position: usize,
    },

    /// A space that does not separate two tokens.
    #[error("unexpected space at position {position} (leading, trailing or repeated)")]
    UnexpectedSpace {
        /// Position of the space.
        position: usize,
    },

    /// The name has more tokens than allowed.
    #[error("owner name has {count} words, at most 3 allowed")]
    TooManyTokens {
        /// Number of tokens found.
        count: usize,
    },
}

/// Parses a holder name, explaining any rejection.
///
/// # Example
///
/// ```
/// use card_validation::owner::{parse_owner, OwnerError};
///
/// assert!(parse_owner("John").is_ok());
/// assert_eq!(parse_owner("   "), Err(OwnerError::Empty));
/// assert_eq!(
///     parse_owner("John  Doe"),
///     Err(OwnerError::UnexpectedSpace { position: 5 })
/// );
/// ```
pub fn parse_owner(input: &str) -> Result<OwnerName, OwnerError> {
    if input.trim().is_empty() {
        return Err(OwnerError::Empty);
    }

    let mut count = 0usize;
    let mut at_token_start = true;
    let mut length = 0usize;

    for (position, c) in input.chars().enumerate() {
        match c {
            'A'..='Z' | 'a'..='z' => {
                if at_token_start {
                    count += 1;
                    at_token_start = false;
                }
            }
            ' ' => {
                if at_token_start {
                    return Err(OwnerError::UnexpectedSpace { position });
                }
                at_token_start = true;
            }
            _ => {
                return Err(OwnerError::InvalidCharacter {
                    character: c,
                    position,
                });
            }
        }
        length = position + 1;
    }

    // Trailing separator
    if at_token_start {
        return Err(OwnerError::UnexpectedSpace {
            position: length - 1,
        });
    }

    if count > MAX_OWNER_TOKENS {
        return Err(OwnerError::TooManyTokens { count });
    }

    Ok(OwnerName {
        name: input.to_owned(),
        token_count: count as u8,
    })
}

/// Checks if a string is a valid holder name.
#[inline]
pub fn validate_owner(input: &str) -> bool {
    parse_owner(input).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_names() {
        for name in ["John", "Amy Doe", "JohN DoE SmIth", "Ana Maria Silva", "x"] {
            assert!(validate_owner(name), "{name:?} should be valid");
        }
    }

    #[test]
    fn test_token_count() {
        assert_eq!(parse_owner("John").unwrap().token_count(), 1);
        assert_eq!(parse_owner("John Doe Smith").unwrap().token_count(), 3);

        let name = parse_owner("Amy Doe").unwrap();
        assert_eq!(name.tokens().collect::<Vec<_>>(), ["Amy", "Doe"]);
        assert_eq!(name.to_string(), "Amy Doe");
    }

    #[test]
    fn test_empty_and_whitespace() {
        assert_eq!(parse_owner(""), Err(OwnerError::Empty));
        assert_eq!(parse_owner(" "), Err(OwnerError::Empty));
        assert_eq!(parse_owner("   "), Err(OwnerError::Empty));
        assert_eq!(parse_owner("\t\n"), Err(OwnerError::Empty));
    }

    #[test]
    fn test_too_many_tokens() {
        assert_eq!(
            parse_owner("John Doe Smith Johnson"),
            Err(OwnerError::TooManyTokens { count: 4 })
        );
        assert!(!validate_owner("Maria Silva Santos Costa"));
    }

    #[test]
    fn test_digits_and_punctuation() {
        assert_eq!(
            parse_owner("John123"),
            Err(OwnerError::InvalidCharacter {
                character: '1',
                position: 4
            })
        );
        assert!(!validate_owner("John Do$"));
        assert!(!validate_owner("O'Brien"));
        assert!(!validate_owner("Mary-Jane"));
        assert!(!validate_owner("J0hn"));
    }

    #[test]
    fn test_non_ascii_letters_rejected() {
        assert!(!validate_owner("João Silva"));
        assert!(!validate_owner("José"));
    }

    #[test]
    fn test_separator_rules() {
        assert!(matches!(
            parse_owner("John\tDoe Smith"),
            Err(OwnerError::InvalidCharacter {
                character: '\t',
                ..
            })
        ));
        assert_eq!(
            parse_owner("John Doe  Smith"),
            Err(OwnerError::UnexpectedSpace { position: 9 })
        );
        assert_eq!(
            parse_owner(" John Doe"),
            Err(OwnerError::UnexpectedSpace { position: 0 })
        );
        assert_eq!(
            parse_owner("John Doe "),
            Err(OwnerError::UnexpectedSpace { position: 8 })
        );
    }

    #[test]
    fn test_error_display() {
        assert!(OwnerError::TooManyTokens { count: 4 }
            .to_string()
            .contains("at most 3"));
        assert_eq!(OwnerError::Empty.to_string(), "owner name is empty");
    }
}
