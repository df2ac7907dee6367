//! Core card types: the brand enumeration and the raw card input.
//!
//! `CardBrand` is the closed set of networks this crate classifies numbers
//! into. `CreditCard` is the strongly typed input a transport layer binds its
//! request body into before handing the four fields to the engine.

use std::fmt;

use chrono::{DateTime, Utc};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::validate::{validate_card_at, ValidationOutcome};

/// Supported card brands.
///
/// `Unknown` is the placeholder value returned by `Default`. Brand lookup
/// never produces it: an unclassifiable number is reported through
/// [`UnrecognizedBrand`](crate::UnrecognizedBrand) instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CardBrand {
    /// No brand has been determined.
    #[default]
    Unknown,
    /// Visa - Prefix 4, lengths 13, 16
    Visa,
    /// MasterCard - Prefix 51-55, 2221-2720, length 16
    MasterCard,
    /// American Express - Prefix 34, 37, length 15
    AmericanExpress,
}

impl CardBrand {
    /// Brands that `get_brand` can return, in lookup priority order.
    pub const KNOWN: [CardBrand; 3] = [Self::Visa, Self::MasterCard, Self::AmericanExpress];

    /// Returns the valid lengths for this card brand.
    #[inline]
    pub const fn valid_lengths(&self) -> &'static [u8] {
        match self {
            Self::Unknown => &[],
            Self::Visa => &[13, 16],
            Self::MasterCard => &[16],
            Self::AmericanExpress => &[15],
        }
    }

    /// Returns true if the given length is valid for this brand.
    #[inline]
    pub const fn is_valid_length(&self, length: usize) -> bool {
        let valid = self.valid_lengths();
        let mut i = 0;
        while i < valid.len() {
            if valid[i] as usize == length {
                return true;
            }
            i += 1;
        }
        false
    }

    /// Returns true for every brand except the `Unknown` placeholder.
    #[inline]
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown)
    }

    /// Returns a human-readable name for the card brand.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Unknown => "Unknown",
            Self::Visa => "Visa",
            Self::MasterCard => "MasterCard",
            Self::AmericanExpress => "American Express",
        }
    }
}

impl fmt::Display for CardBrand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Maximum number of digits in a card number.
pub const MAX_CARD_DIGITS: usize = 19;

/// Minimum number of digits in a card number.
pub const MIN_CARD_DIGITS: usize = 13;

/// Raw card input, as bound from a request body.
///
/// Every field is a plain string; an absent value is an empty string and is
/// reported as "required" by the aggregate validator.
///
/// # Security
///
/// - All fields are zeroed on drop using the `zeroize` crate
/// - Debug output masks the number (last four only) and the CVC
#[derive(Clone, Default, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CreditCard {
    /// Card holder name.
    #[cfg_attr(feature = "serde", serde(default))]
    pub owner: String,
    /// Card number, digits only.
    #[cfg_attr(feature = "serde", serde(default))]
    pub number: String,
    /// Expiry date as `MM/YY` or `MM/YYYY`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub issue_date: String,
    /// Card verification code.
    #[cfg_attr(feature = "serde", serde(default))]
    pub cvc: String,
}

impl CreditCard {
    /// Creates a card input from its four fields.
    pub fn new(
        owner: impl Into<String>,
        number: impl Into<String>,
        issue_date: impl Into<String>,
        cvc: impl Into<String>,
    ) -> Self {
        Self {
            owner: owner.into(),
            number: number.into(),
            issue_date: issue_date.into(),
            cvc: cvc.into(),
        }
    }

    /// Runs the aggregate validator against the current UTC time.
    pub fn validate(&self) -> ValidationOutcome {
        self.validate_at(Utc::now())
    }

    /// Runs the aggregate validator as of `now`.
    pub fn validate_at(&self, now: DateTime<Utc>) -> ValidationOutcome {
        validate_card_at(&self.owner, &self.number, &self.issue_date, &self.cvc, now)
    }
}

impl fmt::Debug for CreditCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CreditCard")
            .field("owner", &self.owner)
            .field("number", &mask_number(&self.number))
            .field("issue_date", &self.issue_date)
            .field("cvc", &"*".repeat(self.cvc.chars().count()))
            .finish()
    }
}

/// Masks everything but the last four characters.
fn mask_number(number: &str) -> String {
    let len = number.chars().count();
    if len <= 4 {
        return "*".repeat(len);
    }
    let tail: String = number.chars().skip(len - 4).collect();
    format!("{}{}", "*".repeat(len - 4), tail)
}
