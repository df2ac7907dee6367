//! Error types for card validation.
//!
//! Field validators only ever answer yes or no; these types carry the reason
//! behind a "no" and the user-facing messages the aggregate validator reports.

use std::fmt;

use thiserror::Error;

/// One of the four card input fields, in check order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Field {
    /// Card holder name.
    Owner,
    /// Card number.
    Number,
    /// Expiry date.
    IssueDate,
    /// Card verification code.
    Cvc,
}

impl Field {
    /// All fields in the order the aggregate validator checks them.
    pub const ALL: [Field; 4] = [Self::Owner, Self::Number, Self::IssueDate, Self::Cvc];

    /// Returns the label used in user-facing messages.
    #[inline]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Owner => "Owner name",
            Self::Number => "Card number",
            Self::IssueDate => "Issue date",
            Self::Cvc => "CVC",
        }
    }

    /// Message reported when the field is present but fails its check.
    ///
    /// The date message covers both a malformed value and an expired card.
    #[inline]
    pub const fn invalid_message(&self) -> &'static str {
        match self {
            Self::Owner => "Owner name is invalid.",
            Self::Number => "Card number is invalid.",
            Self::IssueDate => "Card is expired or issue date invalid.",
            Self::Cvc => "CVC is invalid.",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A field-level failure collected by the aggregate validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum FieldError {
    /// The raw value was empty or whitespace only.
    #[error("{} is required.", .0.label())]
    Missing(Field),

    /// The value was present but failed its pattern or semantic check.
    #[error("{}", .0.invalid_message())]
    Malformed(Field),
}

impl FieldError {
    /// Returns the field this error belongs to.
    #[inline]
    pub const fn field(&self) -> Field {
        match self {
            Self::Missing(field) | Self::Malformed(field) => *field,
        }
    }

    /// Returns true if the field was absent rather than malformed.
    #[inline]
    pub const fn is_missing(&self) -> bool {
        matches!(self, Self::Missing(_))
    }
}

/// The card number does not match any supported brand pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error("unrecognized card brand - check the card number prefix and length")]
pub struct UnrecognizedBrand;
