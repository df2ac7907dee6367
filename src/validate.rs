//! Aggregate validation of a full card input.
//!
//! `validate_card` runs the four field checks in a fixed order (owner, number,
//! issue date, CVC), collects every failure rather than stopping at the first,
//! and classifies the brand only when all four fields pass.

use chrono::{DateTime, Utc};
use tracing::{debug, trace};

use crate::card::CardBrand;
use crate::cvc::validate_cvc;
use crate::detect::{get_brand, validate_number};
use crate::error::{Field, FieldError};
use crate::expiry::validate_issue_date_at;
use crate::owner::validate_owner;

/// The result of validating a full card input.
///
/// Invariant: the outcome is valid if and only if it holds no errors, and a
/// brand is present if and only if it is valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationOutcome {
    brand: Option<CardBrand>,
    errors: Vec<FieldError>,
}

impl ValidationOutcome {
    /// Returns true if every field passed.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the detected brand, present only for a valid outcome.
    #[inline]
    pub const fn brand(&self) -> Option<CardBrand> {
        self.brand
    }

    /// Returns the field errors in check order.
    #[inline]
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Returns the user-facing error messages in check order.
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }

    /// Returns the error recorded for `field`, if any.
    pub fn error_for(&self, field: Field) -> Option<FieldError> {
        self.errors.iter().copied().find(|e| e.field() == field)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ValidationOutcome {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("ValidationOutcome", 3)?;
        state.serialize_field("isValid", &self.is_valid())?;
        state.serialize_field("cardType", &self.brand)?;
        state.serialize_field("errors", &self.messages())?;
        state.end()
    }
}

/// Checks one field: blank is missing, otherwise the predicate decides.
fn check_field(
    errors: &mut Vec<FieldError>,
    field: Field,
    value: &str,
    is_valid: impl FnOnce(&str) -> bool,
) {
    if value.trim().is_empty() {
        trace!(field = field.label(), "field is missing");
        errors.push(FieldError::Missing(field));
    } else if !is_valid(value) {
        trace!(field = field.label(), "field is malformed");
        errors.push(FieldError::Malformed(field));
    }
}

/// Validates a full card input as of `now`.
///
/// # Example
///
/// ```
/// use card_validation::validate::validate_card_at;
/// use card_validation::CardBrand;
/// use chrono::{TimeZone, Utc};
///
/// let now = Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap();
/// let outcome = validate_card_at("John Doe", "4111111111111111", "12/25", "123", now);
/// assert!(outcome.is_valid());
/// assert_eq!(outcome.brand(), Some(CardBrand::Visa));
/// ```
pub fn validate_card_at(
    owner: &str,
    number: &str,
    issue_date: &str,
    cvc: &str,
    now: DateTime<Utc>,
) -> ValidationOutcome {
    let mut errors = Vec::new();

    check_field(&mut errors, Field::Owner, owner, validate_owner);
    check_field(&mut errors, Field::Number, number, validate_number);
    check_field(&mut errors, Field::IssueDate, issue_date, |d| {
        validate_issue_date_at(d, now)
    });
    check_field(&mut errors, Field::Cvc, cvc, validate_cvc);

    let brand = if errors.is_empty() {
        match get_brand(number) {
            Ok(brand) => Some(brand),
            Err(_) => {
                // A number that passes validation always has a brand
                errors.push(FieldError::Malformed(Field::Number));
                None
            }
        }
    } else {
        None
    };

    debug!(
        valid = errors.is_empty(),
        errors = errors.len(),
        brand = brand.map(|b| b.name()),
        "card validated"
    );

    ValidationOutcome { brand, errors }
}

/// Validates a full card input against the current UTC time.
///
/// Every applicable error is reported; the function never fails.
///
/// # Example
///
/// ```
/// use card_validation::validate_card;
///
/// let outcome = validate_card("John123", "123456", "01/20", "12a");
/// assert!(!outcome.is_valid());
/// assert_eq!(outcome.brand(), None);
/// assert_eq!(
///     outcome.messages(),
///     [
///         "Owner name is invalid.",
///         "Card number is invalid.",
///         "Card is expired or issue date invalid.",
///         "CVC is invalid.",
///     ]
/// );
/// ```
pub fn validate_card(owner: &str, number: &str, issue_date: &str, cvc: &str) -> ValidationOutcome {
    validate_card_at(owner, number, issue_date, cvc, Utc::now())
}
