//! # card_validation
//!
//! Payment card input validation and brand classification.
//!
//! ## Features
//!
//! - Holder name, card number, expiry date and CVC field checks
//! - Brand detection for Visa, MasterCard and American Express
//! - One aggregate entry point that reports every field error at once
//! - Pure, stateless functions: safe to call from any thread
//!
//! Brand detection is a prefix and length match only. No Luhn checksum is
//! computed.
//!
//! ## Quick Start
//!
//! ```rust
//! use card_validation::{get_brand, validate_card, CardBrand, UnrecognizedBrand};
//!
//! assert_eq!(get_brand("4111111111111111"), Ok(CardBrand::Visa));
//! assert_eq!(get_brand("1234567890123456"), Err(UnrecognizedBrand));
//!
//! let outcome = validate_card("", "", "", "");
//! assert!(!outcome.is_valid());
//! assert_eq!(outcome.messages()[0], "Owner name is required.");
//! ```
//!
//! ## Field Validators
//!
//! ```rust
//! use card_validation::{validate_cvc, validate_issue_date, validate_number, validate_owner};
//!
//! assert!(validate_owner("John Doe"));
//! assert!(!validate_owner("John Doe Smith Johnson"));
//!
//! assert!(validate_number("341234567890123"));
//! assert!(!validate_number("123456"));
//!
//! assert!(validate_issue_date("12/2099"));
//! assert!(!validate_issue_date("13/25"));
//!
//! assert!(validate_cvc("1234"));
//! assert!(!validate_cvc("12a"));
//! ```
//!
//! ## Typed Input
//!
//! ```rust
//! use card_validation::CreditCard;
//! use chrono::{TimeZone, Utc};
//!
//! let card = CreditCard::new("John Doe", "4111111111111111", "12/25", "123");
//! let now = Utc.with_ymd_and_hms(2025, 12, 31, 23, 0, 0).unwrap();
//! assert!(card.validate_at(now).is_valid());
//!
//! // Debug output never exposes the number or the CVC
//! assert!(!format!("{:?}", card).contains("4111111111111111"));
//! ```
//!
//! ## Supported Card Brands
//!
//! | Brand | Prefix | Length |
//! |-------|--------|--------|
//! | Visa | 4 | 13, 16 |
//! | MasterCard | 51-55, 2221-2720 | 16 |
//! | American Express | 34, 37 | 15 |
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `serde` | `Serialize` for outcomes, `Deserialize` for `CreditCard` |
//! | `cli` | Command-line tool |

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod card;
pub mod cvc;
pub mod detect;
pub mod error;
pub mod expiry;
pub mod owner;
pub mod validate;

// Re-export main types at crate root
pub use card::{CardBrand, CreditCard, MAX_CARD_DIGITS, MIN_CARD_DIGITS};
pub use error::{Field, FieldError, UnrecognizedBrand};
pub use validate::{validate_card, validate_card_at, ValidationOutcome};

// Re-export field validators
pub use cvc::validate_cvc;
pub use detect::{get_brand, validate_number};
pub use expiry::{validate_issue_date, validate_issue_date_at};
pub use owner::validate_owner;
