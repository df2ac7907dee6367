//! Fuzz target for the individual field validators.
//!
//! Tests that no field check panics on arbitrary input and that the
//! boolean predicates agree with their detailed parsers.

#![no_main]

use card_validation::{cvc, detect, expiry, owner};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    assert_eq!(owner::validate_owner(data), owner::parse_owner(data).is_ok());
    assert_eq!(cvc::validate_cvc(data), cvc::parse_cvc(data).is_ok());

    let brand = detect::get_brand(data);
    assert_eq!(detect::validate_number(data), brand.is_ok());
    if let Ok(brand) = brand {
        assert_eq!(detect::parse_number(data), Ok(brand));
        assert!(brand.is_valid_length(data.len()));
    }

    if let Ok(parsed) = expiry::parse_expiry(data) {
        let _ = parsed.is_expired();
        let _ = parsed.format_long();
        assert!((1..=12).contains(&parsed.month()));
    }
});
