//! Fuzz target for the aggregate validator.
//!
//! Checks the outcome invariant on arbitrary card inputs.

#![no_main]

use arbitrary::Arbitrary;
use card_validation::validate_card;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct CardInput<'a> {
    owner: &'a str,
    number: &'a str,
    issue_date: &'a str,
    cvc: &'a str,
}

fuzz_target!(|input: CardInput<'_>| {
    let outcome = validate_card(input.owner, input.number, input.issue_date, input.cvc);

    assert_eq!(outcome.is_valid(), outcome.errors().is_empty());
    assert_eq!(outcome.is_valid(), outcome.brand().is_some());
    assert!(outcome.errors().len() <= 4);
});
