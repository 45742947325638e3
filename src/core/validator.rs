use crate::domain::coercion::parse_int;
use crate::domain::model::{SlotName, ValidationResult};

pub const MIN_AGE: i64 = 0;
pub const MAX_AGE: i64 = 65;
pub const MIN_INVESTMENT_AMOUNT: i64 = 5_000;

pub const AGE_VIOLATION_MESSAGE: &str = "You must be under 65 years old. Please try again.";
pub const INVESTMENT_VIOLATION_MESSAGE: &str = "Sorry, must be at least $5,000";

/// Checks age, then investment amount, and reports the first violation.
///
/// Absent values are not checked. A value that does not coerce to an integer
/// is a violation of its slot's constraint.
pub fn validate(age: Option<&str>, investment_amount: Option<&str>) -> ValidationResult {
    if let Some(raw) = age {
        let in_range = parse_int(raw).is_some_and(|age| (MIN_AGE..=MAX_AGE).contains(&age));
        if !in_range {
            tracing::debug!(age = raw, "Age failed validation");
            return ValidationResult::violation(SlotName::Age, AGE_VIOLATION_MESSAGE);
        }
    }

    if let Some(raw) = investment_amount {
        let enough = parse_int(raw).is_some_and(|amount| amount >= MIN_INVESTMENT_AMOUNT);
        if !enough {
            tracing::debug!(investment_amount = raw, "Investment amount failed validation");
            return ValidationResult::violation(
                SlotName::InvestmentAmount,
                INVESTMENT_VIOLATION_MESSAGE,
            );
        }
    }

    ValidationResult::valid()
}
