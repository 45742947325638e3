use std::num::IntErrorKind;

/// Converts a raw slot value to an integer.
///
/// Surrounding whitespace is ignored and an optional leading sign is accepted.
/// Integers too large for `i64` saturate to `i64::MAX` / `i64::MIN`. Anything
/// else that is not a base-10 integer yields `None`, which callers treat as
/// "not a number"; that includes digit-group underscores such as `10_000`.
/// The validator and the recommender both go through this function so an
/// accepted value means the same thing to each.
pub fn parse_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    let digits = trimmed.strip_prefix(['+', '-']).unwrap_or(trimmed);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    match trimmed.parse::<i64>() {
        Ok(value) => Some(value),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Some(i64::MAX),
            IntErrorKind::NegOverflow => Some(i64::MIN),
            _ => None,
        },
    }
}
