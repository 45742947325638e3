use crate::domain::coercion::parse_int;
use crate::domain::model::{Recommendation, RiskTier, ALLOCATIONS};

/// Investors younger than this get one step more equity.
pub const YOUNG_INVESTOR_AGE: i64 = 35;
/// Amounts above this get the large-investment note.
pub const LARGE_INVESTMENT_AMOUNT: i64 = 100_000;

/// Picks an allocation for already validated inputs.
///
/// Values that fail to coerce are treated as neither young nor large.
pub fn build_recommendation(
    age: &str,
    investment_amount: &str,
    risk_level: Option<&str>,
) -> Recommendation {
    let tier = RiskTier::from_slot(risk_level);
    let young = parse_int(age).is_some_and(|age| age < YOUNG_INVESTOR_AGE);
    let large_investment =
        parse_int(investment_amount).is_some_and(|amount| amount > LARGE_INVESTMENT_AMOUNT);

    // base_index tops out at 4, so the bump stays inside the table
    let index = tier.base_index() + usize::from(young);

    tracing::debug!(?tier, young, large_investment, index, "Selected allocation");

    Recommendation {
        allocation: &ALLOCATIONS[index],
        large_investment,
    }
}

pub fn recommend(age: &str, investment_amount: &str, risk_level: Option<&str>) -> String {
    build_recommendation(age, investment_amount, risk_level).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_young_investor_bump() {
        assert_eq!(
            recommend("30", "50000", Some("Medium")),
            "40% bonds (AGG), 60% equities (SPY)"
        );
        assert_eq!(
            recommend("40", "50000", Some("Medium")),
            "60% bonds (AGG), 40% equities (SPY)"
        );
    }

    #[test]
    fn test_large_investment_note() {
        assert_eq!(
            recommend("40", "150000", Some("Medium")),
            "60% bonds (AGG), 40% equities (SPY).  However, due to your large initial investment, you may be able to take on more risk."
        );
        // exactly at the threshold is not large
        assert_eq!(
            recommend("40", "100000", Some("Medium")),
            "60% bonds (AGG), 40% equities (SPY)"
        );
    }

    #[test]
    fn test_unrecognized_tier_falls_to_most_aggressive_bracket() {
        assert_eq!(
            recommend("50", "6000", Some("vHigh")),
            "20% bonds (AGG), 80% equities (SPY)"
        );
        assert_eq!(
            recommend("50", "6000", Some("HIGH")),
            "20% bonds (AGG), 80% equities (SPY)"
        );
        assert_eq!(
            recommend("20", "6000", None),
            "10% bonds (AGG), 90% equities (SPY)"
        );
    }

    #[test]
    fn test_very_low_young_investor() {
        assert_eq!(
            recommend("20", "5000", Some("vLow")),
            "80% bonds (AGG), 20% equities (SPY)"
        );
    }

    #[test]
    fn test_full_tier_table() {
        let cases = [
            ("vLow", 0, 1),
            ("Low", 1, 2),
            ("Medium", 2, 3),
            ("High", 3, 4),
            ("vHigh", 4, 5),
        ];
        for (risk, base, bumped) in cases {
            let older = build_recommendation("35", "5000", Some(risk));
            let younger = build_recommendation("34", "5000", Some(risk));
            assert_eq!(older.allocation, &ALLOCATIONS[base], "risk={risk}");
            assert_eq!(younger.allocation, &ALLOCATIONS[bumped], "risk={risk}");
        }
    }

    #[test]
    fn test_huge_investment_amount_gets_note() {
        assert_eq!(
            recommend("40", "10000000000000000000000", Some("Medium")),
            "60% bonds (AGG), 40% equities (SPY).  However, due to your large initial investment, you may be able to take on more risk."
        );
    }

    #[test]
    fn test_non_numeric_inputs_do_not_bump_or_note() {
        let rec = build_recommendation("abc", "abc", Some("Low"));
        assert_eq!(rec.allocation, &ALLOCATIONS[1]);
        assert!(!rec.large_investment);
    }

    #[test]
    fn test_recommendation_is_deterministic() {
        assert_eq!(
            recommend("33", "250000", Some("High")),
            recommend("33", "250000", Some("High"))
        );
    }
}
