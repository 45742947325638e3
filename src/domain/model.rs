use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Slots collected by the `RecommendPortfolio` intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SlotName {
    FirstName,
    Age,
    InvestmentAmount,
    RiskLevel,
}

impl SlotName {
    pub fn as_str(&self) -> &'static str {
        match self {
            SlotName::FirstName => "firstName",
            SlotName::Age => "age",
            SlotName::InvestmentAmount => "investmentAmount",
            SlotName::RiskLevel => "riskLevel",
        }
    }
}

impl fmt::Display for SlotName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw slot values as Lex sends them. Absent values serialize as `null`,
/// and slots this handler does not know about are echoed back unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotSet {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub age: Option<String>,
    #[serde(default)]
    pub investment_amount: Option<String>,
    #[serde(default)]
    pub risk_level: Option<String>,
    #[serde(flatten)]
    pub other: HashMap<String, Option<String>>,
}

impl SlotSet {
    pub fn get(&self, slot: SlotName) -> Option<&str> {
        match slot {
            SlotName::FirstName => self.first_name.as_deref(),
            SlotName::Age => self.age.as_deref(),
            SlotName::InvestmentAmount => self.investment_amount.as_deref(),
            SlotName::RiskLevel => self.risk_level.as_deref(),
        }
    }

    /// Nulls out a slot so Lex collects it again.
    pub fn clear(&mut self, slot: SlotName) {
        match slot {
            SlotName::FirstName => self.first_name = None,
            SlotName::Age => self.age = None,
            SlotName::InvestmentAmount => self.investment_amount = None,
            SlotName::RiskLevel => self.risk_level = None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub violated_slot: Option<SlotName>,
    pub message: Option<String>,
}

impl ValidationResult {
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            violated_slot: None,
            message: None,
        }
    }

    pub fn violation(slot: SlotName, message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            violated_slot: Some(slot),
            message: Some(message.into()),
        }
    }
}

/// Declared risk tolerance, from most conservative to most aggressive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskTier {
    VeryLow,
    Low,
    Medium,
    High,
    VeryHigh,
}

impl RiskTier {
    /// Maps the raw `riskLevel` slot to a tier. Only the exact values `vLow`,
    /// `Low`, `Medium` and `High` select their own tier; anything else,
    /// including an absent slot, lands in [`RiskTier::VeryHigh`].
    pub fn from_slot(raw: Option<&str>) -> Self {
        match raw {
            Some("vLow") => RiskTier::VeryLow,
            Some("Low") => RiskTier::Low,
            Some("Medium") => RiskTier::Medium,
            Some("High") => RiskTier::High,
            Some("vHigh") => RiskTier::VeryHigh,
            other => {
                tracing::debug!(risk_level = ?other, "Unrecognized risk level, using most aggressive tier");
                RiskTier::VeryHigh
            }
        }
    }

    /// Index into [`ALLOCATIONS`] before the younger-investor bump.
    pub fn base_index(&self) -> usize {
        match self {
            RiskTier::VeryLow => 0,
            RiskTier::Low => 1,
            RiskTier::Medium => 2,
            RiskTier::High => 3,
            RiskTier::VeryHigh => 4,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Allocation {
    pub bonds_pct: u8,
    pub equities_pct: u8,
}

impl fmt::Display for Allocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}% bonds (AGG), {}% equities (SPY)",
            self.bonds_pct, self.equities_pct
        )
    }
}

/// Allocations ordered from most conservative to most aggressive.
pub static ALLOCATIONS: [Allocation; 6] = [
    Allocation { bonds_pct: 100, equities_pct: 0 },
    Allocation { bonds_pct: 80, equities_pct: 20 },
    Allocation { bonds_pct: 60, equities_pct: 40 },
    Allocation { bonds_pct: 40, equities_pct: 60 },
    Allocation { bonds_pct: 20, equities_pct: 80 },
    Allocation { bonds_pct: 10, equities_pct: 90 },
];

pub const LARGE_INVESTMENT_NOTE: &str =
    ".  However, due to your large initial investment, you may be able to take on more risk.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recommendation {
    pub allocation: &'static Allocation,
    pub large_investment: bool,
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.allocation)?;
        if self.large_investment {
            f.write_str(LARGE_INVESTMENT_NOTE)?;
        }
        Ok(())
    }
}
