use serde::{Deserialize, Serialize};

/// The limit side of a specification rule.
///
/// `UpperBound` compares strictly by default; `inclusive` switches a rule to
/// `<=` for sites whose deployed paperwork uses the non-strict form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Limit {
    UpperBound {
        reference: f64,
        #[serde(default)]
        inclusive: bool,
    },
    Range {
        low: f64,
        high: f64,
    },
}

/// A commercial or operational specification constraint for one parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecRule {
    pub limit: Limit,
    pub unit: String,
}

impl SpecRule {
    pub fn upper_bound(reference: f64, unit: &str) -> Self {
        Self {
            limit: Limit::UpperBound { reference, inclusive: false },
            unit: unit.to_string(),
        }
    }

    pub fn upper_bound_inclusive(reference: f64, unit: &str) -> Self {
        Self {
            limit: Limit::UpperBound { reference, inclusive: true },
            unit: unit.to_string(),
        }
    }

    pub fn range(low: f64, high: f64, unit: &str) -> Self {
        Self {
            limit: Limit::Range { low, high },
            unit: unit.to_string(),
        }
    }

    /// Human-readable form used on printed reports, e.g. `< 2 % molar` or
    /// `8850-12200 kcal/m3`.
    pub fn describe(&self) -> String {
        match &self.limit {
            Limit::UpperBound { reference, inclusive: false } => {
                format!("< {} {}", reference, self.unit)
            }
            Limit::UpperBound { reference, inclusive: true } => {
                format!("<= {} {}", reference, self.unit)
            }
            Limit::Range { low, high } => format!("{}-{} {}", low, high, self.unit),
        }
    }
}

/// A named rule as it appears in a module's specification table. Table order
/// is the order parameters appear on the printed report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedSpec {
    pub parameter: String,
    pub rule: SpecRule,
}

impl NamedSpec {
    pub fn new(parameter: &str, rule: SpecRule) -> Self {
        Self { parameter: parameter.to_string(), rule }
    }
}

/// Outcome of checking one measured value against one rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    pub measured: f64,
    pub rule: SpecRule,
    pub compliant: bool,
}
