//! Shared pass/fail framework: every lab module compares measured values
//! against its specification table through this one contract.

use crate::error::GaslabError;
use gaslab_schemas::{
    sample::MeasuredValues,
    spec::{Limit, NamedSpec, SpecRule, Verdict},
};

/// Checks one measured value against one rule.
///
/// Upper bounds compare strictly unless the rule's `inclusive` flag is set;
/// ranges include both ends. The parameter name is carried only for error
/// attribution.
pub fn validate(
    parameter: &str,
    measured: f64,
    rule: &SpecRule,
) -> Result<Verdict, GaslabError> {
    if !measured.is_finite() {
        return Err(GaslabError::NonFiniteMeasurement(parameter.to_string()));
    }

    let compliant = match rule.limit {
        Limit::UpperBound { reference, inclusive: false } => measured < reference,
        Limit::UpperBound { reference, inclusive: true } => measured <= reference,
        Limit::Range { low, high } => {
            if low > high {
                return Err(GaslabError::InvertedRange {
                    parameter: parameter.to_string(),
                    low,
                    high,
                });
            }
            low <= measured && measured <= high
        }
    };

    Ok(Verdict { measured, rule: rule.clone(), compliant })
}

/// Runs a whole specification table against a set of measured values,
/// preserving table order. Manual-entry modules have no zero-default, so a
/// parameter absent from the measurements is an error.
pub fn validate_table(
    measured: &MeasuredValues,
    table: &[NamedSpec],
) -> Result<Vec<(String, Verdict)>, GaslabError> {
    let mut verdicts = Vec::with_capacity(table.len());
    for spec in table {
        let value = measured
            .get(&spec.parameter)
            .ok_or_else(|| GaslabError::MissingParameter(spec.parameter.clone()))?;
        let verdict = validate(&spec.parameter, value, &spec.rule)?;
        verdicts.push((spec.parameter.clone(), verdict));
    }
    Ok(verdicts)
}
