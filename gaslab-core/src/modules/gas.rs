//! Natural gas module: composition calculator plus the commercial gas
//! specification table.

use crate::composition;
use crate::error::GaslabError;
use crate::validation;
use gaslab_schemas::{
    component::Component,
    report::SampleReport,
    sample::CompositionSample,
    spec::{NamedSpec, SpecRule},
};

pub const MODULE: &str = "gas";

/// Species counted as inerts for the commercial limit.
const INERTS: [Component; 3] = [
    Component::Nitrogen,
    Component::CarbonDioxide,
    Component::Oxygen,
];

/// Commercial gas specification, in report order.
pub fn commercial_spec_table() -> Vec<NamedSpec> {
    vec![
        NamedSpec::new("CO2", SpecRule::upper_bound(2.0, "% molar")),
        NamedSpec::new("Total inerts", SpecRule::upper_bound(4.0, "% molar")),
        NamedSpec::new("O2", SpecRule::upper_bound(0.2, "% molar")),
        NamedSpec::new("H2S", SpecRule::upper_bound(2.0, "ppm")),
        NamedSpec::new("Heating value", SpecRule::range(8850.0, 12200.0, "kcal/m3")),
    ]
}

/// Runs the full gas analysis: derives properties, validates the commercial
/// table, and assembles the report. When a price is supplied, an estimated
/// revenue entry (USD/m3) is appended after the derived properties.
pub fn analyze(
    sample_name: &str,
    sample: &CompositionSample,
    price_usd_per_mj: Option<f64>,
) -> Result<SampleReport, GaslabError> {
    let props = composition::analyze_composition(sample)?;

    let total = sample.total();
    let molar_pct = |c: Component| sample.amount(c) / total * 100.0;
    let inerts_pct: f64 = INERTS.iter().map(|&c| molar_pct(c)).sum();

    let mut report = SampleReport::new(MODULE, sample_name);
    report.push_scalar("Molecular weight (g/mol)", props.molecular_weight);
    report.push_scalar("Heating value (MJ/m3)", props.heating_value_mj);
    report.push_scalar("Heating value (kcal/m3)", props.heating_value_kcal);
    report.push_scalar("Gamma", props.gamma);
    report.push_scalar("Wobbe index (MJ/m3)", props.wobbe_index);
    report.push_scalar("Density (kg/m3)", props.density);
    report.push_scalar("Dew point estimate (C)", props.dew_point_estimate_c);
    report.push_scalar("CO2 (% molar)", molar_pct(Component::CarbonDioxide));
    report.push_scalar("H2S (ppm)", props.h2s_ppm);
    report.push_scalar("H2S loading (kg/kg)", props.h2s_loading);
    if let Some(price) = price_usd_per_mj {
        report.push_scalar("Estimated revenue (USD/m3)", props.heating_value_mj * price);
    }

    let table = commercial_spec_table();
    let measured = [
        molar_pct(Component::CarbonDioxide),
        inerts_pct,
        molar_pct(Component::Oxygen),
        props.h2s_ppm,
        props.heating_value_kcal,
    ];
    for (spec, value) in table.iter().zip(measured) {
        report.push_check(&spec.parameter, validation::validate(&spec.parameter, value, &spec.rule)?);
    }

    Ok(report)
}
