//! Composition-to-properties calculator for natural gas samples.
//!
//! Input amounts are normalized by their sum before any derivation, so a
//! sample expressed in percent and the same sample expressed as fractions
//! produce identical results.

use crate::error::GaslabError;
use gaslab_schemas::{
    component::Component, properties::DerivedProperties, sample::CompositionSample,
};

/// Universal gas constant, J/(mol K).
pub const GAS_CONSTANT: f64 = 8.314;
/// Molecular weight of air, g/mol.
pub const MW_AIR: f64 = 28.96;
/// Standard temperature, K.
pub const T_STD: f64 = 288.15;
/// Standard pressure, Pa.
pub const P_STD: f64 = 101325.0;
/// MJ to kcal.
pub const MJ_TO_KCAL: f64 = 239.006;

/// C6+ molar fraction above which the dew point is estimated at -30 C.
const DEW_POINT_C6_THRESHOLD: f64 = 0.01;

/// Derives the full property set for one composition sample.
///
/// Fails when the retained amounts do not sum to a positive finite number;
/// it never returns NaN or infinite fields. Components absent from the
/// sample are treated as zero.
pub fn analyze_composition(
    sample: &CompositionSample,
) -> Result<DerivedProperties, GaslabError> {
    for component in Component::ALL {
        let amount = sample.amount(component);
        if amount < 0.0 {
            return Err(GaslabError::NegativeAmount(
                component.symbol().to_string(),
                amount,
            ));
        }
    }

    let total = sample.total();
    if !total.is_finite() || total <= 0.0 {
        return Err(GaslabError::NonPositiveTotal(total));
    }

    let fraction = |component: Component| sample.amount(component) / total;

    let molecular_weight: f64 = Component::ALL
        .iter()
        .map(|&c| fraction(c) * c.molecular_weight())
        .sum();

    // Ideal gas at standard conditions; MW in kg/mol so the density comes
    // out in kg/m3.
    let density = (molecular_weight / 1000.0) * P_STD / (GAS_CONSTANT * T_STD);

    let heating_value_mj: f64 = Component::ALL
        .iter()
        .filter_map(|&c| c.higher_heating_value().map(|hhv| fraction(c) * hhv))
        .sum();
    let heating_value_kcal = heating_value_mj * MJ_TO_KCAL;

    let gamma = MW_AIR / molecular_weight;
    let wobbe_index = heating_value_mj / (molecular_weight / MW_AIR).sqrt();

    // Coarse binary classifier on heavy-end presence, not a dew-point solver.
    let dew_point_estimate_c = if fraction(Component::HexanesPlus) > DEW_POINT_C6_THRESHOLD {
        -30.0
    } else {
        -60.0
    };

    // H2S is taken on the normalized molar basis: fraction -> ppm. For a
    // percent-scale input this matches the conventional % x 10^4 conversion.
    let h2s_ppm = fraction(Component::HydrogenSulfide) * 1e6;
    let h2s_loading = (h2s_ppm * Component::HydrogenSulfide.molecular_weight() / 1e6)
        / (molecular_weight * 1000.0);

    Ok(DerivedProperties {
        molecular_weight,
        density,
        heating_value_mj,
        heating_value_kcal,
        gamma,
        wobbe_index,
        dew_point_estimate_c,
        h2s_ppm,
        h2s_loading,
    })
}
