use serde::{Deserialize, Serialize};

/// Derived engineering quantities for one gas sample. Every field is computed
/// fresh by the calculator; nothing here is ever mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedProperties {
    /// Mixture molecular weight, g/mol.
    pub molecular_weight: f64,
    /// Density at standard conditions (288.15 K, 101325 Pa), kg/m3.
    pub density: f64,
    /// Superior (higher) heating value, MJ/m3.
    pub heating_value_mj: f64,
    /// Superior heating value, kcal/m3.
    pub heating_value_kcal: f64,
    /// MW of air over mixture MW, dimensionless.
    pub gamma: f64,
    /// Wobbe index, MJ/m3.
    pub wobbe_index: f64,
    /// Two-valued heuristic estimate, degrees C: -30 when C6+ exceeds 1%
    /// molar, -60 otherwise. Not a physical dew-point solver.
    pub dew_point_estimate_c: f64,
    /// H2S concentration on a molar basis, ppm.
    pub h2s_ppm: f64,
    /// H2S mass loading, kg per kg of gas.
    pub h2s_loading: f64,
}
