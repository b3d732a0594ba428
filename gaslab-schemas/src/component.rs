use serde::{Deserialize, Serialize};

/// The closed set of species tracked in a natural gas chromatography report.
/// Column headers in lab exports use the chemical symbols, so serde names
/// follow those exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Component {
    #[serde(rename = "CH4")]
    Methane,
    #[serde(rename = "C2H6")]
    Ethane,
    #[serde(rename = "C3H8")]
    Propane,
    #[serde(rename = "i-C4H10")]
    IsoButane,
    #[serde(rename = "n-C4H10")]
    NormalButane,
    #[serde(rename = "i-C5H12")]
    IsoPentane,
    #[serde(rename = "n-C5H12")]
    NormalPentane,
    #[serde(rename = "C6+")]
    HexanesPlus,
    #[serde(rename = "N2")]
    Nitrogen,
    #[serde(rename = "CO2")]
    CarbonDioxide,
    #[serde(rename = "H2S")]
    HydrogenSulfide,
    #[serde(rename = "O2")]
    Oxygen,
}

impl Component {
    pub const ALL: [Component; 12] = [
        Component::Methane,
        Component::Ethane,
        Component::Propane,
        Component::IsoButane,
        Component::NormalButane,
        Component::IsoPentane,
        Component::NormalPentane,
        Component::HexanesPlus,
        Component::Nitrogen,
        Component::CarbonDioxide,
        Component::HydrogenSulfide,
        Component::Oxygen,
    ];

    pub fn symbol(&self) -> &'static str {
        match self {
            Component::Methane => "CH4",
            Component::Ethane => "C2H6",
            Component::Propane => "C3H8",
            Component::IsoButane => "i-C4H10",
            Component::NormalButane => "n-C4H10",
            Component::IsoPentane => "i-C5H12",
            Component::NormalPentane => "n-C5H12",
            Component::HexanesPlus => "C6+",
            Component::Nitrogen => "N2",
            Component::CarbonDioxide => "CO2",
            Component::HydrogenSulfide => "H2S",
            Component::Oxygen => "O2",
        }
    }

    /// Resolves a column header to a component. Unknown headers yield `None`
    /// so callers can discard columns that are not part of the tracked set.
    pub fn from_symbol(symbol: &str) -> Option<Component> {
        Component::ALL.iter().copied().find(|c| c.symbol() == symbol)
    }

    /// Molecular weight in g/mol. C6+ is lumped at 86.00 (n-hexane).
    pub fn molecular_weight(&self) -> f64 {
        match self {
            Component::Methane => 16.04,
            Component::Ethane => 30.07,
            Component::Propane => 44.10,
            Component::IsoButane => 58.12,
            Component::NormalButane => 58.12,
            Component::IsoPentane => 72.15,
            Component::NormalPentane => 72.15,
            Component::HexanesPlus => 86.00,
            Component::Nitrogen => 28.01,
            Component::CarbonDioxide => 44.01,
            Component::HydrogenSulfide => 34.08,
            Component::Oxygen => 32.00,
        }
    }

    /// Higher heating value in MJ/m3 at standard conditions.
    /// Non-combustible species (and H2S, which is handled as a contaminant
    /// rather than a fuel) carry no entry and contribute zero.
    pub fn higher_heating_value(&self) -> Option<f64> {
        match self {
            Component::Methane => Some(39.82),
            Component::Ethane => Some(70.6),
            Component::Propane => Some(101.0),
            Component::IsoButane => Some(131.6),
            Component::NormalButane => Some(131.6),
            Component::IsoPentane => Some(161.0),
            Component::NormalPentane => Some(161.0),
            Component::HexanesPlus => Some(190.0),
            Component::Nitrogen
            | Component::CarbonDioxide
            | Component::HydrogenSulfide
            | Component::Oxygen => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbols_round_trip() {
        for component in Component::ALL {
            assert_eq!(Component::from_symbol(component.symbol()), Some(component));
        }
    }

    #[test]
    fn unknown_symbol_is_none() {
        assert_eq!(Component::from_symbol("He"), None);
        assert_eq!(Component::from_symbol(""), None);
    }

    #[test]
    fn serde_names_match_symbols() {
        for component in Component::ALL {
            let json = serde_json::to_string(&component).unwrap();
            assert_eq!(json, format!("\"{}\"", component.symbol()));
        }
    }
}
