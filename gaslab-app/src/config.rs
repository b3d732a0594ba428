use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Explicit configuration for the reporting shell. Every knob the renderers
/// need is passed in through this structure; the engine itself never reads
/// ambient state.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Title printed at the top of every report.
    pub title: String,
    /// Branding asset for document renderers that support one. The
    /// plain-text renderer ignores it.
    pub logo_path: Option<String>,
    /// Default price for the estimated revenue entry, USD per MJ.
    pub price_usd_per_mj: f64,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            title: "Gas Plant Laboratory Analysis Report".to_string(),
            logo_path: None,
            price_usd_per_mj: 2.25,
        }
    }
}

impl ReportConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;
        serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config from {:?}", path))
    }
}
