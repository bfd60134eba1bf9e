//! Site-wide configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::constants::{DEFAULT_CURRENCY_DECIMALS, DEFAULT_CURRENCY_SYMBOL};
use crate::units::{UnitDefinition, UnitTable};

/// Site configuration loaded from TOML.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Defaults applied to recipes that leave a flag unset.
    pub defaults: RecipeDefaults,

    /// How cost strings are rendered.
    pub currency: CurrencyConfig,

    /// Extra units appended to the built-in unit table.
    pub units: Vec<UnitDefinition>,
}

/// Recipe flag defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecipeDefaults {
    /// Hide cost for recipes without an explicit `hide_cost`.
    pub hide_cost: bool,
    /// Hide nutrition for recipes without an explicit `hide_nutrition`.
    pub hide_nutrition: bool,
}

/// Currency formatting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrencyConfig {
    /// Symbol prefixed to every cost string.
    pub symbol: String,
    /// Digits after the decimal point.
    pub decimals: usize,
}

impl Default for CurrencyConfig {
    fn default() -> Self {
        Self {
            symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            decimals: DEFAULT_CURRENCY_DECIMALS,
        }
    }
}

impl CurrencyConfig {
    /// Format an amount, e.g. `1.5` as `"$1.50"`.
    #[must_use]
    pub fn format(&self, amount: f64) -> String {
        format!("{}{:.*}", self.symbol, self.decimals, amount)
    }
}

impl SiteConfig {
    /// Parse a configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not valid TOML or a field has the
    /// wrong type.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).context("Failed to parse site configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let config: Self = super::parse_config(path)?;
        config
            .validate()
            .with_context(|| format!("Invalid site configuration: {}", path.display()))?;
        tracing::debug!(
            "Loaded site configuration from {} ({} extra units)",
            path.display(),
            config.units.len()
        );
        Ok(config)
    }

    /// Build the unit table: built-in units followed by configured ones.
    #[must_use]
    pub fn unit_table(&self) -> UnitTable {
        let mut table = UnitTable::builtin();
        table.extend(self.units.iter().cloned());
        table
    }

    fn validate(&self) -> Result<()> {
        for unit in &self.units {
            if unit.unit.trim().is_empty() {
                anyhow::bail!(crate::core::RecipeCostError::ConfigError {
                    message: "unit entries must have a non-empty 'unit'".to_string(),
                });
            }
            if !unit.to_standard.is_finite() || unit.to_standard < 0.0 {
                anyhow::bail!(crate::core::RecipeCostError::ConfigError {
                    message: format!("unit '{}' has an invalid to_standard factor", unit.unit),
                });
            }
        }
        Ok(())
    }
}
