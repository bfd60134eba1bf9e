//! Generic configuration parsing utilities.
//!
//! Reads a TOML file into any type implementing
//! [`serde::de::DeserializeOwned`], adding the file path to error messages.
//!
//! Example error output:
//! ```text
//! Failed to parse config file: /path/to/site.toml
//! Caused by:
//!     invalid type: string "yes", expected a boolean
//! ```

use anyhow::{Context, Result};
use std::path::Path;

/// Parse a TOML configuration file into the specified type.
///
/// # Errors
///
/// Returns an error if the file cannot be read or its contents do not
/// deserialize into `T`. Both carry the file path as context.
///
/// # Examples
///
/// ```rust,no_run
/// use recipe_cost::config::{SiteConfig, parse_config};
/// use std::path::Path;
///
/// # fn example() -> anyhow::Result<()> {
/// let config: SiteConfig = parse_config(Path::new("site.toml"))?;
/// println!("hide cost by default: {}", config.defaults.hide_cost);
/// # Ok(())
/// # }
/// ```
pub fn parse_config<T>(path: &Path) -> Result<T>
where
    T: serde::de::DeserializeOwned,
{
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: T = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

    Ok(config)
}
