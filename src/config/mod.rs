//! Configuration management for the recipe site
//!
//! A site is configured by a single optional TOML file. Every field has a
//! default, so an empty file (or no file at all) is a valid configuration.
//!
//! ```toml
//! [defaults]
//! hide_cost = false
//! hide_nutrition = false
//!
//! [currency]
//! symbol = "$"
//! decimals = 2
//!
//! # Extra units appended to the built-in unit table
//! [[units]]
//! unit = "stick"
//! plural = "sticks"
//! kind = "other"
//! ```
//!
//! # Modules
//!
//! - `site` - the [`SiteConfig`] structure and its loaders
//! - `parser` - generic TOML parsing with file path context

mod parser;
mod site;

pub use parser::parse_config;
pub use site::{CurrencyConfig, RecipeDefaults, SiteConfig};
