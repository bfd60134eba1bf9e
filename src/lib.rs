//! recipe-cost - static cost and nutrition resolution for a recipe site
//!
//! A recipe site is a collection of recipes, each available at several
//! scales (½x, 1x, 2x, ...). Ingredients are either groceries, priced from a
//! grocery database, or other recipes on the same site. This crate turns
//! parsed recipe records into a [`Site`](models::Site) where every scale and
//! ingredient carries a final cost and nutrition value, ready for a page
//! renderer.
//!
//! # Architecture Overview
//!
//! A build runs in four stages over one in-memory site:
//!
//! 1. **Assembly** ([`builder`]): expand each recipe into its scales, match
//!    grocery ingredients against the database, link recipe ingredients to
//!    their child recipes and work out how many of the child's yields each
//!    one uses.
//! 2. **Propagation** ([`resolver`]): compute costs and nutrition as a fixed
//!    point. Each round resolves whatever has become resolvable; a round that
//!    makes no progress means the recipes reference each other in a cycle.
//! 3. **Presentation** ([`presentation`]): derive per-serving values, display
//!    strings and visibility flags.
//! 4. **Audit** ([`summary`]): list ingredients that matched no grocery and
//!    groceries no recipe uses.
//!
//! # Core Modules
//!
//! ## Pipeline
//! - [`builder`] - scale expansion, grocery resolution, recipe quantities
//! - [`resolver`] - the propagation engine and recipe dependency graph
//! - [`presentation`] - values shown on recipe pages
//! - [`summary`] - site-wide grocery audit
//!
//! ## Data
//! - [`models`] - input records and resolved recipes, scales and ingredients
//! - [`grocery`] - grocery records and lookup
//! - [`nutrition`] - macronutrient values
//! - [`units`] - the unit table used to compare quantities
//! - [`fraction`] - fraction approximation for displayed amounts
//!
//! ## Supporting Modules
//! - [`config`] - site configuration (TOML)
//! - [`core`] - error types and user-facing error formatting
//! - [`constants`] - shared constants
//!
//! # Example
//!
//! ```rust,no_run
//! use recipe_cost::builder::SiteBuilder;
//! use recipe_cost::config::SiteConfig;
//! use recipe_cost::grocery::GroceryDatabase;
//! use recipe_cost::models::RecipeRecord;
//! use recipe_cost::{presentation, resolver, summary};
//!
//! # fn example(records: Vec<RecipeRecord>, groceries: GroceryDatabase) -> anyhow::Result<()> {
//! let config = SiteConfig::load(std::path::Path::new("site.toml"))?;
//! let units = config.unit_table();
//!
//! let mut site = SiteBuilder::new(&units, &groceries, &config).build(records)?;
//! resolver::resolve(&mut site)?;
//! presentation::present(&mut site, &config)?;
//!
//! let audit = summary::summarize(&site, &groceries);
//! for row in audit.missing_groceries() {
//!     eprintln!("no grocery for {} in {}", row.ingredient, row.recipe);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Errors
//!
//! Every fatal condition aborts the whole build: an unknown or duplicate
//! recipe slug, a malformed record, or recipes that use each other as
//! ingredients. Missing data is never fatal; an ingredient with no grocery
//! record, an unknown unit or an incompatible yield simply contributes zero.

pub mod builder;
pub mod config;
pub mod constants;
pub mod core;
pub mod fraction;
pub mod grocery;
pub mod models;
pub mod nutrition;
pub mod presentation;
pub mod resolver;
pub mod summary;
pub mod units;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use crate::core::{RecipeCostError, Result};
