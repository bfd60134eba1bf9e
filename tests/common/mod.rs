//! Common test utilities and fixtures for recipe-cost integration tests
//!
//! Recipes are written as YAML the way a recipe author would write them and
//! built through the public [`SiteBuilder`] so every test exercises the full
//! pipeline.

// Not every helper is used by every test module
#![allow(dead_code)]

use anyhow::{Context, Result};
use recipe_cost::builder::SiteBuilder;
use recipe_cost::config::SiteConfig;
use recipe_cost::grocery::{GroceryDatabase, GroceryRecord};
use recipe_cost::models::{RecipeRecord, Site};

/// Float comparison tolerance.
pub const EPSILON: f64 = 1e-9;

/// True if `a` and `b` agree to within [`EPSILON`].
pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Parse one recipe record from YAML.
pub fn record(yaml: &str) -> Result<RecipeRecord> {
    serde_yaml::from_str(yaml).context("Failed to parse recipe fixture")
}

/// Parse a grocery database from a YAML list of records.
pub fn groceries(yaml: &str) -> Result<GroceryDatabase> {
    let records: Vec<GroceryRecord> =
        serde_yaml::from_str(yaml).context("Failed to parse grocery fixture")?;
    Ok(GroceryDatabase::new(records))
}

/// A small pantry used by most tests.
///
/// | id | name   | cost | per unit          | calories |
/// |----|--------|------|-------------------|----------|
/// | 1  | flour  | 4.00 | 10 cups / 1250 g  | 4550     |
/// | 2  | milk   | 3.00 | 1 gallon          | 2400     |
/// | 3  | egg    | 6.00 | 12 eggs           | 840      |
/// | 4  | garlic | 0.50 | 10 cloves         | 40       |
/// | 5  | butter | 5.00 | 4 sticks          | 3200     |
pub fn pantry() -> GroceryDatabase {
    groceries(PANTRY_YAML).expect("pantry fixture is valid")
}

const PANTRY_YAML: &str = r"
- name: flour
  category: baking
  cost: 4.0
  volume_amount: 10
  volume_unit: cups
  weight_amount: 1250
  weight_unit: g
  calories: 4550
  carbohydrates: 950
  protein: 130
  fat: 12
- name: milk
  category: dairy
  cost: 3.0
  volume_amount: 1
  volume_unit: gallon
  calories: 2400
  fat: 128
  carbohydrates: 192
  protein: 128
- name: egg
  category: dairy
  cost: 6.0
  discrete_amount: 12
  calories: 840
  fat: 60
  protein: 72
- name: garlic
  category: produce
  cost: 0.5
  other_amount: 10
  other_unit: clove
  calories: 40
- name: butter
  category: dairy
  cost: 5.0
  other_amount: 4
  other_unit: sticks
  calories: 3200
  fat: 368
";

/// Everything one build needs.
pub struct TestSite {
    pub config: SiteConfig,
    pub groceries: GroceryDatabase,
}

impl TestSite {
    /// Default configuration over the [`pantry`].
    pub fn new() -> Self {
        Self {
            config: SiteConfig::default(),
            groceries: pantry(),
        }
    }

    /// Same pantry, different configuration.
    pub fn with_config(config: SiteConfig) -> Self {
        Self {
            config,
            groceries: pantry(),
        }
    }

    /// Assemble a site from YAML recipe documents.
    pub fn build(&self, recipes: &[&str]) -> Result<Site> {
        let records = recipes.iter().map(|yaml| record(yaml)).collect::<Result<Vec<_>>>()?;
        let units = self.config.unit_table();
        let site = SiteBuilder::new(&units, &self.groceries, &self.config).build(records)?;
        Ok(site)
    }
}
