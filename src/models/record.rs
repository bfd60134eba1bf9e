//! Input records as they come out of recipe files.
//!
//! These are the already-parsed shapes handed to [`SiteBuilder`]. Every
//! field is optional in the source document; missing fields take the
//! defaults a recipe author would expect.
//!
//! ```yaml
//! title: Pizza
//! yield:
//!   - number: 2
//!     unit: pizzas
//!   - number: 8
//! scales: [2]
//! ingredients:
//!   - number: 1
//!     item: pizza dough
//!     recipe: pizza-dough
//!   - number: 0.5
//!     unit: cup
//!     item: tomato sauce
//!   - item: extra cheese
//!     scale: 2
//! ```
//!
//! [`SiteBuilder`]: crate::builder::SiteBuilder

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_YIELD_UNIT;
use crate::nutrition::Nutrition;

/// One recipe before scale expansion.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecipeRecord {
    /// Display title. Required.
    pub title: String,

    /// Unique key. Derived from the title when absent.
    pub url_slug: Option<String>,

    /// Base yields at multiplier 1.
    #[serde(rename = "yield", alias = "yields")]
    pub yields: YieldList,

    /// Base ingredients at multiplier 1.
    pub ingredients: Vec<IngredientRecord>,

    /// Extra multipliers. The base multiplier 1 is implicit.
    #[serde(alias = "scale")]
    pub scales: Vec<ScaleRecord>,

    /// Authoritative cost of the base recipe.
    pub cost: Option<f64>,

    /// Authoritative nutrition of the base recipe.
    pub nutrition: Option<Nutrition>,

    /// Hide cost on the page. Falls back to the site default.
    pub hide_cost: Option<bool>,

    /// Hide nutrition on the page. Falls back to the site default.
    pub hide_nutrition: Option<bool>,
}

/// Yields written either as a bare number of servings or as a list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum YieldList {
    /// `yield: 4` means four servings.
    Servings(f64),
    /// Full yield entries.
    List(Vec<YieldRecord>),
}

impl Default for YieldList {
    fn default() -> Self {
        Self::List(Vec::new())
    }
}

impl YieldList {
    /// Yield entries in declaration order.
    #[must_use]
    pub fn records(&self) -> Vec<YieldRecord> {
        match self {
            Self::Servings(number) => vec![YieldRecord {
                number: *number,
                ..YieldRecord::default()
            }],
            Self::List(records) => records.clone(),
        }
    }
}

/// One declared yield.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct YieldRecord {
    /// Amount produced at multiplier 1.
    pub number: f64,
    /// Unit of `number`.
    pub unit: String,
    /// Show this yield on the page.
    pub show_yield: bool,
    /// Show the per-serving size of this yield.
    pub show_serving_size: bool,
}

impl Default for YieldRecord {
    fn default() -> Self {
        Self {
            number: 0.0,
            unit: DEFAULT_YIELD_UNIT.to_string(),
            show_yield: true,
            show_serving_size: false,
        }
    }
}

/// A scale entry: either a bare multiplier or `{ multiplier: 2 }`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScaleRecord {
    /// `2`
    Multiplier(f64),
    /// `{ multiplier: 2 }`
    Detailed {
        /// Scale multiplier.
        multiplier: f64,
    },
}

impl ScaleRecord {
    /// The multiplier either form declares.
    #[must_use]
    pub const fn multiplier(&self) -> f64 {
        match self {
            Self::Multiplier(multiplier)
            | Self::Detailed {
                multiplier,
            } => *multiplier,
        }
    }
}

impl From<f64> for ScaleRecord {
    fn from(multiplier: f64) -> Self {
        Self::Multiplier(multiplier)
    }
}

/// One ingredient line, already split into amount, unit and item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IngredientRecord {
    /// Quantity at multiplier 1.
    pub number: f64,
    /// Unit of `number`; empty for counted items.
    pub unit: String,
    /// Item name, matched against the grocery database.
    pub item: String,
    /// Free text such as "chopped".
    pub descriptor: String,
    /// Quantity shown instead of `number`.
    pub display_number: f64,
    /// Unit shown instead of `unit`.
    pub display_unit: String,
    /// Item shown instead of `item`.
    pub display_item: String,
    /// Named sub-list the ingredient belongs to, e.g. "Sauce".
    pub list: Option<String>,
    /// Only include this ingredient, unscaled, in the scale with exactly
    /// this multiplier.
    pub scale: Option<f64>,
    /// Authoritative cost at multiplier 1.
    pub cost: Option<f64>,
    /// Authoritative nutrition at multiplier 1.
    pub nutrition: Option<Nutrition>,
    /// Slug of a recipe this ingredient is made from.
    pub recipe: Option<String>,
}
