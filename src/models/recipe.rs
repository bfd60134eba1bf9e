//! Resolved recipe structures.
//!
//! A [`Recipe`] owns its base ingredients and yields plus one [`Scale`] per
//! multiplier. `scales[0]` is always the base scale (multiplier 1); child
//! recipe references are priced against it.
//!
//! Cost and nutrition live in [`WriteOnce`] cells that start unresolved and
//! are frozen by the propagation engine. Display fields (`display` on
//! ingredients and scales, `details` on recipes) are filled in afterwards by
//! [`present`](crate::presentation::present).

use serde::{Deserialize, Serialize};

use super::WriteOnce;
use crate::grocery::GrocerySnapshot;
use crate::nutrition::Nutrition;

/// Where an ingredient's cost and nutrition come from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum IngredientSource {
    /// A leaf priced from the grocery database.
    Grocery(GroceryMatch),
    /// Another recipe's yield.
    Recipe(RecipeReference),
}

/// Grocery resolution of a leaf ingredient.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroceryMatch {
    /// Matched grocery, if any.
    pub grocery: Option<GrocerySnapshot>,
    /// Purchasable grocery units in the ingredient's amount.
    pub grocery_count: f64,
}

/// Link from an ingredient to a child recipe.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecipeReference {
    /// Slug of the child recipe.
    pub slug: String,
    /// Page link, relative to the parent's page.
    pub recipe_url: String,
    /// Units of the child's base yield this ingredient represents.
    pub recipe_quantity: f64,
    /// Child's base-scale cost, copied once final.
    pub recipe_cost: Option<f64>,
    /// Child's base-scale nutrition, copied once final.
    pub recipe_nutrition: Option<Nutrition>,
}

impl RecipeReference {
    /// Reference to `slug` with nothing resolved yet.
    #[must_use]
    pub fn new(slug: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            ..Self::default()
        }
    }
}

/// One ingredient line, at a particular scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Quantity.
    pub number: f64,
    /// Unit of `number`; empty for counted items.
    pub unit: String,
    /// Item name.
    pub item: String,
    /// Free text such as "chopped".
    pub descriptor: String,
    /// Quantity shown on the page.
    pub display_number: f64,
    /// Unit shown on the page.
    pub display_unit: String,
    /// Item shown on the page.
    pub display_item: String,
    /// Named sub-list, e.g. "Sauce".
    pub list: Option<String>,
    /// Scale restriction: present only in the scale with this multiplier.
    pub scale: Option<f64>,
    /// Authoritative cost; skips computed resolution.
    pub explicit_cost: Option<f64>,
    /// Authoritative nutrition; skips computed resolution.
    pub explicit_nutrition: Option<Nutrition>,
    /// Grocery or child recipe.
    pub source: IngredientSource,
    /// Resolved cost.
    pub cost: WriteOnce<f64>,
    /// Resolved nutrition.
    pub nutrition: WriteOnce<Nutrition>,
    /// Whether the nutrition comes from real data rather than a zero default.
    pub has_nutrition: bool,
    /// Full line, e.g. "1½ cups flour".
    pub string: String,
    /// Amount only, e.g. "1½ cups".
    pub display_amount: String,
    /// Presentation values.
    pub display: IngredientDisplay,
}

impl Ingredient {
    /// True if the ingredient is a grocery leaf.
    #[must_use]
    pub const fn is_grocery(&self) -> bool {
        matches!(self.source, IngredientSource::Grocery(_))
    }

    /// True if the ingredient references another recipe.
    #[must_use]
    pub const fn is_recipe(&self) -> bool {
        matches!(self.source, IngredientSource::Recipe(_))
    }

    /// True if a grocery record matched this ingredient.
    #[must_use]
    pub const fn has_matching_grocery(&self) -> bool {
        matches!(
            &self.source,
            IngredientSource::Grocery(GroceryMatch {
                grocery: Some(_),
                ..
            })
        )
    }

    /// Grocery units in this ingredient; 0 for recipe ingredients.
    #[must_use]
    pub const fn grocery_count(&self) -> f64 {
        match &self.source {
            IngredientSource::Grocery(found) => found.grocery_count,
            IngredientSource::Recipe(_) => 0.0,
        }
    }

    /// Child recipe reference, if any.
    #[must_use]
    pub const fn recipe_reference(&self) -> Option<&RecipeReference> {
        match &self.source {
            IngredientSource::Recipe(reference) => Some(reference),
            IngredientSource::Grocery(_) => None,
        }
    }
}

/// Ingredient values derived after resolution.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IngredientDisplay {
    /// Cost divided by the scale's servings.
    pub cost_per_serving: f64,
    /// Formatted cost.
    pub cost_string: String,
    /// Formatted cost per serving.
    pub cost_per_serving_string: String,
    /// Nutrition per serving, rounded.
    pub nutrition_display: Nutrition,
}

/// One yield at a particular scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Yield {
    /// Amount produced.
    pub number: f64,
    /// Unit, singular or plural to agree with `number`.
    pub unit: String,
    /// Show on the page.
    pub show_yield: bool,
    /// Show the per-serving size.
    pub show_serving_size: bool,
    /// e.g. "2 loaves"
    pub yield_string: String,
    /// e.g. "¼ loaf"; set only when shown and the scale has servings.
    pub serving_size_string: Option<String>,
}

/// A recipe at one multiplier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scale {
    /// Multiplier relative to the base recipe.
    pub multiplier: f64,
    /// Label such as `"1x"` or `"1_2x"`.
    pub label: String,
    /// Scaled yields.
    pub yields: Vec<Yield>,
    /// Number of servings, if any yield is in servings.
    pub servings: Option<f64>,
    /// Scaled ingredients.
    pub ingredients: Vec<Ingredient>,
    /// Resolved total cost.
    pub cost: WriteOnce<f64>,
    /// Resolved total nutrition.
    pub nutrition: WriteOnce<Nutrition>,
    /// Presentation values.
    pub display: ScaleDisplay,
}

impl Scale {
    /// Servings to divide totals by: `servings`, or 1 when absent or zero.
    #[must_use]
    pub fn serving_divisor(&self) -> f64 {
        match self.servings {
            Some(servings) if servings != 0.0 => servings,
            _ => 1.0,
        }
    }

    /// True if servings are known and not exactly one.
    #[must_use]
    pub fn has_multiple_servings(&self) -> bool {
        self.servings.is_some_and(|servings| servings != 1.0)
    }
}

/// Scale values derived after resolution.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScaleDisplay {
    /// Cost divided by servings.
    pub cost_per_serving: f64,
    /// Formatted cost.
    pub cost_string: String,
    /// Formatted cost per serving.
    pub cost_per_serving_string: String,
    /// Show the cost.
    pub has_visible_cost: bool,
    /// Show the cost per serving.
    pub has_visible_cost_per_serving: bool,
    /// Nutrition per serving, rounded.
    pub nutrition_display: Nutrition,
    /// Show nutrition.
    pub has_visible_nutrition: bool,
    /// `nutrition_display` is per serving rather than a total.
    pub is_nutrition_per_serving: bool,
    /// Show per-ingredient cost breakdown.
    pub has_cost_detail: bool,
    /// Show per-ingredient cost-per-serving breakdown.
    pub has_cost_per_serving_detail: bool,
    /// Show per-ingredient nutrition breakdown.
    pub has_nutrition_detail: bool,
    /// Any of the above.
    pub has_any_detail: bool,
}

/// Link to a recipe page.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecipeLink {
    /// Recipe title.
    pub title: String,
    /// Recipe slug.
    pub slug: String,
}

/// Recipe-level detail flags: the OR over its scales.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeDetails {
    /// Some scale shows a cost breakdown.
    pub has_cost_detail: bool,
    /// Some scale shows a cost-per-serving breakdown.
    pub has_cost_per_serving_detail: bool,
    /// Some scale shows a nutrition breakdown.
    pub has_nutrition_detail: bool,
}

/// A recipe with all of its scales.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    /// Display title.
    pub title: String,
    /// Unique key within the site.
    pub url_slug: String,
    /// Base ingredients, unscaled.
    pub ingredients: Vec<Ingredient>,
    /// Base yields, unscaled.
    pub yields: Vec<Yield>,
    /// Scales; `scales[0]` is the base scale.
    pub scales: Vec<Scale>,
    /// Authoritative base cost.
    pub explicit_cost: Option<f64>,
    /// Authoritative base nutrition.
    pub explicit_nutrition: Option<Nutrition>,
    /// Hide cost on the page.
    pub hide_cost: bool,
    /// Hide nutrition on the page.
    pub hide_nutrition: bool,
    /// Recipes that use this one as an ingredient.
    pub used_in: Vec<RecipeLink>,
    /// Presentation flags.
    pub details: RecipeDetails,
}

impl Recipe {
    /// The base (multiplier 1) scale.
    #[must_use]
    pub fn base_scale(&self) -> Option<&Scale> {
        self.scales.first()
    }

    /// Link to this recipe.
    #[must_use]
    pub fn link(&self) -> RecipeLink {
        RecipeLink {
            title: self.title.clone(),
            slug: self.url_slug.clone(),
        }
    }

    /// True if the base scale declares servings.
    #[must_use]
    pub fn has_servings(&self) -> bool {
        self.base_scale().is_some_and(|scale| scale.servings.is_some())
    }

    /// True if this recipe is an ingredient of any other.
    #[must_use]
    pub fn is_used_in_any(&self) -> bool {
        !self.used_in.is_empty()
    }

    /// Slugs of child recipes referenced by any scale, without duplicates,
    /// in first-seen order.
    #[must_use]
    pub fn child_slugs(&self) -> Vec<&str> {
        let mut slugs: Vec<&str> = Vec::new();
        let references = self
            .scales
            .iter()
            .flat_map(|scale| &scale.ingredients)
            .filter_map(Ingredient::recipe_reference);
        for reference in references {
            if !slugs.contains(&reference.slug.as_str()) {
                slugs.push(&reference.slug);
            }
        }
        slugs
    }
}
