//! The two quantities the engine propagates.
//!
//! Cost and nutrition resolve with the same algorithm over different fields.
//! A [`Facet`] tells the engine where a quantity's explicit overrides,
//! grocery value and write-once cells live.

use crate::models::{GroceryMatch, Ingredient, Recipe, RecipeReference, Scale, WriteOnce};
use crate::nutrition::{Measure, Nutrition};

/// Field accessors for one propagated quantity.
pub trait Facet {
    /// Value type: `f64` for cost, [`Nutrition`] for nutrition.
    type Value: Measure;

    /// Name used in logs and errors.
    const NAME: &'static str;

    /// Recipe-level override at multiplier 1.
    fn recipe_override(recipe: &Recipe) -> Option<Self::Value>;

    /// Ingredient-level override, already scaled.
    fn ingredient_override(ingredient: &Ingredient) -> Option<Self::Value>;

    /// Value of a grocery leaf.
    fn grocery_value(found: &GroceryMatch) -> Self::Value;

    /// Scale cell.
    fn scale_cell(scale: &Scale) -> &WriteOnce<Self::Value>;

    /// Mutable scale cell.
    fn scale_cell_mut(scale: &mut Scale) -> &mut WriteOnce<Self::Value>;

    /// Ingredient cell.
    fn ingredient_cell(ingredient: &Ingredient) -> &WriteOnce<Self::Value>;

    /// Mutable ingredient cell.
    fn ingredient_cell_mut(ingredient: &mut Ingredient) -> &mut WriteOnce<Self::Value>;

    /// Keep the child's base value on the reference.
    fn record_child_value(reference: &mut RecipeReference, value: Self::Value);

    /// Called when an ingredient resolves; `has_data` is false for a grocery
    /// leaf with no matching record.
    fn on_ingredient_resolved(_ingredient: &mut Ingredient, _has_data: bool) {}
}

/// Cost in the site's currency.
#[derive(Debug, Clone, Copy, Default)]
pub struct CostFacet;

impl Facet for CostFacet {
    type Value = f64;

    const NAME: &'static str = "cost";

    fn recipe_override(recipe: &Recipe) -> Option<f64> {
        recipe.explicit_cost
    }

    fn ingredient_override(ingredient: &Ingredient) -> Option<f64> {
        ingredient.explicit_cost
    }

    fn grocery_value(found: &GroceryMatch) -> f64 {
        found.grocery.as_ref().map_or(0.0, |grocery| found.grocery_count * grocery.cost)
    }

    fn scale_cell(scale: &Scale) -> &WriteOnce<f64> {
        &scale.cost
    }

    fn scale_cell_mut(scale: &mut Scale) -> &mut WriteOnce<f64> {
        &mut scale.cost
    }

    fn ingredient_cell(ingredient: &Ingredient) -> &WriteOnce<f64> {
        &ingredient.cost
    }

    fn ingredient_cell_mut(ingredient: &mut Ingredient) -> &mut WriteOnce<f64> {
        &mut ingredient.cost
    }

    fn record_child_value(reference: &mut RecipeReference, value: f64) {
        reference.recipe_cost = Some(value);
    }
}

/// Macronutrients.
#[derive(Debug, Clone, Copy, Default)]
pub struct NutritionFacet;

impl Facet for NutritionFacet {
    type Value = Nutrition;

    const NAME: &'static str = "nutrition";

    fn recipe_override(recipe: &Recipe) -> Option<Nutrition> {
        recipe.explicit_nutrition
    }

    fn ingredient_override(ingredient: &Ingredient) -> Option<Nutrition> {
        ingredient.explicit_nutrition
    }

    fn grocery_value(found: &GroceryMatch) -> Nutrition {
        found
            .grocery
            .as_ref()
            .map_or_else(Nutrition::empty, |grocery| grocery.nutrition.scaled(found.grocery_count))
    }

    fn scale_cell(scale: &Scale) -> &WriteOnce<Nutrition> {
        &scale.nutrition
    }

    fn scale_cell_mut(scale: &mut Scale) -> &mut WriteOnce<Nutrition> {
        &mut scale.nutrition
    }

    fn ingredient_cell(ingredient: &Ingredient) -> &WriteOnce<Nutrition> {
        &ingredient.nutrition
    }

    fn ingredient_cell_mut(ingredient: &mut Ingredient) -> &mut WriteOnce<Nutrition> {
        &mut ingredient.nutrition
    }

    fn record_child_value(reference: &mut RecipeReference, value: Nutrition) {
        reference.recipe_nutrition = Some(value);
    }

    fn on_ingredient_resolved(ingredient: &mut Ingredient, has_data: bool) {
        ingredient.has_nutrition = has_data;
    }
}
