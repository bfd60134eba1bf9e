//! Hand-built recipes, scales and ingredients.
//!
//! Everything starts unresolved with no display values, as the builder would
//! leave it; tests then set only the fields they care about.

use crate::fraction::scale_label;
use crate::grocery::GrocerySnapshot;
use crate::models::{
    GroceryMatch, Ingredient, IngredientDisplay, IngredientSource, Recipe, RecipeDetails,
    RecipeReference, Scale, ScaleDisplay, WriteOnce,
};
use crate::nutrition::Nutrition;

/// Calories in one purchasable unit of the grocery [`grocery_ingredient`]
/// matches.
pub const GROCERY_CALORIES: f64 = 100.0;

/// A recipe with one empty base scale and nothing resolved.
pub fn recipe(title: &str, slug: &str) -> Recipe {
    Recipe {
        title: title.to_string(),
        url_slug: slug.to_string(),
        ingredients: Vec::new(),
        yields: Vec::new(),
        scales: vec![scale(1.0)],
        explicit_cost: None,
        explicit_nutrition: None,
        hide_cost: false,
        hide_nutrition: false,
        used_in: Vec::new(),
        details: RecipeDetails::default(),
    }
}

/// An empty scale with no servings.
pub fn scale(multiplier: f64) -> Scale {
    Scale {
        multiplier,
        label: scale_label(multiplier),
        yields: Vec::new(),
        servings: None,
        ingredients: Vec::new(),
        cost: WriteOnce::pending(),
        nutrition: WriteOnce::pending(),
        display: ScaleDisplay::default(),
    }
}

/// A grocery leaf that matched a record costing `grocery_cost` per unit,
/// needing `grocery_count` units.
///
/// One unit of the grocery carries [`GROCERY_CALORIES`].
pub fn grocery_ingredient(grocery_count: f64, grocery_cost: f64) -> Ingredient {
    let grocery = GrocerySnapshot {
        name: "pantry item".to_string(),
        cost: grocery_cost,
        discrete_amount: 1.0,
        nutrition: Nutrition::new(GROCERY_CALORIES, 0.0, 0.0, 0.0),
        ..GrocerySnapshot::default()
    };
    ingredient(IngredientSource::Grocery(GroceryMatch {
        grocery: Some(grocery),
        grocery_count,
    }))
}

/// An ingredient using `recipe_quantity` base yields of recipe `slug`.
pub fn recipe_ingredient(slug: &str, recipe_quantity: f64) -> Ingredient {
    let mut reference = RecipeReference::new(slug);
    reference.recipe_url = format!("../{slug}");
    reference.recipe_quantity = recipe_quantity;
    let mut ingredient = ingredient(IngredientSource::Recipe(reference));
    ingredient.item = slug.to_string();
    ingredient
}

fn ingredient(source: IngredientSource) -> Ingredient {
    Ingredient {
        number: 1.0,
        unit: String::new(),
        item: "pantry item".to_string(),
        descriptor: String::new(),
        display_number: 1.0,
        display_unit: String::new(),
        display_item: "pantry item".to_string(),
        list: None,
        scale: None,
        explicit_cost: None,
        explicit_nutrition: None,
        source,
        cost: WriteOnce::pending(),
        nutrition: WriteOnce::pending(),
        has_nutrition: false,
        string: String::new(),
        display_amount: String::new(),
        display: IngredientDisplay::default(),
    }
}
