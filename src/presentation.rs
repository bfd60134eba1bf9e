//! Display values derived once costs and nutrition are final.
//!
//! Nothing here feeds back into resolution. Per-serving figures divide by
//! the owning scale's servings (1 when a scale has none, or declares zero);
//! visibility flags decide what a page shows.

use crate::config::SiteConfig;
use crate::core::{RecipeCostError, Result};
use crate::models::{Recipe, RecipeDetails, Scale, Site};
use crate::nutrition::Measure;

/// Fill `display` on every scale and ingredient and `details` on every
/// recipe.
///
/// # Errors
///
/// Returns [`RecipeCostError::Other`] if any cost or nutrition is still
/// unresolved.
pub fn present(site: &mut Site, config: &SiteConfig) -> Result<()> {
    if !site.is_resolved() {
        return Err(RecipeCostError::Other {
            message: "Cannot present an unresolved site; resolve costs and nutrition first"
                .to_string(),
        });
    }

    for recipe in site.recipes_mut() {
        present_recipe(recipe, config);
    }

    tracing::debug!("Presented {} recipes", site.len());
    Ok(())
}

fn present_recipe(recipe: &mut Recipe, config: &SiteConfig) {
    let mut details = RecipeDetails::default();
    let explicit_cost = recipe.explicit_cost.is_some();
    let explicit_nutrition = recipe.explicit_nutrition.is_some();

    for scale in &mut recipe.scales {
        present_ingredients(scale, config);
        present_scale(scale, recipe.hide_cost, recipe.hide_nutrition, explicit_nutrition, config);
        set_scale_details(scale, recipe.hide_cost, explicit_cost, explicit_nutrition);

        details.has_cost_detail |= scale.display.has_cost_detail;
        details.has_cost_per_serving_detail |= scale.display.has_cost_per_serving_detail;
        details.has_nutrition_detail |= scale.display.has_nutrition_detail;
    }

    recipe.details = details;
}

fn present_ingredients(scale: &mut Scale, config: &SiteConfig) {
    let servings = scale.serving_divisor();
    for ingredient in &mut scale.ingredients {
        let cost = ingredient.cost.value();
        let display = &mut ingredient.display;
        display.cost_per_serving = cost / servings;
        display.cost_string = config.currency.format(cost);
        display.cost_per_serving_string = config.currency.format(display.cost_per_serving);
        display.nutrition_display = ingredient.nutrition.value().scaled(1.0 / servings).rounded();
    }
}

fn present_scale(
    scale: &mut Scale,
    hide_cost: bool,
    hide_nutrition: bool,
    explicit_nutrition: bool,
    config: &SiteConfig,
) {
    let servings = scale.serving_divisor();
    let multiple_servings = scale.has_multiple_servings();
    let cost = scale.cost.value();
    let nutrition = scale.nutrition.value();
    let display = &mut scale.display;

    display.cost_per_serving = cost / servings;
    display.cost_string = config.currency.format(cost);
    display.cost_per_serving_string = config.currency.format(display.cost_per_serving);
    display.has_visible_cost = !hide_cost && cost > 0.0;
    display.has_visible_cost_per_serving = display.has_visible_cost && multiple_servings;

    display.nutrition_display = nutrition.scaled(1.0 / servings).rounded();
    display.has_visible_nutrition = if hide_nutrition {
        false
    } else {
        explicit_nutrition || nutrition.has_nutrients()
    };
    display.is_nutrition_per_serving = servings != 1.0;
}

fn set_scale_details(scale: &mut Scale, hide_cost: bool, explicit_cost: bool, explicit_nutrition: bool) {
    let any_ingredient_cost = scale.ingredients.iter().any(|i| i.cost.value() != 0.0);
    let multiple_servings = scale.has_multiple_servings();
    let display = &mut scale.display;

    display.has_cost_detail = any_ingredient_cost && !hide_cost && !explicit_cost;
    display.has_cost_per_serving_detail = display.has_cost_detail && multiple_servings;
    display.has_nutrition_detail = display.has_visible_nutrition && !explicit_nutrition;
    display.has_any_detail = display.has_cost_detail
        || display.has_cost_per_serving_detail
        || display.has_nutrition_detail;
}
