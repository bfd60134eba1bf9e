//! Recipe-quantity resolution.
//!
//! A recipe ingredient asks for an amount of another recipe ("3 cups of
//! stock"). This converts that amount into units of the child recipe's base
//! yield so the engine can price it as `recipe_quantity × child base cost`.

use std::collections::HashMap;

use crate::models::{IngredientSource, Site, Yield};
use crate::units::UnitTable;

/// How many base yields of a child recipe `amount` of `unit` represents.
///
/// Yields are tried in order and the first compatible one wins:
///
/// 1. Both units are volumes, or both are weights: convert through the
///    standard unit.
/// 2. The units are equivalent names: divide directly.
///
/// Yields with a zero number are skipped. Returns 0 if no yield fits.
///
/// ```rust
/// use recipe_cost::builder::recipe_quantity;
/// use recipe_cost::models::Yield;
/// use recipe_cost::units::UnitTable;
///
/// let quart = Yield {
///     number: 1.0,
///     unit: "quart".to_string(),
///     show_yield: true,
///     show_serving_size: false,
///     yield_string: "1 quart".to_string(),
///     serving_size_string: None,
/// };
/// let quantity = recipe_quantity(12.0, "cups", &[quart], &UnitTable::builtin());
/// assert!((quantity - 3.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn recipe_quantity(amount: f64, unit: &str, yields: &[Yield], units: &UnitTable) -> f64 {
    for yielded in yields.iter().filter(|y| y.number != 0.0) {
        let yield_unit = yielded.unit.as_str();
        let same_family = (units.is_volume(unit) && units.is_volume(yield_unit))
            || (units.is_weight(unit) && units.is_weight(yield_unit));

        if same_family {
            return amount * units.to_standard(unit) / units.to_standard(yield_unit) / yielded.number;
        }
        if units.is_equivalent(unit, yield_unit) {
            return amount / yielded.number;
        }
    }
    0.0
}

/// Set `recipe_quantity` on every recipe ingredient of every scale.
///
/// Runs after the whole site is assembled and child references have been
/// checked; an unknown slug here is left at 0.
pub fn resolve_recipe_quantities(site: &mut Site, units: &UnitTable) {
    let base_yields: HashMap<String, Vec<Yield>> = site
        .recipes()
        .iter()
        .map(|recipe| (recipe.url_slug.clone(), recipe.yields.clone()))
        .collect();

    for recipe in site.recipes_mut() {
        let parent = recipe.url_slug.clone();
        for scale in &mut recipe.scales {
            for ingredient in &mut scale.ingredients {
                let (number, unit) = (ingredient.number, ingredient.unit.clone());
                let IngredientSource::Recipe(reference) = &mut ingredient.source else {
                    continue;
                };
                let yields = base_yields.get(&reference.slug).map_or(&[][..], Vec::as_slice);
                reference.recipe_quantity = recipe_quantity(number, &unit, yields, units);

                if reference.recipe_quantity == 0.0 && number != 0.0 {
                    tracing::warn!(
                        "'{}' uses {} {} of '{}', which matches none of its yields",
                        parent,
                        number,
                        unit,
                        reference.slug
                    );
                }
            }
        }
    }
}
