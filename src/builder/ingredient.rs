//! Ingredient classification and grocery resolution.
//!
//! Every ingredient is either a grocery leaf or a reference to another
//! recipe. Grocery leaves are matched against the grocery database and
//! converted to a count of purchasable grocery units; a miss, an unknown
//! unit or a unit family the grocery does not measure in all give a count of
//! zero rather than an error.

use crate::constants::CHILD_RECIPE_URL_PREFIX;
use crate::fraction::format_amount;
use crate::grocery::{GroceryLookup, GrocerySnapshot};
use crate::models::{
    GroceryMatch, Ingredient, IngredientDisplay, IngredientRecord, IngredientSource,
    RecipeReference, WriteOnce,
};
use crate::units::UnitTable;

/// Build an unscaled ingredient from its record.
///
/// The ingredient is a recipe reference if and only if the record names a
/// `recipe`.
#[must_use]
pub fn from_record(record: &IngredientRecord) -> Ingredient {
    let source = match &record.recipe {
        Some(slug) => IngredientSource::Recipe(RecipeReference {
            recipe_url: format!("{CHILD_RECIPE_URL_PREFIX}{slug}"),
            ..RecipeReference::new(slug.clone())
        }),
        None => IngredientSource::Grocery(GroceryMatch::default()),
    };

    Ingredient {
        number: record.number,
        unit: record.unit.clone(),
        item: record.item.clone(),
        descriptor: record.descriptor.clone(),
        display_number: record.display_number,
        display_unit: record.display_unit.clone(),
        display_item: record.display_item.clone(),
        list: record.list.clone(),
        scale: record.scale,
        explicit_cost: record.cost,
        explicit_nutrition: record.nutrition,
        source,
        cost: WriteOnce::pending(),
        nutrition: WriteOnce::pending(),
        has_nutrition: false,
        string: String::new(),
        display_amount: String::new(),
        display: IngredientDisplay::default(),
    }
}

/// Match a grocery ingredient against the database and count grocery units.
///
/// Recipe references are left untouched.
pub fn resolve_grocery(ingredient: &mut Ingredient, groceries: &dyn GroceryLookup, units: &UnitTable) {
    let number = ingredient.number;
    let unit = ingredient.unit.clone();
    let IngredientSource::Grocery(found) = &mut ingredient.source else {
        return;
    };

    match groceries.lookup(&ingredient.item) {
        Some(record) => {
            let snapshot = GrocerySnapshot::from(record);
            found.grocery_count = grocery_count(number, &unit, &snapshot, units);
            found.grocery = Some(snapshot);
        }
        None => {
            tracing::debug!("No grocery matches ingredient '{}'", ingredient.item);
            found.grocery = None;
            found.grocery_count = 0.0;
        }
    }
}

/// Purchasable grocery units in `number` of `unit`.
///
/// - Empty unit: counted against `discrete_amount`
/// - Volume unit: converted through milliliters against the grocery's volume
/// - Weight unit: converted through grams against the grocery's weight
/// - Anything else: must name the grocery's other unit (singular or plural)
///
/// Returns 0 whenever the grocery has no amount in the needed family.
///
/// ```rust
/// use recipe_cost::builder::grocery_count;
/// use recipe_cost::grocery::GrocerySnapshot;
/// use recipe_cost::units::UnitTable;
///
/// let milk = GrocerySnapshot {
///     volume_amount: 1.0,
///     volume_unit: "cup".to_string(),
///     ..GrocerySnapshot::default()
/// };
/// assert_eq!(grocery_count(2.0, "cups", &milk, &UnitTable::builtin()), 2.0);
/// ```
#[must_use]
pub fn grocery_count(number: f64, unit: &str, grocery: &GrocerySnapshot, units: &UnitTable) -> f64 {
    if unit.is_empty() {
        if grocery.discrete_amount == 0.0 {
            return 0.0;
        }
        return number / grocery.discrete_amount;
    }

    if units.is_volume(unit) {
        return standard_count(number, unit, grocery.volume_amount, &grocery.volume_unit, units, |u| {
            units.is_volume(u)
        });
    }

    if units.is_weight(unit) {
        return standard_count(number, unit, grocery.weight_amount, &grocery.weight_unit, units, |u| {
            units.is_weight(u)
        });
    }

    if grocery.other_amount == 0.0
        || grocery.other_unit.is_empty()
        || !units.is_equivalent(unit, &grocery.other_unit)
    {
        return 0.0;
    }
    number / grocery.other_amount
}

fn standard_count(
    number: f64,
    unit: &str,
    grocery_amount: f64,
    grocery_unit: &str,
    units: &UnitTable,
    same_family: impl Fn(&str) -> bool,
) -> f64 {
    if grocery_amount == 0.0 || grocery_unit.is_empty() || !same_family(grocery_unit) {
        return 0.0;
    }
    number * units.to_standard(unit) / grocery_amount / units.to_standard(grocery_unit)
}

/// Fill display overrides from the identity fields and render the
/// ingredient's strings.
pub fn apply_display_fallbacks(ingredient: &mut Ingredient) {
    if ingredient.display_number == 0.0 {
        ingredient.display_number = ingredient.number;
    }
    if ingredient.display_unit.is_empty() {
        ingredient.display_unit = ingredient.unit.clone();
    }
    if ingredient.display_item.is_empty() {
        ingredient.display_item = ingredient.item.clone();
    }
    ingredient.string = ingredient_string(ingredient);
    ingredient.display_amount = display_amount(ingredient);
}

/// Number, unit and item, e.g. "1½ cups flour". Empty parts are skipped.
#[must_use]
pub fn ingredient_string(ingredient: &Ingredient) -> String {
    let mut parts = amount_parts(ingredient);
    if !ingredient.display_item.is_empty() {
        parts.push(ingredient.display_item.clone());
    }
    parts.join(" ")
}

/// Number and unit only, e.g. "1½ cups".
#[must_use]
pub fn display_amount(ingredient: &Ingredient) -> String {
    amount_parts(ingredient).join(" ")
}

fn amount_parts(ingredient: &Ingredient) -> Vec<String> {
    let mut parts = Vec::with_capacity(3);
    if ingredient.display_number != 0.0 {
        parts.push(format_amount(ingredient.display_number));
    }
    if !ingredient.display_unit.is_empty() {
        parts.push(ingredient.display_unit.clone());
    }
    parts
}
