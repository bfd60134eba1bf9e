//! Scale expansion.
//!
//! A recipe is declared once at multiplier 1. Each requested multiplier gets
//! its own [`Scale`] with ingredients and yields multiplied accordingly.
//! Ingredients restricted to a scale (`scale: 2`) appear unmultiplied in
//! that scale only.

use crate::constants::SERVING_UNITS;
use crate::fraction::{format_amount, scale_label};
use crate::models::{Ingredient, Scale, ScaleDisplay, WriteOnce, Yield, YieldRecord};
use crate::nutrition::Measure;
use crate::units::UnitTable;

/// Build one scale per multiplier, in the given order.
///
/// The caller puts the base multiplier first.
#[must_use]
pub fn expand_scales(
    multipliers: &[f64],
    base_ingredients: &[Ingredient],
    base_yields: &[Yield],
    units: &UnitTable,
) -> Vec<Scale> {
    multipliers
        .iter()
        .map(|&multiplier| {
            let yields = scale_yields(base_yields, multiplier, units);
            let servings = servings_in(&yields);
            let mut scale = Scale {
                multiplier,
                label: scale_label(multiplier),
                yields,
                servings,
                ingredients: ingredients_in_scale(base_ingredients, multiplier),
                cost: WriteOnce::pending(),
                nutrition: WriteOnce::pending(),
                display: ScaleDisplay::default(),
            };
            set_serving_sizes(&mut scale, units);
            scale
        })
        .collect()
}

/// Ingredients of the scale with `multiplier`.
///
/// Unrestricted ingredients are multiplied; an ingredient restricted to a
/// scale is copied as-is into the scale whose multiplier equals it exactly
/// and left out of every other scale.
#[must_use]
pub fn ingredients_in_scale(base: &[Ingredient], multiplier: f64) -> Vec<Ingredient> {
    base.iter()
        .filter_map(|ingredient| match ingredient.scale {
            None => Some(multiply_ingredient(ingredient, multiplier)),
            Some(only) if only == multiplier => Some(ingredient.clone()),
            Some(_) => None,
        })
        .collect()
}

/// Copy of `ingredient` with amounts and explicit values multiplied.
#[must_use]
pub fn multiply_ingredient(ingredient: &Ingredient, multiplier: f64) -> Ingredient {
    let mut scaled = ingredient.clone();
    scaled.number = ingredient.number * multiplier;
    scaled.display_number = ingredient.display_number * multiplier;
    scaled.explicit_cost = ingredient.explicit_cost.map(|cost| cost.scaled(multiplier));
    scaled.explicit_nutrition =
        ingredient.explicit_nutrition.map(|nutrition| nutrition.scaled(multiplier));
    scaled
}

/// Base yields built from their records.
#[must_use]
pub fn base_yields(records: &[YieldRecord]) -> Vec<Yield> {
    records
        .iter()
        .map(|record| Yield {
            number: record.number,
            unit: record.unit.clone(),
            show_yield: record.show_yield,
            show_serving_size: record.show_serving_size,
            yield_string: yield_string(record.number, &record.unit),
            serving_size_string: None,
        })
        .collect()
}

/// Yields multiplied by `multiplier`, units agreeing with the new number.
#[must_use]
pub fn scale_yields(base: &[Yield], multiplier: f64, units: &UnitTable) -> Vec<Yield> {
    base.iter()
        .map(|yielded| {
            let number = yielded.number * multiplier;
            let unit = units.numberize(&yielded.unit, number);
            Yield {
                number,
                yield_string: yield_string(number, &unit),
                unit,
                show_yield: yielded.show_yield,
                show_serving_size: yielded.show_serving_size,
                serving_size_string: None,
            }
        })
        .collect()
}

/// Servings declared by a yield in "serving(s)". The last such yield wins.
#[must_use]
pub fn servings_in(yields: &[Yield]) -> Option<f64> {
    yields
        .iter()
        .rev()
        .find(|yielded| SERVING_UNITS.contains(&yielded.unit.to_lowercase().as_str()))
        .map(|yielded| yielded.number)
}

fn set_serving_sizes(scale: &mut Scale, units: &UnitTable) {
    let Some(servings) = scale.servings else {
        return;
    };
    if servings == 0.0 {
        return;
    }
    for yielded in scale.yields.iter_mut().filter(|y| y.show_serving_size) {
        let number = yielded.number / servings;
        let unit = units.numberize(&yielded.unit, number);
        yielded.serving_size_string = Some(yield_string(number, &unit));
    }
}

fn yield_string(number: f64, unit: &str) -> String {
    format!("{} {unit}", format_amount(number))
}
