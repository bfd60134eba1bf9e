//! Site-wide audit summary.
//!
//! Lists every scaled ingredient with whether it matched a grocery, and
//! every grocery with the recipe scales that use it, so missing or unused
//! grocery records are easy to spot.

use serde::Serialize;
use std::collections::HashMap;

use crate::constants::SUMMARY_GROCERY_PRECISION;
use crate::core::{RecipeCostError, Result};
use crate::grocery::GroceryLookup;
use crate::models::{IngredientSource, Site};

/// Summary of one build.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SiteSummary {
    /// Every recipe.
    pub recipes: Vec<RecipeSummary>,
    /// Every scaled ingredient.
    pub ingredients: Vec<IngredientSummary>,
    /// Every grocery record.
    pub groceries: Vec<GrocerySummary>,
}

/// One recipe row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecipeSummary {
    /// Recipe title.
    pub title: String,
    /// Recipe slug.
    pub slug: String,
}

/// One scaled ingredient row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IngredientSummary {
    /// Recipe title.
    pub recipe: String,
    /// Scale label.
    pub scale: String,
    /// Ingredient line.
    pub ingredient: String,
    /// Whether a grocery record matched.
    pub found_grocery: bool,
    /// Grocery units, rounded to five decimals.
    pub number_groceries: f64,
}

/// One grocery row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GrocerySummary {
    /// Grocery id.
    pub grocery_id: u32,
    /// Grocery name.
    pub name: String,
    /// `"Title (label)"` for every scale using the grocery.
    pub recipe_scales: Vec<String>,
}

impl SiteSummary {
    /// Ingredient rows with no matching grocery.
    pub fn missing_groceries(&self) -> impl Iterator<Item = &IngredientSummary> {
        self.ingredients.iter().filter(|row| !row.found_grocery)
    }

    /// Grocery rows no recipe uses.
    pub fn unused_groceries(&self) -> impl Iterator<Item = &GrocerySummary> {
        self.groceries.iter().filter(|row| row.recipe_scales.is_empty())
    }

    /// Pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`RecipeCostError::Other`] if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| RecipeCostError::Other {
            message: format!("Failed to serialize site summary: {e}"),
        })
    }
}

/// Build the summary of a site against its grocery database.
#[must_use]
pub fn summarize(site: &Site, groceries: &dyn GroceryLookup) -> SiteSummary {
    let recipes = site
        .recipes()
        .iter()
        .map(|recipe| RecipeSummary {
            title: recipe.title.clone(),
            slug: recipe.url_slug.clone(),
        })
        .collect();

    let ingredients = site
        .ingredients()
        .map(|(recipe, scale, ingredient)| IngredientSummary {
            recipe: recipe.title.clone(),
            scale: scale.label.clone(),
            ingredient: ingredient.string.clone(),
            found_grocery: ingredient.has_matching_grocery(),
            number_groceries: round_to(ingredient.grocery_count(), SUMMARY_GROCERY_PRECISION),
        })
        .collect();

    let mut rows: Vec<GrocerySummary> = groceries
        .all()
        .iter()
        .map(|record| GrocerySummary {
            grocery_id: record.grocery_id,
            name: record.name.clone(),
            recipe_scales: Vec::new(),
        })
        .collect();
    let by_id: HashMap<u32, usize> =
        rows.iter().enumerate().map(|(position, row)| (row.grocery_id, position)).collect();

    for (recipe, scale, ingredient) in site.ingredients() {
        let IngredientSource::Grocery(found) = &ingredient.source else {
            continue;
        };
        let Some(grocery) = &found.grocery else {
            continue;
        };
        if let Some(&position) = by_id.get(&grocery.grocery_id) {
            rows[position].recipe_scales.push(format!("{} ({})", recipe.title, scale.label));
        }
    }

    SiteSummary {
        recipes,
        ingredients,
        groceries: rows,
    }
}

fn round_to(value: f64, digits: i32) -> f64 {
    let factor = 10_f64.powi(digits);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grocery::{GroceryDatabase, GroceryRecord};
    use crate::models::GroceryMatch;
    use crate::test_utils::fixtures::{grocery_ingredient, recipe, scale};

    #[test]
    fn test_summary_rows() {
        let db = GroceryDatabase::new([
            GroceryRecord {
                name: "flour".to_string(),
                ..GroceryRecord::default()
            },
            GroceryRecord {
                name: "saffron".to_string(),
                ..GroceryRecord::default()
            },
        ]);

        let mut bread = recipe("Bread", "bread");
        bread.scales.push(scale(2.0));
        for s in &mut bread.scales {
            let mut flour = grocery_ingredient(1.0 / 3.0, 1.0);
            if let IngredientSource::Grocery(found) = &mut flour.source {
                if let Some(grocery) = found.grocery.as_mut() {
                    grocery.grocery_id = 1;
                }
            }
            flour.string = "flour".to_string();
            let mut salt = grocery_ingredient(0.0, 0.0);
            salt.source = IngredientSource::Grocery(GroceryMatch::default());
            salt.string = "salt".to_string();
            s.ingredients = vec![flour, salt];
        }
        let site = Site::new(vec![bread]).unwrap();

        let summary = summarize(&site, &db);
        assert_eq!(summary.recipes.len(), 1);
        assert_eq!(summary.ingredients.len(), 4);
        assert_eq!(summary.ingredients[0].number_groceries, 0.33333);
        assert_eq!(summary.ingredients[2].scale, "2x");
        assert_eq!(summary.missing_groceries().count(), 2);

        assert_eq!(summary.groceries[0].recipe_scales, vec!["Bread (1x)", "Bread (2x)"]);
        let unused: Vec<&str> = summary.unused_groceries().map(|g| g.name.as_str()).collect();
        assert_eq!(unused, vec!["saffron"]);
    }

    #[test]
    fn test_summary_json() {
        let site = Site::new(vec![recipe("Tea", "tea")]).unwrap();
        let json = summarize(&site, &GroceryDatabase::default()).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["recipes"][0]["slug"], "tea");
        assert!(value["groceries"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(0.123_456_7, 5), 0.12346);
        assert_eq!(round_to(2.0, 5), 2.0);
    }
}
