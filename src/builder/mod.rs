//! Site assembly: from parsed recipe records to an unresolved [`Site`].
//!
//! # Pipeline
//!
//! Per recipe:
//! 1. Validate the record and derive its slug
//! 2. Classify base ingredients as grocery or recipe references
//! 3. Expand scales (base multiplier first)
//! 4. Resolve groceries and render ingredient strings on every scaled
//!    ingredient
//!
//! Site-wide, once every recipe exists:
//! 5. Index recipes by slug, rejecting duplicates
//! 6. Check every child reference and record `used_in` links
//! 7. Resolve recipe quantities against child base yields
//!
//! The result still has every cost and nutrition value unresolved; the
//! [`resolver`](crate::resolver) takes it from there.
//!
//! ```rust,no_run
//! use recipe_cost::builder::SiteBuilder;
//! use recipe_cost::config::SiteConfig;
//! use recipe_cost::grocery::GroceryDatabase;
//! use recipe_cost::models::RecipeRecord;
//!
//! # fn example(records: Vec<RecipeRecord>) -> recipe_cost::core::Result<()> {
//! let config = SiteConfig::default();
//! let units = config.unit_table();
//! let groceries = GroceryDatabase::default();
//! let site = SiteBuilder::new(&units, &groceries, &config).build(records)?;
//! # Ok(())
//! # }
//! ```

mod ingredient;
mod recipe_quantity;
mod scale;
mod slug;

pub use ingredient::{
    apply_display_fallbacks, display_amount, from_record, grocery_count, ingredient_string,
    resolve_grocery,
};
pub use recipe_quantity::{recipe_quantity, resolve_recipe_quantities};
pub use scale::{
    base_yields, expand_scales, ingredients_in_scale, multiply_ingredient, scale_yields,
    servings_in,
};
pub use slug::sluggify;

use crate::config::SiteConfig;
use crate::constants::BASE_MULTIPLIER;
use crate::core::{RecipeCostError, Result};
use crate::grocery::GroceryLookup;
use crate::models::{Recipe, RecipeDetails, RecipeLink, RecipeRecord, Site};
use crate::units::UnitTable;

/// Builds a [`Site`] from recipe records.
pub struct SiteBuilder<'a> {
    units: &'a UnitTable,
    groceries: &'a dyn GroceryLookup,
    config: &'a SiteConfig,
}

impl<'a> SiteBuilder<'a> {
    /// Create a builder over the given unit table, grocery source and
    /// configuration.
    #[must_use]
    pub fn new(units: &'a UnitTable, groceries: &'a dyn GroceryLookup, config: &'a SiteConfig) -> Self {
        Self {
            units,
            groceries,
            config,
        }
    }

    /// Assemble every recipe into a site.
    ///
    /// # Errors
    ///
    /// - [`RecipeCostError::InvalidRecipe`] for a malformed record
    /// - [`RecipeCostError::DuplicateRecipe`] when two recipes share a slug
    /// - [`RecipeCostError::RecipeNotFound`] for a reference to an unknown slug
    pub fn build(&self, records: impl IntoIterator<Item = RecipeRecord>) -> Result<Site> {
        let recipes = records
            .into_iter()
            .map(|record| self.build_recipe(&record))
            .collect::<Result<Vec<_>>>()?;

        let mut site = Site::new(recipes)?;
        check_child_references(&site)?;
        set_recipes_used_in(&mut site);
        resolve_recipe_quantities(&mut site, self.units);

        tracing::info!(
            "Assembled {} recipes with {} scales",
            site.len(),
            site.scales().count()
        );
        Ok(site)
    }

    /// Build one recipe without any cross-recipe work.
    ///
    /// # Errors
    ///
    /// Returns [`RecipeCostError::InvalidRecipe`] if the record has no title,
    /// no usable slug, a non-positive multiplier or a negative yield.
    pub fn build_recipe(&self, record: &RecipeRecord) -> Result<Recipe> {
        let slug = validate(record)?;
        let yield_records = record.yields.records();
        let yields = base_yields(&yield_records);
        let ingredients: Vec<_> = record.ingredients.iter().map(from_record).collect();

        let mut scales = expand_scales(&multipliers(record, &slug), &ingredients, &yields, self.units);
        for ingredient in scales.iter_mut().flat_map(|scale| scale.ingredients.iter_mut()) {
            resolve_grocery(ingredient, self.groceries, self.units);
            apply_display_fallbacks(ingredient);
        }

        tracing::debug!("Built recipe '{}' with {} scales", slug, scales.len());

        Ok(Recipe {
            title: record.title.clone(),
            url_slug: slug,
            ingredients,
            yields,
            scales,
            explicit_cost: record.cost,
            explicit_nutrition: record.nutrition,
            hide_cost: record.hide_cost.unwrap_or(self.config.defaults.hide_cost),
            hide_nutrition: record.hide_nutrition.unwrap_or(self.config.defaults.hide_nutrition),
            used_in: Vec::new(),
            details: RecipeDetails::default(),
        })
    }
}

fn validate(record: &RecipeRecord) -> Result<String> {
    let title = record.title.trim();
    let invalid = |slug: &str, reason: String| RecipeCostError::InvalidRecipe {
        slug: slug.to_string(),
        reason,
    };

    if title.is_empty() {
        return Err(invalid(
            record.url_slug.as_deref().unwrap_or("<untitled>"),
            "recipe must have a title".to_string(),
        ));
    }

    let slug = match record.url_slug.as_deref().map(str::trim) {
        Some(slug) if !slug.is_empty() => slug.to_string(),
        _ => sluggify(title),
    };
    if slug.is_empty() {
        return Err(invalid(title, "could not derive a url slug from the title".to_string()));
    }

    for scale in &record.scales {
        let multiplier = scale.multiplier();
        if !multiplier.is_finite() || multiplier <= 0.0 {
            return Err(invalid(&slug, format!("scale multiplier {multiplier} must be positive")));
        }
    }

    for yielded in record.yields.records() {
        if !yielded.number.is_finite() || yielded.number < 0.0 {
            return Err(invalid(
                &slug,
                format!("yield of {} {} must not be negative", yielded.number, yielded.unit),
            ));
        }
    }

    Ok(slug)
}

/// Base multiplier first, then declared multipliers in order, skipping
/// repeats.
fn multipliers(record: &RecipeRecord, slug: &str) -> Vec<f64> {
    let mut multipliers = vec![BASE_MULTIPLIER];
    for scale in &record.scales {
        let multiplier = scale.multiplier();
        if multipliers.contains(&multiplier) {
            tracing::debug!("Recipe '{}' declares scale {} more than once", slug, multiplier);
            continue;
        }
        multipliers.push(multiplier);
    }
    multipliers
}

fn check_child_references(site: &Site) -> Result<()> {
    for recipe in site.recipes() {
        for child in recipe.child_slugs() {
            if site.position(child).is_none() {
                return Err(RecipeCostError::RecipeNotFound {
                    slug: child.to_string(),
                    referenced_by: recipe.url_slug.clone(),
                    suggestions: site.similar_slugs(child),
                });
            }
        }
    }
    Ok(())
}

/// Record each parent on its children, once per parent, in site order.
fn set_recipes_used_in(site: &mut Site) {
    let mut links: Vec<(usize, RecipeLink)> = Vec::new();
    for parent in site.recipes() {
        for child in parent.child_slugs() {
            if let Some(position) = site.position(child) {
                links.push((position, parent.link()));
            }
        }
    }

    let recipes = site.recipes_mut();
    for (position, link) in links {
        let used_in = &mut recipes[position].used_in;
        if !used_in.contains(&link) {
            used_in.push(link);
        }
    }
}
