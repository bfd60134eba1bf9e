//! Fixed-point propagation of cost and nutrition across a site.
//!
//! # Algorithm
//!
//! Every scale and ingredient holds a [`WriteOnce`](crate::models::WriteOnce)
//! cell per facet. Resolution happens in two phases:
//!
//! 1. **Immediate pass.** Ingredients with an explicit value, grocery leaves,
//!    and scales of recipes with an explicit value resolve right away.
//! 2. **Rounds.** Each round runs an *ingredient step* (a recipe ingredient
//!    resolves once its child's base scale is final: `recipe_quantity ×
//!    child base value`) and then a *scale step* (a scale resolves once all
//!    of its ingredients are final: the sum of their values).
//!
//! Rounds continue until nothing is pending. A round that resolves nothing
//! while work remains means the remaining recipes reference each other in a
//! loop, which is reported as [`RecipeCostError::CyclicRecipeReference`].
//!
//! Child references always price against the child's base scale, whatever
//! scale the parent ingredient belongs to; the parent's multiplier is
//! already folded into its `recipe_quantity`.
//!
//! Final values are never rewritten, so running the engine again on a
//! resolved site changes nothing and reports zero rounds.

use std::collections::HashMap;

use super::dependency_graph::RecipeGraph;
use super::facet::{CostFacet, Facet, NutritionFacet};
use crate::core::{RecipeCostError, Result};
use crate::models::{IngredientSource, Recipe, Site};
use crate::nutrition::Measure;

/// What a propagation run did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PropagationReport {
    /// Rounds run after the immediate pass.
    pub rounds: usize,
    /// Scales finalized by this run.
    pub resolved_scales: usize,
    /// Ingredients finalized by this run.
    pub resolved_ingredients: usize,
}

impl PropagationReport {
    /// Combine reports of independent runs: the larger round count and the
    /// summed totals.
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        Self {
            rounds: self.rounds.max(other.rounds),
            resolved_scales: self.resolved_scales + other.resolved_scales,
            resolved_ingredients: self.resolved_ingredients + other.resolved_ingredients,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Pending {
    scales: usize,
    ingredients: usize,
}

impl Pending {
    const fn total(self) -> usize {
        self.scales + self.ingredients
    }
}

/// Resolve every cost in the site.
///
/// # Errors
///
/// Returns [`RecipeCostError::CyclicRecipeReference`] if recipes reference
/// each other in a loop, or [`RecipeCostError::RecipeNotFound`] if one
/// references a slug the site does not have.
pub fn resolve_costs(site: &mut Site) -> Result<PropagationReport> {
    propagate::<CostFacet>(site)
}

/// Resolve every nutrition value in the site.
///
/// # Errors
///
/// Returns [`RecipeCostError::CyclicRecipeReference`] if recipes reference
/// each other in a loop, or [`RecipeCostError::RecipeNotFound`] if one
/// references a slug the site does not have.
pub fn resolve_nutrition(site: &mut Site) -> Result<PropagationReport> {
    propagate::<NutritionFacet>(site)
}

/// Resolve costs, then nutrition. The report merges both runs.
///
/// # Errors
///
/// Returns [`RecipeCostError::CyclicRecipeReference`] if recipes reference
/// each other in a loop, or [`RecipeCostError::RecipeNotFound`] if one
/// references a slug the site does not have.
pub fn resolve(site: &mut Site) -> Result<PropagationReport> {
    let costs = resolve_costs(site)?;
    let nutrition = resolve_nutrition(site)?;
    Ok(costs.merge(nutrition))
}

/// Run the fixed-point algorithm for one facet.
///
/// # Errors
///
/// Returns [`RecipeCostError::CyclicRecipeReference`] when a round makes no
/// progress while values are still pending, and
/// [`RecipeCostError::RecipeNotFound`] for a reference to an unknown slug.
pub fn propagate<F: Facet>(site: &mut Site) -> Result<PropagationReport> {
    let mut report = PropagationReport::default();
    resolve_immediate::<F>(site, &mut report);

    let mut pending = count_pending::<F>(site);
    tracing::debug!(
        "{}: {} scales and {} ingredients pending after immediate pass",
        F::NAME,
        pending.scales,
        pending.ingredients
    );

    while pending.total() > 0 {
        report.rounds += 1;
        report.resolved_ingredients += resolve_recipe_ingredients::<F>(site)?;
        report.resolved_scales += resolve_scales::<F>(site);

        let now = count_pending::<F>(site);
        tracing::debug!(
            "{} round {}: {} scales and {} ingredients pending",
            F::NAME,
            report.rounds,
            now.scales,
            now.ingredients
        );
        if now.total() == pending.total() {
            return Err(stall_error::<F>(site));
        }
        pending = now;
    }

    if report.resolved_scales > 0 || report.resolved_ingredients > 0 {
        tracing::info!(
            "Resolved {} for {} scales in {} rounds",
            F::NAME,
            report.resolved_scales,
            report.rounds
        );
    }
    Ok(report)
}

fn resolve_immediate<F: Facet>(site: &mut Site, report: &mut PropagationReport) {
    for recipe in site.recipes_mut() {
        let recipe_override = F::recipe_override(recipe);

        for scale in &mut recipe.scales {
            if let Some(value) = recipe_override {
                let scaled = value.scaled(scale.multiplier);
                if F::scale_cell_mut(scale).finalize(scaled) {
                    report.resolved_scales += 1;
                }
            }

            for ingredient in &mut scale.ingredients {
                if F::ingredient_cell(ingredient).is_final() {
                    continue;
                }
                let (value, has_data) = if let Some(value) = F::ingredient_override(ingredient) {
                    (value, true)
                } else if let IngredientSource::Grocery(found) = &ingredient.source {
                    (F::grocery_value(found), found.grocery.is_some())
                } else {
                    continue;
                };
                F::ingredient_cell_mut(ingredient).finalize(value);
                F::on_ingredient_resolved(ingredient, has_data);
                report.resolved_ingredients += 1;
            }
        }
    }
}

/// Ingredient step: price recipe ingredients whose child base scale is final.
///
/// Fails on the first reference to a slug no recipe has.
fn resolve_recipe_ingredients<F: Facet>(site: &mut Site) -> Result<usize> {
    let child_bases: HashMap<String, Option<F::Value>> = site
        .recipes()
        .iter()
        .map(|recipe| {
            let base = recipe.base_scale().and_then(|scale| F::scale_cell(scale).get());
            (recipe.url_slug.clone(), base)
        })
        .collect();

    let mut resolved = 0;
    let mut missing: Option<(String, String)> = None;
    'recipes: for recipe in site.recipes_mut() {
        for ingredient in recipe.scales.iter_mut().flat_map(|scale| scale.ingredients.iter_mut()) {
            if F::ingredient_cell(ingredient).is_final() {
                continue;
            }
            let IngredientSource::Recipe(reference) = &mut ingredient.source else {
                continue;
            };
            let child_base = match child_bases.get(&reference.slug) {
                Some(Some(child_base)) => *child_base,
                Some(None) => continue,
                None => {
                    missing = Some((reference.slug.clone(), recipe.url_slug.clone()));
                    break 'recipes;
                }
            };
            F::record_child_value(reference, child_base);
            let value = child_base.scaled(reference.recipe_quantity);

            F::ingredient_cell_mut(ingredient).finalize(value);
            F::on_ingredient_resolved(ingredient, true);
            resolved += 1;
        }
    }

    if let Some((slug, referenced_by)) = missing {
        return Err(RecipeCostError::RecipeNotFound {
            suggestions: site.similar_slugs(&slug),
            slug,
            referenced_by,
        });
    }
    Ok(resolved)
}

/// Scale step: sum scales whose ingredients are all final.
fn resolve_scales<F: Facet>(site: &mut Site) -> usize {
    let mut resolved = 0;
    for scale in site.recipes_mut().iter_mut().flat_map(|recipe| recipe.scales.iter_mut()) {
        if F::scale_cell(scale).is_final() {
            continue;
        }
        if !scale.ingredients.iter().all(|ingredient| F::ingredient_cell(ingredient).is_final()) {
            continue;
        }
        let total: F::Value =
            scale.ingredients.iter().map(|ingredient| F::ingredient_cell(ingredient).value()).sum();
        F::scale_cell_mut(scale).finalize(total);
        resolved += 1;
    }
    resolved
}

fn count_pending<F: Facet>(site: &Site) -> Pending {
    let mut pending = Pending {
        scales: 0,
        ingredients: 0,
    };
    for (_, scale) in site.scales() {
        if !F::scale_cell(scale).is_final() {
            pending.scales += 1;
        }
        pending.ingredients +=
            scale.ingredients.iter().filter(|i| !F::ingredient_cell(i).is_final()).count();
    }
    pending
}

fn is_pending<F: Facet>(recipe: &Recipe) -> bool {
    recipe.scales.iter().any(|scale| {
        !F::scale_cell(scale).is_final()
            || scale.ingredients.iter().any(|i| !F::ingredient_cell(i).is_final())
    })
}

fn stall_error<F: Facet>(site: &Site) -> RecipeCostError {
    let stuck: Vec<&Recipe> = site.recipes().iter().filter(|r| is_pending::<F>(r)).collect();
    let cycle = RecipeGraph::from_recipes(stuck.iter().copied())
        .find_cycle()
        .map(|cycle| cycle.join(" → "));

    tracing::debug!(
        "{} propagation stalled on {} recipes (cycle: {:?})",
        F::NAME,
        stuck.len(),
        cycle
    );

    RecipeCostError::CyclicRecipeReference {
        facet: F::NAME.to_string(),
        recipes: stuck.iter().map(|r| r.url_slug.clone()).collect(),
        cycle,
    }
}
