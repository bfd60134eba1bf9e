//! The site aggregate: every recipe plus a slug index.

use serde::Serialize;
use std::collections::HashMap;
use strsim::levenshtein;

use super::{Ingredient, Recipe, Scale};
use crate::constants::{MAX_SLUG_SUGGESTIONS, SIMILARITY_THRESHOLD_PERCENT};
use crate::core::{RecipeCostError, Result};

/// All recipes of one build.
///
/// Built by [`SiteBuilder`](crate::builder::SiteBuilder), mutated in place by
/// the propagation engine and presentation pass. Recipes keep their input
/// order; slugs are unique.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Site {
    recipes: Vec<Recipe>,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl Site {
    /// Wrap recipes, indexing them by slug.
    ///
    /// # Errors
    ///
    /// Returns [`RecipeCostError::DuplicateRecipe`] if two recipes share a
    /// slug.
    pub fn new(recipes: Vec<Recipe>) -> Result<Self> {
        let mut index = HashMap::with_capacity(recipes.len());
        for (position, recipe) in recipes.iter().enumerate() {
            if index.insert(recipe.url_slug.clone(), position).is_some() {
                return Err(RecipeCostError::DuplicateRecipe {
                    slug: recipe.url_slug.clone(),
                });
            }
        }
        Ok(Self {
            recipes,
            index,
        })
    }

    /// Recipes in input order.
    #[must_use]
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Mutable recipes in input order.
    ///
    /// Slugs must not be changed through this; the index is not rebuilt.
    pub fn recipes_mut(&mut self) -> &mut [Recipe] {
        &mut self.recipes
    }

    /// Number of recipes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// True if there are no recipes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Position of the recipe with `slug`.
    #[must_use]
    pub fn position(&self, slug: &str) -> Option<usize> {
        self.index.get(slug).copied()
    }

    /// Look up a recipe by slug.
    ///
    /// # Errors
    ///
    /// Returns [`RecipeCostError::RecipeNotFound`] with the closest known
    /// slugs as suggestions.
    pub fn recipe(&self, slug: &str) -> Result<&Recipe> {
        self.position(slug).map(|position| &self.recipes[position]).ok_or_else(|| {
            RecipeCostError::RecipeNotFound {
                slug: slug.to_string(),
                referenced_by: String::new(),
                suggestions: self.similar_slugs(slug),
            }
        })
    }

    /// Known slugs closest to `target` by edit distance.
    #[must_use]
    pub fn similar_slugs(&self, target: &str) -> Vec<String> {
        find_similar_slugs(target, self.recipes.iter().map(|r| r.url_slug.as_str()))
    }

    /// Every scale, paired with its recipe.
    pub fn scales(&self) -> impl Iterator<Item = (&Recipe, &Scale)> {
        self.recipes
            .iter()
            .flat_map(|recipe| recipe.scales.iter().map(move |scale| (recipe, scale)))
    }

    /// Every scaled ingredient, with its recipe and scale.
    pub fn ingredients(&self) -> impl Iterator<Item = (&Recipe, &Scale, &Ingredient)> {
        self.scales().flat_map(|(recipe, scale)| {
            scale.ingredients.iter().map(move |ingredient| (recipe, scale, ingredient))
        })
    }

    /// True once every scale and ingredient has final cost and nutrition.
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.scales().all(|(_, scale)| {
            scale.cost.is_final()
                && scale.nutrition.is_final()
                && scale
                    .ingredients
                    .iter()
                    .all(|ingredient| ingredient.cost.is_final() && ingredient.nutrition.is_final())
        })
    }

    /// Slugs ordered so every child recipe comes before its parents.
    ///
    /// # Errors
    ///
    /// Returns [`RecipeCostError::CyclicRecipeReference`] if recipes
    /// reference each other in a loop.
    pub fn dependency_order(&self) -> Result<Vec<String>> {
        crate::resolver::RecipeGraph::from_site(self).topological_order()
    }
}

/// Closest candidates to `target`, within half its length in edits.
pub(crate) fn find_similar_slugs<'a>(
    target: &str,
    candidates: impl Iterator<Item = &'a str>,
) -> Vec<String> {
    let mut scored: Vec<_> =
        candidates.map(|candidate| (candidate, levenshtein(target, candidate))).collect();

    scored.sort_by_key(|(_, distance)| *distance);

    scored
        .into_iter()
        .filter(|(_, distance)| *distance <= target.len() * SIMILARITY_THRESHOLD_PERCENT / 100)
        .take(MAX_SLUG_SUGGESTIONS)
        .map(|(candidate, _)| candidate.to_string())
        .collect()
}
