//! Data model for recipes, scales and ingredients.
//!
//! - [`record`]: input shapes produced by recipe-file parsing
//! - [`Recipe`], [`Scale`], [`Ingredient`], [`Yield`]: the resolved structures
//! - [`Site`]: the aggregate of every recipe in a build
//! - [`WriteOnce`]: the unresolved/resolved tag on computed values

pub mod record;
mod recipe;
mod site;
mod write_once;

pub use record::{IngredientRecord, RecipeRecord, ScaleRecord, YieldList, YieldRecord};
pub use recipe::{
    GroceryMatch, Ingredient, IngredientDisplay, IngredientSource, Recipe, RecipeDetails,
    RecipeLink, RecipeReference, Scale, ScaleDisplay, Yield,
};
pub use site::Site;
pub use write_once::WriteOnce;
