//! Cost and nutrition propagation.
//!
//! Recipes may use other recipes as ingredients, so no cost is known until
//! its children's costs are. This module computes every cost and nutrition
//! value in a [`Site`](crate::models::Site) as a fixed point:
//!
//! - [`engine`]: the round-based propagation shared by both facets
//! - [`facet`]: which fields cost and nutrition read and write
//! - [`dependency_graph`]: the child-reference graph, used to name cycles
//!   and to order recipes children-first
//!
//! # Example
//!
//! ```rust,no_run
//! use recipe_cost::models::Site;
//! use recipe_cost::resolver;
//!
//! # fn example(site: &mut Site) -> recipe_cost::core::Result<()> {
//! let report = resolver::resolve(site)?;
//! println!("resolved in {} rounds", report.rounds);
//! # Ok(())
//! # }
//! ```

pub mod dependency_graph;
pub mod engine;
pub mod facet;

pub use dependency_graph::RecipeGraph;
pub use engine::{PropagationReport, propagate, resolve, resolve_costs, resolve_nutrition};
pub use facet::{CostFacet, Facet, NutritionFacet};
