//! Core types shared by every stage of the pipeline
//!
//! The core module holds the error system:
//! - [`RecipeCostError`] - enumerated failure modes of the build
//! - [`ErrorContext`] - user-facing wrapper with suggestions and details
//! - [`user_friendly_error`] - convert any error to the user-facing form
//!
//! # Error Handling Pattern
//!
//! ```rust
//! use recipe_cost::core::{RecipeCostError, user_friendly_error};
//!
//! fn build() -> anyhow::Result<()> {
//!     Err(RecipeCostError::DuplicateRecipe { slug: "bread".to_string() }.into())
//! }
//!
//! if let Err(e) = build() {
//!     let friendly = user_friendly_error(e);
//!     assert!(friendly.suggestion.is_some());
//! }
//! ```

pub mod error;

pub use error::{ErrorContext, IntoAnyhowWithContext, RecipeCostError, Result, user_friendly_error};
