//! Error handling for recipe cost resolution
//!
//! This module provides the error type shared by every stage of the pipeline
//! and a user-facing wrapper that adds suggestions for the person maintaining
//! the recipe site. The error system follows two principles:
//! 1. **Strongly-typed errors** so callers can match on the failure mode
//! 2. **User-friendly messages** with actionable suggestions
//!
//! # Error Categories
//!
//! - **Graph errors**: [`RecipeCostError::CyclicRecipeReference`], [`RecipeCostError::RecipeNotFound`]
//! - **Data errors**: [`RecipeCostError::DuplicateRecipe`], [`RecipeCostError::InvalidRecipe`]
//! - **Configuration**: [`RecipeCostError::ConfigError`], [`RecipeCostError::ConfigParseError`]
//!
//! Missing groceries, unknown units and yields that cannot be related to an
//! ingredient are *not* errors. They resolve to zero so a site always builds.
//!
//! # Examples
//!
//! ```rust,no_run
//! use recipe_cost::core::{RecipeCostError, user_friendly_error};
//!
//! let error = RecipeCostError::RecipeNotFound {
//!     slug: "pizza-dogh".to_string(),
//!     referenced_by: "pizza".to_string(),
//!     suggestions: vec!["pizza-dough".to_string()],
//! };
//! let ctx = user_friendly_error(anyhow::Error::from(error));
//! ctx.display(); // colored error with "did you mean" suggestion
//! ```

use colored::Colorize;
use std::fmt;
use thiserror::Error;

/// The main error type for recipe cost resolution
///
/// Every fatal condition aborts the whole site build. There is no per-recipe
/// degradation: cross-recipe cost data is only meaningful when the entire
/// graph resolves.
#[derive(Error, Debug)]
pub enum RecipeCostError {
    /// Propagation stalled with unresolved scales left
    ///
    /// Two or more recipes reference each other (directly or through a chain)
    /// so their base scales can never bottom out in groceries.
    ///
    /// # Fields
    /// - `facet`: which propagation stalled (`"cost"` or `"nutrition"`)
    /// - `recipes`: slugs of recipes that still have unresolved scales
    /// - `cycle`: a concrete reference loop, when one could be traced
    #[error("Cyclic recipe reference found while resolving {facet}{}", format_cycle(.cycle.as_deref()))]
    CyclicRecipeReference {
        /// Propagation facet that stalled
        facet: String,
        /// Recipes with unresolved scales
        recipes: Vec<String>,
        /// Traced reference loop, e.g. `a → b → a`
        cycle: Option<String>,
    },

    /// An ingredient references a recipe slug that does not exist
    #[error("Could not find recipe with slug '{slug}' (referenced by '{referenced_by}')")]
    RecipeNotFound {
        /// The unknown slug
        slug: String,
        /// Slug of the recipe holding the reference
        referenced_by: String,
        /// Closest known slugs
        suggestions: Vec<String>,
    },

    /// Two recipes resolve to the same url slug
    #[error("Duplicate recipe slug '{slug}'")]
    DuplicateRecipe {
        /// The slug claimed twice
        slug: String,
    },

    /// A recipe record violates a structural invariant
    #[error("Invalid recipe '{slug}': {reason}")]
    InvalidRecipe {
        /// Recipe slug, or title when no slug could be derived
        slug: String,
        /// What is wrong with it
        reason: String,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    ConfigError {
        /// Description of the configuration error
        message: String,
    },

    /// Configuration file could not be parsed
    #[error("Invalid configuration file syntax in {file}")]
    ConfigParseError {
        /// Path to the configuration file
        file: String,
        /// Specific reason for the parsing failure
        reason: String,
    },

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// Generic error for cases not covered by specific variants
    #[error("{message}")]
    Other {
        /// Error message
        message: String,
    },
}

fn format_cycle(cycle: Option<&str>) -> String {
    cycle.map(|c| format!(": {c}")).unwrap_or_default()
}

impl Clone for RecipeCostError {
    fn clone(&self) -> Self {
        match self {
            Self::CyclicRecipeReference {
                facet,
                recipes,
                cycle,
            } => Self::CyclicRecipeReference {
                facet: facet.clone(),
                recipes: recipes.clone(),
                cycle: cycle.clone(),
            },
            Self::RecipeNotFound {
                slug,
                referenced_by,
                suggestions,
            } => Self::RecipeNotFound {
                slug: slug.clone(),
                referenced_by: referenced_by.clone(),
                suggestions: suggestions.clone(),
            },
            Self::DuplicateRecipe {
                slug,
            } => Self::DuplicateRecipe {
                slug: slug.clone(),
            },
            Self::InvalidRecipe {
                slug,
                reason,
            } => Self::InvalidRecipe {
                slug: slug.clone(),
                reason: reason.clone(),
            },
            Self::ConfigError {
                message,
            } => Self::ConfigError {
                message: message.clone(),
            },
            Self::ConfigParseError {
                file,
                reason,
            } => Self::ConfigParseError {
                file: file.clone(),
                reason: reason.clone(),
            },
            // io and toml errors are not Clone; keep their text
            Self::IoError(e) => Self::Other {
                message: format!("IO error: {e}"),
            },
            Self::TomlError(e) => Self::Other {
                message: format!("TOML parsing error: {e}"),
            },
            Self::Other {
                message,
            } => Self::Other {
                message: message.clone(),
            },
        }
    }
}

/// Result alias used across the crate.
pub type Result<T, E = RecipeCostError> = std::result::Result<T, E>;

/// Error wrapper carrying a suggestion and details for display
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying error
    pub error: RecipeCostError,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a new error context with no suggestion or details.
    #[must_use]
    pub const fn new(error: RecipeCostError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Add a suggestion for resolving the error.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add details explaining the error.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Print the error to stderr: error in red, details in yellow,
    /// suggestion in green.
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

/// Extension trait for converting [`RecipeCostError`] to [`anyhow::Error`]
/// while keeping a suggestion attached.
pub trait IntoAnyhowWithContext {
    /// Convert the error to an [`anyhow::Error`] with the provided context
    fn into_anyhow_with_context(self, context: ErrorContext) -> anyhow::Error;
}

impl IntoAnyhowWithContext for RecipeCostError {
    fn into_anyhow_with_context(self, context: ErrorContext) -> anyhow::Error {
        anyhow::Error::new(ErrorContext {
            error: self,
            suggestion: context.suggestion,
            details: context.details,
        })
    }
}

/// Convert any error to a user-friendly [`ErrorContext`]
///
/// Recognizes [`RecipeCostError`], [`std::io::Error`] and [`toml::de::Error`];
/// everything else is rendered with its full cause chain.
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    if let Some(cost_error) = error.downcast_ref::<RecipeCostError>() {
        return create_error_context(cost_error.clone());
    }

    if let Some(io_error) = error.downcast_ref::<std::io::Error>() {
        if io_error.kind() == std::io::ErrorKind::NotFound {
            return ErrorContext::new(RecipeCostError::ConfigError {
                message: io_error.to_string(),
            })
            .with_suggestion("Check that the configuration file exists and the path is correct");
        }
    }

    if let Some(toml_error) = error.downcast_ref::<toml::de::Error>() {
        return ErrorContext::new(RecipeCostError::ConfigParseError {
            file: "site configuration".to_string(),
            reason: toml_error.to_string(),
        })
        .with_suggestion("Check the TOML syntax. Verify quotes, brackets, and table names");
    }

    let mut message = error.to_string();
    let chain: Vec<String> = error.chain().skip(1).map(std::string::ToString::to_string).collect();

    if !chain.is_empty() {
        message.push_str("\n\nCaused by:");
        for (i, cause) in chain.iter().enumerate() {
            message.push_str(&format!("\n  {}: {}", i + 1, cause));
        }
    }

    ErrorContext::new(RecipeCostError::Other {
        message,
    })
}

fn create_error_context(error: RecipeCostError) -> ErrorContext {
    match &error {
        RecipeCostError::CyclicRecipeReference {
            recipes,
            ..
        } => {
            let details = format!(
                "These recipes never reached a final value: {}",
                recipes.join(", ")
            );
            ErrorContext::new(error)
                .with_suggestion(
                    "Remove one of the recipe references forming the loop, or give one of the recipes an explicit cost/nutrition",
                )
                .with_details(details)
        }
        RecipeCostError::RecipeNotFound {
            suggestions,
            ..
        } => {
            let suggestion = if suggestions.is_empty() {
                "Check the 'recipe' field of the ingredient against existing recipe slugs".to_string()
            } else {
                format!("Did you mean: {}?", suggestions.join(", "))
            };
            ErrorContext::new(error)
                .with_suggestion(suggestion)
                .with_details("Recipe ingredients reference other recipes by url slug")
        }
        RecipeCostError::DuplicateRecipe {
            ..
        } => ErrorContext::new(error)
            .with_suggestion("Rename one of the recipes or set an explicit url_slug"),
        RecipeCostError::InvalidRecipe {
            ..
        } => ErrorContext::new(error).with_suggestion("Fix the recipe record and rebuild"),
        RecipeCostError::ConfigParseError {
            ..
        }
        | RecipeCostError::TomlError(_) => ErrorContext::new(error)
            .with_suggestion("Check the TOML syntax. Verify quotes, brackets, and table names"),
        _ => ErrorContext::new(error),
    }
}
