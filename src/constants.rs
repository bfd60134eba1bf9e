//! Global constants used throughout the crate.
//!
//! Unit names, rounding precision, and formatting defaults that are shared
//! by the builders, the propagation engine, and the presentation layer.
//! Defining them centrally keeps the magic values discoverable.

/// Unit assigned to a yield when the record does not name one.
pub const DEFAULT_YIELD_UNIT: &str = "servings";

/// Yield units (compared lowercased) that define a scale's serving count.
pub const SERVING_UNITS: [&str; 2] = ["serving", "servings"];

/// Multiplier of the base scale. Always stored at index 0 of a recipe's scales.
pub const BASE_MULTIPLIER: f64 = 1.0;

/// Largest denominator used when approximating a decimal amount as a fraction.
///
/// Matches what a cook would reasonably write down ("1/3", "3/8", "7/16").
pub const MAX_FRACTION_DENOMINATOR: i64 = 100;

/// Decimal places kept for `number_groceries` in the site summary.
pub const SUMMARY_GROCERY_PRECISION: i32 = 5;

/// Default currency symbol for cost strings.
pub const DEFAULT_CURRENCY_SYMBOL: &str = "$";

/// Default number of decimals for cost strings.
pub const DEFAULT_CURRENCY_DECIMALS: usize = 2;

/// Prefix for links from a parent ingredient to its child recipe page.
pub const CHILD_RECIPE_URL_PREFIX: &str = "../";

/// Maximum relative Levenshtein distance (percent of the slug length) for
/// "did you mean" suggestions on unknown recipe slugs.
pub const SIMILARITY_THRESHOLD_PERCENT: usize = 50;

/// Maximum number of slug suggestions attached to a lookup error.
pub const MAX_SLUG_SUGGESTIONS: usize = 3;
