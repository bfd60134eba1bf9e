//! URL slug derivation.

use regex::Regex;
use std::sync::OnceLock;

static SEPARATORS: OnceLock<Option<Regex>> = OnceLock::new();
static INVALID: OnceLock<Option<Regex>> = OnceLock::new();
static DASH_RUNS: OnceLock<Option<Regex>> = OnceLock::new();

fn pattern(cell: &'static OnceLock<Option<Regex>>, source: &str) -> Option<&'static Regex> {
    cell.get_or_init(|| Regex::new(source).ok()).as_ref()
}

/// Convert a title into a URL-friendly slug.
///
/// Lowercases, turns runs of spaces and underscores into one dash, drops
/// anything that is not `a-z`, `0-9` or `-`, collapses dash runs and trims
/// dashes from both ends.
///
/// ```rust
/// use recipe_cost::builder::sluggify;
///
/// assert_eq!(sluggify("Grandma's Apple Pie"), "grandmas-apple-pie");
/// assert_eq!(sluggify("  pizza__dough -- thin "), "pizza-dough-thin");
/// ```
#[must_use]
pub fn sluggify(name: &str) -> String {
    let mut slug = name.to_lowercase();

    if let Some(re) = pattern(&SEPARATORS, r"[ _]+") {
        slug = re.replace_all(&slug, "-").into_owned();
    }
    if let Some(re) = pattern(&INVALID, r"[^a-z0-9\-]") {
        slug = re.replace_all(&slug, "").into_owned();
    }
    if let Some(re) = pattern(&DASH_RUNS, r"-{2,}") {
        slug = re.replace_all(&slug, "-").into_owned();
    }

    slug.trim_matches('-').to_string()
}
