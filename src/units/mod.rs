//! Unit identification and conversion.
//!
//! Units fall into three families:
//!
//! - **Volume** units convert to milliliters
//! - **Weight** units convert to grams
//! - **Other** units ("slice", "clove", "can") have no standard conversion and
//!   only ever compare by name, singular or plural
//!
//! A [`UnitTable`] holds one row per unit with its plural form, family, and
//! conversion factor. The table is passed by reference to everything that
//! needs it; there is no process-wide unit registry.
//!
//! ```rust
//! use recipe_cost::units::UnitTable;
//!
//! let units = UnitTable::builtin();
//! assert!(units.is_volume("cups"));
//! assert!(units.is_equivalent("Cup", "cups"));
//! let cups_per_quart = units.to_standard("quart") / units.to_standard("cup");
//! assert!((cups_per_quart - 4.0).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};

/// Family a unit belongs to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitKind {
    /// Converts to milliliters.
    Volume,
    /// Converts to grams.
    Weight,
    /// Compared by name only.
    #[default]
    Other,
}

/// One row of the unit table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitDefinition {
    /// Singular form, e.g. `"cup"`.
    pub unit: String,
    /// Plural form, e.g. `"cups"`. Abbreviations use the same string twice.
    #[serde(default)]
    pub plural: String,
    /// Unit family.
    #[serde(default)]
    pub kind: UnitKind,
    /// Multiplier to the family's standard unit. Zero means "no conversion".
    #[serde(default)]
    pub to_standard: f64,
}

impl UnitDefinition {
    /// Create a row.
    pub fn new(
        unit: impl Into<String>,
        plural: impl Into<String>,
        kind: UnitKind,
        to_standard: f64,
    ) -> Self {
        Self {
            unit: unit.into(),
            plural: plural.into(),
            kind,
            to_standard,
        }
    }

    fn names(&self, name: &str) -> bool {
        !name.is_empty() && (self.unit == name || self.plural == name)
    }
}

// (singular, plural, kind, to_standard)
const BUILTIN_UNITS: &[(&str, &str, UnitKind, f64)] = &[
    ("teaspoon", "teaspoons", UnitKind::Volume, 4.928_921_593_75),
    ("tsp", "tsp", UnitKind::Volume, 4.928_921_593_75),
    ("tablespoon", "tablespoons", UnitKind::Volume, 14.786_764_781_25),
    ("tbsp", "tbsp", UnitKind::Volume, 14.786_764_781_25),
    ("fluid ounce", "fluid ounces", UnitKind::Volume, 29.573_529_562_5),
    ("fl oz", "fl oz", UnitKind::Volume, 29.573_529_562_5),
    ("cup", "cups", UnitKind::Volume, 236.588_236_5),
    ("pint", "pints", UnitKind::Volume, 473.176_473),
    ("quart", "quarts", UnitKind::Volume, 946.352_946),
    ("gallon", "gallons", UnitKind::Volume, 3_785.411_784),
    ("milliliter", "milliliters", UnitKind::Volume, 1.0),
    ("ml", "ml", UnitKind::Volume, 1.0),
    ("liter", "liters", UnitKind::Volume, 1_000.0),
    ("gram", "grams", UnitKind::Weight, 1.0),
    ("g", "g", UnitKind::Weight, 1.0),
    ("kilogram", "kilograms", UnitKind::Weight, 1_000.0),
    ("kg", "kg", UnitKind::Weight, 1_000.0),
    ("ounce", "ounces", UnitKind::Weight, 28.349_523_125),
    ("oz", "oz", UnitKind::Weight, 28.349_523_125),
    ("pound", "pounds", UnitKind::Weight, 453.592_37),
    ("lb", "lbs", UnitKind::Weight, 453.592_37),
    ("slice", "slices", UnitKind::Other, 0.0),
    ("clove", "cloves", UnitKind::Other, 0.0),
    ("can", "cans", UnitKind::Other, 0.0),
    ("stick", "sticks", UnitKind::Other, 0.0),
    ("pinch", "pinches", UnitKind::Other, 0.0),
    ("dash", "dashes", UnitKind::Other, 0.0),
    ("package", "packages", UnitKind::Other, 0.0),
    ("bunch", "bunches", UnitKind::Other, 0.0),
    ("head", "heads", UnitKind::Other, 0.0),
    ("piece", "pieces", UnitKind::Other, 0.0),
    ("scoop", "scoops", UnitKind::Other, 0.0),
    ("serving", "servings", UnitKind::Other, 0.0),
    ("batch", "batches", UnitKind::Other, 0.0),
];

/// Lookup table of known units.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UnitTable {
    units: Vec<UnitDefinition>,
}

impl UnitTable {
    /// Empty table: every unit is unknown.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Table of common kitchen units.
    #[must_use]
    pub fn builtin() -> Self {
        let units = BUILTIN_UNITS
            .iter()
            .map(|&(unit, plural, kind, factor)| UnitDefinition::new(unit, plural, kind, factor))
            .collect();
        Self {
            units,
        }
    }

    /// Append rows. Earlier rows win when names collide.
    pub fn extend(&mut self, units: impl IntoIterator<Item = UnitDefinition>) {
        self.units.extend(units);
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// True if the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    fn find(&self, name: &str) -> Option<&UnitDefinition> {
        self.units.iter().find(|u| u.names(name))
    }

    fn is_kind(&self, name: &str, kind: UnitKind) -> bool {
        self.units.iter().any(|u| u.kind == kind && u.names(name))
    }

    /// True if `text` is a known unit, singular or plural.
    #[must_use]
    pub fn is_unit(&self, text: &str) -> bool {
        self.find(text).is_some()
    }

    /// True if `unit` is a volume unit, singular or plural.
    #[must_use]
    pub fn is_volume(&self, unit: &str) -> bool {
        self.is_kind(unit, UnitKind::Volume)
    }

    /// True if `unit` is a weight unit, singular or plural.
    #[must_use]
    pub fn is_weight(&self, unit: &str) -> bool {
        self.is_kind(unit, UnitKind::Weight)
    }

    /// True if two units name the same thing.
    ///
    /// Both are lowercased, then they match when the strings are equal or one
    /// is the registered plural of the other.
    #[must_use]
    pub fn is_equivalent(&self, first: &str, second: &str) -> bool {
        let first = first.to_lowercase();
        let second = second.to_lowercase();

        if first == second {
            return true;
        }

        self.units.iter().any(|u| {
            (u.unit == first && u.plural == second) || (u.unit == second && u.plural == first)
        })
    }

    /// Conversion factor to the family's standard unit.
    ///
    /// Unknown units and units without a conversion return `1.0`.
    #[must_use]
    pub fn to_standard(&self, unit: &str) -> f64 {
        self.units
            .iter()
            .find(|u| u.names(unit) && u.to_standard != 0.0)
            .map_or(1.0, |u| u.to_standard)
    }

    /// Singular or plural form of `unit` to go with `number`.
    #[must_use]
    pub fn numberize(&self, unit: &str, number: f64) -> String {
        if number > 1.0 {
            self.plural(unit)
        } else {
            self.singular(unit)
        }
    }

    /// Plural form of a singular unit; other input is returned unchanged.
    #[must_use]
    pub fn plural(&self, unit: &str) -> String {
        self.units
            .iter()
            .find(|u| u.unit == unit && !u.plural.is_empty())
            .map_or_else(|| unit.to_string(), |u| u.plural.clone())
    }

    /// Singular form of a plural unit; other input is returned unchanged.
    #[must_use]
    pub fn singular(&self, unit: &str) -> String {
        self.units
            .iter()
            .find(|u| u.plural == unit && !u.plural.is_empty())
            .map_or_else(|| unit.to_string(), |u| u.unit.clone())
    }
}
