//! Grocery price and nutrition database.
//!
//! A grocery record describes one purchasable unit of an item: what it
//! costs, how much of it there is (by volume, weight, another unit, or
//! count), and the nutrition of that whole unit.
//!
//! Ingredients resolve against groceries through the [`GroceryLookup`] trait
//! so callers can back it with whatever store they load groceries from.
//! [`GroceryDatabase`] is the in-memory implementation.

use serde::{Deserialize, Serialize};

use crate::nutrition::Nutrition;

/// One row of the grocery database.
///
/// Every field defaults to zero or empty, so sparse records deserialize.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroceryRecord {
    /// Stable identifier, numbered from 1 when not supplied.
    pub grocery_id: u32,
    /// Name ingredients are matched against (case-insensitive).
    pub name: String,
    /// Store section, e.g. "produce".
    pub category: String,
    /// Price of one purchasable unit.
    pub cost: f64,
    /// Volume in one purchasable unit.
    pub volume_amount: f64,
    /// Unit of `volume_amount`.
    pub volume_unit: String,
    /// Weight of one purchasable unit.
    pub weight_amount: f64,
    /// Unit of `weight_amount`.
    pub weight_unit: String,
    /// Amount in a nonstandard unit.
    pub other_amount: f64,
    /// Unit of `other_amount`, e.g. "slices".
    pub other_unit: String,
    /// Count of discrete items in one purchasable unit.
    pub discrete_amount: f64,
    /// Energy of one purchasable unit.
    pub calories: f64,
    /// Fat of one purchasable unit.
    pub fat: f64,
    /// Carbohydrates of one purchasable unit.
    pub carbohydrates: f64,
    /// Protein of one purchasable unit.
    pub protein: f64,
    /// Newline-separated search tags.
    pub tags: String,
}

impl GroceryRecord {
    /// Nutrition of one purchasable unit.
    #[must_use]
    pub const fn nutrition(&self) -> Nutrition {
        Nutrition::new(self.calories, self.fat, self.carbohydrates, self.protein)
    }

    /// Tags split on newlines, blanks dropped.
    #[must_use]
    pub fn tag_list(&self) -> Vec<String> {
        self.tags
            .lines()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// Source of grocery records.
pub trait GroceryLookup {
    /// Find a grocery by item name. Matching ignores case.
    fn lookup(&self, item: &str) -> Option<&GroceryRecord>;

    /// Every record, in load order.
    fn all(&self) -> &[GroceryRecord];
}

/// In-memory grocery database.
#[derive(Debug, Clone, Default)]
pub struct GroceryDatabase {
    records: Vec<GroceryRecord>,
}

impl GroceryDatabase {
    /// Build a database, numbering records that have no id.
    ///
    /// Names are stored lowercased so lookups are case-insensitive.
    #[must_use]
    pub fn new(records: impl IntoIterator<Item = GroceryRecord>) -> Self {
        let records = records
            .into_iter()
            .enumerate()
            .map(|(index, mut record)| {
                if record.grocery_id == 0 {
                    record.grocery_id = u32::try_from(index + 1).unwrap_or(u32::MAX);
                }
                record.name = record.name.trim().to_lowercase();
                record
            })
            .collect();
        Self {
            records,
        }
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True if there are no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl GroceryLookup for GroceryDatabase {
    fn lookup(&self, item: &str) -> Option<&GroceryRecord> {
        let name = item.to_lowercase();
        self.records.iter().find(|record| record.name == name)
    }

    fn all(&self) -> &[GroceryRecord] {
        &self.records
    }
}

/// Grocery fields copied onto an ingredient that matched a record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GrocerySnapshot {
    /// Identifier of the matched record.
    pub grocery_id: u32,
    /// Name of the matched record.
    pub name: String,
    /// Price of one purchasable unit.
    pub cost: f64,
    /// Volume in one purchasable unit.
    pub volume_amount: f64,
    /// Unit of `volume_amount`.
    pub volume_unit: String,
    /// Weight of one purchasable unit.
    pub weight_amount: f64,
    /// Unit of `weight_amount`.
    pub weight_unit: String,
    /// Amount in a nonstandard unit.
    pub other_amount: f64,
    /// Unit of `other_amount`.
    pub other_unit: String,
    /// Discrete items in one purchasable unit.
    pub discrete_amount: f64,
    /// Nutrition of one purchasable unit.
    pub nutrition: Nutrition,
    /// Search tags.
    pub tags: Vec<String>,
}

impl From<&GroceryRecord> for GrocerySnapshot {
    fn from(record: &GroceryRecord) -> Self {
        Self {
            grocery_id: record.grocery_id,
            name: record.name.clone(),
            cost: record.cost,
            volume_amount: record.volume_amount,
            volume_unit: record.volume_unit.clone(),
            weight_amount: record.weight_amount,
            weight_unit: record.weight_unit.clone(),
            other_amount: record.other_amount,
            other_unit: record.other_unit.clone(),
            discrete_amount: record.discrete_amount,
            nutrition: record.nutrition(),
            tags: record.tag_list(),
        }
    }
}
