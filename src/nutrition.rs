//! Nutrition values and the arithmetic shared with costs.
//!
//! Costs (`f64`) and [`Nutrition`] are both [`Measure`]s: values that can be
//! summed across ingredients and scaled by a quantity. The propagation engine
//! is written once against this trait.

use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// A quantity that propagates through the recipe graph.
pub trait Measure: Copy + Default + PartialEq + std::fmt::Debug + Add<Output = Self> + Sum {
    /// Multiply every component by `factor`.
    #[must_use]
    fn scaled(self, factor: f64) -> Self;
}

impl Measure for f64 {
    fn scaled(self, factor: f64) -> Self {
        self * factor
    }
}

/// Macronutrient totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Nutrition {
    /// Energy in kilocalories.
    pub calories: f64,
    /// Fat in grams.
    pub fat: f64,
    /// Carbohydrates in grams.
    pub carbohydrates: f64,
    /// Protein in grams.
    pub protein: f64,
}

impl Nutrition {
    /// Create a nutrition value.
    #[must_use]
    pub const fn new(calories: f64, fat: f64, carbohydrates: f64, protein: f64) -> Self {
        Self {
            calories,
            fat,
            carbohydrates,
            protein,
        }
    }

    /// All zeros.
    #[must_use]
    pub const fn empty() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    /// Each component rounded to the nearest whole number.
    #[must_use]
    pub fn rounded(self) -> Self {
        Self::new(
            self.calories.round(),
            self.fat.round(),
            self.carbohydrates.round(),
            self.protein.round(),
        )
    }

    /// True if any component is positive.
    #[must_use]
    pub fn has_nutrients(&self) -> bool {
        [self.calories, self.fat, self.carbohydrates, self.protein].iter().any(|v| *v > 0.0)
    }
}

impl Add for Nutrition {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(
            self.calories + other.calories,
            self.fat + other.fat,
            self.carbohydrates + other.carbohydrates,
            self.protein + other.protein,
        )
    }
}

impl AddAssign for Nutrition {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sum for Nutrition {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::empty(), Add::add)
    }
}

impl Measure for Nutrition {
    fn scaled(self, factor: f64) -> Self {
        Self::new(
            self.calories * factor,
            self.fat * factor,
            self.carbohydrates * factor,
            self.protein * factor,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_default_to_zero() {
        let nutrition: Nutrition = serde_json::from_str(r#"{"calories": 120}"#).unwrap();
        assert_eq!(nutrition, Nutrition::new(120.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn test_sum_and_scale() {
        let total: Nutrition =
            [Nutrition::new(100.0, 1.0, 10.0, 2.0), Nutrition::new(50.0, 2.0, 0.0, 1.0)]
                .into_iter()
                .sum();
        assert_eq!(total, Nutrition::new(150.0, 3.0, 10.0, 3.0));
        assert_eq!(total.scaled(2.0), Nutrition::new(300.0, 6.0, 20.0, 6.0));
    }

    #[test]
    fn test_rounded() {
        let nutrition = Nutrition::new(99.6, 0.4, 10.5, 2.49).rounded();
        assert_eq!(nutrition, Nutrition::new(100.0, 0.0, 11.0, 2.0));
    }

    #[test]
    fn test_has_nutrients() {
        assert!(!Nutrition::empty().has_nutrients());
        assert!(Nutrition::new(0.0, 0.0, 0.0, 0.1).has_nutrients());
    }

    #[test]
    fn test_cost_measure() {
        let total: f64 = [1.5, 2.5].into_iter().sum();
        assert_eq!(total.scaled(0.5), 2.0);
    }
}
