//! Two-state resolution tag for computed values.

use serde::{Deserialize, Serialize};

/// A value that is computed once and then frozen.
///
/// Starts unresolved holding `T::default()`. [`WriteOnce::finalize`] stores a
/// value and marks it final; after that the value never changes.
///
/// ```rust
/// use recipe_cost::models::WriteOnce;
///
/// let mut cost = WriteOnce::<f64>::pending();
/// assert!(cost.finalize(2.5));
/// assert!(!cost.finalize(9.0));
/// assert_eq!(cost.value(), 2.5);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WriteOnce<T> {
    value: T,
    is_final: bool,
}

impl<T: Copy + Default> WriteOnce<T> {
    /// Unresolved, holding the default value.
    #[must_use]
    pub fn pending() -> Self {
        Self {
            value: T::default(),
            is_final: false,
        }
    }

    /// Already resolved to `value`.
    #[must_use]
    pub fn resolved(value: T) -> Self {
        Self {
            value,
            is_final: true,
        }
    }

    /// Current value. Only meaningful once [`is_final`](Self::is_final).
    #[must_use]
    pub fn value(&self) -> T {
        self.value
    }

    /// The value if final.
    #[must_use]
    pub fn get(&self) -> Option<T> {
        self.is_final.then_some(self.value)
    }

    /// True once a value has been stored.
    #[must_use]
    pub fn is_final(&self) -> bool {
        self.is_final
    }

    /// Store `value` and mark final. Returns `false` and leaves the stored
    /// value untouched if already final.
    pub fn finalize(&mut self, value: T) -> bool {
        if self.is_final {
            return false;
        }
        self.value = value;
        self.is_final = true;
        true
    }
}
