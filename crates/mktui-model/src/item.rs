#![forbid(unsafe_code)]

//! Immutable catalog entries.

use std::fmt;

/// A purchasable catalog entry.
///
/// Items are immutable once constructed. Identity is derived from the
/// name: two items with equal names are the same identity for list
/// rendering and cart counting, even when constructed separately. No
/// validation is performed on construction; a negative price is accepted
/// and simply flows into the total.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    name: String,
    price: f64,
}

impl Item {
    /// Create a new item.
    #[must_use]
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }

    /// Display label.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unit price.
    #[must_use]
    pub fn price(&self) -> f64 {
        self.price
    }

    /// Identity key. Same value as [`name`](Self::name); duplicate cart
    /// entries of one item share this key and must be disambiguated by
    /// position where a per-entry key is needed.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.2})", self.name, self.price)
    }
}
