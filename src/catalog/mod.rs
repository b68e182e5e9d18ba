//! Product catalog records consumed by the product grid.
//!
//! These mirror the subset of a storefront platform's product payload the
//! grid actually reads. Unknown fields in the source JSON are ignored.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// A purchasable variant of a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variant {
    #[serde(default)]
    pub id: String,
    pub price: f64,
}

/// A product as delivered by the storefront platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub handle: String,
    #[serde(default)]
    pub variants: Vec<Variant>,
}

impl Product {
    /// Price of the first variant, which is what the grid sorts on.
    pub fn sort_price(&self) -> Option<f64> {
        self.variants.first().map(|v| v.price)
    }

    /// Ascending price comparison. Products without a variant sort last.
    pub fn cmp_price(&self, other: &Self) -> Ordering {
        match (self.sort_price(), other.sort_price()) {
            (Some(a), Some(b)) => a.total_cmp(&b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}

/// A named group of products rendered by one grid section.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Collection {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub products: Vec<Product>,
}

impl Collection {
    pub fn new(name: impl Into<String>, products: Vec<Product>) -> Self {
        Self {
            name: name.into(),
            products,
        }
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
