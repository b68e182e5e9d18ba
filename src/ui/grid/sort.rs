//! Sort orders offered by the product grid.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::catalog::Product;

/// How the grid orders a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortKey {
    /// Source order, untouched.
    #[default]
    #[serde(rename = "relevance")]
    Relevance,
    #[serde(rename = "low-high")]
    PriceLowHigh,
    #[serde(rename = "high-low")]
    PriceHighLow,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Relevance => "relevance",
            Self::PriceLowHigh => "low-high",
            Self::PriceHighLow => "high-low",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "relevance" => Ok(Self::Relevance),
            "low-high" => Ok(Self::PriceLowHigh),
            "high-low" => Ok(Self::PriceHighLow),
            other => Err(format!("Unknown sort key '{}'", other)),
        }
    }
}

/// An entry of the sort select control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SortOption {
    pub text: &'static str,
    pub value: SortKey,
}

/// Options in display order. The first one is the default selection.
pub const SORT_OPTIONS: &[SortOption] = &[
    SortOption {
        text: "Relevance",
        value: SortKey::Relevance,
    },
    SortOption {
        text: "$$$ Low - High",
        value: SortKey::PriceLowHigh,
    },
    SortOption {
        text: "$$$ High - Low",
        value: SortKey::PriceHighLow,
    },
];

/// Return a newly ordered copy of `products`.
///
/// The sort is stable, so products with equal prices keep their source
/// order. Products without a variant end up last in both price orders.
pub fn sort_products(products: &[Product], key: SortKey) -> Vec<Product> {
    let mut sorted = products.to_vec();
    match key {
        SortKey::Relevance => {}
        SortKey::PriceLowHigh => sorted.sort_by(Product::cmp_price),
        SortKey::PriceHighLow => sorted.sort_by(descending_price),
    }
    sorted
}

fn descending_price(a: &Product, b: &Product) -> Ordering {
    match (a.sort_price(), b.sort_price()) {
        (Some(a), Some(b)) => b.total_cmp(&a),
        _ => a.cmp_price(b),
    }
}
