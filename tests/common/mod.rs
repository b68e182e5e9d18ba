//! Shared test utilities and fake collaborators.

#![allow(dead_code, unused_imports)]

pub mod mock_account;

use std::sync::Arc;

use parking_lot::Mutex;

use storefront::analytics::ImpressionTracker;
use storefront::catalog::{Collection, Product, Variant};
use storefront::router::{NavigationIntent, RouteQuery, Router};

pub use mock_account::{AccountCall, MockAccountService};

/// Product with a single variant at `price`.
pub fn product(id: &str, price: f64) -> Product {
    Product {
        id: id.to_string(),
        title: format!("Product {}", id),
        handle: id.to_string(),
        variants: vec![Variant {
            id: format!("{}-default", id),
            price,
        }],
    }
}

/// Products `p0..pN` priced from `prices`, in that order.
pub fn products(prices: &[f64]) -> Vec<Product> {
    prices
        .iter()
        .enumerate()
        .map(|(i, price)| product(&format!("p{}", i), *price))
        .collect()
}

pub fn collection(prices: &[f64]) -> Arc<Collection> {
    Arc::new(Collection::new("Test collection", products(prices)))
}

pub fn ids(products: &[Product]) -> Vec<String> {
    products.iter().map(|p| p.id.clone()).collect()
}

/// Records every impression batch it receives.
#[derive(Default)]
pub struct RecordingTracker {
    batches: Mutex<Vec<Vec<String>>>,
}

impl RecordingTracker {
    pub fn batches(&self) -> Vec<Vec<String>> {
        self.batches.lock().clone()
    }
}

impl ImpressionTracker for RecordingTracker {
    fn track_product_list_impressions(&self, products: &[Product]) {
        self.batches.lock().push(ids(products));
    }
}

/// In-memory router that applies shallow query updates to itself.
pub struct MemoryRouter {
    pub pathname: String,
    pub query: RouteQuery,
    pub history: Vec<NavigationIntent>,
}

impl MemoryRouter {
    pub fn new(pathname: &str, query: &str) -> Self {
        Self {
            pathname: pathname.to_string(),
            query: RouteQuery::parse(query),
            history: Vec::new(),
        }
    }
}

impl Router for MemoryRouter {
    fn pathname(&self) -> &str {
        &self.pathname
    }

    fn query(&self) -> &RouteQuery {
        &self.query
    }

    fn push(&mut self, intent: NavigationIntent) {
        match &intent {
            NavigationIntent::Push { destination } => {
                self.pathname = destination.clone();
                self.query = RouteQuery::new();
            }
            NavigationIntent::ShallowQuery { pathname, query, .. } => {
                self.pathname = pathname.clone();
                let mut next = RouteQuery::new();
                for (key, value) in query {
                    next.append(key.clone(), value.clone());
                }
                self.query = next;
            }
        }
        self.history.push(intent);
    }
}
