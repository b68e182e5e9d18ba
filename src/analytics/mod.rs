//! Analytics collaborator for product list impressions.

use crate::catalog::Product;

/// Receives the products currently visible in a list.
///
/// Fire-and-forget: implementations must not fail the caller.
pub trait ImpressionTracker: Send + Sync {
    fn track_product_list_impressions(&self, products: &[Product]);
}

/// Tracker that records impressions as structured `tracing` events.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingImpressions;

impl ImpressionTracker for TracingImpressions {
    fn track_product_list_impressions(&self, products: &[Product]) {
        let ids: Vec<&str> = products.iter().map(|p| p.id.as_str()).collect();
        tracing::info!(
            target: "storefront::analytics",
            count = products.len(),
            products = ?ids,
            "product list impressions"
        );
    }
}
