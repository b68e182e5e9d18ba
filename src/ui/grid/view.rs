//! Derived view state of the product grid: sort, then paginate, then slice.

use std::num::NonZeroUsize;

use serde::Serialize;

use crate::catalog::Product;
use crate::router::RouteQuery;

use super::sort::{sort_products, SortKey};

/// Which page of the grid to show, and how large pages are.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pagination {
    current_page: usize,
    page_size: Option<NonZeroUsize>,
}

impl Pagination {
    /// A `current_page` below 1 is read as 1. A `page_size` of 0 or `None`
    /// disables pagination.
    pub fn new(current_page: usize, page_size: Option<usize>) -> Self {
        Self {
            current_page: current_page.max(1),
            page_size: page_size.and_then(NonZeroUsize::new),
        }
    }

    /// Everything on a single page.
    pub fn unpaginated() -> Self {
        Self::new(1, None)
    }

    /// Current page taken from the route's `page` parameter.
    pub fn from_query(query: &RouteQuery, page_size: Option<NonZeroUsize>) -> Self {
        Self {
            current_page: query.page(),
            page_size,
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> Option<NonZeroUsize> {
        self.page_size
    }

    pub fn is_enabled(&self) -> bool {
        self.page_size.is_some()
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::unpaginated()
    }
}

/// What the grid renders for one set of inputs.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ViewState {
    pub visible_products: Vec<Product>,
    /// `None` when pagination is disabled.
    pub total_pages: Option<usize>,
}

impl ViewState {
    pub fn is_empty(&self) -> bool {
        self.visible_products.is_empty()
    }
}

/// Compute the visible page of `products`.
///
/// Pages past the end yield an empty page rather than an error or a
/// clamped page.
pub fn compute_view(products: &[Product], sort: SortKey, pagination: Pagination) -> ViewState {
    let sorted = sort_products(products, sort);

    let Some(size) = pagination.page_size.map(NonZeroUsize::get) else {
        return ViewState {
            visible_products: sorted,
            total_pages: None,
        };
    };

    let start = (pagination.current_page - 1).saturating_mul(size);
    let visible_products = sorted.into_iter().skip(start).take(size).collect();

    ViewState {
        visible_products,
        total_pages: Some(products.len().div_ceil(size)),
    }
}
