//! Dependency-tracked product list view.
//!
//! [`ListViewEngine`] memoizes [`compute_view`] on its dependency set:
//! collection identity, current page, page size and sort key. Calling
//! [`ListViewEngine::view`] with the same dependencies returns the cached
//! view without recomputing or notifying analytics.

use std::sync::Arc;

use crate::analytics::ImpressionTracker;
use crate::catalog::Collection;
use crate::router::{NavigationIntent, Router};
use crate::ui::mvi::Reducer;

use super::intent::GridIntent;
use super::reducer::GridReducer;
use super::sort::SortKey;
use super::state::GridState;
use super::view::{compute_view, Pagination, ViewState};

/// Inputs the cached view was computed from.
#[derive(Debug, Clone)]
struct ViewDeps {
    collection: Arc<Collection>,
    pagination: Pagination,
    sort: SortKey,
}

impl ViewDeps {
    /// Collections compare by identity, not by content.
    fn matches(&self, collection: &Arc<Collection>, pagination: Pagination, sort: SortKey) -> bool {
        Arc::ptr_eq(&self.collection, collection)
            && self.pagination == pagination
            && self.sort == sort
    }
}

pub struct ListViewEngine {
    state: GridState,
    deps: Option<ViewDeps>,
    view: ViewState,
    recomputations: u64,
    tracker: Arc<dyn ImpressionTracker>,
}

impl ListViewEngine {
    pub fn new(tracker: Arc<dyn ImpressionTracker>) -> Self {
        Self {
            state: GridState::default(),
            deps: None,
            view: ViewState::default(),
            recomputations: 0,
            tracker,
        }
    }

    pub fn state(&self) -> GridState {
        self.state
    }

    pub fn sort(&self) -> SortKey {
        self.state.sort
    }

    pub fn dispatch(&mut self, intent: GridIntent) {
        self.state = GridReducer::reduce(self.state, intent);
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        self.dispatch(GridIntent::SortSelected(sort));
    }

    /// Number of times the view was actually recomputed.
    pub fn recomputations(&self) -> u64 {
        self.recomputations
    }

    /// The view for `collection` at `pagination`, using the current sort.
    ///
    /// Recomputes only when a dependency changed. A recomputed page that
    /// differs from the previous one and is not empty is reported to the
    /// impression tracker.
    pub fn view(&mut self, collection: &Arc<Collection>, pagination: Pagination) -> &ViewState {
        let sort = self.state.sort;
        let fresh = self
            .deps
            .as_ref()
            .is_some_and(|deps| deps.matches(collection, pagination, sort));

        if !fresh {
            self.recompute(collection, pagination, sort);
        }

        &self.view
    }

    /// Describe the route change for moving to 1-based `page`.
    ///
    /// Nothing is navigated here; the caller pushes the intent.
    pub fn request_page_change<R: Router + ?Sized>(&self, router: &R, page: usize) -> NavigationIntent {
        NavigationIntent::page(router.pathname(), page.max(1))
    }

    fn recompute(&mut self, collection: &Arc<Collection>, pagination: Pagination, sort: SortKey) {
        let view = compute_view(&collection.products, sort, pagination);
        self.recomputations += 1;

        tracing::debug!(
            collection = %collection.name,
            sort = %sort,
            page = pagination.current_page(),
            page_size = ?pagination.page_size(),
            visible = view.visible_products.len(),
            total_pages = ?view.total_pages,
            "recomputed grid view"
        );

        let changed = view.visible_products != self.view.visible_products;
        if changed && !view.is_empty() {
            self.tracker
                .track_product_list_impressions(&view.visible_products);
        }

        self.view = view;
        self.deps = Some(ViewDeps {
            collection: Arc::clone(collection),
            pagination,
            sort,
        });
    }
}
