//! Product grid feature module.
//!
//! Sorting and pagination of a product collection, and the derived view
//! the grid section renders.
//!
//! # Architecture
//!
//! - `sort.rs` - Sort keys and the pure sort
//! - `view.rs` - Pagination and `compute_view`
//! - `state.rs` / `intent.rs` / `reducer.rs` - Sort selection (MVI)
//! - `engine.rs` - Dependency-tracked view with impression reporting
//! - `section.rs` - Render data for the grid section

mod engine;
mod intent;
mod reducer;
mod section;
mod sort;
mod state;
mod view;

pub use engine::ListViewEngine;
pub use intent::GridIntent;
pub use reducer::GridReducer;
pub use section::{
    GridItem, GridRender, GridSection, ImageLoading, PaginationControl, SectionHeading,
    EAGER_IMAGE_COUNT,
};
pub use sort::{sort_products, SortKey, SortOption, SORT_OPTIONS};
pub use state::GridState;
pub use view::{compute_view, Pagination, ViewState};
