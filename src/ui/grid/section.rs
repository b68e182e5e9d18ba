//! Product grid page section.
//!
//! Combines the engine with the route and section settings into the data
//! the rendering layer needs for one render pass.

use std::num::NonZeroUsize;
use std::sync::Arc;

use serde::Serialize;

use crate::analytics::ImpressionTracker;
use crate::catalog::{Collection, Product};
use crate::config::GridConfig;
use crate::router::Router;

use super::engine::ListViewEngine;
use super::sort::{SortKey, SortOption, SORT_OPTIONS};
use super::view::Pagination;

/// Items at the top of the grid whose images load immediately.
pub const EAGER_IMAGE_COUNT: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageLoading {
    Eager,
    Lazy,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridItem {
    pub product: Product,
    pub image_loading: ImageLoading,
}

/// Section heading. A hidden heading is still exposed to assistive
/// technology.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionHeading {
    pub text: String,
    pub visually_hidden: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaginationControl {
    pub total_pages: usize,
    pub current_page: usize,
}

/// Everything one render of the section shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridRender {
    pub heading: SectionHeading,
    pub sort_options: &'static [SortOption],
    pub selected_sort: SortKey,
    pub items: Vec<GridItem>,
    pub pagination: Option<PaginationControl>,
}

pub struct GridSection {
    engine: ListViewEngine,
    page_size: Option<NonZeroUsize>,
    show_title: bool,
}

impl GridSection {
    pub fn new(config: &GridConfig, tracker: Arc<dyn ImpressionTracker>) -> Self {
        Self {
            engine: ListViewEngine::new(tracker),
            page_size: config.page_size(),
            show_title: config.show_title,
        }
    }

    pub fn engine(&self) -> &ListViewEngine {
        &self.engine
    }

    pub fn select_sort(&mut self, sort: SortKey) {
        self.engine.set_sort(sort);
    }

    pub fn render<R: Router + ?Sized>(&mut self, collection: &Arc<Collection>, router: &R) -> GridRender {
        let pagination = Pagination::from_query(router.query(), self.page_size);
        let view = self.engine.view(collection, pagination);

        let items = view
            .visible_products
            .iter()
            .enumerate()
            .map(|(index, product)| GridItem {
                product: product.clone(),
                image_loading: if index < EAGER_IMAGE_COUNT {
                    ImageLoading::Eager
                } else {
                    ImageLoading::Lazy
                },
            })
            .collect();

        let control = view
            .total_pages
            .filter(|total| *total > 0)
            .map(|total_pages| PaginationControl {
                total_pages,
                current_page: pagination.current_page(),
            });

        GridRender {
            heading: SectionHeading {
                text: collection.name.clone(),
                visually_hidden: !self.show_title,
            },
            sort_options: SORT_OPTIONS,
            selected_sort: self.engine.sort(),
            items,
            pagination: control,
        }
    }

    /// Move to `page` by pushing a shallow query update to the router.
    pub fn change_page<R: Router + ?Sized>(&self, router: &mut R, page: usize) {
        let intent = self.engine.request_page_change(&*router, page);
        router.push(intent);
    }
}
