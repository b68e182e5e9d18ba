//! Local state of the product grid section.

use crate::ui::mvi::UiState;

use super::sort::SortKey;

/// User-controlled grid settings. The page number lives in the route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GridState {
    pub sort: SortKey,
}

impl UiState for GridState {}
