//! Intents for the product grid section.

use crate::ui::mvi::Intent;

use super::sort::SortKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridIntent {
    /// User picked an entry in the sort select.
    SortSelected(SortKey),
    /// Back to the default order.
    ResetSort,
}

impl Intent for GridIntent {}
