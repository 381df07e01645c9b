use contracts::domain::a001_category_filter::{FilterSelection, FilterTag};
use leptos::prelude::*;

/// ViewModel for the category filter buttons and blocks
#[derive(Clone, Copy)]
pub struct CategoryFilterVm {
    pub selection: RwSignal<FilterSelection>,
}

impl CategoryFilterVm {
    pub fn new() -> Self {
        Self {
            selection: RwSignal::new(FilterSelection::new()),
        }
    }

    /// Button click: make `tag` the only active filter.
    pub fn select(&self, tag: FilterTag) {
        log::debug!("category filter selected: {}", tag);
        self.selection.update(|s| s.select(tag));
    }

    pub fn is_active(&self, tag: &FilterTag) -> bool {
        self.selection.with(|s| s.is_active(tag))
    }

    pub fn is_visible(&self, category: &str) -> bool {
        self.selection.with(|s| s.is_visible(category))
    }
}

impl Default for CategoryFilterVm {
    fn default() -> Self {
        Self::new()
    }
}
