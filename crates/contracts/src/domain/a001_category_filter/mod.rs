//! Category filter: which filter button is active and which category
//! blocks are shown.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sentinel tag of the button that shows every category block.
pub const ALL_TAG: &str = "all";

/// Tag carried by a filter button.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FilterTag {
    #[default]
    All,
    Category(String),
}

impl FilterTag {
    /// Parse the raw `data-filter` value of a button.
    pub fn parse(raw: &str) -> Self {
        if raw == ALL_TAG {
            Self::All
        } else {
            Self::Category(raw.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::All => ALL_TAG,
            Self::Category(tag) => tag,
        }
    }

    /// A block tagged `category` is shown iff this tag is `all` or equal to it.
    pub fn shows(&self, category: &str) -> bool {
        match self {
            Self::All => true,
            Self::Category(tag) => tag == category,
        }
    }
}

impl From<String> for FilterTag {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<FilterTag> for String {
    fn from(tag: FilterTag) -> Self {
        tag.as_str().to_string()
    }
}

impl fmt::Display for FilterTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The single active filter. Starts on `all`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterSelection {
    active: FilterTag,
}

impl FilterSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> &FilterTag {
        &self.active
    }

    /// Make `tag` the active filter, replacing the previous one.
    pub fn select(&mut self, tag: FilterTag) {
        self.active = tag;
    }

    /// Whether the button declaring `tag` carries the active marker.
    pub fn is_active(&self, tag: &FilterTag) -> bool {
        &self.active == tag
    }

    /// Whether a block of the given category is visible under the active filter.
    pub fn is_visible(&self, category: &str) -> bool {
        self.active.shows(category)
    }
}
