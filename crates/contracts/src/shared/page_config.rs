use crate::domain::a001_category_filter::ALL_TAG;
use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashSet;

/// Page content and ambient settings.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct PageConfig {
    pub title: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Label of the button that shows every category.
    #[serde(default = "default_all_label")]
    pub all_label: String,
    pub categories: Vec<CategoryConfig>,
    #[serde(default)]
    pub blocks: Vec<CategoryBlock>,
}

/// One filter button.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CategoryConfig {
    pub tag: String,
    pub label: String,
}

/// One block shown or hidden by the filter.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CategoryBlock {
    pub category: String,
    pub title: String,
    pub body: String,
}

fn default_log_level() -> String {
    "debug".to_string()
}

fn default_all_label() -> String {
    "All".to_string()
}

/// Default page content embedded in the bundle
pub const DEFAULT_PAGE_CONFIG: &str = r#"
{
    "title": "Filler material",
    "log_level": "debug",
    "all_label": "All",
    "categories": [
        { "tag": "paper", "label": "Paper" },
        { "tag": "foam", "label": "Foam" },
        { "tag": "air", "label": "Air cushions" }
    ],
    "blocks": [
        {
            "category": "paper",
            "title": "Crumpled kraft paper",
            "body": "Recyclable and sturdy, suited to heavy items and irregular shapes."
        },
        {
            "category": "paper",
            "title": "Shredded paper",
            "body": "Soft bedding for small, light goods and gift boxes."
        },
        {
            "category": "foam",
            "title": "Loose fill peanuts",
            "body": "Flows around the contents and fills every corner of the box."
        },
        {
            "category": "foam",
            "title": "Foam sheets",
            "body": "Thin layers that protect polished and painted surfaces."
        },
        {
            "category": "air",
            "title": "Air pillows",
            "body": "Very light void fill that keeps shipping weight down."
        }
    ]
}
"#;

impl PageConfig {
    /// Parse and validate a page configuration.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let config: PageConfig =
            serde_json::from_str(json).context("failed to parse page configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// The configuration embedded in the bundle.
    pub fn load_default() -> anyhow::Result<Self> {
        Self::from_json(DEFAULT_PAGE_CONFIG)
    }

    fn validate(&self) -> anyhow::Result<()> {
        if self.categories.is_empty() {
            bail!("page configuration declares no categories");
        }

        let mut seen = HashSet::new();
        for category in &self.categories {
            let tag = category.tag.as_str();
            if tag.trim().is_empty() {
                bail!("category '{}' has an empty tag", category.label);
            }
            if tag == ALL_TAG {
                bail!("category tag '{ALL_TAG}' is reserved");
            }
            if !seen.insert(tag) {
                bail!("duplicate category tag '{tag}'");
            }
        }

        for block in &self.blocks {
            if !seen.contains(block.category.as_str()) {
                bail!(
                    "block '{}' refers to unknown category '{}'",
                    block.title,
                    block.category
                );
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = PageConfig::load_default();
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.categories.len(), 3);
        assert_eq!(config.all_label, "All");
        assert!(config.blocks.iter().any(|b| b.category == "air"));
    }

    #[test]
    fn test_defaults_applied() {
        let config = PageConfig::from_json(
            r#"{ "title": "t", "categories": [ { "tag": "a", "label": "A" } ] }"#,
        )
        .unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.all_label, "All");
        assert!(config.blocks.is_empty());
    }

    #[test]
    fn test_rejects_reserved_tag() {
        let err = PageConfig::from_json(
            r#"{ "title": "t", "categories": [ { "tag": "all", "label": "All" } ] }"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("reserved"));
    }

    #[test]
    fn test_rejects_duplicate_tag() {
        let err = PageConfig::from_json(
            r#"{ "title": "t", "categories": [
                { "tag": "a", "label": "A" },
                { "tag": "a", "label": "B" }
            ] }"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("duplicate"));
    }

    #[test]
    fn test_rejects_unknown_block_category() {
        let err = PageConfig::from_json(
            r#"{ "title": "t",
                 "categories": [ { "tag": "a", "label": "A" } ],
                 "blocks": [ { "category": "b", "title": "x", "body": "y" } ] }"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("unknown category"));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = PageConfig::from_json("{ not json").unwrap_err();
        assert!(err.to_string().contains("failed to parse"));
    }

    #[test]
    fn test_rejects_empty_categories() {
        assert!(PageConfig::from_json(r#"{ "title": "t", "categories": [] }"#).is_err());
    }
}
