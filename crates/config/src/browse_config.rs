//! Browse view configuration section

use crate::validation::{ConfigSection, ValidationError, Validator};
use serde::{Deserialize, Serialize};

/// Settings for the catalog browse view
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BrowseConfig {
    /// Books revealed per "show more" invocation
    pub page_size: usize,

    /// Show the cover reference line in the detail overlay
    pub show_covers: bool,
}

impl Default for BrowseConfig {
    fn default() -> Self {
        Self {
            page_size: 36,
            show_covers: true,
        }
    }
}

impl ConfigSection for BrowseConfig {
    fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let results = vec![Validator::in_range(
            self.page_size,
            1,
            100,
            "browse.page_size",
        )];

        Validator::collect_errors(results)
    }

    fn merge(&mut self, other: Self) {
        self.page_size = other.page_size;
        self.show_covers = other.show_covers;
    }

    fn section_name(&self) -> &'static str {
        "browse"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = BrowseConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.page_size, 36);
    }

    #[test]
    fn test_zero_page_size_is_invalid() {
        let config = BrowseConfig {
            page_size: 0,
            ..BrowseConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_oversized_page_size_is_invalid() {
        let config = BrowseConfig {
            page_size: 500,
            ..BrowseConfig::default()
        };
        let errors = config.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "browse.page_size");
    }

    #[test]
    fn test_merge_takes_other() {
        let mut config = BrowseConfig::default();
        config.merge(BrowseConfig {
            page_size: 12,
            show_covers: false,
        });
        assert_eq!(config.page_size, 12);
        assert!(!config.show_covers);
    }
}
