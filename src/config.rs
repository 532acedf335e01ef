//! Validated configuration for windowed lists.
//!
//! [`ListConfig`] collects the numbers a list needs and checks them once, so
//! values coming from user settings or a config file can be rejected with a
//! [`ConfigError`] instead of producing a broken layout.
//!
//! ```rust
//! use bubbletea_windowed_list::config::{ConfigError, ListConfig};
//!
//! let config = ListConfig {
//!     item_height: 2,
//!     container_height: 20,
//!     ..ListConfig::default()
//! };
//! assert!(config.validate().is_ok());
//!
//! let broken = ListConfig { item_height: 0, ..ListConfig::default() };
//! assert_eq!(broken.validate(), Err(ConfigError::ZeroItemHeight));
//! ```

use thiserror::Error;

/// Placeholder shown when a list has no items.
pub const DEFAULT_EMPTY_MESSAGE: &str = "No items.";

/// Rejected configuration values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Every item must occupy at least one row.
    #[error("item height must be at least one row")]
    ZeroItemHeight,
    /// The list must have at least one visible row.
    #[error("container height must be at least one row")]
    ZeroContainerHeight,
}

/// Settings for a windowed list.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ListConfig {
    /// Rows occupied by each item.
    pub item_height: usize,
    /// Visible rows.
    pub container_height: usize,
    /// Extra items materialized beyond each visible edge.
    pub overscan: usize,
    /// Column budget for each row. Zero leaves rows unclipped.
    pub width: usize,
    /// Draw a one-column scrollbar on the right edge.
    pub show_scrollbar: bool,
    /// Follow terminal resizes.
    pub auto_size: bool,
    /// Placeholder text for an empty list.
    pub empty_message: String,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            item_height: 1,
            container_height: 10,
            overscan: 3,
            width: 0,
            show_scrollbar: false,
            auto_size: false,
            empty_message: DEFAULT_EMPTY_MESSAGE.to_string(),
        }
    }
}

impl ListConfig {
    /// Checks that the layout numbers are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.item_height == 0 {
            return Err(ConfigError::ZeroItemHeight);
        }
        if self.container_height == 0 {
            return Err(ConfigError::ZeroContainerHeight);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = ListConfig::default();
        assert_eq!(config.item_height, 1);
        assert_eq!(config.overscan, 3);
        assert_eq!(config.empty_message, "No items.");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_heights_are_rejected() {
        let config = ListConfig {
            container_height: 0,
            ..ListConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroContainerHeight));
        assert_eq!(
            ConfigError::ZeroItemHeight.to_string(),
            "item height must be at least one row"
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_partial_config_deserializes_with_defaults() {
        let config: ListConfig =
            serde_json::from_str(r#"{ "item_height": 3, "show_scrollbar": true }"#).unwrap();
        assert_eq!(config.item_height, 3);
        assert!(config.show_scrollbar);
        assert_eq!(config.container_height, 10);
        assert_eq!(config.empty_message, DEFAULT_EMPTY_MESSAGE);
    }
}
