//! Configuration types for Trellis scene rendering.
//!
//! This module provides configuration structures that control how scenes
//! are styled. All types implement [`serde::Deserialize`] for flexible
//! loading from external sources.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level application configuration.
//! - [`StyleConfig`] - Visual defaults such as background color and font.
//!
//! # Example
//!
//! ```
//! # use trellis::config::AppConfig;
//! let config: AppConfig = toml::from_str(r#"
//!     [style]
//!     background_color = "white"
//!     font = "12px monospace"
//! "#).unwrap();
//! assert!(config.style().background_color().unwrap().is_some());
//! assert_eq!(config.style().font(), Some("12px monospace"));
//! ```

use serde::Deserialize;

use trellis_core::color::Color;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified style configuration.
    pub fn new(style: StyleConfig) -> Self {
        Self { style }
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// Visual styling configuration for rendered scenes.
///
/// Fields that are not set leave the markup untouched.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct StyleConfig {
    /// Background [`Color`] of the root surface, as a color string.
    #[serde(default)]
    background_color: Option<String>,

    /// Font shorthand for text nodes that do not declare their own.
    #[serde(default)]
    font: Option<String>,
}

impl StyleConfig {
    /// Creates a new [`StyleConfig`].
    ///
    /// # Arguments
    ///
    /// * `background_color` - CSS color for the document background.
    /// * `font` - Default CSS font shorthand for text.
    pub fn new(background_color: Option<String>, font: Option<String>) -> Self {
        Self {
            background_color,
            font,
        }
    }

    /// Returns the parsed background [`Color`], or `None` if no color is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed
    /// into a valid [`Color`].
    pub fn background_color(&self) -> Result<Option<Color>, String> {
        self.background_color
            .as_ref()
            .map(|color| Color::new(color))
            .transpose()
            .map_err(|err| format!("Invalid background color in config: {err}"))
    }

    /// Returns the default font, if configured.
    pub fn font(&self) -> Option<&str> {
        self.font.as_deref()
    }
}
