//! Trellis - declarative SVG scene construction.
//!
//! Scenes are described in TOML and rendered through the node builders of
//! [`trellis_core::element`]. The builders are re-exported for callers that
//! assemble nodes programmatically.

pub mod config;
pub mod scene;

mod error;
mod render;

pub use trellis_core::{color, element, event, geometry, identifier, namespace};

pub use error::TrellisError;
pub use render::SceneRenderer;

use log::{debug, info, trace};

use config::AppConfig;
use scene::Scene;

/// Builder for parsing and rendering Trellis scenes.
///
/// # Examples
///
/// ```rust
/// use trellis::{SceneBuilder, config::AppConfig};
///
/// let source = r#"
///     [[nodes]]
///     kind = "circle"
///     radius = 5
/// "#;
///
/// let builder = SceneBuilder::new(AppConfig::default());
/// let scene = builder.parse(source).expect("Failed to parse");
/// let svg = builder.render_svg(&scene).expect("Failed to render");
/// assert!(svg.contains("<circle"));
/// ```
#[derive(Debug, Default)]
pub struct SceneBuilder {
    config: AppConfig,
}

impl SceneBuilder {
    /// Create a new scene builder with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration including style settings
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Parse TOML source into a scene.
    ///
    /// # Errors
    ///
    /// Returns [`TrellisError::Parse`] for malformed TOML or unknown node kinds.
    pub fn parse(&self, source: &str) -> Result<Scene, TrellisError> {
        info!("Parsing scene");

        let scene = Scene::from_toml(source)?;

        debug!(nodes = scene.node_count(); "Scene parsed successfully");
        trace!(scene:?; "Parsed scene");

        Ok(scene)
    }

    /// Render a scene to an SVG string.
    ///
    /// # Errors
    ///
    /// Returns [`TrellisError::Config`] if the style configuration is invalid.
    pub fn render_svg(&self, scene: &Scene) -> Result<String, TrellisError> {
        let document = SceneRenderer::new(self.config.style()).render(scene)?;
        let svg = document.to_string();

        info!(bytes = svg.len(); "SVG rendered successfully");
        Ok(svg)
    }
}
