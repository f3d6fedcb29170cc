//! Declarative scene descriptions.
//!
//! A scene is a TOML document listing nodes in document order. Every node
//! maps onto exactly one builder from [`trellis_core::element`]; container
//! kinds nest their children inline.
//!
//! ```toml
//! width = 120
//! height = 80
//!
//! [[nodes]]
//! kind = "defs"
//! children = [{ kind = "circle", radius = 5, id = "dot", fill = "red" }]
//!
//! [[nodes]]
//! kind = "group"
//! translate = { x = 3, y = 4 }
//! children = [{ kind = "use", href = "dot" }, { kind = "text", content = "hi" }]
//! ```

use log::debug;
use serde::Deserialize;

use trellis_core::{
    element::TextAnchor,
    geometry::{Point, deserialize_finite, deserialize_finite_opt},
};

use crate::TrellisError;

/// A parsed scene: optional document size and the top-level nodes.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scene {
    #[serde(default, deserialize_with = "deserialize_finite_opt")]
    width: Option<f32>,
    #[serde(default, deserialize_with = "deserialize_finite_opt")]
    height: Option<f32>,
    #[serde(default)]
    nodes: Vec<SceneNode>,
}

impl Scene {
    /// Creates a scene from its parts.
    pub fn new(width: Option<f32>, height: Option<f32>, nodes: Vec<SceneNode>) -> Self {
        Self {
            width,
            height,
            nodes,
        }
    }

    /// Parses a scene from TOML source.
    ///
    /// # Errors
    ///
    /// Returns [`TrellisError::Parse`] when the source is not valid TOML or
    /// does not describe a scene.
    pub fn from_toml(source: &str) -> Result<Self, TrellisError> {
        let scene: Scene =
            toml::from_str(source).map_err(|err| TrellisError::new_parse_error(err, source))?;
        debug!(nodes = scene.nodes.len(); "Scene parsed");
        Ok(scene)
    }

    /// Returns the document width, if declared.
    pub fn width(&self) -> Option<f32> {
        self.width
    }

    /// Returns the document height, if declared.
    pub fn height(&self) -> Option<f32> {
        self.height
    }

    /// Returns the top-level nodes in document order.
    pub fn nodes(&self) -> &[SceneNode] {
        &self.nodes
    }

    /// Returns the total number of nodes, nested ones included.
    pub fn node_count(&self) -> usize {
        self.nodes.iter().map(SceneNode::node_count).sum()
    }
}

/// One node of a scene, tagged by `kind`.
///
/// Fields mirror the options of the matching builder. Unknown fields are
/// rejected so a misspelled option fails instead of silently dropping its
/// attribute. Numbers must fit in a finite `f32`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case", deny_unknown_fields)]
pub enum SceneNode {
    Group {
        #[serde(default)]
        children: Vec<SceneNode>,
        #[serde(default)]
        translate: Option<Point>,
        /// Id of a clip path applied to the group.
        #[serde(default)]
        clip_path: Option<String>,
    },
    Text {
        content: String,
        #[serde(default)]
        fill: Option<String>,
        #[serde(default)]
        font: Option<String>,
        #[serde(default)]
        anchor: Option<TextAnchor>,
        #[serde(default)]
        translate: Option<Point>,
    },
    Circle {
        #[serde(deserialize_with = "deserialize_finite")]
        radius: f32,
        #[serde(default)]
        id: Option<String>,
        #[serde(default)]
        fill: Option<String>,
    },
    Rect {
        #[serde(deserialize_with = "deserialize_finite")]
        width: f32,
        #[serde(deserialize_with = "deserialize_finite")]
        height: f32,
        #[serde(default, deserialize_with = "deserialize_finite_opt")]
        border_radius: Option<f32>,
        #[serde(default)]
        fill: Option<String>,
        #[serde(default)]
        stroke: Option<String>,
    },
    Path {
        d: String,
        #[serde(default)]
        fill: Option<String>,
        #[serde(default)]
        stroke: Option<String>,
        #[serde(default, deserialize_with = "deserialize_finite_opt")]
        stroke_width: Option<f32>,
        #[serde(default)]
        translate: Option<Point>,
    },
    Use {
        href: String,
    },
    ClipPath {
        /// Generated when absent.
        #[serde(default)]
        id: Option<String>,
        #[serde(default)]
        children: Vec<SceneNode>,
    },
    Defs {
        #[serde(default)]
        children: Vec<SceneNode>,
    },
}

impl SceneNode {
    /// Returns the `kind` tag of this node.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Group { .. } => "group",
            Self::Text { .. } => "text",
            Self::Circle { .. } => "circle",
            Self::Rect { .. } => "rect",
            Self::Path { .. } => "path",
            Self::Use { .. } => "use",
            Self::ClipPath { .. } => "clip-path",
            Self::Defs { .. } => "defs",
        }
    }

    /// Returns the nested children of container kinds, empty for leaves.
    pub fn children(&self) -> &[SceneNode] {
        match self {
            Self::Group { children, .. }
            | Self::ClipPath { children, .. }
            | Self::Defs { children } => children,
            _ => &[],
        }
    }

    /// Returns the number of nodes in this subtree, this node included.
    pub fn node_count(&self) -> usize {
        1 + self
            .children()
            .iter()
            .map(SceneNode::node_count)
            .sum::<usize>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_scene() {
        let scene = Scene::from_toml("").unwrap();
        assert_eq!(scene, Scene::default());
        assert_eq!(scene.node_count(), 0);
    }

    #[test]
    fn test_parse_scene_with_size() {
        let scene = Scene::from_toml("width = 120\nheight = 80.5").unwrap();
        assert_eq!(scene.width(), Some(120.0));
        assert_eq!(scene.height(), Some(80.5));
    }

    #[test]
    fn test_parse_every_kind() {
        let source = r##"
            [[nodes]]
            kind = "defs"
            children = [{ kind = "circle", radius = 5, id = "dot", fill = "red" }]

            [[nodes]]
            kind = "clip-path"
            children = [{ kind = "rect", width = 10, height = 10, border_radius = 2 }]

            [[nodes]]
            kind = "group"
            translate = { x = 3, y = 4 }
            clip_path = "frame"
            children = [
                { kind = "use", href = "dot" },
                { kind = "text", content = "hi", anchor = "middle", translate = { x = 1, y = 2 } },
                { kind = "path", d = "M0 0 L5 5", stroke = "#000", stroke_width = 1.5 },
            ]
        "##;
        let scene = Scene::from_toml(source).unwrap();
        let kinds: Vec<_> = scene.nodes().iter().map(SceneNode::kind).collect();
        assert_eq!(kinds, vec!["defs", "clip-path", "group"]);
        assert_eq!(scene.node_count(), 8);

        match &scene.nodes()[2] {
            SceneNode::Group {
                translate,
                clip_path,
                children,
            } => {
                assert_eq!(*translate, Some(Point::new(3.0, 4.0)));
                assert_eq!(clip_path.as_deref(), Some("frame"));
                assert_eq!(
                    children[1],
                    SceneNode::Text {
                        content: "hi".to_string(),
                        fill: None,
                        font: None,
                        anchor: Some(TextAnchor::Middle),
                        translate: Some(Point::new(1.0, 2.0)),
                    }
                );
            }
            other => panic!("Expected group, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_unknown_kind_is_error() {
        let err = Scene::from_toml("[[nodes]]\nkind = \"ellipse\"").unwrap_err();
        assert!(matches!(err, TrellisError::Parse { .. }));
    }

    #[test]
    fn test_parse_missing_required_field_is_error() {
        let err = Scene::from_toml("[[nodes]]\nkind = \"circle\"").unwrap_err();
        match err {
            TrellisError::Parse { message, .. } => assert!(message.contains("radius")),
            other => panic!("Expected Parse, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_invalid_anchor_is_error() {
        let source = "[[nodes]]\nkind = \"text\"\ncontent = \"x\"\nanchor = \"center\"";
        assert!(Scene::from_toml(source).is_err());
    }

    #[test]
    fn test_parse_misspelled_option_is_error() {
        let source = r#"nodes = [{ kind = "rect", width = 1, height = 1, fil = "red" }]"#;
        match Scene::from_toml(source).unwrap_err() {
            TrellisError::Parse { message, .. } => assert!(message.contains("fil")),
            other => panic!("Expected Parse, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_kebab_case_option_is_error() {
        let source = r#"nodes = [{ kind = "rect", width = 1, height = 1, border-radius = 3 }]"#;
        assert!(matches!(
            Scene::from_toml(source),
            Err(TrellisError::Parse { .. })
        ));
    }

    #[test]
    fn test_parse_unknown_group_field_is_error() {
        let source = r#"nodes = [{ kind = "group", transform = "scale(2)" }]"#;
        assert!(Scene::from_toml(source).is_err());
    }

    #[test]
    fn test_parse_out_of_range_number_is_error() {
        let source = r#"nodes = [{ kind = "circle", radius = 1e39 }]"#;
        match Scene::from_toml(source).unwrap_err() {
            TrellisError::Parse { message, span, .. } => {
                assert!(message.contains("outside the supported range"));
                assert!(span.is_some());
            }
            other => panic!("Expected Parse, got {other:?}"),
        }

        assert!(Scene::from_toml("width = 1e39").is_err());
        let translated = r#"nodes = [{ kind = "group", translate = { x = -1e39, y = 0 } }]"#;
        assert!(Scene::from_toml(translated).is_err());
    }

    #[test]
    fn test_parse_large_integer_rounds_to_f32() {
        let scene = Scene::from_toml("width = 16777217").unwrap();
        assert_eq!(scene.width(), Some(16_777_216.0));
    }

    #[test]
    fn test_parse_error_has_span() {
        let err = Scene::from_toml("width = ").unwrap_err();
        match err {
            TrellisError::Parse { span, .. } => assert!(span.is_some()),
            other => panic!("Expected Parse, got {other:?}"),
        }
    }
}
