//! Rendering of [`Scene`]s into SVG documents.
//!
//! The renderer walks each scene tree bottom-up and calls exactly one
//! builder per node. Dangling references are reported through `log::warn!`
//! and otherwise left alone, matching the builders' permissive contract.

use indexmap::IndexSet;
use log::{debug, trace, warn};
use svg::Document;

use trellis_core::{
    element::{
        self, CircleOptions, GroupOptions, PathOptions, RectOptions, SvgNode, TextOptions,
    },
    identifier::IdGenerator,
    namespace::url_ref,
};

use crate::{
    config::StyleConfig,
    scene::{Scene, SceneNode},
    TrellisError,
};

/// Prefix of ids generated for clip paths declared without one.
const CLIP_PATH_ID_PREFIX: &str = "clip";

/// Converts scenes into SVG documents.
///
/// A renderer is single-use: generated ids and reference tracking are scoped
/// to one [`render`](SceneRenderer::render) call.
#[derive(Debug)]
pub struct SceneRenderer<'a> {
    style: &'a StyleConfig,
    clip_ids: IdGenerator,
    declared: IndexSet<String>,
    referenced: IndexSet<String>,
}

impl<'a> SceneRenderer<'a> {
    /// Creates a renderer applying `style` defaults.
    pub fn new(style: &'a StyleConfig) -> Self {
        Self {
            style,
            clip_ids: IdGenerator::new(CLIP_PATH_ID_PREFIX),
            declared: IndexSet::new(),
            referenced: IndexSet::new(),
        }
    }

    /// Renders `scene` into a document.
    ///
    /// # Errors
    ///
    /// Returns [`TrellisError::Config`] when the style configuration is
    /// invalid.
    pub fn render(mut self, scene: &Scene) -> Result<Document, TrellisError> {
        debug!(nodes = scene.node_count(); "Rendering scene");

        let mut document = element::create_svg();

        if let Some(width) = scene.width() {
            document = document.set("width", width);
        }
        if let Some(height) = scene.height() {
            document = document.set("height", height);
        }

        let background = self
            .style
            .background_color()
            .map_err(TrellisError::Config)?;
        if let Some(color) = background {
            document = document.set("style", format!("background-color: {color}"));
        }

        for node in scene.nodes() {
            document = document.add(self.build_node(node));
        }

        self.report_dangling_references();
        debug!(
            declared_ids = self.declared.len(),
            generated_clip_ids = self.clip_ids.generated();
            "Scene rendered"
        );
        Ok(document)
    }

    /// Returns the ids referenced by `use` nodes or group clip paths that no
    /// node declared.
    fn dangling_references(&self) -> impl Iterator<Item = &String> {
        self.referenced
            .iter()
            .filter(|id| !self.declared.contains(*id))
    }

    fn report_dangling_references(&self) {
        for id in self.dangling_references() {
            warn!(id = id.as_str(); "Reference to undeclared id renders nothing");
        }
    }

    fn build_children(&mut self, children: &[SceneNode]) -> Vec<SvgNode> {
        children.iter().map(|child| self.build_node(child)).collect()
    }

    fn declare(&mut self, id: &str) {
        if !self.declared.insert(id.to_string()) {
            warn!(id; "Duplicate element id");
        }
    }

    fn build_node(&mut self, node: &SceneNode) -> SvgNode {
        trace!(kind = node.kind(); "Building node");

        match node {
            SceneNode::Group {
                children,
                translate,
                clip_path,
            } => {
                let children = self.build_children(children).into_iter().map(Some).collect();
                let mut group = element::create_g(GroupOptions {
                    children,
                    translate: *translate,
                });
                if let Some(id) = clip_path {
                    self.referenced.insert(id.clone());
                    group = group.set("clip-path", url_ref(id));
                }
                Box::new(group)
            }
            SceneNode::Text {
                content,
                fill,
                font,
                anchor,
                translate,
            } => {
                let font = font
                    .clone()
                    .or_else(|| self.style.font().map(str::to_string));
                element::create_text(TextOptions {
                    fill: fill.clone(),
                    font,
                    anchor: *anchor,
                    translate: *translate,
                    ..TextOptions::new(content.as_str())
                })
                .into()
            }
            SceneNode::Circle { radius, id, fill } => {
                if let Some(id) = id.as_deref().filter(|id| !id.is_empty()) {
                    self.declare(id);
                }
                Box::new(element::create_circle(CircleOptions {
                    radius: *radius,
                    id: id.clone(),
                    fill: fill.clone(),
                }))
            }
            SceneNode::Rect {
                width,
                height,
                border_radius,
                fill,
                stroke,
            } => Box::new(element::create_rect(RectOptions {
                width: *width,
                height: *height,
                border_radius: *border_radius,
                fill: fill.clone(),
                stroke: stroke.clone(),
            })),
            SceneNode::Path {
                d,
                fill,
                stroke,
                stroke_width,
                translate,
            } => Box::new(element::create_path(PathOptions {
                d: d.clone(),
                fill: fill.clone(),
                stroke: stroke.clone(),
                stroke_width: *stroke_width,
                translate: *translate,
            })),
            SceneNode::Use { href } => {
                self.referenced.insert(href.clone());
                Box::new(element::create_use(href))
            }
            SceneNode::ClipPath { id, children } => {
                let id = id.clone().unwrap_or_else(|| self.clip_ids.next_id());
                self.declare(&id);
                let clip = self
                    .build_children(children)
                    .into_iter()
                    .fold(element::create_clip_path().set("id", id), |clip, child| {
                        clip.add(child)
                    });
                Box::new(clip)
            }
            SceneNode::Defs { children } => {
                Box::new(element::create_defs(self.build_children(children)))
            }
        }
    }
}
