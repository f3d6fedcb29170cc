//! SVG node builders.
//!
//! This module is a flat set of factories, one per SVG node kind. Each factory
//! takes a plain options record, creates a fresh node, applies the attributes
//! whose options are present and hands the node back. Factories keep no state
//! and never touch a node after returning it.
//!
//! # Overview
//!
//! | Builder | Node | Options |
//! |---------|------|---------|
//! | [`create_svg`] | `<svg>` | none |
//! | [`create_g`] | `<g>` | [`GroupOptions`] |
//! | [`create_text`] | `<text>` | [`TextOptions`] |
//! | [`create_circle`] | `<circle>` | [`CircleOptions`] |
//! | [`create_rect`] | `<rect>` | [`RectOptions`] |
//! | [`create_path`] | `<path>` | [`PathOptions`] |
//! | [`create_use`] | `<use>` | target id |
//! | [`create_clip_path`] | `<clipPath>` | none |
//! | [`create_defs`] | `<defs>` | children |
//!
//! # Example
//!
//! ```
//! use trellis_core::{
//!     element::{self, CircleOptions, GroupOptions, SvgNode},
//!     geometry::Point,
//! };
//!
//! let dot = element::create_circle(CircleOptions {
//!     radius: 5.0,
//!     id: Some("c1".to_string()),
//!     ..Default::default()
//! });
//! let reference = element::create_use("c1");
//!
//! let group = element::create_g(GroupOptions {
//!     children: vec![Some(Box::new(dot) as SvgNode), Some(Box::new(reference) as SvgNode)],
//!     translate: Some(Point::new(3.0, 4.0)),
//! });
//! assert_eq!(group.get_children().len(), 2);
//! ```
//!
//! # Optional attributes
//!
//! Optional string and number options follow a truthiness rule: an empty
//! string or a zero/NaN number counts as unset and adds no attribute. The one
//! exception is the rectangle fill, where a present-but-empty value falls back
//! to `transparent`.

mod container;
mod reference;
mod shape;
mod surface;
mod text;

pub use container::{GroupOptions, create_clip_path, create_defs, create_g};
pub use reference::{REFERENCE_ATTRIBUTES, create_use};
pub use shape::{
    CircleOptions, PathOptions, RectOptions, TRANSPARENT, create_circle, create_path, create_rect,
};
pub use surface::create_svg;
pub use text::{CENTERING_ATTRIBUTES, TextAnchor, TextNode, TextOptions, create_text};

/// Type alias for boxed SVG nodes.
pub type SvgNode = Box<dyn svg::Node>;

/// Returns the string option if it is set and non-empty.
fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|value| !value.is_empty())
}

/// Returns the number option if it is set, non-zero and not NaN.
fn non_zero(value: Option<f32>) -> Option<f32> {
    value.filter(|value| *value != 0.0 && !value.is_nan())
}
