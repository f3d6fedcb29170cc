//! Leaf shapes: `<circle>`, `<rect>` and `<path>`.
//!
//! Dimensions are passed through without validation. A negative radius or
//! width ends up in the markup as given and rendering it is up to the host.

use svg::node::element as svg_element;

use super::{non_empty, non_zero};
use crate::geometry::Point;

/// Fill applied to a rectangle whose fill option is present but empty.
pub const TRANSPARENT: &str = "transparent";

/// Options for [`create_circle`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CircleOptions {
    /// Radius; also used for both center coordinates.
    pub radius: f32,
    /// Element id, the target of [`create_use`](super::create_use) references.
    pub id: Option<String>,
    /// Fill color.
    pub fill: Option<String>,
}

/// Options for [`create_rect`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RectOptions {
    pub width: f32,
    pub height: f32,
    /// Corner radius (`rx`). Zero is treated as unset.
    pub border_radius: Option<f32>,
    /// Fill color. `Some("")` renders as [`TRANSPARENT`].
    pub fill: Option<String>,
    /// Stroke color.
    pub stroke: Option<String>,
}

/// Options for [`create_path`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathOptions {
    /// Path data, copied verbatim into `d`.
    pub d: String,
    pub fill: Option<String>,
    pub stroke: Option<String>,
    pub stroke_width: Option<f32>,
    /// Offset applied through a `transform` attribute.
    pub translate: Option<Point>,
}

/// Creates a `<circle>` whose bounding box starts at the origin.
///
/// The center is placed at `(radius, radius)`.
///
/// # Examples
///
/// ```
/// # use trellis_core::element::{create_circle, CircleOptions};
/// let circle = create_circle(CircleOptions {
///     radius: 5.0,
///     id: Some("c1".to_string()),
///     fill: Some("red".to_string()),
/// });
/// assert!(circle.to_string().contains(r#"cx="5""#));
/// ```
pub fn create_circle(options: CircleOptions) -> svg_element::Circle {
    let mut circle = svg_element::Circle::new()
        .set("cx", options.radius)
        .set("cy", options.radius)
        .set("r", options.radius);

    if let Some(id) = non_empty(&options.id) {
        circle = circle.set("id", id);
    }

    if let Some(fill) = non_empty(&options.fill) {
        circle = circle.set("fill", fill);
    }

    circle
}

/// Creates a `<rect>` anchored at the origin.
///
/// `width` and `height` are always set. `rx` is only set for a non-zero
/// corner radius. A present fill is always written, falling back to
/// [`TRANSPARENT`] when the value is empty.
pub fn create_rect(options: RectOptions) -> svg_element::Rectangle {
    let mut rect = svg_element::Rectangle::new()
        .set("width", options.width)
        .set("height", options.height);

    if let Some(radius) = non_zero(options.border_radius) {
        rect = rect.set("rx", radius);
    }

    if let Some(fill) = options.fill.as_deref() {
        let fill = if fill.is_empty() { TRANSPARENT } else { fill };
        rect = rect.set("fill", fill);
    }

    if let Some(stroke) = non_empty(&options.stroke) {
        rect = rect.set("stroke", stroke);
    }

    rect
}

/// Creates a `<path>` from raw path data.
///
/// The data is not parsed or checked.
pub fn create_path(options: PathOptions) -> svg_element::Path {
    let mut path = svg_element::Path::new().set("d", options.d.as_str());

    if let Some(fill) = non_empty(&options.fill) {
        path = path.set("fill", fill);
    }

    if let Some(stroke) = non_empty(&options.stroke) {
        path = path.set("stroke", stroke);
    }

    if let Some(width) = non_zero(options.stroke_width) {
        path = path.set("stroke-width", width);
    }

    if let Some(translate) = options.translate {
        path = path.set("transform", translate.to_translate());
    }

    path
}
