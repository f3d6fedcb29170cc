//! Grouping nodes: `<g>`, `<defs>` and `<clipPath>`.

use svg::node::element as svg_element;

use crate::{element::SvgNode, geometry::Point};

/// Options for [`create_g`].
#[derive(Debug, Default)]
pub struct GroupOptions {
    /// Children in document order. `None` entries are skipped.
    pub children: Vec<Option<SvgNode>>,
    /// Offset applied to the group's coordinate space.
    pub translate: Option<Point>,
}

/// Creates a `<g>` holding the given children.
///
/// `Some` children are appended in input order; `None` entries are dropped
/// without leaving a gap. A translation adds `transform="translate(x, y)"`.
pub fn create_g(options: GroupOptions) -> svg_element::Group {
    let mut group = svg_element::Group::new();

    for child in options.children.into_iter().flatten() {
        group = group.add(child);
    }

    if let Some(translate) = options.translate {
        group = group.set("transform", translate.to_translate());
    }

    group
}

/// Creates an empty `<clipPath>`.
///
/// Clip shapes are attached by the caller after construction.
pub fn create_clip_path() -> svg_element::ClipPath {
    svg_element::ClipPath::new()
}

/// Creates a `<defs>` pool holding every given child in order.
///
/// Unlike [`create_g`], children are not optional and none are filtered.
pub fn create_defs(children: Vec<SvgNode>) -> svg_element::Definitions {
    children
        .into_iter()
        .fold(svg_element::Definitions::new(), |defs, child| defs.add(child))
}
