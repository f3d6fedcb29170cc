//! Root drawing surface.

use svg::Document;

use crate::namespace::{SVG_NAMESPACE, XLINK_NAMESPACE};

/// Creates an empty top-level `<svg>` surface.
///
/// The surface carries only its namespace declarations: the SVG namespace and
/// the XLink namespace that [`create_use`](super::create_use) relies on for its
/// legacy reference attribute.
pub fn create_svg() -> Document {
    Document::new()
        .set("xmlns", SVG_NAMESPACE)
        .set("xmlns:xlink", XLINK_NAMESPACE)
}
