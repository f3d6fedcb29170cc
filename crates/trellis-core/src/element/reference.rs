//! Symbol references (`<use>`).

use svg::node::element as svg_element;

use crate::namespace::fragment_ref;

/// Attributes that both receive the `#<id>` target of a reference.
///
/// `xlink:href` is deprecated in SVG 2 but still the only form some
/// renderers understand.
pub const REFERENCE_ATTRIBUTES: [&str; 2] = ["href", "xlink:href"];

/// Creates a `<use>` node pointing at the element with id `href`.
///
/// The target is not checked; a reference to a missing id renders nothing.
///
/// # Examples
///
/// ```
/// # use trellis_core::element::create_use;
/// let reference = create_use("abc");
/// let markup = reference.to_string();
/// assert!(markup.contains(r##"href="#abc""##));
/// assert!(markup.contains(r##"xlink:href="#abc""##));
/// ```
pub fn create_use(href: &str) -> svg_element::Use {
    let target = fragment_ref(href);
    REFERENCE_ATTRIBUTES
        .iter()
        .fold(svg_element::Use::new(), |node, name| {
            node.set(*name, target.as_str())
        })
}
