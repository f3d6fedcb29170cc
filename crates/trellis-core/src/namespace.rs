//! XML namespaces and reference formatting shared by the node builders.

/// Namespace of every node produced by the element builders.
pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Namespace of the legacy `xlink:href` reference attribute.
pub const XLINK_NAMESPACE: &str = "http://www.w3.org/1999/xlink";

/// Formats a same-document fragment reference, `#<id>`.
///
/// ```
/// # use trellis_core::namespace::fragment_ref;
/// assert_eq!(fragment_ref("c1"), "#c1");
/// ```
pub fn fragment_ref(id: &str) -> String {
    format!("#{id}")
}

/// Formats a functional IRI reference, `url(#<id>)`, as used by `clip-path`.
pub fn url_ref(id: &str) -> String {
    format!("url(#{id})")
}
