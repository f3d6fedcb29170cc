//! Text labels.
//!
//! [`create_text`] produces a [`TextNode`]: the `<text>` element plus the
//! listeners registered through [`TextOptions::on_click`].
//!
//! The label is a plain [`Element`] rather than `svg::node::element::Text`.
//! The typed element prints its content on separate lines, which changes
//! the text under `xml:space="preserve"`; a plain element keeps it inline.

use std::{fmt, ops::Deref, str::FromStr};

use serde::Deserialize;
use svg::{
    Node,
    node::{self, element::Element},
};

use super::{SvgNode, non_empty};
use crate::{
    event::{Event, Handler, Listeners},
    geometry::Point,
};

/// Vertical centering attributes applied to every text node.
///
/// Both are set because some renderers only honor one of them.
pub const CENTERING_ATTRIBUTES: [(&str, &str); 2] = [
    ("alignment-baseline", "central"),
    ("dominant-baseline", "central"),
];

/// Horizontal text anchoring.
///
/// Maps directly to SVG `text-anchor` attribute values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

impl TextAnchor {
    /// Returns the SVG text-anchor value
    pub fn to_svg_value(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Middle => "middle",
            Self::End => "end",
        }
    }
}

impl FromStr for TextAnchor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "start" => Ok(Self::Start),
            "middle" => Ok(Self::Middle),
            "end" => Ok(Self::End),
            _ => Err(format!(
                "invalid text anchor `{s}`, valid values: start, middle, end"
            )),
        }
    }
}

/// Options for [`create_text`].
#[derive(Clone, Default)]
pub struct TextOptions {
    /// Text content, written as given apart from XML escaping.
    pub content: String,
    /// Fill color.
    pub fill: Option<String>,
    /// CSS font shorthand, e.g. `"bold 12pt sans-serif"`.
    pub font: Option<String>,
    pub anchor: Option<TextAnchor>,
    /// Position, written as `x`/`y` attributes.
    pub translate: Option<Point>,
    /// Registered as a click listener on the returned node.
    pub on_click: Option<Handler>,
}

impl TextOptions {
    /// Creates options holding only `content`.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }
}

impl fmt::Debug for TextOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextOptions")
            .field("content", &self.content)
            .field("fill", &self.fill)
            .field("font", &self.font)
            .field("anchor", &self.anchor)
            .field("translate", &self.translate)
            .field("on_click", &self.on_click.is_some())
            .finish()
    }
}

/// A built `<text>` element together with its event listeners.
///
/// Dereferences to the SVG element. Converting into an [`SvgNode`] for
/// attachment keeps the markup and leaves the listeners behind; use
/// [`TextNode::into_parts`] to keep both.
#[derive(Debug, Clone)]
pub struct TextNode {
    element: Element,
    listeners: Listeners,
}

impl TextNode {
    /// Returns the underlying SVG element.
    pub fn element(&self) -> &Element {
        &self.element
    }

    /// Returns the listeners registered on this node.
    pub fn listeners(&self) -> &Listeners {
        &self.listeners
    }

    /// Invokes the listeners for `event`, as a host does when the event fires
    /// on this node. Returns the number of handlers that ran.
    pub fn dispatch(&self, event: Event) -> usize {
        self.listeners.dispatch(event)
    }

    /// Splits the node into its element and listeners.
    pub fn into_parts(self) -> (Element, Listeners) {
        (self.element, self.listeners)
    }
}

impl Deref for TextNode {
    type Target = Element;

    fn deref(&self) -> &Self::Target {
        &self.element
    }
}

impl fmt::Display for TextNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.element, f)
    }
}

impl From<TextNode> for SvgNode {
    fn from(node: TextNode) -> Self {
        Box::new(node.element)
    }
}

/// Creates a vertically centered `<text>` label.
///
/// The [`CENTERING_ATTRIBUTES`] are always set. Each present option adds one
/// attribute (`fill`, `style`, `text-anchor`), except the translation, which
/// sets `x` and `y` together.
///
/// # Examples
///
/// ```
/// # use trellis_core::element::{create_text, TextAnchor, TextOptions};
/// # use trellis_core::geometry::Point;
/// let label = create_text(TextOptions {
///     anchor: Some(TextAnchor::Middle),
///     translate: Some(Point::new(10.0, 20.0)),
///     ..TextOptions::new("main")
/// });
/// let markup = label.to_string();
/// assert!(markup.contains(r#"x="10""#));
/// assert!(markup.contains(r#"text-anchor="middle""#));
/// assert!(markup.ends_with(r#"y="20">main</text>"#));
/// ```
pub fn create_text(options: TextOptions) -> TextNode {
    let mut text = Element::new("text");
    for (name, value) in CENTERING_ATTRIBUTES {
        text.assign(name, value);
    }

    if let Some(fill) = non_empty(&options.fill) {
        text.assign("fill", fill);
    }

    if let Some(font) = non_empty(&options.font) {
        text.assign("style", format!("font: {font}"));
    }

    if let Some(anchor) = options.anchor {
        text.assign("text-anchor", anchor.to_svg_value());
    }

    if let Some(translate) = options.translate {
        text.assign("x", translate.x());
        text.assign("y", translate.y());
    }

    text.append(node::Text::new(options.content));

    let mut listeners = Listeners::new();
    if let Some(on_click) = options.on_click {
        listeners.add(Event::Click, on_click);
    }

    TextNode {
        element: text,
        listeners,
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };

    use super::*;
    use crate::element::test_utils::attr;

    #[test]
    fn test_text_anchor_from_str() {
        assert_eq!("start".parse::<TextAnchor>(), Ok(TextAnchor::Start));
        assert_eq!("middle".parse::<TextAnchor>(), Ok(TextAnchor::Middle));
        assert_eq!("end".parse::<TextAnchor>(), Ok(TextAnchor::End));
        assert!("center".parse::<TextAnchor>().is_err());
    }

    #[test]
    fn test_create_text_minimal() {
        let text = create_text(TextOptions::new("hello"));
        assert_eq!(text.get_name(), "text");
        assert_eq!(attr(&text, "alignment-baseline").as_deref(), Some("central"));
        assert_eq!(attr(&text, "dominant-baseline").as_deref(), Some("central"));
        for name in ["fill", "style", "text-anchor", "x", "y"] {
            assert_eq!(attr(&text, name), None, "unexpected attribute {name}");
        }
        assert_eq!(
            text.to_string(),
            r#"<text alignment-baseline="central" dominant-baseline="central">hello</text>"#
        );
        assert!(text.listeners().is_empty());
    }

    #[test]
    fn test_create_text_content_inline_and_escaped() {
        let text = create_text(TextOptions {
            anchor: Some(TextAnchor::Middle),
            ..TextOptions::new("a < b & c")
        });
        assert_eq!(
            text.to_string(),
            r#"<text alignment-baseline="central" dominant-baseline="central" text-anchor="middle">a &lt; b &amp; c</text>"#
        );
    }

    #[test]
    fn test_create_text_content_inline_inside_group() {
        let group = crate::element::create_g(crate::element::GroupOptions {
            children: vec![Some(create_text(TextOptions::new("main")).into())],
            translate: None,
        });
        assert!(group.to_string().contains(r#"dominant-baseline="central">main</text>"#));
    }

    #[test]
    fn test_create_text_all_options() {
        let text = create_text(TextOptions {
            fill: Some("#333".to_string()),
            font: Some("bold 12pt sans-serif".to_string()),
            anchor: Some(TextAnchor::End),
            translate: Some(Point::new(10.0, 20.0)),
            ..TextOptions::new("label")
        });
        assert_eq!(attr(&text, "fill").as_deref(), Some("#333"));
        assert_eq!(
            attr(&text, "style").as_deref(),
            Some("font: bold 12pt sans-serif")
        );
        assert_eq!(attr(&text, "text-anchor").as_deref(), Some("end"));
        assert_eq!(attr(&text, "x").as_deref(), Some("10"));
        assert_eq!(attr(&text, "y").as_deref(), Some("20"));
        assert_eq!(attr(&text, "dominant-baseline").as_deref(), Some("central"));
    }

    #[test]
    fn test_create_text_click_handler() {
        let clicks = Arc::new(AtomicUsize::new(0));
        let handler_clicks = Arc::clone(&clicks);

        let text = create_text(TextOptions {
            on_click: Some(Arc::new(move || {
                handler_clicks.fetch_add(1, Ordering::SeqCst);
            })),
            ..TextOptions::new("clickable")
        });

        assert!(text.listeners().has(Event::Click));
        assert_eq!(clicks.load(Ordering::SeqCst), 0);

        assert_eq!(text.dispatch(Event::Click), 1);
        assert_eq!(clicks.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_text_node_into_svg_node_keeps_markup() {
        let text = create_text(TextOptions::new("x"));
        let markup = text.to_string();
        let node: SvgNode = text.into();
        assert_eq!(node.to_string(), markup);
    }

    #[test]
    fn test_text_node_into_parts() {
        let text = create_text(TextOptions {
            on_click: Some(Arc::new(|| {})),
            ..TextOptions::new("x")
        });
        let (element, listeners) = text.into_parts();
        assert_eq!(element.get_name(), "text");
        assert!(listeners.has(Event::Click));
    }

    #[test]
    fn test_text_options_debug_hides_handler() {
        let options = TextOptions {
            on_click: Some(Arc::new(|| {})),
            ..TextOptions::new("x")
        };
        let debug = format!("{options:?}");
        assert!(debug.contains("on_click: true"));
    }
}
