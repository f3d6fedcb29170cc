//! Geometric primitives for positioning scene nodes.
//!
//! Trellis uses the SVG coordinate system: origin at the top-left corner,
//! X increasing rightward and Y increasing downward.

use serde::{Deserialize, Deserializer, de::Error as _};

/// A 2D offset in scene coordinate space.
///
/// Builders use a `Point` as a translation applied to a node's local
/// coordinate space, either through a `transform` attribute or through
/// `x`/`y` attributes for text.
///
/// # Examples
///
/// ```
/// # use trellis_core::geometry::Point;
/// let offset = Point::new(3.0, 4.0);
/// assert_eq!(offset.to_translate(), "translate(3, 4)");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct Point {
    #[serde(deserialize_with = "deserialize_finite")]
    x: f32,
    #[serde(deserialize_with = "deserialize_finite")]
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Formats this offset as an SVG `translate(x, y)` transform.
    ///
    /// Coordinates use the shortest float representation, so whole numbers
    /// carry no fractional part.
    pub fn to_translate(self) -> String {
        format!("translate({}, {})", self.x, self.y)
    }
}

/// Deserializes a coordinate or size into an `f32`.
///
/// Values are read as `f64` and narrowed, so they round to the nearest
/// representable `f32` (`16777217` becomes `16777216`). Values that overflow
/// the `f32` range, as well as `inf` and `nan`, are rejected.
///
/// # Errors
///
/// Returns a deserialization error when the value is not a number or does
/// not narrow to a finite `f32`.
pub fn deserialize_finite<'de, D>(deserializer: D) -> Result<f32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = f64::deserialize(deserializer)?;
    let narrowed = value as f32;
    if narrowed.is_finite() {
        Ok(narrowed)
    } else {
        Err(D::Error::custom(format!(
            "number {value} is outside the supported range of ±{}",
            f32::MAX
        )))
    }
}

/// Like [`deserialize_finite`], for optional fields.
///
/// Pair with `#[serde(default)]` so an absent field stays `None`.
///
/// # Errors
///
/// Same as [`deserialize_finite`].
pub fn deserialize_finite_opt<'de, D>(deserializer: D) -> Result<Option<f32>, D::Error>
where
    D: Deserializer<'de>,
{
    deserialize_finite(deserializer).map(Some)
}
