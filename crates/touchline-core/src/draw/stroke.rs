//! Stroke definitions for outlines and lines.
//!
//! [`StrokeDefinition`] carries the two properties the drill board varies per
//! glyph: color and width. The [`apply_stroke!`](crate::apply_stroke!) macro
//! maps it onto SVG attributes.
//!
//! | Rust Property | SVG Attribute | Example Values |
//! |--------------|---------------|----------------|
//! | `color` | `stroke`, `stroke-opacity` | `"white"`, `1` |
//! | `width` | `stroke-width` | `2` |

use crate::color::Color;

/// A stroke definition for rendering lines and borders.
///
/// # Examples
///
/// ```
/// use touchline_core::draw::StrokeDefinition;
/// use touchline_core::color::Color;
///
/// // Default stroke (black, 1px)
/// let stroke = StrokeDefinition::default();
/// assert_eq!(stroke.width(), 1.0);
///
/// let lines = StrokeDefinition::new(Color::new("white").unwrap(), 2.0);
/// assert_eq!(lines.width(), 2.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeDefinition {
    color: Color,
    width: f32,
}

impl StrokeDefinition {
    /// Creates a new stroke with the given color and width.
    pub fn new(color: Color, width: f32) -> Self {
        Self { color, width }
    }

    /// Returns the stroke color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Returns the stroke width.
    pub fn width(&self) -> f32 {
        self.width
    }
}

impl Default for StrokeDefinition {
    fn default() -> Self {
        Self {
            color: Color::default(),
            width: 1.0,
        }
    }
}

/// Apply stroke attributes to an SVG element.
///
/// # Examples
///
/// ```
/// use touchline_core::draw::StrokeDefinition;
/// use touchline_core::color::Color;
/// use svg::node::element as svg_element;
///
/// let stroke = StrokeDefinition::new(Color::new("white").unwrap(), 2.0);
/// let rect = svg_element::Rectangle::new()
///     .set("x", 50)
///     .set("y", 50);
///
/// let rect = touchline_core::apply_stroke!(rect, &stroke);
/// ```
#[macro_export]
macro_rules! apply_stroke {
    ($element:expr, $stroke:expr) => {{
        $element
            .set("stroke", $stroke.color().to_string())
            .set("stroke-opacity", $stroke.color().alpha())
            .set("stroke-width", $stroke.width())
    }};
}
