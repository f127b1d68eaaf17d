//! Geometric primitives for the drill canvas.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate in canvas space
//! - [`Size`] - Width and height dimensions
//! - [`Bounds`] - A rectangle defined by minimum and maximum coordinates
//!
//! # Coordinate System
//!
//! The scene model and the renderer share a single coordinate space that
//! matches the canvas (and SVG):
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! There is no separate world/screen transform. Coordinates are unconstrained:
//! negative or out-of-canvas values are valid and simply draw off-canvas.

/// A 2D point in canvas coordinate space.
///
/// # Examples
///
/// ```
/// # use touchline_core::geometry::Point;
/// let pointer = Point::new(120.0, 90.0);
/// let canvas_origin = Point::new(20.0, 40.0);
///
/// let local = pointer.sub_point(canvas_origin);
/// assert_eq!(local.x(), 100.0);
/// assert_eq!(local.y(), 50.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub const fn new(x: f32, y: f32) -> Self {
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

    /// Subtracts another point from this point, returning a new point
    pub fn sub_point(self, other: Point) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }

    /// Angle in radians of the vector from this point to `other`.
    ///
    /// Measured with `atan2(dy, dx)`, so in canvas space (y down) a positive
    /// angle turns clockwise.
    pub fn angle_to(self, other: Point) -> f32 {
        (other.y - self.y).atan2(other.x - self.x)
    }

    /// Returns the point reached by moving `distance` from this point along `angle` radians.
    pub fn offset_polar(self, distance: f32, angle: f32) -> Self {
        Self {
            x: self.x + distance * angle.cos(),
            y: self.y + distance * angle.sin(),
        }
    }
}

/// Represents the dimensions of an element with width and height
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> f32 {
        self.height
    }

    /// Returns the center point of a rectangle of this size anchored at the origin
    pub fn center(self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }
}

/// A rectangle with minimum and maximum coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
}

impl Bounds {
    /// Creates a new bounds from a top-left point and a size
    ///
    /// # Examples
    ///
    /// ```
    /// # use touchline_core::geometry::{Bounds, Point, Size};
    /// let field = Bounds::new_from_top_left(Point::new(50.0, 50.0), Size::new(700.0, 500.0));
    /// assert_eq!(field.max_x(), 750.0);
    /// assert_eq!(field.center().y(), 300.0);
    /// ```
    pub fn new_from_top_left(top_left: Point, size: Size) -> Self {
        Self {
            min_x: top_left.x,
            min_y: top_left.y,
            max_x: top_left.x + size.width,
            max_y: top_left.y + size.height,
        }
    }

    /// Returns the minimum x-coordinate of the bounds
    pub fn min_x(self) -> f32 {
        self.min_x
    }

    /// Returns the minimum y-coordinate of the bounds
    pub fn min_y(self) -> f32 {
        self.min_y
    }

    /// Returns the maximum x-coordinate of the bounds
    pub fn max_x(self) -> f32 {
        self.max_x
    }

    /// Returns the maximum y-coordinate of the bounds
    pub fn max_y(self) -> f32 {
        self.max_y
    }

    /// Returns the width of the bounds
    pub fn width(self) -> f32 {
        self.max_x - self.min_x
    }

    /// Returns the height of the bounds
    pub fn height(self) -> f32 {
        self.max_y - self.min_y
    }

    /// Returns the center point of the bounds
    pub fn center(self) -> Point {
        Point::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    /// Converts bounds to a Size object
    pub fn to_size(self) -> Size {
        Size::new(self.width(), self.height())
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_point_arithmetic() {
        let a = Point::new(10.0, 20.0);
        let b = Point::new(-4.0, 5.0);

        assert_eq!(a.sub_point(b), Point::new(14.0, 15.0));
    }

    #[test]
    fn test_point_angle_to() {
        let origin = Point::new(0.0, 0.0);

        assert_approx_eq!(f32, origin.angle_to(Point::new(10.0, 0.0)), 0.0);
        // y grows downward, so straight down is +90°
        assert_approx_eq!(f32, origin.angle_to(Point::new(0.0, 10.0)), FRAC_PI_2);
    }

    #[test]
    fn test_point_offset_polar() {
        let p = Point::new(100.0, 100.0).offset_polar(15.0, FRAC_PI_2);

        assert_approx_eq!(f32, p.x(), 100.0, epsilon = 1e-4);
        assert_approx_eq!(f32, p.y(), 115.0, epsilon = 1e-4);
    }

    #[test]
    fn test_size_center() {
        let center = Size::new(800.0, 600.0).center();
        assert_eq!(center, Point::new(400.0, 300.0));
    }

    #[test]
    fn test_bounds_from_top_left() {
        let bounds = Bounds::new_from_top_left(Point::new(50.0, 175.0), Size::new(700.0, 250.0));

        assert_approx_eq!(f32, bounds.min_x(), 50.0);
        assert_approx_eq!(f32, bounds.min_y(), 175.0);
        assert_approx_eq!(f32, bounds.max_x(), 750.0);
        assert_approx_eq!(f32, bounds.max_y(), 425.0);
        assert_approx_eq!(f32, bounds.width(), 700.0);
        assert_approx_eq!(f32, bounds.height(), 250.0);
        assert_eq!(bounds.center(), Point::new(400.0, 300.0));
        assert_eq!(bounds.to_size(), Size::new(700.0, 250.0));
    }

    #[test]
    fn test_bounds_negative_origin() {
        let bounds = Bounds::new_from_top_left(Point::new(-20.0, -10.0), Size::new(10.0, 5.0));

        assert_approx_eq!(f32, bounds.max_x(), -10.0);
        assert_approx_eq!(f32, bounds.max_y(), -5.0);
    }
}
