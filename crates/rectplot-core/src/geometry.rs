//! Points, sizes, bounds and insets.
//!
//! Two coordinate systems share these types. *Data space* is the plane the
//! user enters rectangles in: x grows from left to right and y from back to
//! front, i.e. upward. *Canvas space* is SVG user space with y growing
//! downward:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! [`PlotFrame`](crate::layout::PlotFrame) maps data space onto the canvas.

/// A 2D point.
///
/// ```
/// # use rectplot_core::geometry::Point;
/// let tip = Point::new(10.0, 20.0).add_point(Point::new(5.0, -5.0));
/// assert_eq!(tip, Point::new(15.0, 15.0));
/// assert_eq!(tip.with_y(0.0).y(), 0.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn x(self) -> f64 {
        self.x
    }

    pub fn y(self) -> f64 {
        self.y
    }

    pub fn with_x(self, x: f64) -> Self {
        Self { x, ..self }
    }

    pub fn with_y(self, y: f64) -> Self {
        Self { y, ..self }
    }

    /// Component-wise sum, used to offset a point by a delta.
    pub fn add_point(self, other: Point) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }

    /// Component-wise difference, i.e. the delta from `other` to `self`.
    pub fn sub_point(self, other: Point) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }

    /// `false` when either coordinate is NaN or infinite.
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Bounds of the given size centered on this point.
    pub fn to_bounds(self, size: Size) -> Bounds {
        Bounds::new_from_center(self, size)
    }
}

/// Width and height of a drawn element, in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f64,
    height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn width(self) -> f64 {
        self.width
    }

    pub fn height(self) -> f64 {
        self.height
    }

    /// Per-dimension maximum of two sizes.
    pub fn max(self, other: Size) -> Self {
        Self::new(self.width.max(other.width), self.height.max(other.height))
    }

    pub fn is_zero(self) -> bool {
        self.width == 0.0 && self.height == 0.0
    }
}

/// An axis-aligned box stored as its minimum and maximum corners.
///
/// Width and height are never negative for bounds built through
/// [`Bounds::from_corners`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    min_x: f64,
    min_y: f64,
    max_x: f64,
    max_y: f64,
}

impl Bounds {
    /// Bounds spanning two corners given in any order.
    ///
    /// ```
    /// # use rectplot_core::geometry::{Bounds, Point};
    /// let bounds = Bounds::from_corners(Point::new(4.0, -1.0), Point::new(0.0, 3.0));
    /// assert_eq!(bounds.min_x(), 0.0);
    /// assert_eq!(bounds.max_y(), 3.0);
    /// ```
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            min_x: a.x.min(b.x),
            min_y: a.y.min(b.y),
            max_x: a.x.max(b.x),
            max_y: a.y.max(b.y),
        }
    }

    pub fn new_from_center(center: Point, size: Size) -> Self {
        let half = Point::new(size.width / 2.0, size.height / 2.0);
        Self::from_corners(center.sub_point(half), center.add_point(half))
    }

    /// Bounds whose minimum corner (top-left on the canvas) is `top_left`.
    pub fn new_from_top_left(top_left: Point, size: Size) -> Self {
        Self {
            min_x: top_left.x,
            min_y: top_left.y,
            max_x: top_left.x + size.width,
            max_y: top_left.y + size.height,
        }
    }

    pub fn min_x(self) -> f64 {
        self.min_x
    }

    pub fn min_y(self) -> f64 {
        self.min_y
    }

    pub fn max_x(self) -> f64 {
        self.max_x
    }

    pub fn max_y(self) -> f64 {
        self.max_y
    }

    pub fn width(self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(self) -> f64 {
        self.max_y - self.min_y
    }

    pub fn center(self) -> Point {
        Point::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    pub fn min_point(self) -> Point {
        Point::new(self.min_x, self.min_y)
    }

    pub fn max_point(self) -> Point {
        Point::new(self.max_x, self.max_y)
    }

    pub fn to_size(self) -> Size {
        Size::new(self.width(), self.height())
    }

    /// Edges count as inside.
    pub fn contains(self, point: Point) -> bool {
        (self.min_x..=self.max_x).contains(&point.x) && (self.min_y..=self.max_y).contains(&point.y)
    }

    /// Smallest bounds covering both `self` and `other`.
    ///
    /// ```
    /// # use rectplot_core::geometry::{Bounds, Point, Size};
    /// let plot = Bounds::new_from_top_left(Point::new(0.0, 0.0), Size::new(100.0, 30.0));
    /// let legend = Bounds::new_from_top_left(Point::new(10.0, 40.0), Size::new(120.0, 80.0));
    ///
    /// let drawn = plot.merge(&legend);
    /// assert_eq!(drawn.width(), 130.0);
    /// assert_eq!(drawn.height(), 120.0);
    /// ```
    pub fn merge(&self, other: &Self) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }

    /// Grows every side outward by the matching inset.
    pub fn add_padding(&self, insets: Insets) -> Self {
        Self {
            min_x: self.min_x - insets.left,
            min_y: self.min_y - insets.top,
            max_x: self.max_x + insets.right,
            max_y: self.max_y + insets.bottom,
        }
    }

    /// Moves every side inward; undoes [`Bounds::add_padding`].
    pub fn shrink(&self, insets: Insets) -> Self {
        self.add_padding(Insets::new(
            -insets.top,
            -insets.right,
            -insets.bottom,
            -insets.left,
        ))
    }
}

/// Per-side spacing in CSS order: top, right, bottom, left.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Insets {
    top: f64,
    right: f64,
    bottom: f64,
    left: f64,
}

impl Insets {
    pub fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub fn uniform(value: f64) -> Self {
        Self::new(value, value, value, value)
    }

    pub fn top(self) -> f64 {
        self.top
    }

    pub fn right(self) -> f64 {
        self.right
    }

    pub fn bottom(self) -> f64 {
        self.bottom
    }

    pub fn left(self) -> f64 {
        self.left
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_new() {
        let point = Point::new(3.5, 4.2);
        assert_eq!(point.x(), 3.5);
        assert_eq!(point.y(), 4.2);
    }

    #[test]
    fn test_point_add_sub() {
        let p1 = Point::new(1.0, 2.0);
        let p2 = Point::new(3.0, 4.0);
        let sum = p1.add_point(p2);
        assert_eq!(sum, Point::new(4.0, 6.0));
        assert_eq!(sum.sub_point(p2), p1);
    }

    #[test]
    fn test_point_is_finite() {
        assert!(Point::new(1.0, -2.0).is_finite());
        assert!(!Point::new(f64::NAN, 0.0).is_finite());
        assert!(!Point::new(0.0, f64::INFINITY).is_finite());
    }

    #[test]
    fn test_point_to_bounds() {
        let bounds = Point::new(10.0, 20.0).to_bounds(Size::new(6.0, 8.0));

        assert_eq!(bounds.min_x(), 7.0);
        assert_eq!(bounds.min_y(), 16.0);
        assert_eq!(bounds.max_x(), 13.0);
        assert_eq!(bounds.max_y(), 24.0);
    }

    #[test]
    fn test_bounds_from_corners_orders_coordinates() {
        let bounds = Bounds::from_corners(Point::new(4.3, 3.78), Point::new(-0.7, -0.01));
        assert_eq!(bounds.min_x(), -0.7);
        assert_eq!(bounds.max_x(), 4.3);
        assert_eq!(bounds.min_y(), -0.01);
        assert_eq!(bounds.max_y(), 3.78);
    }

    #[test]
    fn test_bounds_new_from_center() {
        let center = Point::new(50.0, 60.0);
        let bounds = Bounds::new_from_center(center, Size::new(20.0, 30.0));

        assert_eq!(bounds.min_x(), 40.0);
        assert_eq!(bounds.min_y(), 45.0);
        assert_eq!(bounds.max_x(), 60.0);
        assert_eq!(bounds.max_y(), 75.0);
        assert_eq!(bounds.width(), 20.0);
        assert_eq!(bounds.height(), 30.0);
        assert_eq!(bounds.center(), center);
    }

    #[test]
    fn test_bounds_merge() {
        let a = Bounds::new_from_top_left(Point::new(0.0, 0.0), Size::new(10.0, 10.0));
        let b = Bounds::new_from_top_left(Point::new(5.0, -5.0), Size::new(10.0, 10.0));
        let merged = a.merge(&b);

        assert_eq!(merged.min_point(), Point::new(0.0, -5.0));
        assert_eq!(merged.max_point(), Point::new(15.0, 10.0));
    }

    #[test]
    fn test_bounds_contains() {
        let bounds = Bounds::new_from_top_left(Point::new(0.0, 0.0), Size::new(4.0, 2.0));
        assert!(bounds.contains(Point::new(2.0, 1.0)));
        assert!(bounds.contains(Point::new(4.0, 2.0)));
        assert!(!bounds.contains(Point::new(4.1, 1.0)));
    }

    #[test]
    fn test_bounds_padding_and_shrink() {
        let bounds = Bounds::new_from_top_left(Point::new(10.0, 10.0), Size::new(20.0, 20.0));
        let insets = Insets::new(1.0, 2.0, 3.0, 4.0);

        let padded = bounds.add_padding(insets);
        assert_eq!(padded.min_x(), 6.0);
        assert_eq!(padded.min_y(), 9.0);
        assert_eq!(padded.max_x(), 32.0);
        assert_eq!(padded.max_y(), 33.0);

        assert_eq!(padded.shrink(insets), bounds);
    }

    #[test]
    fn test_size_max_and_zero() {
        let size = Size::new(10.0, 4.0);
        assert_eq!(size.max(Size::new(5.0, 9.0)), Size::new(10.0, 9.0));
        assert!(Size::default().is_zero());
        assert!(!size.is_zero());
    }

    #[test]
    fn test_insets_uniform() {
        let insets = Insets::uniform(2.5);
        assert_eq!(insets, Insets::new(2.5, 2.5, 2.5, 2.5));
        assert_eq!(insets.left(), 2.5);
    }
}
