//! The rectangle data model.
//!
//! A [`Rectangle`] keeps the coordinates exactly as entered ([`Coords`]) next
//! to their normalized form, so listings echo user input while rendering
//! works on ordered extents.

use std::fmt;

use crate::{
    color::Color,
    layout::{self, NormalizedRect, ValidationError},
};

/// Identifier of a rectangle within a session.
///
/// Ids increase monotonically and are never reused, even after removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RectangleId(u64);

impl RectangleId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RectangleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Raw boundary coordinates in the order the user typed them.
///
/// Left/right run along x, back/front along y. Either member of a pair may
/// be the larger one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coords {
    left: f64,
    right: f64,
    back: f64,
    front: f64,
}

impl Coords {
    pub fn new(left: f64, right: f64, back: f64, front: f64) -> Self {
        Self {
            left,
            right,
            back,
            front,
        }
    }

    pub fn left(&self) -> f64 {
        self.left
    }

    pub fn right(&self) -> f64 {
        self.right
    }

    pub fn back(&self) -> f64 {
        self.back
    }

    pub fn front(&self) -> f64 {
        self.front
    }

    /// Validates and normalizes these coordinates.
    pub fn normalize(&self) -> Result<NormalizedRect, ValidationError> {
        layout::normalize(self.left, self.right, self.back, self.front)
    }
}

impl From<[f64; 4]> for Coords {
    fn from([left, right, back, front]: [f64; 4]) -> Self {
        Self::new(left, right, back, front)
    }
}

impl From<(f64, f64, f64, f64)> for Coords {
    fn from((left, right, back, front): (f64, f64, f64, f64)) -> Self {
        Self::new(left, right, back, front)
    }
}

impl fmt::Display for Coords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {}, {})",
            self.left, self.right, self.back, self.front
        )
    }
}

/// Visual style of a single rectangle.
///
/// `alpha` applies to the outline; the optional face color carries its own
/// alpha.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectangleStyle {
    color: Color,
    alpha: f32,
    facecolor: Option<Color>,
}

impl RectangleStyle {
    pub fn new(color: Color) -> Self {
        Self {
            color,
            alpha: 1.0,
            facecolor: None,
        }
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha.clamp(0.0, 1.0);
        self
    }

    pub fn with_facecolor(mut self, facecolor: Option<Color>) -> Self {
        self.facecolor = facecolor;
        self
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    pub fn facecolor(&self) -> Option<Color> {
        self.facecolor
    }

    /// Outline color with the style's alpha applied.
    pub fn edge_color(&self) -> Color {
        self.color.with_alpha(self.alpha)
    }
}

impl Default for RectangleStyle {
    fn default() -> Self {
        Self::new(Color::from_palette(0))
    }
}

/// A validated rectangle ready for plotting.
#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    id: RectangleId,
    coords: Coords,
    normalized: NormalizedRect,
    style: RectangleStyle,
    label: String,
}

impl Rectangle {
    /// Creates a rectangle, normalizing `coords`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] when a coordinate is not finite.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rectplot_core::rectangle::{Coords, Rectangle, RectangleId, RectangleStyle};
    /// let rect = Rectangle::new(
    ///     RectangleId::new(1),
    ///     Coords::new(4.0, 0.0, 2.0, 0.0),
    ///     RectangleStyle::default(),
    ///     "Box 1",
    /// )
    /// .unwrap();
    /// assert_eq!(rect.normalized().x_min(), 0.0);
    /// assert_eq!(rect.coords().left(), 4.0);
    /// ```
    pub fn new(
        id: RectangleId,
        coords: Coords,
        style: RectangleStyle,
        label: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let normalized = coords.normalize()?;
        Ok(Self {
            id,
            coords,
            normalized,
            style,
            label: label.into(),
        })
    }

    pub fn id(&self) -> RectangleId {
        self.id
    }

    /// Returns the coordinates as originally entered.
    pub fn coords(&self) -> Coords {
        self.coords
    }

    pub fn normalized(&self) -> &NormalizedRect {
        &self.normalized
    }

    pub fn style(&self) -> &RectangleStyle {
        &self.style
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = &self.normalized;
        write!(
            f,
            "{}: x [{}, {}], y [{}, {}] ({})",
            self.label,
            n.x_min(),
            n.x_max(),
            n.y_min(),
            n.y_max(),
            self.style.color()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rectangle_keeps_raw_and_normalized() {
        let rect = Rectangle::new(
            RectangleId::new(3),
            Coords::new(4.30, -0.70, 3.78, -0.01),
            RectangleStyle::new(Color::new("red").unwrap()),
            "Box 2 (Inner)",
        )
        .unwrap();

        assert_eq!(rect.id(), RectangleId::new(3));
        assert_eq!(rect.coords().left(), 4.30);
        assert_eq!(rect.normalized().x_min(), -0.70);
        assert_eq!(rect.normalized().y_max(), 3.78);
        assert_eq!(rect.label(), "Box 2 (Inner)");
    }

    #[test]
    fn test_rectangle_rejects_non_finite() {
        let err = Rectangle::new(
            RectangleId::new(1),
            Coords::new(0.0, 1.0, 0.0, f64::INFINITY),
            RectangleStyle::default(),
            "Box 1",
        )
        .unwrap_err();
        assert!(matches!(err, ValidationError::NonFinite { name: "front", .. }));
    }

    #[test]
    fn test_style_edge_color_applies_alpha() {
        let style = RectangleStyle::new(Color::new("blue").unwrap()).with_alpha(0.4);
        assert!((style.edge_color().alpha() - 0.4).abs() < 1e-6);
        assert!((style.color().alpha() - 1.0).abs() < 1e-6);

        // Out of range alpha is clamped
        let style = RectangleStyle::default().with_alpha(3.0);
        assert_eq!(style.alpha(), 1.0);
    }

    #[test]
    fn test_style_default_is_first_palette_color() {
        let style = RectangleStyle::default();
        assert_eq!(style.color().to_string(), "blue");
        assert!(style.facecolor().is_none());
    }

    #[test]
    fn test_display_formats() {
        assert_eq!(RectangleId::new(7).to_string(), "#7");
        assert_eq!(Coords::new(1.0, 5.0, 2.0, 6.5).to_string(), "(1, 5, 2, 6.5)");

        let rect = Rectangle::new(
            RectangleId::new(1),
            Coords::from([5.0, 1.0, 2.0, 6.0]),
            RectangleStyle::default(),
            "Rectangle A",
        )
        .unwrap();
        assert_eq!(rect.to_string(), "Rectangle A: x [1, 5], y [2, 6] (blue)");
    }
}
