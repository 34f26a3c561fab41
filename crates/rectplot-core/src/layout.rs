//! The rectangle layout engine.
//!
//! Everything here is pure arithmetic over value inputs: normalizing
//! arbitrarily ordered `(left, right, back, front)` quadruples, computing the
//! union bounding box of a set, padding it into axis limits, picking tick
//! positions, and fitting the limits into a canvas area.
//!
//! # Example
//!
//! ```
//! # use rectplot_core::layout::{bounding_box, normalize, padded_limits};
//! let outer = normalize(-0.70, 4.30, -0.01, 3.78).unwrap();
//! let inner = normalize(-0.38, 0.52, 1.46, 3.46).unwrap();
//!
//! let bounds = bounding_box([&outer, &inner]).unwrap();
//! assert_eq!(bounds.min_x(), -0.70);
//! assert_eq!(bounds.max_y(), 3.78);
//!
//! let limits = padded_limits(bounds, 0.1);
//! assert!(limits.min_x() < -0.70);
//! ```

use log::trace;
use thiserror::Error;

use crate::geometry::{Bounds, Point, Size};

/// Pad applied to an axis whose data range is zero.
pub const FALLBACK_PAD: f64 = 1.0;

/// Default fraction of the data range added on each side of an axis.
pub const DEFAULT_PAD_FACTOR: f64 = 0.1;

const TICK_EPSILON: f64 = 1e-9;

/// Errors raised while validating rectangle coordinates.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("coordinate `{name}` must be a finite number, got {value}")]
    NonFinite { name: &'static str, value: f64 },
    #[error("{axis} extent from {min} to {max} is too large to represent")]
    ExtentOverflow {
        axis: &'static str,
        min: f64,
        max: f64,
    },
}

/// A rectangle in canonical `(x_min, y_min, width, height)` form.
///
/// Invariant: `x_min <= x_max` and `y_min <= y_max`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedRect {
    x_min: f64,
    y_min: f64,
    x_max: f64,
    y_max: f64,
}

impl NormalizedRect {
    /// Returns the minimum x-coordinate
    pub fn x_min(&self) -> f64 {
        self.x_min
    }

    /// Returns the minimum y-coordinate
    pub fn y_min(&self) -> f64 {
        self.y_min
    }

    /// Returns the maximum x-coordinate
    pub fn x_max(&self) -> f64 {
        self.x_max
    }

    /// Returns the maximum y-coordinate
    pub fn y_max(&self) -> f64 {
        self.y_max
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    /// Returns true when the rectangle has zero width or zero height.
    pub fn is_degenerate(&self) -> bool {
        self.x_min == self.x_max || self.y_min == self.y_max
    }

    /// Returns the data-space extent of this rectangle.
    pub fn bounds(&self) -> Bounds {
        Bounds::from_corners(
            Point::new(self.x_min, self.y_min),
            Point::new(self.x_max, self.y_max),
        )
    }

    /// Returns the center point. See [`center`].
    pub fn center(&self) -> Point {
        center(self.x_min, self.y_min, self.width(), self.height())
    }
}

/// Normalizes four boundary coordinates given in any order.
///
/// # Errors
///
/// Returns [`ValidationError::NonFinite`] for the first coordinate that is
/// NaN or infinite, and [`ValidationError::ExtentOverflow`] when the width or
/// height overflows to infinity. Degenerate (zero-width or zero-height)
/// rectangles are accepted.
///
/// # Examples
///
/// ```
/// # use rectplot_core::layout::normalize;
/// let a = normalize(4.0, 0.0, 2.0, 0.0).unwrap();
/// let b = normalize(0.0, 4.0, 0.0, 2.0).unwrap();
/// assert_eq!(a, b);
/// assert_eq!(a.width(), 4.0);
/// assert_eq!(a.height(), 2.0);
/// ```
pub fn normalize(
    left: f64,
    right: f64,
    back: f64,
    front: f64,
) -> Result<NormalizedRect, ValidationError> {
    for (name, value) in [
        ("left", left),
        ("right", right),
        ("back", back),
        ("front", front),
    ] {
        if !value.is_finite() {
            return Err(ValidationError::NonFinite { name, value });
        }
    }

    let rect = NormalizedRect {
        x_min: left.min(right),
        y_min: back.min(front),
        x_max: left.max(right),
        y_max: back.max(front),
    };
    for (axis, min, max, extent) in [
        ("x", rect.x_min, rect.x_max, rect.width()),
        ("y", rect.y_min, rect.y_max, rect.height()),
    ] {
        if !extent.is_finite() {
            return Err(ValidationError::ExtentOverflow { axis, min, max });
        }
    }
    Ok(rect)
}

/// Computes the union extent of a set of rectangles.
///
/// Returns `None` when the set is empty.
pub fn bounding_box<'a, I>(rects: I) -> Option<Bounds>
where
    I: IntoIterator<Item = &'a NormalizedRect>,
{
    rects
        .into_iter()
        .map(NormalizedRect::bounds)
        .reduce(|acc, bounds| acc.merge(&bounds))
}

/// Pads data bounds into axis limits.
///
/// Each axis is widened on both sides by `range * factor`; an axis with a
/// zero range is widened by [`FALLBACK_PAD`] so the viewport never collapses.
/// A negative or non-finite `factor` is replaced by [`DEFAULT_PAD_FACTOR`].
///
/// # Examples
///
/// ```
/// # use rectplot_core::geometry::{Bounds, Point};
/// # use rectplot_core::layout::padded_limits;
/// // A vertical line at x = 3
/// let line = Bounds::from_corners(Point::new(3.0, 0.0), Point::new(3.0, 10.0));
/// let limits = padded_limits(line, 0.1);
/// assert_eq!(limits.min_x(), 2.0);
/// assert_eq!(limits.max_x(), 4.0);
/// assert_eq!(limits.min_y(), -1.0);
/// assert_eq!(limits.max_y(), 11.0);
/// ```
pub fn padded_limits(bounds: Bounds, factor: f64) -> Bounds {
    let factor = if factor.is_finite() && factor >= 0.0 {
        factor
    } else {
        DEFAULT_PAD_FACTOR
    };
    let pad = |range: f64| {
        if range == 0.0 {
            FALLBACK_PAD
        } else {
            range * factor
        }
    };
    let x_pad = pad(bounds.width());
    let y_pad = pad(bounds.height());

    let limits = Bounds::from_corners(
        Point::new(bounds.min_x() - x_pad, bounds.min_y() - y_pad),
        Point::new(bounds.max_x() + x_pad, bounds.max_y() + y_pad),
    );
    trace!(
        x_pad,
        y_pad,
        min_x = limits.min_x(),
        max_x = limits.max_x(),
        min_y = limits.min_y(),
        max_y = limits.max_y();
        "Computed padded limits"
    );
    limits
}

/// Arithmetic midpoint of a rectangle in `(x_min, y_min, width, height)` form.
///
/// ```
/// # use rectplot_core::layout::center;
/// let c = center(0.0, 0.0, 4.0, 2.0);
/// assert_eq!((c.x(), c.y()), (2.0, 1.0));
/// ```
pub fn center(x_min: f64, y_min: f64, width: f64, height: f64) -> Point {
    Point::new(x_min + width / 2.0, y_min + height / 2.0)
}

/// Picks "nice" tick positions covering `[lo, hi]`.
///
/// Steps are 1, 2, 2.5 or 5 times a power of ten, chosen so that at most
/// roughly `max_ticks` ticks fall inside the range. Returns the ticks in
/// ascending order together with the step used.
///
/// ```
/// # use rectplot_core::layout::nice_ticks;
/// let (ticks, step) = nice_ticks(-1.2, 5.0, 8);
/// assert_eq!(step, 1.0);
/// assert_eq!(ticks, vec![-1.0, 0.0, 1.0, 2.0, 3.0, 4.0, 5.0]);
/// ```
pub fn nice_ticks(lo: f64, hi: f64, max_ticks: usize) -> (Vec<f64>, f64) {
    if !(lo.is_finite() && hi.is_finite()) || hi <= lo {
        return (vec![lo], 1.0);
    }

    let intervals = max_ticks.saturating_sub(1).max(1) as f64;
    let raw_step = (hi - lo) / intervals;
    let exponent = raw_step.log10().floor() as i32;
    let normalized = raw_step / 10f64.powi(exponent);
    let nice = [1.0, 2.0, 2.5, 5.0]
        .into_iter()
        .find(|candidate| normalized <= candidate + TICK_EPSILON)
        .unwrap_or(10.0);
    // Dividing by an exact power of ten keeps steps like 0.25 exact
    let step = if exponent >= 0 {
        nice * 10f64.powi(exponent)
    } else {
        nice / 10f64.powi(-exponent)
    };

    let first = (lo / step - TICK_EPSILON).ceil() as i64;
    let last = (hi / step + TICK_EPSILON).floor() as i64;
    let ticks = (first..=last)
        .map(|i| {
            let value = i as f64 * step;
            // Avoid printing "-0"
            if value == 0.0 { 0.0 } else { value }
        })
        .collect();

    (ticks, step)
}

/// Formats a tick value with just enough decimals for the given step.
///
/// ```
/// # use rectplot_core::layout::format_tick;
/// assert_eq!(format_tick(2.0, 1.0), "2");
/// assert_eq!(format_tick(0.5, 0.5), "0.5");
/// assert_eq!(format_tick(0.25, 0.25), "0.25");
/// ```
pub fn format_tick(value: f64, step: f64) -> String {
    let mut decimals = 0usize;
    let mut scaled = step.abs();
    while decimals < 10 && (scaled - scaled.round()).abs() > 1e-9 * scaled.max(1.0) {
        scaled *= 10.0;
        decimals += 1;
    }
    let text = format!("{value:.decimals$}");
    if text.trim_start_matches('-').chars().all(|c| c == '0' || c == '.') {
        // "-0.0" and friends
        text.trim_start_matches('-').to_string()
    } else {
        text
    }
}

/// Maps data coordinates onto a canvas area.
///
/// The canvas y axis points down, so larger data y values map to smaller
/// canvas y values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotFrame {
    limits: Bounds,
    area: Bounds,
    scale_x: f64,
    scale_y: f64,
}

impl PlotFrame {
    /// Fits `limits` (data space) into `available` (canvas space).
    ///
    /// With `equal_aspect` one data unit has the same canvas length on both
    /// axes; the axes box shrinks along one dimension and is centered inside
    /// `available`. Otherwise each axis stretches to fill the area.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rectplot_core::geometry::{Bounds, Point, Size};
    /// # use rectplot_core::layout::PlotFrame;
    /// let limits = Bounds::from_corners(Point::new(0.0, 0.0), Point::new(10.0, 5.0));
    /// let area = Bounds::new_from_top_left(Point::new(0.0, 0.0), Size::new(400.0, 400.0));
    ///
    /// let frame = PlotFrame::fit(limits, area, true);
    /// assert_eq!(frame.area().width(), 400.0);
    /// assert_eq!(frame.area().height(), 200.0);
    /// assert_eq!(frame.scale_x(), frame.scale_y());
    /// ```
    pub fn fit(limits: Bounds, available: Bounds, equal_aspect: bool) -> Self {
        let data_width = if limits.width() > 0.0 {
            limits.width()
        } else {
            1.0
        };
        let data_height = if limits.height() > 0.0 {
            limits.height()
        } else {
            1.0
        };

        let scale_x = available.width() / data_width;
        let scale_y = available.height() / data_height;

        if equal_aspect {
            let scale = scale_x.min(scale_y);
            let size = Size::new(data_width * scale, data_height * scale);
            Self {
                limits,
                area: Bounds::new_from_center(available.center(), size),
                scale_x: scale,
                scale_y: scale,
            }
        } else {
            Self {
                limits,
                area: available,
                scale_x,
                scale_y,
            }
        }
    }

    /// Returns the data-space limits shown by this frame.
    pub fn limits(&self) -> Bounds {
        self.limits
    }

    /// Returns the canvas area occupied by the axes box.
    pub fn area(&self) -> Bounds {
        self.area
    }

    /// Canvas units per data unit along x
    pub fn scale_x(&self) -> f64 {
        self.scale_x
    }

    /// Canvas units per data unit along y
    pub fn scale_y(&self) -> f64 {
        self.scale_y
    }

    /// Converts a data-space point into canvas space.
    pub fn to_canvas(&self, point: Point) -> Point {
        Point::new(
            self.area.min_x() + (point.x() - self.limits.min_x()) * self.scale_x,
            self.area.max_y() - (point.y() - self.limits.min_y()) * self.scale_y,
        )
    }

    /// Converts a data-space rectangle into a canvas-space bounds.
    pub fn rect_to_canvas(&self, rect: &NormalizedRect) -> Bounds {
        Bounds::from_corners(
            self.to_canvas(Point::new(rect.x_min(), rect.y_min())),
            self.to_canvas(Point::new(rect.x_max(), rect.y_max())),
        )
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_normalize_orders_coordinates() {
        let rect = normalize(4.30, -0.70, 3.78, -0.01).unwrap();
        assert_eq!(rect.x_min(), -0.70);
        assert_eq!(rect.y_min(), -0.01);
        assert_eq!(rect.x_max(), 4.30);
        assert_eq!(rect.y_max(), 3.78);
        assert_approx_eq!(f64, rect.width(), 5.0, epsilon = 1e-12);
        assert_approx_eq!(f64, rect.height(), 3.79, epsilon = 1e-12);
    }

    #[test]
    fn test_normalize_accepts_degenerate() {
        let line = normalize(3.0, 3.0, 0.0, 10.0).unwrap();
        assert_eq!(line.width(), 0.0);
        assert!(line.is_degenerate());

        let point = normalize(1.0, 1.0, 1.0, 1.0).unwrap();
        assert!(point.bounds().to_size().is_zero());
    }

    #[test]
    fn test_normalize_rejects_non_finite() {
        let err = normalize(0.0, f64::NAN, 0.0, 1.0).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::NonFinite { name: "right", .. }
        ));

        let err = normalize(0.0, 1.0, f64::NEG_INFINITY, 1.0).unwrap_err();
        assert!(matches!(err, ValidationError::NonFinite { name: "back", .. }));
        assert!(err.to_string().contains("back"));
    }

    #[test]
    fn test_normalize_rejects_overflowing_extent() {
        let err = normalize(-1e308, 1e308, 0.0, 1.0).unwrap_err();
        assert!(matches!(err, ValidationError::ExtentOverflow { axis: "x", .. }));
        assert!(err.to_string().starts_with("x extent"));

        let err = normalize(0.0, 1.0, f64::MAX, -f64::MAX).unwrap_err();
        assert!(matches!(err, ValidationError::ExtentOverflow { axis: "y", .. }));

        let wide = normalize(-1e307, 1e307, 0.0, 1.0).unwrap();
        assert_eq!(wide.width(), 2e307);
    }

    #[test]
    fn test_center_is_midpoint() {
        let c = center(0.0, 0.0, 4.0, 2.0);
        assert_eq!(c, Point::new(2.0, 1.0));

        let rect = normalize(-1.0, 1.0, 5.0, 3.0).unwrap();
        assert_eq!(rect.center(), Point::new(0.0, 4.0));
    }

    #[test]
    fn test_bounding_box_empty_is_none() {
        let rects: Vec<NormalizedRect> = Vec::new();
        assert!(bounding_box(&rects).is_none());
    }

    #[test]
    fn test_bounding_box_single_equals_extent() {
        let rect = normalize(1.0, 5.0, 2.0, 6.0).unwrap();
        assert_eq!(bounding_box([&rect]), Some(rect.bounds()));
    }

    #[test]
    fn test_bounding_box_outer_and_inner_boxes() {
        let outer = normalize(-0.70, 4.30, -0.01, 3.78).unwrap();
        let inner = normalize(-0.38, 0.52, 1.46, 3.46).unwrap();
        let bounds = bounding_box([&outer, &inner]).unwrap();

        assert_eq!(bounds.min_x(), -0.70);
        assert_eq!(bounds.max_x(), 4.30);
        assert_eq!(bounds.min_y(), -0.01);
        assert_eq!(bounds.max_y(), 3.78);
    }

    #[test]
    fn test_padded_limits_uses_factor() {
        let bounds = Bounds::from_corners(Point::new(0.0, 0.0), Point::new(10.0, 20.0));
        let limits = padded_limits(bounds, 0.1);
        assert_approx_eq!(f64, limits.min_x(), -1.0);
        assert_approx_eq!(f64, limits.max_x(), 11.0);
        assert_approx_eq!(f64, limits.min_y(), -2.0);
        assert_approx_eq!(f64, limits.max_y(), 22.0);
    }

    #[test]
    fn test_padded_limits_fallback_for_point() {
        let point = Bounds::from_corners(Point::new(2.0, 2.0), Point::new(2.0, 2.0));
        let limits = padded_limits(point, 0.1);
        assert_eq!(limits.width(), 2.0);
        assert_eq!(limits.height(), 2.0);
        assert_eq!(limits.center(), Point::new(2.0, 2.0));
    }

    #[test]
    fn test_padded_limits_invalid_factor_uses_default() {
        let bounds = Bounds::from_corners(Point::new(0.0, 0.0), Point::new(10.0, 20.0));
        let expected = padded_limits(bounds, DEFAULT_PAD_FACTOR);
        assert_eq!(padded_limits(bounds, -0.6), expected);
        assert_eq!(padded_limits(bounds, f64::NAN), expected);
        assert_eq!(padded_limits(bounds, f64::INFINITY), expected);
    }

    #[test]
    fn test_nice_ticks_steps() {
        let (ticks, step) = nice_ticks(0.0, 1.0, 5);
        assert_approx_eq!(f64, step, 0.25);
        assert_eq!(ticks.len(), 5);

        let (ticks, step) = nice_ticks(-11.0, 11.0, 6);
        assert_eq!(step, 5.0);
        assert_eq!(ticks, vec![-10.0, -5.0, 0.0, 5.0, 10.0]);
    }

    #[test]
    fn test_nice_ticks_degenerate_range() {
        let (ticks, _) = nice_ticks(3.0, 3.0, 8);
        assert_eq!(ticks, vec![3.0]);
    }

    #[test]
    fn test_format_tick_drops_negative_zero() {
        assert_eq!(format_tick(-0.0, 1.0), "0");
        assert_eq!(format_tick(-1.0e-17, 0.5), "0.0");
        assert_eq!(format_tick(-2.5, 2.5), "-2.5");
        assert_eq!(format_tick(1500.0, 500.0), "1500");
    }

    #[test]
    fn test_plot_frame_stretch_fills_area() {
        let limits = Bounds::from_corners(Point::new(0.0, 0.0), Point::new(10.0, 5.0));
        let area = Bounds::new_from_top_left(Point::new(50.0, 50.0), Size::new(400.0, 400.0));
        let frame = PlotFrame::fit(limits, area, false);

        assert_eq!(frame.area(), area);
        assert_eq!(frame.scale_x(), 40.0);
        assert_eq!(frame.scale_y(), 80.0);
    }

    #[test]
    fn test_plot_frame_maps_corners_and_flips_y() {
        let limits = Bounds::from_corners(Point::new(-1.0, -1.0), Point::new(1.0, 1.0));
        let area = Bounds::new_from_top_left(Point::new(0.0, 0.0), Size::new(200.0, 100.0));
        let frame = PlotFrame::fit(limits, area, true);

        // Equal aspect: square data range fits a 100x100 box centered horizontally
        assert_eq!(frame.area().min_x(), 50.0);
        assert_eq!(frame.area().width(), 100.0);

        let bottom_left = frame.to_canvas(Point::new(-1.0, -1.0));
        assert_eq!(bottom_left, Point::new(50.0, 100.0));
        let top_right = frame.to_canvas(Point::new(1.0, 1.0));
        assert_eq!(top_right, Point::new(150.0, 0.0));
    }

    #[test]
    fn test_plot_frame_rect_to_canvas() {
        let limits = Bounds::from_corners(Point::new(0.0, 0.0), Point::new(10.0, 10.0));
        let area = Bounds::new_from_top_left(Point::new(0.0, 0.0), Size::new(100.0, 100.0));
        let frame = PlotFrame::fit(limits, area, true);

        let rect = normalize(2.0, 4.0, 1.0, 3.0).unwrap();
        let canvas = frame.rect_to_canvas(&rect);
        assert_eq!(canvas.min_x(), 20.0);
        assert_eq!(canvas.max_x(), 40.0);
        assert_eq!(canvas.min_y(), 70.0);
        assert_eq!(canvas.max_y(), 90.0);
    }
}

#[cfg(test)]
mod proptest_tests {
    use float_cmp::approx_eq;
    use proptest::prelude::*;

    use super::*;

    fn coord() -> impl Strategy<Value = f64> {
        -1.0e6f64..1.0e6
    }

    /// Normalization yields ordered extents whose size matches the inputs.
    fn check_normalize_is_ordered(
        left: f64,
        right: f64,
        back: f64,
        front: f64,
    ) -> Result<(), TestCaseError> {
        let rect = normalize(left, right, back, front).unwrap();

        prop_assert!(rect.x_min() <= rect.x_max());
        prop_assert!(rect.y_min() <= rect.y_max());
        prop_assert!(approx_eq!(f64, rect.width(), (right - left).abs(), ulps = 4));
        prop_assert!(approx_eq!(f64, rect.height(), (front - back).abs(), ulps = 4));
        Ok(())
    }

    /// Swapping left/right or back/front yields the identical rectangle.
    fn check_normalize_is_order_independent(
        left: f64,
        right: f64,
        back: f64,
        front: f64,
    ) -> Result<(), TestCaseError> {
        let base = normalize(left, right, back, front).unwrap();

        prop_assert_eq!(base, normalize(right, left, back, front).unwrap());
        prop_assert_eq!(base, normalize(left, right, front, back).unwrap());
        prop_assert_eq!(base, normalize(right, left, front, back).unwrap());
        Ok(())
    }

    /// Padded limits always enclose the bounds with a non-empty viewport.
    fn check_padded_limits_enclose(
        left: f64,
        right: f64,
        back: f64,
        front: f64,
    ) -> Result<(), TestCaseError> {
        let bounds = normalize(left, right, back, front).unwrap().bounds();
        let limits = padded_limits(bounds, DEFAULT_PAD_FACTOR);

        prop_assert!(limits.width() > 0.0);
        prop_assert!(limits.height() > 0.0);
        prop_assert!(limits.contains(bounds.min_point()));
        prop_assert!(limits.contains(bounds.max_point()));
        Ok(())
    }

    proptest! {
        #[test]
        fn normalize_is_ordered(l in coord(), r in coord(), b in coord(), f in coord()) {
            check_normalize_is_ordered(l, r, b, f)?;
        }

        #[test]
        fn normalize_is_order_independent(l in coord(), r in coord(), b in coord(), f in coord()) {
            check_normalize_is_order_independent(l, r, b, f)?;
        }

        #[test]
        fn padded_limits_enclose(l in coord(), r in coord(), b in coord(), f in coord()) {
            check_padded_limits_enclose(l, r, b, f)?;
        }
    }
}
