//! The set of rectangles being plotted.
//!
//! A [`Session`] owns the rectangles in insertion order and hands out stable
//! [`RectangleId`]s. Rectangles without an explicit color or label get one
//! from their position: palette color `n mod 8` and label `Box <n+1>`.

use log::{debug, info};

use rectplot_core::{
    color::Color,
    geometry::Bounds,
    layout,
    rectangle::{Coords, Rectangle, RectangleId, RectangleStyle},
};

use crate::RectplotError;

/// An ordered, editable set of rectangles.
///
/// ```
/// # use rectplot::Session;
/// # use rectplot_core::rectangle::Coords;
/// let mut session = Session::new();
/// session.add_rectangle(Coords::new(-0.70, 4.30, -0.01, 3.78), None, None).unwrap();
/// session.add_rectangle(Coords::new(-0.38, 0.52, 1.46, 3.46), None, None).unwrap();
///
/// let bbox = session.bounding_box().unwrap();
/// assert_eq!((bbox.min_x(), bbox.max_x()), (-0.70, 4.30));
/// assert_eq!((bbox.min_y(), bbox.max_y()), (-0.01, 3.78));
/// ```
#[derive(Debug, Default, Clone)]
pub struct Session {
    rectangles: Vec<Rectangle>,
    next_id: u64,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates and appends a rectangle.
    ///
    /// `style` and `label` default to the palette color and `Box <n>` label
    /// of the new rectangle's position.
    ///
    /// # Errors
    ///
    /// Returns [`RectplotError::Validation`] if a coordinate is not finite;
    /// the set is left unchanged.
    pub fn add_rectangle(
        &mut self,
        coords: Coords,
        style: Option<RectangleStyle>,
        label: Option<String>,
    ) -> Result<RectangleId, RectplotError> {
        let position = self.rectangles.len();
        let rectangle = self.build_rectangle(position, coords, style, label)?;
        let id = rectangle.id();

        debug!(id:% = id, coords:% = coords; "Rectangle added");
        self.rectangles.push(rectangle);
        self.next_id += 1;
        Ok(id)
    }

    /// Adds rectangles from parallel lists, the way the batch command line
    /// does.
    ///
    /// The i-th rectangle takes `colors[i]` and `labels[i]` when present,
    /// otherwise palette color `i mod 8` and label `Box <i+1>`, counted from
    /// the start of `rects`.
    ///
    /// # Errors
    ///
    /// Fails on the first rectangle that does not validate; none of the
    /// rectangles are added in that case.
    pub fn add_rectangles_from_list(
        &mut self,
        rects: &[Coords],
        colors: &[Color],
        labels: &[String],
    ) -> Result<Vec<RectangleId>, RectplotError> {
        let styles: Vec<RectangleStyle> = colors.iter().copied().map(RectangleStyle::new).collect();
        self.add_styled_rectangles(rects, &styles, labels)
    }

    /// Like [`Session::add_rectangles_from_list`], with a full style per
    /// rectangle instead of just a color.
    ///
    /// # Errors
    ///
    /// Fails on the first rectangle that does not validate; none of the
    /// rectangles are added in that case.
    pub fn add_styled_rectangles(
        &mut self,
        rects: &[Coords],
        styles: &[RectangleStyle],
        labels: &[String],
    ) -> Result<Vec<RectangleId>, RectplotError> {
        for coords in rects {
            coords.normalize()?;
        }

        let ids = rects
            .iter()
            .enumerate()
            .map(|(i, coords)| {
                let style = styles
                    .get(i)
                    .copied()
                    .unwrap_or_else(|| RectangleStyle::new(Color::from_palette(i)));
                let label = labels
                    .get(i)
                    .cloned()
                    .unwrap_or_else(|| format!("Box {}", i + 1));
                self.add_rectangle(*coords, Some(style), Some(label))
            })
            .collect::<Result<Vec<_>, _>>()?;

        info!(count = ids.len(), total = self.len(); "Rectangles added from list");
        Ok(ids)
    }

    /// Removes the rectangle with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`RectplotError::UnknownRectangle`] if no rectangle has `id`.
    pub fn remove_rectangle(&mut self, id: RectangleId) -> Result<Rectangle, RectplotError> {
        let index = self
            .rectangles
            .iter()
            .position(|rect| rect.id() == id)
            .ok_or(RectplotError::UnknownRectangle(id))?;
        let removed = self.rectangles.remove(index);
        debug!(id:% = id; "Rectangle removed");
        Ok(removed)
    }

    /// Removes the rectangle at a zero-based position in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`RectplotError::PositionOutOfRange`] past the end of the set.
    /// The reported position is one-based, matching [`Session::list_rectangles`]
    /// output shown to users.
    pub fn remove_at(&mut self, index: usize) -> Result<Rectangle, RectplotError> {
        if index >= self.rectangles.len() {
            return Err(RectplotError::PositionOutOfRange {
                position: index + 1,
                len: self.rectangles.len(),
            });
        }
        let removed = self.rectangles.remove(index);
        debug!(id:% = removed.id(), index; "Rectangle removed");
        Ok(removed)
    }

    /// Removes the most recently added rectangle, if any.
    pub fn pop_last(&mut self) -> Option<Rectangle> {
        let removed = self.rectangles.pop();
        if let Some(rect) = &removed {
            debug!(id:% = rect.id(); "Last rectangle removed");
        }
        removed
    }

    /// Removes every rectangle and returns how many were removed.
    ///
    /// Clearing an empty set does nothing.
    pub fn clear_all(&mut self) -> usize {
        let count = self.rectangles.len();
        self.rectangles.clear();
        if count > 0 {
            info!(count; "All rectangles cleared");
        }
        count
    }

    /// Returns the rectangles in insertion order.
    pub fn list_rectangles(&self) -> &[Rectangle] {
        &self.rectangles
    }

    /// Union extent of all rectangles, `None` for an empty set.
    pub fn bounding_box(&self) -> Option<Bounds> {
        layout::bounding_box(self.rectangles.iter().map(Rectangle::normalized))
    }

    pub fn is_empty(&self) -> bool {
        self.rectangles.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rectangles.len()
    }

    fn build_rectangle(
        &self,
        position: usize,
        coords: Coords,
        style: Option<RectangleStyle>,
        label: Option<String>,
    ) -> Result<Rectangle, RectplotError> {
        let style = style.unwrap_or_else(|| RectangleStyle::new(Color::from_palette(position)));
        let label = label.unwrap_or_else(|| format!("Box {}", position + 1));
        let id = RectangleId::new(self.next_id + 1);
        Ok(Rectangle::new(id, coords, style, label)?)
    }
}
