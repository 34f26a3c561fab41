//! Rectangles and straight line segments.

use svg::node::element as svg_element;

use crate::{
    apply_stroke,
    color::Color,
    draw::{Drawable, LayeredOutput, RenderLayer, StrokeDefinition},
    geometry::{Point, Size},
};

/// An axis-aligned rectangle drawn centered on its position.
///
/// Degenerate rectangles (zero width or height) still render: the stroke
/// makes them visible as a line or a dot.
///
/// ```
/// # use rectplot_core::draw::{BoxShape, Drawable, RenderLayer, StrokeDefinition};
/// # use rectplot_core::color::Color;
/// # use rectplot_core::geometry::{Point, Size};
/// let outline = StrokeDefinition::solid(Color::new("blue").unwrap(), 2.0);
/// let shape = BoxShape::new(Size::new(40.0, 20.0), outline);
///
/// let output = shape.render_to_layers(Point::new(100.0, 100.0));
/// assert_eq!(output.layer_len(RenderLayer::Content), 1);
/// ```
#[derive(Debug, Clone)]
pub struct BoxShape {
    size: Size,
    stroke: StrokeDefinition,
    fill: Option<Color>,
    layer: RenderLayer,
}

impl BoxShape {
    pub fn new(size: Size, stroke: StrokeDefinition) -> Self {
        Self {
            size,
            stroke,
            fill: None,
            layer: RenderLayer::Content,
        }
    }

    /// Sets the fill color. `None` leaves the interior transparent.
    pub fn with_fill(mut self, fill: Option<Color>) -> Self {
        self.fill = fill;
        self
    }

    /// Moves the shape onto another layer, e.g. for backgrounds.
    pub fn with_layer(mut self, layer: RenderLayer) -> Self {
        self.layer = layer;
        self
    }

    pub fn stroke(&self) -> &StrokeDefinition {
        &self.stroke
    }

    pub fn fill(&self) -> Option<Color> {
        self.fill
    }
}

impl Drawable for BoxShape {
    fn render_to_layers(&self, position: Point) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        let top_left = position.to_bounds(self.size).min_point();

        let mut rect = svg_element::Rectangle::new()
            .set("x", top_left.x())
            .set("y", top_left.y())
            .set("width", self.size.width())
            .set("height", self.size.height());

        rect = match &self.fill {
            Some(fill) => rect
                .set("fill", fill.to_hex())
                .set("fill-opacity", fill.alpha()),
            None => rect.set("fill", "none"),
        };

        if self.stroke.width() > 0.0 {
            rect = apply_stroke!(rect, &self.stroke);
        }

        output.add_to_layer(self.layer, Box::new(rect));
        output
    }

    /// Footprint including half the stroke width on every side.
    fn size(&self) -> Size {
        Size::new(
            self.size.width() + self.stroke.width(),
            self.size.height() + self.stroke.width(),
        )
    }
}

/// A straight line segment, given relative to the render position.
#[derive(Debug, Clone)]
pub struct Segment {
    delta: Point,
    stroke: StrokeDefinition,
    layer: RenderLayer,
}

impl Segment {
    /// Creates a segment from the render position to the render position
    /// plus `delta`.
    pub fn new(delta: Point, stroke: StrokeDefinition, layer: RenderLayer) -> Self {
        Self {
            delta,
            stroke,
            layer,
        }
    }

    /// Creates the segment between two absolute points; render it at `from`.
    pub fn between(from: Point, to: Point, stroke: StrokeDefinition, layer: RenderLayer) -> Self {
        Self::new(to.sub_point(from), stroke, layer)
    }
}

impl Drawable for Segment {
    fn render_to_layers(&self, position: Point) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        let end = position.add_point(self.delta);
        let line = svg_element::Line::new()
            .set("x1", position.x())
            .set("y1", position.y())
            .set("x2", end.x())
            .set("y2", end.y());
        output.add_to_layer(self.layer, Box::new(apply_stroke!(line, &self.stroke)));
        output
    }

    fn size(&self) -> Size {
        Size::new(self.delta.x().abs(), self.delta.y().abs())
    }
}
