//! Point markers, used to flag rectangle centers.

use std::str::FromStr;

use svg::node::element as svg_element;

use crate::{
    apply_stroke,
    color::Color,
    draw::{Drawable, LayeredOutput, RenderLayer, StrokeDefinition},
    geometry::{Point, Size},
};

/// Glyph drawn at a marked point.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum MarkerStyle {
    /// `+`
    #[default]
    Plus,
    /// `x`
    Cross,
    /// `o`
    Circle,
}

impl FromStr for MarkerStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "+" | "plus" => Ok(Self::Plus),
            "x" | "cross" => Ok(Self::Cross),
            "o" | "circle" => Ok(Self::Circle),
            other => Err(format!(
                "invalid marker `{other}`, valid values: +, x, o"
            )),
        }
    }
}

/// A marker of a given style, size and color, centered on its position.
///
/// `size` is the full extent of the glyph in canvas pixels.
#[derive(Debug, Clone)]
pub struct Marker {
    style: MarkerStyle,
    size: f64,
    stroke: StrokeDefinition,
}

impl Marker {
    pub fn new(style: MarkerStyle, size: f64, color: Color) -> Self {
        Self {
            style,
            size,
            stroke: StrokeDefinition::solid(color, 1.5),
        }
    }

    pub fn style(&self) -> MarkerStyle {
        self.style
    }
}

impl Drawable for Marker {
    fn render_to_layers(&self, position: Point) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        let half = self.size / 2.0;
        let (x, y) = (position.x(), position.y());

        let line = |x1: f64, y1: f64, x2: f64, y2: f64| {
            let line = svg_element::Line::new()
                .set("x1", x1)
                .set("y1", y1)
                .set("x2", x2)
                .set("y2", y2);
            apply_stroke!(line, &self.stroke)
        };

        match self.style {
            MarkerStyle::Plus => {
                output.add_to_layer(RenderLayer::Marker, Box::new(line(x - half, y, x + half, y)));
                output.add_to_layer(RenderLayer::Marker, Box::new(line(x, y - half, x, y + half)));
            }
            MarkerStyle::Cross => {
                output.add_to_layer(
                    RenderLayer::Marker,
                    Box::new(line(x - half, y - half, x + half, y + half)),
                );
                output.add_to_layer(
                    RenderLayer::Marker,
                    Box::new(line(x - half, y + half, x + half, y - half)),
                );
            }
            MarkerStyle::Circle => {
                let circle = svg_element::Circle::new()
                    .set("cx", x)
                    .set("cy", y)
                    .set("r", half)
                    .set("fill", "none");
                output.add_to_layer(
                    RenderLayer::Marker,
                    Box::new(apply_stroke!(circle, &self.stroke)),
                );
            }
        }

        output
    }

    fn size(&self) -> Size {
        Size::new(self.size, self.size)
    }
}
