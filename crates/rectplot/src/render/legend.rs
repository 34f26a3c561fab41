//! Legend listing every rectangle's label next to a line swatch.
//!
//! The legend sits in the upper right corner inside the axes box. All of its
//! nodes are moved onto [`RenderLayer::Legend`] so the entries stay above the
//! legend background.

use rectplot_core::{
    color::Color,
    draw::{BoxShape, Drawable as _, LayeredOutput, RenderLayer, Segment, StrokeDefinition, Text, TextAnchor},
    geometry::{Bounds, Point, Size},
    rectangle::Rectangle,
};

use super::{PlotSvg, text_bounds};

/// Gap between the axes frame and the legend box.
const LEGEND_MARGIN: f64 = 6.0;
const LEGEND_PADDING: f64 = 6.0;
const ENTRY_SPACING: f64 = 3.0;
const BACKGROUND_ALPHA: f32 = 0.8;
const EDGE_COLOR: &str = "#cccccc";

impl PlotSvg<'_> {
    pub(super) fn render_legend(&mut self, rectangles: &[Rectangle]) {
        if rectangles.is_empty() {
            return;
        }

        let definition = self.fonts.label.clone();
        let font_size = f64::from(definition.font_size());
        let swatch_length = 2.0 * font_size;
        let swatch_gap = 0.8 * font_size;

        let entries: Vec<(Text<'_>, Size, Color)> = rectangles
            .iter()
            .map(|rect| {
                let text = Text::new(&definition, rect.label()).with_anchor(TextAnchor::Start);
                let size = text.calculate_size();
                (text, size, rect.style().edge_color())
            })
            .collect();

        let text_width = entries
            .iter()
            .map(|(_, size, _)| size.width())
            .fold(0.0, f64::max);
        let entries_height: f64 = entries.iter().map(|(_, size, _)| size.height()).sum::<f64>()
            + ENTRY_SPACING * (entries.len() - 1) as f64;
        let box_size = Size::new(
            2.0 * LEGEND_PADDING + swatch_length + swatch_gap + text_width,
            2.0 * LEGEND_PADDING + entries_height,
        );

        let area = self.frame.area();
        let top_left = Point::new(
            area.max_x() - LEGEND_MARGIN - box_size.width(),
            area.min_y() + LEGEND_MARGIN,
        );
        let legend_bounds = Bounds::new_from_top_left(top_left, box_size);

        let mut output = LayeredOutput::new();
        let edge = StrokeDefinition::solid(edge_color(), 1.0);
        let background = BoxShape::new(box_size, edge)
            .with_fill(Some(self.background.with_alpha(BACKGROUND_ALPHA)));
        output.merge(background.render_to_layers(legend_bounds.center()));

        let mut y = top_left.y() + LEGEND_PADDING;
        for (text, size, color) in &entries {
            let row_center = y + size.height() / 2.0;
            let swatch_start = Point::new(top_left.x() + LEGEND_PADDING, row_center);
            let swatch_end = swatch_start.with_x(swatch_start.x() + swatch_length);
            let swatch = Segment::between(
                swatch_start,
                swatch_end,
                StrokeDefinition::solid(*color, self.line_width),
                RenderLayer::Legend,
            );
            output.merge(swatch.render_to_layers(swatch_start));

            let text_position = swatch_end.with_x(swatch_end.x() + swatch_gap);
            self.drawn = self
                .drawn
                .merge(&text_bounds(text, text_position, TextAnchor::Start));
            output.merge(text.render_to_layers(text_position));

            y += size.height() + ENTRY_SPACING;
        }

        self.drawn = self.drawn.merge(&legend_bounds);
        self.output.merge(output.into_layer(RenderLayer::Legend));
    }
}

fn edge_color() -> Color {
    Color::new(EDGE_COLOR).expect("legend edge color is a valid CSS color")
}

#[cfg(test)]
mod tests {
    use rectplot_core::rectangle::{Coords, RectangleId, RectangleStyle};

    use crate::{PlotOptions, config::StyleConfig};

    use super::*;

    fn rectangles(count: u64) -> Vec<Rectangle> {
        (0..count)
            .map(|i| {
                let v = i as f64;
                Rectangle::new(
                    RectangleId::new(i + 1),
                    Coords::new(v, v + 1.0, v, v + 1.0),
                    RectangleStyle::new(Color::from_palette(i as usize)),
                    format!("Rectangle {}", i + 1),
                )
                .unwrap()
            })
            .collect()
    }

    #[test]
    fn test_legend_nodes_on_legend_layer() {
        let options = PlotOptions::default();
        let limits = Bounds::from_corners(Point::new(0.0, 0.0), Point::new(3.0, 3.0));
        let mut svg = PlotSvg::new(&options, &StyleConfig::default(), limits).unwrap();

        svg.render_legend(&rectangles(3));

        // Background plus a swatch and a label per entry
        assert_eq!(svg.output.layer_len(RenderLayer::Legend), 7);
        assert_eq!(svg.output.layer_len(RenderLayer::Text), 0);
    }

    #[test]
    fn test_legend_inside_axes() {
        let options = PlotOptions::default();
        let limits = Bounds::from_corners(Point::new(0.0, 0.0), Point::new(3.0, 3.0));
        let mut svg = PlotSvg::new(&options, &StyleConfig::default(), limits).unwrap();
        let area = svg.frame.area();

        svg.render_legend(&rectangles(2));
        assert_eq!(svg.drawn, area);
    }

    #[test]
    fn test_legend_lists_labels_in_order() {
        let options = PlotOptions::default();
        let limits = Bounds::from_corners(Point::new(0.0, 0.0), Point::new(3.0, 3.0));
        let mut svg = PlotSvg::new(&options, &StyleConfig::default(), limits).unwrap();
        svg.render_legend(&rectangles(2));

        let document = svg.into_document().to_string();
        let first = document.find("Rectangle 1").unwrap();
        let second = document.find("Rectangle 2").unwrap();
        assert!(first < second);
    }
}
