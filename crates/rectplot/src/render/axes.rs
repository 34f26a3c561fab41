//! Grid, axes frame, ticks and axis text.

use rectplot_core::{
    color::Color,
    draw::{BoxShape, Drawable as _, RenderLayer, Segment, StrokeDefinition, Text, TextAnchor},
    geometry::Point,
};

use super::{LABEL_PAD, PlotSvg, TICK_LENGTH, TICK_PAD, TITLE_PAD};

const FRAME_WIDTH: f64 = 1.0;
const ORIGIN_ALPHA: f32 = 0.3;
const ORIGIN_WIDTH: f64 = 0.5;

impl PlotSvg<'_> {
    /// Draws everything that belongs to the axes rather than the data.
    pub(super) fn render_axes(&mut self) {
        if self.options.show_grid() {
            self.render_grid();
        }
        if self.options.show_origin_axes() {
            self.render_origin_axes();
        }
        self.render_frame();
        self.render_ticks();
        self.render_axis_labels();
    }

    fn render_grid(&mut self) {
        let area = self.frame.area();
        let stroke = self.grid_stroke.clone();

        let xs: Vec<f64> = self.x_ticks.iter().map(|(value, _)| *value).collect();
        for x in xs {
            let cx = self.frame.to_canvas(Point::new(x, 0.0)).x();
            self.add_segment(
                Point::new(cx, area.min_y()),
                Point::new(cx, area.max_y()),
                &stroke,
                RenderLayer::Grid,
            );
        }

        let ys: Vec<f64> = self.y_ticks.iter().map(|(value, _)| *value).collect();
        for y in ys {
            let cy = self.frame.to_canvas(Point::new(0.0, y)).y();
            self.add_segment(
                Point::new(area.min_x(), cy),
                Point::new(area.max_x(), cy),
                &stroke,
                RenderLayer::Grid,
            );
        }
    }

    /// Faint lines along x = 0 and y = 0, where they fall inside the limits.
    fn render_origin_axes(&mut self) {
        let area = self.frame.area();
        let limits = self.frame.limits();
        let stroke = StrokeDefinition::solid(Color::default().with_alpha(ORIGIN_ALPHA), ORIGIN_WIDTH);
        let origin = self.frame.to_canvas(Point::default());

        if limits.min_y() <= 0.0 && limits.max_y() >= 0.0 {
            self.add_segment(
                Point::new(area.min_x(), origin.y()),
                Point::new(area.max_x(), origin.y()),
                &stroke,
                RenderLayer::Axes,
            );
        }
        if limits.min_x() <= 0.0 && limits.max_x() >= 0.0 {
            self.add_segment(
                Point::new(origin.x(), area.min_y()),
                Point::new(origin.x(), area.max_y()),
                &stroke,
                RenderLayer::Axes,
            );
        }
    }

    fn render_frame(&mut self) {
        let area = self.frame.area();
        let frame = BoxShape::new(
            area.to_size(),
            StrokeDefinition::solid(Color::default(), FRAME_WIDTH),
        )
        .with_layer(RenderLayer::Axes);
        self.output.merge(frame.render_to_layers(area.center()));
    }

    /// Tick marks on the bottom and left edges with their labels.
    fn render_ticks(&mut self) {
        let area = self.frame.area();
        let stroke = StrokeDefinition::solid(Color::default(), FRAME_WIDTH);
        let definition = self.fonts.tick.clone();

        let x_ticks: Vec<(f64, String)> = self.x_ticks.iter().cloned().collect();
        for (value, label) in &x_ticks {
            let x = self.frame.to_canvas(Point::new(*value, 0.0)).x();
            let base = Point::new(x, area.max_y());
            self.add_segment(
                base,
                base.with_y(base.y() + TICK_LENGTH),
                &stroke,
                RenderLayer::Axes,
            );

            let text = Text::new(&definition, label);
            let height = text.calculate_size().height();
            let position = base.with_y(base.y() + TICK_LENGTH + TICK_PAD + height / 2.0);
            self.add_text(&text, position, TextAnchor::Middle);
        }

        let y_ticks: Vec<(f64, String)> = self.y_ticks.iter().cloned().collect();
        for (value, label) in &y_ticks {
            let y = self.frame.to_canvas(Point::new(0.0, *value)).y();
            let base = Point::new(area.min_x(), y);
            self.add_segment(
                base,
                base.with_x(base.x() - TICK_LENGTH),
                &stroke,
                RenderLayer::Axes,
            );

            let text = Text::new(&definition, label).with_anchor(TextAnchor::End);
            let position = base.with_x(base.x() - TICK_LENGTH - TICK_PAD);
            self.add_text(&text, position, TextAnchor::End);
        }
    }

    /// x label below the tick labels, y label rotated left of them, title on top.
    fn render_axis_labels(&mut self) {
        let area = self.frame.area();
        let label_definition = self.fonts.label.clone();
        let title_definition = self.fonts.title.clone();
        let xlabel = self.options.xlabel().to_string();
        let ylabel = self.options.ylabel().to_string();
        let title = self.options.title().to_string();

        if !xlabel.is_empty() {
            let tick_height = self.x_ticks.label_extent(&self.fonts.tick).height();
            let text = Text::new(&label_definition, &xlabel);
            let height = text.calculate_size().height();
            let y = area.max_y() + TICK_LENGTH + TICK_PAD + tick_height + LABEL_PAD + height / 2.0;
            self.add_text(&text, Point::new(area.center().x(), y), TextAnchor::Middle);
        }

        if !ylabel.is_empty() {
            let tick_width = self.y_ticks.label_extent(&self.fonts.tick).width();
            let text = Text::new(&label_definition, &ylabel).with_rotation(-90.0);
            let height = text.calculate_size().height();
            let x = area.min_x() - TICK_LENGTH - TICK_PAD - tick_width - LABEL_PAD - height / 2.0;
            self.add_text(&text, Point::new(x, area.center().y()), TextAnchor::Middle);
        }

        if !title.is_empty() {
            let text = Text::new(&title_definition, &title);
            let height = text.calculate_size().height();
            let y = area.min_y() - TITLE_PAD - height / 2.0;
            self.add_text(&text, Point::new(area.center().x(), y), TextAnchor::Middle);
        }
    }

    fn add_segment(&mut self, from: Point, to: Point, stroke: &StrokeDefinition, layer: RenderLayer) {
        let segment = Segment::between(from, to, stroke.clone(), layer);
        self.output.merge(segment.render_to_layers(from));
    }
}
