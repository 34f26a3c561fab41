//! SVG rendering of a rectangle set.
//!
//! [`render_svg`] lays the plot out on a figure of the configured size,
//! draws every element into a [`LayeredOutput`] and crops the resulting
//! document to the drawn content.
//!
//! # Pipeline
//!
//! ```text
//! rectangles
//!     ↓ bounding_box + padded_limits
//! axis limits and ticks
//!     ↓ margins from measured labels, PlotFrame::fit
//! plot frame (data → canvas)
//!     ↓ axes, rectangles, markers, legend
//! LayeredOutput
//!     ↓ tight crop
//! svg::Document
//! ```

mod axes;
mod legend;

use log::{debug, info};
use svg::Document;

use rectplot_core::{
    color::Color,
    draw::{
        BoxShape, Drawable as _, LayeredOutput, Marker, MarkerStyle, RenderLayer,
        StrokeDefinition, Text, TextAnchor, TextDefinition,
    },
    geometry::{Bounds, Insets, Point, Size},
    layout::{self, PlotFrame},
    rectangle::Rectangle,
};

use crate::{PlotOptions, RectplotError, config::StyleConfig};

/// SVG user units per inch.
pub const PX_PER_INCH: f64 = 96.0;

const PX_PER_POINT: f64 = PX_PER_INCH / 72.0;
const MAX_TICKS: usize = 9;
const TICK_LENGTH: f64 = 3.5 * PX_PER_POINT;
const TICK_PAD: f64 = 3.5 * PX_PER_POINT;
const LABEL_PAD: f64 = 4.0 * PX_PER_POINT;
const TITLE_PAD: f64 = 6.0 * PX_PER_POINT;
/// Margin kept around the drawn content when cropping.
const CROP_PAD: f64 = 0.1 * PX_PER_INCH;
const MIN_AXES_SIZE: f64 = 48.0;

/// Renders `rectangles` into an SVG document.
///
/// # Errors
///
/// Returns [`RectplotError::EmptySet`] when there is nothing to plot, and
/// [`RectplotError::Config`] when a style value cannot be parsed.
///
/// # Examples
///
/// ```
/// # use rectplot::{PlotOptions, Session, config::StyleConfig, render::render_svg};
/// # use rectplot_core::rectangle::Coords;
/// let mut session = Session::new();
/// session.add_rectangle(Coords::new(1.0, 5.0, 2.0, 6.0), None, None).unwrap();
///
/// let document = render_svg(
///     session.list_rectangles(),
///     &PlotOptions::default(),
///     &StyleConfig::default(),
/// )
/// .unwrap();
/// assert!(document.to_string().contains("data-layer=\"content\""));
/// ```
pub fn render_svg(
    rectangles: &[Rectangle],
    options: &PlotOptions,
    style: &StyleConfig,
) -> Result<Document, RectplotError> {
    let bbox = layout::bounding_box(rectangles.iter().map(Rectangle::normalized))
        .ok_or(RectplotError::EmptySet("plot"))?;
    info!(count = rectangles.len(); "Rendering rectangles");

    let limits = layout::padded_limits(bbox, options.pad_factor());
    let mut svg = PlotSvg::new(options, style, limits)?;

    svg.render_axes();
    for rectangle in rectangles {
        svg.render_rectangle(rectangle);
    }
    if options.show_legend() {
        svg.render_legend(rectangles);
    }

    let document = svg.into_document();
    debug!("SVG document rendered");
    Ok(document)
}

/// Tick positions along one axis with their labels.
#[derive(Debug, Default)]
struct AxisTicks {
    ticks: Vec<(f64, String)>,
}

impl AxisTicks {
    fn new(lo: f64, hi: f64) -> Self {
        let (values, step) = layout::nice_ticks(lo, hi, MAX_TICKS);
        let ticks = values
            .into_iter()
            .filter(|value| *value >= lo && *value <= hi)
            .map(|value| (value, layout::format_tick(value, step)))
            .collect();
        Self { ticks }
    }

    fn iter(&self) -> impl Iterator<Item = &(f64, String)> {
        self.ticks.iter()
    }

    /// Largest label extent along this axis.
    fn label_extent(&self, definition: &TextDefinition) -> Size {
        self.ticks
            .iter()
            .map(|(_, label)| Text::new(definition, label).calculate_size())
            .fold(Size::default(), Size::max)
    }
}

/// Text definitions for the different kinds of plot text.
#[derive(Debug)]
struct PlotFonts {
    tick: TextDefinition,
    label: TextDefinition,
    title: TextDefinition,
}

impl PlotFonts {
    fn new(style: &StyleConfig) -> Self {
        let mut tick = TextDefinition::new();
        tick.set_font_family(style.font_family());
        tick.set_font_size(style.font_size());

        let label = tick.clone();

        let mut title = tick.clone();
        title.set_font_size(style.title_font_size());
        title.set_bold(true);

        Self { tick, label, title }
    }
}

/// Accumulates the layered output of one plot.
#[derive(Debug)]
struct PlotSvg<'a> {
    options: &'a PlotOptions,
    frame: PlotFrame,
    x_ticks: AxisTicks,
    y_ticks: AxisTicks,
    fonts: PlotFonts,
    line_width: f64,
    marker: MarkerStyle,
    marker_size: f64,
    background: Color,
    grid_stroke: StrokeDefinition,
    output: LayeredOutput,
    /// Union of everything drawn so far, in canvas space.
    drawn: Bounds,
}

impl<'a> PlotSvg<'a> {
    fn new(
        options: &'a PlotOptions,
        style: &StyleConfig,
        limits: Bounds,
    ) -> Result<Self, RectplotError> {
        let background = style.background_color().map_err(RectplotError::Config)?;
        let marker = style.marker().map_err(RectplotError::Config)?;
        let grid_stroke =
            StrokeDefinition::new(style.grid_color().map_err(RectplotError::Config)?, 0.8)
                .with_style(style.grid_style().map_err(RectplotError::Config)?);

        let fonts = PlotFonts::new(style);
        let x_ticks = AxisTicks::new(limits.min_x(), limits.max_x());
        let y_ticks = AxisTicks::new(limits.min_y(), limits.max_y());

        let (width_in, height_in) = style.figure_size();
        let figure = Bounds::new_from_top_left(
            Point::default(),
            Size::new(width_in * PX_PER_INCH, height_in * PX_PER_INCH),
        );
        let margins = Self::margins(options, &fonts, &x_ticks, &y_ticks);
        let available = clamp_axes_area(figure.shrink(margins));
        let frame = PlotFrame::fit(limits, available, options.equal_aspect());
        debug!(
            width = frame.area().width(),
            height = frame.area().height(),
            scale_x = frame.scale_x(),
            scale_y = frame.scale_y();
            "Plot frame fitted"
        );

        Ok(Self {
            options,
            frame,
            x_ticks,
            y_ticks,
            fonts,
            line_width: style.line_width(),
            marker,
            marker_size: style.marker_size() * PX_PER_POINT,
            background,
            grid_stroke,
            output: LayeredOutput::new(),
            drawn: frame.area(),
        })
    }

    /// Room reserved around the axes box for ticks, labels and the title.
    fn margins(
        options: &PlotOptions,
        fonts: &PlotFonts,
        x_ticks: &AxisTicks,
        y_ticks: &AxisTicks,
    ) -> Insets {
        let text_height = |definition: &TextDefinition, content: &str| {
            if content.is_empty() {
                0.0
            } else {
                Text::new(definition, content).calculate_size().height()
            }
        };
        let x_tick_size = x_ticks.label_extent(&fonts.tick);
        let y_tick_size = y_ticks.label_extent(&fonts.tick);

        Insets::new(
            CROP_PAD + text_height(&fonts.title, options.title()) + TITLE_PAD,
            CROP_PAD + x_tick_size.width() / 2.0,
            CROP_PAD
                + TICK_LENGTH
                + TICK_PAD
                + x_tick_size.height()
                + LABEL_PAD
                + text_height(&fonts.label, options.xlabel()),
            CROP_PAD
                + TICK_LENGTH
                + TICK_PAD
                + y_tick_size.width()
                + LABEL_PAD
                + text_height(&fonts.label, options.ylabel()),
        )
    }

    /// Draws one rectangle outline and, when enabled, its center marker.
    fn render_rectangle(&mut self, rectangle: &Rectangle) {
        let style = rectangle.style();
        let bounds = self.frame.rect_to_canvas(rectangle.normalized());

        let shape = BoxShape::new(
            bounds.to_size(),
            StrokeDefinition::solid(style.edge_color(), self.line_width),
        )
        .with_fill(style.facecolor());
        self.output.merge(shape.render_to_layers(bounds.center()));

        if self.options.show_centers() {
            let center = self.frame.to_canvas(rectangle.normalized().center());
            let marker = Marker::new(self.marker, self.marker_size, style.color());
            self.output.merge(marker.render_to_layers(center));
        }
    }

    /// Draws `text` at `position` and records its footprint.
    fn add_text(&mut self, text: &Text<'_>, position: Point, anchor: TextAnchor) -> Bounds {
        let bounds = text_bounds(text, position, anchor);
        self.output.merge(text.render_to_layers(position));
        self.drawn = self.drawn.merge(&bounds);
        bounds
    }

    /// Crops to the drawn content and assembles the document.
    fn into_document(self) -> Document {
        let crop = self.drawn.add_padding(Insets::uniform(CROP_PAD));

        let mut output = LayeredOutput::new();
        let background = BoxShape::new(
            crop.to_size(),
            StrokeDefinition::new(self.background, 0.0),
        )
        .with_fill(Some(self.background))
        .with_layer(RenderLayer::Background);
        output.merge(background.render_to_layers(crop.center()));
        output.merge(self.output);

        let view_box = format!(
            "{} {} {} {}",
            crop.min_x(),
            crop.min_y(),
            crop.width(),
            crop.height()
        );
        output.render().into_iter().fold(
            Document::new()
                .set("viewBox", view_box)
                .set("width", crop.width())
                .set("height", crop.height()),
            |document, node| document.add(node),
        )
    }
}

/// Keeps the axes area usable when labels eat most of a small figure.
fn clamp_axes_area(area: Bounds) -> Bounds {
    if area.width() >= MIN_AXES_SIZE && area.height() >= MIN_AXES_SIZE {
        return area;
    }
    let size = Size::new(
        area.width().max(MIN_AXES_SIZE),
        area.height().max(MIN_AXES_SIZE),
    );
    Bounds::new_from_center(area.center(), size)
}

/// Canvas footprint of `text` drawn at `position` with `anchor`.
fn text_bounds(text: &Text<'_>, position: Point, anchor: TextAnchor) -> Bounds {
    let size = text.size();
    let center = match anchor {
        TextAnchor::Start => position.with_x(position.x() + size.width() / 2.0),
        TextAnchor::Middle => position,
        TextAnchor::End => position.with_x(position.x() - size.width() / 2.0),
    };
    Bounds::new_from_center(center, size)
}
