//! Text rendering for tick labels, axis labels, titles and legend entries.
//!
//! - [`TextDefinition`] - Reusable font configuration
//! - [`Text`] - A renderable piece of text anchored at a point
//!
//! Text is measured with real font metrics through cosmic-text so the plot
//! can reserve exactly the margin its labels need.
//!
//! ```
//! # use rectplot_core::draw::{Text, TextAnchor, TextDefinition};
//! let mut style = TextDefinition::new();
//! style.set_font_size(14);
//!
//! let title = Text::new(&style, "Rectangle Plotter").with_anchor(TextAnchor::Middle);
//! let size = title.calculate_size();
//! assert!(size.width() > 0.0);
//! ```

use std::sync::{Mutex, OnceLock};

use cosmic_text::{Attrs, Buffer, Family, FontSystem, Metrics, Shaping, Weight};
use log::info;
use svg::{node::Text as SvgText, node::element as svg_element};

use crate::{
    draw::{Drawable, LayeredOutput, RenderLayer},
    geometry::{Point, Size},
};

/// Font settings shared by a group of text elements.
///
/// | Property | Default |
/// |----------|---------|
/// | Font family | `"sans-serif"` |
/// | Font size | `10` |
/// | Bold | `false` |
///
/// Text is always drawn in the SVG default fill, black.
#[derive(Debug, Clone, PartialEq)]
pub struct TextDefinition {
    font_family: String,
    font_size: u16,
    bold: bool,
}

impl TextDefinition {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the font size in points.
    pub fn set_font_size(&mut self, size: u16) {
        self.font_size = size;
    }

    /// Sets the font family, e.g. `"DejaVu Sans"` or `"monospace"`.
    pub fn set_font_family(&mut self, family: &str) {
        self.font_family = family.to_string();
    }

    pub fn set_bold(&mut self, bold: bool) {
        self.bold = bold;
    }

    pub fn font_size(&self) -> u16 {
        self.font_size
    }

    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    pub fn bold(&self) -> bool {
        self.bold
    }
}

impl Default for TextDefinition {
    fn default() -> Self {
        Self {
            font_family: "sans-serif".to_string(),
            font_size: 10,
            bold: false,
        }
    }
}

/// Horizontal alignment of text relative to its anchor point.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    #[default]
    Middle,
    End,
}

impl TextAnchor {
    /// Returns the SVG `text-anchor` value
    pub fn to_svg_value(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Middle => "middle",
            Self::End => "end",
        }
    }
}

/// A renderable text element.
///
/// The position passed to [`Drawable::render_to_layers`] is the anchor
/// point: horizontally aligned per [`TextAnchor`], vertically centered.
/// A rotation turns the text around that point.
#[derive(Debug, Clone)]
pub struct Text<'a> {
    definition: &'a TextDefinition,
    content: &'a str,
    anchor: TextAnchor,
    rotation: f64,
}

impl<'a> Text<'a> {
    pub fn new(definition: &'a TextDefinition, content: &'a str) -> Self {
        Self {
            definition,
            content,
            anchor: TextAnchor::default(),
            rotation: 0.0,
        }
    }

    pub fn with_anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// Rotates the text by `degrees` (counter-clockwise is negative, as in SVG).
    pub fn with_rotation(mut self, degrees: f64) -> Self {
        self.rotation = degrees;
        self
    }

    pub fn content(&self) -> &str {
        self.content
    }

    /// Size of the unrotated text in pixels.
    pub fn calculate_size(&self) -> Size {
        TEXT_MANAGER
            .get_or_init(TextManager::new)
            .calculate_text_size(self.content, self.definition)
    }

    fn is_quarter_turn(&self) -> bool {
        (self.rotation.rem_euclid(180.0) - 90.0).abs() < f64::EPSILON
    }
}

impl<'a> Drawable for Text<'a> {
    fn render_to_layers(&self, position: Point) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        let lines: Vec<&str> = self.content.lines().collect();
        if lines.is_empty() {
            return output;
        }

        let total_height = self.calculate_size().height();
        let line_height = total_height / lines.len() as f64;
        // First baseline sits half the block above the anchor
        let first_dy = -(total_height - line_height) / 2.0;

        let mut rendered_text = svg_element::Text::new("")
            .set("x", position.x())
            .set("y", position.y())
            .set("text-anchor", self.anchor.to_svg_value())
            .set("dominant-baseline", "central")
            .set("font-family", self.definition.font_family())
            .set("font-size", self.definition.font_size());

        if self.definition.bold() {
            rendered_text = rendered_text.set("font-weight", "bold");
        }

        if self.rotation != 0.0 {
            rendered_text = rendered_text.set(
                "transform",
                format!("rotate({} {} {})", self.rotation, position.x(), position.y()),
            );
        }

        if let [line] = lines.as_slice() {
            rendered_text = rendered_text.add(SvgText::new(*line));
        } else {
            for (i, line) in lines.into_iter().enumerate() {
                let dy = if i == 0 { first_dy } else { line_height };
                let tspan = svg_element::TSpan::new("")
                    .set("x", position.x())
                    .set("dy", dy)
                    .add(SvgText::new(line));
                rendered_text = rendered_text.add(tspan);
            }
        }

        output.add_to_layer(RenderLayer::Text, Box::new(rendered_text));
        output
    }

    /// Axis-aligned footprint, swapped for quarter-turn rotations.
    fn size(&self) -> Size {
        let size = self.calculate_size();
        if self.is_quarter_turn() {
            Size::new(size.height(), size.width())
        } else {
            size
        }
    }
}

/// Measures text with a shared `FontSystem`.
///
/// Creating a `FontSystem` scans the system fonts, so a single instance is
/// kept for the whole process.
struct TextManager {
    font_system: Mutex<FontSystem>,
}

impl TextManager {
    fn new() -> Self {
        info!("Initializing FontSystem");
        Self {
            font_system: Mutex::new(FontSystem::new()),
        }
    }

    /// Calculates the rendered size of `text` in pixels.
    ///
    /// Falls back to an estimate from the font size when no glyphs could be
    /// shaped, e.g. on hosts without any installed fonts.
    fn calculate_text_size(&self, text: &str, text_def: &TextDefinition) -> Size {
        if text.is_empty() {
            return Size::default();
        }

        let mut font_system = self
            .font_system
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        // Points to pixels at 96 dpi
        let font_size_px = text_def.font_size() as f32 * 1.33;
        let line_height = font_size_px * 1.15;
        let metrics = Metrics::new(font_size_px, line_height);

        let mut buffer = Buffer::new(&mut font_system, metrics);
        let mut buffer = buffer.borrow_with(&mut font_system);

        let family = match text_def.font_family() {
            "sans-serif" => Family::SansSerif,
            "serif" => Family::Serif,
            "monospace" => Family::Monospace,
            name => Family::Name(name),
        };
        let mut attrs = Attrs::new().family(family);
        if text_def.bold() {
            attrs = attrs.weight(Weight::BOLD);
        }

        buffer.set_size(None, None);
        buffer.set_text(text, &attrs, Shaping::Advanced, None);
        buffer.shape_until_scroll(true);

        let mut max_width: f32 = 0.0;
        let mut total_height: f32 = 0.0;
        for run in buffer.layout_runs() {
            if let Some(last) = run.glyphs.last() {
                max_width = max_width.max(last.x + last.w);
            }
            total_height += metrics.line_height;
        }

        let line_count = text.lines().count().max(1);
        if max_width <= 0.0 {
            let longest = text.lines().map(|l| l.chars().count()).max().unwrap_or(0);
            max_width = longest as f32 * font_size_px * 0.55;
        }
        if total_height <= 0.0 {
            total_height = line_count as f32 * metrics.line_height;
        }

        Size::new(f64::from(max_width), f64::from(total_height))
    }
}

static TEXT_MANAGER: OnceLock<TextManager> = OnceLock::new();

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_text_definition_defaults() {
        let def = TextDefinition::new();
        assert_eq!(def.font_size(), 10);
        assert_eq!(def.font_family(), "sans-serif");
        assert!(!def.bold());
    }

    #[test]
    fn test_text_definition_setters() {
        let mut def = TextDefinition::new();
        def.set_font_size(14);
        def.set_font_family("monospace");
        def.set_bold(true);

        assert_eq!(def.font_size(), 14);
        assert_eq!(def.font_family(), "monospace");
        assert!(def.bold());
    }

    #[test]
    fn test_text_calculate_size_empty() {
        let def = TextDefinition::new();
        let size = Text::new(&def, "").calculate_size();
        assert_approx_eq!(f64, size.width(), 0.0);
        assert_approx_eq!(f64, size.height(), 0.0);
    }

    #[test]
    fn test_text_calculate_size_single_line() {
        let def = TextDefinition::new();
        let size = Text::new(&def, "Left - Right Coordinates").calculate_size();
        assert!(size.width() > 0.0, "Width should be positive");
        assert!(size.height() > 0.0, "Height should be positive");
    }

    #[test]
    fn test_text_calculate_size_multiline() {
        let def = TextDefinition::new();
        let single = Text::new(&def, "Box 1").calculate_size();
        let multi = Text::new(&def, "Box 1\nBox 2").calculate_size();
        assert!(multi.height() > single.height());
    }

    #[test]
    fn test_text_larger_font_is_larger() {
        let mut small_def = TextDefinition::new();
        small_def.set_font_size(10);
        let mut large_def = TextDefinition::new();
        large_def.set_font_size(20);

        let small = Text::new(&small_def, "Test").calculate_size();
        let large = Text::new(&large_def, "Test").calculate_size();
        assert!(large.height() > small.height());
        assert!(large.width() > small.width());
    }

    #[test]
    fn test_rotated_text_swaps_footprint() {
        let def = TextDefinition::new();
        let flat = Text::new(&def, "Back - Front Coordinates");
        let rotated = flat.clone().with_rotation(-90.0);

        assert_approx_eq!(f64, rotated.size().width(), flat.size().height());
        assert_approx_eq!(f64, rotated.size().height(), flat.size().width());
    }

    #[test]
    fn test_text_render_sets_anchor_and_rotation() {
        let def = TextDefinition::new();
        let text = Text::new(&def, "y label")
            .with_anchor(TextAnchor::End)
            .with_rotation(-90.0);
        let output = text.render_to_layers(Point::new(10.0, 20.0));
        assert_eq!(output.layer_len(RenderLayer::Text), 1);

        let svg = output
            .render()
            .into_iter()
            .fold(svg::Document::new(), |doc, node| doc.add(node))
            .to_string();
        assert!(svg.contains("text-anchor=\"end\""));
        assert!(svg.contains("rotate(-90 10 20)"));
        assert!(svg.contains("y label"));
    }

    #[test]
    fn test_text_render_empty_is_empty() {
        let def = TextDefinition::new();
        let output = Text::new(&def, "").render_to_layers(Point::default());
        assert!(output.is_empty());
    }
}
