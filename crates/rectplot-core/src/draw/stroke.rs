//! Stroke and line-style definitions.
//!
//! [`StrokeDefinition`] bundles everything needed to outline a rectangle,
//! draw a grid line or stroke a center marker. Line patterns accept both the
//! long names (`"dashed"`) and the short plotting notation (`"--"`).
//!
//! # Example
//!
//! ```
//! use rectplot_core::draw::{StrokeDefinition, StrokeStyle};
//! use rectplot_core::color::Color;
//! use svg::node::element as svg_element;
//!
//! let grid = StrokeDefinition::new(Color::new("gray").unwrap(), 0.8)
//!     .with_style("--".parse::<StrokeStyle>().unwrap());
//!
//! let line = svg_element::Line::new().set("x1", 0).set("x2", 10);
//! let line = rectplot_core::apply_stroke!(line, &grid);
//! ```
//!
//! # SVG Attribute Mapping
//!
//! | Rust Property | SVG Attribute | Example Values |
//! |--------------|---------------|----------------|
//! | `color` | `stroke`, `stroke-opacity` | `"#0000ff"`, `0.6` |
//! | `width` | `stroke-width` | `2.0` |
//! | `style` | `stroke-dasharray` | `"6,4"` |

use std::{fmt, str::FromStr};

use crate::color::Color;

/// Line pattern of a stroke.
///
/// Dash lengths are expressed in multiples of the stroke width so a thin
/// grid line and a thick outline share the same visual rhythm.
#[derive(Debug, Default, Clone, PartialEq)]
pub enum StrokeStyle {
    /// Continuous line
    #[default]
    Solid,
    /// `--`
    Dashed,
    /// `:`
    Dotted,
    /// `-.`
    DashDot,
    /// Raw SVG dasharray, used verbatim
    Custom(String),
}

impl StrokeStyle {
    /// Returns the SVG dasharray for a stroke of the given width, or `None`
    /// for solid lines.
    pub fn to_svg_value(&self, width: f64) -> Option<String> {
        let pattern: &[f64] = match self {
            Self::Solid => return None,
            Self::Custom(pattern) => return Some(pattern.clone()),
            Self::Dashed => &[3.7, 1.6],
            Self::Dotted => &[1.0, 1.65],
            Self::DashDot => &[6.4, 1.6, 1.0, 1.6],
        };
        let width = width.max(1.0);
        let dashes: Vec<String> = pattern
            .iter()
            .map(|len| format!("{}", len * width))
            .collect();
        Some(dashes.join(","))
    }
}

impl FromStr for StrokeStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" => Err("stroke style cannot be empty".to_string()),
            "solid" | "-" => Ok(Self::Solid),
            "dashed" | "--" => Ok(Self::Dashed),
            "dotted" | ":" => Ok(Self::Dotted),
            "dash-dot" | "dashdot" | "-." => Ok(Self::DashDot),
            pattern => {
                let valid = pattern
                    .split([',', ' '])
                    .filter(|part| !part.is_empty())
                    .all(|part| part.parse::<f64>().is_ok_and(|len| len >= 0.0));
                if valid {
                    Ok(Self::Custom(pattern.to_string()))
                } else {
                    Err(format!(
                        "invalid stroke style `{pattern}`, valid values: solid, dashed, dotted, \
                         dash-dot, -, --, :, -. or a dasharray such as `5,3`"
                    ))
                }
            }
        }
    }
}

impl fmt::Display for StrokeStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Solid => write!(f, "solid"),
            Self::Dashed => write!(f, "dashed"),
            Self::Dotted => write!(f, "dotted"),
            Self::DashDot => write!(f, "dash-dot"),
            Self::Custom(pattern) => write!(f, "{pattern}"),
        }
    }
}

/// Color, width and dash pattern of a drawn line.
///
/// Line ends are always butt caps, so a tick mark ends exactly at its
/// nominal length.
///
/// ```
/// use rectplot_core::draw::{StrokeDefinition, StrokeStyle};
/// use rectplot_core::color::Color;
///
/// let outline = StrokeDefinition::solid(Color::new("red").unwrap(), 2.0);
/// assert!(outline.dasharray().is_none());
///
/// let grid = StrokeDefinition::new(Color::new("gray").unwrap().with_alpha(0.6), 0.8)
///     .with_style(StrokeStyle::Dotted);
/// assert_eq!(grid.dasharray().unwrap(), "1,1.65");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeDefinition {
    color: Color,
    width: f64,
    style: StrokeStyle,
}

impl StrokeDefinition {
    /// A solid stroke.
    pub fn new(color: Color, width: f64) -> Self {
        Self {
            color,
            width,
            style: StrokeStyle::Solid,
        }
    }

    pub fn solid(color: Color, width: f64) -> Self {
        Self::new(color, width)
    }

    pub fn dashed(color: Color, width: f64) -> Self {
        Self::new(color, width).with_style(StrokeStyle::Dashed)
    }

    pub fn with_style(self, style: StrokeStyle) -> Self {
        Self { style, ..self }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn style(&self) -> &StrokeStyle {
        &self.style
    }

    /// Dash pattern scaled to this stroke's width, `None` when solid.
    pub fn dasharray(&self) -> Option<String> {
        self.style.to_svg_value(self.width)
    }
}

impl Default for StrokeDefinition {
    fn default() -> Self {
        Self::new(Color::default(), 1.0)
    }
}

/// Sets `stroke`, `stroke-opacity`, `stroke-width` and, unless solid,
/// `stroke-dasharray` on an SVG element.
#[macro_export]
macro_rules! apply_stroke {
    ($element:expr, $stroke:expr) => {{
        let stroke = $stroke;
        let element = $element
            .set("stroke", stroke.color().to_hex())
            .set("stroke-opacity", stroke.color().alpha())
            .set("stroke-width", stroke.width());

        match stroke.dasharray() {
            Some(dasharray) => element.set("stroke-dasharray", dasharray),
            None => element,
        }
    }};
}
