//! Configuration types for rectplot rendering and export.
//!
//! All types implement [`serde::Deserialize`] so a TOML file can override any
//! subset of the defaults.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining the sections below.
//! - [`PlotOptions`] - What to draw (`[plot]`).
//! - [`StyleConfig`] - How it looks (`[style]`).
//! - [`ExportConfig`] - Where and how files are written (`[export]`).
//!
//! # Example
//!
//! ```
//! # use rectplot::config::AppConfig;
//! let config = AppConfig::default();
//! assert!(config.style().background_color().is_ok());
//! assert_eq!(config.export().dpi(), 300);
//! ```

use std::path::Path;

use serde::Deserialize;

use rectplot_core::{
    color::Color,
    draw::{MarkerStyle, StrokeStyle},
};

use crate::{PlotOptions, export::ExportFormat};

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    #[serde(default)]
    plot: PlotOptions,

    #[serde(default)]
    style: StyleConfig,

    #[serde(default)]
    export: ExportConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its three sections.
    pub fn new(plot: PlotOptions, style: StyleConfig, export: ExportConfig) -> Self {
        Self {
            plot,
            style,
            export,
        }
    }

    /// Returns the default plot options.
    pub fn plot(&self) -> &PlotOptions {
        &self.plot
    }

    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    pub fn export(&self) -> &ExportConfig {
        &self.export
    }

    /// Replaces the plot options, e.g. with values taken from the command line.
    pub fn with_plot(mut self, plot: PlotOptions) -> Self {
        self.plot = plot;
        self
    }

    pub fn with_export(mut self, export: ExportConfig) -> Self {
        self.export = export;
        self
    }
}

/// Visual styling of rendered plots.
///
/// Colors and styles are kept as strings and parsed on access so a bad value
/// is reported with the name of the offending key.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StyleConfig {
    /// Rectangle outline width in pixels.
    line_width: f64,
    marker: String,
    /// Center marker size in points.
    marker_size: f64,
    font_family: String,
    font_size: u16,
    title_font_size: u16,
    background_color: String,
    grid_color: String,
    grid_style: String,
    grid_alpha: f32,
    /// Figure width in inches.
    figure_width: f64,
    /// Figure height in inches.
    figure_height: f64,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            line_width: 2.0,
            marker: "+".to_string(),
            marker_size: 10.0,
            font_family: "sans-serif".to_string(),
            font_size: 10,
            title_font_size: 14,
            background_color: "white".to_string(),
            grid_color: "#b0b0b0".to_string(),
            grid_style: "--".to_string(),
            grid_alpha: 0.6,
            figure_width: 10.0,
            figure_height: 8.0,
        }
    }
}

impl StyleConfig {
    pub fn line_width(&self) -> f64 {
        self.line_width
    }

    pub fn marker_size(&self) -> f64 {
        self.marker_size
    }

    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    pub fn font_size(&self) -> u16 {
        self.font_size
    }

    pub fn title_font_size(&self) -> u16 {
        self.title_font_size
    }

    pub fn grid_alpha(&self) -> f32 {
        self.grid_alpha
    }

    /// Figure width and height in inches.
    pub fn figure_size(&self) -> (f64, f64) {
        (self.figure_width, self.figure_height)
    }

    /// Returns the parsed center [`MarkerStyle`].
    ///
    /// # Errors
    ///
    /// Returns an error if the configured marker is not one of `+`, `x`, `o`.
    pub fn marker(&self) -> Result<MarkerStyle, String> {
        self.marker
            .parse()
            .map_err(|err| format!("Invalid marker in config: {err}"))
    }

    /// Returns the parsed background [`Color`].
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed
    /// into a valid [`Color`].
    pub fn background_color(&self) -> Result<Color, String> {
        Color::new(&self.background_color)
            .map_err(|err| format!("Invalid background color in config: {err}"))
    }

    /// Returns the grid line color with the configured grid alpha applied.
    pub fn grid_color(&self) -> Result<Color, String> {
        Color::new(&self.grid_color)
            .map(|color| color.with_alpha(self.grid_alpha.clamp(0.0, 1.0)))
            .map_err(|err| format!("Invalid grid color in config: {err}"))
    }

    pub fn grid_style(&self) -> Result<StrokeStyle, String> {
        self.grid_style
            .parse()
            .map_err(|err| format!("Invalid grid style in config: {err}"))
    }
}

/// Output settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExportConfig {
    dpi: u32,
    output_dir: String,
    format: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            dpi: 300,
            output_dir: "out".to_string(),
            format: "png".to_string(),
        }
    }
}

impl ExportConfig {
    /// Creates an export section; `format` is an extension such as `"svg"`.
    pub fn new(dpi: u32, output_dir: impl Into<String>, format: impl Into<String>) -> Self {
        Self {
            dpi,
            output_dir: output_dir.into(),
            format: format.into(),
        }
    }

    /// Raster resolution in dots per inch.
    pub fn dpi(&self) -> u32 {
        self.dpi
    }

    /// Directory used for generated file names.
    pub fn output_dir(&self) -> &Path {
        Path::new(&self.output_dir)
    }

    /// Returns the default output format.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured format is not a supported extension.
    pub fn format(&self) -> Result<ExportFormat, String> {
        ExportFormat::from_extension(&self.format)
            .ok_or_else(|| format!("Invalid export format in config: `{}`", self.format))
    }

    pub fn with_dpi(mut self, dpi: u32) -> Self {
        self.dpi = dpi;
        self
    }

    pub fn with_output_dir(mut self, output_dir: impl Into<String>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }
}
