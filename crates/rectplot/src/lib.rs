//! Rectplot - plot axis-aligned rectangles given by their boundary coordinates.
//!
//! Rectangles are entered as four numbers, `left right back front`, in any
//! order. The crate keeps them in a [`Session`], renders the set to SVG with
//! grid, center markers and legend, and exports the result as SVG, PNG, JPEG
//! or PDF.

pub mod config;
pub mod demo;
pub mod export;
pub mod render;

mod error;
mod options;
mod session;

pub use rectplot_core::{color, geometry, layout, rectangle};
pub use rectplot_parser::Command;

pub use error::RectplotError;
pub use options::PlotOptions;
pub use session::Session;

use std::path::{Path, PathBuf};

use log::{debug, info, trace};

use rectplot_core::rectangle::{Coords, Rectangle};

use config::AppConfig;

/// Entry point for parsing, rendering and exporting plots.
///
/// # Examples
///
/// ```rust,no_run
/// use rectplot::{Plotter, Session, config::AppConfig};
///
/// let plotter = Plotter::new(AppConfig::default());
///
/// let mut session = Session::new();
/// let coords = plotter.parse_coordinates("-0.70, 4.30, -0.01, 3.78")
///     .expect("Failed to parse");
/// session.add_rectangle(coords, None, None).expect("Invalid rectangle");
///
/// let path = plotter
///     .plot_to_file(session.list_rectangles(), plotter.config().plot(), "out/boxes.png".as_ref())
///     .expect("Failed to export");
/// println!("{}", path.display());
/// ```
#[derive(Debug, Default)]
pub struct Plotter {
    config: AppConfig,
}

impl Plotter {
    /// Create a new plotter with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Parses a line of four coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`RectplotError::Parse`] carrying the offending input.
    pub fn parse_coordinates(&self, line: &str) -> Result<Coords, RectplotError> {
        let coords = rectplot_parser::parse_coordinates(line)?;
        trace!(coords:%; "Parsed coordinates");
        Ok(coords)
    }

    /// Parses one line of interactive input.
    pub fn parse_command(&self, line: &str) -> Result<Command, RectplotError> {
        let command = rectplot_parser::parse_command(line)?;
        trace!(command:%; "Parsed command");
        Ok(command)
    }

    /// Renders rectangles to an SVG string using the configured style.
    ///
    /// # Errors
    ///
    /// Returns [`RectplotError::EmptySet`] for an empty slice.
    pub fn render_svg(
        &self,
        rectangles: &[Rectangle],
        options: &PlotOptions,
    ) -> Result<String, RectplotError> {
        let document = render::render_svg(rectangles, options, self.config.style())?;
        Ok(document.to_string())
    }

    /// Renders rectangles and writes them to `path`.
    ///
    /// The format follows the extension of `path`; raster formats use the
    /// configured dpi. Returns the path written.
    ///
    /// # Errors
    ///
    /// Returns [`RectplotError::EmptySet`] for an empty slice,
    /// [`RectplotError::UnsupportedFormat`] for an unknown extension and
    /// [`RectplotError::Export`] when writing fails. Nothing is rendered
    /// when the extension is unsupported.
    pub fn plot_to_file(
        &self,
        rectangles: &[Rectangle],
        options: &PlotOptions,
        path: &Path,
    ) -> Result<PathBuf, RectplotError> {
        export::ExportFormat::from_path(path)?;

        info!(count = rectangles.len(), path:? = path; "Plotting rectangles");
        let document = render::render_svg(rectangles, options, self.config.style())?;
        let written = export::export(&document, path, self.config.export().dpi())?;
        debug!("Plot written successfully");
        Ok(written)
    }

    /// A timestamped file name in the configured output directory and format.
    ///
    /// # Errors
    ///
    /// Returns [`RectplotError::Config`] if the configured format is invalid.
    pub fn default_output_path(&self) -> Result<PathBuf, RectplotError> {
        let export = self.config.export();
        let format = export.format().map_err(RectplotError::Config)?;
        Ok(export::timestamped_path(export.output_dir(), format.extension()))
    }
}
