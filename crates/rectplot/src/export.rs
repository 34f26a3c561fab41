//! Writing rendered plots to disk.
//!
//! The output format follows the file extension:
//!
//! | Extension | Format | Backend |
//! |-----------|--------|---------|
//! | `svg` | vector | written as-is |
//! | `png` | raster | resvg |
//! | `jpg`, `jpeg` | raster | resvg, encoded with `image` |
//! | `pdf` | vector | svg2pdf |
//!
//! Raster output is rendered at the requested dpi, taking the SVG's user
//! units as 96 per inch. PDF pages keep the figure's physical size.
//!
//! # Error Handling
//!
//! Export operations return [`Error`], which converts into
//! [`RectplotError::Export`] at the crate boundary.
//!
//! [`RectplotError::Export`]: crate::RectplotError::Export

use std::{
    fmt,
    fs::{self, File},
    io::{self, Write as _},
    path::{Path, PathBuf},
};

use chrono::Local;
use log::{debug, error, info};
use resvg::{tiny_skia, usvg};
use svg::Document;

use crate::{RectplotError, render::PX_PER_INCH};

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Svg,
    Png,
    Jpeg,
    Pdf,
}

impl ExportFormat {
    /// Maps a file extension (case-insensitive, without the dot) to a format.
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "svg" => Some(Self::Svg),
            "png" => Some(Self::Png),
            "jpg" | "jpeg" => Some(Self::Jpeg),
            "pdf" => Some(Self::Pdf),
            _ => None,
        }
    }

    /// Determines the format of `path` from its extension.
    ///
    /// # Errors
    ///
    /// Returns [`RectplotError::UnsupportedFormat`] for a missing or unknown
    /// extension.
    pub fn from_path(path: &Path) -> Result<Self, RectplotError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default();
        Self::from_extension(extension)
            .ok_or_else(|| RectplotError::UnsupportedFormat(extension.to_string()))
    }

    /// The canonical extension used for generated file names.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Svg => "svg",
            Self::Png => "png",
            Self::Jpeg => "jpg",
            Self::Pdf => "pdf",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// Errors that can occur while writing a plot.
///
/// This type is converted into [`RectplotError::Export`] at the crate
/// boundary via the [`From`] implementation in [`crate::error`].
///
/// [`RectplotError::Export`]: crate::RectplotError::Export
#[derive(Debug)]
pub enum Error {
    /// The SVG could not be turned into pixels.
    Rasterize(String),
    /// The SVG could not be converted to PDF.
    Pdf(String),
    /// An I/O error while writing `path`.
    Io { path: PathBuf, source: io::Error },
    /// The raster image could not be encoded.
    Encode {
        path: PathBuf,
        source: image::ImageError,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rasterize(msg) => write!(f, "Rasterize error: {msg}"),
            Self::Pdf(msg) => write!(f, "PDF conversion error: {msg}"),
            Self::Io { path, source } => {
                write!(f, "failed to write `{}`: {source}", path.display())
            }
            Self::Encode { path, source } => {
                write!(f, "failed to encode `{}`: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Rasterize(_) | Self::Pdf(_) => None,
            Self::Io { source, .. } => Some(source),
            Self::Encode { source, .. } => Some(source),
        }
    }
}

/// Writes `document` to `path` in the format given by its extension.
///
/// Missing parent directories are created. `dpi` only affects raster
/// formats.
///
/// # Errors
///
/// Returns [`RectplotError::UnsupportedFormat`] for an unknown extension and
/// [`RectplotError::Export`] when rasterizing or writing fails.
pub fn export(document: &Document, path: &Path, dpi: u32) -> Result<PathBuf, RectplotError> {
    let format = ExportFormat::from_path(path)?;

    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| {
            error!(dir:? = parent, err:err = source; "Failed to create output directory");
            Error::Io {
                path: parent.to_path_buf(),
                source,
            }
        })?;
    }

    info!(path:? = path, format:% = format, dpi; "Exporting plot");
    match format {
        ExportFormat::Svg => write_svg(document, path)?,
        ExportFormat::Png => {
            let pixmap = rasterize(document, dpi, None)?;
            pixmap.save_png(path).map_err(|err| {
                error!(path:? = path, err:err; "Failed to write PNG");
                Error::Rasterize(format!("failed to write `{}`: {err}", path.display()))
            })?;
        }
        ExportFormat::Jpeg => {
            // JPEG has no alpha channel
            let pixmap = rasterize(document, dpi, Some(tiny_skia::Color::WHITE))?;
            write_jpeg(pixmap, path)?;
        }
        ExportFormat::Pdf => write_pdf(document, path)?,
    }

    info!(path:? = path; "Plot exported");
    Ok(path.to_path_buf())
}

/// Builds `dir/rectangles_<YYYYMMDD_HHMMSS>.<extension>` from the local time.
///
/// ```
/// # use std::path::Path;
/// # use rectplot::export::timestamped_path;
/// let path = timestamped_path(Path::new("out"), "png");
/// let name = path.file_name().unwrap().to_str().unwrap();
/// assert!(name.starts_with("rectangles_"));
/// assert!(name.ends_with(".png"));
/// assert_eq!(name.len(), "rectangles_20240101_120000.png".len());
/// ```
pub fn timestamped_path(dir: &Path, extension: &str) -> PathBuf {
    let stamp = Local::now().format("%Y%m%d_%H%M%S");
    dir.join(format!("rectangles_{stamp}.{extension}"))
}

fn write_svg(document: &Document, path: &Path) -> Result<(), Error> {
    let io_error = |source: io::Error| Error::Io {
        path: path.to_path_buf(),
        source,
    };

    debug!(path:? = path; "Creating SVG file");
    let mut file = File::create(path).map_err(|err| {
        error!(path:? = path, err:err; "Failed to create SVG file");
        io_error(err)
    })?;
    write!(file, "{document}").map_err(|err| {
        error!(path:? = path, err:err; "Failed to write SVG content");
        io_error(err)
    })
}

/// Parses the rendered document with system fonts available for text.
fn parse_tree(document: &Document) -> Result<usvg::Tree, String> {
    let mut options = usvg::Options::default();
    options.fontdb_mut().load_system_fonts();
    usvg::Tree::from_str(&document.to_string(), &options).map_err(|err| err.to_string())
}

/// Renders the SVG to a pixmap scaled from 96 to `dpi` pixels per inch.
fn rasterize(
    document: &Document,
    dpi: u32,
    background: Option<tiny_skia::Color>,
) -> Result<tiny_skia::Pixmap, Error> {
    if dpi == 0 {
        return Err(Error::Rasterize("dpi must be greater than zero".to_string()));
    }
    let scale = dpi as f32 / PX_PER_INCH as f32;
    let tree = parse_tree(document).map_err(Error::Rasterize)?;

    let size = tree.size();
    let width = (size.width() * scale).ceil() as u32;
    let height = (size.height() * scale).ceil() as u32;
    let mut pixmap = tiny_skia::Pixmap::new(width, height).ok_or_else(|| {
        Error::Rasterize(format!("cannot allocate a {width}x{height} pixmap"))
    })?;
    if let Some(color) = background {
        pixmap.fill(color);
    }

    resvg::render(
        &tree,
        tiny_skia::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );
    debug!(width, height, dpi; "Rasterized plot");
    Ok(pixmap)
}

/// Converts the SVG to a single-page PDF, text included as embedded fonts.
fn write_pdf(document: &Document, path: &Path) -> Result<(), Error> {
    let tree = parse_tree(document).map_err(Error::Pdf)?;

    let mut page = svg2pdf::PageOptions::default();
    page.dpi = PX_PER_INCH as f32;
    let pdf = svg2pdf::to_pdf(&tree, svg2pdf::ConversionOptions::default(), page)
        .map_err(|err| Error::Pdf(err.to_string()))?;

    debug!(path:? = path, bytes = pdf.len(); "Writing PDF file");
    fs::write(path, pdf).map_err(|source| {
        error!(path:? = path, err:err = source; "Failed to write PDF");
        Error::Io {
            path: path.to_path_buf(),
            source,
        }
    })
}

fn write_jpeg(pixmap: tiny_skia::Pixmap, path: &Path) -> Result<(), Error> {
    let (width, height) = (pixmap.width(), pixmap.height());
    // The pixmap is opaque, so premultiplied and straight alpha agree
    let rgba = image::RgbaImage::from_vec(width, height, pixmap.take())
        .ok_or_else(|| Error::Rasterize("pixmap size does not match its data".to_string()))?;
    let rgb = image::DynamicImage::ImageRgba8(rgba).to_rgb8();

    rgb.save_with_format(path, image::ImageFormat::Jpeg)
        .map_err(|source| {
            error!(path:? = path, err:err = source; "Failed to write JPEG");
            Error::Encode {
                path: path.to_path_buf(),
                source,
            }
        })
}
