//! Command-line argument definitions for the rectplot CLI.
//!
//! [`Args`] holds the global flags and one of three subcommands: `plot` for
//! rectangles given on the command line, `interactive` for rectangles typed
//! one per line, and `demo` for the built-in examples.

use clap::{Parser, Subcommand};

use rectplot::PlotOptions;

/// Command-line arguments for the rectangle plotter
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file (TOML)
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info", global = true)]
    pub log_level: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Plot rectangles given on the command line
    Plot(PlotArgs),
    /// Enter rectangles one per line and plot them on `done`
    Interactive(InteractiveArgs),
    /// Render the built-in example plots
    Demo(DemoArgs),
}

#[derive(clap::Args, Debug)]
pub struct PlotArgs {
    /// Rectangle as "left,right,back,front"; repeat for more rectangles
    #[arg(short = 'r', long = "rect", required = true, allow_hyphen_values = true)]
    pub rects: Vec<String>,

    /// Color of the n-th rectangle; missing colors cycle the default palette
    #[arg(short = 'c', long = "color")]
    pub colors: Vec<String>,

    /// Label of the n-th rectangle; missing labels become "Box <n>"
    #[arg(short = 'l', long = "label")]
    pub labels: Vec<String>,

    /// Fill color of the n-th rectangle; missing fill colors leave it hollow
    #[arg(short = 'f', long = "facecolor")]
    pub facecolors: Vec<String>,

    /// Opacity of every rectangle, from 0 (invisible) to 1 (opaque)
    #[arg(long, default_value_t = 1.0)]
    pub alpha: f32,

    /// Output file (.svg, .png, .jpg, .pdf); defaults to a timestamped file
    #[arg(short, long)]
    pub output: Option<String>,

    /// Raster resolution in dots per inch
    #[arg(long)]
    pub dpi: Option<u32>,

    #[command(flatten)]
    pub plot: PlotFlags,
}

#[derive(clap::Args, Debug)]
pub struct InteractiveArgs {
    /// Output file (.svg, .png, .jpg, .pdf); defaults to a timestamped file
    #[arg(short, long)]
    pub output: Option<String>,

    /// Format of the timestamped default output file (svg, png, jpg, pdf)
    #[arg(long)]
    pub format: Option<String>,

    /// Raster resolution in dots per inch
    #[arg(long)]
    pub dpi: Option<u32>,

    #[command(flatten)]
    pub plot: PlotFlags,
}

#[derive(clap::Args, Debug)]
pub struct DemoArgs {
    /// Directory the demo plots are written to
    #[arg(short = 'd', long = "dir")]
    pub dir: Option<String>,

    /// Output format of the demo plots (svg, png, jpg, pdf)
    #[arg(long)]
    pub format: Option<String>,

    /// Raster resolution in dots per inch
    #[arg(long)]
    pub dpi: Option<u32>,
}

/// Presentation flags shared by `plot` and `interactive`.
#[derive(clap::Args, Debug, Default, Clone)]
pub struct PlotFlags {
    /// Plot title
    #[arg(long)]
    pub title: Option<String>,

    /// x axis label
    #[arg(long)]
    pub xlabel: Option<String>,

    /// y axis label
    #[arg(long)]
    pub ylabel: Option<String>,

    /// Hide the grid
    #[arg(long)]
    pub no_grid: bool,

    /// Hide the center markers
    #[arg(long)]
    pub no_centers: bool,

    /// Scale the axes independently
    #[arg(long)]
    pub no_equal_aspect: bool,

    /// Hide the legend
    #[arg(long)]
    pub no_legend: bool,

    /// Draw faint lines through the origin
    #[arg(long)]
    pub origin_axes: bool,
}

impl PlotFlags {
    /// Applies the flags on top of `base`; unset flags keep the base value.
    pub fn apply(&self, base: PlotOptions) -> PlotOptions {
        let mut options = base;
        if let Some(title) = &self.title {
            options = options.with_title(title.as_str());
        }
        if let Some(xlabel) = &self.xlabel {
            options = options.with_xlabel(xlabel.as_str());
        }
        if let Some(ylabel) = &self.ylabel {
            options = options.with_ylabel(ylabel.as_str());
        }
        if self.no_grid {
            options = options.with_grid(false);
        }
        if self.no_centers {
            options = options.with_centers(false);
        }
        if self.no_equal_aspect {
            options = options.with_equal_aspect(false);
        }
        if self.no_legend {
            options = options.with_legend(false);
        }
        if self.origin_axes {
            options = options.with_origin_axes(true);
        }
        options
    }
}
