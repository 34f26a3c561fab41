//! CLI logic for the rectangle plotter.
//!
//! [`run`] dispatches the parsed [`Args`] to the `plot`, `interactive` and
//! `demo` subcommands.

pub mod error_adapter;
pub mod repl;

mod args;
mod config;

pub use args::{Args, Commands, DemoArgs, InteractiveArgs, PlotArgs, PlotFlags};

use std::{
    io,
    path::{Path, PathBuf},
};

use log::info;

use rectplot::{
    Plotter, RectplotError, Session,
    color::Color,
    config::AppConfig,
    demo::Demo,
    export::ExportFormat,
    rectangle::RectangleStyle,
};

use repl::{Outcome, Repl};

/// Run the rectplot CLI application
///
/// # Errors
///
/// Returns `RectplotError` for:
/// - Configuration loading errors
/// - Invalid coordinates, colors or output formats
/// - Rendering and export errors
pub fn run(args: &Args) -> Result<(), RectplotError> {
    let app_config = config::load_config(args.config.as_ref())?;

    match &args.command {
        Commands::Plot(plot_args) => {
            let path = plot(app_config, plot_args)?;
            info!(output_file:? = path; "Plot exported successfully");
        }
        Commands::Interactive(interactive_args) => {
            let outcome = interactive(app_config, interactive_args)?;
            info!(outcome:?; "Interactive session finished");
        }
        Commands::Demo(demo_args) => {
            let paths = demo(app_config, demo_args)?;
            info!(count = paths.len(); "Demo plots exported successfully");
        }
    }

    Ok(())
}

/// Plots the rectangles given on the command line.
pub fn plot(config: AppConfig, args: &PlotArgs) -> Result<PathBuf, RectplotError> {
    let config = with_export_overrides(config, args.dpi, None, None);
    let options = args.plot.apply(config.plot().clone());
    let plotter = Plotter::new(config.with_plot(options));

    let rects = args
        .rects
        .iter()
        .map(|rect| plotter.parse_coordinates(rect))
        .collect::<Result<Vec<_>, _>>()?;
    let styles = rectangle_styles(rects.len(), &args.colors, &args.facecolors, args.alpha)?;

    let mut session = Session::new();
    session.add_styled_rectangles(&rects, &styles, &args.labels)?;

    let path = match &args.output {
        Some(output) => PathBuf::from(output),
        None => plotter.default_output_path()?,
    };
    plotter.plot_to_file(session.list_rectangles(), plotter.config().plot(), &path)
}

/// Runs the interactive prompt on stdin and stdout.
///
/// The output format is checked before the first prompt, so a bad `--output`
/// or `--format` fails without losing any typed rectangles.
pub fn interactive(config: AppConfig, args: &InteractiveArgs) -> Result<Outcome, RectplotError> {
    let config = with_export_overrides(config, args.dpi, args.format.as_deref(), None);
    let options = args.plot.apply(config.plot().clone());
    let plotter = Plotter::new(config.with_plot(options));

    let output = args.output.as_ref().map(PathBuf::from);
    output_format(&plotter, output.as_deref())?;

    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    let mut repl = Repl::new(&plotter, plotter.config().plot().clone(), output, stdin, stdout);
    repl.run()
}

/// Writes every built-in demo into the demo directory.
pub fn demo(config: AppConfig, args: &DemoArgs) -> Result<Vec<PathBuf>, RectplotError> {
    let config = with_export_overrides(config, args.dpi, None, args.dir.as_deref());
    let plotter = Plotter::new(config);
    let dir = plotter.config().export().output_dir();

    Demo::ALL
        .iter()
        .map(|demo| -> Result<PathBuf, RectplotError> {
            let (session, options) = demo.build(plotter.config().plot())?;
            let mut path = dir.join(demo.file_name());
            if let Some(format) = &args.format {
                path.set_extension(format);
            }
            let written = plotter.plot_to_file(session.list_rectangles(), &options, &path)?;
            info!(demo:? = demo, path:? = written; "Demo exported");
            Ok(written)
        })
        .collect()
}

/// Format the session will be saved in, from the output path or the configured default.
fn output_format(plotter: &Plotter, output: Option<&Path>) -> Result<ExportFormat, RectplotError> {
    match output {
        Some(path) => ExportFormat::from_path(path),
        None => plotter.config().export().format().map_err(RectplotError::Config),
    }
}

/// One style per rectangle from the parallel color and fill lists.
///
/// Missing colors cycle the palette; `alpha` applies to outlines and fills.
fn rectangle_styles(
    count: usize,
    colors: &[String],
    facecolors: &[String],
    alpha: f32,
) -> Result<Vec<RectangleStyle>, RectplotError> {
    let parse = |color: &String| Color::new(color).map_err(RectplotError::Color);

    (0..count)
        .map(|i| {
            let color = match colors.get(i) {
                Some(color) => parse(color)?,
                None => Color::from_palette(i),
            };
            let facecolor = facecolors
                .get(i)
                .map(parse)
                .transpose()?
                .map(|fill| fill.with_alpha(alpha));
            Ok(RectangleStyle::new(color)
                .with_alpha(alpha)
                .with_facecolor(facecolor))
        })
        .collect()
}

fn with_export_overrides(
    config: AppConfig,
    dpi: Option<u32>,
    format: Option<&str>,
    output_dir: Option<&str>,
) -> AppConfig {
    let mut export = config.export().clone();
    if let Some(dpi) = dpi {
        export = export.with_dpi(dpi);
    }
    if let Some(format) = format {
        export = export.with_format(format);
    }
    if let Some(dir) = output_dir {
        export = export.with_output_dir(dir);
    }
    config.with_export(export)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rectangle_styles_fill_in_defaults() {
        let styles = rectangle_styles(
            3,
            &["navy".to_string()],
            &["yellow".to_string()],
            0.5,
        )
        .unwrap();

        assert_eq!(styles.len(), 3);
        assert_eq!(styles[0].color().to_string(), "navy");
        assert_eq!(styles[0].alpha(), 0.5);
        assert_eq!(styles[0].facecolor().unwrap().alpha(), 0.5);
        assert!(styles[1].facecolor().is_none());
        assert_eq!(styles[2].color().to_string(), "green");
    }

    #[test]
    fn test_rectangle_styles_reject_bad_fill() {
        let err = rectangle_styles(1, &[], &["not-a-color".to_string()], 1.0).unwrap_err();
        assert!(matches!(err, RectplotError::Color(_)));
    }

    #[test]
    fn test_output_format_checked_up_front() {
        let plotter = Plotter::default();
        assert_eq!(
            output_format(&plotter, Some(Path::new("plot.pdf"))).unwrap(),
            ExportFormat::Pdf
        );
        assert!(matches!(
            output_format(&plotter, Some(Path::new("plot.gif"))),
            Err(RectplotError::UnsupportedFormat(ext)) if ext == "gif"
        ));
        assert_eq!(output_format(&plotter, None).unwrap(), ExportFormat::Png);
    }

    #[test]
    fn test_interactive_rejects_bad_format_before_prompting() {
        let args = InteractiveArgs {
            output: None,
            format: Some("gif".to_string()),
            dpi: None,
            plot: PlotFlags::default(),
        };
        let err = interactive(AppConfig::default(), &args).unwrap_err();
        assert!(matches!(err, RectplotError::Config(_)));
    }

    #[test]
    fn test_overrides_set_output_dir() {
        let config = with_export_overrides(AppConfig::default(), Some(72), None, Some("demos"));
        assert_eq!(config.export().dpi(), 72);
        assert_eq!(config.export().output_dir(), std::path::Path::new("demos"));
    }
}
