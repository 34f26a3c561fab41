//! rectplot CLI entry point.

use std::{process, str::FromStr};

use clap::Parser;
use log::{Level, LevelFilter, debug, info, log};

use rectplot::RectplotError;
use rectplot_cli::{Args, error_adapter::render_reports};

fn init_logging(requested: &str) {
    let level = LevelFilter::from_str(requested).unwrap_or_else(|_| {
        eprintln!("Unknown log level `{requested}`, falling back to `warn`");
        LevelFilter::Warn
    });

    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(level)
        .init();
    debug!(level:?; "Logging initialized");
}

/// Logs every report of `err` and returns the process exit code.
///
/// An empty rectangle set is only a warning and still exits with 0.
fn report_failure(err: &RectplotError) -> i32 {
    let (level, code) = if err.is_empty_set() {
        (Level::Warn, 0)
    } else {
        (Level::Error, 1)
    };
    for report in render_reports(err) {
        log!(level, "{report}");
    }
    code
}

fn main() {
    miette::set_panic_hook();

    let args = Args::parse();
    init_logging(&args.log_level);
    debug!(args:?; "Parsed arguments");

    if let Err(err) = rectplot_cli::run(&args) {
        let code = report_failure(&err);
        if code != 0 {
            process::exit(code);
        }
    }

    info!("Done");
}
