//! The interactive prompt.
//!
//! Reads one line at a time: four numbers add a rectangle, keywords edit the
//! set or finish the session. Bad input and failed exports are reported and
//! the prompt carries on with the rectangles entered so far. Only a failed
//! export at end of input ends the session with an error.

use std::{
    io::{BufRead, Write},
    path::PathBuf,
};

use log::{debug, info, warn};

use rectplot::{Command, PlotOptions, Plotter, RectplotError, Session};
use rectplot_parser::HELP_TEXT;

use crate::error_adapter::render_reports;

/// How an interactive session ended.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The plot was written to this path.
    Saved(PathBuf),
    /// `done` was entered with no rectangles.
    NothingToPlot,
    /// `quit` was entered.
    Quit,
}

/// Interactive session over any line reader and writer.
pub struct Repl<'a, R, W> {
    plotter: &'a Plotter,
    options: PlotOptions,
    output: Option<PathBuf>,
    session: Session,
    input: R,
    out: W,
}

impl<'a, R: BufRead, W: Write> Repl<'a, R, W> {
    /// Creates a prompt that writes to `output`, or to a timestamped file
    /// when `None`.
    pub fn new(
        plotter: &'a Plotter,
        options: PlotOptions,
        output: Option<PathBuf>,
        input: R,
        out: W,
    ) -> Self {
        Self {
            plotter,
            options,
            output,
            session: Session::new(),
            input,
            out,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Runs until `done` succeeds, `quit` or end of input.
    ///
    /// End of input behaves like `done`, so piped input still produces a plot.
    ///
    /// # Errors
    ///
    /// Returns an error when reading input or writing output fails, or when
    /// the export triggered by end of input fails.
    pub fn run(&mut self) -> Result<Outcome, RectplotError> {
        writeln!(self.out, "Rectangle plotter. Type `help` for commands.")?;

        let mut line = String::new();
        loop {
            write!(
                self.out,
                "rectangle {} (left right back front)> ",
                self.session.len() + 1
            )?;
            self.out.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.out)?;
                debug!("End of input");
                return self.finish();
            }
            if line.trim().is_empty() {
                continue;
            }

            let command = match self.plotter.parse_command(&line) {
                Ok(command) => command,
                Err(err) => {
                    self.report(&err)?;
                    continue;
                }
            };
            debug!(command:%; "Command entered");

            match command {
                Command::Add(coords) => match self.session.add_rectangle(coords, None, None) {
                    Ok(_) => {
                        let added = self
                            .session
                            .list_rectangles()
                            .last()
                            .map(ToString::to_string)
                            .unwrap_or_default();
                        writeln!(self.out, "Added {added}")?;
                    }
                    Err(err) => self.report(&err)?,
                },
                Command::Done => match self.finish() {
                    Ok(outcome) => return Ok(outcome),
                    Err(err) => {
                        warn!(err:err; "Export failed, session kept");
                        self.report(&err)?;
                        writeln!(
                            self.out,
                            "Nothing was saved. Enter `done` to try again or `quit` to leave."
                        )?;
                    }
                },
                Command::Quit => {
                    info!("Interactive session quit");
                    return Ok(Outcome::Quit);
                }
                Command::Clear => match self.session.clear_all() {
                    0 => writeln!(self.out, "Nothing to clear")?,
                    count => writeln!(self.out, "Cleared {count} rectangle(s)")?,
                },
                Command::List => self.list()?,
                Command::Undo => match self.session.pop_last() {
                    Some(rect) => writeln!(self.out, "Removed {rect}")?,
                    None => writeln!(self.out, "Nothing to undo")?,
                },
                Command::Remove(position) => match self.session.remove_at(position - 1) {
                    Ok(rect) => writeln!(self.out, "Removed {rect}")?,
                    Err(err) => self.report(&err)?,
                },
                Command::Help => writeln!(self.out, "{HELP_TEXT}")?,
            }
        }
    }

    fn list(&mut self) -> Result<(), RectplotError> {
        if self.session.is_empty() {
            writeln!(self.out, "No rectangles yet")?;
            return Ok(());
        }
        for (i, rect) in self.session.list_rectangles().iter().enumerate() {
            writeln!(self.out, "{:>3}. {rect}", i + 1)?;
        }
        Ok(())
    }

    /// Plots the session, or warns when there is nothing to plot.
    fn finish(&mut self) -> Result<Outcome, RectplotError> {
        if self.session.is_empty() {
            let err = RectplotError::EmptySet("plot");
            warn!("{err}");
            self.report(&err)?;
            return Ok(Outcome::NothingToPlot);
        }

        let path = match &self.output {
            Some(path) => path.clone(),
            None => self.plotter.default_output_path()?,
        };
        let written =
            self.plotter
                .plot_to_file(self.session.list_rectangles(), &self.options, &path)?;
        writeln!(self.out, "Saved plot to {}", written.display())?;
        Ok(Outcome::Saved(written))
    }

    fn report(&mut self, err: &RectplotError) -> Result<(), RectplotError> {
        for report in render_reports(err) {
            writeln!(self.out, "{report}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn run_script(script: &str, output: Option<PathBuf>) -> (Result<Outcome, RectplotError>, String, usize) {
        let plotter = Plotter::default();
        let mut out = Vec::new();
        let mut repl = Repl::new(
            &plotter,
            PlotOptions::default(),
            output,
            Cursor::new(script.to_string()),
            &mut out,
        );
        let result = repl.run();
        let len = repl.session().len();
        drop(repl);
        (result, String::from_utf8(out).unwrap(), len)
    }

    #[test]
    fn test_parse_error_keeps_loop_running() {
        let (result, out, len) = run_script("1 2 3\n1 2 x 4\n0 4 0 2\nquit\n", None);
        assert_eq!(result.unwrap(), Outcome::Quit);
        assert_eq!(len, 1);
        assert!(out.contains("expected 4 coordinates, found 3"));
        assert!(out.contains("is not a number"));
        assert!(out.contains("Added Box 1"));
    }

    #[test]
    fn test_done_with_empty_set_warns() {
        let (result, out, _) = run_script("done\n", None);
        assert_eq!(result.unwrap(), Outcome::NothingToPlot);
        assert!(out.contains("no rectangles to plot"));
    }

    #[test]
    fn test_editing_commands() {
        let script = "0 1 0 1\n1 2 1 2\n2 3 2 3\nremove 2\nlist\nundo\nremove 9\nclear\nclear\nquit\n";
        let (result, out, len) = run_script(script, None);
        assert_eq!(result.unwrap(), Outcome::Quit);
        assert_eq!(len, 0);
        assert!(out.contains("Removed Box 2"));
        assert!(out.contains("  1. Box 1"));
        assert!(out.contains("  2. Box 3"));
        assert!(out.contains("Removed Box 3"));
        assert!(out.contains("no rectangle at position 9"));
        assert!(out.contains("Cleared 1 rectangle(s)"));
        assert!(out.contains("Nothing to clear"));
    }

    #[test]
    fn test_done_writes_plot() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.svg");
        let (result, out, _) = run_script("-0.70, 4.30, -0.01, 3.78\nDone\n", Some(path.clone()));

        assert_eq!(result.unwrap(), Outcome::Saved(path.clone()));
        assert!(path.exists());
        assert!(out.contains("Saved plot to"));
    }

    #[test]
    fn test_failed_export_keeps_session() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not_a_dir");
        std::fs::write(&blocker, "").unwrap();
        let path = blocker.join("plot.svg");

        let (result, out, len) = run_script("0 4 0 2\n1 2 1 2\ndone\nlist\nquit\n", Some(path));
        assert_eq!(result.unwrap(), Outcome::Quit);
        assert_eq!(len, 2);
        assert!(out.contains("not_a_dir"));
        assert!(out.contains("Nothing was saved"));
        assert!(out.contains("  2. Box 2"));
    }

    #[test]
    fn test_end_of_input_plots() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("piped.svg");
        let (result, _, _) = run_script("0 4 0 2", Some(path.clone()));
        assert_eq!(result.unwrap(), Outcome::Saved(path));
    }

    #[test]
    fn test_help() {
        let (_, out, _) = run_script("help\nquit\n", None);
        assert!(out.contains("remove <n>"));
    }
}
