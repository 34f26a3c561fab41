//! Parsing of interactive session commands.

use std::fmt;

use rectplot_core::rectangle::Coords;

use crate::{
    coordinates::coords_from_tokens,
    error::{Diagnostic, ErrorCode, ParseError},
    lexer::{self, Token},
    span::Span,
};

/// A command typed at the interactive prompt.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Add a rectangle with the given coordinates
    Add(Coords),
    /// Render and export, then leave
    Done,
    /// Leave without rendering
    Quit,
    /// Remove every rectangle
    Clear,
    /// Print the current rectangles
    List,
    /// Remove the most recently added rectangle
    Undo,
    /// Remove the rectangle at a 1-based position
    Remove(usize),
    /// Print usage
    Help,
}

impl Command {
    /// Keyword that introduces this command, `None` for a coordinate line.
    pub fn keyword(&self) -> Option<&'static str> {
        match self {
            Command::Add(_) => None,
            Command::Done => Some("done"),
            Command::Quit => Some("quit"),
            Command::Clear => Some("clear"),
            Command::List => Some("list"),
            Command::Undo => Some("undo"),
            Command::Remove(_) => Some("remove"),
            Command::Help => Some("help"),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Add(coords) => write!(f, "add {coords}"),
            Command::Remove(index) => write!(f, "remove {index}"),
            other => write!(f, "{}", other.keyword().unwrap_or_default()),
        }
    }
}

/// Usage text for the interactive prompt.
pub const HELP_TEXT: &str = "\
Enter rectangles as four numbers: left right back front
(separated by spaces and/or commas, e.g. `-0.70, 4.30, -0.01, 3.78`).

Commands:
  done        render the rectangles, save the image and exit
  quit, exit  exit without rendering
  clear       remove all rectangles
  list        show the current rectangles
  undo        remove the last rectangle
  remove <n>  remove the n-th rectangle (as shown by `list`)
  help        show this message";

/// Parses one line of interactive input.
///
/// A line whose first token is a keyword (case-insensitive) is a command;
/// any other line must be a coordinate line.
///
/// # Examples
///
/// ```
/// # use rectplot_parser::{parse_command, Command};
/// assert_eq!(parse_command("  DONE ").unwrap(), Command::Done);
/// assert_eq!(parse_command("remove 2").unwrap(), Command::Remove(2));
/// assert!(matches!(parse_command("1 2 3 4").unwrap(), Command::Add(_)));
/// ```
pub fn parse_command(line: &str) -> Result<Command, ParseError> {
    let tokens = lexer::tokenize(line);
    let Some((first, args)) = tokens.split_first() else {
        return coords_from_tokens(line, &tokens).map(Command::Add);
    };

    let keyword = first.text.to_ascii_lowercase();
    let command = match keyword.as_str() {
        "done" => Command::Done,
        "quit" | "exit" => Command::Quit,
        "clear" => Command::Clear,
        "list" => Command::List,
        "undo" => Command::Undo,
        "help" => Command::Help,
        "remove" => return parse_remove(line, first, args).map(Command::Remove),
        _ => return coords_from_tokens(line, &tokens).map(Command::Add),
    };

    if let Some((extra, rest)) = args.split_first() {
        let span = rest.last().map_or(extra.span, |last| extra.span.union(last.span));
        let diag = Diagnostic::error(format!("`{keyword}` takes no arguments"))
            .with_code(ErrorCode::E103)
            .with_label(span, "unexpected argument")
            .with_secondary_label(first.span, "this command");
        return Err(ParseError::from_diagnostic(diag, line));
    }

    Ok(command)
}

fn parse_remove(line: &str, keyword: &Token<'_>, args: &[Token<'_>]) -> Result<usize, ParseError> {
    let help = "use `list` to see the numbers, then `remove <n>`";
    let error = |message: String, span: Span, label: &str| {
        let diag = Diagnostic::error(message)
            .with_code(ErrorCode::E103)
            .with_label(span, label)
            .with_help(help);
        ParseError::from_diagnostic(diag, line)
    };

    match args {
        [] => {
            let end = keyword.span.end();
            Err(error(
                "`remove` needs the number of a rectangle".to_string(),
                Span::new(end..end),
                "expected a number",
            ))
        }
        [index] => match index.text.parse::<usize>() {
            Ok(n) if n >= 1 => Ok(n),
            _ => Err(error(
                format!("`{}` is not a rectangle number", index.text),
                index.span,
                "expected a positive whole number",
            )),
        },
        [_, extra @ ..] => {
            let span = extra[0].span.union(extra[extra.len() - 1].span);
            Err(error(
                "`remove` takes a single number".to_string(),
                span,
                "unexpected argument",
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords_are_case_insensitive() {
        assert_eq!(parse_command("done").unwrap(), Command::Done);
        assert_eq!(parse_command("Quit").unwrap(), Command::Quit);
        assert_eq!(parse_command("EXIT").unwrap(), Command::Quit);
        assert_eq!(parse_command(" clear ").unwrap(), Command::Clear);
        assert_eq!(parse_command("List").unwrap(), Command::List);
        assert_eq!(parse_command("undo").unwrap(), Command::Undo);
        assert_eq!(parse_command("help").unwrap(), Command::Help);
    }

    #[test]
    fn test_coordinate_line_is_add() {
        assert_eq!(
            parse_command("-0.38, 0.52, 1.46, 3.46").unwrap(),
            Command::Add(Coords::new(-0.38, 0.52, 1.46, 3.46))
        );
    }

    #[test]
    fn test_unknown_word_reports_number_error() {
        let err = parse_command("dnoe").unwrap_err();
        assert_eq!(err.code(), Some(ErrorCode::E101));
    }

    #[test]
    fn test_empty_line_reports_empty_input() {
        let err = parse_command("   ").unwrap_err();
        assert_eq!(err.code(), Some(ErrorCode::E102));
    }

    #[test]
    fn test_remove_index() {
        assert_eq!(parse_command("remove 3").unwrap(), Command::Remove(3));
        assert_eq!(parse_command("REMOVE, 1").unwrap(), Command::Remove(1));
    }

    #[test]
    fn test_remove_errors() {
        let missing = parse_command("remove").unwrap_err();
        assert_eq!(missing.code(), Some(ErrorCode::E103));
        assert_eq!(missing.span(), Some(Span::new(6..6)));

        let zero = parse_command("remove 0").unwrap_err();
        assert_eq!(zero.reason(), "`0` is not a rectangle number");

        let negative = parse_command("remove -1").unwrap_err();
        assert_eq!(negative.span(), Some(Span::new(7..9)));

        let extra = parse_command("remove 1 2 3").unwrap_err();
        assert_eq!(extra.span(), Some(Span::new(9..12)));
    }

    #[test]
    fn test_keyword_with_arguments_is_rejected() {
        let err = parse_command("done now").unwrap_err();
        assert_eq!(err.code(), Some(ErrorCode::E103));
        assert_eq!(err.reason(), "`done` takes no arguments");
        assert_eq!(err.span(), Some(Span::new(5..8)));
    }

    #[test]
    fn test_command_display() {
        assert_eq!(Command::Done.to_string(), "done");
        assert_eq!(Command::Remove(2).to_string(), "remove 2");
        assert_eq!(
            Command::Add(Coords::new(1.0, 2.0, 3.0, 4.0)).to_string(),
            "add (1, 2, 3, 4)"
        );
    }
}
