//! # Rectplot Parser
//!
//! Turns lines of user input into rectangle coordinates and interactive
//! commands. Every failure is reported as a [`error::ParseError`] carrying
//! spans into the input, so callers can point at the offending token.
//!
//! ## Usage
//!
//! ```
//! # use rectplot_parser::{parse_command, parse_coordinates, Command};
//! let coords = parse_coordinates("-0.70, 4.30, -0.01, 3.78").unwrap();
//! assert_eq!(coords.front(), 3.78);
//!
//! match parse_command("list").unwrap() {
//!     Command::List => {}
//!     other => panic!("unexpected command {other}"),
//! }
//! ```

mod command;
mod coordinates;
pub mod error;
mod lexer;
mod span;

pub use command::{Command, HELP_TEXT, parse_command};
pub use coordinates::{COORDINATE_COUNT, parse_coordinates};
pub use error::ParseError;
pub use span::Span;
