//! Splits an input line into spanned tokens.
//!
//! Tokens are separated by any mix of whitespace and commas, so
//! `"-0.70, 4.30"` and `"-0.70 4.30"` lex identically.

use winnow::{
    Parser as _,
    combinator::{preceded, repeat},
    error::{ContextError, ErrMode},
    stream::Stream as _,
    token::take_while,
};

use crate::span::Span;

type IResult<O> = std::result::Result<O, ErrMode<ContextError>>;

/// A token together with its byte span in the input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Token<'src> {
    pub(crate) text: &'src str,
    pub(crate) span: Span,
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || c == ','
}

fn separators(input: &mut &str) -> IResult<()> {
    take_while(0.., is_separator).void().parse_next(input)
}

/// Parses one token, computing its span from the remaining input length.
fn token<'src>(line_len: usize) -> impl FnMut(&mut &'src str) -> IResult<Token<'src>> {
    move |input: &mut &'src str| {
        let start = line_len - input.eof_offset();
        let text = take_while(1.., |c: char| !is_separator(c)).parse_next(input)?;
        Ok(Token {
            text,
            span: Span::new(start..start + text.len()),
        })
    }
}

/// Splits `line` into tokens. Never fails: every non-separator run is a
/// token.
pub(crate) fn tokenize(line: &str) -> Vec<Token<'_>> {
    let mut input = line;
    let result: IResult<Vec<Token<'_>>> =
        repeat(0.., preceded(separators, token(line.len()))).parse_next(&mut input);
    // `repeat` only stops on a backtrack, which cannot carry tokens
    result.unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(line: &str) -> Vec<&str> {
        tokenize(line).into_iter().map(|t| t.text).collect()
    }

    #[test]
    fn test_tokenize_mixed_separators() {
        assert_eq!(texts("1, 2,3  4"), vec!["1", "2", "3", "4"]);
        assert_eq!(texts("  ,, "), Vec::<&str>::new());
        assert_eq!(texts(""), Vec::<&str>::new());
    }

    #[test]
    fn test_tokenize_spans() {
        let tokens = tokenize(" -0.70, abc");
        assert_eq!(tokens[0].span, Span::new(1..6));
        assert_eq!(tokens[1].span, Span::new(8..11));
        assert_eq!(&" -0.70, abc"[tokens[1].span.range()], "abc");
    }

    #[test]
    fn test_tokenize_unicode_whitespace() {
        // Non-breaking space separates tokens too
        assert_eq!(texts("1\u{a0}2"), vec!["1", "2"]);
    }
}
