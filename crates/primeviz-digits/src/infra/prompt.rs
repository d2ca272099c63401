//! Interactive limit input
//!
//! Reads the upper limit from a line-based reader, re-prompting until a
//! non-negative integer is entered.

use std::io::{self, BufRead, Write};
use thiserror::Error;

/// Prompt shown before each read
pub const LIMIT_PROMPT: &str = "Display data for all prime numbers up to: ";

/// Message shown after invalid input
pub const INVALID_LIMIT_MESSAGE: &str = "Please enter a positive number";

/// Reasons a limit string is rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LimitError {
    #[error("No value entered")]
    Empty,
    #[error("Negative value: {0}")]
    Negative(String),
    #[error("Not a number: {0}")]
    NotANumber(String),
}

/// Parse a limit, ignoring surrounding whitespace
pub fn parse_limit(input: &str) -> Result<u64, LimitError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(LimitError::Empty);
    }

    match trimmed.parse::<u64>() {
        Ok(value) => Ok(value),
        Err(_) if is_negative_integer(trimmed) => Err(LimitError::Negative(trimmed.to_string())),
        Err(_) => Err(LimitError::NotANumber(trimmed.to_string())),
    }
}

fn is_negative_integer(s: &str) -> bool {
    s.strip_prefix('-')
        .is_some_and(|rest| !rest.is_empty() && rest.bytes().all(|b| b.is_ascii_digit()))
}

/// Prompt until a valid limit is read
///
/// Returns `Ok(None)` when the input reaches end of file.
pub fn read_limit<R, W>(input: &mut R, output: &mut W) -> io::Result<Option<u64>>
where
    R: BufRead,
    W: Write,
{
    let mut line = String::new();

    loop {
        write!(output, "{}", LIMIT_PROMPT)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        match parse_limit(&line) {
            Ok(limit) => return Ok(Some(limit)),
            Err(_) => writeln!(output, "{}", INVALID_LIMIT_MESSAGE)?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_limit_valid() {
        assert_eq!(parse_limit("0"), Ok(0));
        assert_eq!(parse_limit("100"), Ok(100));
        assert_eq!(parse_limit("  42 \n"), Ok(42));
    }

    #[test]
    fn test_parse_limit_invalid() {
        assert_eq!(parse_limit(""), Err(LimitError::Empty));
        assert_eq!(parse_limit("   \n"), Err(LimitError::Empty));
        assert_eq!(
            parse_limit("-5"),
            Err(LimitError::Negative("-5".to_string()))
        );
        assert_eq!(
            parse_limit("abc"),
            Err(LimitError::NotANumber("abc".to_string()))
        );
        assert_eq!(
            parse_limit("1.5"),
            Err(LimitError::NotANumber("1.5".to_string()))
        );
        assert_eq!(
            parse_limit("-"),
            Err(LimitError::NotANumber("-".to_string()))
        );
    }

    #[test]
    fn test_read_limit_first_try() {
        let mut input = Cursor::new("25\n");
        let mut output = Vec::new();

        let limit = read_limit(&mut input, &mut output).unwrap();
        assert_eq!(limit, Some(25));
        assert_eq!(String::from_utf8(output).unwrap(), LIMIT_PROMPT);
    }

    #[test]
    fn test_read_limit_reprompts() {
        let mut input = Cursor::new("abc\n-3\n7\n");
        let mut output = Vec::new();

        let limit = read_limit(&mut input, &mut output).unwrap();
        assert_eq!(limit, Some(7));

        let text = String::from_utf8(output).unwrap();
        assert_eq!(text.matches(LIMIT_PROMPT).count(), 3);
        assert_eq!(text.matches(INVALID_LIMIT_MESSAGE).count(), 2);
    }

    #[test]
    fn test_read_limit_eof() {
        let mut input = Cursor::new("oops\n");
        let mut output = Vec::new();

        let limit = read_limit(&mut input, &mut output).unwrap();
        assert_eq!(limit, None);
    }
}
