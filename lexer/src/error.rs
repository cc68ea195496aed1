use std::fmt;
use std::rc::Rc;

/// What went wrong while scanning a line of source text.
#[derive(Debug, Clone, PartialEq)]
pub enum LexErrorKind {
    /// A `"` literal ran off the end of the line without a closing quote.
    UnterminatedString,
    /// An `OBTW` block comment ran off the end of the file without a `TLDR`.
    UnterminatedComment,
    /// A word looked like a number but didn't parse as one (e.g. `1.2.3`).
    MalformedNumber(String),
    /// A `:` string escape wasn't followed by a recognized escape letter.
    BadEscape(char),
}

impl fmt::Display for LexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexErrorKind::UnterminatedString => write!(f, "unterminated string literal"),
            LexErrorKind::UnterminatedComment => write!(f, "unterminated OBTW comment"),
            LexErrorKind::MalformedNumber(word) => write!(f, "malformed number literal '{word}'"),
            LexErrorKind::BadEscape(c) => write!(f, "unrecognized string escape ':{c}'"),
        }
    }
}

/// A fatal, located lexing failure. Carries the same `fname`/`line` shape as
/// `common::error::ParseError` so a caller could report both uniformly.
#[derive(Debug, Clone, PartialEq)]
pub struct LexError {
    pub kind: LexErrorKind,
    pub fname: Rc<str>,
    pub line: u32,
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}: {}", self.fname, self.line, self.kind)
    }
}

impl std::error::Error for LexError {}
