//! The token cursor: a position-tracking wrapper over the token stream that
//! every parsing module advances through. LOLCODE's grammar is LL(1) at
//! every decision point, so the cursor only ever moves forward — there is
//! no lookahead buffer or backtracking to manage.

use common::error::{ParseError, ParseErrorKind};
use lexer::{Token, TokenKind};

pub struct Cursor {
    tokens: Vec<Token>,
    pos: usize,
}

impl Cursor {
    pub fn new(tokens: Vec<Token>) -> Self {
        assert!(
            !tokens.is_empty() && tokens.last().unwrap().kind == TokenKind::Eof,
            "token stream must be terminated with Eof"
        );
        Cursor { tokens, pos: 0 }
    }

    /// The token under the cursor. Pinned to the final `Eof` once the
    /// stream is exhausted, so callers never have to handle an out-of-range
    /// position themselves.
    pub fn peek(&self) -> &Token {
        &self.tokens[self.pos]
    }

    pub fn peek_kind(&self) -> TokenKind {
        self.peek().kind
    }

    pub fn at(&self, kind: TokenKind) -> bool {
        self.peek_kind() == kind
    }

    pub fn advance(&mut self) -> Token {
        let tok = self.tokens[self.pos].clone();
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        tok
    }

    /// Consumes the current token if it has `kind`, returning it.
    pub fn accept(&mut self, kind: TokenKind) -> Option<Token> {
        if self.at(kind) {
            Some(self.advance())
        } else {
            None
        }
    }

    /// Consumes the current token if it has `kind`, or reports a fatal
    /// `UnexpectedToken` error naming what was expected.
    pub fn expect(&mut self, kind: TokenKind) -> Result<Token, ParseError> {
        if self.at(kind) {
            Ok(self.advance())
        } else {
            Err(self.unexpected(kind))
        }
    }

    pub fn unexpected(&self, expected: TokenKind) -> ParseError {
        let tok = self.peek();
        self.error_at(
            tok,
            ParseErrorKind::UnexpectedToken {
                expected: expected.to_string(),
                found: tok.to_string(),
            },
        )
    }

    pub fn error_here(&self, kind: ParseErrorKind) -> ParseError {
        let tok = self.peek();
        self.error_at(tok, kind)
    }

    fn error_at(&self, tok: &Token, kind: ParseErrorKind) -> ParseError {
        ParseError::new(kind, tok.fname.clone(), tok.line)
    }

    /// Skips any run of blank `NEWLINE` tokens. Used between statements and
    /// around block delimiters, where a blank source line carries no
    /// meaning.
    pub fn skip_newlines(&mut self) {
        while self.accept(TokenKind::Newline).is_some() {}
    }
}
