//! Block and program parsing: the layer that stitches individual
//! statements together along newline boundaries.

use common::ast::{Block, Program};
use common::error::{ParseError, ParseErrorKind};
use lexer::{Token, TokenKind};

use crate::cursor::Cursor;
use crate::stmt;

/// Parses statements until the cursor sits on one of `closers`, which it
/// leaves unconsumed for the caller to `expect`.
///
/// Each statement must be followed by a `NEWLINE`, end of input, or one of
/// `closers` directly — LOLCODE has no statement separator besides the line
/// break.
pub fn parse_block(cur: &mut Cursor, closers: &[TokenKind]) -> Result<Block, ParseError> {
    let mut stmts = Block::new();
    loop {
        cur.skip_newlines();
        if closers.contains(&cur.peek_kind()) {
            return Ok(stmts);
        }
        if cur.at(TokenKind::Eof) {
            return Err(cur.error_here(ParseErrorKind::UnclosedBlock { context: "a block" }));
        }

        stmts.push(stmt::parse_stmt(cur)?);

        match cur.peek_kind() {
            TokenKind::Newline => {
                cur.advance();
            }
            TokenKind::Eof => {}
            k if closers.contains(&k) => {}
            _ => return Err(cur.unexpected(TokenKind::Newline)),
        }
    }
}

/// The sole entry point into this crate: parses a complete token stream
/// (as produced by `lexer::tokenize`) into a `Program`.
///
/// `HAI`'s version-number argument is consumed but not retained — see the
/// design notes on why `Program` has no field for it.
pub fn parse_program(tokens: Vec<Token>) -> Result<Program, ParseError> {
    let mut cur = Cursor::new(tokens);
    cur.expect(TokenKind::Hai)?;
    match cur.peek_kind() {
        TokenKind::Integer | TokenKind::Float => {
            cur.advance();
        }
        _ => return Err(cur.unexpected(TokenKind::Float)),
    }
    cur.expect(TokenKind::Newline)?;

    let body = parse_block(&mut cur, &[TokenKind::KThxBye])?;
    cur.expect(TokenKind::KThxBye)?;
    cur.expect(TokenKind::Newline)?;
    cur.expect(TokenKind::Eof)?;

    Ok(Program { body })
}
