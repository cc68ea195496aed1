//! Type-name parsing, shared by declarations and casts.

use common::ast::Type;
use common::error::{ParseError, ParseErrorKind};
use lexer::TokenKind;

use crate::cursor::Cursor;

pub fn parse_type(cur: &mut Cursor) -> Result<Type, ParseError> {
    let ty = match cur.peek_kind() {
        TokenKind::Noob => Type::Noob,
        TokenKind::Troof => Type::Troof,
        TokenKind::Numbr => Type::Numbr,
        TokenKind::Numbar => Type::Numbar,
        TokenKind::Yarn => Type::Yarn,
        _ => {
            return Err(cur.error_here(ParseErrorKind::UnknownLead {
                context: "a type name",
                found: cur.peek().to_string(),
            }))
        }
    };
    cur.advance();
    Ok(ty)
}
