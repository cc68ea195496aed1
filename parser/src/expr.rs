//! Expression parsing. LOLCODE has no operator precedence to climb: every
//! operator is a prefix keyword that fixes its own arity (see
//! [`common::ast::OpKind`]), so one token of lookahead always determines
//! which production to take.

use common::ast::{CastExpr, Const, Expr, ExprList, FuncCallExpr, Ident, OpExpr, OpKind};
use common::error::{ParseError, ParseErrorKind};
use lexer::{LiteralValue, TokenKind};

use crate::cursor::Cursor;
use crate::ty;

pub fn parse_expr(cur: &mut Cursor) -> Result<Expr, ParseError> {
    match cur.peek_kind() {
        TokenKind::Boolean | TokenKind::Integer | TokenKind::Float | TokenKind::StringLit => {
            Ok(Expr::Constant(parse_constant(cur)))
        }
        TokenKind::Noob => {
            cur.advance();
            Ok(Expr::Constant(Const::Nil))
        }
        TokenKind::It => {
            cur.advance();
            Ok(Expr::ImplicitVar)
        }
        TokenKind::Identifier => {
            let name = parse_ident(cur);
            if cur.at(TokenKind::Iz) {
                finish_func_call(cur, name)
            } else {
                Ok(Expr::Identifier(name))
            }
        }
        TokenKind::Maek => parse_cast(cur),
        TokenKind::Not => {
            cur.advance();
            let arg = parse_expr(cur)?;
            Ok(Expr::Op(OpExpr {
                op: OpKind::Not,
                args: vec![arg],
            }))
        }
        TokenKind::SumOf => parse_binary_op(cur, OpKind::Add),
        TokenKind::DiffOf => parse_binary_op(cur, OpKind::Sub),
        TokenKind::ProduktOf => parse_binary_op(cur, OpKind::Mult),
        TokenKind::QuoshuntOf => parse_binary_op(cur, OpKind::Div),
        TokenKind::ModOf => parse_binary_op(cur, OpKind::Mod),
        TokenKind::BiggrOf => parse_binary_op(cur, OpKind::Max),
        TokenKind::SmallrOf => parse_binary_op(cur, OpKind::Min),
        TokenKind::BothOf => parse_binary_op(cur, OpKind::And),
        TokenKind::EitherOf => parse_binary_op(cur, OpKind::Or),
        TokenKind::WonOf => parse_binary_op(cur, OpKind::Xor),
        TokenKind::BothSaem => parse_binary_op(cur, OpKind::Eq),
        TokenKind::Diffrint => parse_binary_op(cur, OpKind::Neq),
        TokenKind::AllOf => parse_nary_op(cur, OpKind::And),
        TokenKind::AnyOf => parse_nary_op(cur, OpKind::Or),
        TokenKind::Smoosh => parse_nary_op(cur, OpKind::Cat),
        _ => Err(cur.error_here(ParseErrorKind::UnknownLead {
            context: "an expression",
            found: cur.peek().to_string(),
        })),
    }
}

fn parse_constant(cur: &mut Cursor) -> Const {
    let tok = cur.advance();
    match tok.kind {
        TokenKind::Boolean => match tok.value {
            Some(LiteralValue::Boolean(b)) => Const::Boolean(b),
            _ => unreachable!("Boolean token without a Boolean value"),
        },
        TokenKind::Integer => match tok.value {
            Some(LiteralValue::Integer(v)) => Const::Integer(v),
            _ => unreachable!("Integer token without an Integer value"),
        },
        TokenKind::Float => match tok.value {
            Some(LiteralValue::Float(v)) => Const::Float(v),
            _ => unreachable!("Float token without a Float value"),
        },
        TokenKind::StringLit => Const::String(tok.image),
        other => unreachable!("parse_constant called on {other:?}"),
    }
}

pub fn parse_ident(cur: &mut Cursor) -> Ident {
    let tok = cur.advance();
    Ident::new(tok.image, tok.fname, tok.line)
}

/// `<lead> <expr> AN? <expr>`. The connective `AN` is cosmetic — accepted if
/// present, never required — so `SUM OF 1 AN 2` and the (equally legal)
/// `SUM OF 1 2` parse identically.
fn parse_binary_op(cur: &mut Cursor, op: OpKind) -> Result<Expr, ParseError> {
    cur.advance();
    let lhs = parse_expr(cur)?;
    cur.accept(TokenKind::An);
    let rhs = parse_expr(cur)?;
    Ok(Expr::Op(OpExpr {
        op,
        args: vec![lhs, rhs],
    }))
}

/// `<lead> <expr> (AN? <expr>)* MKAY`, for the operators whose source
/// spelling (`ALL OF`, `ANY OF`, `SMOOSH`) allows an arbitrary number of
/// operands. Unlike the binary forms, `MKAY` here is the list terminator,
/// not optional punctuation — it's the only thing that tells the parser
/// there isn't one more operand coming.
fn parse_nary_op(cur: &mut Cursor, op: OpKind) -> Result<Expr, ParseError> {
    cur.advance();
    let mut args: ExprList = vec![parse_expr(cur)?];
    while !cur.at(TokenKind::Mkay) {
        cur.accept(TokenKind::An);
        args.push(parse_expr(cur)?);
    }
    cur.expect(TokenKind::Mkay)?;
    Ok(Expr::Op(OpExpr { op, args }))
}

fn parse_cast(cur: &mut Cursor) -> Result<Expr, ParseError> {
    cur.expect(TokenKind::Maek)?;
    let target = parse_expr(cur)?;
    cur.expect(TokenKind::A)?;
    let new_type = ty::parse_type(cur)?;
    Ok(Expr::Cast(Box::new(CastExpr { target, new_type })))
}

/// `<scope> IZ <name> [YR <expr> (AN YR <expr>)*] MKAY`. `scope` has
/// already been consumed by the caller, which is the only way to tell a
/// function call apart from a bare identifier reference with one token of
/// lookahead.
pub(crate) fn finish_func_call(cur: &mut Cursor, scope: Ident) -> Result<Expr, ParseError> {
    cur.expect(TokenKind::Iz)?;
    let name = parse_ident(cur);
    let mut args = ExprList::new();
    if cur.accept(TokenKind::Yr).is_some() {
        args.push(parse_expr(cur)?);
        while cur.accept(TokenKind::AnYr).is_some() {
            args.push(parse_expr(cur)?);
        }
    }
    cur.expect(TokenKind::Mkay)?;
    Ok(Expr::FuncCall(Box::new(FuncCallExpr { scope, name, args })))
}
