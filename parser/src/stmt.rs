//! Statement parsing. Every statement form is keyed off its first token
//! (or, for identifier-led statements, its second), so dispatch here never
//! needs to backtrack.

use common::ast::{
    AssignmentStmt, CaseBlock, CastStmt, DeallocationStmt, DeclInit, DeclarationStmt, Expr,
    FuncDefStmt, GuardedBlock, IfThenElseStmt, InputStmt, LoopGuard, LoopStmt, LoopUpdate,
    LoopUpdateOp, PrintStmt, ReturnStmt, Stmt, SwitchStmt,
};
use common::error::{ParseError, ParseErrorKind};
use lexer::TokenKind;

use crate::block;
use crate::cursor::Cursor;
use crate::expr;
use crate::ty;

pub fn parse_stmt(cur: &mut Cursor) -> Result<Stmt, ParseError> {
    match cur.peek_kind() {
        TokenKind::Visible => parse_print(cur),
        TokenKind::Gimmeh => parse_input(cur),
        TokenKind::ORly => parse_if(cur),
        TokenKind::Wtf => parse_switch(cur),
        TokenKind::Gtfo => {
            cur.advance();
            Ok(Stmt::Break)
        }
        TokenKind::FoundYr => parse_return(cur),
        TokenKind::ImInYr => parse_loop(cur),
        TokenKind::HowIz => parse_funcdef(cur),
        TokenKind::Identifier => parse_ident_led(cur),
        _ => Ok(Stmt::Expr(expr::parse_expr(cur)?)),
    }
}

/// Identifier-led statements share a one-token lookahead past the name:
/// `IS NOW A` is a cast, `R` is an assignment (or, with a `NOOB` right-hand
/// side, a deallocation), `HAS A` is a declaration, `IZ` is a function
/// call, and anything else means the name alone was a bare expression
/// statement.
fn parse_ident_led(cur: &mut Cursor) -> Result<Stmt, ParseError> {
    let name = expr::parse_ident(cur);
    match cur.peek_kind() {
        TokenKind::IsNowA => {
            cur.advance();
            let new_type = ty::parse_type(cur)?;
            Ok(Stmt::Cast(CastStmt {
                target: name,
                new_type,
            }))
        }
        TokenKind::R => {
            cur.advance();
            if cur.accept(TokenKind::Noob).is_some() {
                Ok(Stmt::Deallocation(DeallocationStmt { target: name }))
            } else {
                let value = expr::parse_expr(cur)?;
                Ok(Stmt::Assignment(AssignmentStmt {
                    target: name,
                    value,
                }))
            }
        }
        TokenKind::HasA => {
            cur.advance();
            let target = expr::parse_ident(cur);
            let init = if cur.accept(TokenKind::Itz).is_some() {
                if cur.accept(TokenKind::A).is_some() {
                    DeclInit::Type(ty::parse_type(cur)?)
                } else {
                    DeclInit::Expr(expr::parse_expr(cur)?)
                }
            } else {
                DeclInit::None
            };
            Ok(Stmt::Declaration(DeclarationStmt {
                scope: name,
                target,
                init,
            }))
        }
        TokenKind::Iz => Ok(Stmt::Expr(expr::finish_func_call(cur, name)?)),
        _ => Ok(Stmt::Expr(Expr::Identifier(name))),
    }
}

fn parse_print(cur: &mut Cursor) -> Result<Stmt, ParseError> {
    cur.expect(TokenKind::Visible)?;
    let mut args = vec![expr::parse_expr(cur)?];
    while !matches!(
        cur.peek_kind(),
        TokenKind::Newline | TokenKind::Bang | TokenKind::Eof
    ) {
        args.push(expr::parse_expr(cur)?);
    }
    let suppress_newline = cur.accept(TokenKind::Bang).is_some();
    Ok(Stmt::Print(PrintStmt {
        args,
        suppress_newline,
    }))
}

fn parse_input(cur: &mut Cursor) -> Result<Stmt, ParseError> {
    cur.expect(TokenKind::Gimmeh)?;
    let target = expr::parse_ident(cur);
    Ok(Stmt::Input(InputStmt { target }))
}

fn parse_if(cur: &mut Cursor) -> Result<Stmt, ParseError> {
    const AFTER_YA_RLY: &[TokenKind] = &[TokenKind::Mebbe, TokenKind::NoWai, TokenKind::Oic];

    cur.expect(TokenKind::ORly)?;
    cur.expect(TokenKind::Newline)?;
    cur.expect(TokenKind::YaRly)?;
    cur.expect(TokenKind::Newline)?;
    let then_block = block::parse_block(cur, AFTER_YA_RLY)?;

    let mut elseifs = Vec::new();
    while cur.accept(TokenKind::Mebbe).is_some() {
        let guard = expr::parse_expr(cur)?;
        cur.expect(TokenKind::Newline)?;
        let block = block::parse_block(cur, AFTER_YA_RLY)?;
        elseifs.push(GuardedBlock { guard, block });
    }

    let else_block = if cur.accept(TokenKind::NoWai).is_some() {
        cur.expect(TokenKind::Newline)?;
        Some(block::parse_block(cur, &[TokenKind::Oic])?)
    } else {
        None
    };

    cur.expect(TokenKind::Oic)?;
    Ok(Stmt::IfThenElse(IfThenElseStmt {
        then_block,
        elseifs,
        else_block,
    }))
}

fn parse_switch(cur: &mut Cursor) -> Result<Stmt, ParseError> {
    const CASE_CLOSERS: &[TokenKind] = &[TokenKind::Omg, TokenKind::OmgWtf, TokenKind::Oic];

    cur.expect(TokenKind::Wtf)?;
    cur.expect(TokenKind::Newline)?;

    let mut cases = Vec::new();
    while cur.accept(TokenKind::Omg).is_some() {
        let guard = expr::parse_expr(cur)?;
        cur.expect(TokenKind::Newline)?;
        let block = block::parse_block(cur, CASE_CLOSERS)?;
        cases.push(CaseBlock { guard, block });
    }
    if cases.is_empty() {
        return Err(cur.error_here(ParseErrorKind::UnknownLead {
            context: "a switch statement (expected at least one OMG case)",
            found: cur.peek().to_string(),
        }));
    }

    let default = if cur.accept(TokenKind::OmgWtf).is_some() {
        cur.expect(TokenKind::Newline)?;
        Some(block::parse_block(cur, &[TokenKind::Oic])?)
    } else {
        None
    };

    cur.expect(TokenKind::Oic)?;
    Ok(Stmt::Switch(SwitchStmt { cases, default }))
}

fn parse_return(cur: &mut Cursor) -> Result<Stmt, ParseError> {
    cur.expect(TokenKind::FoundYr)?;
    let value = expr::parse_expr(cur)?;
    Ok(Stmt::Return(ReturnStmt { value }))
}

fn parse_loop(cur: &mut Cursor) -> Result<Stmt, ParseError> {
    cur.expect(TokenKind::ImInYr)?;
    let name = expr::parse_ident(cur);
    let update = parse_loop_update(cur)?;
    let guard = parse_loop_guard(cur)?;
    cur.expect(TokenKind::Newline)?;
    let body = block::parse_block(cur, &[TokenKind::ImOuttaYr])?;
    cur.expect(TokenKind::ImOuttaYr)?;
    let closing = expr::parse_ident(cur);
    if closing.image != name.image {
        return Err(cur.error_here(ParseErrorKind::LoopNameMismatch {
            opened: name.image.clone(),
            closed: closing.image,
        }));
    }
    Ok(Stmt::Loop(LoopStmt {
        name,
        update,
        guard,
        body,
    }))
}

fn parse_loop_update(cur: &mut Cursor) -> Result<Option<LoopUpdate>, ParseError> {
    let op = match cur.peek_kind() {
        TokenKind::Uppin => {
            cur.advance();
            LoopUpdateOp::Uppin
        }
        TokenKind::Nerfin => {
            cur.advance();
            LoopUpdateOp::Nerfin
        }
        TokenKind::Identifier => LoopUpdateOp::Func(expr::parse_ident(cur)),
        _ => return Ok(None),
    };
    cur.expect(TokenKind::Yr)?;
    let var = expr::parse_ident(cur);
    Ok(Some(LoopUpdate { op, var }))
}

fn parse_loop_guard(cur: &mut Cursor) -> Result<Option<LoopGuard>, ParseError> {
    if cur.accept(TokenKind::Til).is_some() {
        Ok(Some(LoopGuard::Til(expr::parse_expr(cur)?)))
    } else if cur.accept(TokenKind::Wile).is_some() {
        Ok(Some(LoopGuard::While(expr::parse_expr(cur)?)))
    } else {
        Ok(None)
    }
}

fn parse_funcdef(cur: &mut Cursor) -> Result<Stmt, ParseError> {
    cur.expect(TokenKind::HowIz)?;
    let scope = expr::parse_ident(cur);
    let name = expr::parse_ident(cur);
    let mut params = Vec::new();
    if cur.accept(TokenKind::Yr).is_some() {
        params.push(expr::parse_ident(cur));
        while cur.accept(TokenKind::AnYr).is_some() {
            params.push(expr::parse_ident(cur));
        }
    }
    cur.expect(TokenKind::Newline)?;
    let body = block::parse_block(cur, &[TokenKind::IfUSaySo])?;
    cur.expect(TokenKind::IfUSaySo)?;
    Ok(Stmt::FuncDef(FuncDefStmt {
        scope,
        name,
        params,
        body,
    }))
}
