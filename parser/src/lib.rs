//! Recursive-descent parser that turns a pre-lexed LOLCODE token stream
//! into an abstract syntax tree. The grammar is LL(1) throughout — every
//! production is chosen by a single token of lookahead (two, for the
//! handful of identifier-led statement forms) — so this crate never
//! backtracks and never discards partial work.
//!
//! Parsing is all-or-nothing: the first malformed construct aborts with a
//! [`common::error::ParseError`] rather than collecting a list of errors to
//! recover past.

mod block;
mod cursor;
mod expr;
mod stmt;
mod ty;

pub use common::ast::Program;
pub use common::error::{ParseError, ParseErrorKind};
pub use lexer::Token;

/// Parses a complete token stream into a [`Program`].
///
/// # Errors
///
/// Returns the first [`ParseError`] encountered; parsing does not continue
/// past it.
///
/// # Examples
///
/// ```
/// let tokens = lexer::tokenize("HAI 1.2\nVISIBLE \"HI WORLD\"\nKTHXBYE\n", "hi.lol").unwrap();
/// let program = parser::parse_program(tokens).unwrap();
/// assert_eq!(program.body.len(), 1);
/// ```
pub fn parse_program(tokens: Vec<Token>) -> Result<Program, ParseError> {
    block::parse_program(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::ast::{Const, Expr, OpKind, Stmt};

    fn parse(src: &str) -> Program {
        let tokens = lexer::tokenize(src, "test.lol").unwrap();
        parse_program(tokens).unwrap()
    }

    #[test]
    fn empty_program() {
        let program = parse("HAI 1.2\nKTHXBYE\n");
        assert!(program.body.is_empty());
    }

    #[test]
    fn print_with_suppressed_newline() {
        let program = parse("HAI 1.2\nVISIBLE \"HI\"!\nKTHXBYE\n");
        match &program.body[0] {
            Stmt::Print(p) => {
                assert!(p.suppress_newline);
                assert_eq!(p.args.len(), 1);
                assert_eq!(p.args[0], Expr::Constant(Const::String("HI".into())));
            }
            other => panic!("expected Print, got {other:?}"),
        }
    }

    #[test]
    fn declaration_with_type_init() {
        let program = parse("HAI 1.2\nI HAS A SCORE ITZ A NUMBR\nKTHXBYE\n");
        match &program.body[0] {
            Stmt::Declaration(d) => {
                assert_eq!(d.scope.image, "I");
                assert_eq!(d.target.image, "SCORE");
            }
            other => panic!("expected Declaration, got {other:?}"),
        }
    }

    #[test]
    fn if_else_with_one_mebbe() {
        let src = "HAI 1.2\nO RLY?\n  YA RLY\n    VISIBLE \"Y\"\n  MEBBE BOTH SAEM IT AN WIN\n    VISIBLE \"M\"\n  NO WAI\n    VISIBLE \"N\"\nOIC\nKTHXBYE\n";
        let program = parse(src);
        match &program.body[0] {
            Stmt::IfThenElse(s) => {
                assert_eq!(s.then_block.len(), 1);
                assert_eq!(s.elseifs.len(), 1);
                assert!(s.else_block.is_some());
            }
            other => panic!("expected IfThenElse, got {other:?}"),
        }
    }

    #[test]
    fn loop_with_til_guard_and_uppin_update() {
        let src = "HAI 1.2\nIM IN YR LOOP UPPIN YR I TIL BOTH SAEM I AN 10\n  VISIBLE I\nIM OUTTA YR LOOP\nKTHXBYE\n";
        let program = parse(src);
        match &program.body[0] {
            Stmt::Loop(l) => {
                assert_eq!(l.name.image, "LOOP");
                assert!(l.update.is_some());
                match l.guard.as_ref().unwrap() {
                    common::ast::LoopGuard::Til(Expr::Op(op)) => {
                        assert_eq!(op.op, OpKind::Eq);
                    }
                    other => panic!("expected Til(Eq), got {other:?}"),
                }
            }
            other => panic!("expected Loop, got {other:?}"),
        }
    }

    #[test]
    fn the_an_connective_is_optional_in_binary_ops() {
        let program = parse("HAI 1.2\nVISIBLE SUM OF 1 2\nKTHXBYE\n");
        match &program.body[0] {
            Stmt::Print(p) => match &p.args[0] {
                Expr::Op(op) => {
                    assert_eq!(op.op, OpKind::Add);
                    assert_eq!(op.args.len(), 2);
                }
                other => panic!("expected Op, got {other:?}"),
            },
            other => panic!("expected Print, got {other:?}"),
        }
    }

    #[test]
    fn nary_op_reads_until_mkay_not_until_an_runs_out() {
        let program = parse("HAI 1.2\nVISIBLE ALL OF WIN AN WIN WIN MKAY\nKTHXBYE\n");
        match &program.body[0] {
            Stmt::Print(p) => match &p.args[0] {
                Expr::Op(op) => {
                    assert_eq!(op.op, OpKind::And);
                    assert_eq!(op.args.len(), 3);
                }
                other => panic!("expected Op, got {other:?}"),
            },
            other => panic!("expected Print, got {other:?}"),
        }
    }

    #[test]
    fn loop_name_mismatch_reports_the_closing_line() {
        let src = "HAI 1.2\nIM IN YR A\n  VISIBLE \"X\"\nIM OUTTA YR B\nKTHXBYE\n";
        let tokens = lexer::tokenize(src, "test.lol").unwrap();
        let err = parse_program(tokens).unwrap_err();
        match err.kind {
            ParseErrorKind::LoopNameMismatch { opened, closed } => {
                assert_eq!(opened, "A");
                assert_eq!(closed, "B");
            }
            other => panic!("expected LoopNameMismatch, got {other:?}"),
        }
        assert_eq!(err.line, 4);
    }

    #[test]
    fn func_call_as_expression_statement() {
        let program = parse("HAI 1.2\nHOW IZ I ADD YR X AN YR Y\n  FOUND YR SUM OF X AN Y\nIF U SAY SO\nI IZ ADD YR 1 AN YR 2 MKAY\nKTHXBYE\n");
        assert_eq!(program.body.len(), 2);
        match &program.body[1] {
            Stmt::Expr(Expr::FuncCall(call)) => {
                assert_eq!(call.name.image, "ADD");
                assert_eq!(call.args.len(), 2);
            }
            other => panic!("expected a function call statement, got {other:?}"),
        }
    }
}
