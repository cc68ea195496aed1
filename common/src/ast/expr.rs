use super::constant::Const;
use super::ident::Ident;
use super::ty::Type;

/// An expression. Arity is fixed by `OpKind` (see [`OpKind`]) rather than by
/// an operator-precedence table: every operator prefixes its operands, so
/// there is nothing to climb.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Cast(Box<CastExpr>),
    Constant(Const),
    Identifier(Ident),
    FuncCall(Box<FuncCallExpr>),
    Op(OpExpr),
    /// `IT`, the implicit variable.
    ImplicitVar,
}

/// `MAEK <expr> A <type>` — a non-destructive conversion.
#[derive(Debug, Clone, PartialEq)]
pub struct CastExpr {
    pub target: Expr,
    pub new_type: Type,
}

/// `<scope> IZ <name> [YR <expr> (AN YR <expr>)*] MKAY`.
#[derive(Debug, Clone, PartialEq)]
pub struct FuncCallExpr {
    pub scope: Ident,
    pub name: Ident,
    pub args: ExprList,
}

/// The operation an `OpExpr` performs on its `args`.
///
/// Arity is fixed by the *token* that introduced the op, not purely by
/// `OpKind`: `BOTH OF`/`EITHER OF` parse to `And`/`Or` with exactly two
/// arguments, while `ALL OF`/`ANY OF` parse to the *same* `And`/`Or` kinds
/// with one or more arguments (mirroring the source language, where both
/// spellings reduce to one logical operation). `Not` always takes exactly
/// one argument; `Add`, `Sub`, `Mult`, `Div`, `Mod`, `Max`, `Min`, `Xor`,
/// `Eq`, and `Neq` always take exactly two; `Cat` is always n-ary (`SMOOSH`).
/// `BOTHSAEM`/`DIFFRINT` map to `Eq`/`Neq` as distinct kinds rather than one
/// being sugar for the other — see the design notes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpKind {
    Add,
    Sub,
    Mult,
    Div,
    Mod,
    Max,
    Min,
    And,
    Or,
    Xor,
    Not,
    Eq,
    Neq,
    Cat,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OpExpr {
    pub op: OpKind,
    pub args: ExprList,
}

/// An ordered, owned list of expressions.
pub type ExprList = Vec<Expr>;
