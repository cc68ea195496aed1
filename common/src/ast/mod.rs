//! The LOLCODE abstract syntax tree.
//!
//! Every node is a genuine Rust `enum`/`struct` rather than a generic
//! kind-tag-plus-children blob: a `Stmt::Cast` variant owns a `CastStmt`
//! directly, so there is no way to construct a node whose tag and payload
//! disagree. Ownership is by value throughout — dropping a `Program` drops
//! the whole tree.

pub mod constant;
pub mod expr;
pub mod ident;
pub mod stmt;
pub mod ty;

pub use constant::Const;
pub use expr::{CastExpr, Expr, ExprList, FuncCallExpr, OpExpr, OpKind};
pub use ident::{Ident, IdentList};
pub use stmt::{
    AssignmentStmt, Block, CaseBlock, CastStmt, DeallocationStmt, DeclInit, DeclarationStmt,
    FuncDefStmt, GuardedBlock, IfThenElseStmt, InputStmt, LoopGuard, LoopStmt, LoopUpdate,
    LoopUpdateOp, PrintStmt, Program, ReturnStmt, Stmt, SwitchStmt,
};
pub use ty::Type;
