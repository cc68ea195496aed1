//! Shared data types used by the `lexer` and `parser` crates: the LOLCODE
//! abstract syntax tree and the fatal-error type the parser reports through.

pub mod ast;
pub mod error;
