//! Turns LOLCODE source text into the token stream the `parser` crate
//! consumes. Out of scope for this workspace: macro expansion, `#include`-
//! style preprocessing, and anything past producing a flat `Vec<Token>`.

pub mod error;
mod keyword;
mod scan;
pub mod token;

use std::rc::Rc;

pub use error::{LexError, LexErrorKind};
pub use token::{LiteralValue, Token, TokenKind};

/// Tokenizes an entire source file. `fname` is attached to every token
/// (cheaply, via one `Rc<str>` allocation) for error reporting further down
/// the pipeline.
pub fn tokenize(source: &str, fname: impl Into<Rc<str>>) -> Result<Vec<Token>, LexError> {
    scan::tokenize(source, fname.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(src: &str) -> Vec<TokenKind> {
        tokenize(src, "test.lol")
            .unwrap()
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn hai_kthxbye_roundtrip() {
        let src = "HAI 1.2\nKTHXBYE\n";
        let got = kinds(src);
        assert_eq!(
            got,
            vec![
                TokenKind::Hai,
                TokenKind::Float,
                TokenKind::Newline,
                TokenKind::KThxBye,
                TokenKind::Newline,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn folds_multiword_keywords() {
        let src = "I HAS A SCORE ITZ A NUMBR\n";
        let got = kinds(src);
        assert_eq!(
            got,
            vec![
                TokenKind::Identifier,
                TokenKind::HasA,
                TokenKind::Identifier,
                TokenKind::Itz,
                TokenKind::A,
                TokenKind::Numbr,
                TokenKind::Newline,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn dual_arity_and_keywords_fold_the_same() {
        assert_eq!(kinds("BOTH OF")[0], TokenKind::BothOf);
        assert_eq!(kinds("ALL OF")[0], TokenKind::AllOf);
    }

    #[test]
    fn strips_line_comment() {
        let got = kinds("VISIBLE \"HI\" BTW say hi\n");
        assert_eq!(
            got,
            vec![
                TokenKind::Visible,
                TokenKind::StringLit,
                TokenKind::Newline,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn strips_block_comment_across_lines() {
        let src = "VISIBLE \"A\"\nOBTW\nignored line\nTLDR\nVISIBLE \"B\"\n";
        let got = kinds(src);
        assert_eq!(
            got,
            vec![
                TokenKind::Visible,
                TokenKind::StringLit,
                TokenKind::Newline,
                TokenKind::Newline,
                TokenKind::Visible,
                TokenKind::StringLit,
                TokenKind::Newline,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn unterminated_string_errors() {
        let err = tokenize("VISIBLE \"oops\n", "test.lol").unwrap_err();
        assert_eq!(err.kind, LexErrorKind::UnterminatedString);
    }

    #[test]
    fn unterminated_block_comment_errors() {
        let err = tokenize("OBTW\nnever closed\n", "test.lol").unwrap_err();
        assert_eq!(err.kind, LexErrorKind::UnterminatedComment);
    }

    #[test]
    fn recognizes_booleans_and_numbers() {
        let got = kinds("WIN FAIL 42 -3.5\n");
        assert_eq!(
            got,
            vec![
                TokenKind::Boolean,
                TokenKind::Boolean,
                TokenKind::Integer,
                TokenKind::Float,
                TokenKind::Newline,
                TokenKind::Eof,
            ]
        );
    }
}
