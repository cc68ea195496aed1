//! Line-based scanning: comment stripping, word splitting, and folding words
//! into tokens.

use std::rc::Rc;

use crate::error::{LexError, LexErrorKind};
use crate::keyword;
use crate::token::{LiteralValue, Token, TokenKind};

/// Scans a whole source file into a token stream terminated by `Eof`.
pub fn tokenize(source: &str, fname: Rc<str>) -> Result<Vec<Token>, LexError> {
    let mut tokens = Vec::new();
    let mut in_block_comment = false;
    let mut last_line = 0u32;

    for (idx, raw_line) in source.lines().enumerate() {
        let line_no = (idx + 1) as u32;
        last_line = line_no;
        let mut line = raw_line;

        if in_block_comment {
            match find_word(line, "TLDR") {
                Some(_) => {
                    in_block_comment = false;
                    line = skip_word(line, "TLDR");
                }
                None => continue,
            }
        }

        if let Some(start) = find_word(line, "OBTW") {
            let (before, rest) = line.split_at(start);
            let after_obtw = skip_word(rest, "OBTW");
            tokenize_line(before, &fname, line_no, &mut tokens)?;
            match find_word(after_obtw, "TLDR") {
                Some(_) => {
                    tokenize_line(skip_word(after_obtw, "TLDR"), &fname, line_no, &mut tokens)?
                }
                None => {
                    in_block_comment = true;
                    tokens.push(Token::new(TokenKind::Newline, "", fname.clone(), line_no));
                    continue;
                }
            }
        } else {
            let code = match find_word(line, "BTW") {
                Some(start) => &line[..start],
                None => line,
            };
            tokenize_line(code, &fname, line_no, &mut tokens)?;
        }

        tokens.push(Token::new(TokenKind::Newline, "", fname.clone(), line_no));
    }

    if in_block_comment {
        return Err(LexError {
            kind: LexErrorKind::UnterminatedComment,
            fname,
            line: last_line,
        });
    }

    tokens.push(Token::new(TokenKind::Eof, "", fname, last_line + 1));
    Ok(tokens)
}

/// Finds `word` in `line` at a word boundary (not as a substring of a larger
/// identifier), returning the byte offset it starts at.
fn find_word(line: &str, word: &str) -> Option<usize> {
    for part in split_raw_words(line) {
        let part_start = part.as_ptr() as usize - line.as_ptr() as usize;
        if part == word {
            return Some(part_start);
        }
    }
    None
}

fn skip_word<'a>(line: &'a str, word: &str) -> &'a str {
    match line.find(word) {
        Some(pos) => &line[pos + word.len()..],
        None => line,
    }
}

/// Splits a line into raw whitespace-delimited chunks, without merging
/// quoted strings. Used only for locating comment-marker words.
fn split_raw_words(line: &str) -> impl Iterator<Item = &str> {
    line.split_whitespace()
}

/// Tokenizes one already-comment-stripped line, folding words into keyword
/// phrases, literals, and identifiers.
fn tokenize_line(
    line: &str,
    fname: &Rc<str>,
    line_no: u32,
    out: &mut Vec<Token>,
) -> Result<(), LexError> {
    let words = split_words(line, fname, line_no)?;
    let refs: Vec<&str> = words.iter().map(String::as_str).collect();

    let mut i = 0;
    while i < refs.len() {
        if let Some((kind, len)) = keyword::fold_phrase(&refs, i) {
            let image = refs[i..i + len].join(" ");
            out.push(Token::new(kind, image, fname.clone(), line_no));
            i += len;
            continue;
        }

        let word = refs[i];
        out.push(classify_word(word, fname, line_no)?);
        i += 1;
    }

    Ok(())
}

/// Splits a line into words, keeping `"`-delimited string literals (with
/// LOLCODE's `:` escapes) intact as a single word.
fn split_words(line: &str, fname: &Rc<str>, line_no: u32) -> Result<Vec<String>, LexError> {
    let mut words = Vec::new();
    let chars: Vec<char> = line.chars().collect();
    let mut i = 0;

    while i < chars.len() {
        if chars[i].is_whitespace() {
            i += 1;
            continue;
        }

        if chars[i] == ',' {
            i += 1;
            continue;
        }

        if chars[i] == '"' {
            let mut lexeme = String::from("\"");
            i += 1;
            loop {
                if i >= chars.len() {
                    return Err(LexError {
                        kind: LexErrorKind::UnterminatedString,
                        fname: fname.clone(),
                        line: line_no,
                    });
                }
                match chars[i] {
                    '"' => {
                        lexeme.push('"');
                        i += 1;
                        break;
                    }
                    ':' => {
                        if i + 1 >= chars.len() {
                            return Err(LexError {
                                kind: LexErrorKind::UnterminatedString,
                                fname: fname.clone(),
                                line: line_no,
                            });
                        }
                        lexeme.push(':');
                        lexeme.push(chars[i + 1]);
                        i += 2;
                    }
                    c => {
                        lexeme.push(c);
                        i += 1;
                    }
                }
            }
            words.push(lexeme);
            continue;
        }

        let start = i;
        while i < chars.len() && !chars[i].is_whitespace() && chars[i] != ',' {
            i += 1;
        }
        words.push(chars[start..i].iter().collect());
    }

    Ok(words)
}

/// Unescapes a string literal's body (without its surrounding quotes),
/// turning LOLCODE's `:` escapes into the characters they denote.
fn unescape(body: &str, fname: &Rc<str>, line_no: u32) -> Result<String, LexError> {
    let mut out = String::new();
    let mut chars = body.chars();
    while let Some(c) = chars.next() {
        if c != ':' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some(')') => out.push('\n'),
            Some('>') => out.push('\t'),
            Some('o') => out.push('\u{7}'),
            Some('"') => out.push('"'),
            Some(':') => out.push(':'),
            Some(other) => {
                return Err(LexError {
                    kind: LexErrorKind::BadEscape(other),
                    fname: fname.clone(),
                    line: line_no,
                })
            }
            None => {
                return Err(LexError {
                    kind: LexErrorKind::BadEscape(':'),
                    fname: fname.clone(),
                    line: line_no,
                })
            }
        }
    }
    Ok(out)
}

/// Classifies one already-split word: keyword, boolean, numeric literal,
/// string literal, or identifier.
fn classify_word(word: &str, fname: &Rc<str>, line_no: u32) -> Result<Token, LexError> {
    if let Some(kind) = keyword::lookup_word(word) {
        return Ok(Token::new(kind, word, fname.clone(), line_no));
    }

    if word == "WIN" || word == "FAIL" {
        return Ok(
            Token::new(TokenKind::Boolean, word, fname.clone(), line_no)
                .with_value(LiteralValue::Boolean(word == "WIN")),
        );
    }

    if word.starts_with('"') && word.ends_with('"') && word.len() >= 2 {
        let body = unescape(&word[1..word.len() - 1], fname, line_no)?;
        return Ok(Token::new(TokenKind::StringLit, body, fname.clone(), line_no));
    }

    if looks_numeric(word) {
        return classify_number(word, fname, line_no);
    }

    Ok(Token::new(TokenKind::Identifier, word, fname.clone(), line_no))
}

fn looks_numeric(word: &str) -> bool {
    let body = word.strip_prefix('-').unwrap_or(word);
    !body.is_empty() && body.chars().next().unwrap().is_ascii_digit()
}

fn classify_number(word: &str, fname: &Rc<str>, line_no: u32) -> Result<Token, LexError> {
    if word.contains('.') {
        match word.parse::<f64>() {
            Ok(v) => Ok(
                Token::new(TokenKind::Float, word, fname.clone(), line_no)
                    .with_value(LiteralValue::Float(v)),
            ),
            Err(_) => Err(LexError {
                kind: LexErrorKind::MalformedNumber(word.to_string()),
                fname: fname.clone(),
                line: line_no,
            }),
        }
    } else {
        match word.parse::<i64>() {
            Ok(v) => Ok(
                Token::new(TokenKind::Integer, word, fname.clone(), line_no)
                    .with_value(LiteralValue::Integer(v)),
            ),
            Err(_) => Err(LexError {
                kind: LexErrorKind::MalformedNumber(word.to_string()),
                fname: fname.clone(),
                line: line_no,
            }),
        }
    }
}
