//! Token types and tokenizer for directive lines
//!
//! Directive lines are short and self-contained, so the tokenizer works on
//! one line at a time and never fails: anything it does not recognize
//! becomes a [`TokenKind::Other`] token and is left to the parser to reject.

use std::fmt;

/// A token from a directive line.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Token<'src> {
    /// The type of token.
    pub kind: TokenKind,
    /// The source text of this token.
    pub lexeme: &'src str,
    /// Byte offset of the token within the line.
    pub offset: usize,
}

impl<'src> Token<'src> {
    /// Create a new token.
    #[inline]
    pub fn new(kind: TokenKind, lexeme: &'src str, offset: usize) -> Self {
        Self {
            kind,
            lexeme,
            offset,
        }
    }

    /// Whether this is an identifier with the given text.
    #[inline]
    pub fn is_ident(&self, text: &str) -> bool {
        self.kind == TokenKind::Ident && self.lexeme == text
    }
}

impl fmt::Debug for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({:?} @ {})", self.kind, self.lexeme, self.offset)
    }
}

/// Token kinds recognized in a directive line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Identifier or keyword other than `const`: `int`, `duk_log`, `std`
    Ident,
    /// `const`
    Const,
    /// `*`
    Star,
    /// `&`
    Amp,
    /// `::`
    PathSep,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `,`
    Comma,
    /// Any other character (`;`, `{`, `/`, ...)
    Other,
}

#[inline]
fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

#[inline]
fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Split one line into tokens. Whitespace separates tokens and is dropped.
pub fn tokenize(line: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut chars = line.char_indices().peekable();

    while let Some((start, c)) = chars.next() {
        if c.is_whitespace() {
            continue;
        }

        if is_ident_start(c) || c.is_ascii_digit() {
            let mut end = start + c.len_utf8();
            while let Some(&(idx, next)) = chars.peek() {
                if !is_ident_continue(next) {
                    break;
                }
                end = idx + next.len_utf8();
                chars.next();
            }
            let lexeme = &line[start..end];
            let kind = if lexeme == "const" {
                TokenKind::Const
            } else {
                TokenKind::Ident
            };
            tokens.push(Token::new(kind, lexeme, start));
            continue;
        }

        let kind = match c {
            '*' => TokenKind::Star,
            '&' => TokenKind::Amp,
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            ',' => TokenKind::Comma,
            ':' if matches!(chars.peek(), Some(&(_, ':'))) => {
                chars.next();
                tokens.push(Token::new(TokenKind::PathSep, &line[start..start + 2], start));
                continue;
            }
            _ => TokenKind::Other,
        };
        tokens.push(Token::new(kind, &line[start..start + c.len_utf8()], start));
    }

    tokens
}
