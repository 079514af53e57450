//! Token definitions for the craft recipe notation.
//!
//! The raw scanner is a logos lexer over character classes; the token stream
//! the grammar consumes is assembled on top of it by
//! [`lex`](crate::craft::lexer::lex), which handles literal accumulation and
//! classification.

use logos::Logos;
use serde::Serialize;
use std::fmt;

/// Character-class tokens produced by the raw scanner.
///
/// Whitespace (space, tab, newline) and `#` line comments are skipped here.
/// Literal text arrives as `Fragment` runs; a single literal may span several
/// fragments because whitespace and comments interrupt the scan but not the
/// literal, so fragments are stitched back together by the assembly pass.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(skip r"[ \t\n]+")]
#[logos(skip r"#[^\n]*")]
pub enum RawToken {
    #[token("(")]
    OpenParen,

    #[token(")")]
    CloseParen,

    #[token("*")]
    Star,

    #[token(",")]
    Comma,

    // Anything that is not punctuation, whitespace, or a comment start.
    #[regex(r"[^ \t\n(),*#]+")]
    Fragment,
}

/// Kinds of the assembled token stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TokenKind {
    OpenParen,
    CloseParen,
    Multiply,
    Separator,
    Int,
    Float,
    Ident,
}

impl TokenKind {
    /// Classify a literal buffer.
    ///
    /// Classification is purely syntactic: a buffer that parses as a 32-bit
    /// float is `Float` when it contains a literal `.` and `Int` otherwise;
    /// anything unparseable is an `Ident`. `3.0` and `3` classify differently
    /// despite equal magnitude.
    pub fn classify(text: &str) -> TokenKind {
        if text.parse::<f32>().is_ok() {
            if text.contains('.') {
                TokenKind::Float
            } else {
                TokenKind::Int
            }
        } else {
            TokenKind::Ident
        }
    }

    /// Check if this kind carries literal text from the document.
    pub fn is_literal(&self) -> bool {
        matches!(self, TokenKind::Int | TokenKind::Float | TokenKind::Ident)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::OpenParen => "OPEN_PAREN",
            TokenKind::CloseParen => "CLOSE_PAREN",
            TokenKind::Multiply => "MULTIPLY",
            TokenKind::Separator => "SEPARATOR",
            TokenKind::Int => "INT",
            TokenKind::Float => "FLOAT",
            TokenKind::Ident => "IDENT",
        };
        write!(f, "{}", name)
    }
}

/// One token of the craft notation: a kind plus its source text.
///
/// Created once by the tokenizer, immutable, consumed once by the parser.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Token {
            kind,
            text: text.into(),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<15} --- {}", self.text, self.kind)
    }
}
