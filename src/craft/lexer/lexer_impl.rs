//! Implementation of the craft lexer.
//!
//! The raw character classes come from logos; this module assembles them
//! into the token stream the grammar consumes. Literals accumulate in a
//! pending buffer that only a separator or the end of input flushes, so a
//! literal continues across whitespace, comments, and even punctuation
//! emissions. The tokenizer never fails: unparseable literals degrade to
//! `Ident` tokens and are dealt with downstream.

use logos::Logos;

use super::tokens::{RawToken, Token, TokenKind};

/// Run the raw scanner and collect the character-class tokens with their
/// source text.
pub fn tokenize(source: &str) -> Vec<(RawToken, String)> {
    let mut lexer = RawToken::lexer(source);
    let mut raw = Vec::new();

    while let Some(result) = lexer.next() {
        if let Ok(token) = result {
            raw.push((token, lexer.slice().to_string()));
        }
    }

    raw
}

/// Tokenize a source string into the assembled token stream.
pub fn lex(source: &str) -> Vec<Token> {
    let mut stream = Vec::new();
    let mut pending = String::new();

    for (raw, text) in tokenize(source) {
        match raw {
            RawToken::OpenParen => stream.push(Token::new(TokenKind::OpenParen, "(")),
            RawToken::CloseParen => stream.push(Token::new(TokenKind::CloseParen, ")")),
            RawToken::Star => stream.push(Token::new(TokenKind::Multiply, "*")),
            RawToken::Comma => {
                flush_pending(&mut pending, &mut stream);
                stream.push(Token::new(TokenKind::Separator, ","));
            }
            RawToken::Fragment => pending.push_str(&text),
        }
    }

    flush_pending(&mut pending, &mut stream);
    stream
}

fn flush_pending(pending: &mut String, stream: &mut Vec<Token>) {
    if pending.is_empty() {
        return;
    }
    let text = std::mem::take(pending);
    stream.push(Token::new(TokenKind::classify(&text), text));
}
