//! Lexing for the craft recipe notation.
//!
//! Tokenization happens in two layers: a logos scanner over character
//! classes ([`tokenize`]), and an assembly pass that stitches literal
//! fragments into the classified token stream the grammar consumes
//! ([`lex`]).

pub mod lexer_impl;
pub mod tokens;

pub use lexer_impl::{lex, tokenize};
pub use tokens::{RawToken, Token, TokenKind};
