//! Recursive descent parser for the craft recipe notation.
//!
//! Grammar:
//!
//! ```text
//! start        ::= braced-expr
//! braced-expr  ::= '(' expression ')' [ '*' INT ]
//! expression   ::= argument ( ',' expression )?
//! argument     ::= INT | FLOAT | IDENT | braced-expr [ '*' INT ]
//! ```
//!
//! The parser works on token slices. Whether a braced group carries a
//! trailing multiplier is decided by the last token of the slice being
//! parsed: an `INT` there means `'*' INT` follows the matching close paren.
//! There is no `*` lookahead; multipliers must sit immediately after the
//! close paren for the detection to be unambiguous. Argument boundaries are
//! separators at brace depth zero.
//!
//! Any structural failure aborts the whole parse; there is no recovery and
//! no partial tree.

use std::fmt;

use super::syntax::{SyntaxNode, SyntaxTag};
use crate::craft::lexer::{Token, TokenKind};

/// Errors from the grammar parser.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    /// The token stream is empty.
    EmptyDocument,
    /// A braced group is missing its opening or closing paren.
    UnbalancedBraces,
    /// An argument position holds no tokens.
    MissingArgument,
    /// An argument starts with a token that cannot begin one.
    UnexpectedToken(String),
    /// The tokens after a braced group's close paren are not `'*' INT`.
    InvalidMultiplier(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::EmptyDocument => write!(f, "empty recipe document"),
            ParseError::UnbalancedBraces => write!(f, "unbalanced braces in recipe document"),
            ParseError::MissingArgument => write!(f, "expected an argument"),
            ParseError::UnexpectedToken(text) => write!(f, "unexpected token '{}'", text),
            ParseError::InvalidMultiplier(found) => {
                write!(f, "expected '*' and an integer multiplier, found '{}'", found)
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// Parse a token stream into the raw syntax tree.
pub fn parse(tokens: &[Token]) -> Result<SyntaxNode, ParseError> {
    if tokens.is_empty() {
        return Err(ParseError::EmptyDocument);
    }
    let mut root = SyntaxNode::new(SyntaxTag::Start);
    root.children.push(braced_expr(tokens)?);
    Ok(root)
}

// braced-expr ::= '(' expression ')' [ '*' INT ]
//
// The multiplier branch is taken when the slice ends in an INT.
fn braced_expr(tokens: &[Token]) -> Result<SyntaxNode, ParseError> {
    let last = tokens.last().ok_or(ParseError::MissingArgument)?;
    let mut node = SyntaxNode::new(SyntaxTag::BracedExpr);

    if last.kind != TokenKind::Int {
        if tokens.len() < 2
            || tokens[0].kind != TokenKind::OpenParen
            || last.kind != TokenKind::CloseParen
        {
            return Err(ParseError::UnbalancedBraces);
        }
        node.children
            .push(expression(&tokens[1..tokens.len() - 1])?);
    } else {
        // '(' expression ')' '*' INT: the inner expression ends three
        // tokens before the end of the slice.
        if tokens.len() < 4 {
            return Err(ParseError::UnbalancedBraces);
        }
        let close = tokens.len() - 3;
        if tokens[0].kind != TokenKind::OpenParen || tokens[close].kind != TokenKind::CloseParen {
            return Err(ParseError::UnbalancedBraces);
        }
        if tokens[tokens.len() - 2].kind != TokenKind::Multiply {
            return Err(ParseError::InvalidMultiplier(
                tokens[tokens.len() - 2].text.clone(),
            ));
        }
        node.children.push(expression(&tokens[1..close])?);
        node.children.push(SyntaxNode::new(SyntaxTag::Multiply));
        node.children
            .push(SyntaxNode::leaf(SyntaxTag::Integer, last.text.as_str()));
    }

    Ok(node)
}

// expression ::= argument ( ',' expression )?
//
// The argument boundary is the first separator at brace depth zero. A
// trailing separator with nothing after it collapses to a single terminal
// argument; a slice with no separator at all is itself one argument.
fn expression(tokens: &[Token]) -> Result<SyntaxNode, ParseError> {
    let mut node = SyntaxNode::new(SyntaxTag::Expression);

    match depth_zero_separator(tokens) {
        None => node.children.push(argument(tokens)?),
        Some(split) => {
            node.children.push(argument(&tokens[..split])?);
            if split + 1 < tokens.len() {
                node.children.push(expression(&tokens[split + 1..])?);
            }
        }
    }

    Ok(node)
}

// argument ::= INT | FLOAT | IDENT | braced-expr [ '*' INT ]
fn argument(tokens: &[Token]) -> Result<SyntaxNode, ParseError> {
    let first = tokens.first().ok_or(ParseError::MissingArgument)?;
    let last = tokens.last().ok_or(ParseError::MissingArgument)?;
    let mut node = SyntaxNode::new(SyntaxTag::Argument);

    match first.kind {
        TokenKind::Int => node
            .children
            .push(SyntaxNode::leaf(SyntaxTag::Integer, first.text.as_str())),
        TokenKind::Float => node
            .children
            .push(SyntaxNode::leaf(SyntaxTag::Float, first.text.as_str())),
        TokenKind::Ident => node
            .children
            .push(SyntaxNode::leaf(SyntaxTag::Str, first.text.as_str())),
        _ => {}
    }

    if last.kind == TokenKind::CloseParen {
        // A bare braced expression with no multiplier.
        node.children.push(braced_expr(tokens)?);
    } else if first.kind == TokenKind::OpenParen {
        // A braced expression whose multiplier trails the matching close
        // paren: locate the close by depth counting, then validate the
        // remainder as '*' INT.
        let close = matching_close(tokens).ok_or(ParseError::UnbalancedBraces)?;
        let rest = &tokens[close + 1..];
        if rest.len() != 2
            || rest[0].kind != TokenKind::Multiply
            || rest[1].kind != TokenKind::Int
        {
            let found = rest
                .iter()
                .map(|t| t.text.as_str())
                .collect::<Vec<_>>()
                .join(" ");
            return Err(ParseError::InvalidMultiplier(found));
        }
        node.children.push(braced_expr(&tokens[..=close])?);
        node.children.push(SyntaxNode::new(SyntaxTag::Multiply));
        node.children
            .push(SyntaxNode::leaf(SyntaxTag::Integer, rest[1].text.as_str()));
    }

    if node.children.is_empty() {
        return Err(ParseError::UnexpectedToken(first.text.clone()));
    }

    Ok(node)
}

/// Index of the first separator at brace depth zero, if any.
fn depth_zero_separator(tokens: &[Token]) -> Option<usize> {
    let mut depth = 0i32;
    for (i, token) in tokens.iter().enumerate() {
        match token.kind {
            TokenKind::OpenParen => depth += 1,
            TokenKind::CloseParen => depth -= 1,
            TokenKind::Separator if depth == 0 => return Some(i),
            _ => {}
        }
    }
    None
}

/// Index of the close paren matching the open paren at the start of the
/// slice, if any.
fn matching_close(tokens: &[Token]) -> Option<usize> {
    let mut depth = 0i32;
    for (i, token) in tokens.iter().enumerate() {
        match token.kind {
            TokenKind::OpenParen => depth += 1,
            TokenKind::CloseParen => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}
