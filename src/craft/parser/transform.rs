//! Tree normalization passes.
//!
//! Two independent, sequential passes remove the wrapper nodes the grammar's
//! single-alternative productions introduce: [`collapse_chains`] shrinks
//! unary chains, [`flatten_expressions`] turns the right-recursive
//! expression spine into one flat argument list per braced group. Both
//! passes mutate the tree in place and are idempotent.

use super::syntax::{SyntaxNode, SyntaxTag};

/// Collapse unary chains.
///
/// A non-root node with exactly one child becomes that child (tag, value,
/// and children), repeatedly, until it genuinely branches or is a true
/// leaf. The root is always recursed into, never collapsed, even when it
/// has a single child.
pub fn collapse_chains(root: &mut SyntaxNode) {
    for child in &mut root.children {
        collapse_node(child);
    }
}

fn collapse_node(node: &mut SyntaxNode) {
    while node.children.len() == 1 {
        if let Some(only) = node.children.pop() {
            *node = only;
        }
    }
    for child in &mut node.children {
        collapse_node(child);
    }
}

/// Flatten expression nodes.
///
/// Post-order: once a node's children are processed, any child tagged
/// `Expression` is replaced in the child list by its own children, so the
/// nested expressions produced by right recursion end up as direct,
/// ordered siblings.
pub fn flatten_expressions(node: &mut SyntaxNode) {
    for child in &mut node.children {
        flatten_expressions(child);
    }

    if node
        .children
        .iter()
        .any(|child| child.tag == SyntaxTag::Expression)
    {
        let mut flat = Vec::with_capacity(node.children.len());
        for child in std::mem::take(&mut node.children) {
            if child.tag == SyntaxTag::Expression {
                flat.extend(child.children);
            } else {
                flat.push(child);
            }
        }
        node.children = flat;
    }
}
