//! Treeviz formatter for syntax trees.

use super::syntax::SyntaxNode;

/// Render a syntax tree as a box-drawing diagram, root first.
pub fn to_treeviz_str(root: &SyntaxNode) -> String {
    let mut result = String::new();
    result.push_str(&root.label());
    result.push('\n');
    for (i, child) in root.children.iter().enumerate() {
        let is_last = i == root.children.len() - 1;
        append_node(&mut result, child, "", is_last);
    }
    result
}

fn append_node(result: &mut String, node: &SyntaxNode, prefix: &str, is_last: bool) {
    let connector = if is_last { "└─" } else { "├─" };
    result.push_str(&format!("{}{} {}\n", prefix, connector, node.label()));

    let new_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
    for (i, child) in node.children.iter().enumerate() {
        append_node(result, child, &new_prefix, i == node.children.len() - 1);
    }
}
