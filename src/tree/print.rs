//! Rendering trees back out: source text, a structure view, and a
//! serializable dump.
//!
//! [`render_source`] is the file-save surface. It emits the raw text of
//! every leaf in document order, hidden trivia included, so an unmodified
//! tree reproduces its input byte for byte. [`pretty`] is the inspection
//! surface: an indented view of the visible structure only.

use std::fmt::Write;

use serde::Serialize;

use super::{NodeKind, TreeNode};

/// Concatenates the raw text of every leaf under `node`, hidden ones
/// included. Parse-then-render is the identity on untouched trees.
pub fn render_source(node: &TreeNode) -> String {
    let mut out = String::new();
    render_into(node, &mut out);
    out
}

fn render_into(node: &TreeNode, out: &mut String) {
    match node.kind() {
        NodeKind::Token { text, .. } | NodeKind::Literal { text } => out.push_str(text),
        NodeKind::Production { .. } => {
            for edge in node.children() {
                render_into(&edge.node, out);
            }
        }
    }
}

/// An indented structure view of the visible nodes, with token types,
/// raw text, and edge aliases.
pub fn pretty(node: &TreeNode) -> String {
    let mut out = String::new();
    pretty_into(node, None, 0, &mut out);
    out
}

fn pretty_into(node: &TreeNode, alias: Option<&str>, depth: usize, out: &mut String) {
    for _ in 0..depth {
        out.push_str("  ");
    }
    if let Some(alias) = alias {
        let _ = write!(out, "{alias}: ");
    }
    match node.kind() {
        NodeKind::Production { name } => out.push_str(name),
        NodeKind::Token { token_type, text } => {
            let _ = write!(out, "{token_type} {text:?}");
        }
        NodeKind::Literal { text } => {
            let _ = write!(out, "literal {text:?}");
        }
    }
    out.push('\n');
    for edge in node.children() {
        if !edge.visible {
            continue;
        }
        pretty_into(&edge.node, edge.alias.as_deref(), depth + 1, out);
    }
}

/// A plain-data copy of a subtree for serialization (`--format json` in
/// the CLI). Built once from the live tree; not a live view.
#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NodeDump {
    Production {
        name: String,
        children: Vec<EdgeDump>,
    },
    Token {
        token_type: String,
        text: String,
    },
    Literal {
        text: String,
    },
}

#[derive(Debug, Serialize)]
pub struct EdgeDump {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    pub visible: bool,
    #[serde(flatten)]
    pub node: NodeDump,
}

impl NodeDump {
    pub fn from_node(node: &TreeNode) -> Self {
        match node.kind() {
            NodeKind::Production { name } => NodeDump::Production {
                name: name.clone(),
                children: node
                    .children()
                    .iter()
                    .map(|edge| EdgeDump {
                        alias: edge.alias.clone(),
                        visible: edge.visible,
                        node: NodeDump::from_node(&edge.node),
                    })
                    .collect(),
            },
            NodeKind::Token { token_type, text } => NodeDump::Token {
                token_type: token_type.clone(),
                text: text.clone(),
            },
            NodeKind::Literal { text } => NodeDump::Literal { text: text.clone() },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn comparison() -> TreeNode {
        let cmp = TreeNode::production("COMPARE_EXPRESSION");
        cmp.append_child(TreeNode::token("identifier", "a"), Some("left"), true)
            .unwrap();
        cmp.append_child(TreeNode::token("whitespace", " "), None, false)
            .unwrap();
        cmp.append_child(TreeNode::token("compop", "<"), None, true)
            .unwrap();
        cmp.append_child(TreeNode::token("whitespace", " "), None, false)
            .unwrap();
        cmp.append_child(TreeNode::token("identifier", "b"), Some("right"), true)
            .unwrap();
        cmp
    }

    #[test]
    fn render_source_emits_hidden_trivia() {
        assert_eq!(render_source(&comparison()), "a < b");
    }

    #[test]
    fn render_source_emits_literals_verbatim() {
        let cmp = comparison();
        let right = cmp.children()[4].node.clone();
        right
            .splice(vec![
                TreeNode::literal("("),
                TreeNode::token("identifier", "b"),
                TreeNode::literal(" + 1)"),
            ])
            .unwrap();
        assert_eq!(render_source(&cmp), "a < (b + 1)");
    }

    #[test]
    fn pretty_skips_hidden_nodes_and_shows_aliases() {
        let text = pretty(&comparison());
        assert_eq!(
            text,
            "COMPARE_EXPRESSION\n  left: identifier \"a\"\n  compop \"<\"\n  right: identifier \"b\"\n"
        );
    }

    #[test]
    fn dump_serializes_edge_metadata() {
        let json = serde_json::to_value(NodeDump::from_node(&comparison())).unwrap();
        assert_eq!(json["kind"], "production");
        assert_eq!(json["name"], "COMPARE_EXPRESSION");
        assert_eq!(json["children"][0]["alias"], "left");
        assert_eq!(json["children"][1]["visible"], false);
        assert_eq!(json["children"][2]["text"], "<");
    }
}
