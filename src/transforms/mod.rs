//! Bundled rewrite passes over demo-grammar trees.
//!
//! Each pass queries the live tree, mutates per match, and reports how
//! many nodes it rewrote. Passes are ordinary client code of the query
//! and mutation surface; nothing here has privileged access to the tree.

use crate::parser::{LEFT, RIGHT};
use crate::selectors::{AliasSelector, TokenSelector};
use crate::tree::TreeNode;

mod desugar;
mod rename;
mod yoda;

pub use desugar::lower_comparisons;
pub use rename::camel_case_variables;
pub use yoda::normalize_comparisons;

/// The `left` operand, `compop` token, and `right` operand of a
/// comparison node, or `None` if the node is not shaped like one.
fn comparison_parts(comparison: &TreeNode) -> Option<(TreeNode, TreeNode, TreeNode)> {
    let left = comparison
        .query_immediate_children(&AliasSelector::new(LEFT))
        .first()?
        .clone();
    let compop = comparison
        .query_immediate_children(&TokenSelector::new("compop"))
        .first()?
        .clone();
    let right = comparison
        .query_immediate_children(&AliasSelector::new(RIGHT))
        .first()?
        .clone();
    Some((left, compop, right))
}

fn is_integer_literal(node: &TreeNode) -> bool {
    node.token_type() == Some("integer_literal")
}
