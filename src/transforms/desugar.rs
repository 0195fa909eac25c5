//! Comparison lowering for targets that only know `<`.
//!
//! Integer comparisons rewrite as:
//!
//! ```text
//! a <  b   unchanged
//! a <= b   a < (b + 1)
//! a >  b   b < a
//! a >= b   b < (a + 1)
//! a == b   (a < (b + 1)) && (b < (a + 1))
//! ```
//!
//! The `==` case splices the whole comparison node away; the others
//! rewrite the operator and operand slots in place.

use crate::parser::COMPARE_EXPRESSION;
use crate::selectors::ProductionSelector;
use crate::tree::{TreeError, TreeNode};

use super::comparison_parts;

/// Lowers every comparison operator other than `<`. Returns the number of
/// comparisons rewritten.
pub fn lower_comparisons(root: &TreeNode) -> Result<usize, TreeError> {
    let comparisons = root.query(&ProductionSelector::new(COMPARE_EXPRESSION));
    let mut rewritten = 0;
    for comparison in &comparisons {
        let Some((left, compop, right)) = comparison_parts(comparison) else {
            continue;
        };
        match compop.text() {
            Some("<=") => {
                compop.replace(TreeNode::literal("<"))?;
                right.splice(vec![
                    TreeNode::literal("("),
                    right.deep_clone(),
                    TreeNode::literal(" + 1)"),
                ])?;
            }
            Some(">") => {
                compop.replace(TreeNode::literal("<"))?;
                left.replace(right.deep_clone())?;
                right.replace(left.deep_clone())?;
            }
            Some(">=") => {
                compop.replace(TreeNode::literal("<"))?;
                left.replace(right.deep_clone())?;
                right.splice(vec![
                    TreeNode::literal("("),
                    left.deep_clone(),
                    TreeNode::literal(" + 1)"),
                ])?;
            }
            Some("==") => {
                comparison.splice(vec![
                    TreeNode::literal("("),
                    left.deep_clone(),
                    TreeNode::literal(" < ("),
                    right.deep_clone(),
                    TreeNode::literal(" + 1)"),
                    TreeNode::literal(") && ("),
                    right.deep_clone(),
                    TreeNode::literal(" < ("),
                    left.deep_clone(),
                    TreeNode::literal(" + 1)"),
                    TreeNode::literal(")"),
                ])?;
            }
            _ => continue,
        }
        rewritten += 1;
    }
    Ok(rewritten)
}
