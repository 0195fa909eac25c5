//! Yoda-condition cleanup: comparisons that put the literal first
//! (`5 < x`) are rewritten the way people read them (`x > 5`).

use crate::parser::COMPARE_EXPRESSION;
use crate::selectors::ProductionSelector;
use crate::tree::{TreeError, TreeNode};

use super::{comparison_parts, is_integer_literal};

/// Swaps the operands and flips the operator of every comparison whose
/// left side is an integer literal and whose right side is not. Returns
/// the number of comparisons rewritten.
pub fn normalize_comparisons(root: &TreeNode) -> Result<usize, TreeError> {
    let comparisons = root.query(&ProductionSelector::new(COMPARE_EXPRESSION));
    let mut rewritten = 0;
    for comparison in &comparisons {
        let Some((left, compop, right)) = comparison_parts(comparison) else {
            continue;
        };
        if !is_integer_literal(&left) || is_integer_literal(&right) {
            continue;
        }

        // Both sides must be cloned before either replace: the first
        // replace detaches the original left operand, and the second
        // still needs its content.
        left.replace(right.deep_clone())?;
        right.replace(left.deep_clone())?;

        let flipped = match compop.text() {
            Some("<") => ">",
            Some("<=") => ">=",
            Some(">") => "<",
            Some(">=") => "<=",
            // Symmetric operators survive the swap unchanged.
            Some(other) => other,
            None => continue,
        };
        compop.replace(TreeNode::literal(flipped))?;
        rewritten += 1;
    }
    Ok(rewritten)
}
