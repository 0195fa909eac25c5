//! Structural combinators: selectors over a node's surroundings rather
//! than its own data.

use crate::tree::TreeNode;

use super::Selector;

/// Matches nodes with at least one direct child matching the inner
/// selector. Only immediate children are considered, hidden ones
/// included; deeper descendants are not.
pub struct HasImmediateChildSelector {
    inner: Box<dyn Selector>,
}

impl HasImmediateChildSelector {
    pub fn new(inner: impl Selector + 'static) -> Self {
        Self {
            inner: Box::new(inner),
        }
    }
}

impl Selector for HasImmediateChildSelector {
    fn matches(&self, node: &TreeNode) -> bool {
        node.children()
            .iter()
            .any(|edge| self.inner.matches(&edge.node))
    }
}
