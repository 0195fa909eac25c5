//! Logical combinators. Evaluation is left to right with short-circuiting;
//! callers order sub-selectors so that shape checks come before selectors
//! that assume the shape.

use crate::tree::TreeNode;

use super::Selector;

/// Matches when every sub-selector matches. Stops at the first failure.
pub struct AndSelector {
    selectors: Vec<Box<dyn Selector>>,
}

impl AndSelector {
    pub fn new(selectors: Vec<Box<dyn Selector>>) -> Self {
        Self { selectors }
    }
}

impl Selector for AndSelector {
    fn matches(&self, node: &TreeNode) -> bool {
        self.selectors.iter().all(|s| s.matches(node))
    }
}

/// Matches when at least one sub-selector matches. Stops at the first hit.
pub struct OrSelector {
    selectors: Vec<Box<dyn Selector>>,
}

impl OrSelector {
    pub fn new(selectors: Vec<Box<dyn Selector>>) -> Self {
        Self { selectors }
    }
}

impl Selector for OrSelector {
    fn matches(&self, node: &TreeNode) -> bool {
        self.selectors.iter().any(|s| s.matches(node))
    }
}

/// Inverts a selector.
pub struct NotSelector {
    inner: Box<dyn Selector>,
}

impl NotSelector {
    pub fn new(inner: impl Selector + 'static) -> Self {
        Self {
            inner: Box::new(inner),
        }
    }
}

impl Selector for NotSelector {
    fn matches(&self, node: &TreeNode) -> bool {
        !self.inner.matches(node)
    }
}
