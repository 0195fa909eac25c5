//! Composable node predicates for querying trees.
//!
//! Every selector is the same thing: a stateless `matches` check over one
//! node. Combinators ([`AndSelector`], [`OrSelector`], [`NotSelector`],
//! [`HasImmediateChildSelector`]) are themselves selectors holding boxed
//! sub-selectors, so anything implementing the trait (including
//! downstream types) composes uniformly with the built-ins.
//!
//! And/Or evaluate left to right and short-circuit. That ordering is part
//! of the contract: a later selector may rely on an earlier one having
//! already pinned down the node's shape.
//!
//! ```rust
//! use graft::selectors::{
//!     AliasSelector, AndSelector, HasImmediateChildSelector, ProductionSelector, Selector,
//! };
//! use graft::tree::TreeNode;
//!
//! let comparison = TreeNode::production("COMPARE_EXPRESSION");
//! comparison
//!     .append_child(TreeNode::token("identifier", "a"), Some("left"), true)
//!     .unwrap();
//!
//! let selector = AndSelector::new(vec![
//!     Box::new(ProductionSelector::new("COMPARE_EXPRESSION")),
//!     Box::new(HasImmediateChildSelector::new(AliasSelector::new("left"))),
//! ]);
//! assert!(selector.matches(&comparison));
//! ```

use crate::tree::TreeNode;

mod data;
mod logical;
mod structural;

pub use data::{
    AliasSelector, HiddenSelector, ProductionSelector, TokenSelector, TokenValueSelector,
};
pub use logical::{AndSelector, NotSelector, OrSelector};
pub use structural::HasImmediateChildSelector;

/// A predicate over tree nodes.
///
/// Selectors never mutate the tree and hold no per-query state; for a
/// fixed tree the same selector always answers the same way.
pub trait Selector {
    fn matches(&self, node: &TreeNode) -> bool;
}
