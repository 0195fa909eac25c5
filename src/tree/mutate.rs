//! The mutation protocol: replacing one attached node with another node or
//! with a spliced sequence.
//!
//! Both operations verify connectivity before touching the tree, so a
//! failed mutation is a no-op. Failures signal logic errors in the calling
//! transformation (a double replace, or a missing `deep_clone`) and are
//! never recovered here.

use std::rc::Rc;

use thiserror::Error;

use super::{ChildEdge, TreeNode};

/// Connectivity violations raised by [`TreeNode::replace`] and
/// [`TreeNode::splice`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TreeError {
    /// The target of a replace has no parent edge: it is a root, or it
    /// was already replaced or spliced away earlier in the pass.
    #[error("cannot replace a node that has no parent edge")]
    ReplacingUnconnectedNode,

    /// The proposed replacement already occupies a parent edge somewhere;
    /// a node can hold only one position at a time.
    #[error("replacement node is already connected to a tree; deep_clone it first")]
    AddingConnectedNode,
}

impl TreeNode {
    /// Detaches this node and installs `replacement` in its edge slot,
    /// preserving the slot's alias and visibility.
    ///
    /// Afterwards this node has no parent edge; handles to it stay valid
    /// but a second `replace` on it fails with
    /// [`TreeError::ReplacingUnconnectedNode`].
    pub fn replace(&self, replacement: TreeNode) -> Result<(), TreeError> {
        let edge = self
            .parent_edge()
            .ok_or(TreeError::ReplacingUnconnectedNode)?;
        if replacement.is_connected() {
            return Err(TreeError::AddingConnectedNode);
        }

        edge.parent.inner.children.borrow_mut()[edge.index].node = replacement.clone();
        *replacement.inner.parent.borrow_mut() = Some(Rc::downgrade(&edge.parent.inner));
        *self.inner.parent.borrow_mut() = None;
        Ok(())
    }

    /// Detaches this node and splices `replacements` into its position,
    /// expanding (or, for an empty sequence, shrinking) the parent's child
    /// list. Spliced edges carry no alias and inherit the replaced slot's
    /// visibility.
    ///
    /// Every element must be detached and distinct; one node cannot fill
    /// two slots. All elements are checked before the first mutation, so a
    /// failing splice leaves the tree untouched.
    pub fn splice(&self, replacements: Vec<TreeNode>) -> Result<(), TreeError> {
        let edge = self
            .parent_edge()
            .ok_or(TreeError::ReplacingUnconnectedNode)?;
        for (i, node) in replacements.iter().enumerate() {
            if node.is_connected() {
                return Err(TreeError::AddingConnectedNode);
            }
            if replacements[..i].iter().any(|earlier| earlier.same_node(node)) {
                return Err(TreeError::AddingConnectedNode);
            }
        }

        {
            let mut children = edge.parent.inner.children.borrow_mut();
            let new_edges = replacements.iter().map(|node| ChildEdge {
                alias: None,
                visible: edge.visible,
                node: node.clone(),
            });
            children.splice(edge.index..=edge.index, new_edges);
        }
        for node in &replacements {
            *node.inner.parent.borrow_mut() = Some(Rc::downgrade(&edge.parent.inner));
        }
        *self.inner.parent.borrow_mut() = None;
        Ok(())
    }
}
