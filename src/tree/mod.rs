//! Lossless syntax trees and the structural mutation protocol over them.
//!
//! A tree is built once by a parser and then reshaped in place by rewrite
//! passes: nodes are detached, cloned, and reattached until the root is
//! handed back to the renderer. The one invariant everything here defends
//! is connectivity: a node occupies at most one edge slot in at most one
//! tree at any time. Mutations that would break that fail with a
//! [`TreeError`] before touching the tree.
//!
//! [`TreeNode`] is a cheap handle (`Clone` copies the handle, not the
//! node); ownership of content flows strictly downward through child
//! edges, while the parent link is a weak back-reference used only for
//! navigation and connectivity checks. A node that loses its last path to
//! a live root is simply dropped. Trees are single-threaded values: one
//! owner drives a whole rewrite pass, so there is no locking and handles
//! do not cross threads.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

mod mutate;
mod print;
mod query;

pub use mutate::TreeError;
pub use print::{pretty, render_source, EdgeDump, NodeDump};
pub use query::QueryResult;

/// What a node is: an interior grammar production, a lexed token leaf, or
/// a synthetic literal-text leaf inserted by a rewrite.
///
/// Literal nodes have no grammar provenance: they render and match by
/// their raw text, but no production or token-type predicate ever matches
/// them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Production { name: String },
    Token { token_type: String, text: String },
    Literal { text: String },
}

/// One parent→child edge: the slot metadata plus its current occupant.
///
/// The alias and visibility belong to the slot, not the occupant; a
/// replacement installed into the slot inherits both.
#[derive(Debug, Clone)]
pub struct ChildEdge {
    pub alias: Option<String>,
    pub visible: bool,
    pub node: TreeNode,
}

/// A node's connection seen from below, resolved on demand from the weak
/// parent link.
#[derive(Debug, Clone)]
pub struct ParentEdge {
    pub parent: TreeNode,
    pub index: usize,
    pub alias: Option<String>,
    pub visible: bool,
}

struct NodeData {
    kind: NodeKind,
    children: RefCell<Vec<ChildEdge>>,
    parent: RefCell<Option<Weak<NodeData>>>,
}

/// A handle to one node of a syntax tree.
///
/// `Clone` copies the handle: both copies refer to the same node identity
/// (compare with [`TreeNode::same_node`]). To place the same *content* at
/// a second position, [`TreeNode::deep_clone`] it; the connectivity
/// invariant forbids installing an already-attached node twice.
#[derive(Clone)]
pub struct TreeNode {
    inner: Rc<NodeData>,
}

impl TreeNode {
    fn with_kind(kind: NodeKind) -> Self {
        Self {
            inner: Rc::new(NodeData {
                kind,
                children: RefCell::new(Vec::new()),
                parent: RefCell::new(None),
            }),
        }
    }

    /// A new, detached interior node tagged with a production name.
    pub fn production(name: impl Into<String>) -> Self {
        Self::with_kind(NodeKind::Production { name: name.into() })
    }

    /// A new, detached token leaf.
    pub fn token(token_type: impl Into<String>, text: impl Into<String>) -> Self {
        Self::with_kind(NodeKind::Token {
            token_type: token_type.into(),
            text: text.into(),
        })
    }

    /// A new, detached literal-text leaf for rewritten output.
    pub fn literal(text: impl Into<String>) -> Self {
        Self::with_kind(NodeKind::Literal { text: text.into() })
    }

    pub fn kind(&self) -> &NodeKind {
        &self.inner.kind
    }

    /// The production name, for interior nodes.
    pub fn production_name(&self) -> Option<&str> {
        match &self.inner.kind {
            NodeKind::Production { name } => Some(name),
            _ => None,
        }
    }

    /// The token type, for token leaves. Literal nodes have none.
    pub fn token_type(&self) -> Option<&str> {
        match &self.inner.kind {
            NodeKind::Token { token_type, .. } => Some(token_type),
            _ => None,
        }
    }

    /// The raw text of a token or literal leaf.
    pub fn text(&self) -> Option<&str> {
        match &self.inner.kind {
            NodeKind::Token { text, .. } | NodeKind::Literal { text } => Some(text),
            NodeKind::Production { .. } => None,
        }
    }

    /// Whether two handles refer to the same node identity.
    pub fn same_node(&self, other: &TreeNode) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// The node's child edges in order, empty for leaves. Returns a
    /// snapshot: later mutations do not affect it.
    pub fn children(&self) -> Vec<ChildEdge> {
        self.inner.children.borrow().clone()
    }

    /// The edge connecting this node to its parent, or `None` for a root
    /// or detached node.
    pub fn parent_edge(&self) -> Option<ParentEdge> {
        let parent = TreeNode {
            inner: self.inner.parent.borrow().as_ref()?.upgrade()?,
        };
        let (index, alias, visible) = {
            let children = parent.inner.children.borrow();
            let index = children
                .iter()
                .position(|edge| Rc::ptr_eq(&edge.node.inner, &self.inner))?;
            (index, children[index].alias.clone(), children[index].visible)
        };
        Some(ParentEdge {
            parent,
            index,
            alias,
            visible,
        })
    }

    /// Whether this node currently occupies a parent edge.
    pub fn is_connected(&self) -> bool {
        self.inner
            .parent
            .borrow()
            .as_ref()
            .map_or(false, |weak| weak.upgrade().is_some())
    }

    /// Visibility comes from the owning edge; roots and detached nodes
    /// report visible.
    pub fn is_visible(&self) -> bool {
        self.parent_edge().map_or(true, |edge| edge.visible)
    }

    /// The alias on the owning edge, if any.
    pub fn alias(&self) -> Option<String> {
        self.parent_edge().and_then(|edge| edge.alias)
    }

    /// Appends a detached node as the last child. Fails with
    /// [`TreeError::AddingConnectedNode`] if `node` already occupies an
    /// edge somewhere.
    pub fn append_child(
        &self,
        node: TreeNode,
        alias: Option<&str>,
        visible: bool,
    ) -> Result<(), TreeError> {
        if node.is_connected() {
            return Err(TreeError::AddingConnectedNode);
        }
        *node.inner.parent.borrow_mut() = Some(Rc::downgrade(&self.inner));
        self.inner.children.borrow_mut().push(ChildEdge {
            alias: alias.map(str::to_string),
            visible,
            node,
        });
        Ok(())
    }

    /// A fully independent copy of this node and its whole subtree: same
    /// kinds, aliases, and visibility throughout, no shared identity with
    /// the source, and no parent edge. The clone starts detached.
    pub fn deep_clone(&self) -> TreeNode {
        let clone = TreeNode::with_kind(self.inner.kind.clone());
        for edge in self.inner.children.borrow().iter() {
            let child = edge.node.deep_clone();
            *child.inner.parent.borrow_mut() = Some(Rc::downgrade(&clone.inner));
            clone.inner.children.borrow_mut().push(ChildEdge {
                alias: edge.alias.clone(),
                visible: edge.visible,
                node: child,
            });
        }
        clone
    }
}

impl fmt::Debug for TreeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.inner.kind {
            NodeKind::Production { name } => {
                write!(f, "Production({name}, {} children)", self.inner.children.borrow().len())
            }
            NodeKind::Token { token_type, text } => write!(f, "Token({token_type}, {text:?})"),
            NodeKind::Literal { text } => write!(f, "Literal({text:?})"),
        }
    }
}
