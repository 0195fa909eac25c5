//! Read-only queries producing materialized match sets.
//!
//! Traversal visits every node, hidden ones included; filtering on
//! visibility is a selector's job, not the traversal's. Results are
//! snapshots: mutating the tree afterwards never adds, removes, or
//! reorders the matches already taken, so a pass can iterate a result
//! while rewriting under it.

use crate::selectors::Selector;

use super::TreeNode;

/// An ordered, immutable sequence of matched nodes: document order for
/// subtree queries, child order for immediate-children queries.
#[derive(Debug, Clone)]
pub struct QueryResult {
    nodes: Vec<TreeNode>,
}

impl QueryResult {
    pub fn nodes(&self) -> &[TreeNode] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&TreeNode> {
        self.nodes.get(index)
    }

    pub fn first(&self) -> Option<&TreeNode> {
        self.nodes.first()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TreeNode> {
        self.nodes.iter()
    }
}

impl IntoIterator for QueryResult {
    type Item = TreeNode;
    type IntoIter = std::vec::IntoIter<TreeNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.into_iter()
    }
}

impl<'a> IntoIterator for &'a QueryResult {
    type Item = &'a TreeNode;
    type IntoIter = std::slice::Iter<'a, TreeNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}

impl TreeNode {
    /// Collects every node of this subtree (this node included) matching
    /// `selector`, in depth-first document order.
    pub fn query(&self, selector: &dyn Selector) -> QueryResult {
        let mut nodes = Vec::new();
        collect(self, selector, &mut nodes);
        QueryResult { nodes }
    }

    /// Evaluates `selector` against the direct children (not this node,
    /// not deeper descendants), preserving child order.
    pub fn query_immediate_children(&self, selector: &dyn Selector) -> QueryResult {
        let nodes = self
            .children()
            .into_iter()
            .filter(|edge| selector.matches(&edge.node))
            .map(|edge| edge.node)
            .collect();
        QueryResult { nodes }
    }
}

fn collect(node: &TreeNode, selector: &dyn Selector, out: &mut Vec<TreeNode>) {
    if selector.matches(node) {
        out.push(node.clone());
    }
    for edge in node.children() {
        collect(&edge.node, selector, out);
    }
}

#[cfg(test)]
mod tests {
    use crate::selectors::{HiddenSelector, Selector, TokenSelector, TokenValueSelector};
    use crate::tree::TreeNode;

    struct Anything;

    impl Selector for Anything {
        fn matches(&self, _node: &TreeNode) -> bool {
            true
        }
    }

    /// PROGRAM(COMPARE(a ws < ws b) ; ws COMPARE(c ws < ws d) ;)
    fn program() -> TreeNode {
        let program = TreeNode::production("PROGRAM");
        for (left, right) in [("a", "b"), ("c", "d")] {
            let cmp = TreeNode::production("COMPARE_EXPRESSION");
            cmp.append_child(TreeNode::token("identifier", left), Some("left"), true)
                .unwrap();
            cmp.append_child(TreeNode::token("whitespace", " "), None, false)
                .unwrap();
            cmp.append_child(TreeNode::token("compop", "<"), None, true)
                .unwrap();
            cmp.append_child(TreeNode::token("whitespace", " "), None, false)
                .unwrap();
            cmp.append_child(TreeNode::token("identifier", right), Some("right"), true)
                .unwrap();
            program.append_child(cmp, None, true).unwrap();
            program
                .append_child(TreeNode::token("semicolon", ";"), None, true)
                .unwrap();
            program
                .append_child(TreeNode::token("whitespace", "\n"), None, false)
                .unwrap();
        }
        program
    }

    #[test]
    fn query_walks_in_document_order_including_self() {
        let root = program();
        let all = root.query(&Anything);
        // 1 program + 2 * (1 comparison + 5 leaves + semicolon + newline)
        assert_eq!(all.len(), 17);
        assert!(all.first().unwrap().same_node(&root));

        let idents = root.query(&TokenSelector::new("identifier"));
        let texts: Vec<_> = idents.iter().map(|n| n.text().unwrap()).collect();
        assert_eq!(texts, ["a", "b", "c", "d"]);
    }

    #[test]
    fn query_visits_hidden_nodes() {
        let root = program();
        assert_eq!(root.query(&HiddenSelector).len(), 6);
    }

    #[test]
    fn query_is_deterministic() {
        let root = program();
        let first = root.query(&TokenSelector::new("identifier"));
        let second = root.query(&TokenSelector::new("identifier"));
        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(second.iter()) {
            assert!(a.same_node(b));
        }
    }

    #[test]
    fn immediate_children_exclude_self_and_descendants() {
        let root = program();
        // The identifiers live one level down; not visible here.
        assert!(root
            .query_immediate_children(&TokenSelector::new("identifier"))
            .is_empty());

        let comparison = root.children()[0].node.clone();
        let direct = comparison.query_immediate_children(&Anything);
        assert_eq!(direct.len(), 5);
        assert!(!direct.iter().any(|n| n.same_node(&comparison)));
    }

    #[test]
    fn results_are_snapshots() {
        let root = program();
        let before = root.query(&TokenValueSelector::new("a"));
        assert_eq!(before.len(), 1);

        before
            .first()
            .unwrap()
            .replace(TreeNode::literal("z"))
            .unwrap();

        // The snapshot still holds the detached node; the tree does not.
        assert_eq!(before.len(), 1);
        assert!(!before.first().unwrap().is_connected());
        assert!(root.query(&TokenValueSelector::new("a")).is_empty());
        assert_eq!(root.query(&TokenValueSelector::new("z")).len(), 1);
    }
}
