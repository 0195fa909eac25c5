//! Selectors over node data: kind tags, raw text, edge alias, visibility.

use crate::tree::TreeNode;

use super::Selector;

/// Matches interior nodes produced by the named grammar rule.
pub struct ProductionSelector {
    name: String,
}

impl ProductionSelector {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Selector for ProductionSelector {
    fn matches(&self, node: &TreeNode) -> bool {
        node.production_name() == Some(self.name.as_str())
    }
}

/// Matches token leaves of the named token type. Literal nodes have no
/// token type and never match.
pub struct TokenSelector {
    token_type: String,
}

impl TokenSelector {
    pub fn new(token_type: impl Into<String>) -> Self {
        Self {
            token_type: token_type.into(),
        }
    }
}

impl Selector for TokenSelector {
    fn matches(&self, node: &TreeNode) -> bool {
        node.token_type() == Some(self.token_type.as_str())
    }
}

/// Matches leaves whose raw text equals the given text exactly
/// (case-sensitive). Token and literal leaves both carry raw text.
pub struct TokenValueSelector {
    text: String,
}

impl TokenValueSelector {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl Selector for TokenValueSelector {
    fn matches(&self, node: &TreeNode) -> bool {
        node.text() == Some(self.text.as_str())
    }
}

/// Matches nodes whose parent edge carries the given alias. Position
/// dependent: the same node stops matching once moved to an unaliased
/// slot, and a detached node matches nothing.
pub struct AliasSelector {
    alias: String,
}

impl AliasSelector {
    pub fn new(alias: impl Into<String>) -> Self {
        Self {
            alias: alias.into(),
        }
    }
}

impl Selector for AliasSelector {
    fn matches(&self, node: &TreeNode) -> bool {
        node.alias().as_deref() == Some(self.alias.as_str())
    }
}

/// Matches grammar-suppressed nodes, the ones default printing skips.
/// Traversal visits hidden nodes, so this is how a query opts in to them.
pub struct HiddenSelector;

impl Selector for HiddenSelector {
    fn matches(&self, node: &TreeNode) -> bool {
        !node.is_visible()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn comparison() -> TreeNode {
        let cmp = TreeNode::production("COMPARE_EXPRESSION");
        cmp.append_child(TreeNode::token("identifier", "x"), Some("left"), true)
            .unwrap();
        cmp.append_child(TreeNode::token("whitespace", " "), None, false)
            .unwrap();
        cmp
    }

    #[test]
    fn production_selector_matches_interior_nodes_only() {
        let cmp = comparison();
        assert!(ProductionSelector::new("COMPARE_EXPRESSION").matches(&cmp));
        assert!(!ProductionSelector::new("PROGRAM").matches(&cmp));
        assert!(!ProductionSelector::new("COMPARE_EXPRESSION").matches(&cmp.children()[0].node));
    }

    #[test]
    fn token_selector_matches_type_names() {
        let leaf = comparison().children()[0].node.clone();
        assert!(TokenSelector::new("identifier").matches(&leaf));
        assert!(!TokenSelector::new("integer_literal").matches(&leaf));
    }

    #[test]
    fn token_value_selector_is_exact_and_case_sensitive() {
        let leaf = TreeNode::token("identifier", "x");
        assert!(TokenValueSelector::new("x").matches(&leaf));
        assert!(!TokenValueSelector::new("X").matches(&leaf));
        assert!(!TokenValueSelector::new("x ").matches(&leaf));
    }

    #[test]
    fn literal_nodes_match_by_value_but_not_by_tag() {
        let literal = TreeNode::literal("x");
        assert!(TokenValueSelector::new("x").matches(&literal));
        assert!(!TokenSelector::new("identifier").matches(&literal));
        assert!(!ProductionSelector::new("x").matches(&literal));
    }

    #[test]
    fn alias_selector_depends_on_the_parent_edge() {
        let cmp = comparison();
        let left = cmp.children()[0].node.clone();
        assert!(AliasSelector::new("left").matches(&left));
        assert!(!AliasSelector::new("right").matches(&left));
        assert!(!AliasSelector::new("left").matches(&cmp));

        // Detached nodes carry no alias.
        left.replace(TreeNode::literal("y")).unwrap();
        assert!(!AliasSelector::new("left").matches(&left));
    }

    #[test]
    fn hidden_selector_matches_suppressed_nodes() {
        let cmp = comparison();
        assert!(HiddenSelector.matches(&cmp.children()[1].node));
        assert!(!HiddenSelector.matches(&cmp.children()[0].node));
        assert!(!HiddenSelector.matches(&cmp));
    }
}
