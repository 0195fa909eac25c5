//! Variable renaming: snake_case names become camelCase.
//!
//! The grammar already marks every variable name with the `varName`
//! alias, so the pass is a query plus a literal-node replace per hit; no
//! symbol table is involved.

use unicode_segmentation::UnicodeSegmentation;

use crate::parser::VAR_NAME;
use crate::selectors::AliasSelector;
use crate::tree::{TreeError, TreeNode};

/// Replaces every `varName`-aliased token whose text changes under
/// camel-casing. The replacement is a literal node and carries no token
/// type. Returns the number of names rewritten.
pub fn camel_case_variables(root: &TreeNode) -> Result<usize, TreeError> {
    let names = root.query(&AliasSelector::new(VAR_NAME));
    let mut rewritten = 0;
    for node in &names {
        // The demo grammar puts varName only on token leaves, but queries
        // can surface mixed node kinds; skip anything without text.
        let Some(text) = node.text() else {
            continue;
        };
        let camel = to_camel_case(text);
        if camel == text {
            continue;
        }
        node.replace(TreeNode::literal(camel))?;
        rewritten += 1;
    }
    Ok(rewritten)
}

fn to_camel_case(name: &str) -> String {
    let mut parts = name.split('_').filter(|part| !part.is_empty());
    let Some(first) = parts.next() else {
        return name.to_string();
    };
    let mut out = String::from(first);
    for part in parts {
        let mut graphemes = part.graphemes(true);
        if let Some(head) = graphemes.next() {
            out.extend(head.chars().flat_map(char::to_uppercase));
            out.push_str(graphemes.as_str());
        }
    }
    out
}
