//! Graft: a grammar-driven query and rewrite engine over lossless syntax
//! trees.
//!
//! A refactoring script loads a language, parses a source file into a
//! tree, locates nodes with composable selectors, and reshapes the tree
//! structurally (replace, splice, clone) before rendering it back to
//! source text. Hidden trivia (whitespace, comments) stays in the tree,
//! so untouched code survives a rewrite byte for byte.
//!
//! ```rust
//! use graft::selectors::ProductionSelector;
//! use graft::tree::{render_source, TreeNode};
//! use graft::Engine;
//!
//! # fn main() -> Result<(), graft::GraftError> {
//! let engine = Engine::minijava();
//! let root = engine.parse_source("example", "5 < x;")?;
//!
//! for comparison in &root.query(&ProductionSelector::new("COMPARE_EXPRESSION")) {
//!     comparison.replace(TreeNode::literal("true"))?;
//! }
//! assert_eq!(render_source(&root), "true;");
//! # Ok(())
//! # }
//! ```
//!
//! Trees are single-threaded values; see the [`tree`] module for the
//! ownership rules the mutation protocol enforces.

pub use crate::diagnostics::GraftError;
pub use crate::engine::Engine;
pub use crate::selectors::Selector;
pub use crate::tree::{NodeKind, QueryResult, TreeError, TreeNode};

pub mod cli;
pub mod diagnostics;
pub mod engine;
pub mod language;
pub mod lexer;
pub mod parser;
pub mod selectors;
pub mod transforms;
pub mod tree;
