//! Unified error surface for the graft pipeline.
//!
//! Each stage (language loading, lexing, parsing, tree mutation, I/O)
//! defines its own error type next to the code that raises it; this module
//! folds them into a single [`GraftError`] so callers that drive the whole
//! pipeline handle one type. All variants implement [`miette::Diagnostic`]
//! and carry a `graft::*` code, so a failure anywhere renders as a proper
//! diagnostic report with source labels where the stage has them.

use miette::Diagnostic;
use thiserror::Error;

use crate::language::LanguageError;
use crate::lexer::LexError;
use crate::parser::ParseError;
use crate::tree::TreeError;

/// Top-level error type for the graft pipeline.
#[derive(Debug, Error, Diagnostic)]
pub enum GraftError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Language(#[from] LanguageError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Parse(#[from] ParseError),

    /// A mutation violated the tree connectivity invariants. These signal a
    /// logic error in the calling transformation and are never recovered
    /// internally.
    #[error(transparent)]
    #[diagnostic(code(graft::tree))]
    Tree(#[from] TreeError),

    #[error("io error: {0}")]
    #[diagnostic(code(graft::io))]
    Io(#[from] std::io::Error),
}
