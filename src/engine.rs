//! Pipeline facade: bundle a language with its compiled lexer, turn
//! sources into trees, and write rewritten trees back out.

use std::fs;
use std::path::Path;

use crate::diagnostics::GraftError;
use crate::language::{self, LanguageDefinition};
use crate::lexer::{Lexer, Token};
use crate::parser;
use crate::tree::{render_source, TreeNode};

/// An engine for one language: lex, parse, rewrite, save.
pub struct Engine {
    language: LanguageDefinition,
    lexer: Lexer,
}

impl Engine {
    /// Compiles the language's token patterns; fails if any is invalid.
    pub fn new(language: LanguageDefinition) -> Result<Self, GraftError> {
        let lexer = Lexer::new(&language)?;
        Ok(Self { language, lexer })
    }

    /// Engine for the bundled demo language.
    pub fn minijava() -> Self {
        // The bundled definition is exercised by the test suite.
        Self::new(language::minijava().clone()).expect("bundled minijava definition compiles")
    }

    pub fn language(&self) -> &LanguageDefinition {
        &self.language
    }

    /// The raw token stream for a source, hidden tokens included.
    pub fn tokenize(&self, source_name: &str, source: &str) -> Result<Vec<Token>, GraftError> {
        Ok(self.lexer.tokenize(source_name, source)?)
    }

    /// Parses source text into a tree. `source_name` labels diagnostics.
    pub fn parse_source(&self, source_name: &str, source: &str) -> Result<TreeNode, GraftError> {
        let tokens = self.lexer.tokenize(source_name, source)?;
        Ok(parser::parse(source_name, source, tokens)?)
    }

    pub fn parse_file(&self, path: &Path) -> Result<TreeNode, GraftError> {
        let source = fs::read_to_string(path)?;
        self.parse_source(&path.display().to_string(), &source)
    }

    /// Renders the (possibly rewritten) tree to source text and writes it.
    pub fn save_to_file(&self, root: &TreeNode, path: &Path) -> Result<(), GraftError> {
        fs::write(path, render_source(root))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_render_round_trip() {
        let engine = Engine::minijava();
        let source = "let counter_max = 10;\ncounter_max >= 3;\n";
        let root = engine.parse_source("test", source).unwrap();
        assert_eq!(render_source(&root), source);
    }

    #[test]
    fn lex_failures_surface_as_graft_errors() {
        let engine = Engine::minijava();
        let err = engine.parse_source("test", "a ? b;").unwrap_err();
        assert!(matches!(err, GraftError::Lex(_)));
    }

    #[test]
    fn parse_failures_surface_as_graft_errors() {
        let engine = Engine::minijava();
        let err = engine.parse_source("test", "let let = 1;").unwrap_err();
        assert!(matches!(err, GraftError::Parse(_)));
    }
}
