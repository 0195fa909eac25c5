//! Language definitions: the token vocabulary a tree is built over.
//!
//! A [`LanguageDefinition`] names every token type of a language together
//! with its regex pattern and whether it is grammar-suppressed (hidden).
//! Definitions are plain data, deserialized from YAML, so new languages can
//! be loaded at runtime without touching the engine. The bundled demo
//! language lives in `minijava.yaml` next to this module.

use miette::Diagnostic;
use once_cell::sync::Lazy;
use serde::Deserialize;
use thiserror::Error;

/// Errors raised while loading or compiling a language definition.
#[derive(Debug, Error, Diagnostic)]
pub enum LanguageError {
    #[error("malformed language definition: {0}")]
    #[diagnostic(code(graft::language))]
    Malformed(#[from] serde_yaml::Error),

    /// A token pattern failed to compile. Raised when the lexer for the
    /// language is built, not at deserialization time.
    #[error("token `{name}` has an invalid pattern")]
    #[diagnostic(
        code(graft::language),
        help("token patterns use the `regex` crate syntax")
    )]
    InvalidPattern {
        name: String,
        #[source]
        source: regex::Error,
    },
}

/// A single token type: its name, its pattern, and its visibility.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenDefinition {
    pub name: String,
    pub pattern: String,
    /// Hidden tokens (whitespace, comments) are kept in the tree so the
    /// source can be reproduced losslessly, but default traversal and
    /// printing skip them.
    #[serde(default)]
    pub hidden: bool,
}

/// The full token vocabulary of a language.
#[derive(Debug, Clone, Deserialize)]
pub struct LanguageDefinition {
    pub name: String,
    pub tokens: Vec<TokenDefinition>,
}

impl LanguageDefinition {
    /// Loads a definition from YAML text.
    pub fn from_yaml(text: &str) -> Result<Self, LanguageError> {
        Ok(serde_yaml::from_str(text)?)
    }

    /// Looks up a token definition by name.
    pub fn token(&self, name: &str) -> Option<&TokenDefinition> {
        self.tokens.iter().find(|t| t.name == name)
    }
}

/// The bundled minijava-style demo language.
pub fn minijava() -> &'static LanguageDefinition {
    static MINIJAVA: Lazy<LanguageDefinition> = Lazy::new(|| {
        LanguageDefinition::from_yaml(include_str!("minijava.yaml"))
            .expect("bundled minijava.yaml is well-formed")
    });
    &MINIJAVA
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_definition_from_yaml() {
        let lang = LanguageDefinition::from_yaml(
            "name: tiny\ntokens:\n  - name: word\n    pattern: \"[a-z]+\"\n",
        )
        .unwrap();
        assert_eq!(lang.name, "tiny");
        assert_eq!(lang.tokens.len(), 1);
        assert!(!lang.tokens[0].hidden);
    }

    #[test]
    fn rejects_malformed_yaml() {
        let err = LanguageDefinition::from_yaml("tokens: 12").unwrap_err();
        assert!(matches!(err, LanguageError::Malformed(_)));
    }

    #[test]
    fn bundled_minijava_has_expected_vocabulary() {
        let lang = minijava();
        assert_eq!(lang.name, "minijava");
        assert!(lang.token("compop").is_some());
        assert!(lang.token("whitespace").map_or(false, |t| t.hidden));
        assert!(lang.token("identifier").map_or(false, |t| !t.hidden));
    }
}
