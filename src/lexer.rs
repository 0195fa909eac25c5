//! Regex-driven tokenizer over a [`LanguageDefinition`].
//!
//! The lexer emits every token of the input, hidden ones included, so the
//! token stream (and the tree built from it) is a lossless view of the
//! source. Matching is longest-match; equal lengths go to the earlier
//! token definition.

use miette::{Diagnostic, NamedSource, SourceSpan};
use regex::Regex;
use thiserror::Error;

use crate::language::{LanguageDefinition, LanguageError};

/// Byte range in the original source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl From<Span> for SourceSpan {
    fn from(span: Span) -> Self {
        (span.start, span.end.saturating_sub(span.start)).into()
    }
}

/// Raised when no token pattern of the active language matches.
#[derive(Debug, Error, Diagnostic)]
pub enum LexError {
    #[error("unrecognized input")]
    #[diagnostic(
        code(graft::lex),
        help("no token pattern of the active language matches here")
    )]
    UnrecognizedInput {
        #[source_code]
        src: NamedSource<String>,
        #[label("no token starts here")]
        at: SourceSpan,
    },
}

/// A lexed token: its type name, raw text, position, and visibility.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub token_type: String,
    pub text: String,
    pub span: Span,
    pub hidden: bool,
}

#[derive(Debug)]
struct Rule {
    name: String,
    regex: Regex,
    hidden: bool,
}

/// A compiled lexer for one language.
#[derive(Debug)]
pub struct Lexer {
    rules: Vec<Rule>,
}

impl Lexer {
    /// Compiles every token pattern of `language`. Patterns are anchored at
    /// the current position; a definition with a bad regex fails here.
    pub fn new(language: &LanguageDefinition) -> Result<Self, LanguageError> {
        let mut rules = Vec::with_capacity(language.tokens.len());
        for def in &language.tokens {
            let regex = Regex::new(&format!("^(?:{})", def.pattern)).map_err(|source| {
                LanguageError::InvalidPattern {
                    name: def.name.clone(),
                    source,
                }
            })?;
            rules.push(Rule {
                name: def.name.clone(),
                regex,
                hidden: def.hidden,
            });
        }
        Ok(Self { rules })
    }

    /// Tokenizes the whole input. `source_name` only labels diagnostics.
    pub fn tokenize(&self, source_name: &str, source: &str) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();
        let mut pos = 0;
        while pos < source.len() {
            let Some((rule, len)) = self.longest_match(&source[pos..]) else {
                return Err(LexError::UnrecognizedInput {
                    src: NamedSource::new(source_name, source.to_string()),
                    at: Span {
                        start: pos,
                        end: pos + 1,
                    }
                    .into(),
                });
            };
            tokens.push(Token {
                token_type: rule.name.clone(),
                text: source[pos..pos + len].to_string(),
                span: Span {
                    start: pos,
                    end: pos + len,
                },
                hidden: rule.hidden,
            });
            pos += len;
        }
        Ok(tokens)
    }

    fn longest_match(&self, rest: &str) -> Option<(&Rule, usize)> {
        let mut best: Option<(&Rule, usize)> = None;
        for rule in &self.rules {
            let Some(m) = rule.regex.find(rest) else {
                continue;
            };
            // A zero-length match would never advance the cursor.
            if m.end() == 0 {
                continue;
            }
            if best.map_or(true, |(_, len)| m.end() > len) {
                best = Some((rule, m.end()));
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language;

    fn minijava_lexer() -> Lexer {
        Lexer::new(language::minijava()).unwrap()
    }

    #[test]
    fn tokenizes_comparison_with_hidden_whitespace() {
        let tokens = minijava_lexer().tokenize("test", "5 < x;").unwrap();
        let types: Vec<&str> = tokens.iter().map(|t| t.token_type.as_str()).collect();
        assert_eq!(
            types,
            [
                "integer_literal",
                "whitespace",
                "compop",
                "whitespace",
                "identifier",
                "semicolon"
            ]
        );
        assert!(tokens[1].hidden);
        assert!(!tokens[2].hidden);
        assert_eq!(tokens[4].text, "x");
        assert_eq!(tokens[4].span, Span { start: 4, end: 5 });
    }

    #[test]
    fn longest_match_wins() {
        let tokens = minijava_lexer().tokenize("test", "a<=b").unwrap();
        assert_eq!(tokens[1].token_type, "compop");
        assert_eq!(tokens[1].text, "<=");
    }

    #[test]
    fn keyword_requires_word_boundary() {
        let tokens = minijava_lexer().tokenize("test", "letter").unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].token_type, "identifier");

        let tokens = minijava_lexer().tokenize("test", "let x").unwrap();
        assert_eq!(tokens[0].token_type, "let");
    }

    #[test]
    fn unrecognized_input_reports_position() {
        let err = minijava_lexer().tokenize("test", "a # b").unwrap_err();
        let LexError::UnrecognizedInput { at, .. } = err;
        assert_eq!(at.offset(), 2);
    }

    #[test]
    fn invalid_pattern_fails_at_compile_time() {
        let lang = LanguageDefinition::from_yaml(
            "name: broken\ntokens:\n  - name: bad\n    pattern: \"(\"\n",
        )
        .unwrap();
        let err = Lexer::new(&lang).unwrap_err();
        assert!(matches!(err, LanguageError::InvalidPattern { name, .. } if name == "bad"));
    }
}
