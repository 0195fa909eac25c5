//! Tree builder for the bundled demo grammar.
//!
//! ```text
//! program     := { statement ";" }
//! statement   := declaration | comparison
//! declaration := "let" identifier "=" operand
//! comparison  := operand compop operand
//! operand     := identifier | integer_literal
//! ```
//!
//! The grammar tags comparison operands with the `left` / `right` aliases
//! and declaration names with `varName`; the comparison operator is an
//! unaliased `compop` token child. Hidden trivia is attached where it is
//! encountered: inside a statement to the statement node, between
//! statements and around terminators to the program node. The built
//! tree renders back to the input byte for byte.

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

use crate::lexer::{Span, Token};
use crate::tree::TreeNode;

/// Production names used by the demo grammar.
pub const PROGRAM: &str = "PROGRAM";
pub const COMPARE_EXPRESSION: &str = "COMPARE_EXPRESSION";
pub const VARIABLE_DECLARATION: &str = "VARIABLE_DECLARATION";

/// Edge aliases used by the demo grammar.
pub const LEFT: &str = "left";
pub const RIGHT: &str = "right";
pub const VAR_NAME: &str = "varName";

#[derive(Debug, Error, Diagnostic)]
pub enum ParseError {
    #[error("unexpected token: expected {expected}, found {found}")]
    #[diagnostic(code(graft::parse))]
    UnexpectedToken {
        expected: String,
        found: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("found {found} here")]
        at: SourceSpan,
    },

    #[error("unexpected end of input: expected {expected}")]
    #[diagnostic(code(graft::parse))]
    UnexpectedEnd {
        expected: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("input ends here")]
        at: SourceSpan,
    },
}

/// Builds a tree from the token stream of one source file.
pub fn parse(source_name: &str, source: &str, tokens: Vec<Token>) -> Result<TreeNode, ParseError> {
    let mut parser = Parser {
        tokens,
        pos: 0,
        source_name,
        source,
    };
    parser.program()
}

struct Parser<'a> {
    tokens: Vec<Token>,
    pos: usize,
    source_name: &'a str,
    source: &'a str,
}

impl Parser<'_> {
    fn program(&mut self) -> Result<TreeNode, ParseError> {
        let program = TreeNode::production(PROGRAM);
        loop {
            self.shift_hidden(&program);
            if self.at_end() {
                break;
            }
            let statement = if self.peek_is("let") {
                self.declaration()?
            } else if self.peek_is("identifier") || self.peek_is("integer_literal") {
                self.comparison()?
            } else {
                return Err(self.unexpected("a statement"));
            };
            attach(&program, statement, None, true);
            self.expect_into(&program, "semicolon", None)?;
        }
        Ok(program)
    }

    fn declaration(&mut self) -> Result<TreeNode, ParseError> {
        let declaration = TreeNode::production(VARIABLE_DECLARATION);
        self.expect_into(&declaration, "let", None)?;
        self.expect_into(&declaration, "identifier", Some(VAR_NAME))?;
        self.expect_into(&declaration, "assign", None)?;
        self.operand_into(&declaration, None)?;
        Ok(declaration)
    }

    fn comparison(&mut self) -> Result<TreeNode, ParseError> {
        let comparison = TreeNode::production(COMPARE_EXPRESSION);
        self.operand_into(&comparison, Some(LEFT))?;
        self.expect_into(&comparison, "compop", None)?;
        self.operand_into(&comparison, Some(RIGHT))?;
        Ok(comparison)
    }

    fn operand_into(&mut self, node: &TreeNode, alias: Option<&str>) -> Result<(), ParseError> {
        self.shift_hidden(node);
        if self.at_end() {
            return Err(self.unexpected_end("an identifier or integer literal"));
        }
        if !self.peek_is("identifier") && !self.peek_is("integer_literal") {
            return Err(self.unexpected("an identifier or integer literal"));
        }
        let token = self.advance();
        attach(node, TreeNode::token(&token.token_type, &token.text), alias, true);
        Ok(())
    }

    /// Drains hidden trivia into `node`, then consumes one token of the
    /// expected type as a visible child.
    fn expect_into(
        &mut self,
        node: &TreeNode,
        token_type: &str,
        alias: Option<&str>,
    ) -> Result<(), ParseError> {
        self.shift_hidden(node);
        if self.at_end() {
            return Err(self.unexpected_end(token_type));
        }
        if !self.peek_is(token_type) {
            return Err(self.unexpected(token_type));
        }
        let token = self.advance();
        attach(node, TreeNode::token(&token.token_type, &token.text), alias, true);
        Ok(())
    }

    fn shift_hidden(&mut self, node: &TreeNode) {
        while self.tokens.get(self.pos).map_or(false, |t| t.hidden) {
            let token = self.advance();
            attach(node, TreeNode::token(&token.token_type, &token.text), None, false);
        }
    }

    fn at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    fn peek_is(&self, token_type: &str) -> bool {
        self.tokens
            .get(self.pos)
            .map_or(false, |t| t.token_type == token_type)
    }

    fn advance(&mut self) -> Token {
        let token = self.tokens[self.pos].clone();
        self.pos += 1;
        token
    }

    fn unexpected(&self, expected: &str) -> ParseError {
        let token = &self.tokens[self.pos];
        ParseError::UnexpectedToken {
            expected: expected.to_string(),
            found: format!("{} `{}`", token.token_type, token.text),
            src: NamedSource::new(self.source_name, self.source.to_string()),
            at: token.span.into(),
        }
    }

    fn unexpected_end(&self, expected: &str) -> ParseError {
        let end = self.source.len();
        ParseError::UnexpectedEnd {
            expected: expected.to_string(),
            src: NamedSource::new(self.source_name, self.source.to_string()),
            at: Span { start: end, end }.into(),
        }
    }
}

fn attach(parent: &TreeNode, node: TreeNode, alias: Option<&str>, visible: bool) {
    // Nodes built here are fresh and therefore never connected.
    parent
        .append_child(node, alias, visible)
        .expect("freshly built node cannot be connected");
}
