//! Shared helpers for the integration tests.

use graft::tree::TreeNode;
use graft::Engine;

/// Parses demo-language source, panicking on invalid test input.
pub fn parse(source: &str) -> TreeNode {
    Engine::minijava()
        .parse_source("test", source)
        .expect("test source parses")
}
