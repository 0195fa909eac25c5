//! Command-line arguments and subcommands for the graft CLI, built with
//! clap's derive API.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "graft",
    version,
    about = "Query and rewrite syntax trees from the command line."
)]
pub struct GraftArgs {
    #[command(subcommand)]
    pub command: Command,
}

/// An enumeration of all available CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Dump the token stream for a source file, hidden tokens included.
    Tokens {
        /// The source file to tokenize.
        #[arg(required = true)]
        file: PathBuf,
    },
    /// Show the syntax tree for a source file.
    Ast {
        /// The source file to parse.
        #[arg(required = true)]
        file: PathBuf,
        /// Emit the tree as JSON instead of the indented view.
        #[arg(long)]
        json: bool,
    },
    /// Apply rewrite passes to a source file and print or save the result.
    Rewrite {
        /// The source file to rewrite.
        #[arg(required = true)]
        file: PathBuf,
        /// Passes to apply, in order. Repeatable.
        #[arg(long = "pass", value_enum, required = true)]
        passes: Vec<Pass>,
        /// Write the rewritten source here instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// The bundled rewrite passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Pass {
    /// Put variables before literals in comparisons.
    Yoda,
    /// Lower every comparison operator to `<`.
    Desugar,
    /// Rename snake_case variables to camelCase.
    Rename,
}

impl Pass {
    pub fn name(self) -> &'static str {
        match self {
            Pass::Yoda => "yoda",
            Pass::Desugar => "desugar",
            Pass::Rename => "rename",
        }
    }
}
