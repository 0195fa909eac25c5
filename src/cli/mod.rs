//! The graft command-line interface.
//!
//! This module is the entry point for all CLI commands and orchestrates
//! the core library functions: tokenize, parse, rewrite, save.

use std::path::Path;
use std::process;

use clap::Parser;

use crate::cli::args::{Command, GraftArgs, Pass};
use crate::diagnostics::GraftError;
use crate::engine::Engine;
use crate::transforms;
use crate::tree::{pretty, render_source, NodeDump};

pub mod args;
pub mod output;

/// The main entry point for the CLI.
pub fn run() {
    let args = GraftArgs::parse();

    let result = match args.command {
        Command::Tokens { file } => handle_tokens(&file),
        Command::Ast { file, json } => handle_ast(&file, json),
        Command::Rewrite {
            file,
            passes,
            output,
        } => handle_rewrite(&file, &passes, output.as_deref()),
    };

    if let Err(e) = result {
        output::print_report(e);
        process::exit(1);
    }
}

fn handle_tokens(file: &Path) -> Result<(), GraftError> {
    let engine = Engine::minijava();
    let source = std::fs::read_to_string(file)?;
    let tokens = engine.tokenize(&file.display().to_string(), &source)?;
    for token in &tokens {
        let hidden = if token.hidden { " (hidden)" } else { "" };
        println!(
            "{:>4}..{:<4} {:<16} {:?}{}",
            token.span.start, token.span.end, token.token_type, token.text, hidden
        );
    }
    Ok(())
}

fn handle_ast(file: &Path, json: bool) -> Result<(), GraftError> {
    let root = Engine::minijava().parse_file(file)?;
    if json {
        // A fresh dump of plain data; serialization cannot fail on it.
        let dump = NodeDump::from_node(&root);
        println!(
            "{}",
            serde_json::to_string_pretty(&dump).expect("tree dump serializes")
        );
    } else {
        print!("{}", pretty(&root));
    }
    Ok(())
}

fn handle_rewrite(file: &Path, passes: &[Pass], out: Option<&Path>) -> Result<(), GraftError> {
    let engine = Engine::minijava();
    let root = engine.parse_file(file)?;

    for pass in passes {
        let rewritten = match pass {
            Pass::Yoda => transforms::normalize_comparisons(&root)?,
            Pass::Desugar => transforms::lower_comparisons(&root)?,
            Pass::Rename => transforms::camel_case_variables(&root)?,
        };
        output::print_pass_summary(pass.name(), rewritten);
    }

    match out {
        Some(path) => engine.save_to_file(&root, path)?,
        None => print!("{}", render_source(&root)),
    }
    Ok(())
}
