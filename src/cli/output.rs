//! User-facing output for the CLI: colored summaries and diagnostic
//! reports. Summaries go to stderr so stdout stays pipeable source text.

use std::io::Write;

use atty::Stream;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::diagnostics::GraftError;

fn stderr_choice() -> ColorChoice {
    if atty::is(Stream::Stderr) {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    }
}

/// One line per applied pass: its name and how many nodes it rewrote.
pub fn print_pass_summary(pass: &str, rewritten: usize) {
    let mut stderr = StandardStream::stderr(stderr_choice());
    let _ = stderr.set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true));
    let _ = write!(stderr, "{pass}");
    let _ = stderr.reset();
    let plural = if rewritten == 1 { "" } else { "s" };
    let _ = writeln!(stderr, ": {rewritten} node{plural} rewritten");
}

/// Renders a failure as a full miette diagnostic report on stderr.
pub fn print_report(error: GraftError) {
    eprintln!("{:?}", miette::Report::new(error));
}
