//! Handles all user-facing output for the CLI.
//!
//! Status lines go to stdout and are colourised only when stdout is a
//! terminal. Diagnostics go to stderr as `miette` reports.

use std::io::{self, IsTerminal, Write};
use std::path::Path;

use miette::Report;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

// ============================================================================
// STATUS LINES
// ============================================================================

/// Prints `ok <path>` for a file that parsed.
pub fn print_ok(path: &Path) {
    let mut stdout = stdout();
    let _ = stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true));
    let _ = write!(stdout, "ok");
    let _ = stdout.reset();
    let _ = writeln!(stdout, " {}", path.display());
}

/// Prints the closing `checked N files, M failed` line.
pub fn print_summary(checked: usize, failed: usize) {
    let mut stdout = stdout();
    let color = if failed == 0 { Color::Green } else { Color::Red };
    let _ = stdout.set_color(ColorSpec::new().set_fg(Some(color)));
    let _ = writeln!(stdout, "checked {checked} files, {failed} failed");
    let _ = stdout.reset();
}

// ============================================================================
// DIAGNOSTICS
// ============================================================================

/// Renders a report with source snippet and labels on stderr.
pub fn print_report(report: &Report) {
    eprintln!("{report:?}");
}

fn stdout() -> StandardStream {
    let choice = if io::stdout().is_terminal() {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    StandardStream::stdout(choice)
}
