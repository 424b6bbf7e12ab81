//! The Thrifter Command-Line Interface.
//!
//! This module is the main entry point for all CLI commands and orchestrates
//! the core library functions.

use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use miette::{miette, IntoDiagnostic, Report, WrapErr};

use crate::cli::args::{AstFormat, Command, ThrifterArgs};

pub mod args;
pub mod discovery;
pub mod output;

/// The main entry point for the CLI.
pub fn run() {
    env_logger::init();
    let args = ThrifterArgs::parse();

    let result = match args.command {
        Command::Check { paths } => handle_check(&paths),
        Command::Ast { file, format } => handle_ast(&file, format),
    };

    if let Err(report) = result {
        output::print_report(&report);
        process::exit(1);
    }
}

/// Handles the `check` subcommand. Every file is parsed even after a failure.
fn handle_check(paths: &[PathBuf]) -> miette::Result<()> {
    let files = discovery::collect_idl_files(paths)
        .into_diagnostic()
        .wrap_err("failed to collect IDL files")?;

    let mut failed = 0;
    for file in &files {
        match crate::parse(file) {
            Ok(_) => output::print_ok(file),
            Err(err) => {
                failed += 1;
                output::print_report(&Report::new(err));
            }
        }
    }

    output::print_summary(files.len(), failed);
    if failed > 0 {
        return Err(miette!("{failed} of {} files failed to parse", files.len()));
    }
    Ok(())
}

/// Handles the `ast` subcommand.
fn handle_ast(file: &Path, format: AstFormat) -> miette::Result<()> {
    let document = crate::parse(file)?;
    match format {
        AstFormat::Debug => println!("{document:#?}"),
        AstFormat::Json => {
            let json = serde_json::to_string_pretty(&document).into_diagnostic()?;
            println!("{json}");
        }
    }
    Ok(())
}
