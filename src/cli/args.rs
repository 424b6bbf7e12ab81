//! Defines the command-line arguments and subcommands for the Thrifter CLI.
//!
//! This module uses the `clap` crate with its "derive" feature to create a
//! declarative and type-safe argument parsing structure.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "thrifter",
    version,
    about = "Parse and check Thrift-style interface definition files."
)]
pub struct ThrifterArgs {
    #[command(subcommand)]
    pub command: Command,
}

/// An enumeration of all available CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Parse IDL files and report the first syntax error in each.
    Check {
        /// Files to parse. Directories are searched recursively for `.thrift` files.
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },
    /// Show the Abstract Syntax Tree (AST) for an IDL file.
    Ast {
        /// The path to the IDL file to parse.
        #[arg(required = true)]
        file: PathBuf,
        /// How to print the tree.
        #[arg(long, value_enum, default_value_t = AstFormat::Debug)]
        format: AstFormat,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AstFormat {
    /// Rust debug representation.
    Debug,
    /// Pretty-printed JSON.
    Json,
}
