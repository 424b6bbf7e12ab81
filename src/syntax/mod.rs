//! Thrifter syntax: from IDL text to [`Document`].
//!
//! The parser is scannerless. Whitespace and comments are skipped in front of
//! every token, and each grammar rule lives next to the rules it shares shape
//! with:
//!
//! - `lexical`: skip layer, documentation comments, primitive tokens
//! - `types`: field types and constant values
//! - `declarations`: document, headers, definitions, fields
//! - `services`: services, functions, parameters, `throws`

use std::fs;
use std::path::Path;

use crate::ast::Document;
use crate::errors::{IdlError, SourceContext};

pub mod cursor;
pub mod keywords;
pub mod parser;

mod declarations;
mod lexical;
mod services;
mod types;

pub use parser::{ParseResult, Parser, MAX_NESTING};

// ============================================================================
// PUBLIC API
// ============================================================================

/// Read and parse an IDL file.
///
/// The file is read whole and parsed as bytes, so line and column numbers in
/// diagnostics match the file on disk whatever its encoding.
pub fn parse(path: impl AsRef<Path>) -> Result<Document, IdlError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|e| IdlError::io(path, e))?;
    let source = SourceContext::from_file(path.display().to_string(), bytes);
    log::debug!("parsing {} ({} bytes)", source.name, source.content.len());
    Parser::new(&source).parse_document()
}

/// Parse in-memory IDL input. `name` labels it in diagnostics.
pub fn parse_source(text: impl AsRef<[u8]>, name: impl Into<String>) -> Result<Document, IdlError> {
    let source = SourceContext::from_file(name, text.as_ref());
    Parser::new(&source).parse_document()
}

/// Parse in-memory IDL text; diagnostics name it `<input>`.
pub fn parse_str(text: &str) -> Result<Document, IdlError> {
    let source = SourceContext::anonymous(text);
    Parser::new(&source).parse_document()
}
