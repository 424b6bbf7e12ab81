//! Thrifter error handling
//!
//! One error type covers the whole front end. Syntax errors carry the source
//! they were raised against so `miette` can render a labelled snippet, while
//! their `Display` form stays the terse `"<what> expected: <line>,<column>"`.

use std::fmt;
use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// SOURCE CONTEXT - Error reporting infrastructure
// ============================================================================

/// Names a piece of IDL input for diagnostics. The content is kept as raw
/// bytes; nothing is decoded before parsing.
#[derive(Debug, Clone)]
pub struct SourceContext {
    pub name: String,
    pub content: Vec<u8>,
}

impl SourceContext {
    /// Create a source context from real file content.
    pub fn from_file(name: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    /// Context for text that does not come from a file.
    pub fn anonymous(content: impl Into<Vec<u8>>) -> Self {
        Self::from_file("<input>", content)
    }

    /// Convert to NamedSource for use with miette error reporting.
    ///
    /// Input that is not UTF-8 is shown with every non-ASCII byte as `?`, so
    /// byte offsets in labels still point at the right character.
    pub fn to_named_source(&self) -> NamedSource<String> {
        let text = match std::str::from_utf8(&self.content) {
            Ok(text) => text.to_string(),
            Err(_) => self
                .content
                .iter()
                .map(|&b| if b.is_ascii() { char::from(b) } else { '?' })
                .collect(),
        };
        NamedSource::new(self.name.clone(), text)
    }
}

// ============================================================================
// LOCATIONS
// ============================================================================

/// A 1-based line/column pair. Columns count bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Location {
    pub line: usize,
    pub column: usize,
}

impl Location {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.line, self.column)
    }
}

// ============================================================================
// ERROR TYPE
// ============================================================================

/// Every way parsing a document can fail.
#[derive(Debug, Error, Diagnostic)]
pub enum IdlError {
    /// The input file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    #[diagnostic(code(thrifter::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A rule that had already committed on its leading token could not
    /// match a mandatory continuation.
    #[error("{expected} expected: {location}")]
    #[diagnostic(code(thrifter::expected))]
    Expected {
        expected: String,
        location: Location,
        #[source_code]
        src: NamedSource<String>,
        #[label("expected {expected}")]
        span: SourceSpan,
    },

    /// The document grammar matched, but input remains.
    #[error("Parsing failed: {location}")]
    #[diagnostic(
        code(thrifter::trailing),
        help("only headers followed by definitions may appear at the top level")
    )]
    Trailing {
        location: Location,
        #[source_code]
        src: NamedSource<String>,
        #[label("not a header or definition")]
        span: SourceSpan,
    },

    /// Containers or constant values nested deeper than the parser allows.
    #[error("Nesting deeper than {limit} levels: {location}")]
    #[diagnostic(
        code(thrifter::nesting),
        help("flatten the type or value, for example with a typedef")
    )]
    NestingLimit {
        limit: usize,
        location: Location,
        #[source_code]
        src: NamedSource<String>,
        #[label("nesting limit reached here")]
        span: SourceSpan,
    },
}

impl IdlError {
    pub fn expected(
        source: &SourceContext,
        expected: impl Into<String>,
        offset: usize,
        location: Location,
    ) -> Self {
        IdlError::Expected {
            expected: expected.into(),
            location,
            src: source.to_named_source(),
            span: point_span(source, offset),
        }
    }

    pub fn trailing(source: &SourceContext, offset: usize, location: Location) -> Self {
        IdlError::Trailing {
            location,
            src: source.to_named_source(),
            span: point_span(source, offset),
        }
    }

    pub fn nesting_limit(
        source: &SourceContext,
        limit: usize,
        offset: usize,
        location: Location,
    ) -> Self {
        IdlError::NestingLimit {
            limit,
            location,
            src: source.to_named_source(),
            span: point_span(source, offset),
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        IdlError::Io {
            path: path.into(),
            source,
        }
    }

    /// Where a syntax error was detected; `None` for I/O errors.
    pub fn location(&self) -> Option<Location> {
        match self {
            IdlError::Expected { location, .. }
            | IdlError::Trailing { location, .. }
            | IdlError::NestingLimit { location, .. } => Some(*location),
            IdlError::Io { .. } => None,
        }
    }

    /// Name of the expected token or rule for committed failures.
    pub fn expected_name(&self) -> Option<&str> {
        match self {
            IdlError::Expected { expected, .. } => Some(expected),
            _ => None,
        }
    }

    pub fn is_syntax(&self) -> bool {
        !matches!(self, IdlError::Io { .. })
    }
}

/// One-byte label at `offset`, or an empty one at end of input.
fn point_span(source: &SourceContext, offset: usize) -> SourceSpan {
    let len = usize::from(offset < source.content.len());
    SourceSpan::from((offset, len))
}
