//! Thrifter Parser - grammar driver and committed-choice combinators
//!
//! Every rule returns a [`ParseResult`]:
//!
//! - `Ok(Some(node))`: the rule matched.
//! - `Ok(None)`: the rule did not match and consumed nothing, so the caller
//!   may try its next alternative.
//! - `Err(error)`: the rule matched its leading keyword or token and then
//!   failed. The error propagates through every enclosing rule untouched.
//!
//! The grammar itself is spread over `lexical`, `types`, `declarations` and
//! `services`, each adding rules to [`Parser`].

use crate::ast::Document;
use crate::errors::{IdlError, SourceContext};

use super::cursor::{Cursor, Position};

/// Outcome of a single grammar rule.
pub type ParseResult<T> = Result<Option<T>, IdlError>;

/// How deeply container types and constant lists or maps may nest.
pub const MAX_NESTING: usize = 128;

pub struct Parser<'a> {
    pub(super) cursor: Cursor<'a>,
    source: &'a SourceContext,
    depth: usize,
}

// ============================================================================
// PUBLIC API
// ============================================================================

impl<'a> Parser<'a> {
    pub fn new(source: &'a SourceContext) -> Self {
        Self {
            cursor: Cursor::new(&source.content),
            source,
            depth: 0,
        }
    }

    /// Parse the whole input as a document. Input left over after the last
    /// definition is an error.
    pub fn parse_document(mut self) -> Result<Document, IdlError> {
        let document = self.document()?;
        self.skip();
        if !self.cursor.is_eof() {
            let here = self.cursor.position();
            return Err(IdlError::trailing(self.source, here.offset, here.location()));
        }
        Ok(document)
    }
}

// ============================================================================
// COMBINATORS
// ============================================================================

impl<'a> Parser<'a> {
    /// Run `rule`, rewinding the cursor if it does not match.
    pub(super) fn attempt<T>(
        &mut self,
        rule: impl FnOnce(&mut Self) -> ParseResult<T>,
    ) -> ParseResult<T> {
        let start = self.cursor.position();
        let result = rule(self)?;
        if result.is_none() {
            self.cursor.restore(start);
        }
        Ok(result)
    }

    /// Run `rule` past a commit point: not matching is fatal.
    pub(super) fn expect<T>(
        &mut self,
        what: &str,
        rule: impl FnOnce(&mut Self) -> ParseResult<T>,
    ) -> Result<T, IdlError> {
        match rule(self)? {
            Some(value) => Ok(value),
            None => Err(self.error_here(what)),
        }
    }

    /// Zero or more repetitions of `rule`. Each match must consume input.
    pub(super) fn many<T>(
        &mut self,
        mut rule: impl FnMut(&mut Self) -> ParseResult<T>,
    ) -> Result<Vec<T>, IdlError> {
        let mut items = Vec::new();
        while let Some(item) = rule(self)? {
            items.push(item);
        }
        Ok(items)
    }

    /// Run `rule` one nesting level deeper. Past [`MAX_NESTING`] levels this
    /// fails at the next significant character instead of recursing.
    pub(super) fn nested<T>(
        &mut self,
        rule: impl FnOnce(&mut Self) -> Result<T, IdlError>,
    ) -> Result<T, IdlError> {
        if self.depth >= MAX_NESTING {
            self.skip();
            let here = self.cursor.position();
            log::debug!("{}: nesting limit hit at {}", self.source.name, here.location());
            return Err(IdlError::nesting_limit(
                self.source,
                MAX_NESTING,
                here.offset,
                here.location(),
            ));
        }
        self.depth += 1;
        let result = rule(self);
        self.depth -= 1;
        result
    }

    /// Mandatory single-character token.
    pub(super) fn expect_punct(&mut self, ch: u8) -> Result<(), IdlError> {
        if self.punct(ch) {
            Ok(())
        } else {
            Err(self.error_here(&format!("'{}'", ch as char)))
        }
    }

    pub(super) fn expect_identifier(&mut self) -> Result<String, IdlError> {
        self.expect("Identifier", |p| Ok(p.identifier()))
    }

    /// Committed failure at the next significant character.
    pub(super) fn error_here(&mut self, what: &str) -> IdlError {
        self.skip();
        let here = self.cursor.position();
        self.error_at(what, here)
    }

    pub(super) fn error_at(&self, what: &str, position: Position) -> IdlError {
        IdlError::expected(self.source, what, position.offset, position.location())
    }

    /// Log that a declaration committed on its keyword.
    pub(super) fn trace_commit(&self, keyword: &str) {
        log::trace!(
            "{}: committed to `{}` at {}",
            self.source.name,
            keyword,
            self.cursor.position().location()
        );
    }
}
