//! Skip layer, documentation comments and primitive tokens.
//!
//! Every token rule skips whitespace and ordinary comments first and rewinds
//! to before the skipped material when it does not match.

use std::collections::HashMap;

use crate::errors::IdlError;

use super::cursor::decode;
use super::parser::{ParseResult, Parser};

fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

fn is_ident_char(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'.'
}

// ============================================================================
// SKIP LAYER
// ============================================================================

impl<'a> Parser<'a> {
    /// Consume whitespace, `//` and `#` line comments and `/* */` block
    /// comments. Documentation comments are left in place.
    pub(super) fn skip(&mut self) {
        loop {
            let before = self.cursor.position();
            self.cursor.eat_while(|b| b.is_ascii_whitespace());
            if self.at_line_doc() || self.at_block_doc() {
                return;
            }
            if self.cursor.starts_with("//") || self.cursor.starts_with("#") {
                self.skip_line();
            } else if self.cursor.starts_with("/*") {
                // An unterminated block comment stays put; the next token
                // rule fails on it.
                self.cursor.bump();
                self.cursor.bump();
                if !self.cursor.skip_past("*/") {
                    self.cursor.restore(before);
                    self.cursor.eat_while(|b| b.is_ascii_whitespace());
                    return;
                }
            }
            if self.cursor.position() == before {
                return;
            }
        }
    }

    fn skip_line(&mut self) {
        self.cursor.eat_while(|b| b != b'\n');
        self.cursor.bump();
    }

    /// `///` but not a `////` banner.
    fn at_line_doc(&self) -> bool {
        self.cursor.starts_with("///") && !self.cursor.starts_with("////")
    }

    /// `/**` but not the empty comment `/**/`.
    fn at_block_doc(&self) -> bool {
        self.cursor.starts_with("/**") && !self.cursor.starts_with("/**/")
    }
}

// ============================================================================
// DOCUMENTATION
// ============================================================================

impl<'a> Parser<'a> {
    /// Doc comments preceding a declaration, trimmed and joined by newlines.
    /// `None` when there are none.
    pub(super) fn documentation(&mut self) -> Option<String> {
        let mut parts: Vec<String> = Vec::new();
        loop {
            let start = self.cursor.position();
            self.skip();
            match self.doc_comment() {
                Some(text) => parts.push(text),
                None => {
                    self.cursor.restore(start);
                    break;
                }
            }
        }
        if parts.is_empty() {
            None
        } else {
            Some(parts.join("\n"))
        }
    }

    fn doc_comment(&mut self) -> Option<String> {
        if self.at_line_doc() {
            self.cursor.eat("///");
            let start = self.cursor.position();
            self.cursor.eat_while(|b| b != b'\n');
            let text = self.cursor.text_from(start).trim().to_string();
            self.cursor.bump();
            return Some(text);
        }
        if self.at_block_doc() {
            let before = self.cursor.position();
            self.cursor.eat("/**");
            let start = self.cursor.position();
            if !self.cursor.skip_past("*/") {
                self.cursor.restore(before);
                return None;
            }
            let body = self.cursor.slice_from(start);
            let text = decode(body.strip_suffix(b"*/").unwrap_or(body)).trim().to_string();
            return Some(text);
        }
        None
    }
}

// ============================================================================
// PRIMITIVE TOKENS
// ============================================================================

impl<'a> Parser<'a> {
    /// `[A-Za-z_][A-Za-z0-9_.]*`
    pub(super) fn identifier(&mut self) -> Option<String> {
        let start = self.cursor.position();
        self.skip();
        if !self.cursor.peek().is_some_and(is_ident_start) {
            self.cursor.restore(start);
            return None;
        }
        let from = self.cursor.position();
        self.cursor.eat_while(is_ident_char);
        Some(self.cursor.text_from(from))
    }

    /// Match an alphabetic keyword that is not the prefix of a longer word.
    pub(super) fn keyword(&mut self, keyword: &str) -> bool {
        let start = self.cursor.position();
        self.skip();
        if self.cursor.starts_with(keyword)
            && !self
                .cursor
                .peek_at(keyword.len())
                .is_some_and(is_ident_char)
        {
            self.cursor.eat(keyword);
            return true;
        }
        self.cursor.restore(start);
        false
    }

    /// Look the next word (or a lone `*`) up in a keyword table.
    pub(super) fn symbol<T: Copy>(&mut self, table: &HashMap<&'static str, T>) -> Option<T> {
        let start = self.cursor.position();
        self.skip();
        let from = self.cursor.position();
        if !self.cursor.eat("*") {
            self.cursor.eat_while(is_ident_char);
        }
        let word = std::str::from_utf8(self.cursor.slice_from(from)).ok();
        match word.and_then(|word| table.get(word)) {
            Some(tag) => Some(*tag),
            None => {
                self.cursor.restore(start);
                None
            }
        }
    }

    pub(super) fn punct(&mut self, ch: u8) -> bool {
        let start = self.cursor.position();
        self.skip();
        if self.cursor.peek() == Some(ch) {
            self.cursor.bump();
            return true;
        }
        self.cursor.restore(start);
        false
    }

    /// Optional `,` or `;` after list members.
    pub(super) fn separator(&mut self) -> bool {
        self.punct(b',') || self.punct(b';')
    }

    /// A `"…"` or `'…'` string. The closing quote is mandatory once the
    /// opening one matched.
    pub(super) fn literal(&mut self) -> ParseResult<String> {
        let start = self.cursor.position();
        self.skip();
        let quote = match self.cursor.peek() {
            Some(q @ (b'"' | b'\'')) => q,
            _ => {
                self.cursor.restore(start);
                return Ok(None);
            }
        };
        self.cursor.bump();
        let from = self.cursor.position();
        self.cursor.eat_while(|b| b != quote);
        let text = self.cursor.text_from(from);
        if self.cursor.bump() != Some(quote) {
            return Err(self.error_here(&format!("'{}'", quote as char)));
        }
        Ok(Some(text))
    }
}

// ============================================================================
// NUMBERS
// ============================================================================

impl<'a> Parser<'a> {
    /// Optionally signed decimal or `0x` hex integer in `i32` range. A number
    /// with a fraction or exponent, or one outside the range, is left for
    /// [`Parser::double`].
    pub(super) fn integer(&mut self) -> Option<i32> {
        let start = self.cursor.position();
        let value = self
            .integer_token()
            .and_then(|text| parse_integer(&text))
            .and_then(|n| i32::try_from(n).ok());
        if value.is_none() {
            self.cursor.restore(start);
        }
        value
    }

    /// A 32-bit integer. An integer token outside the `i32` range is a
    /// committed failure at the token.
    pub(super) fn int32(&mut self) -> ParseResult<i32> {
        let start = self.cursor.position();
        let Some(text) = self.integer_token() else {
            self.cursor.restore(start);
            return Ok(None);
        };
        match parse_integer(&text).and_then(|n| i32::try_from(n).ok()) {
            Some(n) => Ok(Some(n)),
            None => {
                self.cursor.restore(start);
                Err(self.error_here("Integer"))
            }
        }
    }

    pub(super) fn expect_int32(&mut self) -> Result<i32, IdlError> {
        self.expect("Integer", Self::int32)
    }

    fn integer_token(&mut self) -> Option<String> {
        self.skip();
        let from = self.cursor.position();
        if matches!(self.cursor.peek(), Some(b'+' | b'-')) {
            self.cursor.bump();
        }
        let digits = if self.cursor.starts_with("0x") || self.cursor.starts_with("0X") {
            self.cursor.bump();
            self.cursor.bump();
            self.cursor.eat_while(|b| b.is_ascii_hexdigit())
        } else {
            let n = self.cursor.eat_while(|b| b.is_ascii_digit());
            if matches!(self.cursor.peek(), Some(b'.' | b'e' | b'E')) {
                return None;
            }
            n
        };
        if digits == 0 || self.cursor.peek().is_some_and(is_ident_char) {
            return None;
        }
        Some(self.cursor.text_from(from))
    }

    /// Optionally signed floating-point number: digits with an optional
    /// fraction and exponent, or a bare fraction such as `.5`.
    pub(super) fn double(&mut self) -> Option<f64> {
        let start = self.cursor.position();
        self.skip();
        let from = self.cursor.position();
        if matches!(self.cursor.peek(), Some(b'+' | b'-')) {
            self.cursor.bump();
        }
        let mut digits = self.cursor.eat_while(|b| b.is_ascii_digit());
        if self.cursor.peek() == Some(b'.') {
            self.cursor.bump();
            digits += self.cursor.eat_while(|b| b.is_ascii_digit());
        }
        if digits > 0 && matches!(self.cursor.peek(), Some(b'e' | b'E')) {
            let mantissa_end = self.cursor.position();
            self.cursor.bump();
            if matches!(self.cursor.peek(), Some(b'+' | b'-')) {
                self.cursor.bump();
            }
            if self.cursor.eat_while(|b| b.is_ascii_digit()) == 0 {
                self.cursor.restore(mantissa_end);
            }
        }
        let value = if digits > 0 && !self.cursor.peek().is_some_and(is_ident_char) {
            std::str::from_utf8(self.cursor.slice_from(from))
                .ok()
                .and_then(|text| text.parse::<f64>().ok())
        } else {
            None
        };
        if value.is_none() {
            self.cursor.restore(start);
        }
        value
    }
}

/// Parse a token produced by `integer_token`.
fn parse_integer(text: &str) -> Option<i64> {
    let (negative, unsigned) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let magnitude = match unsigned
        .strip_prefix("0x")
        .or_else(|| unsigned.strip_prefix("0X"))
    {
        Some(hex) => u64::from_str_radix(hex, 16).ok()?,
        None => unsigned.parse::<u64>().ok()?,
    };
    let value = if negative {
        -i128::from(magnitude)
    } else {
        i128::from(magnitude)
    };
    i64::try_from(value).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::SourceContext;
    use crate::syntax::keywords::BASE_TYPES;

    fn with_parser<T>(text: impl Into<Vec<u8>>, f: impl FnOnce(&mut Parser) -> T) -> T {
        let src = SourceContext::anonymous(text);
        let mut parser = Parser::new(&src);
        f(&mut parser)
    }

    #[test]
    fn skips_all_comment_forms() {
        with_parser("  // line\n # hash\n /* block */ /**/ x", |p| {
            assert_eq!(p.identifier().as_deref(), Some("x"));
        });
    }

    #[test]
    fn line_comment_may_end_at_eof() {
        with_parser("x // trailing", |p| {
            p.identifier();
            p.skip();
            assert!(p.cursor.is_eof());
        });
    }

    #[test]
    fn unterminated_block_comment_is_not_skipped() {
        with_parser("   /* never closed", |p| {
            p.skip();
            assert!(p.cursor.starts_with("/*"));
        });
    }

    #[test]
    fn doc_comments_are_not_skipped() {
        with_parser("  /// doc\nx", |p| {
            assert!(p.identifier().is_none());
            assert_eq!(p.documentation().as_deref(), Some("doc"));
            assert_eq!(p.identifier().as_deref(), Some("x"));
        });
    }

    #[test]
    fn consecutive_doc_comments_merge() {
        with_parser("/// first\n\n// plain\n///   second  \n/** third */ x", |p| {
            assert_eq!(
                p.documentation().as_deref(),
                Some("first\nsecond\nthird")
            );
        });
    }

    #[test]
    fn banner_lines_are_plain_comments() {
        with_parser("//////////////\nx", |p| {
            assert!(p.documentation().is_none());
            assert_eq!(p.identifier().as_deref(), Some("x"));
        });
    }

    #[test]
    fn absent_documentation_is_none() {
        with_parser("   struct", |p| {
            assert!(p.documentation().is_none());
            assert_eq!(p.cursor.position().offset, 0);
        });
    }

    #[test]
    fn identifier_allows_dots_and_underscores() {
        with_parser("_foo.bar_1 rest", |p| {
            assert_eq!(p.identifier().as_deref(), Some("_foo.bar_1"));
        });
        with_parser("1abc", |p| assert!(p.identifier().is_none()));
    }

    #[test]
    fn keyword_respects_word_boundary() {
        with_parser("structure", |p| assert!(!p.keyword("struct")));
        with_parser("struct{", |p| assert!(p.keyword("struct")));
    }

    #[test]
    fn symbol_lookup_needs_whole_word() {
        with_parser("bytes", |p| assert!(p.symbol(&BASE_TYPES).is_none()));
        with_parser("byte x", |p| {
            assert_eq!(p.symbol(&BASE_TYPES), Some(crate::ast::BaseType::I8));
        });
    }

    #[test]
    fn literal_accepts_both_quote_styles() {
        with_parser(r#" "double" 'single' "#, |p| {
            assert_eq!(p.literal().unwrap().as_deref(), Some("double"));
            assert_eq!(p.literal().unwrap().as_deref(), Some("single"));
        });
    }

    #[test]
    fn unterminated_literal_fails_at_eof() {
        with_parser("\"open", |p| {
            let err = p.literal().unwrap_err();
            assert_eq!(err.to_string(), "'\"' expected: 1,6");
        });
    }

    #[test]
    fn integers_and_doubles() {
        with_parser("-42 0x1F 3.25 1e3 .5", |p| {
            assert_eq!(p.integer(), Some(-42));
            assert_eq!(p.integer(), Some(31));
            assert_eq!(p.integer(), None);
            assert_eq!(p.double(), Some(3.25));
            assert_eq!(p.integer(), None);
            assert_eq!(p.double(), Some(1000.0));
            assert_eq!(p.double(), Some(0.5));
        });
    }

    #[test]
    fn integer_is_limited_to_32_bits() {
        with_parser("2147483647 -2147483648 2147483648", |p| {
            assert_eq!(p.integer(), Some(i32::MAX));
            assert_eq!(p.integer(), Some(i32::MIN));
            assert_eq!(p.integer(), None);
            assert_eq!(p.double(), Some(2147483648.0));
        });
    }

    #[test]
    fn integer_overflow_falls_back_to_double() {
        with_parser("99999999999999999999 0x100000000", |p| {
            assert_eq!(p.integer(), None);
            assert_eq!(p.double(), Some(99999999999999999999.0));
            assert_eq!(p.integer(), None);
        });
    }

    #[test]
    fn literal_bytes_are_not_replaced() {
        with_parser(&b"\"caf\xE9\" x"[..], |p| {
            assert_eq!(p.literal().unwrap().as_deref(), Some("caf\u{e9}"));
            assert_eq!(p.identifier().as_deref(), Some("x"));
        });
        with_parser("'naïve'", |p| {
            assert_eq!(p.literal().unwrap().as_deref(), Some("naïve"));
        });
    }

    #[test]
    fn doc_comment_with_high_bytes() {
        with_parser(&b"/// r\xE9sum\xE9 \nx"[..], |p| {
            assert_eq!(p.documentation().as_deref(), Some("r\u{e9}sum\u{e9}"));
        });
    }

    #[test]
    fn int32_out_of_range_is_committed() {
        with_parser("  4294967296", |p| {
            let err = p.int32().unwrap_err();
            assert_eq!(err.to_string(), "Integer expected: 1,3");
        });
        with_parser("-2147483648", |p| {
            assert_eq!(p.int32().unwrap(), Some(i32::MIN));
        });
    }

    #[test]
    fn separators_are_interchangeable() {
        with_parser(", ; x", |p| {
            assert!(p.separator());
            assert!(p.separator());
            assert!(!p.separator());
        });
    }
}
