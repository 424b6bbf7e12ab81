//! Document, header and definition grammar.
//!
//! Each declaration has the shape `[documentation] KEYWORD ...`. The keyword
//! is the commit point: everything after it is parsed with `expect*`, so a
//! malformed body reports the token that is wrong instead of backing out to
//! the document level.

use crate::ast::{
    Const, Definition, Document, Documentation, Enum, Enumerator, Exception, Field, Header,
    Namespace, Struct, Typedef, Union,
};
use crate::errors::IdlError;

use super::keywords::{NAMESPACE_SCOPES, REQUIREDNESS};
use super::parser::{ParseResult, Parser};

#[derive(Debug, Clone, Copy)]
enum DefinitionKeyword {
    Const,
    Typedef,
    Enum,
    Struct,
    Union,
    Exception,
    Service,
}

/// Tried in this order.
const DEFINITION_KEYWORDS: [(&str, DefinitionKeyword); 7] = [
    ("const", DefinitionKeyword::Const),
    ("typedef", DefinitionKeyword::Typedef),
    ("enum", DefinitionKeyword::Enum),
    ("struct", DefinitionKeyword::Struct),
    ("union", DefinitionKeyword::Union),
    ("exception", DefinitionKeyword::Exception),
    ("service", DefinitionKeyword::Service),
];

// ============================================================================
// DOCUMENT & HEADERS
// ============================================================================

impl<'a> Parser<'a> {
    /// `[documentation] Header* Definition*`
    ///
    /// A leading doc comment belongs to the document only when headers follow
    /// it. Otherwise it documents the first definition.
    pub(super) fn document(&mut self) -> Result<Document, IdlError> {
        let start = self.cursor.position();
        let documentation = self.documentation();
        let headers = self.many(Self::header)?;

        if headers.is_empty() && documentation.is_some() {
            let after_doc = self.cursor.position();
            self.cursor.restore(start);
            let definitions = self.many(Self::definition)?;
            if !definitions.is_empty() {
                return Ok(Document {
                    documentation: None,
                    headers,
                    definitions,
                });
            }
            self.cursor.restore(after_doc);
        }

        let definitions = self.many(Self::definition)?;
        Ok(Document {
            documentation,
            headers,
            definitions,
        })
    }

    fn header(&mut self) -> ParseResult<Header> {
        if self.keyword("include") {
            self.trace_commit("include");
            let path = self.expect("Literal", Self::literal)?;
            return Ok(Some(Header::Include(path)));
        }
        if self.keyword("cpp_include") {
            self.trace_commit("cpp_include");
            let path = self.expect("Literal", Self::literal)?;
            return Ok(Some(Header::CppInclude(path)));
        }
        if self.keyword("namespace") {
            self.trace_commit("namespace");
            let scope = self.expect("NamespaceScope", |p| Ok(p.symbol(&NAMESPACE_SCOPES)))?;
            let identifier = self.expect_identifier()?;
            return Ok(Some(Header::Namespace(Namespace { scope, identifier })));
        }
        Ok(None)
    }
}

// ============================================================================
// DEFINITIONS
// ============================================================================

impl<'a> Parser<'a> {
    fn definition(&mut self) -> ParseResult<Definition> {
        self.attempt(|p| {
            let documentation = p.documentation();
            let Some((name, keyword)) = DEFINITION_KEYWORDS
                .into_iter()
                .find(|(name, _)| p.keyword(name))
            else {
                return Ok(None);
            };
            p.trace_commit(name);

            let definition = match keyword {
                DefinitionKeyword::Const => Definition::Const(p.const_body(documentation)?),
                DefinitionKeyword::Typedef => Definition::Typedef(p.typedef_body(documentation)?),
                DefinitionKeyword::Enum => Definition::Enum(p.enum_body(documentation)?),
                DefinitionKeyword::Struct => {
                    let (identifier, fields) = p.field_block()?;
                    Definition::Struct(Struct {
                        documentation,
                        identifier,
                        fields,
                    })
                }
                DefinitionKeyword::Union => {
                    let (identifier, fields) = p.field_block()?;
                    Definition::Union(Union {
                        documentation,
                        identifier,
                        fields,
                    })
                }
                DefinitionKeyword::Exception => {
                    let (identifier, fields) = p.field_block()?;
                    Definition::Exception(Exception {
                        documentation,
                        identifier,
                        fields,
                    })
                }
                DefinitionKeyword::Service => Definition::Service(p.service_body(documentation)?),
            };
            Ok(Some(definition))
        })
    }

    /// `FieldType Identifier = ConstValue [sep]`
    fn const_body(&mut self, documentation: Documentation) -> Result<Const, IdlError> {
        let field_type = self.expect_field_type()?;
        let identifier = self.expect_identifier()?;
        self.expect_punct(b'=')?;
        let value = self.expect_const_value()?;
        self.separator();
        Ok(Const {
            documentation,
            field_type,
            identifier,
            value,
        })
    }

    fn typedef_body(&mut self, documentation: Documentation) -> Result<Typedef, IdlError> {
        let field_type = self.expect_field_type()?;
        let identifier = self.expect_identifier()?;
        self.separator();
        Ok(Typedef {
            documentation,
            field_type,
            identifier,
        })
    }

    /// `Identifier { Enumerator* }`
    fn enum_body(&mut self, documentation: Documentation) -> Result<Enum, IdlError> {
        let identifier = self.expect_identifier()?;
        self.expect_punct(b'{')?;
        let enumerators = self.many(Self::enumerator)?;
        self.expect_punct(b'}')?;
        Ok(Enum {
            documentation,
            identifier,
            enumerators,
        })
    }

    fn enumerator(&mut self) -> ParseResult<Enumerator> {
        self.attempt(|p| {
            let documentation = p.documentation();
            let Some(identifier) = p.identifier() else {
                return Ok(None);
            };
            let value = if p.punct(b'=') {
                Some(p.expect_int32()?)
            } else {
                None
            };
            p.separator();
            Ok(Some(Enumerator {
                documentation,
                identifier,
                value,
            }))
        })
    }

    /// `Identifier { Field* }`, shared by struct, union and exception.
    fn field_block(&mut self) -> Result<(String, Vec<Field>), IdlError> {
        let identifier = self.expect_identifier()?;
        self.expect_punct(b'{')?;
        let fields = self.many(Self::field)?;
        self.expect_punct(b'}')?;
        Ok((identifier, fields))
    }
}

// ============================================================================
// FIELDS
// ============================================================================

impl<'a> Parser<'a> {
    /// `[doc] [FieldId] [Requiredness] FieldType Identifier [= ConstValue] [sep]`
    ///
    /// Commits once the field type matched.
    pub(super) fn field(&mut self) -> ParseResult<Field> {
        self.attempt(|p| {
            let documentation = p.documentation();
            let id = p.field_id()?;
            let requiredness = p.symbol(&REQUIREDNESS).unwrap_or_default();
            let Some(field_type) = p.field_type()? else {
                return Ok(None);
            };
            let identifier = p.expect_identifier()?;
            let default = if p.punct(b'=') {
                Some(p.expect_const_value()?)
            } else {
                None
            };
            p.separator();
            Ok(Some(Field {
                documentation,
                id,
                requiredness,
                field_type,
                identifier,
                default,
            }))
        })
    }

    /// `Integer :`
    pub(super) fn field_id(&mut self) -> ParseResult<i32> {
        let Some(id) = self.int32()? else {
            return Ok(None);
        };
        self.expect_punct(b':')?;
        Ok(Some(id))
    }
}
