//! Service and function grammar.

use crate::ast::{Documentation, Function, FunctionType, Parameter, Service, Throws};
use crate::errors::IdlError;

use super::parser::{ParseResult, Parser};

impl<'a> Parser<'a> {
    /// `Identifier { Function* }`, after the `service` keyword.
    pub(super) fn service_body(&mut self, documentation: Documentation) -> Result<Service, IdlError> {
        let identifier = self.expect_identifier()?;
        self.expect_punct(b'{')?;
        let functions = self.many(Self::function)?;
        self.expect_punct(b'}')?;
        Ok(Service {
            documentation,
            identifier,
            functions,
        })
    }

    /// `[doc] [oneway] FunctionType Identifier ( Parameter* ) [Throws] [sep]`
    ///
    /// Commits after the return type, or after `oneway` when present.
    fn function(&mut self) -> ParseResult<Function> {
        self.attempt(|p| {
            let documentation = p.documentation();
            let oneway = p.keyword("oneway");
            let return_type = if oneway {
                p.trace_commit("oneway");
                p.expect("FunctionType", Self::function_type)?
            } else {
                match p.function_type()? {
                    Some(return_type) => return_type,
                    None => return Ok(None),
                }
            };
            let identifier = p.expect_identifier()?;
            p.expect_punct(b'(')?;
            let parameters = p.many(Self::parameter)?;
            p.expect_punct(b')')?;
            let throws = p.throws()?;
            p.separator();
            Ok(Some(Function {
                documentation,
                oneway,
                return_type,
                identifier,
                parameters,
                throws,
            }))
        })
    }

    fn function_type(&mut self) -> ParseResult<FunctionType> {
        if self.keyword("void") {
            return Ok(Some(FunctionType::Void));
        }
        Ok(self.field_type()?.map(FunctionType::Field))
    }

    /// `[doc] [FieldId] FieldType Identifier [sep]`
    fn parameter(&mut self) -> ParseResult<Parameter> {
        self.attempt(|p| {
            let documentation = p.documentation();
            let id = p.field_id()?;
            let Some(field_type) = p.field_type()? else {
                return Ok(None);
            };
            let identifier = p.expect_identifier()?;
            p.separator();
            Ok(Some(Parameter {
                documentation,
                id,
                field_type,
                identifier,
            }))
        })
    }

    /// `throws ( Field* )`
    fn throws(&mut self) -> ParseResult<Throws> {
        if !self.keyword("throws") {
            return Ok(None);
        }
        self.expect_punct(b'(')?;
        let fields = self.many(Self::field)?;
        self.expect_punct(b')')?;
        Ok(Some(Throws { fields }))
    }
}
