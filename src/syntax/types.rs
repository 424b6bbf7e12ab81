//! Type and constant-value grammar.

use crate::ast::{ConstMap, ConstValue, ContainerType, FieldType};
use crate::errors::IdlError;

use super::keywords::BASE_TYPES;
use super::parser::{ParseResult, Parser};

// ============================================================================
// TYPES
// ============================================================================

impl<'a> Parser<'a> {
    /// ContainerType | BaseType | Identifier
    pub(super) fn field_type(&mut self) -> ParseResult<FieldType> {
        if let Some(container) = self.container_type()? {
            return Ok(Some(FieldType::Container(container)));
        }
        if let Some(base) = self.symbol(&BASE_TYPES) {
            return Ok(Some(FieldType::Base(base)));
        }
        Ok(self.identifier().map(FieldType::Identifier))
    }

    pub(super) fn expect_field_type(&mut self) -> Result<FieldType, IdlError> {
        self.expect("FieldType", Self::field_type)
    }

    /// `list<T>`, `set<T>` or `map<K,V>`. Everything after the keyword is
    /// mandatory.
    fn container_type(&mut self) -> ParseResult<ContainerType> {
        if self.keyword("list") {
            let element = self.nested(|p| p.angle_bracketed(Self::expect_field_type))?;
            return Ok(Some(ContainerType::list(element)));
        }
        if self.keyword("set") {
            let element = self.nested(|p| p.angle_bracketed(Self::expect_field_type))?;
            return Ok(Some(ContainerType::set(element)));
        }
        if self.keyword("map") {
            let (key, value) = self.nested(|p| {
                p.angle_bracketed(|p| {
                    let key = p.expect_field_type()?;
                    p.expect_punct(b',')?;
                    let value = p.expect_field_type()?;
                    Ok((key, value))
                })
            })?;
            return Ok(Some(ContainerType::map(key, value)));
        }
        Ok(None)
    }

    fn angle_bracketed<T>(
        &mut self,
        inner: impl FnOnce(&mut Self) -> Result<T, IdlError>,
    ) -> Result<T, IdlError> {
        self.expect_punct(b'<')?;
        let value = inner(self)?;
        self.expect_punct(b'>')?;
        Ok(value)
    }
}

// ============================================================================
// CONSTANT VALUES
// ============================================================================

impl<'a> Parser<'a> {
    /// Identifier | Literal | Integer | Double | List | Map
    ///
    /// Integers outside the 32-bit range are read as doubles.
    pub(super) fn const_value(&mut self) -> ParseResult<ConstValue> {
        if let Some(name) = self.identifier() {
            return Ok(Some(ConstValue::Identifier(name)));
        }
        if let Some(text) = self.literal()? {
            return Ok(Some(ConstValue::Literal(text)));
        }
        if let Some(n) = self.integer() {
            return Ok(Some(ConstValue::Int(n)));
        }
        if let Some(d) = self.double() {
            return Ok(Some(ConstValue::Double(d)));
        }
        if self.punct(b'[') {
            let items = self.nested(|p| {
                let items = p.many(|p| {
                    let item = p.const_value()?;
                    if item.is_some() {
                        p.separator();
                    }
                    Ok(item)
                })?;
                p.expect_punct(b']')?;
                Ok(items)
            })?;
            return Ok(Some(ConstValue::List(items)));
        }
        if self.punct(b'{') {
            let entries = self.nested(|p| {
                let entries = p.many(Self::map_entry)?;
                p.expect_punct(b'}')?;
                Ok(entries)
            })?;
            return Ok(Some(ConstValue::Map(entries.into_iter().collect::<ConstMap>())));
        }
        Ok(None)
    }

    pub(super) fn expect_const_value(&mut self) -> Result<ConstValue, IdlError> {
        self.expect("ConstValue", Self::const_value)
    }

    /// `key : value [sep]`, committed once the key matched.
    fn map_entry(&mut self) -> ParseResult<(ConstValue, ConstValue)> {
        let Some(key) = self.const_value()? else {
            return Ok(None);
        };
        self.expect_punct(b':')?;
        let value = self.expect_const_value()?;
        self.separator();
        Ok(Some((key, value)))
    }
}
