//! Type references used by fields, parameters, typedefs and constants.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// SCALAR TAGS
// ============================================================================

/// A built-in scalar type.
///
/// `byte` is accepted in source as a synonym for `i8` and is never produced
/// back by `Display`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BaseType {
    Bool,
    I8,
    I16,
    I32,
    I64,
    Double,
    String,
    Binary,
}

impl BaseType {
    /// Canonical keyword for this type.
    pub fn as_str(&self) -> &'static str {
        match self {
            BaseType::Bool => "bool",
            BaseType::I8 => "i8",
            BaseType::I16 => "i16",
            BaseType::I32 => "i32",
            BaseType::I64 => "i64",
            BaseType::Double => "double",
            BaseType::String => "string",
            BaseType::Binary => "binary",
        }
    }
}

impl fmt::Display for BaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Target language of a `namespace` directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NamespaceScope {
    /// Written `*` in source.
    All,
    Cpp,
    Java,
    Py,
    Perl,
    Rb,
    Cocoa,
    Csharp,
    CGlib,
    Js,
    St,
}

impl NamespaceScope {
    /// The scope token as written in source.
    pub fn as_str(&self) -> &'static str {
        match self {
            NamespaceScope::All => "*",
            NamespaceScope::Cpp => "cpp",
            NamespaceScope::Java => "java",
            NamespaceScope::Py => "py",
            NamespaceScope::Perl => "perl",
            NamespaceScope::Rb => "rb",
            NamespaceScope::Cocoa => "cocoa",
            NamespaceScope::Csharp => "csharp",
            NamespaceScope::CGlib => "c_glib",
            NamespaceScope::Js => "js",
            NamespaceScope::St => "st",
        }
    }
}

impl fmt::Display for NamespaceScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// COMPOUND TYPES
// ============================================================================

/// A container type. Elements are boxed since containers nest arbitrarily.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContainerType {
    List(Box<FieldType>),
    Set(Box<FieldType>),
    Map {
        key: Box<FieldType>,
        value: Box<FieldType>,
    },
}

impl ContainerType {
    pub fn list(element: FieldType) -> Self {
        ContainerType::List(Box::new(element))
    }

    pub fn set(element: FieldType) -> Self {
        ContainerType::Set(Box::new(element))
    }

    pub fn map(key: FieldType, value: FieldType) -> Self {
        ContainerType::Map {
            key: Box::new(key),
            value: Box::new(value),
        }
    }
}

impl fmt::Display for ContainerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContainerType::List(element) => write!(f, "list<{}>", element),
            ContainerType::Set(element) => write!(f, "set<{}>", element),
            ContainerType::Map { key, value } => write!(f, "map<{},{}>", key, value),
        }
    }
}

/// Any type usable for a field, parameter, typedef or constant.
///
/// `Identifier` names a struct, enum or typedef; it is not resolved here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldType {
    Identifier(String),
    Base(BaseType),
    Container(ContainerType),
}

impl FieldType {
    /// The referenced name, if this is a named type.
    pub fn as_identifier(&self) -> Option<&str> {
        match self {
            FieldType::Identifier(name) => Some(name),
            _ => None,
        }
    }
}

impl From<BaseType> for FieldType {
    fn from(base: BaseType) -> Self {
        FieldType::Base(base)
    }
}

impl From<ContainerType> for FieldType {
    fn from(container: ContainerType) -> Self {
        FieldType::Container(container)
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldType::Identifier(name) => f.write_str(name),
            FieldType::Base(base) => base.fmt(f),
            FieldType::Container(container) => container.fmt(f),
        }
    }
}

/// Return type of a service function.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FunctionType {
    Field(FieldType),
    Void,
}

impl FunctionType {
    pub fn is_void(&self) -> bool {
        matches!(self, FunctionType::Void)
    }
}

impl fmt::Display for FunctionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FunctionType::Field(field_type) => field_type.fmt(f),
            FunctionType::Void => f.write_str("void"),
        }
    }
}
