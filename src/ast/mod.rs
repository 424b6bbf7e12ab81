//! AST for Thrifter IDL documents
//!
//! Every node is built once, bottom-up, by the parser and owns its children.
//! Documentation is `None` when no doc comment precedes a declaration.

// ============================================================================
// IMPORTS
// ============================================================================

use serde::{Deserialize, Serialize};

pub mod types;
pub mod value;

pub use types::{BaseType, ContainerType, FieldType, FunctionType, NamespaceScope};
pub use value::{ConstMap, ConstValue};

/// Trimmed text of a `///` or `/** */` comment.
pub type Documentation = Option<String>;

// ============================================================================
// DOCUMENT & HEADERS
// ============================================================================

/// One parsed IDL file.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Document {
    pub documentation: Documentation,
    pub headers: Vec<Header>,
    pub definitions: Vec<Definition>,
}

impl Document {
    /// Identifier declared for `scope`. A later directive for the same scope
    /// overrides an earlier one.
    pub fn namespace(&self, scope: NamespaceScope) -> Option<&str> {
        self.headers.iter().rev().find_map(|header| match header {
            Header::Namespace(ns) if ns.scope == scope => Some(ns.identifier.as_str()),
            _ => None,
        })
    }

    /// Paths of all `include` directives in source order.
    pub fn includes(&self) -> impl Iterator<Item = &str> {
        self.headers.iter().filter_map(|header| match header {
            Header::Include(path) => Some(path.as_str()),
            _ => None,
        })
    }

    /// First definition declaring `name`.
    pub fn find(&self, name: &str) -> Option<&Definition> {
        self.definitions.iter().find(|d| d.identifier() == name)
    }
}

/// An include or namespace directive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Header {
    Include(String),
    CppInclude(String),
    Namespace(Namespace),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Namespace {
    pub scope: NamespaceScope,
    pub identifier: String,
}

// ============================================================================
// DEFINITIONS
// ============================================================================

/// A top-level declaration. Source order is preserved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Definition {
    Const(Const),
    Typedef(Typedef),
    Enum(Enum),
    Struct(Struct),
    Union(Union),
    Exception(Exception),
    Service(Service),
}

impl Definition {
    pub fn identifier(&self) -> &str {
        match self {
            Definition::Const(d) => &d.identifier,
            Definition::Typedef(d) => &d.identifier,
            Definition::Enum(d) => &d.identifier,
            Definition::Struct(d) => &d.identifier,
            Definition::Union(d) => &d.identifier,
            Definition::Exception(d) => &d.identifier,
            Definition::Service(d) => &d.identifier,
        }
    }

    pub fn documentation(&self) -> Option<&str> {
        let doc = match self {
            Definition::Const(d) => &d.documentation,
            Definition::Typedef(d) => &d.documentation,
            Definition::Enum(d) => &d.documentation,
            Definition::Struct(d) => &d.documentation,
            Definition::Union(d) => &d.documentation,
            Definition::Exception(d) => &d.documentation,
            Definition::Service(d) => &d.documentation,
        };
        doc.as_deref()
    }

    /// The declaring keyword.
    pub fn kind(&self) -> &'static str {
        match self {
            Definition::Const(_) => "const",
            Definition::Typedef(_) => "typedef",
            Definition::Enum(_) => "enum",
            Definition::Struct(_) => "struct",
            Definition::Union(_) => "union",
            Definition::Exception(_) => "exception",
            Definition::Service(_) => "service",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Const {
    pub documentation: Documentation,
    pub field_type: FieldType,
    pub identifier: String,
    pub value: ConstValue,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Typedef {
    pub documentation: Documentation,
    pub field_type: FieldType,
    pub identifier: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enum {
    pub documentation: Documentation,
    pub identifier: String,
    pub enumerators: Vec<Enumerator>,
}

/// An enum member. `value` stays `None` when not written; numbering
/// implicit members is left to later stages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enumerator {
    pub documentation: Documentation,
    pub identifier: String,
    pub value: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Struct {
    pub documentation: Documentation,
    pub identifier: String,
    pub fields: Vec<Field>,
}

/// Same shape as [`Struct`]; member exclusivity is not checked here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Union {
    pub documentation: Documentation,
    pub identifier: String,
    pub fields: Vec<Field>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exception {
    pub documentation: Documentation,
    pub identifier: String,
    pub fields: Vec<Field>,
}

// ============================================================================
// FIELDS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Requiredness {
    #[default]
    Required,
    Optional,
}

/// A member of a struct, union or exception, or an entry of a `throws` list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub documentation: Documentation,
    pub id: Option<i32>,
    pub requiredness: Requiredness,
    pub field_type: FieldType,
    pub identifier: String,
    pub default: Option<ConstValue>,
}

impl Field {
    pub fn is_optional(&self) -> bool {
        self.requiredness == Requiredness::Optional
    }
}

// ============================================================================
// SERVICES
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub documentation: Documentation,
    pub id: Option<i32>,
    pub field_type: FieldType,
    pub identifier: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Throws {
    pub fields: Vec<Field>,
}

/// A service method.
///
/// `oneway` is recorded as written, even alongside a non-void return type or a
/// `throws` clause.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Function {
    pub documentation: Documentation,
    pub oneway: bool,
    pub return_type: FunctionType,
    pub identifier: String,
    pub parameters: Vec<Parameter>,
    pub throws: Option<Throws>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub documentation: Documentation,
    pub identifier: String,
    pub functions: Vec<Function>,
}

impl Service {
    pub fn function(&self, name: &str) -> Option<&Function> {
        self.functions.iter().find(|f| f.identifier == name)
    }
}
