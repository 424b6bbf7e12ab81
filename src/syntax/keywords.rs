//! Keyword symbol tables.
//!
//! Each table maps a source token to its tag. They are built once and only
//! read afterwards, so concurrent parses share them freely.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::ast::{BaseType, NamespaceScope, Requiredness};

pub static BASE_TYPES: Lazy<HashMap<&'static str, BaseType>> = Lazy::new(|| {
    HashMap::from([
        ("bool", BaseType::Bool),
        ("byte", BaseType::I8),
        ("i8", BaseType::I8),
        ("i16", BaseType::I16),
        ("i32", BaseType::I32),
        ("i64", BaseType::I64),
        ("double", BaseType::Double),
        ("string", BaseType::String),
        ("binary", BaseType::Binary),
    ])
});

pub static NAMESPACE_SCOPES: Lazy<HashMap<&'static str, NamespaceScope>> = Lazy::new(|| {
    HashMap::from([
        ("*", NamespaceScope::All),
        ("cpp", NamespaceScope::Cpp),
        ("java", NamespaceScope::Java),
        ("py", NamespaceScope::Py),
        ("perl", NamespaceScope::Perl),
        ("rb", NamespaceScope::Rb),
        ("cocoa", NamespaceScope::Cocoa),
        ("csharp", NamespaceScope::Csharp),
        ("c_glib", NamespaceScope::CGlib),
        ("js", NamespaceScope::Js),
        ("st", NamespaceScope::St),
    ])
});

pub static REQUIREDNESS: Lazy<HashMap<&'static str, Requiredness>> = Lazy::new(|| {
    HashMap::from([
        ("required", Requiredness::Required),
        ("optional", Requiredness::Optional),
    ])
});
