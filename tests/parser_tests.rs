// tests/parser_tests.rs

use thrifter::ast::{
    BaseType, ConstMap, ConstValue, ContainerType, Definition, Document, FieldType, FunctionType,
    Header, NamespaceScope, Requiredness,
};
use thrifter::{parse, parse_source, parse_str};

// A helper that parses and fails the test with the diagnostic text.
fn parse_ok(source: &str) -> Document {
    match parse_str(source) {
        Ok(document) => document,
        Err(err) => panic!("unexpected parse error: {err}"),
    }
}

fn fixture(name: &str) -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

// ---
// End-to-end scenarios
// ---

#[test]
fn test_namespace_and_struct() {
    let doc = parse_ok("namespace cpp foo.bar\nstruct S { 1: required string name }");

    assert_eq!(doc.headers.len(), 1);
    let Header::Namespace(ns) = &doc.headers[0] else {
        panic!("Expected a namespace header");
    };
    assert_eq!(ns.scope, NamespaceScope::Cpp);
    assert_eq!(ns.identifier, "foo.bar");

    assert_eq!(doc.definitions.len(), 1);
    let Definition::Struct(s) = &doc.definitions[0] else {
        panic!("Expected a struct");
    };
    assert_eq!(s.identifier, "S");
    assert_eq!(s.fields.len(), 1);
    let field = &s.fields[0];
    assert_eq!(field.id, Some(1));
    assert_eq!(field.requiredness, Requiredness::Required);
    assert_eq!(field.field_type, FieldType::Base(BaseType::String));
    assert_eq!(field.identifier, "name");
    assert_eq!(field.default, None);
}

#[test]
fn test_enum_values() {
    let doc = parse_ok("enum Color { RED = 1, GREEN, BLUE = 3 }");
    let Definition::Enum(e) = &doc.definitions[0] else {
        panic!("Expected an enum");
    };
    assert_eq!(e.identifier, "Color");
    let parsed: Vec<_> = e
        .enumerators
        .iter()
        .map(|en| (en.identifier.as_str(), en.value))
        .collect();
    assert_eq!(
        parsed,
        vec![("RED", Some(1)), ("GREEN", None), ("BLUE", Some(3))]
    );
}

#[test]
fn test_service_functions() {
    let doc = parse_ok("service Foo { void ping() oneway void fireAndForget(1: string msg) }");
    let Definition::Service(svc) = &doc.definitions[0] else {
        panic!("Expected a service");
    };
    assert_eq!(svc.identifier, "Foo");
    assert_eq!(svc.functions.len(), 2);

    let ping = &svc.functions[0];
    assert_eq!(ping.identifier, "ping");
    assert_eq!(ping.return_type, FunctionType::Void);
    assert!(!ping.oneway);
    assert!(ping.parameters.is_empty());

    let fire = &svc.functions[1];
    assert_eq!(fire.identifier, "fireAndForget");
    assert!(fire.oneway);
    assert_eq!(fire.parameters.len(), 1);
    assert_eq!(fire.parameters[0].id, Some(1));
    assert_eq!(
        fire.parameters[0].field_type,
        FieldType::Base(BaseType::String)
    );
    assert_eq!(fire.parameters[0].identifier, "msg");
}

#[test]
fn test_const_map() {
    let doc = parse_ok(r#"const map<string,i32> M = {"a": 1, "b": 2}"#);
    let Definition::Const(c) = &doc.definitions[0] else {
        panic!("Expected a const");
    };
    assert_eq!(c.identifier, "M");
    assert_eq!(
        c.field_type,
        FieldType::Container(ContainerType::map(
            BaseType::String.into(),
            BaseType::I32.into()
        ))
    );

    let expected: ConstMap = [
        (ConstValue::Literal("b".into()), ConstValue::Int(2)),
        (ConstValue::Literal("a".into()), ConstValue::Int(1)),
    ]
    .into_iter()
    .collect();
    assert_eq!(c.value, ConstValue::Map(expected));
}

// ---
// Grammar properties
// ---

#[test]
fn test_definitions_keep_source_order() {
    let doc = parse_ok(
        "exception E {}\n\
         struct B {}\n\
         const i32 X = 1\n\
         union U {}\n\
         typedef i64 T\n\
         service S {}\n\
         enum A {}",
    );
    let kinds: Vec<_> = doc
        .definitions
        .iter()
        .map(|d| (d.kind(), d.identifier()))
        .collect();
    assert_eq!(
        kinds,
        vec![
            ("exception", "E"),
            ("struct", "B"),
            ("const", "X"),
            ("union", "U"),
            ("typedef", "T"),
            ("service", "S"),
            ("enum", "A"),
        ]
    );
}

#[test]
fn test_documentation_attachment() {
    let doc = parse_ok(
        "namespace py p\n\
         struct Plain {}\n\
         /// one line\n\
         \n\
         \n\
         struct Line {}\n\
         /**   block   */\n\
         struct Block {}",
    );
    assert_eq!(doc.find("Plain").unwrap().documentation(), None);
    assert_eq!(doc.find("Line").unwrap().documentation(), Some("one line"));
    assert_eq!(doc.find("Block").unwrap().documentation(), Some("block"));
}

#[test]
fn test_nested_container_types() {
    let doc = parse_ok("typedef map<string,list<i32>> Index");
    let Definition::Typedef(t) = &doc.definitions[0] else {
        panic!("Expected a typedef");
    };
    let FieldType::Container(ContainerType::Map { key, value }) = &t.field_type else {
        panic!("Expected a map type");
    };
    assert_eq!(**key, FieldType::Base(BaseType::String));
    assert_eq!(
        **value,
        FieldType::Container(ContainerType::list(BaseType::I32.into()))
    );
    assert_eq!(t.field_type.to_string(), "map<string,list<i32>>");
}

#[test]
fn test_namespace_star_scope() {
    let doc = parse_ok("namespace * everything\nnamespace java com.example");
    assert_eq!(doc.namespace(NamespaceScope::All), Some("everything"));
    assert_eq!(doc.namespace(NamespaceScope::Java), Some("com.example"));
    assert_eq!(doc.namespace(NamespaceScope::Py), None);
}

#[test]
fn test_default_requiredness_is_required() {
    let implicit = parse_ok("struct S { 1: string a }");
    let explicit = parse_ok("struct S { 1: required string a }");
    assert_eq!(implicit, explicit);

    let optional = parse_ok("struct S { 1: optional string a }");
    let Definition::Struct(s) = &optional.definitions[0] else {
        panic!("Expected a struct");
    };
    assert!(s.fields[0].is_optional());
}

#[test]
fn test_comments_everywhere() {
    let doc = parse_ok(
        "# hash\n\
         struct /* c */ S // trailing\n\
         { /* c */ 1 /* c */ : /* c */ i32 /* c */ x /* c */ }\n\
         // end",
    );
    assert_eq!(doc.definitions.len(), 1);
}

#[test]
fn test_empty_input() {
    let doc = parse_ok("  \n// nothing here\n");
    assert_eq!(doc, Document::default());
}

#[test]
fn test_const_integers_are_32_bit() {
    let doc = parse_ok(
        "const i32 MAX = 2147483647\n\
         const i32 MIN = -2147483648\n\
         const i64 BIG = 3000000000",
    );
    let values: Vec<_> = doc
        .definitions
        .iter()
        .map(|d| match d {
            Definition::Const(c) => c.value.clone(),
            other => panic!("Expected a const, got {other:?}"),
        })
        .collect();
    assert_eq!(
        values,
        vec![
            ConstValue::Int(i32::MAX),
            ConstValue::Int(i32::MIN),
            ConstValue::Double(3000000000.0),
        ]
    );
}

#[test]
fn test_latin1_literal_is_kept_byte_for_byte() {
    let doc = parse_source(&b"const string S = \"caf\xE9\"\n"[..], "menu.thrift").unwrap();
    let Definition::Const(c) = &doc.definitions[0] else {
        panic!("Expected a const");
    };
    assert_eq!(c.value, ConstValue::Literal("caf\u{e9}".into()));
}

// ---
// Files
// ---

#[test]
fn test_parse_tutorial_fixture() {
    let doc = parse(fixture("valid/tutorial.thrift")).unwrap();

    assert_eq!(doc.includes().collect::<Vec<_>>(), vec!["shared.thrift"]);
    assert_eq!(doc.headers[1], Header::CppInclude("<map>".into()));
    assert_eq!(doc.namespace(NamespaceScope::CGlib), Some("Tutorial"));
    assert_eq!(doc.documentation, None);
    assert_eq!(doc.definitions.len(), 10);

    let Some(Definition::Enum(op)) = doc.find("Operation") else {
        panic!("Expected the Operation enum");
    };
    assert_eq!(
        op.documentation.as_deref(),
        Some("Arithmetic operations understood by the calculator.")
    );
    assert_eq!(op.enumerators[2].documentation.as_deref(), Some("Multiplication"));
    assert_eq!(op.enumerators[3].value, Some(4));

    let Some(Definition::Const(ratio)) = doc.find("RATIO") else {
        panic!("Expected the RATIO const");
    };
    assert_eq!(ratio.value, ConstValue::Double(1.25));

    let Some(Definition::Service(calc)) = doc.find("Calculator") else {
        panic!("Expected the Calculator service");
    };
    assert_eq!(calc.documentation, None);
    assert_eq!(calc.functions.len(), 5);
    assert_eq!(
        calc.function("ping").unwrap().documentation.as_deref(),
        Some("Liveness check.")
    );
    let throws = calc.function("calculate").unwrap().throws.as_ref().unwrap();
    assert_eq!(throws.fields[0].identifier, "ouch");
    assert!(calc.function("zip").unwrap().oneway);
    assert_eq!(
        calc.function("history").unwrap().return_type.to_string(),
        "map<string,list<Work>>"
    );
}

#[test]
fn test_parse_shared_fixture_document_doc() {
    let doc = parse(fixture("valid/shared.thrift")).unwrap();
    let documentation = doc.documentation.as_deref().unwrap();
    assert!(documentation.contains("Types shared by every service"));
    assert_eq!(
        doc.find("SharedStruct").unwrap().documentation(),
        Some("A key/value pair as stored by the shared service.")
    );
    assert_eq!(doc.headers.len(), 3);
}

#[test]
fn test_parse_source_names_diagnostics() {
    let err = parse_source("struct {", "inline.thrift").unwrap_err();
    assert_eq!(err.to_string(), "Identifier expected: 1,8");
    let report = format!("{:?}", miette::Report::new(err));
    assert!(report.contains("inline.thrift"));
}

#[test]
fn test_parse_str_uses_anonymous_name() {
    let err = parse_str("struct {").unwrap_err();
    let report = format!("{:?}", miette::Report::new(err));
    assert!(report.contains("<input>"));
}
