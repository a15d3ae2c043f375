//! Integration tests for ALTER CATALOG statements
//!
//! Covers operand introspection, reset-key extraction, unparsing and
//! round-tripping through the parser using only the public API.

#[path = "testutils/mod.rs"]
mod testutils;

use ddlite::ast::{
    AlterCatalogKind, AlterCatalogReset, AstError, Literal, LiteralKind, LiteralValue, NodeList,
    NodeRef, Span,
};
use ddlite::{parse_statement, validate_statement, AlterCatalogStatement, Unparse, UnparseConfig};
use std::collections::HashSet;
use testutils::{ident, reset_statement, round_trip, string_keys, RecordingWriter};

fn set_of(keys: &[&str]) -> HashSet<String> {
    keys.iter().map(|k| k.to_string()).collect()
}

fn as_reset(statement: &AlterCatalogStatement) -> &AlterCatalogReset {
    match statement {
        AlterCatalogStatement::Reset(reset) => reset,
        other => panic!("Expected RESET statement, got {:?}", other.kind()),
    }
}

#[test]
fn test_my_catalog_scenario() {
    let statement = reset_statement("myCatalog", &["comment", "owner"]);
    let reset = as_reset(&statement);

    assert_eq!(reset.reset_keys().unwrap(), set_of(&["comment", "owner"]));
    assert_eq!(
        RecordingWriter::record(&statement),
        vec!["ALTER", "CATALOG", "myCatalog", "RESET", "(", "'comment'", "'owner'", ")"]
    );
}

#[test]
fn test_operand_list_is_name_then_keys() {
    for keys in [&[][..], &["a"][..], &["a", "b", "c"][..]] {
        let statement = reset_statement("db.cat", keys);
        let reset = as_reset(&statement);
        let operands = statement.operand_list();

        assert_eq!(operands.len(), 2);
        match operands[0] {
            NodeRef::Identifier(id) => assert!(std::ptr::eq(id, reset.catalog_name())),
            other => panic!("Expected identifier operand, got {}", other.node_name()),
        }
        match operands[1] {
            NodeRef::LiteralList(list) => {
                assert!(std::ptr::eq(list, reset.property_list()));
                assert_eq!(list.len(), keys.len());
            }
            other => panic!("Expected literal list operand, got {}", other.node_name()),
        }
    }
}

#[test]
fn test_duplicate_keys_collapse() {
    let statement = reset_statement("c", &["a", "b", "a"]);
    let keys = as_reset(&statement).reset_keys().unwrap();
    assert_eq!(keys.len(), 2);
    assert_eq!(keys, set_of(&["b", "a"]));
}

#[test]
fn test_empty_key_list() {
    let statement = reset_statement("c", &[]);
    assert!(as_reset(&statement).reset_keys().unwrap().is_empty());
    assert_eq!(statement.to_string(), "ALTER CATALOG c RESET ()");

    let reparsed = round_trip(&statement);
    assert_eq!(reparsed, statement);
}

#[test]
fn test_round_trip_preserves_keys_and_name() {
    let cases: &[(&str, &[&str])] = &[
        ("myCatalog", &["comment", "owner"]),
        ("db.my cat", &["it's", "a.b"]),
        ("c", &["x", "x", "y"]),
        ("reset", &["set"]),
    ];

    for (name, keys) in cases {
        let statement = reset_statement(name, keys);
        let reparsed = round_trip(&statement);

        assert_eq!(reparsed.catalog_name(), statement.catalog_name());
        assert_eq!(
            as_reset(&reparsed).reset_keys().unwrap(),
            as_reset(&statement).reset_keys().unwrap()
        );
        assert_eq!(
            RecordingWriter::record(&reparsed),
            RecordingWriter::record(&statement)
        );
    }
}

#[test]
fn test_type_violation_is_lazy() {
    let keys = NodeList::new(
        vec![
            Literal::string("comment", Span::default()),
            Literal::new(LiteralValue::Integer(7), Span::default()),
        ],
        Span::default(),
    );
    let reset = AlterCatalogReset::new(Span::default(), ident("c"), keys);

    assert_eq!(reset.operand_list().len(), 2);
    assert_eq!(
        reset.reset_keys().unwrap_err(),
        AstError::TypeMismatch {
            expected: LiteralKind::CharString,
            actual: LiteralKind::Integer,
        }
    );
}

#[test]
fn test_missing_key_list_is_rejected() {
    let err = AlterCatalogReset::try_from_parts(Span::default(), Some(ident("c")), None)
        .unwrap_err();
    assert_eq!(err, AstError::NullArgument("property_key_list"));
    assert_eq!(err.to_string(), "property_key_list cannot be null");

    let ok = AlterCatalogReset::try_from_parts(
        Span::default(),
        Some(ident("c")),
        Some(string_keys(&[])),
    );
    assert!(ok.is_ok());
}

#[test]
fn test_parse_then_format_script() {
    let sql = "alter catalog prod.main reset ('owner', 'comment');\n\
               ALTER CATALOG prod.main SET ('owner' = 'ops');\n\
               ALTER CATALOG prod.main COMMENT 'primary'";
    let statements = ddlite::parse_statements(sql).unwrap();
    let kinds: Vec<AlterCatalogKind> = statements.iter().map(|s| s.kind()).collect();
    assert_eq!(
        kinds,
        vec![
            AlterCatalogKind::Reset,
            AlterCatalogKind::Set,
            AlterCatalogKind::Comment
        ]
    );

    assert_eq!(
        statements[0].to_sql(),
        "ALTER CATALOG prod.main RESET (\n  'owner',\n  'comment'\n)"
    );
    assert_eq!(
        statements[1].to_sql_with(&UnparseConfig::compact()),
        "ALTER CATALOG prod.main SET ('owner' = 'ops')"
    );
}

#[test]
fn test_parse_validate_change_pipeline() {
    let statement = parse_statement("ALTER CATALOG cat RESET ('comment', 'comment')").unwrap();
    let report = validate_statement(&statement).unwrap();
    assert_eq!(report.warnings.len(), 1);

    let change = statement.to_catalog_change().unwrap();
    assert_eq!(change.to_string(), "reset [comment] on catalog cat");
}

#[test]
fn test_ast_json_round_trip() {
    let statement = parse_statement("ALTER CATALOG cat RESET ('comment')").unwrap();
    let json = serde_json::to_string(&statement).unwrap();
    let back: AlterCatalogStatement = serde_json::from_str(&json).unwrap();
    assert_eq!(back, statement);
}
