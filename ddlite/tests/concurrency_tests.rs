//! Shared read access to statements from multiple threads
//!
//! Statements are immutable after construction, so introspection, unparsing and
//! key extraction can run concurrently on one instance without locking.

#[path = "testutils/mod.rs"]
mod testutils;

use ddlite::ast::NodeRef;
use ddlite::{AlterCatalogStatement, Unparse};
use std::sync::Arc;
use testutils::reset_statement;

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn test_statement_is_send_and_sync() {
    assert_send_sync::<AlterCatalogStatement>();
    assert_send_sync::<ddlite::CatalogChange>();
}

#[test]
fn test_concurrent_reads_agree() {
    let keys: Vec<String> = (0..64).map(|i| format!("key_{}", i % 16)).collect();
    let key_refs: Vec<&str> = keys.iter().map(String::as_str).collect();
    let statement = reset_statement("shared.catalog", &key_refs);
    let expected_sql = statement.to_sql();
    let expected_change = statement.to_catalog_change().unwrap();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                scope.spawn(|| {
                    for _ in 0..50 {
                        assert_eq!(statement.operand_list().len(), 2);
                        assert_eq!(statement.to_sql(), expected_sql);
                        assert_eq!(statement.to_catalog_change().unwrap(), expected_change);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
    });
}

#[test]
fn test_arc_shared_across_spawned_threads() {
    let statement = Arc::new(reset_statement("c", &["a", "b", "a"]));

    let counts: Vec<usize> = (0..4)
        .map(|_| {
            let statement = Arc::clone(&statement);
            std::thread::spawn(move || match statement.operand_list()[1] {
                NodeRef::LiteralList(list) => list.len(),
                _ => 0,
            })
        })
        .collect::<Vec<_>>()
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .collect();

    assert_eq!(counts, vec![3; 4]);
}
