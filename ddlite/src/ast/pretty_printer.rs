// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Pretty printer for AST nodes with debug logging

use log::{debug, log_enabled, Level};

use super::ast::*;
use super::walk::walk;

/// Log the statement tree at debug level, one node per line
pub fn pretty_print_ast(statement: &AlterCatalogStatement) {
    if !log_enabled!(Level::Debug) {
        return;
    }
    debug!("Starting AST pretty printing");
    for line in render_tree(statement) {
        debug!("{}", line);
    }
    debug!("AST pretty printing completed");
}

/// Indented, one-line-per-node description of the statement tree
pub fn render_tree(statement: &AlterCatalogStatement) -> Vec<String> {
    let mut lines = Vec::new();
    walk(NodeRef::Statement(statement), &mut |node, depth| {
        lines.push(format!("{}{}", get_indent(depth), describe(node)));
    });
    lines
}

fn describe(node: NodeRef<'_>) -> String {
    match node {
        NodeRef::Statement(stmt) => format!("Alter Catalog {} Statement", stmt.kind()),
        NodeRef::Identifier(id) => format!("Identifier: {}", id),
        NodeRef::Literal(lit) => format!("Literal ({}): {:?}", lit.kind(), lit.value()),
        NodeRef::LiteralList(list) => format!("Literal List: {} items", list.len()),
        NodeRef::OptionList(list) => format!("Option List: {} items", list.len()),
        NodeRef::PropertyOption(_) => "Property Option".to_string(),
    }
}

fn get_indent(level: usize) -> String {
    "  ".repeat(level)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::parser::parse_statement;

    #[test]
    fn test_render_reset_tree() {
        let stmt = parse_statement("ALTER CATALOG c RESET ('a', 2)").unwrap();
        assert_eq!(
            render_tree(&stmt),
            vec![
                "Alter Catalog RESET Statement".to_string(),
                "  Identifier: c".to_string(),
                "  Literal List: 2 items".to_string(),
                "    Literal (CHAR): String(\"a\")".to_string(),
                "    Literal (INTEGER): Integer(2)".to_string(),
            ]
        );
    }
}
