// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Generic tree walking driven only by operand lists

use super::ast::{AlterCatalogStatement, NodeRef};

/// Pre-order depth-first traversal; `visit` receives each node and its depth
pub fn walk<'a, F>(node: NodeRef<'a>, visit: &mut F)
where
    F: FnMut(NodeRef<'a>, usize),
{
    walk_at(node, 0, visit);
}

fn walk_at<'a, F>(node: NodeRef<'a>, depth: usize, visit: &mut F)
where
    F: FnMut(NodeRef<'a>, usize),
{
    visit(node, depth);
    for child in node.children() {
        walk_at(child, depth + 1, visit);
    }
}

/// Every node of a statement in pre-order, the statement itself first
pub fn descendants(statement: &AlterCatalogStatement) -> Vec<NodeRef<'_>> {
    let mut nodes = Vec::new();
    walk(NodeRef::Statement(statement), &mut |node, _| nodes.push(node));
    nodes
}
