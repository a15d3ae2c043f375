// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Catalog changes derived from parsed statements
//!
//! A [`CatalogChange`] is the executor-facing form of an `ALTER CATALOG` statement:
//! literals are resolved to plain strings and collections are ordered, so two
//! statements with the same effect produce equal (and identically serialized) changes.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use crate::ast::{AlterCatalogStatement, AstResult};

/// A single modification to a catalog's metadata
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "operation", rename_all = "snake_case")]
pub enum CatalogChange {
    /// Remove the listed properties, restoring their defaults
    ResetProperties {
        catalog: Vec<String>,
        keys: BTreeSet<String>,
    },

    /// Add or overwrite properties
    SetProperties {
        catalog: Vec<String>,
        properties: BTreeMap<String, String>,
    },

    Rename {
        catalog: Vec<String>,
        new_name: Vec<String>,
    },

    SetComment {
        catalog: Vec<String>,
        comment: String,
    },
}

impl CatalogChange {
    /// Name path of the catalog being altered
    pub fn catalog(&self) -> &[String] {
        match self {
            CatalogChange::ResetProperties { catalog, .. }
            | CatalogChange::SetProperties { catalog, .. }
            | CatalogChange::Rename { catalog, .. }
            | CatalogChange::SetComment { catalog, .. } => catalog,
        }
    }

    pub fn operation_name(&self) -> &'static str {
        match self {
            CatalogChange::ResetProperties { .. } => "reset_properties",
            CatalogChange::SetProperties { .. } => "set_properties",
            CatalogChange::Rename { .. } => "rename",
            CatalogChange::SetComment { .. } => "set_comment",
        }
    }
}

impl fmt::Display for CatalogChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let catalog = self.catalog().join(".");
        match self {
            CatalogChange::ResetProperties { keys, .. } => {
                let keys: Vec<&str> = keys.iter().map(String::as_str).collect();
                write!(f, "reset [{}] on catalog {}", keys.join(", "), catalog)
            }
            CatalogChange::SetProperties { properties, .. } => {
                let pairs: Vec<String> = properties
                    .iter()
                    .map(|(k, v)| format!("{}={}", k, v))
                    .collect();
                write!(f, "set [{}] on catalog {}", pairs.join(", "), catalog)
            }
            CatalogChange::Rename { new_name, .. } => {
                write!(f, "rename catalog {} to {}", catalog, new_name.join("."))
            }
            CatalogChange::SetComment { comment, .. } => {
                write!(f, "comment on catalog {}: {}", catalog, comment)
            }
        }
    }
}

impl AlterCatalogStatement {
    /// Resolve the statement into the change an executor applies
    ///
    /// Fails with [`AstError::TypeMismatch`](crate::ast::AstError::TypeMismatch) when a
    /// key, value or comment is not a character string literal.
    pub fn to_catalog_change(&self) -> AstResult<CatalogChange> {
        let catalog = self.catalog_name().names().to_vec();
        let change = match self {
            AlterCatalogStatement::Reset(reset) => CatalogChange::ResetProperties {
                catalog,
                keys: reset.reset_keys()?.into_iter().collect(),
            },
            AlterCatalogStatement::Set(set) => CatalogChange::SetProperties {
                catalog,
                properties: set.properties()?.into_iter().collect(),
            },
            AlterCatalogStatement::Rename(rename) => CatalogChange::Rename {
                catalog,
                new_name: rename.new_name().names().to_vec(),
            },
            AlterCatalogStatement::Comment(comment) => CatalogChange::SetComment {
                catalog,
                comment: comment.comment()?.to_string(),
            },
        };
        Ok(change)
    }
}
