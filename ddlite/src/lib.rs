// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! DDLite - typed syntax trees for catalog DDL
//!
//! DDLite parses `ALTER CATALOG` statements into a typed AST, exposes each node's
//! operands for generic traversal, and regenerates SQL text from the tree.
//!
//! # Features
//!
//! - **Typed AST**: `RESET`, `SET`, `RENAME TO` and `COMMENT` forms share one statement enum
//! - **Operand Introspection**: every node lists its children in a fixed order
//! - **Unparsing**: layout-aware SQL regeneration through the `SqlWriter` trait
//! - **Validation**: type and structure checks before a change is applied
//!
//! # Usage
//!
//! ```text
//! let stmt = ddlite::parse_statement("ALTER CATALOG cat RESET ('comment')")?;
//! let keys = stmt.to_catalog_change()?;
//! println!("{}", stmt.to_sql());
//! ```
//!
//! The `ddlite` binary wraps the same API:
//!
//! ```bash
//! ddlite format "alter catalog cat reset ('comment', 'owner')"
//! ddlite explain --format json "ALTER CATALOG cat RESET ('comment')"
//! ```

pub mod ast;
pub mod catalog;
pub mod config;

pub use ast::{
    parse_statement, parse_statements, validate_statement, AlterCatalogStatement, AstError,
    ParserError, SqlPrettyWriter, SqlWriter, Unparse,
};
pub use catalog::CatalogChange;
pub use config::{ConfigError, KeywordCase, UnparseConfig};

/// DDLite version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// DDLite crate name
pub const CRATE_NAME: &str = env!("CARGO_PKG_NAME");
