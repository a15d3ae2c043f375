// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Error types raised by AST node constructors and accessors
//!
//! These errors signal a broken grammar guarantee (a missing constructor part or a
//! literal of the wrong kind), never malformed user SQL. Syntax errors are reported
//! by the parser, see [`ParserError`](crate::ast::parser::ParserError).

use thiserror::Error;

use super::ast::LiteralKind;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AstError {
    #[error("{0} cannot be null")]
    NullArgument(&'static str),

    #[error("Type mismatch: expected {expected} literal, found {actual} literal")]
    TypeMismatch {
        expected: LiteralKind,
        actual: LiteralKind,
    },
}

pub type AstResult<T> = Result<T, AstError>;
