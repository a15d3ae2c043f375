// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! AST subsystem: Lexer, parser, AST nodes, unparsing and validation for
//! catalog alteration DDL

#[allow(clippy::module_inception)]
mod ast;
pub use ast::*;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod pretty_printer;
pub mod unparse;
pub mod validator;
pub mod walk;

pub use error::{AstError, AstResult};
pub use parser::{parse_statement, parse_statements, ParserError};
pub use unparse::{with_list, Frame, SqlPrettyWriter, SqlWriter, Unparse};
pub use validator::{validate_statement, ValidationError, ValidationReport};
