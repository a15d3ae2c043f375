// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Validator for catalog alteration statements
//!
//! Runs before accessors such as [`AlterCatalogReset::reset_keys`] are used to build a
//! catalog change, so that grammar-level leniency (any literal in key positions) turns
//! into user-facing errors here instead of accessor failures later.
//!
//! # Validation Categories
//!
//! - **Syntax**: identifier parts and property keys must not be empty
//! - **Type**: property keys, property values and comments must be character strings
//! - **Structural**: a rename must change the name
//!
//! Duplicate keys in SET and RESET lists are legal (RESET keys form a set, SET keys
//! keep their last value) and are reported as warnings.

use log::warn;
use std::collections::HashSet;
use std::fmt;

use super::ast::*;
use super::walk::walk;

/// Validation error with context
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub message: String,
    pub location: Option<Location>,
    pub error_type: ValidationErrorType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorType {
    Structural,
    Type,
    Syntax,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.location {
            Some(location) => write!(f, "{} (at {})", self.message, location),
            None => write!(f, "{}", self.message),
        }
    }
}

/// Non-fatal finding
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationWarning {
    pub message: String,
    pub location: Option<Location>,
}

/// Outcome of a successful validation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationReport {
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationReport {
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

#[derive(Default)]
struct ValidationContext {
    errors: Vec<ValidationError>,
    warnings: Vec<ValidationWarning>,
}

impl ValidationContext {
    fn error(&mut self, error_type: ValidationErrorType, message: String, span: Span) {
        self.errors.push(ValidationError {
            message,
            location: Some(span.start),
            error_type,
        });
    }

    fn warning(&mut self, message: String, span: Span) {
        warn!("{} (at {})", message, span.start);
        self.warnings.push(ValidationWarning {
            message,
            location: Some(span.start),
        });
    }
}

/// Validate a statement, returning its warnings or every error found
pub fn validate_statement(
    statement: &AlterCatalogStatement,
) -> Result<ValidationReport, Vec<ValidationError>> {
    let mut ctx = ValidationContext::default();

    validate_identifiers(statement, &mut ctx);

    match statement {
        AlterCatalogStatement::Set(set) => validate_set(set, &mut ctx),
        AlterCatalogStatement::Reset(reset) => validate_reset(reset, &mut ctx),
        AlterCatalogStatement::Rename(rename) => validate_rename(rename, &mut ctx),
        AlterCatalogStatement::Comment(comment) => {
            validate_string_literal(comment.comment_literal(), "Catalog comment", &mut ctx);
        }
    }

    if ctx.errors.is_empty() {
        Ok(ValidationReport {
            warnings: ctx.warnings,
        })
    } else {
        Err(ctx.errors)
    }
}

fn validate_identifiers(statement: &AlterCatalogStatement, ctx: &mut ValidationContext) {
    walk(NodeRef::Statement(statement), &mut |node, _| {
        if let NodeRef::Identifier(id) = node {
            if id.names().is_empty() || id.names().iter().any(|part| part.is_empty()) {
                ctx.error(
                    ValidationErrorType::Syntax,
                    format!("Identifier '{}' has an empty name part", id),
                    id.span(),
                );
            }
        }
    });
}

fn validate_reset(reset: &AlterCatalogReset, ctx: &mut ValidationContext) {
    let mut seen = HashSet::new();
    for key in reset.property_list() {
        if let Some(key_str) = validate_property_key(key, ctx) {
            if !seen.insert(key_str) {
                ctx.warning(
                    format!("Property key '{}' is listed more than once in RESET", key_str),
                    key.span(),
                );
            }
        }
    }
}

fn validate_set(set: &AlterCatalogSet, ctx: &mut ValidationContext) {
    let mut seen = HashSet::new();
    for option in set.property_list() {
        validate_string_literal(option.value(), "Property value", ctx);
        if let Some(key_str) = validate_property_key(option.key(), ctx) {
            if !seen.insert(key_str) {
                ctx.warning(
                    format!(
                        "Property key '{}' is set more than once; the last value wins",
                        key_str
                    ),
                    option.span(),
                );
            }
        }
    }
}

fn validate_rename(rename: &AlterCatalogRename, ctx: &mut ValidationContext) {
    if rename.catalog_name() == rename.new_name() {
        ctx.error(
            ValidationErrorType::Structural,
            format!(
                "Cannot rename catalog '{}' to its current name",
                rename.catalog_name()
            ),
            rename.new_name().span(),
        );
    }
}

fn validate_property_key<'a>(key: &'a Literal, ctx: &mut ValidationContext) -> Option<&'a str> {
    let key_str = validate_string_literal(key, "Property key", ctx)?;
    if key_str.is_empty() {
        ctx.error(
            ValidationErrorType::Syntax,
            "Property key must not be empty".to_string(),
            key.span(),
        );
        return None;
    }
    Some(key_str)
}

fn validate_string_literal<'a>(
    literal: &'a Literal,
    what: &str,
    ctx: &mut ValidationContext,
) -> Option<&'a str> {
    match literal.as_string() {
        Ok(s) => Some(s),
        Err(_) => {
            ctx.error(
                ValidationErrorType::Type,
                format!(
                    "{} must be a character string literal, found {}",
                    what,
                    literal.kind()
                ),
                literal.span(),
            );
            None
        }
    }
}
