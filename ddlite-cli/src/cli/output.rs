// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Result formatting for CLI output

use colored::*;
use ddlite::ast::pretty_printer::render_tree;
use ddlite::ast::{ValidationError, ValidationReport};
use ddlite::AlterCatalogStatement;

/// Formatter for explain and validation output
pub struct OutputFormatter;

impl OutputFormatter {
    /// Syntax tree plus the resulting change, one block per statement
    pub fn explain_text(statements: &[AlterCatalogStatement]) -> String {
        let mut output = String::new();

        for (index, stmt) in statements.iter().enumerate() {
            output.push_str(&format!(
                "{}\n",
                format!("Statement {}: {}", index + 1, stmt).bold().green()
            ));
            for line in render_tree(stmt) {
                output.push_str(&format!("  {}\n", line));
            }
            match stmt.to_catalog_change() {
                Ok(change) => output.push_str(&format!("  Change: {}\n", change)),
                Err(e) => output.push_str(&format!("  {}\n", format!("Change: {}", e).red())),
            }
            output.push('\n');
        }

        output.trim_end().to_string()
    }

    /// Machine-readable explain output
    pub fn explain_json(
        statements: &[AlterCatalogStatement],
    ) -> Result<String, serde_json::Error> {
        let entries: Vec<serde_json::Value> = statements
            .iter()
            .map(|stmt| -> Result<serde_json::Value, serde_json::Error> {
                let change = match stmt.to_catalog_change() {
                    Ok(change) => serde_json::to_value(change)?,
                    Err(e) => serde_json::json!({ "error": e.to_string() }),
                };
                Ok(serde_json::json!({
                    "kind": stmt.kind().to_string(),
                    "sql": stmt.to_string(),
                    "ast": serde_json::to_value(stmt)?,
                    "change": change,
                }))
            })
            .collect::<Result<_, _>>()?;

        serde_json::to_string_pretty(&entries)
    }

    /// Status line for one statement followed by its findings
    pub fn validation(
        number: usize,
        stmt: &AlterCatalogStatement,
        result: &Result<ValidationReport, Vec<ValidationError>>,
    ) -> String {
        let mut output = String::new();

        match result {
            Ok(report) => {
                output.push_str(&format!(
                    "{} {}\n",
                    format!("✅ Statement {}:", number).green(),
                    stmt
                ));
                for (i, warning) in report.warnings.iter().enumerate() {
                    let location = warning
                        .location
                        .map(|l| format!(" (at {})", l))
                        .unwrap_or_default();
                    output.push_str(&format!(
                        "  {}\n",
                        format!("{}. {}{}", i + 1, warning.message, location).yellow()
                    ));
                }
            }
            Err(errors) => {
                output.push_str(&format!(
                    "{} {}\n",
                    format!("❌ Statement {}:", number).red().bold(),
                    stmt
                ));
                for (i, error) in errors.iter().enumerate() {
                    output.push_str(&format!(
                        "  {}. [{:?}] {}\n",
                        i + 1,
                        error.error_type,
                        error.to_string().red()
                    ));
                }
            }
        }

        output
    }
}
