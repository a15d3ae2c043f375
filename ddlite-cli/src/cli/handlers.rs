// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! CLI command handlers for DDLite

use colored::Colorize;
use log::debug;
use std::io::Read;
use std::path::PathBuf;

use super::commands::ExplainFormat;
use super::output::OutputFormatter;
use ddlite::{parse_statements, validate_statement, KeywordCase, Unparse, UnparseConfig};

/// Layout flags of the `format` command
#[derive(Debug, Default)]
pub struct FormatOptions {
    pub compact: bool,
    pub config: Option<PathBuf>,
    pub lowercase_keywords: bool,
    pub quote_identifiers: bool,
}

impl FormatOptions {
    /// Start from the config file (or defaults) and apply flag overrides on top
    fn resolve(&self) -> Result<UnparseConfig, Box<dyn std::error::Error>> {
        let mut config = match &self.config {
            Some(path) => {
                debug!("Loading unparse config from {}", path.display());
                UnparseConfig::from_json_file(path)?
            }
            None => UnparseConfig::default(),
        };
        if self.compact {
            config.pretty = false;
        }
        if self.lowercase_keywords {
            config.keyword_case = KeywordCase::Lower;
        }
        if self.quote_identifiers {
            config.quote_all_identifiers = true;
        }
        Ok(config)
    }
}

/// Handle the format command
pub fn handle_format(
    sql: Option<String>,
    options: FormatOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = options.resolve()?;
    let input = read_input(sql)?;
    let statements = parse_statements(&input)?;

    let rendered: Vec<String> = statements
        .iter()
        .map(|stmt| format!("{};", stmt.to_sql_with(&config)))
        .collect();
    println!("{}", rendered.join("\n\n"));
    Ok(())
}

/// Handle the explain command
pub fn handle_explain(
    sql: Option<String>,
    format: ExplainFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let input = read_input(sql)?;
    let statements = parse_statements(&input)?;

    let output = match format {
        ExplainFormat::Text => OutputFormatter::explain_text(&statements),
        ExplainFormat::Json => OutputFormatter::explain_json(&statements)?,
    };
    println!("{}", output);
    Ok(())
}

/// Handle the validate command
pub fn handle_validate(sql: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    let input = read_input(sql)?;
    let statements = parse_statements(&input)?;

    let mut failed = 0;
    for (index, stmt) in statements.iter().enumerate() {
        let result = validate_statement(stmt);
        if result.is_err() {
            failed += 1;
        }
        print!("{}", OutputFormatter::validation(index + 1, stmt, &result));
    }

    if failed > 0 {
        return Err(format!("{} of {} statements failed validation", failed, statements.len()).into());
    }
    println!(
        "{}",
        format!("All {} statements are valid", statements.len()).green()
    );
    Ok(())
}

/// SQL from the argument, or all of stdin when absent
fn read_input(sql: Option<String>) -> Result<String, Box<dyn std::error::Error>> {
    match sql {
        Some(sql) => Ok(sql),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_defaults() {
        let options = FormatOptions {
            compact: true,
            lowercase_keywords: true,
            ..Default::default()
        };
        let config = options.resolve().unwrap();
        assert!(!config.pretty);
        assert_eq!(config.keyword_case, KeywordCase::Lower);
        assert!(!config.quote_all_identifiers);
    }

    #[test]
    fn test_missing_config_file() {
        let options = FormatOptions {
            config: Some(PathBuf::from("/nonexistent/ddlite.json")),
            ..Default::default()
        };
        assert!(options.resolve().is_err());
    }
}
