// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Unparse configuration

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Letter case used for emitted keywords
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum KeywordCase {
    #[default]
    Upper,
    Lower,
}

/// Layout options for [`SqlPrettyWriter`](crate::ast::unparse::SqlPrettyWriter)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct UnparseConfig {
    /// Break list items onto their own indented lines
    pub pretty: bool,

    /// Spaces per indentation level in pretty mode
    pub indent_width: usize,

    pub keyword_case: KeywordCase,

    /// Quote every identifier part, not only those that need it
    pub quote_all_identifiers: bool,
}

impl Default for UnparseConfig {
    fn default() -> Self {
        Self {
            pretty: true,
            indent_width: 2,
            keyword_case: KeywordCase::Upper,
            quote_all_identifiers: false,
        }
    }
}

impl UnparseConfig {
    /// Single-line layout
    pub fn compact() -> Self {
        Self {
            pretty: false,
            ..Self::default()
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::IoError(format!("{}: {}", path.display(), e)))?;
        Self::from_json_str(&contents)
    }
}

#[derive(Error, Debug, Clone)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Invalid configuration: {0}")]
    ParseError(String),
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}
