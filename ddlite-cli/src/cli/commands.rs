// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Command-line argument definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "ddlite", version, about = "Format, inspect and validate catalog DDL")]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true)]
    pub log_level: Option<log::Level>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print version information
    Version,

    /// Regenerate statements in canonical layout
    #[command(alias = "fmt")]
    Format {
        /// SQL text; read from stdin when omitted
        sql: Option<String>,

        /// Keep each statement on a single line
        #[arg(long)]
        compact: bool,

        /// JSON file with unparse settings
        #[arg(long)]
        config: Option<PathBuf>,

        #[arg(long)]
        lowercase_keywords: bool,

        /// Quote every identifier part
        #[arg(long)]
        quote_identifiers: bool,
    },

    /// Show the syntax tree and resulting catalog change
    Explain {
        /// SQL text; read from stdin when omitted
        sql: Option<String>,

        #[arg(long, value_enum, default_value_t = ExplainFormat::Text)]
        format: ExplainFormat,
    },

    /// Check statements for type and structure errors
    Validate {
        /// SQL text; read from stdin when omitted
        sql: Option<String>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExplainFormat {
    Text,
    Json,
}
