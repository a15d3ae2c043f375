// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! DDLite CLI entry point

use clap::Parser;
use colored::Colorize;

mod cli;
use cli::{Cli, Commands};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let log_level = if cli.verbose {
        log::LevelFilter::Debug
    } else if let Some(level) = cli.log_level {
        level.to_level_filter()
    } else {
        // Can still be overridden by RUST_LOG
        log::LevelFilter::Warn
    };

    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .init();

    match cli.command {
        Commands::Version => {
            println!("{} {}", "DDLite".bold().green(), ddlite::VERSION);
            println!("Catalog DDL formatter and validator");
            Ok(())
        }

        Commands::Format {
            sql,
            compact,
            config,
            lowercase_keywords,
            quote_identifiers,
        } => cli::handle_format(
            sql,
            cli::FormatOptions {
                compact,
                config,
                lowercase_keywords,
                quote_identifiers,
            },
        ),

        Commands::Explain { sql, format } => cli::handle_explain(sql, format),

        Commands::Validate { sql } => cli::handle_validate(sql),
    }
}
