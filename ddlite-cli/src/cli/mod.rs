// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! CLI module for DDLite
//!
//! Provides statement formatting, AST inspection and validation for
//! `ALTER CATALOG` scripts read from an argument or standard input.

pub mod commands;
pub mod handlers;
pub mod output;

pub use commands::{Cli, Commands};
pub use handlers::{handle_explain, handle_format, handle_validate, FormatOptions};
