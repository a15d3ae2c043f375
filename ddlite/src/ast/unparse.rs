// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Unparsing: regenerate canonical SQL text from AST nodes
//!
//! Nodes never format text themselves. They drive a [`SqlWriter`] with a stream of
//! keywords, identifiers, literals, separators and list frames, and the writer decides
//! layout. [`SqlPrettyWriter`] is the standard writer and follows [`UnparseConfig`].
//!
//! Canonical layout of a RESET statement in pretty mode:
//!
//! ```text
//! ALTER CATALOG my_catalog RESET (
//!   'comment',
//!   'owner'
//! )
//! ```

use super::ast::*;
use super::lexer::{is_keyword, is_regular_identifier};
use crate::config::{KeywordCase, UnparseConfig};

/// Open list frame returned by [`SqlWriter::start_list`]
///
/// Not `Clone`: handing it back to [`SqlWriter::end_list`] consumes it, so each frame
/// is closed at most once.
#[must_use = "a list frame must be closed with `end_list`"]
#[derive(Debug, PartialEq, Eq)]
pub struct Frame {
    depth: usize,
    open: &'static str,
    close: &'static str,
}

impl Frame {
    pub fn new(depth: usize, open: &'static str, close: &'static str) -> Self {
        Self { depth, open, close }
    }

    /// Nesting depth, 1 for the outermost frame
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn open(&self) -> &'static str {
        self.open
    }

    pub fn close(&self) -> &'static str {
        self.close
    }
}

/// Token sink driven by [`Unparse`] implementations
pub trait SqlWriter {
    fn keyword(&mut self, keyword: &str);

    /// Compound identifier; the writer applies quoting
    fn identifier(&mut self, names: &[String]);

    /// Literal already rendered as SQL text, e.g. `'it''s'` or `42`
    fn literal(&mut self, text: &str);

    /// List separator, dropped before the first item of a frame
    fn sep(&mut self, sep: &str);

    fn start_list(&mut self, open: &'static str, close: &'static str) -> Frame;

    fn end_list(&mut self, frame: Frame);

    fn newline_and_indent(&mut self);

    /// Item prefix used by DDL property lists
    fn print_indent(&mut self) {
        self.sep(",");
        self.newline_and_indent();
    }
}

/// Run `body` inside a list frame that is closed on every return path of `body`
pub fn with_list<R>(
    writer: &mut dyn SqlWriter,
    open: &'static str,
    close: &'static str,
    body: impl FnOnce(&mut dyn SqlWriter) -> R,
) -> R {
    let frame = writer.start_list(open, close);
    let result = body(&mut *writer);
    writer.end_list(frame);
    result
}

/// Nodes that can regenerate their SQL text
pub trait Unparse {
    fn unparse(&self, writer: &mut dyn SqlWriter, left_prec: u8, right_prec: u8);

    fn to_sql_with(&self, config: &UnparseConfig) -> String
    where
        Self: Sized,
    {
        let mut writer = SqlPrettyWriter::new(config.clone());
        self.unparse(&mut writer, 0, 0);
        writer.into_sql()
    }

    fn to_sql(&self) -> String
    where
        Self: Sized,
    {
        self.to_sql_with(&UnparseConfig::default())
    }
}

/// Shared `ALTER CATALOG <name>` prefix of every catalog alteration
pub fn unparse_alter_catalog_prefix(
    writer: &mut dyn SqlWriter,
    catalog_name: &Identifier,
    left_prec: u8,
    right_prec: u8,
) {
    writer.keyword("ALTER");
    writer.keyword("CATALOG");
    catalog_name.unparse(writer, left_prec, right_prec);
}

impl Unparse for Identifier {
    fn unparse(&self, writer: &mut dyn SqlWriter, _left_prec: u8, _right_prec: u8) {
        writer.identifier(self.names());
    }
}

impl Unparse for Literal {
    fn unparse(&self, writer: &mut dyn SqlWriter, _left_prec: u8, _right_prec: u8) {
        match self.value() {
            LiteralValue::String(s) => writer.literal(&quote_string(s)),
            LiteralValue::Integer(n) => writer.literal(&n.to_string()),
            LiteralValue::Decimal(text) => writer.literal(text),
            LiteralValue::Boolean(true) => writer.keyword("TRUE"),
            LiteralValue::Boolean(false) => writer.keyword("FALSE"),
            LiteralValue::Null => writer.keyword("NULL"),
        }
    }
}

impl Unparse for PropertyOption {
    fn unparse(&self, writer: &mut dyn SqlWriter, left_prec: u8, right_prec: u8) {
        self.key().unparse(writer, left_prec, right_prec);
        writer.keyword("=");
        self.value().unparse(writer, left_prec, right_prec);
    }
}

impl Unparse for AlterCatalogSet {
    fn unparse(&self, writer: &mut dyn SqlWriter, left_prec: u8, right_prec: u8) {
        unparse_alter_catalog_prefix(writer, self.catalog_name(), left_prec, right_prec);
        writer.keyword("SET");
        with_list(writer, "(", ")", |w| {
            for option in self.property_list() {
                w.print_indent();
                option.unparse(w, left_prec, right_prec);
            }
            w.newline_and_indent();
        });
    }
}

impl Unparse for AlterCatalogReset {
    fn unparse(&self, writer: &mut dyn SqlWriter, left_prec: u8, right_prec: u8) {
        unparse_alter_catalog_prefix(writer, self.catalog_name(), left_prec, right_prec);
        writer.keyword("RESET");
        with_list(writer, "(", ")", |w| {
            for key in self.property_list() {
                w.print_indent();
                key.unparse(w, left_prec, right_prec);
            }
            w.newline_and_indent();
        });
    }
}

impl Unparse for AlterCatalogRename {
    fn unparse(&self, writer: &mut dyn SqlWriter, left_prec: u8, right_prec: u8) {
        unparse_alter_catalog_prefix(writer, self.catalog_name(), left_prec, right_prec);
        writer.keyword("RENAME");
        writer.keyword("TO");
        self.new_name().unparse(writer, left_prec, right_prec);
    }
}

impl Unparse for AlterCatalogComment {
    fn unparse(&self, writer: &mut dyn SqlWriter, left_prec: u8, right_prec: u8) {
        unparse_alter_catalog_prefix(writer, self.catalog_name(), left_prec, right_prec);
        writer.keyword("COMMENT");
        self.comment_literal().unparse(writer, left_prec, right_prec);
    }
}

impl Unparse for AlterCatalogStatement {
    fn unparse(&self, writer: &mut dyn SqlWriter, left_prec: u8, right_prec: u8) {
        match self {
            AlterCatalogStatement::Set(stmt) => stmt.unparse(writer, left_prec, right_prec),
            AlterCatalogStatement::Reset(stmt) => stmt.unparse(writer, left_prec, right_prec),
            AlterCatalogStatement::Rename(stmt) => stmt.unparse(writer, left_prec, right_prec),
            AlterCatalogStatement::Comment(stmt) => stmt.unparse(writer, left_prec, right_prec),
        }
    }
}

impl std::fmt::Display for AlterCatalogStatement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_sql_with(&UnparseConfig::compact()))
    }
}

/// Render a character string literal, doubling embedded quotes
pub fn quote_string(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

/// Render a backtick-delimited identifier part
pub fn quote_identifier(name: &str) -> String {
    format!("`{}`", name.replace('`', "``"))
}

#[derive(Debug)]
struct FrameState {
    close: &'static str,
    has_items: bool,
}

/// String-backed [`SqlWriter`]
#[derive(Debug)]
pub struct SqlPrettyWriter {
    config: UnparseConfig,
    buf: String,
    frames: Vec<FrameState>,
    needs_whitespace: bool,
}

impl SqlPrettyWriter {
    pub fn new(config: UnparseConfig) -> Self {
        Self {
            config,
            buf: String::new(),
            frames: Vec::new(),
            needs_whitespace: false,
        }
    }

    pub fn config(&self) -> &UnparseConfig {
        &self.config
    }

    /// Text written so far
    pub fn as_str(&self) -> &str {
        &self.buf
    }

    pub fn into_sql(self) -> String {
        debug_assert!(self.frames.is_empty(), "unclosed list frame");
        self.buf
    }

    fn begin_token(&mut self) {
        if self.needs_whitespace {
            self.buf.push(' ');
        }
        if let Some(frame) = self.frames.last_mut() {
            frame.has_items = true;
        }
    }

    fn push_token(&mut self, text: &str) {
        self.begin_token();
        self.buf.push_str(text);
        self.needs_whitespace = true;
    }

    fn format_identifier_part(&self, name: &str) -> String {
        if self.config.quote_all_identifiers || !is_regular_identifier(name) || is_keyword(name) {
            quote_identifier(name)
        } else {
            name.to_string()
        }
    }

    fn push_indentation(&mut self) {
        let width = self.frames.len() * self.config.indent_width;
        self.buf.extend(std::iter::repeat(' ').take(width));
    }
}

impl SqlWriter for SqlPrettyWriter {
    fn keyword(&mut self, keyword: &str) {
        let keyword = match self.config.keyword_case {
            KeywordCase::Upper => keyword.to_ascii_uppercase(),
            KeywordCase::Lower => keyword.to_ascii_lowercase(),
        };
        self.push_token(&keyword);
    }

    fn identifier(&mut self, names: &[String]) {
        let text = names
            .iter()
            .map(|name| self.format_identifier_part(name))
            .collect::<Vec<_>>()
            .join(".");
        self.push_token(&text);
    }

    fn literal(&mut self, text: &str) {
        self.push_token(text);
    }

    fn sep(&mut self, sep: &str) {
        if let Some(frame) = self.frames.last() {
            if !frame.has_items {
                return;
            }
        }
        self.buf.push_str(sep);
        self.needs_whitespace = true;
    }

    fn start_list(&mut self, open: &'static str, close: &'static str) -> Frame {
        self.begin_token();
        self.buf.push_str(open);
        self.needs_whitespace = false;
        self.frames.push(FrameState {
            close,
            has_items: false,
        });
        Frame::new(self.frames.len(), open, close)
    }

    fn end_list(&mut self, frame: Frame) {
        debug_assert_eq!(frame.depth(), self.frames.len(), "list frames closed out of order");
        let Some(state) = self.frames.pop() else {
            return;
        };
        debug_assert_eq!(state.close, frame.close());

        // A pending newline re-indents at the enclosing level
        let trimmed_len = self.buf.trim_end_matches(' ').len();
        if self.buf[..trimmed_len].ends_with('\n') {
            self.buf.truncate(trimmed_len);
            self.push_indentation();
        }
        self.buf.push_str(state.close);
        self.needs_whitespace = true;
    }

    fn newline_and_indent(&mut self) {
        if !self.config.pretty {
            return;
        }
        self.buf.push('\n');
        self.push_indentation();
        self.needs_whitespace = false;
    }
}
