//! Test utilities for DDLite integration tests
//!
//! - RecordingWriter: captures the token stream an unparse emits, ignoring layout
//! - Node builders for constructing statements without going through the parser

#![allow(dead_code)]

use ddlite::ast::{
    AlterCatalogReset, AlterCatalogStatement, Frame, Identifier, Literal, NodeList, Span,
    SqlWriter, Unparse,
};

/// Writer that records tokens in emission order
#[derive(Debug, Default)]
pub struct RecordingWriter {
    pub tokens: Vec<String>,
    depth: usize,
}

impl SqlWriter for RecordingWriter {
    fn keyword(&mut self, keyword: &str) {
        self.tokens.push(keyword.to_string());
    }

    fn identifier(&mut self, names: &[String]) {
        self.tokens.push(names.join("."));
    }

    fn literal(&mut self, text: &str) {
        self.tokens.push(text.to_string());
    }

    fn sep(&mut self, _sep: &str) {}

    fn start_list(&mut self, open: &'static str, close: &'static str) -> Frame {
        self.tokens.push(open.to_string());
        self.depth += 1;
        Frame::new(self.depth, open, close)
    }

    fn end_list(&mut self, frame: Frame) {
        assert_eq!(frame.depth(), self.depth, "frames must close innermost first");
        self.depth -= 1;
        self.tokens.push(frame.close().to_string());
    }

    fn newline_and_indent(&mut self) {}
}

impl RecordingWriter {
    pub fn record(node: &dyn Unparse) -> Vec<String> {
        let mut writer = RecordingWriter::default();
        node.unparse(&mut writer, 0, 0);
        assert_eq!(writer.depth, 0, "unbalanced list frames");
        writer.tokens
    }
}

pub fn ident(name: &str) -> Identifier {
    Identifier::new(
        name.split('.').map(str::to_string).collect(),
        Span::default(),
    )
}

pub fn string_keys(keys: &[&str]) -> NodeList<Literal> {
    NodeList::new(
        keys.iter()
            .map(|k| Literal::string(*k, Span::default()))
            .collect(),
        Span::default(),
    )
}

pub fn reset_statement(name: &str, keys: &[&str]) -> AlterCatalogStatement {
    AlterCatalogStatement::Reset(AlterCatalogReset::new(
        Span::default(),
        ident(name),
        string_keys(keys),
    ))
}

/// Unparse with the default pretty layout and parse the result back
pub fn round_trip(statement: &AlterCatalogStatement) -> AlterCatalogStatement {
    let sql = statement.to_sql();
    ddlite::parse_statement(&sql)
        .unwrap_or_else(|e| panic!("failed to re-parse {:?}: {}", sql, e))
}
