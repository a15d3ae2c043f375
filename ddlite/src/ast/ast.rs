// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Abstract Syntax Tree (AST) structures for catalog alteration DDL
//!
//! Every node is an immutable value built once by the parser. Spans are carried for
//! diagnostics only and never take part in node equality.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;

use super::error::{AstError, AstResult};

/// Location information for AST nodes
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Location {
    pub line: usize,
    pub column: usize,
    pub offset: usize,
}

impl Location {
    pub fn new(line: usize, column: usize, offset: usize) -> Self {
        Self {
            line,
            column,
            offset,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// Source range covered by a node, end exclusive
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Span {
    pub start: Location,
    pub end: Location,
}

impl Span {
    pub fn new(start: Location, end: Location) -> Self {
        Self { start, end }
    }

    /// Smallest span covering both `self` and `other`
    pub fn merge(self, other: Span) -> Span {
        let start = if other.start.offset < self.start.offset {
            other.start
        } else {
            self.start
        };
        let end = if other.end.offset > self.end.offset {
            other.end
        } else {
            self.end
        };
        Span { start, end }
    }
}

/// Qualified name such as `my_catalog` or `region.my_catalog`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Identifier {
    names: Vec<String>,
    span: Span,
}

impl Identifier {
    pub fn new(names: Vec<String>, span: Span) -> Self {
        Self { names, span }
    }

    pub fn simple(name: impl Into<String>, span: Span) -> Self {
        Self::new(vec![name.into()], span)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn is_simple(&self) -> bool {
        self.names.len() == 1
    }

    /// The name when the identifier has exactly one part
    pub fn simple_name(&self) -> Option<&str> {
        match self.names.as_slice() {
            [name] => Some(name),
            _ => None,
        }
    }

    pub fn span(&self) -> Span {
        self.span
    }
}

impl PartialEq for Identifier {
    fn eq(&self, other: &Self) -> bool {
        self.names == other.names
    }
}

impl Eq for Identifier {}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.names.join("."))
    }
}

/// Kind tag of a literal value
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum LiteralKind {
    CharString,
    Integer,
    Decimal,
    Boolean,
    Null,
}

impl fmt::Display for LiteralKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LiteralKind::CharString => "CHAR",
            LiteralKind::Integer => "INTEGER",
            LiteralKind::Decimal => "DECIMAL",
            LiteralKind::Boolean => "BOOLEAN",
            LiteralKind::Null => "NULL",
        };
        write!(f, "{}", s)
    }
}

/// Tagged literal value
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum LiteralValue {
    String(String),
    Integer(i64),
    /// Decimal text exactly as written, e.g. `1.50`
    Decimal(String),
    Boolean(bool),
    Null,
}

impl LiteralValue {
    pub fn kind(&self) -> LiteralKind {
        match self {
            LiteralValue::String(_) => LiteralKind::CharString,
            LiteralValue::Integer(_) => LiteralKind::Integer,
            LiteralValue::Decimal(_) => LiteralKind::Decimal,
            LiteralValue::Boolean(_) => LiteralKind::Boolean,
            LiteralValue::Null => LiteralKind::Null,
        }
    }
}

/// Scalar literal node
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Literal {
    value: LiteralValue,
    span: Span,
}

impl Literal {
    pub fn new(value: LiteralValue, span: Span) -> Self {
        Self { value, span }
    }

    pub fn string(value: impl Into<String>, span: Span) -> Self {
        Self::new(LiteralValue::String(value.into()), span)
    }

    pub fn value(&self) -> &LiteralValue {
        &self.value
    }

    pub fn kind(&self) -> LiteralKind {
        self.value.kind()
    }

    pub fn span(&self) -> Span {
        self.span
    }

    /// String payload of a character string literal
    pub fn as_string(&self) -> AstResult<&str> {
        match &self.value {
            LiteralValue::String(s) => Ok(s),
            other => Err(self.mismatch(LiteralKind::CharString, other)),
        }
    }

    pub fn as_integer(&self) -> AstResult<i64> {
        match &self.value {
            LiteralValue::Integer(n) => Ok(*n),
            other => Err(self.mismatch(LiteralKind::Integer, other)),
        }
    }

    pub fn as_boolean(&self) -> AstResult<bool> {
        match &self.value {
            LiteralValue::Boolean(b) => Ok(*b),
            other => Err(self.mismatch(LiteralKind::Boolean, other)),
        }
    }

    fn mismatch(&self, expected: LiteralKind, actual: &LiteralValue) -> AstError {
        AstError::TypeMismatch {
            expected,
            actual: actual.kind(),
        }
    }
}

impl PartialEq for Literal {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

/// Ordered, positioned list of child nodes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeList<T> {
    items: Vec<T>,
    span: Span,
}

impl<T> NodeList<T> {
    pub fn new(items: Vec<T>, span: Span) -> Self {
        Self { items, span }
    }

    pub fn empty(span: Span) -> Self {
        Self::new(Vec::new(), span)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn span(&self) -> Span {
        self.span
    }
}

impl<'a, T> IntoIterator for &'a NodeList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: PartialEq> PartialEq for NodeList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

/// `'key' = 'value'` entry of a SET list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyOption {
    key: Literal,
    value: Literal,
    span: Span,
}

impl PropertyOption {
    pub fn new(key: Literal, value: Literal, span: Span) -> Self {
        Self { key, value, span }
    }

    pub fn key(&self) -> &Literal {
        &self.key
    }

    pub fn value(&self) -> &Literal {
        &self.value
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn operand_list(&self) -> [NodeRef<'_>; 2] {
        [NodeRef::Literal(&self.key), NodeRef::Literal(&self.value)]
    }
}

impl PartialEq for PropertyOption {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key && self.value == other.value
    }
}

/// ALTER CATALOG catalog_name SET ('key' = 'value', ...)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlterCatalogSet {
    span: Span,
    catalog_name: Identifier,
    property_list: NodeList<PropertyOption>,
}

impl AlterCatalogSet {
    pub fn new(span: Span, catalog_name: Identifier, property_list: NodeList<PropertyOption>) -> Self {
        Self {
            span,
            catalog_name,
            property_list,
        }
    }

    pub fn catalog_name(&self) -> &Identifier {
        &self.catalog_name
    }

    pub fn property_list(&self) -> &NodeList<PropertyOption> {
        &self.property_list
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn operand_list(&self) -> [NodeRef<'_>; 2] {
        [
            NodeRef::Identifier(&self.catalog_name),
            NodeRef::OptionList(&self.property_list),
        ]
    }

    /// Property map to apply; a key given twice keeps its last value
    pub fn properties(&self) -> AstResult<HashMap<String, String>> {
        let mut properties = HashMap::with_capacity(self.property_list.len());
        for option in &self.property_list {
            let key = option.key().as_string()?;
            let value = option.value().as_string()?;
            properties.insert(key.to_string(), value.to_string());
        }
        Ok(properties)
    }
}

impl PartialEq for AlterCatalogSet {
    fn eq(&self, other: &Self) -> bool {
        self.catalog_name == other.catalog_name && self.property_list == other.property_list
    }
}

/// ALTER CATALOG catalog_name RESET ('key', ...)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlterCatalogReset {
    span: Span,
    catalog_name: Identifier,
    property_key_list: NodeList<Literal>,
}

impl AlterCatalogReset {
    pub fn new(span: Span, catalog_name: Identifier, property_key_list: NodeList<Literal>) -> Self {
        Self {
            span,
            catalog_name,
            property_key_list,
        }
    }

    /// Build from optionally collected grammar parts, rejecting absent ones
    pub fn try_from_parts(
        span: Span,
        catalog_name: Option<Identifier>,
        property_key_list: Option<NodeList<Literal>>,
    ) -> AstResult<Self> {
        let catalog_name = catalog_name.ok_or(AstError::NullArgument("catalog_name"))?;
        let property_key_list =
            property_key_list.ok_or(AstError::NullArgument("property_key_list"))?;
        Ok(Self::new(span, catalog_name, property_key_list))
    }

    pub fn catalog_name(&self) -> &Identifier {
        &self.catalog_name
    }

    pub fn property_list(&self) -> &NodeList<Literal> {
        &self.property_key_list
    }

    pub fn span(&self) -> Span {
        self.span
    }

    /// Exactly `[catalog_name, property_key_list]`; leaf types are not checked here
    pub fn operand_list(&self) -> [NodeRef<'_>; 2] {
        [
            NodeRef::Identifier(&self.catalog_name),
            NodeRef::LiteralList(&self.property_key_list),
        ]
    }

    /// Distinct property keys to clear
    pub fn reset_keys(&self) -> AstResult<HashSet<String>> {
        self.property_key_list
            .iter()
            .map(|key| key.as_string().map(str::to_string))
            .collect()
    }
}

impl PartialEq for AlterCatalogReset {
    fn eq(&self, other: &Self) -> bool {
        self.catalog_name == other.catalog_name
            && self.property_key_list == other.property_key_list
    }
}

/// ALTER CATALOG catalog_name RENAME TO new_name
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlterCatalogRename {
    span: Span,
    catalog_name: Identifier,
    new_name: Identifier,
}

impl AlterCatalogRename {
    pub fn new(span: Span, catalog_name: Identifier, new_name: Identifier) -> Self {
        Self {
            span,
            catalog_name,
            new_name,
        }
    }

    pub fn catalog_name(&self) -> &Identifier {
        &self.catalog_name
    }

    pub fn new_name(&self) -> &Identifier {
        &self.new_name
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn operand_list(&self) -> [NodeRef<'_>; 2] {
        [
            NodeRef::Identifier(&self.catalog_name),
            NodeRef::Identifier(&self.new_name),
        ]
    }
}

impl PartialEq for AlterCatalogRename {
    fn eq(&self, other: &Self) -> bool {
        self.catalog_name == other.catalog_name && self.new_name == other.new_name
    }
}

/// ALTER CATALOG catalog_name COMMENT 'text'
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlterCatalogComment {
    span: Span,
    catalog_name: Identifier,
    comment: Literal,
}

impl AlterCatalogComment {
    pub fn new(span: Span, catalog_name: Identifier, comment: Literal) -> Self {
        Self {
            span,
            catalog_name,
            comment,
        }
    }

    pub fn catalog_name(&self) -> &Identifier {
        &self.catalog_name
    }

    pub fn comment_literal(&self) -> &Literal {
        &self.comment
    }

    pub fn comment(&self) -> AstResult<&str> {
        self.comment.as_string()
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn operand_list(&self) -> [NodeRef<'_>; 2] {
        [
            NodeRef::Identifier(&self.catalog_name),
            NodeRef::Literal(&self.comment),
        ]
    }
}

impl PartialEq for AlterCatalogComment {
    fn eq(&self, other: &Self) -> bool {
        self.catalog_name == other.catalog_name && self.comment == other.comment
    }
}

/// Catalog alteration statements (DDL operations)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum AlterCatalogStatement {
    Set(AlterCatalogSet),
    Reset(AlterCatalogReset),
    Rename(AlterCatalogRename),
    Comment(AlterCatalogComment),
}

/// Discriminant of [`AlterCatalogStatement`]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum AlterCatalogKind {
    Set,
    Reset,
    Rename,
    Comment,
}

impl fmt::Display for AlterCatalogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AlterCatalogKind::Set => "SET",
            AlterCatalogKind::Reset => "RESET",
            AlterCatalogKind::Rename => "RENAME",
            AlterCatalogKind::Comment => "COMMENT",
        };
        write!(f, "{}", s)
    }
}

impl AlterCatalogStatement {
    pub fn kind(&self) -> AlterCatalogKind {
        match self {
            AlterCatalogStatement::Set(_) => AlterCatalogKind::Set,
            AlterCatalogStatement::Reset(_) => AlterCatalogKind::Reset,
            AlterCatalogStatement::Rename(_) => AlterCatalogKind::Rename,
            AlterCatalogStatement::Comment(_) => AlterCatalogKind::Comment,
        }
    }

    /// Target catalog shared by every variant
    pub fn catalog_name(&self) -> &Identifier {
        match self {
            AlterCatalogStatement::Set(stmt) => stmt.catalog_name(),
            AlterCatalogStatement::Reset(stmt) => stmt.catalog_name(),
            AlterCatalogStatement::Rename(stmt) => stmt.catalog_name(),
            AlterCatalogStatement::Comment(stmt) => stmt.catalog_name(),
        }
    }

    pub fn span(&self) -> Span {
        match self {
            AlterCatalogStatement::Set(stmt) => stmt.span(),
            AlterCatalogStatement::Reset(stmt) => stmt.span(),
            AlterCatalogStatement::Rename(stmt) => stmt.span(),
            AlterCatalogStatement::Comment(stmt) => stmt.span(),
        }
    }

    pub fn operand_list(&self) -> [NodeRef<'_>; 2] {
        match self {
            AlterCatalogStatement::Set(stmt) => stmt.operand_list(),
            AlterCatalogStatement::Reset(stmt) => stmt.operand_list(),
            AlterCatalogStatement::Rename(stmt) => stmt.operand_list(),
            AlterCatalogStatement::Comment(stmt) => stmt.operand_list(),
        }
    }
}

/// Borrowed, variant-agnostic view of any node in a statement tree
#[derive(Debug, Clone, Copy)]
pub enum NodeRef<'a> {
    Statement(&'a AlterCatalogStatement),
    Identifier(&'a Identifier),
    Literal(&'a Literal),
    LiteralList(&'a NodeList<Literal>),
    OptionList(&'a NodeList<PropertyOption>),
    PropertyOption(&'a PropertyOption),
}

impl<'a> NodeRef<'a> {
    /// Immediate children in operand order
    pub fn children(self) -> Vec<NodeRef<'a>> {
        match self {
            NodeRef::Statement(stmt) => stmt.operand_list().to_vec(),
            NodeRef::Identifier(_) | NodeRef::Literal(_) => Vec::new(),
            NodeRef::LiteralList(list) => list.iter().map(NodeRef::Literal).collect(),
            NodeRef::OptionList(list) => list.iter().map(NodeRef::PropertyOption).collect(),
            NodeRef::PropertyOption(option) => option.operand_list().to_vec(),
        }
    }

    pub fn span(self) -> Span {
        match self {
            NodeRef::Statement(stmt) => stmt.span(),
            NodeRef::Identifier(id) => id.span(),
            NodeRef::Literal(lit) => lit.span(),
            NodeRef::LiteralList(list) => list.span(),
            NodeRef::OptionList(list) => list.span(),
            NodeRef::PropertyOption(option) => option.span(),
        }
    }

    pub fn node_name(self) -> &'static str {
        match self {
            NodeRef::Statement(_) => "AlterCatalogStatement",
            NodeRef::Identifier(_) => "Identifier",
            NodeRef::Literal(_) => "Literal",
            NodeRef::LiteralList(_) | NodeRef::OptionList(_) => "NodeList",
            NodeRef::PropertyOption(_) => "PropertyOption",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(values: &[&str]) -> NodeList<Literal> {
        NodeList::new(
            values
                .iter()
                .map(|v| Literal::string(*v, Span::default()))
                .collect(),
            Span::default(),
        )
    }

    fn reset(name: &str, values: &[&str]) -> AlterCatalogReset {
        AlterCatalogReset::new(
            Span::default(),
            Identifier::simple(name, Span::default()),
            keys(values),
        )
    }

    #[test]
    fn test_reset_keys_collapse_duplicates() {
        let stmt = reset("c", &["a", "b", "a"]);
        let keys = stmt.reset_keys().unwrap();
        assert_eq!(keys.len(), 2);
        assert!(keys.contains("a"));
        assert!(keys.contains("b"));
    }

    #[test]
    fn test_reset_keys_empty_list() {
        let stmt = reset("c", &[]);
        assert!(stmt.reset_keys().unwrap().is_empty());
        assert_eq!(stmt.operand_list().len(), 2);
    }

    #[test]
    fn test_reset_keys_type_mismatch() {
        let list = NodeList::new(
            vec![
                Literal::string("a", Span::default()),
                Literal::new(LiteralValue::Integer(42), Span::default()),
            ],
            Span::default(),
        );
        let stmt = AlterCatalogReset::new(
            Span::default(),
            Identifier::simple("c", Span::default()),
            list,
        );

        assert_eq!(
            stmt.reset_keys(),
            Err(AstError::TypeMismatch {
                expected: LiteralKind::CharString,
                actual: LiteralKind::Integer,
            })
        );
        // Structural introspection does not look at leaf types
        assert_eq!(stmt.operand_list().len(), 2);
    }

    #[test]
    fn test_property_list_is_identity() {
        let stmt = reset("c", &["x"]);
        match stmt.operand_list() {
            [NodeRef::Identifier(id), NodeRef::LiteralList(list)] => {
                assert!(std::ptr::eq(id, stmt.catalog_name()));
                assert!(std::ptr::eq(list, stmt.property_list()));
            }
            other => panic!("unexpected operands: {:?}", other),
        }
    }

    #[test]
    fn test_try_from_parts_null_arguments() {
        let err = AlterCatalogReset::try_from_parts(
            Span::default(),
            Some(Identifier::simple("c", Span::default())),
            None,
        )
        .unwrap_err();
        assert_eq!(err, AstError::NullArgument("property_key_list"));

        let err =
            AlterCatalogReset::try_from_parts(Span::default(), None, Some(keys(&["a"]))).unwrap_err();
        assert_eq!(err, AstError::NullArgument("catalog_name"));

        let ok = AlterCatalogReset::try_from_parts(
            Span::default(),
            Some(Identifier::simple("c", Span::default())),
            Some(keys(&[])),
        );
        assert!(ok.is_ok());
    }

    #[test]
    fn test_equality_ignores_spans() {
        let a = reset("c", &["k"]);
        let located = Span::new(Location::new(3, 7, 40), Location::new(3, 20, 53));
        let b = AlterCatalogReset::new(
            located,
            Identifier::simple("c", located),
            NodeList::new(vec![Literal::string("k", located)], located),
        );
        assert_eq!(a, b);
        assert_ne!(a, reset("c", &["other"]));
    }

    #[test]
    fn test_node_list_iteration_is_restartable() {
        let list = keys(&["x", "y", "z"]);
        let first: Vec<_> = list.iter().map(|l| l.as_string().unwrap()).collect();
        let second: Vec<_> = (&list)
            .into_iter()
            .map(|l| l.as_string().unwrap())
            .collect();
        assert_eq!(first, vec!["x", "y", "z"]);
        assert_eq!(first, second);
        assert_eq!(list.get(1).unwrap().as_string().unwrap(), "y");
        assert!(list.get(3).is_none());
    }

    #[test]
    fn test_set_properties_last_value_wins() {
        let option = |k: &str, v: &str| {
            PropertyOption::new(
                Literal::string(k, Span::default()),
                Literal::string(v, Span::default()),
                Span::default(),
            )
        };
        let stmt = AlterCatalogSet::new(
            Span::default(),
            Identifier::simple("c", Span::default()),
            NodeList::new(
                vec![option("a", "1"), option("b", "2"), option("a", "3")],
                Span::default(),
            ),
        );
        let props = stmt.properties().unwrap();
        assert_eq!(props.len(), 2);
        assert_eq!(props["a"], "3");
        assert_eq!(props["b"], "2");
    }

    #[test]
    fn test_literal_accessors() {
        let lit = Literal::new(LiteralValue::Boolean(true), Span::default());
        assert!(lit.as_boolean().unwrap());
        assert!(matches!(
            lit.as_integer(),
            Err(AstError::TypeMismatch {
                expected: LiteralKind::Integer,
                actual: LiteralKind::Boolean
            })
        ));
        let null = Literal::new(LiteralValue::Null, Span::default());
        assert_eq!(null.kind(), LiteralKind::Null);
        assert!(null.as_string().is_err());
    }

    #[test]
    fn test_span_merge() {
        let a = Span::new(Location::new(1, 1, 0), Location::new(1, 6, 5));
        let b = Span::new(Location::new(1, 7, 6), Location::new(1, 14, 13));
        let merged = a.merge(b);
        assert_eq!(merged.start.offset, 0);
        assert_eq!(merged.end.offset, 13);
        assert_eq!(b.merge(a), merged);
    }
}
