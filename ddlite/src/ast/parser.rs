// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Parser for catalog DDL using nom parsers over the token stream
//!
//! Grammar:
//!
//! ```text
//! statement   ::= ALTER CATALOG identifier suffix [;]
//! suffix      ::= SET ( [option {, option}] )
//!               | RESET ( [literal {, literal}] )
//!               | RENAME TO identifier
//!               | COMMENT literal
//! option      ::= literal = literal
//! identifier  ::= name {. name}
//! ```
//!
//! The grammar admits any literal in key and value positions. Accessors such as
//! [`AlterCatalogReset::reset_keys`] and the validator report non-string entries.

use log::debug;
use nom::{
    combinator::map,
    multi::{separated_list0, separated_list1},
    sequence::{pair, preceded, tuple},
    IResult,
};

use super::ast::*;
use super::lexer::{tokenize, LexerError, SpannedToken, Token};
use super::pretty_printer::pretty_print_ast;

type Tokens<'a> = &'a [SpannedToken];

/// Parser error type
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParserError {
    #[error("Lexer error: {0}")]
    LexerError(#[from] LexerError),
    #[error("Unexpected token {found} at {location}")]
    UnexpectedToken { found: Token, location: Location },
    #[error("Unexpected end of input at {0}")]
    UnexpectedEof(Location),
    #[error("Empty input: expected an ALTER CATALOG statement")]
    EmptyInput,
}

/// Parse exactly one statement, optionally terminated by `;`
pub fn parse_statement(input: &str) -> Result<AlterCatalogStatement, ParserError> {
    let tokens = tokenize(input)?;
    if is_at_end(&tokens) {
        return Err(ParserError::EmptyInput);
    }

    let (rest, statement) = alter_catalog_statement(&tokens).map_err(to_parser_error)?;
    let rest = skip_token(rest, &Token::Semicolon);
    expect_end(rest)?;

    debug!(
        "Successfully parsed ALTER CATALOG {} statement into AST",
        statement.kind()
    );
    pretty_print_ast(&statement);
    Ok(statement)
}

/// Parse a `;`-separated script of statements
pub fn parse_statements(input: &str) -> Result<Vec<AlterCatalogStatement>, ParserError> {
    let tokens = tokenize(input)?;
    let mut rest: Tokens = &tokens;
    let mut statements = Vec::new();

    loop {
        while let [SpannedToken {
            token: Token::Semicolon,
            ..
        }, tail @ ..] = rest
        {
            rest = tail;
        }
        if is_at_end(rest) {
            break;
        }

        let (tail, statement) = alter_catalog_statement(rest).map_err(to_parser_error)?;
        match tail.first() {
            Some(SpannedToken {
                token: Token::Semicolon | Token::EOF,
                ..
            })
            | None => {}
            Some(other) => return Err(unexpected(other)),
        }
        debug!(
            "Parsed statement {} of script: ALTER CATALOG {}",
            statements.len() + 1,
            statement.kind()
        );
        pretty_print_ast(&statement);
        statements.push(statement);
        rest = tail;
    }

    if statements.is_empty() {
        return Err(ParserError::EmptyInput);
    }
    Ok(statements)
}

fn is_at_end(tokens: Tokens) -> bool {
    matches!(
        tokens.first(),
        None | Some(SpannedToken {
            token: Token::EOF,
            ..
        })
    )
}

fn skip_token<'a>(tokens: Tokens<'a>, expected: &Token) -> Tokens<'a> {
    match tokens.split_first() {
        Some((first, rest)) if &first.token == expected => rest,
        _ => tokens,
    }
}

fn expect_end(tokens: Tokens) -> Result<(), ParserError> {
    match tokens.first() {
        None
        | Some(SpannedToken {
            token: Token::EOF,
            ..
        }) => Ok(()),
        Some(other) => Err(unexpected(other)),
    }
}

fn unexpected(token: &SpannedToken) -> ParserError {
    match token.token {
        Token::EOF => ParserError::UnexpectedEof(token.span.start),
        _ => ParserError::UnexpectedToken {
            found: token.token.clone(),
            location: token.span.start,
        },
    }
}

fn to_parser_error(err: nom::Err<nom::error::Error<Tokens>>) -> ParserError {
    match err {
        nom::Err::Error(e) | nom::Err::Failure(e) => match e.input.first() {
            Some(token) => unexpected(token),
            None => ParserError::UnexpectedEof(Location::default()),
        },
        nom::Err::Incomplete(_) => ParserError::UnexpectedEof(Location::default()),
    }
}

fn error<T>(tokens: Tokens) -> IResult<Tokens, T> {
    Err(nom::Err::Error(nom::error::Error::new(
        tokens,
        nom::error::ErrorKind::Tag,
    )))
}

/// Match one token by variant, returning its span
fn expect_token(expected: Token) -> impl Fn(Tokens) -> IResult<Tokens, Span> {
    move |tokens: Tokens| match tokens.split_first() {
        Some((first, rest))
            if std::mem::discriminant(&first.token) == std::mem::discriminant(&expected) =>
        {
            Ok((rest, first.span))
        }
        _ => error(tokens),
    }
}

/// Parse ALTER CATALOG statement
fn alter_catalog_statement(tokens: Tokens) -> IResult<Tokens, AlterCatalogStatement> {
    let (rest, (alter, _, catalog_name)) = tuple((
        expect_token(Token::Alter),
        expect_token(Token::Catalog),
        compound_identifier,
    ))(tokens)?;

    match rest.first().map(|t| &t.token) {
        Some(Token::Set) => {
            let (rest, list) = set_suffix(rest)?;
            let span = alter.merge(list.span());
            let stmt = AlterCatalogSet::new(span, catalog_name, list);
            Ok((rest, AlterCatalogStatement::Set(stmt)))
        }
        Some(Token::Reset) => {
            let (rest, list) = reset_suffix(rest)?;
            let span = alter.merge(list.span());
            let stmt = AlterCatalogReset::new(span, catalog_name, list);
            Ok((rest, AlterCatalogStatement::Reset(stmt)))
        }
        Some(Token::Rename) => {
            let (rest, new_name) = rename_suffix(rest)?;
            let span = alter.merge(new_name.span());
            let stmt = AlterCatalogRename::new(span, catalog_name, new_name);
            Ok((rest, AlterCatalogStatement::Rename(stmt)))
        }
        Some(Token::Comment) => {
            let (rest, comment) = comment_suffix(rest)?;
            let span = alter.merge(comment.span());
            let stmt = AlterCatalogComment::new(span, catalog_name, comment);
            Ok((rest, AlterCatalogStatement::Comment(stmt)))
        }
        _ => error(rest),
    }
}

/// Parse SET ('key' = 'value', ...)
fn set_suffix(tokens: Tokens) -> IResult<Tokens, NodeList<PropertyOption>> {
    preceded(expect_token(Token::Set), parenthesized_list(property_option))(tokens)
}

/// Parse RESET ('key', ...)
fn reset_suffix(tokens: Tokens) -> IResult<Tokens, NodeList<Literal>> {
    preceded(expect_token(Token::Reset), parenthesized_list(literal))(tokens)
}

fn rename_suffix(tokens: Tokens) -> IResult<Tokens, Identifier> {
    preceded(
        pair(expect_token(Token::Rename), expect_token(Token::To)),
        compound_identifier,
    )(tokens)
}

fn comment_suffix(tokens: Tokens) -> IResult<Tokens, Literal> {
    preceded(expect_token(Token::Comment), literal)(tokens)
}

/// `( [item {, item}] )` as a node list spanning both parentheses
fn parenthesized_list<'a, T, F>(item: F) -> impl FnMut(Tokens<'a>) -> IResult<Tokens<'a>, NodeList<T>>
where
    F: FnMut(Tokens<'a>) -> IResult<Tokens<'a>, T>,
{
    map(
        tuple((
            expect_token(Token::LeftParen),
            separated_list0(expect_token(Token::Comma), item),
            expect_token(Token::RightParen),
        )),
        |(open, items, close)| NodeList::new(items, open.merge(close)),
    )
}

fn property_option(tokens: Tokens) -> IResult<Tokens, PropertyOption> {
    map(
        tuple((literal, expect_token(Token::Equal), literal)),
        |(key, _, value)| {
            let span = key.span().merge(value.span());
            PropertyOption::new(key, value, span)
        },
    )(tokens)
}

/// Dot-separated name parts
fn compound_identifier(tokens: Tokens) -> IResult<Tokens, Identifier> {
    map(
        separated_list1(expect_token(Token::Dot), identifier_part),
        |parts: Vec<(String, Span)>| {
            let span = parts
                .iter()
                .map(|(_, span)| *span)
                .reduce(Span::merge)
                .unwrap_or_default();
            Identifier::new(parts.into_iter().map(|(name, _)| name).collect(), span)
        },
    )(tokens)
}

fn identifier_part(tokens: Tokens) -> IResult<Tokens, (String, Span)> {
    match tokens.split_first() {
        Some((
            SpannedToken {
                token: Token::Identifier(name) | Token::QuotedIdentifier(name),
                span,
            },
            rest,
        )) => Ok((rest, (name.clone(), *span))),
        _ => error(tokens),
    }
}

/// Parse literals
fn literal(tokens: Tokens) -> IResult<Tokens, Literal> {
    let Some((first, rest)) = tokens.split_first() else {
        return error(tokens);
    };
    let value = match &first.token {
        Token::String(s) => LiteralValue::String(s.clone()),
        Token::Integer(n) => LiteralValue::Integer(*n),
        Token::Decimal(text) => LiteralValue::Decimal(text.clone()),
        Token::True => LiteralValue::Boolean(true),
        Token::False => LiteralValue::Boolean(false),
        Token::Null => LiteralValue::Null,
        _ => return error(tokens),
    };
    Ok((rest, Literal::new(value, first.span)))
}
