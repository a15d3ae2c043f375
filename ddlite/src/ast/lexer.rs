// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Lexer for catalog DDL statements
//!
//! Every token parser must either consume input or return an error. The main loop
//! enforces this and reports a stuck parser instead of spinning forever.
//!
//! Parser order in [`token`] matters: decimals before integers, and quoted forms
//! before bare words.

use nom::{
    branch::alt,
    bytes::complete::{tag, take_until, take_while, take_while1},
    character::complete::{alpha1, char, digit1},
    combinator::{map, map_res, opt, recognize},
    sequence::{pair, tuple},
    IResult,
};
use std::fmt;
use thiserror::Error;

use super::ast::{Location, Span};

/// Token types for catalog DDL
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    // Keywords
    Alter,
    Catalog,
    Set,
    Reset,
    Rename,
    To,
    Comment,
    True,
    False,
    Null,

    // Literals
    String(String),
    Integer(i64),
    Decimal(String),

    // Identifiers
    Identifier(String),
    QuotedIdentifier(String), // `delimited identifier`

    // Delimiters
    LeftParen,  // (
    RightParen, // )
    Comma,      // ,
    Equal,      // =
    Dot,        // .
    Semicolon,  // ;

    // Whitespace and comments
    Whitespace,
    LineComment,
    BlockComment,

    EOF,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Alter => write!(f, "ALTER"),
            Token::Catalog => write!(f, "CATALOG"),
            Token::Set => write!(f, "SET"),
            Token::Reset => write!(f, "RESET"),
            Token::Rename => write!(f, "RENAME"),
            Token::To => write!(f, "TO"),
            Token::Comment => write!(f, "COMMENT"),
            Token::True => write!(f, "TRUE"),
            Token::False => write!(f, "FALSE"),
            Token::Null => write!(f, "NULL"),
            Token::String(s) => write!(f, "'{}'", s.replace('\'', "''")),
            Token::Integer(n) => write!(f, "{}", n),
            Token::Decimal(text) => write!(f, "{}", text),
            Token::Identifier(name) => write!(f, "{}", name),
            Token::QuotedIdentifier(name) => write!(f, "`{}`", name.replace('`', "``")),
            Token::LeftParen => write!(f, "("),
            Token::RightParen => write!(f, ")"),
            Token::Comma => write!(f, ","),
            Token::Equal => write!(f, "="),
            Token::Dot => write!(f, "."),
            Token::Semicolon => write!(f, ";"),
            Token::Whitespace => write!(f, "whitespace"),
            Token::LineComment | Token::BlockComment => write!(f, "comment"),
            Token::EOF => write!(f, "end of input"),
        }
    }
}

/// Token with the source range it was read from
#[derive(Debug, Clone, PartialEq)]
pub struct SpannedToken {
    pub token: Token,
    pub span: Span,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LexerError {
    #[error("Unterminated string literal starting at {0}")]
    UnterminatedString(Location),

    #[error("Unterminated quoted identifier starting at {0}")]
    UnterminatedIdentifier(Location),

    #[error("Unterminated block comment starting at {0}")]
    UnterminatedComment(Location),

    #[error("Unexpected character '{ch}' at {location}")]
    UnexpectedCharacter { ch: char, location: Location },

    #[error("Parser function not consuming input at {0}")]
    Stuck(Location),
}

/// Keyword token for a bare word, case-insensitive
pub fn keyword(word: &str) -> Option<Token> {
    let token = match word.to_ascii_uppercase().as_str() {
        "ALTER" => Token::Alter,
        "CATALOG" => Token::Catalog,
        "SET" => Token::Set,
        "RESET" => Token::Reset,
        "RENAME" => Token::Rename,
        "TO" => Token::To,
        "COMMENT" => Token::Comment,
        "TRUE" => Token::True,
        "FALSE" => Token::False,
        "NULL" => Token::Null,
        _ => return None,
    };
    Some(token)
}

pub fn is_keyword(word: &str) -> bool {
    keyword(word).is_some()
}

/// Whether `name` lexes as a single bare identifier word
pub fn is_regular_identifier(name: &str) -> bool {
    matches!(identifier(name), Ok((rest, _)) if rest.is_empty())
}

/// Lexer state
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    input: &'a str,
    line: usize,
    column: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            line: 1,
            column: 1,
        }
    }

    fn location(&self, remaining: &str) -> Location {
        Location::new(self.line, self.column, self.input.len() - remaining.len())
    }

    fn advance(&mut self, consumed: &str) {
        for c in consumed.chars() {
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
    }

    pub fn tokenize(mut self) -> Result<Vec<SpannedToken>, LexerError> {
        let mut remaining = self.input;
        let mut tokens = Vec::new();

        while !remaining.is_empty() {
            let start = self.location(remaining);
            match token(remaining) {
                Ok((next_remaining, token)) => {
                    if next_remaining.len() == remaining.len() {
                        return Err(LexerError::Stuck(start));
                    }
                    let consumed = &remaining[..remaining.len() - next_remaining.len()];
                    self.advance(consumed);
                    remaining = next_remaining;

                    if !matches!(
                        token,
                        Token::Whitespace | Token::LineComment | Token::BlockComment
                    ) {
                        let span = Span::new(start, self.location(remaining));
                        tokens.push(SpannedToken { token, span });
                    }
                }
                Err(_) => return Err(classify_failure(remaining, start)),
            }
        }

        let end = self.location(remaining);
        tokens.push(SpannedToken {
            token: Token::EOF,
            span: Span::new(end, end),
        });
        Ok(tokens)
    }
}

fn classify_failure(remaining: &str, location: Location) -> LexerError {
    if remaining.starts_with('\'') {
        LexerError::UnterminatedString(location)
    } else if remaining.starts_with('`') {
        LexerError::UnterminatedIdentifier(location)
    } else if remaining.starts_with("/*") {
        LexerError::UnterminatedComment(location)
    } else {
        LexerError::UnexpectedCharacter {
            ch: remaining.chars().next().unwrap_or('\0'),
            location,
        }
    }
}

/// Parse a single token
fn token(input: &str) -> IResult<&str, Token> {
    alt((
        whitespace,
        comment,
        map(string_literal, Token::String),
        map(quoted_identifier, Token::QuotedIdentifier),
        map(decimal_literal, |s| Token::Decimal(s.to_string())),
        map(integer_literal, Token::Integer),
        map(identifier, |word| {
            keyword(word).unwrap_or_else(|| Token::Identifier(word.to_string()))
        }),
        punctuation,
    ))(input)
}

fn whitespace(input: &str) -> IResult<&str, Token> {
    map(take_while1(|c: char| c.is_whitespace()), |_| Token::Whitespace)(input)
}

fn comment(input: &str) -> IResult<&str, Token> {
    alt((
        map(pair(tag("--"), take_while(|c| c != '\n')), |_| {
            Token::LineComment
        }),
        map(tuple((tag("/*"), take_until("*/"), tag("*/"))), |_| {
            Token::BlockComment
        }),
    ))(input)
}

fn punctuation(input: &str) -> IResult<&str, Token> {
    alt((
        map(char('('), |_| Token::LeftParen),
        map(char(')'), |_| Token::RightParen),
        map(char(','), |_| Token::Comma),
        map(char('='), |_| Token::Equal),
        map(char('.'), |_| Token::Dot),
        map(char(';'), |_| Token::Semicolon),
    ))(input)
}

/// Single-quoted string, `''` escapes a quote
fn string_literal(input: &str) -> IResult<&str, String> {
    map(
        tuple((char('\''), escaped_quote_content(b'\''), char('\''))),
        |(_, content, _): (char, &str, char)| content.replace("''", "'"),
    )(input)
}

/// Backtick-delimited identifier, ``` `` ``` escapes a backtick
fn quoted_identifier(input: &str) -> IResult<&str, String> {
    map(
        tuple((char('`'), escaped_quote_content(b'`'), char('`'))),
        |(_, content, _): (char, &str, char)| content.replace("``", "`"),
    )(input)
}

/// Content up to the closing quote, treating a doubled quote as part of the content
fn escaped_quote_content(quote: u8) -> impl Fn(&str) -> IResult<&str, &str> {
    move |input: &str| {
        let bytes = input.as_bytes();
        let mut pos = 0;

        while pos < bytes.len() {
            if bytes[pos] == quote {
                if pos + 1 < bytes.len() && bytes[pos + 1] == quote {
                    pos += 2;
                } else {
                    break;
                }
            } else {
                pos += 1;
            }
        }

        Ok((&input[pos..], &input[..pos]))
    }
}

fn integer_literal(input: &str) -> IResult<&str, i64> {
    map_res(recognize(pair(opt(char('-')), digit1)), |s: &str| {
        s.parse::<i64>()
    })(input)
}

fn decimal_literal(input: &str) -> IResult<&str, &str> {
    recognize(tuple((opt(char('-')), digit1, char('.'), digit1)))(input)
}

fn identifier(input: &str) -> IResult<&str, &str> {
    recognize(pair(
        alt((alpha1, tag("_"))),
        take_while(|c: char| c.is_ascii_alphanumeric() || c == '_' || c == '$'),
    ))(input)
}

/// Public function to tokenize input
pub fn tokenize(input: &str) -> Result<Vec<SpannedToken>, LexerError> {
    Lexer::new(input).tokenize()
}
