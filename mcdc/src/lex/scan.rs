// MCDC - test case generation for boolean expressions.
// Copyright (C) 2025 Free Software Foundation, Inc.
//
// This program is free software: you can redistribute it and/or modify it under
// the terms of the GNU General Public License as published by the Free Software
// Foundation, either version 3 of the License, or (at your option) any later
// version.
//
// This program is distributed in the hope that it will be useful, but WITHOUT
// ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS
// FOR A PARTICULAR PURPOSE.  See the GNU General Public License for more
// details.
//
// You should have received a copy of the GNU General Public License along with
// this program.  If not, see <http://www.gnu.org/licenses/>.

//! Scanning boolean expressions into tokens.
//!
//! [Scanner] accepts a string and outputs a stream of
//! [TokenWithAttribute]s, one per call to [Scanner::next_token], ending with
//! [Token::End].

use std::{iter::FusedIterator, ops::Range};

use log::trace;
use thiserror::Error as ThisError;

use super::token::{LETTERS, Token, TokenWithAttribute};

/// Error returned by [Scanner::tokenize].
#[derive(ThisError, Clone, Debug, PartialEq, Eq)]
pub enum ScanError {
    /// Unexpected character.
    #[error("Unexpected character {character:?} at offset {offset}.")]
    UnexpectedChar {
        /// The character.
        character: char,
        /// Byte offset of the character in the input.
        offset: usize,
    },
}

/// A token along with the part of the input that it came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScanToken {
    /// The token.
    pub token: TokenWithAttribute,

    /// Byte range of the token in the input.  For [Token::End], this is an
    /// empty range at the end of the input.
    pub span: Range<usize>,
}

impl ScanToken {
    /// Returns the error that this token represents, if it is a
    /// [Token::None].
    pub fn error(&self) -> Option<ScanError> {
        match (self.token.token, self.token.source_symbol) {
            (Token::None, Some(character)) => Some(ScanError::UnexpectedChar {
                character,
                offset: self.span.start,
            }),
            _ => None,
        }
    }
}

/// Returns true for the characters that C's `isspace` accepts in the "C"
/// locale.  This is [char::is_ascii_whitespace] plus vertical tab.
fn is_space(c: char) -> bool {
    c.is_ascii_whitespace() || c == '\x0b'
}

/// Hand-written lexical analyzer for boolean expressions.
///
/// Each call to [Scanner::next_token] skips white space and then consumes
/// exactly one token.  Once the input is exhausted, every further call returns
/// [Token::End] without doing anything else.
///
/// The scanner never fails.  A character that cannot start a token is
/// consumed and returned as [Token::None], and the caller decides whether
/// that is fatal.
///
/// The scanner knows nothing about grammar.  In particular, it does not
/// insert [Token::And] between adjacent operands such as `ab` or `(a)(b)`,
/// and it does not insert [Token::Not] before an uppercase letter.  The
/// parser is responsible for treating juxtaposition as AND and for reading a
/// variable index of [LETTERS] or more as a negated variable.
#[derive(Clone, Debug)]
pub struct Scanner<'a> {
    input: &'a str,

    /// Byte offset into `input` of the next character to consume.
    position: usize,
}

impl<'a> Scanner<'a> {
    /// Creates a new [Scanner] for `input`, positioned at its beginning.
    pub fn new(input: &'a str) -> Self {
        Self { input, position: 0 }
    }

    /// Returns the entire input.
    pub fn source(&self) -> &'a str {
        self.input
    }

    /// Returns the byte offset of the next character to be consumed.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the input that has not been consumed yet.
    pub fn rest(&self) -> &'a str {
        &self.input[self.position..]
    }

    /// Consumes and returns the next token.
    pub fn next_token(&mut self) -> TokenWithAttribute {
        self.scan_token().token
    }

    /// Consumes and returns the next token, along with its location in the
    /// input.
    pub fn scan_token(&mut self) -> ScanToken {
        let rest = self.rest();
        let rest = rest.trim_start_matches(is_space);
        self.position = self.input.len() - rest.len();
        let start = self.position;

        let mut chars = rest.chars();
        let Some(c) = chars.next() else {
            return ScanToken {
                token: TokenWithAttribute::end(),
                span: start..start,
            };
        };
        let lookahead = chars.next();

        let (token, len) = match c {
            'a'..='z' => (TokenWithAttribute::id(c, c as u32 - 'a' as u32), 1),
            'A'..='Z' => (
                TokenWithAttribute::id(c, LETTERS + (c as u32 - 'A' as u32)),
                1,
            ),
            '|' if lookahead == Some('|') => (TokenWithAttribute::new(Token::Or, c), 2),
            '|' | '+' => (TokenWithAttribute::new(Token::Or, c), 1),
            '^' => (TokenWithAttribute::new(Token::Xor, c), 1),
            '&' if lookahead == Some('&') => (TokenWithAttribute::new(Token::And, c), 2),
            '&' | '*' => (TokenWithAttribute::new(Token::And, c), 1),
            '!' | '~' => (TokenWithAttribute::new(Token::Not, c), 1),
            '(' => (TokenWithAttribute::new(Token::BOpen, c), 1),
            ')' => (TokenWithAttribute::new(Token::BClose, c), 1),
            _ => (TokenWithAttribute::new(Token::None, c), c.len_utf8()),
        };
        self.position += len;
        trace!("scanned {token} at offset {start}");
        ScanToken {
            token,
            span: start..self.position,
        }
    }

    /// Scans all of `input`.  Returns its tokens, including the final
    /// [Token::End], or an error for the first character that cannot start a
    /// token.
    pub fn tokenize(input: &str) -> Result<Vec<TokenWithAttribute>, ScanError> {
        let mut scanner = Scanner::new(input);
        let mut tokens = Vec::new();
        loop {
            let scan_token = scanner.scan_token();
            if let Some(error) = scan_token.error() {
                return Err(error);
            }
            tokens.push(scan_token.token);
            if scan_token.token.token == Token::End {
                return Ok(tokens);
            }
        }
    }
}

/// Iterates over the tokens in the input, including [Token::None] but not
/// the final [Token::End].
impl Iterator for Scanner<'_> {
    type Item = ScanToken;

    fn next(&mut self) -> Option<Self::Item> {
        let scan_token = self.scan_token();
        (scan_token.token.token != Token::End).then_some(scan_token)
    }
}

impl FusedIterator for Scanner<'_> {}
