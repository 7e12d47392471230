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

use std::fmt::{Display, Formatter, Result as FmtResult};

use enum_iterator::Sequence;
use serde::Serialize;

/// Number of distinct letters in each case.
///
/// Lowercase letters take variable indexes `0..LETTERS` and uppercase letters
/// take `LETTERS..2 * LETTERS`.
pub const LETTERS: u32 = 26;

/// The kind of a token.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Sequence, Serialize)]
pub enum Token {
    /// Invalid or uninitialized.
    ///
    /// The scanner produces this for any character that does not start some
    /// other token.
    #[default]
    None,

    /// End of input.
    End,

    /// A boolean variable, written as a single letter.
    Id,

    /// `|`, `||`, or `+`.
    Or,

    /// `^`.
    Xor,

    /// `&`, `&&`, or `*`.
    And,

    /// `!` or `~`.
    Not,

    /// `(`.
    BOpen,

    /// `)`.
    BClose,
}

impl Token {
    /// Returns the canonical spelling of this token, or its name for tokens
    /// without a fixed spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "NONE",
            Self::End => "END",
            Self::Id => "ID",
            Self::Or => "||",
            Self::Xor => "^",
            Self::And => "&&",
            Self::Not => "!",
            Self::BOpen => "(",
            Self::BClose => ")",
        }
    }

    /// Returns every spelling that scans as this token.
    ///
    /// Identifiers are spelled by letters and the other tokens without a
    /// fixed spelling have none, so for them this is empty.
    pub fn spellings(&self) -> &'static [&'static str] {
        match self {
            Self::None | Self::End | Self::Id => &[],
            Self::Or => &["|", "||", "+"],
            Self::Xor => &["^"],
            Self::And => &["&", "&&", "*"],
            Self::Not => &["!", "~"],
            Self::BOpen => &["("],
            Self::BClose => &[")"],
        }
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}

/// A boolean variable or its negation.
///
/// The variable is always in `0..LETTERS`, so every [Literal] has a letter
/// and a variable index.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Literal {
    variable: u8,
    negated: bool,
}

impl Literal {
    /// Returns the literal for `variable`, negated if `negated` is true.
    /// Returns `None` unless `variable` is in `0..LETTERS`.
    pub fn new(variable: u32, negated: bool) -> Option<Self> {
        if variable < LETTERS {
            Some(Self {
                variable: variable as u8,
                negated,
            })
        } else {
            None
        }
    }

    /// Decodes the variable index of an [Token::Id].  Indexes
    /// `LETTERS..2 * LETTERS` are the negations of `0..LETTERS`.  Returns
    /// `None` if `index` is out of range.
    pub fn from_index(index: u32) -> Option<Self> {
        match index.checked_sub(LETTERS) {
            None => Self::new(index, false),
            Some(variable) => Self::new(variable, true),
        }
    }

    /// Returns the variable, in `0..LETTERS`.
    pub fn variable(&self) -> u32 {
        self.variable.into()
    }

    /// Returns true if the variable is negated.
    pub fn negated(&self) -> bool {
        self.negated
    }

    /// Returns the variable index that encodes this literal.
    pub fn index(&self) -> u32 {
        if self.negated {
            self.variable() + LETTERS
        } else {
            self.variable()
        }
    }

    /// Returns the letter that spells this literal: lowercase for a plain
    /// variable, uppercase for a negated one.
    pub fn letter(&self) -> char {
        let base = if self.negated { b'A' } else { b'a' };
        char::from(base + self.variable)
    }
}

impl Display for Literal {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.letter())
    }
}

/// A token along with its attributes, as produced by
/// [Scanner](super::scan::Scanner).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct TokenWithAttribute {
    /// The kind of token.
    pub token: Token,

    /// The character that started the token, or `None` for [Token::End].
    pub source_symbol: Option<char>,

    /// For [Token::Id], the variable index:
    ///
    /// - `0..26` for lowercase `a` through `z`.
    ///
    /// - `26..52` for uppercase `A` through `Z`, which stand for the negation
    ///   of the corresponding lowercase variable.
    ///
    /// Always 0 for other tokens.
    pub variable_index: u32,
}

impl TokenWithAttribute {
    /// Returns a token of kind `token` triggered by `source_symbol`.
    pub fn new(token: Token, source_symbol: char) -> Self {
        Self {
            token,
            source_symbol: Some(source_symbol),
            variable_index: 0,
        }
    }

    /// Returns an end-of-input token.
    pub fn end() -> Self {
        Self {
            token: Token::End,
            source_symbol: None,
            variable_index: 0,
        }
    }

    /// Returns an identifier token for `letter` with the given
    /// `variable_index`.
    pub fn id(letter: char, variable_index: u32) -> Self {
        Self {
            token: Token::Id,
            source_symbol: Some(letter),
            variable_index,
        }
    }

    /// Decodes the literal for an identifier token.  Returns `None` for other
    /// kinds of tokens.
    pub fn literal(&self) -> Option<Literal> {
        match self.token {
            Token::Id => Literal::from_index(self.variable_index),
            _ => None,
        }
    }

    /// Returns true if a parser should stop reading after this token, that
    /// is, for [Token::End] and [Token::None].
    pub fn is_terminal(&self) -> bool {
        matches!(self.token, Token::End | Token::None)
    }
}

impl Display for TokenWithAttribute {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match (self.token, self.source_symbol) {
            (Token::Id, Some(c)) => write!(f, "ID({c}={})", self.variable_index),
            (Token::None, Some(c)) => write!(f, "NONE({c:?})"),
            (token, _) => write!(f, "{token}"),
        }
    }
}
