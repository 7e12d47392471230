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

//! Lexical analysis for boolean expressions.
//!
//! A boolean expression is made of:
//!
//! 1. Boolean variables, each written as one Latin letter.  A lowercase letter
//!    is the variable itself and the same letter in uppercase is its
//!    negation, so `A` means the same as `!a`.
//!
//! 2. Operators: `|`, `||`, or `+` for OR; `^` for XOR; `&`, `&&`, or `*` for
//!    AND; `!` or `~` for NOT; and `(` and `)` for grouping.
//!
//! 3. White space, which is ignored between tokens but may not appear inside
//!    `||` or `&&`.
//!
//! The [scan] module turns a string into [Token]s.  Grammar is up to the
//! parser, including the rule that juxtaposition, as in `ab` or `(a)(b)`,
//! means AND.

// Warn about missing docs, but not for items declared with `#[cfg(test)]`.
#![cfg_attr(not(test), warn(missing_docs))]

pub mod scan;
mod token;
pub use token::{LETTERS, Literal, Token, TokenWithAttribute};
