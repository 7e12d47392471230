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

use mcdc::lex::{
    Literal, Token,
    scan::{ScanError, Scanner},
};

/// Drives the scanner the way a parser does: until [Token::End] or
/// [Token::None].
#[test]
fn parser_loop() {
    let mut scanner = Scanner::new("(a || B) && !c ^ D");
    let mut kinds = Vec::new();
    let mut literals = Vec::new();
    loop {
        let token = scanner.next_token();
        kinds.push(token.token);
        if let Some(literal) = token.literal() {
            literals.push(literal);
        }
        if token.is_terminal() {
            break;
        }
    }
    assert_eq!(
        kinds,
        vec![
            Token::BOpen,
            Token::Id,
            Token::Or,
            Token::Id,
            Token::BClose,
            Token::And,
            Token::Not,
            Token::Id,
            Token::Xor,
            Token::Id,
            Token::End,
        ]
    );
    assert_eq!(
        literals
            .iter()
            .map(|literal| (literal.variable(), literal.negated()))
            .collect::<Vec<_>>(),
        vec![(0, false), (1, true), (2, false), (3, true)]
    );
}

#[test]
fn parser_loop_stops_at_invalid_character() {
    let input = "a & 7 | b";
    let mut scanner = Scanner::new(input);
    let token = loop {
        let token = scanner.next_token();
        if token.is_terminal() {
            break token;
        }
    };
    assert_eq!(token.token, Token::None);
    assert_eq!(token.source_symbol, Some('7'));
    assert_eq!(scanner.rest(), " | b");
    assert_eq!(scanner.position(), 5);
}

#[test]
fn independent_scanners() {
    let inputs = ["ab", "a+b", "x*Y*z", "~~q", "1"];
    let handles = inputs
        .into_iter()
        .map(|input| std::thread::spawn(move || Scanner::tokenize(input)))
        .collect::<Vec<_>>();
    let results = handles
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .collect::<Vec<_>>();
    assert_eq!(results[0].as_ref().unwrap().len(), 3);
    assert_eq!(results[1].as_ref().unwrap().len(), 4);
    assert_eq!(results[2].as_ref().unwrap().len(), 6);
    assert_eq!(results[3].as_ref().unwrap().len(), 4);
    assert_eq!(
        results[4],
        Err(ScanError::UnexpectedChar {
            character: '1',
            offset: 0
        })
    );
}

#[test]
fn negated_literal_round_trip() {
    let tokens = Scanner::tokenize("Q").unwrap();
    let literal = tokens[0].literal().unwrap();
    assert_eq!(Some(literal), Literal::new(16, true));
    assert_eq!(literal.index(), tokens[0].variable_index);
    assert_eq!(literal.to_string(), "Q");
}
