#![allow(clippy::unwrap_used, reason = "tests use unwrap for brevity")]

use super::*;
use crate::SymbolTable;
use std::collections::HashSet;

#[test]
fn token_exposes_symbol_data() {
    let table = SymbolTable::new();
    let tok = Token::new(3, 5, 1, table.intern("foo", TokenKind::Identifier));
    assert_eq!(tok.left(), 3);
    assert_eq!(tok.right(), 5);
    assert_eq!(tok.line(), 1);
    assert_eq!(tok.text(), "foo");
    assert_eq!(tok.kind(), TokenKind::Identifier);
    assert!(!tok.is_eof());
}

#[test]
fn tokens_share_the_symbol() {
    let table = SymbolTable::new();
    let a = Token::new(1, 1, 1, table.intern("x", TokenKind::Identifier));
    let b = Token::new(5, 5, 2, table.intern("x", TokenKind::Identifier));
    assert!(Symbol::ptr_eq(a.symbol(), b.symbol()));
    assert_ne!(a, b);
}

#[test]
fn eof_token() {
    let table = SymbolTable::new();
    let tok = Token::new(0, 0, 0, table.eof());
    assert!(tok.is_eof());
    assert_eq!(tok.text(), "");
}

#[test]
fn debug_and_display() {
    let table = SymbolTable::new();
    let tok = Token::new(4, 5, 2, table.intern("<=", TokenKind::BogusToken));
    assert_eq!(format!("{tok:?}"), "LessEqual \"<=\" @ 2:4-5");
    assert_eq!(tok.to_string(), "<=");
}

// === Kind tables ===

#[test]
fn every_fixed_kind_has_a_unique_spelling() {
    let mut seen = HashSet::new();
    for &kind in TokenKind::RESERVED_WORDS.iter().chain(TokenKind::OPERATORS) {
        let spelling = kind.spelling().unwrap();
        assert!(seen.insert(spelling), "duplicate spelling {spelling:?}");
    }
}

#[test]
fn open_classes_have_no_spelling() {
    for kind in [
        TokenKind::Identifier,
        TokenKind::Integer,
        TokenKind::NumberLiteral,
        TokenKind::DateLiteral,
        TokenKind::BogusToken,
        TokenKind::Eof,
    ] {
        assert_eq!(kind.spelling(), None, "{kind:?}");
    }
}

#[test]
fn reserved_words_and_operators_are_disjoint() {
    for &kind in TokenKind::RESERVED_WORDS {
        assert!(!TokenKind::OPERATORS.contains(&kind), "{kind:?}");
    }
}

#[test]
fn operator_spellings_are_one_or_two_chars() {
    for &kind in TokenKind::OPERATORS {
        let len = kind.spelling().unwrap().chars().count();
        assert!((1..=2).contains(&len), "{kind:?}");
    }
}
