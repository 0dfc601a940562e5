#![allow(clippy::unwrap_used, reason = "tests use unwrap for brevity")]

use super::*;

#[test]
fn single_character_operators() {
    assert_eq!(classify("<"), TokenKind::Less);
    assert_eq!(classify("="), TokenKind::Assign);
    assert_eq!(classify("/"), TokenKind::Divide);
    assert_eq!(classify("."), TokenKind::Dot);
    assert_eq!(classify("{"), TokenKind::LeftBrace);
}

#[test]
fn two_character_operators() {
    assert_eq!(classify("<="), TokenKind::LessEqual);
    assert_eq!(classify(">="), TokenKind::GreaterEqual);
    assert_eq!(classify("=="), TokenKind::Equal);
    assert_eq!(classify("!="), TokenKind::NotEqual);
    assert_eq!(classify("//"), TokenKind::Comment);
}

#[test]
fn unknown_spellings_are_bogus() {
    for text in ["", "#", "@", "<x", "=<", "((", "<==", "é", "\u{1F600}"] {
        assert_eq!(classify(text), TokenKind::BogusToken, "{text:?}");
    }
}

#[test]
fn agrees_with_token_kind_spellings() {
    for &kind in TokenKind::OPERATORS {
        let spelling = kind.spelling().unwrap();
        assert_eq!(classify(spelling), kind, "{spelling:?}");
    }
}

#[test]
fn reserved_words_are_not_operators() {
    for &kind in TokenKind::RESERVED_WORDS {
        assert_eq!(classify(kind.spelling().unwrap()), TokenKind::BogusToken);
    }
}
