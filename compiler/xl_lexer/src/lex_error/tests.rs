use super::*;
use std::io;

#[test]
fn illegal_character_construction() {
    let err = LexError::illegal_character("#", 3, 7);
    assert_eq!(err.kind, LexErrorKind::IllegalCharacter);
    assert_eq!(err.text, "#");
    assert_eq!((err.line, err.column), (3, 7));
}

#[test]
fn display_includes_location() {
    let err = LexError::illegal_literal("3/4/202", 1, 5);
    assert_eq!(
        err.to_string(),
        "illegal literal: 3/4/202 (line 1, column 5)"
    );
}

#[test]
fn banner_matches_driver_format() {
    assert_eq!(
        LexError::illegal_character("@", 1, 1).banner(),
        "******** illegal character: @"
    );
    assert_eq!(
        LexError::illegal_literal("1/2/345", 1, 1).banner(),
        "******** illegal literal: 1/2/345"
    );
}

#[test]
fn source_fault_keeps_the_cause() {
    let cause = SourceError::Read {
        line: 4,
        column: 2,
        source: io::Error::new(io::ErrorKind::InvalidData, "bad utf-8"),
    };
    let err = LexError::source_fault(&cause, 3, 9);
    assert_eq!(err.kind, LexErrorKind::SourceFault);
    assert!(err.text.contains("bad utf-8"), "{}", err.text);
    assert!(err.text.contains("line 4"), "{}", err.text);
}

#[test]
fn error_equality() {
    let a = LexError::illegal_character("#", 1, 1);
    let b = LexError::illegal_character("#", 1, 1);
    let c = LexError::illegal_literal("#", 1, 1);
    assert_eq!(a, b);
    assert_ne!(a, c);
}
