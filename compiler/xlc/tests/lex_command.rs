// Test code uses unwrap/expect for clarity - panics provide good test failure messages
#![allow(clippy::unwrap_used, clippy::expect_used)]

//! End-to-end tests for `xl lex` against files on disk.

use std::io::Write as _;
use std::process::Command;

use pretty_assertions::assert_eq;
use tempfile::NamedTempFile;
use xl_lexer::{DanglingSeparator, LexErrorKind, LexerConfig, Termination};
use xlc::commands::{lex_file, LexOptions};
use xlc::CliError;

fn source_file(contents: &[u8]) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".x")
        .tempfile()
        .expect("create temp source");
    file.write_all(contents).expect("write temp source");
    file.flush().expect("flush temp source");
    file
}

fn run(file: &NamedTempFile, options: &LexOptions) -> (String, xlc::commands::LexSummary) {
    let path = file.path().to_str().unwrap();
    let mut out = Vec::new();
    let summary = lex_file(path, options, &mut out).expect("lex command failed");
    (String::from_utf8(out).unwrap(), summary)
}

fn no_listing() -> LexOptions {
    LexOptions {
        listing: false,
        ..LexOptions::default()
    }
}

// === Dump ===

#[test]
fn dump_then_listing() {
    let file = source_file(b"program {\n  int i\n}\n");
    let (out, summary) = run(&file, &LexOptions::default());

    assert_eq!(
        out.lines().collect::<Vec<_>>(),
        vec![
            "program     left: 1        right: 7        line: 1        Program",
            "{           left: 9        right: 9        line: 1        LeftBrace",
            "int         left: 3        right: 5        line: 2        IntType",
            "i           left: 7        right: 7        line: 2        Identifier",
            "}           left: 1        right: 1        line: 3        RightBrace",
            "  1: program {",
            "  2:   int i",
            "  3: }",
        ]
    );
    assert_eq!(summary.tokens, 5);
    assert!(summary.is_clean());
    assert!(summary.errors.is_empty());
}

#[test]
fn comments_are_dumped_as_nothing() {
    let file = source_file(b"// only a comment\nx // trailing\n");
    let (out, summary) = run(&file, &no_listing());
    assert_eq!(
        out,
        "x           left: 1        right: 1        line: 2        Identifier\n"
    );
    assert_eq!(summary.tokens, 1);
}

#[test]
fn literals_in_dump() {
    let file = source_file(b"12 3.5 12/25/2021");
    let (out, _) = run(&file, &no_listing());
    let kinds: Vec<&str> = out
        .lines()
        .map(|line| line.rsplit(' ').next().unwrap())
        .collect();
    assert_eq!(kinds, vec!["Integer", "NumberLiteral", "DateLiteral"]);
}

#[test]
fn empty_file() {
    let file = source_file(b"");
    let (out, summary) = run(&file, &LexOptions::default());
    assert_eq!(out, "");
    assert_eq!(summary.termination, Termination::Exhausted);
}

// === Errors ===

#[test]
fn illegal_character_banner_precedes_listing() {
    let file = source_file(b"a # b\n");
    let (out, summary) = run(&file, &LexOptions::default());

    assert_eq!(
        out.lines().collect::<Vec<_>>(),
        vec![
            "a           left: 1        right: 1        line: 1        Identifier",
            "******** illegal character: #",
            "  1: a # b",
        ]
    );
    assert_eq!(summary.termination, Termination::IllegalCharacter);
    assert!(!summary.is_clean());
}

#[test]
fn illegal_literal_banner() {
    let file = source_file(b"d = 3/4/202\n");
    let (out, summary) = run(&file, &no_listing());
    assert!(out.ends_with("******** illegal literal: 3/4/202\n"));
    assert_eq!(summary.tokens, 2);
    assert_eq!(summary.errors[0].kind, LexErrorKind::IllegalLiteral);
}

#[test]
fn reject_dangling_option_reaches_the_lexer() {
    let file = source_file(b"x = 10-y");
    let (_, split) = run(&file, &no_listing());
    assert!(split.is_clean());
    assert_eq!(split.tokens, 5);

    let options = LexOptions {
        config: LexerConfig {
            dangling_separator: DanglingSeparator::Reject,
            ..LexerConfig::default()
        },
        listing: false,
    };
    let (out, rejected) = run(&file, &options);
    assert_eq!(rejected.termination, Termination::IllegalLiteral);
    assert!(out.ends_with("******** illegal literal: 10-\n"));
}

#[test]
fn invalid_utf8_is_a_source_fault_and_still_listed() {
    let file = source_file(b"ok\n\xff\n");
    let (out, summary) = run(&file, &LexOptions::default());

    assert_eq!(summary.termination, Termination::SourceFault);
    assert_eq!(summary.errors[0].kind, LexErrorKind::SourceFault);
    let lines: Vec<_> = out.lines().collect();
    assert!(lines[0].starts_with("ok "));
    assert!(lines[1].starts_with("******** source read failed: "));
    assert_eq!(lines[2], "  1: ok");
    assert_eq!(lines[3], "  2: \u{FFFD}");
}

#[test]
fn missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.x");
    let path = path.to_str().unwrap();

    let err = lex_file(path, &LexOptions::default(), &mut Vec::new()).unwrap_err();
    assert!(matches!(&err, CliError::NotFound { path: p } if p == path));
    assert_eq!(err.to_string(), format!("cannot find file '{path}'"));
}

// === Binary ===

#[test]
fn binary_exit_status_reflects_lexical_errors() {
    let clean = source_file(b"x = 1\n");
    let status = Command::new(env!("CARGO_BIN_EXE_xl"))
        .args(["lex", clean.path().to_str().unwrap(), "--no-listing"])
        .output()
        .unwrap();
    assert!(status.status.success());
    assert_eq!(String::from_utf8(status.stdout).unwrap().lines().count(), 3);

    let dirty = source_file(b"x = @\n");
    let status = Command::new(env!("CARGO_BIN_EXE_xl"))
        .arg(dirty.path())
        .output()
        .unwrap();
    assert!(!status.status.success());
    let stdout = String::from_utf8(status.stdout).unwrap();
    assert!(stdout.contains("******** illegal character: @"));
    assert!(stdout.contains("  1: x = @"));
}

#[test]
fn binary_rejects_unknown_options() {
    let output = Command::new(env!("CARGO_BIN_EXE_xl"))
        .args(["lex", "prog.x", "--bogus"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("unknown option '--bogus'"));
    assert!(stderr.contains("Usage: xl lex"));
}
