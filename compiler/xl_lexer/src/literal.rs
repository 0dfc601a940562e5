//! Shape classification for digit-led literals.
//!
//! A literal candidate is the longest run of input that could still belong
//! to one literal:
//!
//! ```text
//! candidate = D+ ( '.' D* | SEP D* ( SEP D* )? )?      SEP = '/' | '-'
//! ```
//!
//! [`candidate`] gathers it by peeking (nothing is consumed), then
//! [`classify`] decides how much of it becomes the token and with which
//! kind:
//!
//! | Shape                | Kind                                      |
//! |----------------------|-------------------------------------------|
//! | `D+`                 | `Integer`                                 |
//! | `D+ . D+`            | `NumberLiteral`                           |
//! | `DD? S DD? S DD?`    | `DateLiteral` (2-digit year)              |
//! | `DD? S DD? S DDDD`   | `DateLiteral` (4-digit year)              |
//! | other three-group    | illegal literal                           |
//! | dangling separator   | per [`DanglingSeparator`]                 |
//!
//! Literal text is never converted to a value here.

use xl_ir::TokenKind;

use crate::{DanglingSeparator, LexerConfig};

/// How much of a candidate to consume, and as what.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum LiteralClass {
    /// Consume `len` characters as a token of `kind`.
    Accept { len: usize, kind: TokenKind },
    /// Consume `len` characters and report them as an illegal literal.
    Illegal { len: usize },
}

#[inline]
fn is_date_separator(c: char) -> bool {
    c == '/' || c == '-'
}

/// Gather the literal candidate starting at peek offset 0.
///
/// `peek(n)` returns the `n`th unconsumed character, if any. The character
/// at offset 0 must be a digit.
pub(crate) fn candidate(mut peek: impl FnMut(usize) -> Option<char>) -> String {
    let mut text = String::new();
    let mut offset = 0;

    let mut eat_digits = |text: &mut String, offset: &mut usize| {
        while let Some(c) = peek(*offset).filter(char::is_ascii_digit) {
            text.push(c);
            *offset += 1;
        }
        peek(*offset)
    };

    let Some(sep1) = eat_digits(&mut text, &mut offset) else {
        return text;
    };
    if sep1 != '.' && !is_date_separator(sep1) {
        return text;
    }
    text.push(sep1);
    offset += 1;

    let before = text.len();
    let next = eat_digits(&mut text, &mut offset);
    if sep1 == '.' || text.len() == before {
        // Decimals never continue past the fraction; a separator with no
        // digits after it cannot either.
        return text;
    }
    match next {
        Some(sep2) if is_date_separator(sep2) => {
            text.push(sep2);
            offset += 1;
            eat_digits(&mut text, &mut offset);
            text
        }
        _ => text,
    }
}

/// Split `text` into its leading ASCII digit run and the rest.
fn split_digits(text: &str) -> (&str, &str) {
    let end = text
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(text.len());
    text.split_at(end)
}

/// Split off a leading separator character, if any.
fn split_separator(text: &str) -> Option<(char, &str)> {
    let mut chars = text.chars();
    chars.next().map(|c| (c, chars.as_str()))
}

/// Resolve a candidate that ends in a separator it cannot complete.
///
/// `digits` is the length of the leading digit run, `reach` the length of
/// everything gathered so far.
fn dangling(digits: usize, reach: usize, config: &LexerConfig) -> LiteralClass {
    match config.dangling_separator {
        DanglingSeparator::Split => LiteralClass::Accept {
            len: digits,
            kind: TokenKind::Integer,
        },
        DanglingSeparator::Reject => LiteralClass::Illegal { len: reach },
    }
}

/// `DD? S DD? S (DD? | DDDD)` on the three digit groups.
fn is_date(month: &str, day: &str, year: &str) -> bool {
    (1..=2).contains(&month.len())
        && (1..=2).contains(&day.len())
        && matches!(year.len(), 1 | 2 | 4)
}

/// Classify a candidate produced by [`candidate`].
///
/// Candidates are ASCII, so byte lengths equal character counts.
pub(crate) fn classify(text: &str, config: &LexerConfig) -> LiteralClass {
    let (d1, rest) = split_digits(text);
    let Some((sep1, rest)) = split_separator(rest) else {
        return LiteralClass::Accept {
            len: d1.len(),
            kind: TokenKind::Integer,
        };
    };

    let (d2, rest) = split_digits(rest);
    if d2.is_empty() {
        return dangling(d1.len(), d1.len() + 1, config);
    }
    let two_groups = d1.len() + 1 + d2.len();
    if sep1 == '.' {
        return LiteralClass::Accept {
            len: two_groups,
            kind: TokenKind::NumberLiteral,
        };
    }

    let Some((sep2, rest)) = split_separator(rest) else {
        return dangling(d1.len(), two_groups, config);
    };
    let (d3, _) = split_digits(rest);
    if d3.is_empty() {
        return dangling(d1.len(), two_groups + 1, config);
    }

    let len = two_groups + 1 + d3.len();
    let separators_ok = !config.uniform_date_separators || sep1 == sep2;
    if separators_ok && is_date(d1, d2, d3) {
        LiteralClass::Accept {
            len,
            kind: TokenKind::DateLiteral,
        }
    } else {
        LiteralClass::Illegal { len }
    }
}
