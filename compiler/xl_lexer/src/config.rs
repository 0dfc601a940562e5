//! Lexer configuration.

/// What to do with a literal separator (`.`, `/`, `-`) after a digit run
/// when the literal it starts cannot be completed.
///
/// Covers `3.` / `3.x` (no digits after the dot), `10-y`, `3/4` (a date
/// candidate with only two groups) and `3/4/` (no year digits).
///
/// Neither policy yields one `Integer` token spelled `3/4`: an incomplete
/// date candidate is always split into its parts or rejected whole.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum DanglingSeparator {
    /// Emit only the leading digit run as an `Integer` and scan the
    /// separator again as an operator: `10-5` lexes as `10` `-` `5`.
    #[default]
    Split,
    /// Report an illegal literal and end the session.
    Reject,
}

/// Options for one lexing session.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct LexerConfig {
    /// Policy for incomplete multi-part literals.
    pub dangling_separator: DanglingSeparator,
    /// Reject dates whose two separators differ (`3/4-2020`).
    /// Off by default: mixed separators are accepted.
    pub uniform_date_separators: bool,
}
