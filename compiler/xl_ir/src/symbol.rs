//! Canonical interned symbol.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::TokenKind;

struct SymbolData {
    text: Arc<str>,
    kind: TokenKind,
}

/// Canonical (text, kind) pair for one lexeme spelling.
///
/// Symbols are only created by [`SymbolTable`](crate::SymbolTable), which
/// hands out at most one per distinct text. Cloning is a reference-count
/// bump; equality and hashing are by identity, not by text, so two symbols
/// from different tables are never equal even when their text is.
#[derive(Clone)]
pub struct Symbol(Arc<SymbolData>);

impl Symbol {
    pub(crate) fn new(text: Arc<str>, kind: TokenKind) -> Self {
        Symbol(Arc::new(SymbolData { text, kind }))
    }

    /// Exact lexeme spelling.
    #[inline]
    pub fn text(&self) -> &str {
        &self.0.text
    }

    /// Classification fixed when the symbol was first interned.
    #[inline]
    pub fn kind(&self) -> TokenKind {
        self.0.kind
    }

    /// Shared text, for building the table's key without copying.
    pub(crate) fn shared_text(&self) -> Arc<str> {
        Arc::clone(&self.0.text)
    }

    /// Returns `true` if both handles refer to the same symbol object.
    #[inline]
    pub fn ptr_eq(a: &Symbol, b: &Symbol) -> bool {
        Arc::ptr_eq(&a.0, &b.0)
    }
}

impl PartialEq for Symbol {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        Symbol::ptr_eq(self, other)
    }
}

impl Eq for Symbol {}

impl Hash for Symbol {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::ptr::hash(Arc::as_ptr(&self.0), state);
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({:?}, {:?})", self.text(), self.kind())
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}
