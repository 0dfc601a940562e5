//! Interning table mapping lexeme text to canonical symbols.
//!
//! Every distinct text maps to exactly one [`Symbol`] for the lifetime of the
//! table. The first registration of a text fixes its [`TokenKind`]; later
//! `intern` calls with a different kind return the existing symbol as is.
//! This is what makes reserved words work: they are inserted by
//! [`SymbolTable::new`], so scanning `if` as an identifier hands back the
//! `If` symbol instead of creating an `Identifier`.

use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::{Symbol, TokenKind};

/// Interning table owned by one lexing session (or shared on purpose via
/// [`SharedSymbolTable`]).
///
/// Grows monotonically; nothing is ever evicted.
///
/// # Thread Safety
/// Uses an `RwLock` so `intern` only needs `&self`. Lookups of already
/// interned text take the read lock only.
pub struct SymbolTable {
    symbols: RwLock<FxHashMap<Arc<str>, Symbol>>,
}

impl SymbolTable {
    /// Create a table seeded with the end-of-input symbol, every reserved
    /// word, and every operator/separator spelling.
    pub fn new() -> Self {
        let table = Self {
            symbols: RwLock::new(FxHashMap::default()),
        };
        table.seed();
        table
    }

    /// Pre-intern the fixed spellings with their fixed kinds.
    fn seed(&self) {
        // The empty text is the `Eof` symbol, like the interner's empty name.
        self.intern("", TokenKind::Eof);
        for &kind in TokenKind::RESERVED_WORDS.iter().chain(TokenKind::OPERATORS) {
            if let Some(spelling) = kind.spelling() {
                self.intern(spelling, kind);
            }
        }
    }

    /// Return the canonical symbol for `text`, creating it with `kind` if
    /// absent.
    ///
    /// If `text` is already present its stored kind is kept, whatever
    /// `kind` is passed here.
    pub fn intern(&self, text: &str, kind: TokenKind) -> Symbol {
        // Fast path: already interned
        if let Some(symbol) = self.symbols.read().get(text) {
            return symbol.clone();
        }

        let mut guard = self.symbols.write();

        // Double-check after acquiring write lock
        if let Some(symbol) = guard.get(text) {
            return symbol.clone();
        }

        let symbol = Symbol::new(Arc::from(text), kind);
        guard.insert(symbol.shared_text(), symbol.clone());
        symbol
    }

    /// Look up `text` without inserting it.
    pub fn lookup(&self, text: &str) -> Option<Symbol> {
        self.symbols.read().get(text).cloned()
    }

    /// The pre-seeded end-of-input symbol.
    pub fn eof(&self) -> Symbol {
        self.intern("", TokenKind::Eof)
    }

    /// Number of interned symbols, seeded ones included.
    pub fn len(&self) -> usize {
        self.symbols.read().len()
    }

    /// Returns `true` if nothing is interned (never the case after `new`).
    pub fn is_empty(&self) -> bool {
        self.symbols.read().is_empty()
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SymbolTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SymbolTable")
            .field("len", &self.len())
            .finish()
    }
}

/// Clonable handle to one [`SymbolTable`].
///
/// A lexer creates its own table unless it is given one of these. Passing
/// the same handle to two sessions makes them share symbols.
#[derive(Clone, Default, Debug)]
pub struct SharedSymbolTable(Arc<SymbolTable>);

impl SharedSymbolTable {
    /// Create a new, freshly seeded shared table.
    pub fn new() -> Self {
        SharedSymbolTable(Arc::new(SymbolTable::new()))
    }

    /// Returns `true` if both handles point at the same table.
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Arc::ptr_eq(&a.0, &b.0)
    }
}

impl std::ops::Deref for SharedSymbolTable {
    type Target = SymbolTable;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
