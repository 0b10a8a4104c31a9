//! Dense ids for symbols in first-occurrence order.

use std::collections::BTreeMap;

use crate::matrix::Matrix;
use crate::symbol::Symbol;

/// Bijection between the distinct symbols seen and `0..len()`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolIndex {
    ids: BTreeMap<Symbol, usize>,
    symbols: Vec<Symbol>,
}

impl SymbolIndex {
    /// An empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Numbers the symbols of `matrix`, scanning rows in order and each row
    /// left to right.
    #[must_use]
    pub fn from_matrix(matrix: &Matrix) -> Self {
        let mut index = Self::new();
        for symbol in matrix.symbols() {
            index.intern(*symbol);
        }
        index
    }

    /// Returns the id of `symbol`, assigning the next free id if it is new.
    pub(crate) fn intern(&mut self, symbol: Symbol) -> usize {
        let next = self.symbols.len();
        let id = *self.ids.entry(symbol).or_insert(next);
        if id == next {
            self.symbols.push(symbol);
        }
        id
    }

    /// Id of `symbol`, if it was seen.
    #[must_use]
    pub fn id(&self, symbol: &Symbol) -> Option<usize> {
        self.ids.get(symbol).copied()
    }

    /// Symbol carrying `id`.
    #[must_use]
    pub fn symbol(&self, id: usize) -> Option<Symbol> {
        self.symbols.get(id).copied()
    }

    /// Number of distinct symbols.
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// True if no symbol was seen.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Symbols in id order.
    #[must_use]
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// `(id, symbol)` pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, Symbol)> + '_ {
        self.symbols.iter().copied().enumerate()
    }

    /// `(symbol, id)` pairs in symbol order.
    pub fn iter_by_symbol(&self) -> impl Iterator<Item = (Symbol, usize)> + '_ {
        self.ids.iter().map(|(symbol, id)| (*symbol, *id))
    }
}
