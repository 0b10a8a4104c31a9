//! Per-symbol plaintext letter distributions.
//!
//! Ciphertext tokens and plaintext letters are read in lock-step: the `n`-th
//! token decrypts to the `n`-th letter of the plaintext, ignoring anything in
//! the plaintext that is not an ASCII letter. Each distinct symbol gets a row
//! of 26 counts which is then normalized to a distribution.
//!
//! A row whose counts sum to zero is left as all zeros rather than divided;
//! [`FrequencyTable::degenerate_rows`] lists such rows.

use tracing::debug;

use crate::error::{Error, Result};
use crate::index::SymbolIndex;
use crate::symbol::{Orientation, Symbol};

/// Number of plaintext letters tracked per symbol.
pub const ALPHABET_LEN: usize = 26;

/// Letter counts and distributions for every symbol, in id order.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyTable {
    index: SymbolIndex,
    counts: Vec<[u32; ALPHABET_LEN]>,
    distributions: Vec<[f64; ALPHABET_LEN]>,
}

impl FrequencyTable {
    /// Reads every token, pairing each with the next plaintext letter.
    ///
    /// Orientation alternates per token starting row-wise. There is no loop
    /// detection; the token source is read to the end.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedToken`] if a token is not two characters, or
    /// [`Error::MisalignedInput`] if the plaintext runs out of letters first.
    pub fn build<I, P>(tokens: I, plaintext: P) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
        P: IntoIterator<Item = char>,
    {
        let mut plaintext = plaintext.into_iter();
        let mut index = SymbolIndex::new();
        let mut counts: Vec<[u32; ALPHABET_LEN]> = Vec::new();
        let mut orientation = Orientation::RowWise;

        for (position, token) in tokens.into_iter().enumerate() {
            let symbol = Symbol::from_token(token.as_ref(), orientation)?;
            let letter = plaintext
                .by_ref()
                .find(char::is_ascii_alphabetic)
                .ok_or(Error::MisalignedInput { position })?;

            let id = index.intern(symbol);
            if id == counts.len() {
                counts.push([0; ALPHABET_LEN]);
            }
            counts[id][letter_slot(letter)] += 1;

            orientation = orientation.flip();
        }

        Ok(Self::from_counts(index, counts))
    }

    /// Normalizes raw counts; `counts[id]` belongs to `index.symbol(id)`.
    pub(crate) fn from_counts(index: SymbolIndex, counts: Vec<[u32; ALPHABET_LEN]>) -> Self {
        let distributions = counts
            .iter()
            .enumerate()
            .map(|(id, row)| {
                let total: u64 = row.iter().map(|&c| u64::from(c)).sum();
                if total == 0 {
                    debug!(id, "degenerate frequency row left at zero");
                    return [0.0; ALPHABET_LEN];
                }
                row.map(|c| f64::from(c) / total as f64)
            })
            .collect();

        Self {
            index,
            counts,
            distributions,
        }
    }

    /// Symbols numbered in first-occurrence order.
    #[must_use]
    pub fn index(&self) -> &SymbolIndex {
        &self.index
    }

    /// Raw letter counts in id order.
    #[must_use]
    pub fn counts(&self) -> &[[u32; ALPHABET_LEN]] {
        &self.counts
    }

    /// Normalized distributions in id order.
    #[must_use]
    pub fn distributions(&self) -> &[[f64; ALPHABET_LEN]] {
        &self.distributions
    }

    /// Distribution for one symbol id.
    #[must_use]
    pub fn distribution(&self, id: usize) -> Option<&[f64; ALPHABET_LEN]> {
        self.distributions.get(id)
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.distributions.len()
    }

    /// True if no token was read.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.distributions.is_empty()
    }

    /// Ids whose raw counts sum to zero.
    #[must_use]
    pub fn degenerate_rows(&self) -> Vec<usize> {
        self.counts
            .iter()
            .enumerate()
            .filter(|(_, row)| row.iter().all(|&c| c == 0))
            .map(|(id, _)| id)
            .collect()
    }

    /// Most frequent plaintext letter for `id`, the earliest letter on ties.
    /// `None` for unknown ids and degenerate rows.
    #[must_use]
    pub fn most_likely(&self, id: usize) -> Option<char> {
        let row = self.counts.get(id)?;
        let (slot, &best) = row
            .iter()
            .enumerate()
            .rev()
            .max_by_key(|&(_, count)| *count)?;
        if best == 0 {
            return None;
        }
        Some(char::from(b'a' + slot as u8))
    }
}

/// Maps an ASCII letter to `0..26`, ignoring case.
fn letter_slot(letter: char) -> usize {
    (letter.to_ascii_lowercase() as u8 - b'a') as usize
}
