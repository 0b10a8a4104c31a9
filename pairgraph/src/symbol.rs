//! Cipher symbols: a two-character token tagged with its reading orientation.
//!
//! The same character pair read row-wise and column-wise are different
//! symbols. The total order is lexicographic over
//! `(first, second, orientation)` with [`Orientation::RowWise`] first; it only
//! exists so symbols can key ordered maps reproducibly.
//!
//! # Examples
//!
//! ```
//! use pairgraph::{Orientation, Symbol};
//!
//! let s = Symbol::from_token("AB", Orientation::ColumnWise)?;
//! assert_eq!(s.to_string(), "AB1");
//! assert!(Symbol::from_token("ABC", Orientation::RowWise).is_err());
//! # Ok::<(), pairgraph::Error>(())
//! ```

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Direction a token was read in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Orientation {
    /// Read along a row. Discriminant `0`.
    RowWise = 0,
    /// Read down a column. Discriminant `1`.
    ColumnWise = 1,
}

impl Orientation {
    /// Returns the other orientation.
    #[must_use]
    pub fn flip(self) -> Self {
        match self {
            Orientation::RowWise => Orientation::ColumnWise,
            Orientation::ColumnWise => Orientation::RowWise,
        }
    }

    /// Numeric tag used in the textual symbol form.
    #[must_use]
    pub fn discriminant(self) -> u8 {
        self as u8
    }
}

/// One cipher token together with the orientation it was read in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Symbol {
    first: char,
    second: char,
    orientation: Orientation,
}

impl Symbol {
    /// Builds a symbol from its two characters.
    #[must_use]
    pub fn new(first: char, second: char, orientation: Orientation) -> Self {
        Self {
            first,
            second,
            orientation,
        }
    }

    /// Builds a symbol from a token that must be exactly two characters.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedToken`] for any other length.
    pub fn from_token(token: &str, orientation: Orientation) -> Result<Self> {
        let mut chars = token.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(first), Some(second), None) => Ok(Self::new(first, second, orientation)),
            _ => Err(Error::MalformedToken {
                token: token.to_string(),
            }),
        }
    }

    /// First character of the pair.
    #[must_use]
    pub fn first(&self) -> char {
        self.first
    }

    /// Second character of the pair.
    #[must_use]
    pub fn second(&self) -> char {
        self.second
    }

    /// Orientation the pair was read in.
    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}",
            self.first,
            self.second,
            self.orientation.discriminant()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_must_have_two_chars() {
        for bad in ["", "A", "ABC"] {
            assert_eq!(
                Symbol::from_token(bad, Orientation::RowWise),
                Err(Error::MalformedToken {
                    token: bad.to_string()
                })
            );
        }
    }

    #[test]
    fn length_counts_chars_not_bytes() -> Result<()> {
        let s = Symbol::from_token("éß", Orientation::RowWise)?;
        assert_eq!((s.first(), s.second()), ('é', 'ß'));
        Ok(())
    }

    #[test]
    fn orientation_distinguishes_symbols() {
        let row = Symbol::new('A', 'B', Orientation::RowWise);
        let col = Symbol::new('A', 'B', Orientation::ColumnWise);
        assert_ne!(row, col);
        assert!(row < col);
    }

    #[test]
    fn order_is_lexicographic() {
        let ab1 = Symbol::new('A', 'B', Orientation::ColumnWise);
        let ac0 = Symbol::new('A', 'C', Orientation::RowWise);
        let ba0 = Symbol::new('B', 'A', Orientation::RowWise);
        assert!(ab1 < ac0);
        assert!(ac0 < ba0);
    }

    #[test]
    fn flip_alternates() {
        assert_eq!(Orientation::RowWise.flip(), Orientation::ColumnWise);
        assert_eq!(Orientation::RowWise.flip().flip(), Orientation::RowWise);
    }

    #[test]
    fn display_appends_discriminant() {
        assert_eq!(Symbol::new('X', 'Y', Orientation::RowWise).to_string(), "XY0");
        assert_eq!(
            Symbol::new('X', 'Y', Orientation::ColumnWise).to_string(),
            "XY1"
        );
    }
}
