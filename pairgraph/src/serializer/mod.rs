//! Renderings of the analytic products.
//!
//! - **Text** ([`text`]): the whitespace-separated formats read by downstream
//!   scripts, one line per row.
//! - **JSON** ([`json`], feature `serializers`): one document per pipeline,
//!   carrying the symbol catalogue next to the matrix it numbers.
//!
//! Every renderer is a pure function returning an owned value; writing to
//! disk is left to the caller.

#[cfg(feature = "serializers")]
pub mod json;
pub mod text;
