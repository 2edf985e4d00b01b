//! Shared engine for the classical ciphers in this workspace.
//!
//! This crate owns everything the cipher families have in common:
//! - Alphabets and their grid shape.
//! - Keyed matrices (symbol ↔ coordinate bijections) and columnar orders.
//! - The reversible text normalizer and its inverse.
//!
//! Every function is a pure transform of its arguments. Matrices and orders are
//! rebuilt on each call and nothing is cached, so callers on different threads
//! never share state. None of this is cryptographically secure.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod alphabet;
mod columnar;
mod denormalize;
mod error;
mod escape;
mod matrix;
mod normalize;

pub use crate::alphabet::Alphabet;
pub use crate::columnar::ColumnarOrder;
pub use crate::denormalize::{restore, unescape};
pub use crate::error::CipherError;
pub use crate::escape::{escape_name, token_symbols, ESCAPE_MARK};
pub use crate::matrix::KeyMatrix;
pub use crate::normalize::{
    fold_key, normalize_text, prepare_digraphs, Escapes, Filler, FillerLog, PreparedText, Symbol,
};
