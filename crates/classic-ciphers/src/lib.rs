//! Playfair, ADFGX and ADFGVX ciphers.
//!
//! The three families share one engine from `classic-core` and differ only by
//! [`CipherConfig`]: alphabet, grid shape, coordinate labels and escape policy.
//! [`CipherKind`] selects a preset; [`encrypt`], [`decrypt`] and [`open`]
//! dispatch on it.
//!
//! Encryption returns the ciphertext together with a [`FillerLog`] recording
//! where fillers were injected. Decryption alone yields the raw symbol stream;
//! [`open`] (or [`Envelope::open`]) also strips fillers and decodes escapes.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod cipher;
mod config;
mod envelope;
pub mod fractionating;
mod keygen;
pub mod playfair;

pub use crate::cipher::{decrypt, encrypt, open, Encryption, Keys};
pub use crate::config::{CipherConfig, CipherKind, Labels};
pub use crate::envelope::{Envelope, ENVELOPE_VERSION};
pub use crate::keygen::random_key;
pub use classic_core::{
    Alphabet, CipherError, ColumnarOrder, Escapes, Filler, FillerLog, KeyMatrix,
};
