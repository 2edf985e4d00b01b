//! Self-describing container for a ciphertext and its filler log.

use classic_core::{CipherError, FillerLog};
use serde::{Deserialize, Serialize};

use crate::cipher::{self, Keys};
use crate::config::CipherKind;

/// Current envelope format version.
pub const ENVELOPE_VERSION: u32 = 1;

/// Ciphertext bundled with what a recipient needs besides the keys.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope {
    /// Format version tag.
    pub version: u32,
    /// Family preset used for encryption.
    pub kind: CipherKind,
    /// Encrypted text.
    pub ciphertext: String,
    /// Fillers injected into the plaintext stream.
    pub fillers: FillerLog,
}

impl Envelope {
    /// Encrypts `text` with the preset for `kind`.
    pub fn seal(kind: CipherKind, text: &str, keys: &Keys<'_>) -> Result<Self, CipherError> {
        let sealed = cipher::encrypt(text, keys, &kind.config())?;
        Ok(Self {
            version: ENVELOPE_VERSION,
            kind,
            ciphertext: sealed.ciphertext,
            fillers: sealed.fillers,
        })
    }

    /// Decrypts and restores the normalized plaintext.
    pub fn open(&self, keys: &Keys<'_>) -> Result<String, CipherError> {
        cipher::open(&self.ciphertext, &self.fillers, keys, &self.kind.config())
    }

    /// Serializes the envelope with `bincode`.
    pub fn to_bytes(&self) -> Result<Vec<u8>, bincode::Error> {
        bincode::serialize(self)
    }

    /// Deserializes an envelope with `bincode`, rejecting unknown versions.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, bincode::Error> {
        let envelope: Self = bincode::deserialize(bytes)?;
        if envelope.version != ENVELOPE_VERSION {
            return Err(Box::new(bincode::ErrorKind::Custom(format!(
                "unsupported envelope version {}",
                envelope.version
            ))));
        }
        Ok(envelope)
    }
}
