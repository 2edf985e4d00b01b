//! Family dispatch over [`CipherKind`](crate::CipherKind).

use classic_core::{restore, CipherError, FillerLog};

use crate::config::{CipherConfig, CipherKind};
use crate::{fractionating, playfair};

/// Keys for one operation.
///
/// Playfair uses only `square`; the fractionating families also need
/// `transposition`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Keys<'a> {
    /// Key for the symbol square.
    pub square: &'a str,
    /// Key for the columnar transposition.
    pub transposition: &'a str,
}

impl<'a> Keys<'a> {
    /// Both keys.
    pub fn new(square: &'a str, transposition: &'a str) -> Self {
        Self {
            square,
            transposition,
        }
    }

    /// Square key only, for Playfair.
    pub fn square(square: &'a str) -> Self {
        Self::new(square, "")
    }
}

/// Ciphertext plus the positions of injected fillers in the plaintext stream.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Encryption {
    /// Encrypted text.
    pub ciphertext: String,
    /// Fillers to strip after decryption.
    pub fillers: FillerLog,
}

/// Encrypts `text` with the family selected by `config.kind`.
pub fn encrypt(
    text: &str,
    keys: &Keys<'_>,
    config: &CipherConfig,
) -> Result<Encryption, CipherError> {
    match config.kind {
        CipherKind::Playfair => playfair::encrypt(text, keys.square, config),
        CipherKind::Adfgx | CipherKind::Adfgvx => {
            fractionating::encrypt(text, keys.square, keys.transposition, config)
        }
    }
}

/// Decrypts `ciphertext` into the raw symbol stream, fillers and escapes intact.
pub fn decrypt(
    ciphertext: &str,
    keys: &Keys<'_>,
    config: &CipherConfig,
) -> Result<String, CipherError> {
    match config.kind {
        CipherKind::Playfair => playfair::decrypt(ciphertext, keys.square, config),
        CipherKind::Adfgx | CipherKind::Adfgvx => {
            fractionating::decrypt(ciphertext, keys.square, keys.transposition, config)
        }
    }
}

/// Decrypts and restores the normalized plaintext using the filler log.
pub fn open(
    ciphertext: &str,
    fillers: &FillerLog,
    keys: &Keys<'_>,
    config: &CipherConfig,
) -> Result<String, CipherError> {
    let stream = decrypt(ciphertext, keys, config)?;
    restore(&stream, fillers, config.filler, config.escapes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_recovers_text_for_every_family() {
        let keys = Keys::new("Kryptos 1987", "Schlüssel");
        for kind in CipherKind::ALL {
            let config = kind.config();
            let sealed = encrypt("Meet me at 10 PM, room 2B!", &keys, &config).unwrap();
            let opened = open(&sealed.ciphertext, &sealed.fillers, &keys, &config).unwrap();
            let expected = match kind {
                CipherKind::Playfair => "meet me at 10 pm room 2b",
                CipherKind::Adfgx => "meetmeatpmroomb",
                CipherKind::Adfgvx => "meetmeat10pmroom2b",
            };
            assert_eq!(opened, expected, "{}", kind.name());
        }
    }

    #[test]
    fn playfair_ignores_transposition_key() {
        let config = CipherKind::Playfair.config();
        let a = encrypt("balloon", &Keys::square("monarchy"), &config).unwrap();
        let b = encrypt("balloon", &Keys::new("monarchy", "anything"), &config).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn open_with_wrong_log_fails() {
        let config = CipherKind::Playfair.config();
        let keys = Keys::square("monarchy");
        let sealed = encrypt("balloon", &keys, &config).unwrap();
        let wrong = FillerLog::from_positions([0]);
        assert_eq!(
            open(&sealed.ciphertext, &wrong, &keys, &config),
            Err(CipherError::FillerMismatch { position: 0 })
        );
    }
}
