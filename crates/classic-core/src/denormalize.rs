//! Inverse of normalization: filler removal and escape decoding.

use crate::error::CipherError;
use crate::escape::{lookup_name, ESCAPE_MARK};
use crate::normalize::{Escapes, Filler, FillerLog};

/// Decodes escape tokens back into the characters they stand for.
///
/// Every mark must open a token that a later mark closes, and the enclosed
/// name must be in the table.
pub fn unescape(stream: &str) -> Result<String, CipherError> {
    let chars: Vec<char> = stream.chars().collect();
    let mut out = String::with_capacity(chars.len());
    let mut i = 0;
    while i < chars.len() {
        if chars[i] != ESCAPE_MARK {
            out.push(chars[i]);
            i += 1;
            continue;
        }
        let close = chars[i + 1..]
            .iter()
            .position(|&c| c == ESCAPE_MARK)
            .ok_or(CipherError::MalformedEscape { position: i })?;
        let name: String = chars[i + 1..i + 1 + close].iter().collect();
        let decoded = lookup_name(&name).ok_or(CipherError::MalformedEscape { position: i })?;
        out.push(decoded);
        i += close + 2;
    }
    Ok(out)
}

/// Recovers normalized plaintext from a decrypted stream.
///
/// Removes the symbols at the logged filler positions, checking that each one
/// really is a filler, then decodes escape tokens when `escapes` is
/// [`Escapes::Tokens`].
pub fn restore(
    stream: &str,
    fillers: &FillerLog,
    filler: Filler,
    escapes: Escapes,
) -> Result<String, CipherError> {
    let chars: Vec<char> = stream.chars().collect();
    for &position in fillers.positions() {
        match chars.get(position) {
            Some(&c) if filler.is_filler(c) => {}
            _ => return Err(CipherError::FillerMismatch { position }),
        }
    }
    let kept: String = chars
        .iter()
        .enumerate()
        .filter(|(i, _)| !fillers.contains(*i))
        .map(|(_, &c)| c)
        .collect();
    match escapes {
        Escapes::Tokens => unescape(&kept),
        Escapes::Drop => Ok(kept),
    }
}
