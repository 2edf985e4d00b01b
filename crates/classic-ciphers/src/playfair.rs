//! Playfair digraph substitution.

use classic_core::{normalize_text, prepare_digraphs, CipherError, KeyMatrix};

use crate::cipher::Encryption;
use crate::config::CipherConfig;

#[derive(Clone, Copy)]
enum Step {
    Forward,
    Backward,
}

impl Step {
    fn apply(self, idx: usize, modulus: usize) -> usize {
        match self {
            Step::Forward => (idx + 1) % modulus,
            Step::Backward => (idx + modulus - 1) % modulus,
        }
    }
}

fn substitute(matrix: &KeyMatrix, symbols: &[char], step: Step) -> Result<String, CipherError> {
    let locate = |c: char| matrix.locate(c).ok_or(CipherError::SymbolNotInAlphabet(c));
    let mut out = String::with_capacity(symbols.len());
    for pair in symbols.chunks_exact(2) {
        let (ra, ca) = locate(pair[0])?;
        let (rb, cb) = locate(pair[1])?;
        let (a, b) = if ra == rb {
            (
                matrix.get(ra, step.apply(ca, matrix.cols())),
                matrix.get(rb, step.apply(cb, matrix.cols())),
            )
        } else if ca == cb {
            (
                matrix.get(step.apply(ra, matrix.rows()), ca),
                matrix.get(step.apply(rb, matrix.rows()), cb),
            )
        } else {
            (matrix.get(ra, cb), matrix.get(rb, ca))
        };
        out.push(a);
        out.push(b);
    }
    Ok(out)
}

/// Encrypts `text` under `key`.
///
/// The text is normalized, repeats are split and the stream padded to even
/// length; the positions of those fillers are returned with the ciphertext.
pub fn encrypt(text: &str, key: &str, config: &CipherConfig) -> Result<Encryption, CipherError> {
    config.validate()?;
    let matrix = KeyMatrix::build(key, &config.alphabet);
    let normalized = normalize_text(text, &config.alphabet, config.escapes);
    let prepared = prepare_digraphs(&normalized, config.filler);
    let symbols: Vec<char> = prepared.symbols().iter().map(|s| s.char()).collect();
    let ciphertext = substitute(&matrix, &symbols, Step::Forward)?;
    Ok(Encryption {
        ciphertext,
        fillers: prepared.filler_log(),
    })
}

/// Decrypts `ciphertext` under `key` into the raw symbol stream.
///
/// The input is taken to be in the cipher's symbol domain already: whitespace
/// is removed and letters are lower-cased, nothing more. An odd-length input is
/// padded with a filler the way encryption would.
pub fn decrypt(ciphertext: &str, key: &str, config: &CipherConfig) -> Result<String, CipherError> {
    config.validate()?;
    let matrix = KeyMatrix::build(key, &config.alphabet);
    let mut symbols: Vec<char> = ciphertext
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect();
    if let Some(&last) = symbols.last() {
        if symbols.len() % 2 != 0 {
            symbols.push(config.filler.next_to(last));
        }
    }
    substitute(&matrix, &symbols, Step::Backward)
}
