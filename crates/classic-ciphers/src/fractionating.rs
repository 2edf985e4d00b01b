//! ADFGX / ADFGVX: fractionation through a keyed square, then columnar transposition.
//!
//! Each plaintext symbol becomes two coordinate labels (row, column). The
//! coordinate stream is padded with the filler's coordinates until its length
//! is a multiple of the transposition key length, written row-wise under the
//! key and read out column by column in key order.
//!
//! On decryption a stream that is not a multiple of the key length is still
//! accepted: the `len % key_len` longer columns are the first ones in
//! original (unsorted) column order, which is the layout an unpadded row-wise
//! fill produces.

use classic_core::{normalize_text, CipherError, ColumnarOrder, FillerLog, KeyMatrix};

use crate::cipher::Encryption;
use crate::config::CipherConfig;

fn transport_order(key: &str) -> Result<ColumnarOrder, CipherError> {
    let order = ColumnarOrder::build(key);
    if order.is_empty() {
        return Err(CipherError::EmptyTransportKey);
    }
    Ok(order)
}

/// Reads `stream` column by column in `order`.
fn transpose(stream: &[char], order: &ColumnarOrder) -> String {
    let width = order.len();
    order
        .as_slice()
        .iter()
        .flat_map(|&col| stream.iter().skip(col).step_by(width))
        .collect()
}

/// Inverse of [`transpose`] for any stream length.
fn untranspose(text: &[char], order: &ColumnarOrder) -> Vec<char> {
    let width = order.len();
    let base = text.len() / width;
    let extra = text.len() % width;

    let mut columns: Vec<&[char]> = vec![&text[..0]; width];
    let mut pos = 0;
    for &col in order.as_slice() {
        let len = base + usize::from(col < extra);
        columns[col] = &text[pos..pos + len];
        pos += len;
    }

    let depth = base + usize::from(extra > 0);
    let mut stream = Vec::with_capacity(text.len());
    for row in 0..depth {
        stream.extend(columns.iter().filter_map(|column| column.get(row)));
    }
    stream
}

/// Encrypts `text` with the square key and the transposition key.
///
/// Trailing pad symbols are recorded in the returned filler log.
pub fn encrypt(
    text: &str,
    square_key: &str,
    transposition_key: &str,
    config: &CipherConfig,
) -> Result<Encryption, CipherError> {
    config.validate()?;
    let labels = config.labels()?;
    let order = transport_order(transposition_key)?;
    let matrix = KeyMatrix::build(square_key, &config.alphabet);
    let locate = |c: char| matrix.locate(c).ok_or(CipherError::SymbolNotInAlphabet(c));

    let normalized = normalize_text(text, &config.alphabet, config.escapes);
    let mut stream: Vec<char> = Vec::with_capacity(normalized.len() * 2 + order.len());
    let mut symbols = 0;
    for c in normalized.chars() {
        let (row, col) = locate(c)?;
        stream.push(labels.label(row));
        stream.push(labels.label(col));
        symbols += 1;
    }

    let text_symbols = symbols;
    let (pad_row, pad_col) = locate(config.filler.primary)?;
    while stream.len() % order.len() != 0 {
        stream.push(labels.label(pad_row));
        stream.push(labels.label(pad_col));
        symbols += 1;
    }

    Ok(Encryption {
        ciphertext: transpose(&stream, &order),
        fillers: FillerLog::from_positions(text_symbols..symbols),
    })
}

/// Decrypts `ciphertext` into the raw symbol stream, pad symbols included.
///
/// Whitespace is ignored and labels match case-insensitively.
pub fn decrypt(
    ciphertext: &str,
    square_key: &str,
    transposition_key: &str,
    config: &CipherConfig,
) -> Result<String, CipherError> {
    config.validate()?;
    let labels = config.labels()?;
    let order = transport_order(transposition_key)?;
    let matrix = KeyMatrix::build(square_key, &config.alphabet);

    let text: Vec<char> = ciphertext.chars().filter(|c| !c.is_whitespace()).collect();
    if text.len() % 2 != 0 {
        return Err(CipherError::OddCoordinateStream(text.len()));
    }

    let stream = untranspose(&text, &order);
    let coordinate = |label: char, limit: usize| {
        labels
            .index_of(label)
            .filter(|&idx| idx < limit)
            .ok_or(CipherError::InvalidLabel(label))
    };
    let mut out = String::with_capacity(stream.len() / 2);
    for pair in stream.chunks_exact(2) {
        let row = coordinate(pair[0], matrix.rows())?;
        let col = coordinate(pair[1], matrix.cols())?;
        out.push(matrix.get(row, col));
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CipherKind;
    use classic_core::restore;

    const WIKI_SQUARE: &str = "na1c3h8tb2ome5wrpd4f6g7i9j0klqsuvxyz";
    const ADFGX_SQUARE: &str = "btalpdhozkqfvsngicuxmrewy";

    #[test]
    fn adfgvx_wikipedia_vector() {
        let cfg = CipherKind::Adfgvx.config();
        let out = encrypt("Attack at 1200AM", WIKI_SQUARE, "privacy", &cfg).unwrap();
        assert_eq!(out.ciphertext, "DGDDDAGDDGAFADDFDADVDVFAADVX");
        assert!(out.fillers.is_empty());
        assert_eq!(
            decrypt("DGDD DAGD DGAF ADDF DADV DVFA ADVX", WIKI_SQUARE, "privacy", &cfg).unwrap(),
            "attackat1200am"
        );
    }

    #[test]
    fn adfgx_pads_to_key_length() {
        let cfg = CipherKind::Adfgx.config();
        let out = encrypt("attack at once", ADFGX_SQUARE, "cargo", &cfg).unwrap();
        assert_eq!(out.ciphertext, "FAXDFGADDDGXDGFFFGAFAXGXAFAFXX");
        assert_eq!(out.fillers.positions(), &[12, 13, 14]);

        let stream = decrypt(&out.ciphertext, ADFGX_SQUARE, "cargo", &cfg).unwrap();
        assert_eq!(stream, "attackatoncexxx");
        assert_eq!(
            restore(&stream, &out.fillers, cfg.filler, cfg.escapes).unwrap(),
            "attackatonce"
        );
    }

    #[test]
    fn decrypt_with_remainder_uses_original_column_order() {
        // 24 coordinates under a 5-letter key, as produced without padding.
        let cfg = CipherKind::Adfgx.config();
        assert_eq!(
            decrypt("FAXDFADDDGDGFFFAFAXAFAFX", ADFGX_SQUARE, "cargo", &cfg).unwrap(),
            "attackatonce"
        );
    }

    #[test]
    fn bela_order_with_short_square_key() {
        let cfg = CipherKind::Adfgvx.config();
        let out = encrypt("attack", "nzu", "bela", &cfg).unwrap();
        assert_eq!(out.ciphertext, "GGDAGAGGXGAF");
        let out = encrypt("Ça marche 2 fois", "nzu", "bela", &cfg).unwrap();
        assert_eq!(out.ciphertext, "GGXDFXAAFGDVFGXGDVVVFAAADDDV");
        assert_eq!(out.fillers.positions(), &[13]);
        let stream = decrypt(&out.ciphertext, "nzu", "bela", &cfg).unwrap();
        assert_eq!(
            restore(&stream, &out.fillers, cfg.filler, cfg.escapes).unwrap(),
            "camarche2fois"
        );
    }

    #[test]
    fn transpose_round_trips_every_length() {
        let order = ColumnarOrder::build("german");
        for len in 0..40 {
            let stream: Vec<char> = (0..len).map(|i| char::from(b'a' + (i % 26) as u8)).collect();
            let text: Vec<char> = transpose(&stream, &order).chars().collect();
            assert_eq!(untranspose(&text, &order), stream, "len {len}");
        }
    }

    #[test]
    fn empty_transport_key_fails() {
        let cfg = CipherKind::Adfgvx.config();
        assert_eq!(
            encrypt("text", "key", "", &cfg).unwrap_err(),
            CipherError::EmptyTransportKey
        );
        assert_eq!(
            decrypt("ADFG", "key", "1234", &cfg).unwrap_err(),
            CipherError::EmptyTransportKey
        );
    }

    #[test]
    fn odd_stream_and_bad_labels_fail() {
        let cfg = CipherKind::Adfgx.config();
        assert_eq!(
            decrypt("ADF", "key", "abc", &cfg).unwrap_err(),
            CipherError::OddCoordinateStream(3)
        );
        assert_eq!(
            decrypt("ADFV", "key", "ab", &cfg).unwrap_err(),
            CipherError::InvalidLabel('V')
        );
        assert_eq!(
            decrypt("ADFQ", "key", "ab", &cfg).unwrap_err(),
            CipherError::InvalidLabel('Q')
        );
    }

    #[test]
    fn empty_text_encrypts_to_empty() {
        let cfg = CipherKind::Adfgvx.config();
        let out = encrypt("", "key", "bela", &cfg).unwrap();
        assert_eq!(out.ciphertext, "");
        assert!(out.fillers.is_empty());
        assert_eq!(decrypt("", "key", "bela", &cfg).unwrap(), "");
    }

    #[test]
    fn adfgx_drops_digits_and_merges_j() {
        let cfg = CipherKind::Adfgx.config();
        let out = encrypt("Jo 42", "key", "ab", &cfg).unwrap();
        let stream = decrypt(&out.ciphertext, "key", "ab", &cfg).unwrap();
        assert_eq!(stream, "io");
    }
}
