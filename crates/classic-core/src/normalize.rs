//! Text normalization and digraph preparation.
//!
//! Normalization maps raw input onto an alphabet. Preparation then tags each
//! injected filler so the inverse pass removes exactly what was inserted.

use serde::{Deserialize, Serialize};
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::alphabet::Alphabet;
use crate::escape::{escape_name, push_token};

/// What to do with digits, spaces and the escape mark during normalization.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Escapes {
    /// Replace them with reversible escape tokens.
    Tokens,
    /// Keep them only if the alphabet contains them; drop otherwise.
    Drop,
}

/// Filler symbols: `primary` by default, `fallback` next to a `primary`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filler {
    /// Usual filler.
    pub primary: char,
    /// Used when the neighbouring symbol is itself `primary`.
    pub fallback: char,
}

impl Default for Filler {
    fn default() -> Self {
        Self {
            primary: 'x',
            fallback: 'q',
        }
    }
}

impl Filler {
    /// Filler to place next to `neighbour`.
    pub fn next_to(&self, neighbour: char) -> char {
        if neighbour == self.primary {
            self.fallback
        } else {
            self.primary
        }
    }

    /// Returns true if `c` is either filler symbol.
    pub fn is_filler(&self, c: char) -> bool {
        c == self.primary || c == self.fallback
    }
}

/// A prepared stream element: authentic text or an injected filler.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Symbol {
    /// Symbol derived from the input.
    Text(char),
    /// Symbol inserted to split a repeat or fix parity.
    Filler(char),
}

impl Symbol {
    /// Underlying character.
    pub fn char(self) -> char {
        match self {
            Symbol::Text(c) | Symbol::Filler(c) => c,
        }
    }
}

/// Sorted stream positions that hold injected fillers.
///
/// Deserialization goes through [`FillerLog::from_positions`], so a log
/// loaded from bytes is always sorted and free of duplicates.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<usize>", into = "Vec<usize>")]
pub struct FillerLog {
    positions: Vec<usize>,
}

impl FillerLog {
    /// Empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a log from arbitrary positions; they are sorted and de-duplicated.
    pub fn from_positions(positions: impl IntoIterator<Item = usize>) -> Self {
        let mut positions: Vec<usize> = positions.into_iter().collect();
        positions.sort_unstable();
        positions.dedup();
        Self { positions }
    }

    /// Logged positions in ascending order.
    pub fn positions(&self) -> &[usize] {
        &self.positions
    }

    /// Number of logged fillers.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Returns true if nothing was injected.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Returns true if `position` holds a filler.
    pub fn contains(&self, position: usize) -> bool {
        self.positions.binary_search(&position).is_ok()
    }
}

impl From<Vec<usize>> for FillerLog {
    fn from(positions: Vec<usize>) -> Self {
        Self::from_positions(positions)
    }
}

impl From<FillerLog> for Vec<usize> {
    fn from(log: FillerLog) -> Self {
        log.positions
    }
}

/// Normalized text with fillers separated from authentic symbols.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PreparedText {
    symbols: Vec<Symbol>,
}

impl PreparedText {
    /// Tagged symbols in stream order.
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Stream length, fillers included.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Returns true for an empty stream.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Flattens the stream into plain text.
    pub fn text(&self) -> String {
        self.symbols.iter().map(|s| s.char()).collect()
    }

    /// Positions of every injected filler.
    pub fn filler_log(&self) -> FillerLog {
        FillerLog {
            positions: self
                .symbols
                .iter()
                .enumerate()
                .filter(|(_, s)| matches!(s, Symbol::Filler(_)))
                .map(|(i, _)| i)
                .collect(),
        }
    }
}

/// Lower-cases, decomposes and strips combining marks.
fn fold_case_and_marks(raw: &str) -> impl Iterator<Item = char> + '_ {
    raw.chars()
        .flat_map(char::to_lowercase)
        .nfd()
        .filter(|c| !is_combining_mark(*c))
}

/// Canonicalizes raw input into a stream over `alphabet`.
///
/// Steps: trim and lower-case; drop everything that is neither alphanumeric nor
/// whitespace; collapse whitespace runs into one space; fold accented letters to
/// their base letter; escape or drop digits and spaces per `escapes`; merge `j`
/// into `i` where the alphabet has no `j`. Anything still outside the alphabet
/// is dropped. Empty input yields empty output.
///
/// Diacritics are stripped before escaping so that a decomposed escape mark
/// (for example `ẍ`) is escaped like a plain one.
pub fn normalize_text(raw: &str, alphabet: &Alphabet, escapes: Escapes) -> String {
    let mut collapsed = String::with_capacity(raw.len());
    let mut in_space = false;
    for c in raw.trim().chars() {
        if c.is_whitespace() {
            if !in_space {
                collapsed.push(' ');
            }
            in_space = true;
        } else if c.is_alphanumeric() {
            collapsed.push(c);
            in_space = false;
        }
    }

    let mut out = String::with_capacity(collapsed.len() * 2);
    for c in fold_case_and_marks(collapsed.trim_end()) {
        if escapes == Escapes::Tokens {
            if let Some(name) = escape_name(c) {
                push_token(&mut out, name);
                continue;
            }
        }
        let c = alphabet.fold(c);
        if alphabet.contains(c) {
            out.push(c);
        }
    }
    out
}

/// Normalizes a matrix key: letter folding only, no escape tokens.
///
/// Symbols outside the alphabet are discarded; duplicates are kept.
pub fn fold_key(key: &str, alphabet: &Alphabet) -> Vec<char> {
    fold_case_and_marks(key)
        .map(|c| alphabet.fold(c))
        .filter(|c| alphabet.contains(*c))
        .collect()
}

/// Splits adjacent repeats and pads to even length.
///
/// Scans left to right inserting one filler between each identical pair, then
/// appends one filler if the length is odd. Inserted symbols are tagged so the
/// caller can record them in a [`FillerLog`].
pub fn prepare_digraphs(normalized: &str, filler: Filler) -> PreparedText {
    let chars: Vec<char> = normalized.chars().collect();
    let mut symbols = Vec::with_capacity(chars.len() + chars.len() / 2 + 1);
    for (i, &c) in chars.iter().enumerate() {
        symbols.push(Symbol::Text(c));
        if chars.get(i + 1) == Some(&c) {
            symbols.push(Symbol::Filler(filler.next_to(c)));
        }
    }
    if symbols.len() % 2 != 0 {
        let last = symbols.last().map(|s| s.char()).unwrap_or(filler.fallback);
        symbols.push(Symbol::Filler(filler.next_to(last)));
    }
    PreparedText { symbols }
}
