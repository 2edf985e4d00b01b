//! Cipher family presets and their immutable configuration.

use classic_core::{token_symbols, Alphabet, CipherError, Escapes, Filler};
use serde::{Deserialize, Serialize};

/// Cipher family.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CipherKind {
    /// Digraph substitution over a keyed 5×5 square.
    Playfair,
    /// Fractionation over a 5×5 square with labels `ADFGX`, then transposition.
    Adfgx,
    /// Fractionation over a 6×6 square with labels `ADFGVX`, then transposition.
    Adfgvx,
}

impl CipherKind {
    /// All families, in display order.
    pub const ALL: [CipherKind; 3] = [CipherKind::Playfair, CipherKind::Adfgx, CipherKind::Adfgvx];

    /// Preset configuration for the family.
    pub fn config(self) -> CipherConfig {
        match self {
            CipherKind::Playfair => CipherConfig {
                kind: self,
                alphabet: Alphabet::latin25(),
                filler: Filler::default(),
                escapes: Escapes::Tokens,
                labels: None,
            },
            CipherKind::Adfgx => CipherConfig {
                kind: self,
                alphabet: Alphabet::latin25(),
                filler: Filler::default(),
                escapes: Escapes::Drop,
                labels: Some(Labels::adfgx()),
            },
            CipherKind::Adfgvx => CipherConfig {
                kind: self,
                alphabet: Alphabet::alphanumeric36(),
                filler: Filler::default(),
                escapes: Escapes::Drop,
                labels: Some(Labels::adfgvx()),
            },
        }
    }

    /// Returns true for the families that take a transposition key.
    pub fn is_fractionating(self) -> bool {
        !matches!(self, CipherKind::Playfair)
    }

    /// Lower-case family name.
    pub fn name(self) -> &'static str {
        match self {
            CipherKind::Playfair => "playfair",
            CipherKind::Adfgx => "adfgx",
            CipherKind::Adfgvx => "adfgvx",
        }
    }
}

/// Coordinate letters naming grid rows and columns.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Labels(Vec<char>);

impl Labels {
    /// Labels from an arbitrary string, upper-cased.
    pub fn new(labels: &str) -> Self {
        Self(labels.chars().flat_map(char::to_uppercase).collect())
    }

    /// `ADFGX`.
    pub fn adfgx() -> Self {
        Self::new("ADFGX")
    }

    /// `ADFGVX`.
    pub fn adfgvx() -> Self {
        Self::new("ADFGVX")
    }

    /// Number of labels.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true when no labels are configured.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Label for coordinate `idx`.
    pub fn label(&self, idx: usize) -> char {
        self.0[idx]
    }

    /// Coordinate named by `label`, case-insensitively.
    pub fn index_of(&self, label: char) -> Option<usize> {
        let label = label.to_ascii_uppercase();
        self.0.iter().position(|&c| c == label)
    }

    fn first_duplicate(&self) -> Option<char> {
        self.0
            .iter()
            .enumerate()
            .find(|&(i, c)| self.0[..i].contains(c))
            .map(|(_, &c)| c)
    }
}

/// Everything a cipher call needs besides text and keys.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CipherConfig {
    /// Family this configuration drives.
    pub kind: CipherKind,
    /// Symbol set laid out in the key matrix.
    pub alphabet: Alphabet,
    /// Filler symbols for repeat splitting and padding.
    pub filler: Filler,
    /// Handling of digits and spaces during normalization.
    pub escapes: Escapes,
    /// Coordinate labels; required by the fractionating families.
    pub labels: Option<Labels>,
}

impl CipherConfig {
    /// Preset for `kind` with its alphabet replaced.
    pub fn with_alphabet(kind: CipherKind, alphabet: Alphabet) -> Self {
        Self {
            alphabet,
            ..kind.config()
        }
    }

    /// Checks that the configuration is usable.
    ///
    /// Both filler symbols must be distinct alphabet members, every
    /// escape-token letter must be an alphabet member when tokens are enabled,
    /// and the labels must be distinct and name every row and column.
    pub fn validate(&self) -> Result<(), CipherError> {
        if self.alphabet.is_empty() {
            return Err(CipherError::EmptyAlphabet);
        }
        if self.filler.primary == self.filler.fallback {
            return Err(CipherError::FillerCollision(self.filler.primary));
        }
        for c in [self.filler.primary, self.filler.fallback] {
            if !self.alphabet.contains(c) {
                return Err(CipherError::FillerNotInAlphabet(c));
            }
        }
        if self.escapes == Escapes::Tokens {
            if let Some(c) = token_symbols().find(|&c| !self.alphabet.contains(c)) {
                return Err(CipherError::SymbolNotInAlphabet(c));
            }
        }
        if self.kind.is_fractionating() {
            let (rows, cols) = self.alphabet.grid_shape();
            let needed = rows.max(cols);
            let available = self.labels.as_ref().map_or(0, Labels::len);
            if available < needed {
                return Err(CipherError::LabelsTooShort { needed, available });
            }
            if let Some(labels) = &self.labels {
                if let Some(c) = labels.first_duplicate() {
                    return Err(CipherError::DuplicateLabel(c));
                }
            }
        }
        Ok(())
    }

    pub(crate) fn labels(&self) -> Result<&Labels, CipherError> {
        let (rows, cols) = self.alphabet.grid_shape();
        self.labels.as_ref().ok_or(CipherError::LabelsTooShort {
            needed: rows.max(cols),
            available: 0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_validate() {
        for kind in CipherKind::ALL {
            kind.config().validate().expect(kind.name());
        }
    }

    #[test]
    fn presets_have_expected_grids() {
        assert_eq!(CipherKind::Playfair.config().alphabet.grid_shape(), (5, 5));
        assert_eq!(CipherKind::Adfgx.config().alphabet.grid_shape(), (5, 5));
        assert_eq!(CipherKind::Adfgvx.config().alphabet.grid_shape(), (6, 6));
        assert!(!CipherKind::Playfair.is_fractionating());
        assert!(CipherKind::Adfgvx.is_fractionating());
    }

    #[test]
    fn validate_rejects_missing_filler() {
        let config = CipherConfig::with_alphabet(
            CipherKind::Adfgx,
            Alphabet::new("abcdefghiklmnopqrstuvwyz").unwrap(),
        );
        assert_eq!(config.validate(), Err(CipherError::FillerNotInAlphabet('x')));
    }

    #[test]
    fn validate_rejects_short_labels() {
        let mut config = CipherKind::Adfgvx.config();
        config.labels = Some(Labels::adfgx());
        assert_eq!(
            config.validate(),
            Err(CipherError::LabelsTooShort {
                needed: 6,
                available: 5
            })
        );
        config.labels = None;
        assert_eq!(
            config.validate(),
            Err(CipherError::LabelsTooShort {
                needed: 6,
                available: 0
            })
        );
    }

    #[test]
    fn validate_rejects_alphabet_without_token_letters() {
        let config =
            CipherConfig::with_alphabet(CipherKind::Playfair, Alphabet::new("abcdexq").unwrap());
        assert!(matches!(
            config.validate(),
            Err(CipherError::SymbolNotInAlphabet(_))
        ));
    }

    #[test]
    fn validate_rejects_duplicate_labels() {
        let mut config = CipherKind::Adfgvx.config();
        config.labels = Some(Labels::new("aadfgv"));
        assert_eq!(config.validate(), Err(CipherError::DuplicateLabel('A')));
        let keys = crate::Keys::new("nzu", "bela");
        assert_eq!(
            crate::encrypt("attack", &keys, &config),
            Err(CipherError::DuplicateLabel('A'))
        );
    }

    #[test]
    fn validate_rejects_identical_fillers() {
        let mut config = CipherKind::Playfair.config();
        config.filler = Filler {
            primary: 'q',
            fallback: 'q',
        };
        assert_eq!(config.validate(), Err(CipherError::FillerCollision('q')));
        assert!(crate::encrypt("qq", &crate::Keys::square("monarchy"), &config).is_err());
    }

    #[test]
    fn labels_lookup_ignores_case() {
        let labels = Labels::adfgvx();
        assert_eq!(labels.index_of('v'), Some(4));
        assert_eq!(labels.index_of('Q'), None);
        assert_eq!(labels.label(5), 'X');
    }
}
