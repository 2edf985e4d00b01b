//! Error type shared by every cipher operation.

use thiserror::Error;

/// Failures raised by normalization, matrix lookup and the cipher transforms.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CipherError {
    /// The alphabet has no symbols.
    #[error("alphabet is empty")]
    EmptyAlphabet,

    /// The alphabet lists the same symbol twice.
    #[error("duplicate symbol in alphabet: {0:?}")]
    DuplicateSymbol(char),

    /// The transposition key normalizes to nothing.
    #[error("transposition key has no usable letters")]
    EmptyTransportKey,

    /// A symbol could not be located in the key matrix.
    #[error("symbol {0:?} is not in the alphabet")]
    SymbolNotInAlphabet(char),

    /// Fractionated ciphertext decoded to an odd number of coordinate letters.
    #[error("coordinate stream has odd length {0}")]
    OddCoordinateStream(usize),

    /// A ciphertext character is not one of the coordinate labels.
    #[error("character {0:?} is not a coordinate label")]
    InvalidLabel(char),

    /// A configured filler symbol is missing from the alphabet.
    #[error("filler symbol {0:?} is not in the alphabet")]
    FillerNotInAlphabet(char),

    /// The label set cannot address every row and column of the grid.
    #[error("grid needs {needed} coordinate labels but only {available} are configured")]
    LabelsTooShort {
        /// Labels required by the grid shape.
        needed: usize,
        /// Labels present in the configuration.
        available: usize,
    },

    /// A coordinate label appears more than once.
    #[error("duplicate coordinate label {0:?}")]
    DuplicateLabel(char),

    /// Primary and fallback fillers are the same symbol.
    #[error("fallback filler must differ from primary filler {0:?}")]
    FillerCollision(char),

    /// A filler log entry does not point at a filler symbol.
    #[error("filler log disagrees with decrypted text at position {position}")]
    FillerMismatch {
        /// Index into the decrypted symbol stream.
        position: usize,
    },

    /// An escape token is unterminated or names no known character.
    #[error("malformed escape token at position {position}")]
    MalformedEscape {
        /// Index of the opening escape mark.
        position: usize,
    },
}
