use thiserror::Error;

/// Errors returned by truth table construction, the Möbius transform, the formula renderer and the S-box driver.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnfError {
    /// The truth table length is 0 or not a power of 2.
    #[error("Invalid truth table length {0}, should be 2^n, n >= 0")]
    InvalidLength(usize),
    /// Assignment vectors and coefficients given to the renderer don't have the same length.
    #[error("Length mismatch between {vectors} assignment vectors and {coefficients} coefficients")]
    LengthMismatch {
        /// Number of assignment vectors
        vectors: usize,
        /// Number of ANF coefficients
        coefficients: usize,
    },
    /// The hexadecimal truth table string length is not a power of 2.
    #[error("Hex truth table length must be a power of 2")]
    WrongStringHexTruthTableLength,
    /// The string contains a non hexadecimal digit.
    #[error("Error parsing string hex number")]
    StringHexParseError,
    /// The integer truth table has bits set beyond position $2^n - 1$.
    #[error("Too big truth table for the given variable count")]
    TooBigTruthTableForVarCount,
    /// The variable count exceeds the supported maximum.
    #[error("Too big variable count, must be <= {0}")]
    TooBigVariableCount(usize),
    /// The driver was asked for a coordinate function the S-box doesn't have.
    #[error("Output bit {bit} out of range, S-box has {output_bits} output bits")]
    OutputBitOutOfRange {
        /// Requested output bit
        bit: usize,
        /// S-box output width
        output_bits: usize,
    },
    /// An S-box entry doesn't fit in the declared output width.
    #[error("S-box entry {index} has value {value:#x}, which doesn't fit in {output_bits} bits")]
    SBoxEntryTooWide {
        /// Position of the entry in the S-box
        index: usize,
        /// Entry value
        value: u32,
        /// Declared output width
        output_bits: usize,
    },
}
