//! Error types for EOS wire encoding/decoding and text parsing.

use thiserror::Error;

/// Error during binary encoding.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EncodeError {
    /// A fixed-width cryptographic blob has the wrong content length.
    ///
    /// Keys and signatures are never padded: a 32-byte key content is a bug
    /// at the call site, not something the codec papers over.
    #[error("{what} content must be {expected} bytes, was {actual}")]
    FixedWidthMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    /// A non-optional struct field has no value to encode.
    #[error("struct {strukt} field {field} is required but has no value")]
    MissingField {
        strukt: &'static str,
        field: &'static str,
    },

    /// A pre-serialized hex action payload is not valid hex text.
    #[error("action payload is not valid hex: {0}")]
    InvalidHexPayload(String),

    #[error("{field} length {len} exceeds maximum {max}")]
    LengthExceedsLimit {
        field: &'static str,
        len: usize,
        max: usize,
    },
}

/// Error during binary decoding.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecodeError {
    /// A read would exceed the remaining input. Reported before any byte is
    /// consumed, so a failed decode never yields a partially-read value.
    #[error("{field}: required {required} bytes, remaining {remaining}")]
    InsufficientData {
        field: &'static str,
        required: usize,
        remaining: usize,
    },

    #[error("varint exceeds maximum length (10 bytes)")]
    VarintTooLong,

    #[error("varint overflow (value exceeds target width)")]
    VarintOverflow,

    #[error("invalid UTF-8 in {field}")]
    InvalidUtf8 { field: &'static str },

    #[error("invalid bool value: {value} (expected 0x00 or 0x01)")]
    InvalidBool { value: u8 },

    #[error("unknown curve tag: {tag}")]
    InvalidCurve { tag: u8 },

    #[error("{field} length {len} exceeds maximum {max}")]
    LengthExceedsLimit {
        field: &'static str,
        len: usize,
        max: usize,
    },
}

/// Error parsing a textual form (names, asset strings).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// Name strings only allow `.`, `1`-`5` and `a`-`z`.
    #[error("invalid character {ch:?} at index {index} in name")]
    InvalidNameChar { ch: char, index: usize },

    #[error("asset string {0:?} has no amount")]
    MissingAmount(String),

    #[error("asset amount {0:?} is not a decimal number")]
    InvalidAmount(String),

    #[error("asset amount {0:?} does not fit a signed 64-bit integer")]
    AmountOverflow(String),

    #[error("ticker {0:?} must be 1-7 uppercase ASCII characters")]
    InvalidTicker(String),

    #[error("precision {precision} exceeds maximum {max}")]
    PrecisionTooLarge { precision: usize, max: usize },
}
