use thiserror::Error;

/// A hex digit helper was handed something outside its contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HexDigitError {
    #[error("cannot convert integer {0} to hex digit")]
    NibbleOutOfRange(u32),

    #[error("unable to parse '{0}' as a hex digit")]
    InvalidDigit(char),
}

/// Malformed percent-encoded input.
///
/// Every variant carries the full input so the message can be logged as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("invalid URL encoded string '{input}': found 16-bit code point at position {position}")]
    WideCodePoint { input: String, position: usize },

    #[error("invalid URL encoded string '{input}': invalid character '{ch}' at position {position}")]
    InvalidCharacter {
        input: String,
        ch: char,
        position: usize,
    },

    #[error("invalid URL encoded string '{input}': expected hex digit but string was truncated at position {position}")]
    TruncatedEscape { input: String, position: usize },

    #[error("invalid URL encoded string '{input}' at position {position}: {source}")]
    InvalidHexDigit {
        input: String,
        position: usize,
        #[source]
        source: HexDigitError,
    },

    #[error("invalid URL encoded string '{input}': decoded bytes are not valid UTF-8 (byte {offset})")]
    InvalidUtf8 { input: String, offset: usize },
}

impl DecodeError {
    /// Character position in the encoded input where decoding stopped.
    ///
    /// `None` for [`DecodeError::InvalidUtf8`], which is detected after the scan
    /// and reports a byte offset into the decoded output instead.
    pub fn position(&self) -> Option<usize> {
        match self {
            DecodeError::WideCodePoint { position, .. }
            | DecodeError::InvalidCharacter { position, .. }
            | DecodeError::TruncatedEscape { position, .. }
            | DecodeError::InvalidHexDigit { position, .. } => Some(*position),
            DecodeError::InvalidUtf8 { .. } => None,
        }
    }

    /// The encoded input that failed to decode.
    pub fn input(&self) -> &str {
        match self {
            DecodeError::WideCodePoint { input, .. }
            | DecodeError::InvalidCharacter { input, .. }
            | DecodeError::TruncatedEscape { input, .. }
            | DecodeError::InvalidHexDigit { input, .. }
            | DecodeError::InvalidUtf8 { input, .. } => input,
        }
    }
}
