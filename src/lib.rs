//! Percent encoding and decoding that matches the Backblaze B2 string encoding rules.

pub mod codec;
pub mod utils;

pub use codec::{decode, decode_to_bytes, encode, encode_bytes, DecodeError, HexDigitError};
