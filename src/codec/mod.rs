//! Percent encoding with the Backblaze B2 rules.
//!
//! ```
//! use b2_string_encoding::codec::{decode, encode};
//!
//! assert_eq!(encode("sparky's dog.pdf"), "sparky's%20dog.pdf");
//! assert_eq!(decode("sparky's+dog.pdf").unwrap(), "sparky's dog.pdf");
//! ```

mod decode;
mod encode;
pub mod error;
pub mod hex;
mod literal;

pub use self::decode::{decode, decode_to_bytes};
pub use self::encode::{encode, encode_bytes};
pub use self::error::{DecodeError, HexDigitError};
pub use self::hex::{decode_hex_digit, encode_hex_digit};
pub use self::literal::is_literal;
