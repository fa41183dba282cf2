use super::error::DecodeError;
use super::hex::decode_hex_digit;
use super::literal::is_literal;

/// Decode a B2 percent-encoded string back into text.
///
/// Accepts literal characters, `%HH` escapes with uppercase hex and `+` as a
/// space. The decoded bytes must form valid UTF-8; use [`decode_to_bytes`] to
/// get at payloads that are not text.
pub fn decode(encoded: &str) -> Result<String, DecodeError> {
    let bytes = decode_to_bytes(encoded)?;
    String::from_utf8(bytes).map_err(|e| DecodeError::InvalidUtf8 {
        input: encoded.to_string(),
        offset: e.utf8_error().valid_up_to(),
    })
}

/// Decode a B2 percent-encoded string into raw bytes.
///
/// Positions in errors count characters, not bytes, of `encoded`.
pub fn decode_to_bytes(encoded: &str) -> Result<Vec<u8>, DecodeError> {
    let chars: Vec<char> = encoded.chars().collect();
    let len = chars.len();

    // Decoded output is never longer than the encoded input
    let mut out = Vec::with_capacity(len);
    let mut i = 0;

    while i < len {
        let c = chars[i];
        let b = match u8::try_from(c) {
            Ok(b) => b,
            Err(_) => {
                return Err(DecodeError::WideCodePoint {
                    input: encoded.to_string(),
                    position: i,
                })
            }
        };

        if is_literal(b) {
            out.push(b);
        } else if b == b'+' {
            out.push(b' ');
        } else if b == b'%' {
            if i + 2 >= len {
                return Err(DecodeError::TruncatedEscape {
                    input: encoded.to_string(),
                    position: i,
                });
            }
            let hex_at = |position: usize| {
                decode_hex_digit(chars[position]).map_err(|source| DecodeError::InvalidHexDigit {
                    input: encoded.to_string(),
                    position,
                    source,
                })
            };
            let high = hex_at(i + 1)?;
            let low = hex_at(i + 2)?;
            out.push(high * 16 + low);
            i += 2;
        } else {
            return Err(DecodeError::InvalidCharacter {
                input: encoded.to_string(),
                ch: c,
                position: i,
            });
        }

        i += 1;
    }

    Ok(out)
}
