use super::error::HexDigitError;

const HEX: &[u8; 16] = b"0123456789ABCDEF";

/// Map a nibble (0..=15) to its uppercase hex digit.
pub fn encode_hex_digit(nibble: u32) -> Result<char, HexDigitError> {
    if nibble > 0x0F {
        return Err(HexDigitError::NibbleOutOfRange(nibble));
    }
    Ok(nibble_to_hex(nibble as u8))
}

/// Infallible form for callers that already split a byte; the high bits are masked off.
#[inline]
pub(crate) fn nibble_to_hex(nibble: u8) -> char {
    HEX[(nibble & 0x0F) as usize] as char
}

/// Map an uppercase hex digit back to its nibble. Lowercase is rejected.
pub fn decode_hex_digit(c: char) -> Result<u8, HexDigitError> {
    match c {
        '0'..='9' => Ok(c as u8 - b'0'),
        'A'..='F' => Ok(c as u8 - b'A' + 10),
        _ => Err(HexDigitError::InvalidDigit(c)),
    }
}
