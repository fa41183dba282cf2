use super::hex::nibble_to_hex;
use super::literal::is_literal;

/// Percent-encode `text` using the B2 literal set.
///
/// The text is taken as its UTF-8 bytes; literal bytes are kept, every other
/// byte becomes `%HH` with uppercase hex. Never emits `+`.
pub fn encode(text: &str) -> String {
    encode_bytes(text.as_bytes())
}

/// Percent-encode arbitrary bytes using the B2 literal set.
pub fn encode_bytes(bytes: &[u8]) -> String {
    // In the worst case, every byte becomes "%XX" (3 chars)
    let mut out = String::with_capacity(bytes.len() * 3);

    for &b in bytes {
        if is_literal(b) {
            out.push(b as char);
            continue;
        }
        out.push('%');
        out.push(nibble_to_hex(b >> 4));
        out.push(nibble_to_hex(b & 0x0F));
    }

    out
}
