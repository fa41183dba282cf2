/// Bytes that B2 passes through a URL unescaped.
///
/// ALPHA / DIGIT plus `. _ - / ~ ! $ ' ( ) * ; = : @`. Any change here breaks
/// compatibility with the service, so the set is fixed at compile time.
const LITERAL_PUNCTUATION: &[u8] = b"._-/~!$'()*;=:@";

static LITERALS: [bool; 256] = build_literal_table();

const fn build_literal_table() -> [bool; 256] {
    let mut table = [false; 256];

    let mut b = 0;
    while b < 128 {
        let c = b as u8;
        table[b] = c.is_ascii_alphanumeric();
        b += 1;
    }

    let mut i = 0;
    while i < LITERAL_PUNCTUATION.len() {
        table[LITERAL_PUNCTUATION[i] as usize] = true;
        i += 1;
    }

    table
}

/// Returns `true` if `b` is written as itself in an encoded string.
#[inline]
pub fn is_literal(b: u8) -> bool {
    LITERALS[b as usize]
}
