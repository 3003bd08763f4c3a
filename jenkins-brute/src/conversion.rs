/// Convert hex ASCII character to nibble value (0-15), or `None` if it is not
/// a hex digit.
#[inline]
pub fn hex_to_nibble(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'A'..=b'F' => Some(c - b'A' + 10),
        b'a'..=b'f' => Some(c - b'a' + 10),
        _ => None,
    }
}

/// Parse a hex token into a 32-bit digest.
///
/// Accepts an optional `0x`/`0X` prefix followed by 1-8 hex digits in either
/// case. Anything else, including values wider than 32 bits, is rejected.
pub fn parse_digest(token: &str) -> Option<u32> {
    let bytes = token.as_bytes();
    let digits = match bytes {
        [b'0', b'x' | b'X', rest @ ..] => rest,
        _ => bytes,
    };

    if digits.is_empty() || digits.len() > 8 {
        return None;
    }

    digits
        .iter()
        .try_fold(0u32, |acc, &c| Some((acc << 4) | hex_to_nibble(c)? as u32))
}

/// Format a digest as lower-case hex without leading zeros or `0x`, the way
/// match lines report it.
#[inline]
pub fn digest_to_hex(digest: u32) -> String {
    format!("{digest:x}")
}
