//! Base62 rendering of counters, used for compact record ids.

const ALPHABET: &[u8; 62] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Encode `n` with the alphabet 0-9, A-Z, a-z, left-padded with '0' to at
/// least `min_width` characters. Zero encodes to "0" before padding.
pub fn encode_padded(mut n: u64, min_width: usize) -> String {
    // u64::MAX needs 11 base62 digits
    let mut digits = Vec::with_capacity(min_width.max(11));
    loop {
        digits.push(ALPHABET[(n % 62) as usize]);
        n /= 62;
        if n == 0 {
            break;
        }
    }
    while digits.len() < min_width {
        digits.push(b'0');
    }
    digits.iter().rev().map(|&b| b as char).collect()
}
