use rand::Rng;

/// Every character a generated sequence can contain: digits, lowercase and
/// uppercase ASCII letters, then ASCII punctuation. 94 distinct symbols.
pub const ALPHABET: &[u8; 94] = b"0123456789\
abcdefghijklmnopqrstuvwxyz\
ABCDEFGHIJKLMNOPQRSTUVWXYZ\
!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Draws `length` characters uniformly (with replacement) from [`ALPHABET`].
///
/// Zero or negative lengths produce an empty string.
pub fn random_sequence<R: Rng + ?Sized>(rng: &mut R, length: i64) -> String {
    let count = usize::try_from(length).unwrap_or(0);

    (0..count)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}

#[cfg(test)]
pub fn is_alphabet_char(c: char) -> bool {
    c.is_ascii() && ALPHABET.contains(&(c as u8))
}
