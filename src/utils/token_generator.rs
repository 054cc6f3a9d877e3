//! Random token generation for short links.

use rand::Rng;

/// Alphabet the short-link tokens are drawn from.
pub const TOKEN_ALPHABET: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Draws a random token of `length` characters from [`TOKEN_ALPHABET`].
///
/// Pure with respect to the supplied random source: a seeded RNG yields a
/// deterministic token, which is what the tests rely on. Callers in the
/// service layer pass [`rand::rng`].
pub fn generate_token<R: Rng + ?Sized>(rng: &mut R, length: usize) -> String {
    (0..length)
        .map(|_| {
            let idx = rng.random_range(0..TOKEN_ALPHABET.len());
            TOKEN_ALPHABET[idx] as char
        })
        .collect()
}
