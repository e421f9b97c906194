//! Short code generation.
//!
//! Codes are drawn from an alphabet without look-alike characters
//! (no `0`/`O`, `1`/`I`/`l`), so they survive being read aloud or retyped.

use rand::Rng;

/// Length of a generated short code.
pub const SHORT_URL_LEN: usize = 8;

/// Characters a short code may contain.
pub const ALPHABET: &[u8] = b"23456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Generates a random short code of [`SHORT_URL_LEN`] characters.
///
/// # Examples
///
/// ```ignore
/// let code = generate_url_id();
/// assert_eq!(code.len(), 8);
/// ```
pub fn generate_url_id() -> String {
    let mut rng = rand::rng();

    (0..SHORT_URL_LEN)
        .map(|_| {
            let idx = rng.random_range(0..ALPHABET.len());
            ALPHABET[idx] as char
        })
        .collect()
}

/// Joins the public base URL and a short code with exactly one slash.
pub fn build_short_url(base_url: &str, url_id: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), url_id)
}

/// Returns true if `code` could have been produced by [`generate_url_id`].
///
/// Lets the redirect path reject obviously foreign codes before touching
/// the database.
pub fn is_valid_url_id(code: &str) -> bool {
    code.len() == SHORT_URL_LEN && code.bytes().all(|b| ALPHABET.contains(&b))
}
