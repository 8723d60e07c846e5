//! Short code derivation from BLAKE2b digests.
//!
//! The default code is a plain 5-byte BLAKE2b digest of the URL, so the same
//! URL always maps to the same code. The randomized variant feeds a fresh
//! random key, salt and personalization into the same hash family; it exists
//! only to step around a code that is already taken.

use blake2::digest::Mac;
use blake2::digest::consts::U5;
use blake2::{Blake2b, Blake2bMac, Digest};
use rand::RngCore;

use crate::domain::entities::ShortCode;

/// BLAKE2b maximum key size.
const KEY_SIZE: usize = 64;

/// BLAKE2b salt size.
const SALT_SIZE: usize = 16;

/// BLAKE2b personalization size.
const PERSONAL_SIZE: usize = 16;

/// Derives the deterministic code of a URL.
///
/// # Examples
///
/// ```ignore
/// let code = hash_code("http://example.com");
/// assert_eq!(code.as_str(), "2a55966625");
/// ```
pub fn hash_code(url: &str) -> ShortCode {
    let digest = Blake2b::<U5>::digest(url.as_bytes());
    ShortCode::from_digest(digest.as_slice())
}

/// Derives a non-reproducible code for a URL.
///
/// Key, salt and personalization are drawn from the thread-local CSPRNG on
/// every call.
pub fn random_hash_code(url: &str) -> ShortCode {
    let mut key = [0u8; KEY_SIZE];
    let mut salt = [0u8; SALT_SIZE];
    let mut personal = [0u8; PERSONAL_SIZE];

    let mut rng = rand::rng();
    rng.fill_bytes(&mut key);
    rng.fill_bytes(&mut salt);
    rng.fill_bytes(&mut personal);

    // Sizes are the BLAKE2b maxima, which the constructor accepts.
    let mut mac = Blake2bMac::<U5>::new_with_salt_and_personal(&key, &salt, &personal)
        .expect("BLAKE2b parameter sizes are within limits");
    mac.update(url.as_bytes());

    ShortCode::from_digest(mac.finalize().into_bytes().as_slice())
}

/// Derives a code, randomized when `randomize` is set.
pub fn generate_code(url: &str, randomize: bool) -> ShortCode {
    if randomize {
        random_hash_code(url)
    } else {
        hash_code(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_hash_code_known_values() {
        assert_eq!(hash_code("http://example.com").as_str(), "2a55966625");
        assert_eq!(hash_code("https://example.com").as_str(), "a4830d068f");
        assert_eq!(
            hash_code("http://example.com/a/b?x=1&y=2").as_str(),
            "5c49d42879"
        );
    }

    #[test]
    fn test_hash_code_is_deterministic() {
        let url = "https://rust-lang.org/learn";
        assert_eq!(hash_code(url), hash_code(url));
        assert_eq!(generate_code(url, false), hash_code(url));
    }

    #[test]
    fn test_codes_have_expected_shape() {
        for url in ["", "http://a.b", "https://example.com/very/long/path?q=1"] {
            for randomize in [false, true] {
                let code = generate_code(url, randomize);
                assert_eq!(code.as_str().len(), 10);
                assert!(
                    code.as_str()
                        .chars()
                        .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
                );
                assert_eq!(code.block(), &code.as_str()[..2]);
            }
        }
    }

    #[test]
    fn test_random_hash_code_differs_between_calls() {
        let url = "http://example.com";
        let codes: HashSet<_> = (0..100).map(|_| random_hash_code(url)).collect();

        // 40-bit codes; 100 draws colliding down to a handful is practically impossible
        assert!(codes.len() > 95);
    }
}
