//! Entropy section - estimates bits of security from length and character pools.

use crate::sections::variety::detect_classes;
use crate::types::EntropyRating;
use secrecy::{ExposeSecret, SecretString};

const LOWERCASE_POOL: u32 = 26;
const UPPERCASE_POOL: u32 = 26;
const DIGITS_POOL: u32 = 10;
const SPECIAL_POOL: u32 = 32;

const GOOD_BITS: f64 = 60.0;
const EXCELLENT_BITS: f64 = 80.0;

/// Estimates password entropy.
///
/// The pool is the sum of the contributions of the character classes
/// actually present in the password; the estimate is
/// `length x log2(pool)`, assuming uniform selection from the combined
/// pool. A password with an empty pool has zero entropy by definition.
///
/// # Returns
/// `(pool_size, entropy_bits)`
pub fn entropy_section(password: &SecretString) -> (u32, f64) {
    let pwd = password.expose_secret();
    let presence = detect_classes(pwd);

    let mut pool: u32 = 0;
    if presence.lowercase {
        pool += LOWERCASE_POOL;
    }
    if presence.uppercase {
        pool += UPPERCASE_POOL;
    }
    if presence.digits {
        pool += DIGITS_POOL;
    }
    if presence.special {
        pool += SPECIAL_POOL;
    }

    let entropy = if pool > 0 {
        pwd.chars().count() as f64 * f64::from(pool).log2()
    } else {
        0.0
    };
    (pool, entropy)
}

/// Classifies an entropy estimate.
///
/// # Returns
/// - `EntropyRating::Excellent` above 80 bits
/// - `EntropyRating::Good` above 60 bits, up to 80
/// - `EntropyRating::Weak` otherwise
pub fn entropy_rating(bits: f64) -> EntropyRating {
    if bits > EXCELLENT_BITS {
        EntropyRating::Excellent
    } else if bits > GOOD_BITS {
        EntropyRating::Good
    } else {
        EntropyRating::Weak
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn estimate(s: &str) -> (u32, f64) {
        entropy_section(&SecretString::new(s.to_string().into()))
    }

    #[test]
    fn test_entropy_section_lowercase_only() {
        let (pool, bits) = estimate("aaaaaaaa");
        assert_eq!(pool, 26);
        // 8 x log2(26) ~ 37.6 bits
        assert!((bits - 8.0 * 26.0_f64.log2()).abs() < 1e-9);
        assert_eq!(entropy_rating(bits), EntropyRating::Weak);
    }

    #[test]
    fn test_entropy_section_all_classes() {
        let (pool, bits) = estimate("Aa1!Aa1!Aa1!");
        assert_eq!(pool, 26 + 26 + 10 + 32);
        // 12 x log2(94) ~ 78.9 bits
        assert!((bits - 12.0 * 94.0_f64.log2()).abs() < 1e-9);
        assert_eq!(entropy_rating(bits), EntropyRating::Good);
    }

    #[test]
    fn test_entropy_section_empty_pool() {
        let (pool, bits) = estimate("");
        assert_eq!(pool, 0);
        assert_eq!(bits, 0.0);
        assert_eq!(entropy_rating(bits), EntropyRating::Weak);
    }

    #[test]
    fn test_entropy_rating_boundaries() {
        assert_eq!(entropy_rating(60.0), EntropyRating::Weak);
        assert_eq!(entropy_rating(60.1), EntropyRating::Good);
        assert_eq!(entropy_rating(80.0), EntropyRating::Good);
        assert_eq!(entropy_rating(80.1), EntropyRating::Excellent);
    }

    #[test]
    fn test_entropy_section_special_only() {
        let (pool, bits) = estimate("            ");
        assert_eq!(pool, 32);
        assert!((bits - 12.0 * 32.0_f64.log2()).abs() < 1e-9);
    }
}
