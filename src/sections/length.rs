//! Length section - classifies password length.

use crate::types::LengthRating;
use secrecy::{ExposeSecret, SecretString};

const MODERATE_LENGTH: usize = 8;
const STRONG_LENGTH: usize = 12;

/// Classifies the password length in characters.
///
/// # Returns
/// - `LengthRating::TooShort` below 8 characters
/// - `LengthRating::Moderate` from 8 to 11 characters
/// - `LengthRating::Strong` from 12 characters up
pub fn length_section(password: &SecretString) -> LengthRating {
    let len = password.expose_secret().chars().count();
    if len < MODERATE_LENGTH {
        LengthRating::TooShort
    } else if len < STRONG_LENGTH {
        LengthRating::Moderate
    } else {
        LengthRating::Strong
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rate(s: &str) -> LengthRating {
        length_section(&SecretString::new(s.to_string().into()))
    }

    #[test]
    fn test_length_section_too_short() {
        assert_eq!(rate("Short1!"), LengthRating::TooShort);
        assert_eq!(rate(""), LengthRating::TooShort);
    }

    #[test]
    fn test_length_section_boundaries() {
        assert_eq!(rate("1234567"), LengthRating::TooShort);
        assert_eq!(rate("12345678"), LengthRating::Moderate);
        assert_eq!(rate("12345678901"), LengthRating::Moderate);
        assert_eq!(rate("123456789012"), LengthRating::Strong);
    }

    #[test]
    fn test_length_section_counts_characters_not_bytes() {
        // 8 characters, more than 8 bytes
        assert_eq!(rate("pässwörd"), LengthRating::Moderate);
    }
}
