//! Character variety section - checks for uppercase, lowercase, digits, special chars.

use crate::types::CharClass;
use secrecy::{ExposeSecret, SecretString};

/// Presence flags for the four character classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ClassPresence {
    pub lowercase: bool,
    pub uppercase: bool,
    pub digits: bool,
    pub special: bool,
}

/// Scans the password once and records which classes occur.
///
/// Classes are disjoint: anything outside ASCII letters and digits counts
/// as special, whitespace and non-ASCII included.
pub(crate) fn detect_classes(pwd: &str) -> ClassPresence {
    let mut presence = ClassPresence {
        lowercase: false,
        uppercase: false,
        digits: false,
        special: false,
    };
    for c in pwd.chars() {
        if c.is_ascii_lowercase() {
            presence.lowercase = true;
        } else if c.is_ascii_uppercase() {
            presence.uppercase = true;
        } else if c.is_ascii_digit() {
            presence.digits = true;
        } else {
            presence.special = true;
        }
    }
    presence
}

/// Reports the character classes missing from the password.
///
/// # Returns
/// The absent classes in stable order: Lowercase, Uppercase, Digits, Special.
/// An empty vector means all four classes are present.
pub fn character_variety_section(password: &SecretString) -> Vec<CharClass> {
    let presence = detect_classes(password.expose_secret());

    let mut missing = Vec::new();
    if !presence.lowercase {
        missing.push(CharClass::Lowercase);
    }
    if !presence.uppercase {
        missing.push(CharClass::Uppercase);
    }
    if !presence.digits {
        missing.push(CharClass::Digits);
    }
    if !presence.special {
        missing.push(CharClass::Special);
    }
    missing
}

#[cfg(test)]
mod tests {
    use super::*;

    fn missing(s: &str) -> Vec<CharClass> {
        character_variety_section(&SecretString::new(s.to_string().into()))
    }

    #[test]
    fn test_variety_section_lowercase_only() {
        assert_eq!(
            missing("abcdefgh"),
            vec![CharClass::Uppercase, CharClass::Digits, CharClass::Special]
        );
    }

    #[test]
    fn test_variety_section_all_classes() {
        assert_eq!(missing("HasAll123!@#"), vec![]);
    }

    #[test]
    fn test_variety_section_empty() {
        assert_eq!(
            missing(""),
            vec![
                CharClass::Lowercase,
                CharClass::Uppercase,
                CharClass::Digits,
                CharClass::Special
            ]
        );
    }

    #[test]
    fn test_variety_section_order_is_stable() {
        // Special present, everything else missing
        assert_eq!(
            missing("!!!"),
            vec![CharClass::Lowercase, CharClass::Uppercase, CharClass::Digits]
        );
    }

    #[test]
    fn test_detect_classes_unicode_counts_as_special() {
        let presence = detect_classes("héllo wörld");
        assert!(presence.lowercase);
        assert!(presence.special);
        assert!(!presence.uppercase);
        assert!(!presence.digits);
    }
}
