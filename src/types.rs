//! Report and result types shared by the evaluator and the breach client.

/// Length classification of a password.
///
/// Boundaries are fixed design constants: fewer than 8 characters is too
/// short, 8 to 11 is moderate, 12 or more is strong.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthRating {
    TooShort,
    Moderate,
    Strong,
}

/// The four character classes a password is scanned for.
///
/// Declaration order is the reporting order: missing classes always appear
/// as Lowercase, Uppercase, Digits, Special.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// ASCII `a-z`.
    Lowercase,
    /// ASCII `A-Z`.
    Uppercase,
    /// ASCII `0-9`.
    Digits,
    /// Anything else, including whitespace and non-ASCII characters.
    Special,
}

/// Entropy classification.
///
/// More than 80 bits is excellent, more than 60 is good, anything else weak.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntropyRating {
    Weak,
    Good,
    Excellent,
}

/// Structured result of a strength evaluation.
///
/// Immutable value type, produced fresh on every call. `entropy_bits` is the
/// simplified estimate `length x log2(pool_size)` assuming uniform selection
/// from the union of detected character pools; it is not true entropy of the
/// actual string.
#[derive(Debug, Clone, PartialEq)]
pub struct StrengthReport {
    pub length: LengthRating,
    /// Character classes absent from the password, in stable order.
    pub missing_classes: Vec<CharClass>,
    /// Combined size of the character pools detected in the password.
    pub pool_size: u32,
    pub entropy_bits: f64,
    pub entropy: EntropyRating,
}

/// Outcome of a breach corpus lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BreachResult {
    /// The password's digest suffix was not in the returned range.
    NotFound,
    /// The password appears in the corpus, with its occurrence count.
    Found(u64),
    /// The lookup could not be completed; the reason is informational only.
    LookupFailed(String),
}

impl BreachResult {
    /// Returns `true` only for a confirmed corpus hit.
    pub fn is_compromised(&self) -> bool {
        matches!(self, BreachResult::Found(_))
    }

    /// Occurrence count for a confirmed hit, `None` otherwise.
    pub fn occurrences(&self) -> Option<u64> {
        match self {
            BreachResult::Found(count) => Some(*count),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breach_result_compromised() {
        assert!(BreachResult::Found(3).is_compromised());
        assert!(!BreachResult::NotFound.is_compromised());
        assert!(!BreachResult::LookupFailed("offline".to_string()).is_compromised());
    }

    #[test]
    fn test_breach_result_occurrences() {
        assert_eq!(BreachResult::Found(42).occurrences(), Some(42));
        assert_eq!(BreachResult::NotFound.occurrences(), None);
    }
}
