//! Password strength evaluator - main evaluation logic.

use secrecy::SecretString;

use crate::sections::{character_variety_section, entropy_rating, entropy_section, length_section};
use crate::types::StrengthReport;

/// Evaluates password strength and returns a structured report.
///
/// Total function: every input, including the empty string, produces a
/// well-formed report. No I/O, no side effects; calling it twice on the
/// same input yields identical reports.
///
/// # Arguments
/// * `password` - The password to evaluate
///
/// # Returns
/// A `StrengthReport` with length rating, missing character classes,
/// pool size, entropy estimate and entropy rating.
pub fn evaluate_password_strength(password: &SecretString) -> StrengthReport {
    // Sections run in sequence; each contributes one piece of the report
    let length = length_section(password);
    let missing_classes = character_variety_section(password);
    let (pool_size, entropy_bits) = entropy_section(password);
    let entropy = entropy_rating(entropy_bits);

    StrengthReport {
        length,
        missing_classes,
        pool_size,
        entropy_bits,
        entropy,
    }
}
