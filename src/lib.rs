//! Password strength and breach audit library
//!
//! This library evaluates a candidate password along two independent axes:
//! structural strength (length, character variety, entropy estimate) and
//! known-compromise status (membership in the Have I Been Pwned breach
//! corpus, queried via a k-anonymity range lookup).
//!
//! The two checks share no state and can be run in any order, or
//! concurrently. Only the first 5 characters of the password's SHA-1 digest
//! ever leave the process; the password itself and the remaining 35 digest
//! characters never cross the network boundary.
//!
//! # Features
//!
//! - `async` (default): Enables channel-based breach lookup with
//!   cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_audit::{check_password_breach, evaluate_password_strength, BreachResult};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//!
//! let report = evaluate_password_strength(&password);
//! println!("Length: {:?}", report.length);
//! println!("Missing: {:?}", report.missing_classes);
//! println!("Entropy: {:.1} bits ({:?})", report.entropy_bits, report.entropy);
//!
//! match check_password_breach(&password) {
//!     BreachResult::Found(count) => println!("Seen in {count} breaches"),
//!     BreachResult::NotFound => println!("No known breaches"),
//!     BreachResult::LookupFailed(reason) => println!("Lookup failed: {reason}"),
//! }
//! ```

// Internal modules
mod breach;
mod digest;
mod evaluator;
mod sections;
mod transport;
mod types;

// Public API
pub use breach::{BreachClient, check_password_breach};
pub use evaluator::evaluate_password_strength;
pub use transport::{HttpTransport, RangeResponse, RangeTransport, TransportError};
pub use types::{BreachResult, CharClass, EntropyRating, LengthRating, StrengthReport};

#[cfg(feature = "async")]
pub use breach::check_password_breach_tx;
