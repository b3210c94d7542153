//! SHA-1 digest helpers for the k-anonymity range query.

use secrecy::{ExposeSecret, SecretString};
use sha1::{Digest, Sha1};

/// Number of digest characters sent to the remote corpus.
pub(crate) const PREFIX_LEN: usize = 5;

/// SHA-1 of the secret's raw bytes, rendered as 40 uppercase hex characters.
pub(crate) fn sha1_hex_upper(password: &SecretString) -> String {
    let mut hasher = Sha1::new();
    hasher.update(password.expose_secret().as_bytes());
    hex::encode_upper(hasher.finalize())
}

/// Splits a digest into its 5-character prefix and 35-character suffix.
pub(crate) fn split_digest(digest: &str) -> (&str, &str) {
    digest.split_at(PREFIX_LEN)
}
