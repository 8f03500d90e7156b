//! Credential acceptance test.
//!
//! A candidate is accepted when it is a 24-symbol alphanumeric string whose
//! SHA-256 hex digest starts with two decimal digits and ends with two
//! hex letters. The rule is public and derivable; it gates, it does not
//! authenticate.

mod config;
mod digest;
mod r#trait;
mod verdict;

pub use digest::{digest_has_key_shape, evaluate, key_digest_hex, DigestRule, KEY_ALPHABET};
pub use r#trait::AcceptanceTest;
pub use verdict::{AcceptanceVerdict, VerdictReason};
