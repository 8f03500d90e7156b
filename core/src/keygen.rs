//! Deterministic search for keys that satisfy a [`DigestRule`].
//!
//! Candidates are drawn from a SHA-256 stream seeded by `"{seed}:{round}"`,
//! so the same seed always produces the same keys.

use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::acceptance::{DigestRule, KEY_ALPHABET};

pub const DEFAULT_MAX_ROUNDS: u64 = 10_000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedKey {
    pub key: String,
    /// Zero-based round at which the key was found.
    pub round: u64,
}

/// Derives the candidate for one round. Always `rule.key_length` symbols
/// from [`KEY_ALPHABET`].
pub fn candidate_for_round(rule: &DigestRule, seed: &str, round: u64) -> String {
    let mut block = Sha256::digest(format!("{seed}:{round}").as_bytes());
    let mut key = String::with_capacity(rule.key_length);

    'fill: loop {
        for byte in block.iter() {
            if key.len() == rule.key_length {
                break 'fill;
            }
            key.push(KEY_ALPHABET[(*byte as usize) % KEY_ALPHABET.len()] as char);
        }
        block = Sha256::digest(block);
    }

    key
}

pub fn generate_key(rule: &DigestRule, seed: &str, max_rounds: u64) -> Option<GeneratedKey> {
    for round in 0..max_rounds {
        let key = candidate_for_round(rule, seed, round);
        if rule.evaluate(&key).accepted() {
            tracing::debug!(target: "keygate.keygen", round, "key found");
            return Some(GeneratedKey { key, round });
        }
    }
    tracing::warn!(target: "keygate.keygen", max_rounds, "no key found within round budget");
    None
}

/// Generates `count` keys from derived seeds `"{seed}#{i}"`. Stops at the
/// first seed that exhausts `max_rounds`.
pub fn generate_keys(
    rule: &DigestRule,
    seed: &str,
    count: usize,
    max_rounds: u64,
) -> Option<Vec<GeneratedKey>> {
    (0..count)
        .map(|i| generate_key(rule, &format!("{seed}#{i}"), max_rounds))
        .collect()
}
