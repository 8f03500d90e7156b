use sha2::{Digest, Sha256};

use super::{AcceptanceTest, AcceptanceVerdict, VerdictReason};

/// The 62 symbols a key may contain.
pub const KEY_ALPHABET: &[u8; 62] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigestRule {
    pub key_length: usize,
    pub head_digits: usize,
    pub tail_letters: usize,
}

impl Default for DigestRule {
    fn default() -> Self {
        Self {
            key_length: 24,
            head_digits: 2,
            tail_letters: 2,
        }
    }
}

impl DigestRule {
    pub fn is_valid_format(&self, candidate: &str) -> bool {
        candidate.chars().count() == self.key_length
            && candidate.chars().all(|c| c.is_ascii_alphanumeric())
    }

    pub fn evaluate(&self, candidate: &str) -> AcceptanceVerdict {
        if !self.is_valid_format(candidate) {
            return AcceptanceVerdict::rejected(VerdictReason::InvalidFormat);
        }

        let digest = key_digest_hex(candidate);
        if !digest_has_key_shape(&digest, self.head_digits, self.tail_letters) {
            return AcceptanceVerdict::rejected(VerdictReason::InvalidKey);
        }

        AcceptanceVerdict::validated()
    }
}

impl AcceptanceTest for DigestRule {
    fn name(&self) -> &str {
        "digest"
    }

    fn evaluate(&self, candidate: &str) -> AcceptanceVerdict {
        DigestRule::evaluate(self, candidate)
    }
}

/// Lowercase hex SHA-256 of the candidate's UTF-8 bytes (64 chars).
pub fn key_digest_hex(candidate: &str) -> String {
    hex::encode(Sha256::digest(candidate.as_bytes()))
}

/// True when the first `head_digits` chars of `digest_hex` are decimal
/// digits and the last `tail_letters` chars are letters.
pub fn digest_has_key_shape(digest_hex: &str, head_digits: usize, tail_letters: usize) -> bool {
    let bytes = digest_hex.as_bytes();
    if bytes.len() < head_digits + tail_letters {
        return false;
    }
    let head = &bytes[..head_digits];
    let tail = &bytes[bytes.len() - tail_letters..];
    head.iter().all(u8::is_ascii_digit) && tail.iter().all(u8::is_ascii_alphabetic)
}

/// Evaluates `candidate` against the default rule.
pub fn evaluate(candidate: &str) -> AcceptanceVerdict {
    DigestRule::default().evaluate(candidate)
}
