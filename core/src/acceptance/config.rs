use crate::config::{AcceptanceProvider, AppConfig, DigestRuleConfig};

use super::DigestRule;

impl From<DigestRuleConfig> for DigestRule {
    fn from(c: DigestRuleConfig) -> Self {
        Self {
            key_length: c.key_length,
            head_digits: c.head_digits,
            tail_letters: c.tail_letters,
        }
    }
}

impl AppConfig {
    pub fn digest_rule(&self) -> DigestRule {
        match &self.acceptance.provider {
            AcceptanceProvider::Digest(rule_cfg) => rule_cfg.clone().into(),
        }
    }
}
