use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VerdictReason {
    Validated,
    /// Wrong length or a symbol outside `[A-Za-z0-9]`.
    InvalidFormat,
    /// Well-formed, but the digest does not have the key shape.
    InvalidKey,
}

impl VerdictReason {
    pub fn message(&self) -> &'static str {
        match self {
            VerdictReason::Validated => "Key validated successfully",
            VerdictReason::InvalidFormat => "Invalid key format",
            VerdictReason::InvalidKey => "Invalid key",
        }
    }
}

impl std::fmt::Display for VerdictReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AcceptanceVerdict {
    accepted: bool,
    reason: VerdictReason,
}

impl AcceptanceVerdict {
    pub fn validated() -> Self {
        Self {
            accepted: true,
            reason: VerdictReason::Validated,
        }
    }

    pub fn rejected(reason: VerdictReason) -> Self {
        debug_assert!(reason != VerdictReason::Validated);
        Self {
            accepted: false,
            reason,
        }
    }

    pub fn accepted(&self) -> bool {
        self.accepted
    }

    pub fn reason(&self) -> VerdictReason {
        self.reason
    }
}
