use std::sync::Arc;

use keygate_core::api::{AcceptanceProvider, AcceptanceTest, AppConfig, GateController};

pub fn build_acceptance(cfg: &AppConfig) -> Arc<dyn AcceptanceTest> {
    match &cfg.acceptance.provider {
        AcceptanceProvider::Digest(_) => Arc::new(cfg.digest_rule()),
    }
}

pub fn build_gate(cfg: &AppConfig) -> GateController {
    GateController::new(build_acceptance(cfg), &cfg.gate)
}
