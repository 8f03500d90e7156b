use super::AcceptanceVerdict;

pub trait AcceptanceTest: Send + Sync {
    fn name(&self) -> &str;

    /// Must be pure and total: the same candidate always yields the same
    /// verdict and evaluation never fails.
    fn evaluate(&self, candidate: &str) -> AcceptanceVerdict;
}
