use super::charge::ChargeRequest;
use crate::error::Result;
use async_trait::async_trait;

/// Executes charge requests against the payment API.
///
/// Implementations own the transport. They read the request through its
/// accessors and expect the reference ID, and with it the reference type, to
/// be set before submission.
#[async_trait]
pub trait ChargeExecutor: Send + Sync {
    /// Returns `false` when a request with the same charge reference ID was
    /// already submitted; the duplicate is not executed.
    async fn submit(&self, request: ChargeRequest) -> Result<bool>;
    async fn get(&self, charge_reference_id: &str) -> Result<Option<ChargeRequest>>;
    /// All accepted requests, in submission order.
    async fn submitted(&self) -> Result<Vec<ChargeRequest>>;
}

pub type ChargeExecutorBox = Box<dyn ChargeExecutor>;
