use crate::domain::charge::ChargeRequest;
use crate::domain::ports::ChargeExecutor;
use crate::domain::reference_id::REFERENCE_ID_REQUIRED;
use crate::error::{ClientError, Result};
use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Default)]
struct Ledger {
    requests: Vec<ChargeRequest>,
    charge_reference_ids: HashSet<String>,
}

/// A dry-run executor that records requests instead of sending them.
///
/// Uses `Arc<RwLock<..>>` so clones share one ledger. Charge reference IDs
/// act as idempotency keys: a second request with an already seen ID is
/// dropped. Requests without a charge reference ID are always accepted.
#[derive(Default, Clone)]
pub struct InMemoryChargeExecutor {
    ledger: Arc<RwLock<Ledger>>,
}

impl InMemoryChargeExecutor {
    /// Creates a new, empty executor.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ChargeExecutor for InMemoryChargeExecutor {
    async fn submit(&self, request: ChargeRequest) -> Result<bool> {
        if request.reference().is_none() {
            return Err(ClientError::InvalidInput(REFERENCE_ID_REQUIRED.to_string()));
        }

        let mut ledger = self.ledger.write().await;
        if let Some(id) = request.charge_reference_id()
            && !ledger.charge_reference_ids.insert(id.to_string())
        {
            tracing::warn!(charge_reference_id = id, "Duplicate charge reference ID, skipping");
            return Ok(false);
        }

        tracing::debug!(
            amazon_reference_id = request.amazon_reference_id(),
            charge_reference_id = request.charge_reference_id(),
            "accepted charge request"
        );
        ledger.requests.push(request);
        Ok(true)
    }

    async fn get(&self, charge_reference_id: &str) -> Result<Option<ChargeRequest>> {
        let ledger = self.ledger.read().await;
        Ok(ledger
            .requests
            .iter()
            .find(|r| r.charge_reference_id() == Some(charge_reference_id))
            .cloned())
    }

    async fn submitted(&self) -> Result<Vec<ChargeRequest>> {
        let ledger = self.ledger.read().await;
        Ok(ledger.requests.clone())
    }
}
