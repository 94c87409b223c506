use super::ScanError;
use crate::backend::InventoryBackend;
use crate::clients::InventoryClient;
use crate::inventory_actor::RecordError;
use crate::model::{InlineStep, InventoryRecord, ScanMode, ScanRequest};
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// A scan the inventory service accepted.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanOutcome {
    /// The cached record after the adjustment.
    pub record: InventoryRecord,
    /// The service's human-readable acknowledgment.
    pub message: String,
}

/// Applies stock movements: service first, cache second.
///
/// The cached quantity is recomputed locally with [`ScanMode::apply`] once the
/// service acknowledges; the service's own result is never read back. A
/// failed call leaves the cache exactly as it was.
#[derive(Clone)]
pub struct ScanLedger {
    backend: Arc<dyn InventoryBackend>,
    cache: InventoryClient,
}

impl ScanLedger {
    pub fn new(backend: Arc<dyn InventoryBackend>, cache: InventoryClient) -> Self {
        Self { backend, cache }
    }

    /// Moves `delta` units of a resolved `record` in direction `mode`.
    ///
    /// # Errors
    /// * [`ScanError::Validation`] - `delta` is zero or the record has no barcode
    /// * [`ScanError::Transport`] - the service call failed; nothing changed
    /// * [`ScanError::Cache`] - the service accepted but the cache could not be updated
    #[instrument(skip(self, record), fields(id = %record.id, barcode = %record.barcode, %mode))]
    pub async fn apply_scan(
        &self,
        record: &InventoryRecord,
        delta: u32,
        mode: ScanMode,
    ) -> Result<ScanOutcome, ScanError> {
        if delta == 0 {
            return Err(ScanError::Validation("quantity must be positive".into()));
        }
        if record.barcode.is_empty() {
            return Err(ScanError::Validation(format!("{} has no barcode", record.id)));
        }

        let request = ScanRequest {
            barcode: record.barcode.clone(),
            quantity: delta,
            mode,
        };
        let ack = self.backend.scan(&request).await?;

        let updated = match self.cache.adjust_quantity(record.id, delta, mode).await {
            Ok(updated) => updated,
            Err(RecordError::NotFound(_)) => {
                warn!("Scanned record was not cached, caching it");
                let mut updated = record.clone();
                updated.quantity = mode.apply(record.quantity, delta);
                self.cache.upsert(updated.clone()).await?;
                updated
            }
            Err(e) => return Err(e.into()),
        };

        info!(delta, quantity = updated.quantity, "Scan applied");
        Ok(ScanOutcome {
            record: updated,
            message: ack.message,
        })
    }

    /// One `+1` / `-1` press from a box's contents list.
    pub async fn apply_inline_delta(
        &self,
        record: &InventoryRecord,
        step: InlineStep,
    ) -> Result<ScanOutcome, ScanError> {
        self.apply_scan(record, 1, step.mode()).await
    }
}
