//! In-memory [`InventoryBackend`] for unit tests.

use super::{BackendError, InventoryBackend};
use crate::model::{InventoryRecord, NewRecord, RecordId, RecordUpdate, ScanAck, ScanMode, ScanRequest};
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

/// Behaves like the inventory service, minus HTTP.
///
/// `out` scans clamp at zero unless [`FakeBackend::strict`] is set, in which
/// case they are rejected with 400 when stock is short. [`FakeBackend::go_down`]
/// makes every call fail with 503.
#[derive(Default)]
pub struct FakeBackend {
    records: Mutex<Vec<InventoryRecord>>,
    scans: Mutex<Vec<ScanRequest>>,
    strict: AtomicBool,
    down: AtomicBool,
}

impl FakeBackend {
    pub fn with_records(records: Vec<InventoryRecord>) -> Self {
        Self {
            records: Mutex::new(records),
            ..Default::default()
        }
    }

    pub fn strict(self) -> Self {
        self.strict.store(true, Ordering::SeqCst);
        self
    }

    pub fn go_down(&self) {
        self.down.store(true, Ordering::SeqCst);
    }

    pub fn scans(&self) -> Vec<ScanRequest> {
        self.scans.lock().unwrap().clone()
    }

    pub fn quantity_of(&self, id: RecordId) -> Option<u32> {
        self.records
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.id == id)
            .map(|r| r.quantity)
    }

    fn check_up(&self) -> Result<(), BackendError> {
        if self.down.load(Ordering::SeqCst) {
            return Err(status(503, "Service Unavailable"));
        }
        Ok(())
    }
}

fn status(status: u16, detail: &str) -> BackendError {
    BackendError::Status {
        status,
        detail: detail.to_string(),
    }
}

#[async_trait]
impl InventoryBackend for FakeBackend {
    async fn list(&self) -> Result<Vec<InventoryRecord>, BackendError> {
        self.check_up()?;
        Ok(self.records.lock().unwrap().clone())
    }

    async fn get_by_barcode(&self, barcode: &str) -> Result<Option<InventoryRecord>, BackendError> {
        self.check_up()?;
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.barcode == barcode)
            .cloned())
    }

    async fn scan(&self, request: &ScanRequest) -> Result<ScanAck, BackendError> {
        self.check_up()?;
        let mut records = self.records.lock().unwrap();
        let record = records
            .iter_mut()
            .find(|r| r.barcode == request.barcode)
            .ok_or_else(|| status(404, "Item not found"))?;
        if request.mode == ScanMode::Out
            && self.strict.load(Ordering::SeqCst)
            && record.quantity < request.quantity
        {
            return Err(status(400, "Not enough quantity in stock."));
        }
        record.quantity = request.mode.apply(record.quantity, request.quantity);
        self.scans.lock().unwrap().push(request.clone());
        Ok(ScanAck {
            message: format!(
                "{} {}. New quantity: {}",
                request.mode, record.item_name, record.quantity
            ),
        })
    }

    async fn create(&self, record: &NewRecord) -> Result<InventoryRecord, BackendError> {
        self.check_up()?;
        let mut records = self.records.lock().unwrap();
        let id = records.iter().map(|r| r.id.0).max().unwrap_or(0) + 1;
        let mut created = InventoryRecord::new(id, &record.item_name, format!("{id:012}"), record.quantity);
        created.location = record.location.clone();
        created.category = record.category.clone();
        records.push(created.clone());
        Ok(created)
    }

    async fn update(&self, id: RecordId, update: &RecordUpdate) -> Result<InventoryRecord, BackendError> {
        self.check_up()?;
        let mut records = self.records.lock().unwrap();
        let record = records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| status(404, "Item not found"))?;
        if let Some(name) = &update.item_name {
            record.item_name = name.clone();
        }
        if let Some(quantity) = update.quantity {
            record.quantity = quantity;
        }
        if update.location.is_some() {
            record.location = update.location.clone();
        }
        Ok(record.clone())
    }

    async fn delete(&self, id: RecordId) -> Result<(), BackendError> {
        self.check_up()?;
        let mut records = self.records.lock().unwrap();
        let before = records.len();
        records.retain(|r| r.id != id);
        if records.len() == before {
            return Err(status(404, "Item not found"));
        }
        Ok(())
    }
}
