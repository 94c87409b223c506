//! # Inventory Service
//!
//! The system of record for inventory. Everything here crosses the process
//! boundary; the local cache only ever reflects completed calls.

pub mod error;
pub mod http;
#[cfg(test)]
pub(crate) mod testing;

pub use error::*;
pub use http::*;

use crate::model::{InventoryRecord, NewRecord, RecordId, RecordUpdate, ScanAck, ScanRequest};
use async_trait::async_trait;

/// Operations consumed from the inventory service.
#[async_trait]
pub trait InventoryBackend: Send + Sync {
    /// `GET /inventory/`
    async fn list(&self) -> Result<Vec<InventoryRecord>, BackendError>;

    /// `GET /inventory/barcode/{barcode}`; `Ok(None)` when the service has no such barcode.
    async fn get_by_barcode(&self, barcode: &str) -> Result<Option<InventoryRecord>, BackendError>;

    /// `POST /inventory/scan`
    async fn scan(&self, request: &ScanRequest) -> Result<ScanAck, BackendError>;

    /// `POST /inventory/`; returns the record with its service-assigned id and barcode.
    async fn create(&self, record: &NewRecord) -> Result<InventoryRecord, BackendError>;

    /// `PUT /inventory/{id}`
    async fn update(&self, id: RecordId, update: &RecordUpdate) -> Result<InventoryRecord, BackendError>;

    /// `DELETE /inventory/{id}`
    async fn delete(&self, id: RecordId) -> Result<(), BackendError>;
}
