//! Custom actions for the inventory record cache.
//!
//! These are the quantity operations performed on a cached
//! [`InventoryRecord`](crate::model::InventoryRecord) beyond plain
//! load/upsert/get/delete. They run inside the actor, one at a time.

use crate::model::{InventoryRecord, ScanMode};

/// Custom actions for cached inventory records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordAction {
    /// Applies [`ScanMode::apply`] to the cached quantity.
    ///
    /// # Errors
    /// Fails with [`RecordError::InvalidQuantity`](super::RecordError::InvalidQuantity)
    /// when `delta` is zero.
    AdjustQuantity { delta: u32, mode: ScanMode },
    /// Reads the cached quantity without modifying it.
    CheckQuantity,
}

/// Results from RecordActions - variants match 1:1 with RecordAction
#[derive(Debug, Clone, PartialEq)]
pub enum RecordActionResult {
    /// The record as it stands after the adjustment.
    AdjustQuantity(InventoryRecord),
    CheckQuantity(u32),
}
