//! # Inventory Browser
//!
//! [`RackBrowser`] is the one object a front end talks to: it renders the rack
//! grid and box contents from the record cache, runs searches, scans and
//! inline adjustments, relays record CRUD, and drives the locator lights.

use crate::backend::{BackendError, InventoryBackend};
use crate::clients::InventoryClient;
use crate::inventory_actor::RecordError;
use crate::locator::{LocatorChannel, LocatorState};
use crate::model::{InlineStep, InventoryRecord, NewRecord, RecordId, RecordUpdate, ScanMode};
use crate::rack::{RackCoordinate, RackError, RackLayout};
use crate::scan::{Resolution, ScanError, ScanLedger, ScanOutcome, ScanResolver};
use actor_framework::ActorClient;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, instrument};

#[derive(Debug, Error)]
pub enum BrowserError {
    #[error(transparent)]
    Rack(#[from] RackError),

    #[error(transparent)]
    Scan(#[from] ScanError),

    #[error(transparent)]
    Backend(#[from] BackendError),

    #[error(transparent)]
    Cache(#[from] RecordError),
}

/// One cell of the rack grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoxSummary {
    pub coordinate: RackCoordinate,
    pub index: usize,
    pub member_count: usize,
}

/// What a search turned up.
#[derive(Debug, Clone, PartialEq)]
pub enum Located {
    /// Found, and its box is now lit.
    Highlighted {
        record: InventoryRecord,
        coordinate: RackCoordinate,
    },
    /// Found, but its location is missing or not on this rack.
    Unplaced(InventoryRecord),
    NotFound,
}

pub struct RackBrowser {
    layout: RackLayout,
    backend: Arc<dyn InventoryBackend>,
    cache: InventoryClient,
    resolver: ScanResolver,
    ledger: ScanLedger,
    locator: LocatorChannel,
    selected: Option<RackCoordinate>,
}

impl RackBrowser {
    pub fn new(
        layout: RackLayout,
        backend: Arc<dyn InventoryBackend>,
        cache: InventoryClient,
        locator: LocatorChannel,
    ) -> Self {
        Self {
            resolver: ScanResolver::new(backend.clone(), cache.clone()),
            ledger: ScanLedger::new(backend.clone(), cache.clone()),
            layout,
            backend,
            cache,
            locator,
            selected: None,
        }
    }

    pub fn layout(&self) -> &RackLayout {
        &self.layout
    }

    /// The box currently highlighted by this browser, if any.
    pub fn selected(&self) -> Option<RackCoordinate> {
        self.selected
    }

    pub fn resolver(&self) -> &ScanResolver {
        &self.resolver
    }

    pub fn ledger(&self) -> &ScanLedger {
        &self.ledger
    }

    /// Reloads the cache from the inventory service.
    pub async fn refresh(&self) -> Result<usize, BrowserError> {
        Ok(self.resolver.refresh().await?)
    }

    /// Every box in index order with the number of records placed in it.
    #[instrument(skip(self))]
    pub async fn grid(&self) -> Result<Vec<BoxSummary>, BrowserError> {
        let records = self.cache.all().await?;
        let grid = self
            .layout
            .coordinates()
            .enumerate()
            .map(|(index, coordinate)| BoxSummary {
                coordinate,
                index,
                member_count: records
                    .iter()
                    .filter(|r| r.coordinate() == Some(coordinate))
                    .count(),
            })
            .collect();
        Ok(grid)
    }

    /// Records placed in `coordinate`, in id order.
    #[instrument(skip(self), fields(%coordinate))]
    pub async fn box_contents(&self, coordinate: RackCoordinate) -> Result<Vec<InventoryRecord>, BrowserError> {
        self.layout.to_index(&coordinate)?;
        Ok(self.cache.members_of(coordinate).await?)
    }

    /// Searches the cache and lights the box of the first match.
    ///
    /// When nothing is found, or the match has no usable location, the
    /// selection is cleared without touching the lights.
    #[instrument(skip(self))]
    pub async fn locate(&mut self, query: &str) -> Result<Located, BrowserError> {
        let record = match self.resolver.resolve_by_query(query).await? {
            Resolution::Found(record) => record,
            Resolution::NotFound => {
                self.selected = None;
                return Ok(Located::NotFound);
            }
        };
        match record.coordinate() {
            Some(coordinate) if self.layout.to_index(&coordinate).is_ok() => {
                self.highlight(coordinate)?;
                Ok(Located::Highlighted { record, coordinate })
            }
            _ => {
                debug!(id = %record.id, location = ?record.location, "No rack location");
                self.selected = None;
                Ok(Located::Unplaced(record))
            }
        }
    }

    /// Lights `coordinate` and dims every other box.
    #[instrument(skip(self), fields(%coordinate))]
    pub fn highlight(&mut self, coordinate: RackCoordinate) -> Result<(), BrowserError> {
        let index = self.layout.to_index(&coordinate)?;
        self.locator
            .send(LocatorState::highlight(&self.layout, Some(index))?);
        self.selected = Some(coordinate);
        info!(index, "Box highlighted");
        Ok(())
    }

    /// Dims every box.
    pub fn reset(&mut self) -> Result<(), BrowserError> {
        self.locator.send(LocatorState::highlight(&self.layout, None)?);
        self.selected = None;
        Ok(())
    }

    /// Hands the whole rack to the ambient effect.
    pub fn standby(&mut self) {
        self.locator.send(LocatorState::standby(&self.layout));
        self.selected = None;
    }

    /// Inline `+1` / `-1` from a box's contents list.
    pub async fn adjust(&self, record: &InventoryRecord, step: InlineStep) -> Result<ScanOutcome, BrowserError> {
        Ok(self.ledger.apply_inline_delta(record, step).await?)
    }

    /// Resolves `barcode` and, if found, scans `quantity` units in `mode`.
    /// `Ok(None)` when the barcode is unknown.
    #[instrument(skip(self))]
    pub async fn scan(
        &self,
        barcode: &str,
        quantity: u32,
        mode: ScanMode,
    ) -> Result<Option<ScanOutcome>, BrowserError> {
        if quantity == 0 {
            return Err(ScanError::Validation("quantity must be positive".into()).into());
        }
        match self.resolver.resolve_by_barcode(barcode).await? {
            Resolution::Found(record) => Ok(Some(self.ledger.apply_scan(&record, quantity, mode).await?)),
            Resolution::NotFound => Ok(None),
        }
    }

    // ---- record CRUD relay ----

    #[instrument(skip(self, record), fields(item_name = %record.item_name))]
    pub async fn create(&self, record: &NewRecord) -> Result<InventoryRecord, BrowserError> {
        let created = self.backend.create(record).await?;
        self.cache.upsert(created.clone()).await?;
        info!(id = %created.id, "Record created");
        Ok(created)
    }

    /// Sends the edit to the service and caches the record it returns.
    #[instrument(skip(self, update), fields(%id))]
    pub async fn update(&self, id: RecordId, update: &RecordUpdate) -> Result<InventoryRecord, BrowserError> {
        let updated = self.backend.update(id, update).await?;
        self.cache.upsert(updated.clone()).await?;
        Ok(updated)
    }

    #[instrument(skip(self), fields(%id))]
    pub async fn delete(&self, id: RecordId) -> Result<(), BrowserError> {
        self.backend.delete(id).await?;
        self.cache.forget(id).await?;
        info!("Record deleted");
        Ok(())
    }
}
