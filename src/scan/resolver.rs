use super::ScanError;
use crate::backend::InventoryBackend;
use crate::clients::InventoryClient;
use crate::model::InventoryRecord;
use actor_framework::ActorClient;
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Outcome of a lookup that reached its source.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    Found(InventoryRecord),
    /// No record carries that barcode or name. Expected, not an error.
    NotFound,
}

impl Resolution {
    pub fn record(&self) -> Option<&InventoryRecord> {
        match self {
            Resolution::Found(record) => Some(record),
            Resolution::NotFound => None,
        }
    }

    pub fn into_record(self) -> Option<InventoryRecord> {
        match self {
            Resolution::Found(record) => Some(record),
            Resolution::NotFound => None,
        }
    }
}

/// Turns scanned or typed text into an inventory record.
#[derive(Clone)]
pub struct ScanResolver {
    backend: Arc<dyn InventoryBackend>,
    cache: InventoryClient,
}

impl ScanResolver {
    pub fn new(backend: Arc<dyn InventoryBackend>, cache: InventoryClient) -> Self {
        Self { backend, cache }
    }

    /// Asks the inventory service for the record with exactly `barcode`,
    /// after trimming surrounding whitespace.
    ///
    /// A found record is written through to the cache so a following scan
    /// adjusts the same copy the caller is looking at.
    #[instrument(skip(self))]
    pub async fn resolve_by_barcode(&self, barcode: &str) -> Result<Resolution, ScanError> {
        let barcode = barcode.trim();
        if barcode.is_empty() {
            return Err(ScanError::Validation("barcode is empty".into()));
        }
        match self.backend.get_by_barcode(barcode).await? {
            Some(record) => {
                debug!(id = %record.id, quantity = record.quantity, "Resolved");
                self.cache.upsert(record.clone()).await?;
                Ok(Resolution::Found(record))
            }
            None => {
                info!("Barcode not found");
                Ok(Resolution::NotFound)
            }
        }
    }

    /// Searches the cache for an item name (ignoring case) or an exact
    /// barcode. The lowest id wins when several records match.
    #[instrument(skip(self))]
    pub async fn resolve_by_query(&self, query: &str) -> Result<Resolution, ScanError> {
        if query.trim().is_empty() {
            return Err(ScanError::Validation("search text is empty".into()));
        }
        let matches = self.cache.matching_query(query).await?;
        debug!(matches = matches.len(), "Searched cache");
        Ok(matches
            .into_iter()
            .next()
            .map_or(Resolution::NotFound, Resolution::Found))
    }

    /// Replaces the cache with the service's full listing; returns the record count.
    #[instrument(skip(self))]
    pub async fn refresh(&self) -> Result<usize, ScanError> {
        let records = self.backend.list().await?;
        let count = self.cache.load(records).await?;
        info!(count, "Cache refreshed");
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::testing::FakeBackend;
    use crate::backend::BackendError;
    use crate::model::RecordId;
    use actor_framework::mock::create_mock_client;

    fn stock() -> Vec<InventoryRecord> {
        vec![
            InventoryRecord::new(1, "Blue Hoodie", "400123", 5).with_location("C3"),
            InventoryRecord::new(2, "Red Cap", "400124", 2).with_location("A1"),
        ]
    }

    fn resolver(backend: FakeBackend) -> (ScanResolver, Arc<FakeBackend>) {
        let backend = Arc::new(backend);
        let (actor, cache) = crate::inventory_actor::new();
        tokio::spawn(actor.run());
        (ScanResolver::new(backend.clone(), cache), backend)
    }

    #[tokio::test]
    async fn unknown_barcode_is_not_found_not_a_failure() {
        let (resolver, _) = resolver(FakeBackend::with_records(stock()));
        let resolution = resolver.resolve_by_barcode("UNKNOWN123").await.unwrap();
        assert_eq!(resolution, Resolution::NotFound);
    }

    #[tokio::test]
    async fn found_barcode_is_cached() {
        let (resolver, _) = resolver(FakeBackend::with_records(stock()));
        let resolution = resolver.resolve_by_barcode(" 400124 ").await.unwrap();
        assert_eq!(resolution.record().map(|r| r.id), Some(RecordId(2)));

        let cached = resolver.cache.get(RecordId(2)).await.unwrap();
        assert_eq!(cached.map(|r| r.item_name), Some("Red Cap".to_string()));
    }

    #[tokio::test]
    async fn unreachable_service_is_a_transport_failure() {
        let (resolver, backend) = resolver(FakeBackend::with_records(stock()));
        backend.go_down();
        let err = resolver.resolve_by_barcode("400123").await.unwrap_err();
        assert!(matches!(
            err,
            ScanError::Transport(BackendError::Status { status: 503, .. })
        ));
    }

    #[tokio::test]
    async fn empty_barcode_is_rejected_before_any_call() {
        let backend = Arc::new(FakeBackend::default());
        backend.go_down();
        let (cache, mut receiver) = create_mock_client(4);
        let resolver = ScanResolver::new(backend, InventoryClient::new(cache));

        let err = resolver.resolve_by_barcode("   ").await.unwrap_err();
        assert!(matches!(err, ScanError::Validation(_)));
        assert!(receiver.try_recv().is_err());
    }

    #[tokio::test]
    async fn query_matches_name_or_barcode() {
        let (resolver, _) = resolver(FakeBackend::with_records(stock()));
        assert_eq!(resolver.refresh().await.unwrap(), 2);

        let by_name = resolver.resolve_by_query("blue hoodie").await.unwrap();
        assert_eq!(by_name.record().map(|r| r.id), Some(RecordId(1)));

        let by_barcode = resolver.resolve_by_query("400123").await.unwrap();
        assert_eq!(by_barcode, by_name);

        assert_eq!(
            resolver.resolve_by_query("Blue").await.unwrap(),
            Resolution::NotFound
        );
    }
}
