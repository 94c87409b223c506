//! # Inventory Client
//!
//! High-level API for the record cache. Wraps a
//! `ResourceClient<InventoryRecord>` and exposes the lookups and quantity
//! operations the scan and browser layers need.
use crate::inventory_actor::{RecordAction, RecordActionResult, RecordError};
use crate::model::{InventoryRecord, RecordId, ScanMode};
use crate::rack::RackCoordinate;
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the record cache actor.
#[derive(Clone)]
pub struct InventoryClient {
    inner: ResourceClient<InventoryRecord>,
}

impl InventoryClient {
    pub fn new(inner: ResourceClient<InventoryRecord>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<InventoryRecord> for InventoryClient {
    type Error = RecordError;

    fn inner(&self) -> &ResourceClient<InventoryRecord> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => RecordError::NotFound(id),
            FrameworkError::EntityError(inner) => match inner.downcast::<RecordError>() {
                Ok(record_error) => *record_error,
                Err(other) => RecordError::ActorCommunicationError(other.to_string()),
            },
            other => RecordError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl InventoryClient {
    /// Cache one record as the service returned it; returns the entry it replaced.
    #[instrument(skip(self, record), fields(id = %record.id))]
    pub async fn upsert(&self, record: InventoryRecord) -> Result<Option<InventoryRecord>, RecordError> {
        debug!("Sending request");
        self.inner.upsert(record).await.map_err(Self::map_error)
    }

    /// Every cached record, in id order.
    #[instrument(skip(self))]
    pub async fn all(&self) -> Result<Vec<InventoryRecord>, RecordError> {
        self.inner.find(|_| true).await.map_err(Self::map_error)
    }

    /// Records whose item name equals `query` ignoring case, or whose barcode
    /// equals it exactly.
    #[instrument(skip(self))]
    pub async fn matching_query(&self, query: &str) -> Result<Vec<InventoryRecord>, RecordError> {
        let query = query.to_string();
        self.inner
            .find(move |record: &InventoryRecord| record.matches_query(&query))
            .await
            .map_err(Self::map_error)
    }

    /// Records whose location names `coordinate`. Membership is derived on
    /// every call by scanning the whole cache.
    #[instrument(skip(self), fields(%coordinate))]
    pub async fn members_of(&self, coordinate: RackCoordinate) -> Result<Vec<InventoryRecord>, RecordError> {
        self.inner
            .find(move |record: &InventoryRecord| record.coordinate() == Some(coordinate))
            .await
            .map_err(Self::map_error)
    }

    /// Apply `delta` units in direction `mode` to the cached quantity.
    ///
    /// Returns the record as it stands afterwards.
    #[instrument(skip(self), fields(%id))]
    pub async fn adjust_quantity(
        &self,
        id: RecordId,
        delta: u32,
        mode: ScanMode,
    ) -> Result<InventoryRecord, RecordError> {
        debug!("Adjusting {} units {} for {}", delta, mode, id);
        match self
            .inner
            .perform_action(id, RecordAction::AdjustQuantity { delta, mode })
            .await
        {
            Ok(RecordActionResult::AdjustQuantity(record)) => Ok(record),
            Ok(_) => unreachable!("AdjustQuantity action must return AdjustQuantity result"),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    /// The cached quantity of a record.
    #[instrument(skip(self), fields(%id))]
    pub async fn check_quantity(&self, id: RecordId) -> Result<u32, RecordError> {
        match self
            .inner
            .perform_action(id, RecordAction::CheckQuantity)
            .await
        {
            Ok(RecordActionResult::CheckQuantity(quantity)) => Ok(quantity),
            Ok(_) => unreachable!("CheckQuantity action must return CheckQuantity result"),
            Err(e) => Err(Self::map_error(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actor_framework::message::ResourceRequest;
    use actor_framework::mock::{create_mock_client, expect_action, MockClient};

    fn hoodie(quantity: u32) -> InventoryRecord {
        InventoryRecord::new(7, "Blue Hoodie", "400123", quantity).with_location("C3")
    }

    #[tokio::test]
    async fn test_adjust_quantity_sends_action_and_returns_record() {
        let (client, mut receiver) = create_mock_client::<InventoryRecord>(10);
        let inventory_client = InventoryClient::new(client);

        let adjust_task = tokio::spawn(async move {
            inventory_client
                .adjust_quantity(RecordId(7), 7, ScanMode::Out)
                .await
        });

        let (id, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");

        assert_eq!(id, RecordId(7));
        assert_eq!(
            action,
            RecordAction::AdjustQuantity {
                delta: 7,
                mode: ScanMode::Out
            }
        );

        responder
            .send(Ok(RecordActionResult::AdjustQuantity(hoodie(0))))
            .unwrap();

        let result = adjust_task.await.unwrap();
        assert_eq!(result.unwrap().quantity, 0);
    }

    #[tokio::test]
    async fn test_check_quantity_returns_cached_level() {
        let mut mock = MockClient::<InventoryRecord>::new();
        mock.expect_action(RecordId(7))
            .return_ok(RecordActionResult::CheckQuantity(42));

        let inventory_client = InventoryClient::new(mock.client());
        assert_eq!(inventory_client.check_quantity(RecordId(7)).await.unwrap(), 42);
        mock.verify();
    }

    #[tokio::test]
    async fn test_entity_errors_keep_their_type() {
        let mut mock = MockClient::<InventoryRecord>::new();
        mock.expect_action(RecordId(7))
            .return_err(FrameworkError::EntityError(Box::new(RecordError::InvalidQuantity(0))));
        mock.expect_action(RecordId(8))
            .return_err(FrameworkError::NotFound(RecordId(8).to_string()));

        let inventory_client = InventoryClient::new(mock.client());
        let err = inventory_client
            .adjust_quantity(RecordId(7), 0, ScanMode::In)
            .await
            .unwrap_err();
        assert_eq!(err, RecordError::InvalidQuantity(0));

        let err = inventory_client.check_quantity(RecordId(8)).await.unwrap_err();
        assert_eq!(err, RecordError::NotFound("item_8".into()));
        mock.verify();
    }

    #[tokio::test]
    async fn test_members_of_matches_parsed_location() {
        let (client, mut receiver) = create_mock_client::<InventoryRecord>(10);
        let inventory_client = InventoryClient::new(client);

        let members = tokio::spawn(async move {
            inventory_client
                .members_of(RackCoordinate::new('C', 3))
                .await
        });

        let Some(ResourceRequest::Find { filter, respond_to }) = receiver.recv().await else {
            panic!("Expected Find request");
        };
        assert!(filter(&hoodie(1)));
        assert!(filter(&hoodie(1).with_location(" c3 ")));
        assert!(!filter(&hoodie(1).with_location("C4")));
        assert!(!filter(&InventoryRecord::new(8, "Cap", "999", 1)));
        respond_to.send(Ok(vec![hoodie(1)])).unwrap();

        assert_eq!(members.await.unwrap().unwrap().len(), 1);
    }
}
