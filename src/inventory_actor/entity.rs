//! ActorEntity trait implementation for [`InventoryRecord`].
//!
//! Lets the process-local copy of the inventory live in a
//! [`ResourceActor`](actor_framework::ResourceActor) keyed by the
//! service-assigned [`RecordId`].

use super::actions::{RecordAction, RecordActionResult};
use super::error::RecordError;
use crate::model::{InventoryRecord, RecordId};
use actor_framework::ActorEntity;
use std::convert::Infallible;

impl ActorEntity for InventoryRecord {
    type Id = RecordId;
    type Update = Infallible;
    type Action = RecordAction;
    type ActionResult = RecordActionResult;
    type Error = RecordError;

    fn id(&self) -> RecordId {
        self.id
    }

    /// The cache takes no partial updates; edits arrive as the service's
    /// reply through `Upsert`.
    fn on_update(&mut self, update: Infallible) -> Result<(), RecordError> {
        match update {}
    }

    fn handle_action(&mut self, action: RecordAction) -> Result<RecordActionResult, RecordError> {
        match action {
            RecordAction::AdjustQuantity { delta, mode } => {
                if delta == 0 {
                    return Err(RecordError::InvalidQuantity(delta));
                }
                self.quantity = mode.apply(self.quantity, delta);
                Ok(RecordActionResult::AdjustQuantity(self.clone()))
            }
            RecordAction::CheckQuantity => Ok(RecordActionResult::CheckQuantity(self.quantity)),
        }
    }
}
