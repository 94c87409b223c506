//! Process-local cache of inventory records, including quantity adjustment actions.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::InventoryClient;
use crate::model::InventoryRecord;
use actor_framework::ResourceActor;

/// Creates the record cache actor and its client.
pub fn new() -> (ResourceActor<InventoryRecord>, InventoryClient) {
    let (actor, generic_client) = ResourceActor::new(32);
    let client = InventoryClient::new(generic_client);

    (actor, client)
}
