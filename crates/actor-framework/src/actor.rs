//! # Generic Actor Server
//!
//! The `ResourceActor` owns the cached entities and processes requests one at a
//! time, so the store needs no lock.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::BTreeMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that mirrors a collection of entities.
///
/// This struct is the "Server" half of the actor. It owns the state (`store`)
/// and the receiver end of the channel. Every clone of the matching
/// [`ResourceClient`] talks to the same task, and the task handles one message
/// at a time: whichever request arrives last wins for the entity it touches.
///
/// # Usage Pattern
///
/// ```rust
/// use actor_framework::{ActorEntity, ResourceActor};
///
/// #[derive(Clone, Debug)] struct Bin { id: u32, count: u32 }
/// #[derive(Debug)] struct BinUpdate;
/// #[derive(Debug)] enum BinAction { Bump }
/// #[derive(Debug, thiserror::Error)] #[error("bin error")] struct BinError;
///
/// impl ActorEntity for Bin {
///     type Id = u32; type Update = BinUpdate; type Action = BinAction;
///     type ActionResult = u32; type Error = BinError;
///     fn id(&self) -> u32 { self.id }
///     fn on_update(&mut self, _: BinUpdate) -> Result<(), BinError> { Ok(()) }
///     fn handle_action(&mut self, _: BinAction) -> Result<u32, BinError> {
///         self.count += 1;
///         Ok(self.count)
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = ResourceActor::<Bin>::new(10);
///     tokio::spawn(actor.run());
///
///     client.upsert(Bin { id: 7, count: 0 }).await.unwrap();
///     let count = client.perform_action(7, BinAction::Bump).await.unwrap();
///     assert_eq!(count, 1);
/// }
/// ```
///
/// # Operations
///
/// * **Load**: clears the store, inserts every entity under its own id, returns the new size.
/// * **Upsert**: inserts the entity, returning the entry it replaced if any.
/// * **Get**: returns a clone of the entity or `None`.
/// * **Find**: returns clones of every entity the filter accepts, in id order.
/// * **Update** / **Action**: run the entity hook in place; `NotFound` when the id is absent.
/// * **Delete**: removes the entity and returns it, `None` when it was absent.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: BTreeMap<T::Id, T>,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// `buffer_size` is the capacity of the request channel. When it is full,
    /// client calls wait for space.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: BTreeMap::new(),
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop until every client has been dropped.
    pub async fn run(mut self) {
        // Extract just the type name (e.g., "InventoryRecord" instead of the full path)
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Load {
                    entities,
                    respond_to,
                } => {
                    debug!(entity_type, count = entities.len(), "Load");
                    self.store = entities.into_iter().map(|e| (e.id(), e)).collect();
                    info!(entity_type, size = self.store.len(), "Loaded");
                    let _ = respond_to.send(Ok(self.store.len()));
                }
                ResourceRequest::Upsert { entity, respond_to } => {
                    let id = entity.id();
                    let previous = self.store.insert(id.clone(), entity);
                    debug!(entity_type, %id, replaced = previous.is_some(), "Upsert");
                    let _ = respond_to.send(Ok(previous));
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Find { filter, respond_to } => {
                    let matches: Vec<T> = self
                        .store
                        .values()
                        .filter(|item| filter(item))
                        .cloned()
                        .collect();
                    debug!(entity_type, matches = matches.len(), "Find");
                    let _ = respond_to.send(Ok(matches));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    if let Some(item) = self.store.get_mut(&id) {
                        if let Err(e) = item.on_update(update) {
                            warn!(entity_type, %id, error = %e, "Update failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                            continue;
                        }
                        info!(entity_type, %id, "Updated");
                        let _ = respond_to.send(Ok(item.clone()));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
                ResourceRequest::Delete { id, respond_to } => {
                    let removed = self.store.remove(&id);
                    info!(entity_type, %id, found = removed.is_some(), size = self.store.len(), "Deleted");
                    let _ = respond_to.send(Ok(removed));
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    if let Some(item) = self.store.get_mut(&id) {
                        let result = item
                            .handle_action(action)
                            .map_err(|e| FrameworkError::EntityError(Box::new(e)));
                        match &result {
                            Ok(_) => info!(entity_type, %id, "Action ok"),
                            Err(e) => warn!(entity_type, %id, error = %e, "Action failed"),
                        }
                        let _ = respond_to.send(result);
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}
