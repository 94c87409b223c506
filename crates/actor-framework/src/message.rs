//! # Generic Messages
//!
//! Requests sent from a [`ResourceClient`](crate::ResourceClient) to its
//! [`ResourceActor`](crate::ResourceActor), each carrying a oneshot responder.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Predicate used by [`ResourceRequest::Find`].
pub type Filter<T> = Box<dyn Fn(&T) -> bool + Send + Sync>;

/// Internal message type sent to the actor to request operations.
///
/// The variants mirror what a read-through cache needs on top of plain CRUD:
///
/// - **Load**: replace the whole store with a fresh listing from upstream.
/// - **Upsert**: insert or replace one entity under its own id.
/// - **Get** / **Find**: read one entity by id, or all entities matching a predicate.
/// - **Update**: apply an [`ActorEntity::Update`] in place.
/// - **Delete**: forget an entity.
/// - **Action**: run an [`ActorEntity::Action`] against one entity.
pub enum ResourceRequest<T: ActorEntity> {
    Load {
        entities: Vec<T>,
        respond_to: Response<usize>,
    },
    Upsert {
        entity: T,
        respond_to: Response<Option<T>>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Find {
        filter: Filter<T>,
        respond_to: Response<Vec<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}

impl<T: ActorEntity> std::fmt::Debug for ResourceRequest<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResourceRequest::Load { entities, .. } => f
                .debug_struct("Load")
                .field("count", &entities.len())
                .finish(),
            ResourceRequest::Upsert { entity, .. } => {
                f.debug_struct("Upsert").field("id", &entity.id()).finish()
            }
            ResourceRequest::Get { id, .. } => f.debug_struct("Get").field("id", id).finish(),
            ResourceRequest::Find { .. } => f.write_str("Find"),
            ResourceRequest::Update { id, update, .. } => f
                .debug_struct("Update")
                .field("id", id)
                .field("update", update)
                .finish(),
            ResourceRequest::Delete { id, .. } => {
                f.debug_struct("Delete").field("id", id).finish()
            }
            ResourceRequest::Action { id, action, .. } => f
                .debug_struct("Action")
                .field("id", id)
                .field("action", action)
                .finish(),
        }
    }
}
