//! # ActorEntity Trait
//!
//! The contract a cached resource implements so a [`ResourceActor`](crate::ResourceActor)
//! can hold it. Unlike a system of record, the actor never invents identifiers:
//! the authoritative store assigns them and the entity reports its own through
//! [`ActorEntity::id`]. The actor only mirrors, patches and queries what it was given.
//!
//! Associated types keep every request type-safe. An inventory record only
//! accepts its own update DTO and its own action enum; sending it something else
//! is a compile error.

use std::fmt::{Debug, Display};

/// Trait that any cached entity must implement to be managed by `ResourceActor`.
///
/// Hooks are synchronous: they run inside the actor loop with exclusive access
/// to the entity, so they must not perform I/O. Anything that crosses the
/// process boundary belongs to the caller, before or after the cache request.
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// Identifier assigned by the authoritative store. Ordered so that queries
    /// return entities in a stable order.
    type Id: Ord + Clone + Send + Sync + Display + Debug + 'static;

    /// Partial update applied by [`ActorEntity::on_update`].
    type Update: Send + Sync + Debug + 'static;

    /// Enum of entity-specific operations (e.g. quantity adjustments).
    type Action: Send + Sync + Debug + 'static;

    /// Result returned by [`ActorEntity::handle_action`].
    type ActionResult: Send + Sync + Debug + 'static;

    /// Per-entity error type, boxed into [`FrameworkError::EntityError`](crate::FrameworkError)
    /// when a hook fails.
    ///
    /// One error enum covers every hook of the entity rather than one per
    /// action. Callers match on a single type.
    type Error: std::error::Error + Send + Sync + 'static;

    /// The identifier this entity is stored under.
    fn id(&self) -> Self::Id;

    /// Apply a partial update. On error the entity must be left unchanged.
    fn on_update(&mut self, update: Self::Update) -> Result<(), Self::Error>;

    /// Handle an entity-specific action.
    fn handle_action(&mut self, action: Self::Action) -> Result<Self::ActionResult, Self::Error>;
}
