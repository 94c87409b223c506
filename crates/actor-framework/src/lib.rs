//! # Actor Framework
//!
//! Building blocks for a type-safe, process-local mirror of records owned by
//! some other system of record. One [`ResourceActor`] task owns the mirrored
//! entities; any number of cloned [`ResourceClient`]s talk to it by message
//! passing.
//!
//! ## Why an actor for a cache?
//!
//! - **No locks**: the store lives inside one task and requests are processed
//!   sequentially, so there is nothing to guard.
//! - **Last write wins**: concurrent callers may race; the actor applies their
//!   requests in arrival order, and the last one to arrive determines what the
//!   cache holds.
//! - **Uniform API**: load, upsert, get, find, update, delete and custom actions
//!   work the same way for any [`ActorEntity`].
//!
//! **Further Reading**:
//! - [Actors in Rust](https://ryhl.io/blog/actors-with-tokio/) - Practical guide to implementing actors with Tokio
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - how an entity identifies itself and reacts to updates/actions
//! 2. **Runtime Layer** ([`ResourceActor`]) - the message loop and the store
//! 3. **Interface Layer** ([`ResourceClient`], [`ActorClient`]) - type-safe requests
//!
//! ## Example
//!
//! ```rust
//! use actor_framework::{ActorEntity, ResourceActor};
//!
//! #[derive(Clone, Debug)]
//! struct Item { id: u64, name: String, count: u32 }
//!
//! #[derive(Debug)] struct ItemUpdate { name: Option<String> }
//! #[derive(Debug)] enum ItemAction { Take(u32) }
//! #[derive(Debug, thiserror::Error)] #[error("{0}")] struct ItemError(String);
//!
//! impl ActorEntity for Item {
//!     type Id = u64;
//!     type Update = ItemUpdate;
//!     type Action = ItemAction;
//!     type ActionResult = u32;
//!     type Error = ItemError;
//!
//!     fn id(&self) -> u64 { self.id }
//!
//!     fn on_update(&mut self, update: ItemUpdate) -> Result<(), ItemError> {
//!         if let Some(name) = update.name { self.name = name; }
//!         Ok(())
//!     }
//!
//!     fn handle_action(&mut self, action: ItemAction) -> Result<u32, ItemError> {
//!         match action {
//!             ItemAction::Take(n) => {
//!                 self.count = self.count.saturating_sub(n);
//!                 Ok(self.count)
//!             }
//!         }
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = ResourceActor::<Item>::new(10);
//!     tokio::spawn(actor.run());
//!
//!     client.load(vec![Item { id: 3, name: "Mug".into(), count: 2 }]).await.unwrap();
//!     let left = client.perform_action(3, ItemAction::Take(5)).await.unwrap();
//!     assert_eq!(left, 0);
//!
//!     let mugs = client.find(|i: &Item| i.name == "Mug").await.unwrap();
//!     assert_eq!(mugs.len(), 1);
//! }
//! ```
//!
//! ## Testing
//!
//! The [`mock`] module provides `MockClient`, which answers a real
//! `ResourceClient` from scripted expectations, and `create_mock_client`, which
//! exposes the raw request channel.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{Filter, ResourceRequest, Response};
