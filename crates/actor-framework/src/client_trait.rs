//! # ActorClient Trait
//!
//! Lets domain-specific clients inherit the plain cache operations (`get`,
//! `load`, `forget`) from a wrapped [`ResourceClient`] and only write the
//! methods that carry domain meaning.
use crate::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit standard cache operations.
///
/// # Example
///
/// ```rust
/// use actor_framework::{ActorClient, ActorEntity, FrameworkError, ResourceClient};
///
/// #[derive(Clone, Debug)] struct Shelf { id: u32 }
/// #[derive(Debug)] struct ShelfUpdate;
/// #[derive(Debug)] enum ShelfAction {}
/// #[derive(Debug, thiserror::Error)] #[error("{0}")] struct ShelfError(String);
///
/// impl ActorEntity for Shelf {
///     type Id = u32; type Update = ShelfUpdate; type Action = ShelfAction;
///     type ActionResult = (); type Error = ShelfError;
///     fn id(&self) -> u32 { self.id }
///     fn on_update(&mut self, _: ShelfUpdate) -> Result<(), ShelfError> { Ok(()) }
///     fn handle_action(&mut self, a: ShelfAction) -> Result<(), ShelfError> { match a {} }
/// }
///
/// struct ShelfClient { inner: ResourceClient<Shelf> }
///
/// impl ActorClient<Shelf> for ShelfClient {
///     type Error = ShelfError;
///     fn inner(&self) -> &ResourceClient<Shelf> { &self.inner }
///     fn map_error(e: FrameworkError) -> ShelfError { ShelfError(e.to_string()) }
/// }
///
/// async fn usage(client: ShelfClient) {
///     // get(), load() and forget() come for free.
///     let _ = client.load(vec![Shelf { id: 1 }]).await;
///     let _ = client.get(1).await;
///     let _ = client.forget(1).await;
/// }
/// ```
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the specific resource error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch a cached entity by ID.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Replace the cached set with `entities`.
    #[tracing::instrument(skip(self, entities), fields(count = entities.len()))]
    async fn load(&self, entities: Vec<T>) -> Result<usize, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().load(entities).await.map_err(Self::map_error)
    }

    /// Drop an entity from the cache.
    #[tracing::instrument(skip(self))]
    async fn forget(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }
}
