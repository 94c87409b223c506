//! Error types for the inventory record cache.

use thiserror::Error;

/// Errors that can occur during record cache operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RecordError {
    /// The record is not in the cache.
    #[error("Record not found: {0}")]
    NotFound(String),

    /// A scan or adjustment asked for zero units.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(u32),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
