//! Error types for the rack coordinate mapper.

use thiserror::Error;

/// Errors raised while mapping between coordinates, box indices and light units.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RackError {
    /// A row, column, coordinate string or box index outside the rack.
    #[error("Invalid rack coordinate: {0}")]
    InvalidCoordinate(String),

    /// The rack dimensions themselves are unusable.
    #[error("Invalid rack layout: {0}")]
    InvalidLayout(String),
}
