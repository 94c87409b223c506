use crate::backend::BackendError;
use crate::inventory_actor::RecordError;
use thiserror::Error;

/// Why a resolve or scan did not complete.
///
/// An unknown barcode is not listed here; it is
/// [`Resolution::NotFound`](super::Resolution::NotFound).
#[derive(Debug, Error)]
pub enum ScanError {
    /// Input rejected before any network call.
    #[error("Invalid scan: {0}")]
    Validation(String),

    /// The inventory service could not be reached or refused the request.
    /// Nothing was changed locally.
    #[error("Inventory service unavailable: {0}")]
    Transport(#[from] BackendError),

    #[error("Record cache error: {0}")]
    Cache(#[from] RecordError),
}
