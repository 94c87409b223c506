use thiserror::Error;

/// Errors from the inventory service.
///
/// A missing barcode is not an error: [`get_by_barcode`] returns `Ok(None)`.
///
/// [`get_by_barcode`]: super::InventoryBackend::get_by_barcode
#[derive(Debug, Error)]
pub enum BackendError {
    /// The HTTP request itself failed (network, DNS, timeout, undecodable body).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The service answered with a non-2xx status.
    #[error("Inventory service error ({status}): {detail}")]
    Status {
        status: u16,
        /// The service's `detail` message when it sent one, else the raw body.
        detail: String,
    },
}

impl BackendError {
    /// HTTP status of a [`BackendError::Status`].
    pub fn status(&self) -> Option<u16> {
        match self {
            BackendError::Status { status, .. } => Some(*status),
            BackendError::Request(e) => e.status().map(|s| s.as_u16()),
        }
    }
}
