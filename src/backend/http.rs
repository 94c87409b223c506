//! [`InventoryBackend`] over HTTP using [`reqwest`].

use super::{BackendError, InventoryBackend};
use crate::model::{InventoryRecord, NewRecord, RecordId, RecordUpdate, ScanAck, ScanRequest};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, instrument};

/// HTTP client for one inventory service instance.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: reqwest::Client,
    base_url: String,
}

/// FastAPI error body: `{"detail": "..."}`.
#[derive(Deserialize)]
struct ErrorBody {
    detail: serde_json::Value,
}

impl HttpBackend {
    /// * `base_url` - Service root, e.g. `http://localhost:8000`.
    pub fn new(base_url: &str) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Build a client whose requests give up after `timeout`.
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, BackendError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, base_url))
    }

    pub fn with_client(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/inventory/{}", self.base_url, path)
    }

    // ---- private helpers ----

    /// Pass a 2xx response through; turn anything else into
    /// [`BackendError::Status`] carrying the service's `detail`.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, BackendError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<unreadable body>".to_string());
        let detail = match serde_json::from_str::<ErrorBody>(&body) {
            Ok(ErrorBody {
                detail: serde_json::Value::String(message),
            }) => message,
            Ok(ErrorBody { detail }) => detail.to_string(),
            Err(_) => body,
        };
        Err(BackendError::Status {
            status: status.as_u16(),
            detail,
        })
    }

    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, BackendError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl InventoryBackend for HttpBackend {
    #[instrument(skip(self))]
    async fn list(&self) -> Result<Vec<InventoryRecord>, BackendError> {
        let response = self.client.get(self.url("")).send().await?;
        let records: Vec<InventoryRecord> = Self::parse_response(response).await?;
        debug!(count = records.len(), "Listed inventory");
        Ok(records)
    }

    #[instrument(skip(self))]
    async fn get_by_barcode(&self, barcode: &str) -> Result<Option<InventoryRecord>, BackendError> {
        let response = self
            .client
            .get(self.url(&format!("barcode/{}", urlencoding::encode(barcode))))
            .send()
            .await?;
        if response.status() == StatusCode::NOT_FOUND {
            debug!("No record for barcode");
            return Ok(None);
        }
        Self::parse_response(response).await.map(Some)
    }

    #[instrument(skip(self, request), fields(barcode = %request.barcode, mode = %request.mode))]
    async fn scan(&self, request: &ScanRequest) -> Result<ScanAck, BackendError> {
        let response = self
            .client
            .post(self.url("scan"))
            .json(request)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    #[instrument(skip(self, record), fields(item_name = %record.item_name))]
    async fn create(&self, record: &NewRecord) -> Result<InventoryRecord, BackendError> {
        let response = self.client.post(self.url("")).json(record).send().await?;
        Self::parse_response(response).await
    }

    #[instrument(skip_all, fields(%id))]
    async fn update(&self, id: RecordId, update: &RecordUpdate) -> Result<InventoryRecord, BackendError> {
        let response = self
            .client
            .put(self.url(&id.0.to_string()))
            .json(update)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    #[instrument(skip_all, fields(%id))]
    async fn delete(&self, id: RecordId) -> Result<(), BackendError> {
        let response = self.client.delete(self.url(&id.0.to_string())).send().await?;
        Self::ensure_success(response).await?;
        Ok(())
    }
}
