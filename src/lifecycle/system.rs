use crate::backend::{BackendError, HttpBackend, InventoryBackend};
use crate::browser::RackBrowser;
use crate::config::StockroomConfig;
use crate::locator::{LocatorChannel, LocatorClient};
use crate::rack::RackLayout;
use std::sync::Arc;
use tokio::task::{JoinError, JoinHandle};
use tracing::{error, info};

/// Starts and stops everything a [`RackBrowser`] needs.
///
/// # Architecture
///
/// - **Record cache actor**: the process-local copy of the inventory
/// - **Locator worker**: drains the best-effort lighting queue
/// - **Browser**: the facade the front end uses, wired to both
///
/// # Example
///
/// ```ignore
/// let config = StockroomConfig::from_env()?;
/// let mut system = StockroomSystem::new(&config)?;
///
/// system.browser.refresh().await?;
/// system.browser.locate("Blue Hoodie").await?;
///
/// system.shutdown().await?;
/// ```
pub struct StockroomSystem {
    pub browser: RackBrowser,

    /// Task handles for the running actor and worker (used for graceful shutdown)
    handles: Vec<JoinHandle<()>>,
}

impl StockroomSystem {
    /// Connects to the services named in `config` and starts the background tasks.
    pub fn new(config: &StockroomConfig) -> Result<Self, BackendError> {
        let backend = match config.request_timeout {
            Some(timeout) => HttpBackend::with_timeout(&config.backend_url, timeout)?,
            None => HttpBackend::new(&config.backend_url),
        };
        let locator = config.locator_url.as_deref().map(LocatorClient::new);
        Ok(Self::with_backend(config.layout.clone(), Arc::new(backend), locator))
    }

    /// Wires the system around any [`InventoryBackend`]. With no
    /// `locator`, lighting states are discarded.
    pub fn with_backend(
        layout: RackLayout,
        backend: Arc<dyn InventoryBackend>,
        locator: Option<LocatorClient>,
    ) -> Self {
        // 1. Record cache
        let (cache_actor, cache) = crate::inventory_actor::new();
        let mut handles = vec![tokio::spawn(cache_actor.run())];

        // 2. Locator side channel
        let channel = match locator {
            Some(client) => {
                let (channel, worker) = LocatorChannel::new(client);
                handles.push(tokio::spawn(worker.run()));
                channel
            }
            None => {
                info!("No lighting controller configured");
                LocatorChannel::detached().0
            }
        };

        Self {
            browser: RackBrowser::new(layout, backend, cache, channel),
            handles,
        }
    }

    /// Gracefully shuts down the system.
    ///
    /// Dropping the browser drops every cache client and locator sender, so
    /// the actor and worker see their channels close and exit. Pushes already
    /// in flight are awaited.
    pub async fn shutdown(self) -> Result<(), JoinError> {
        info!("Shutting down system...");
        drop(self.browser);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Task failed: {:?}", e);
                return Err(e);
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
