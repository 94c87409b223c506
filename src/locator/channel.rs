//! Best-effort side channel for locator pushes.
//!
//! Inventory operations hand their lighting side effect to a [`LocatorChannel`]
//! and move on. A [`LocatorWorker`] drains the queue and spawns every push on
//! its own, so pushes are neither ordered nor coalesced: when two race, the
//! controller shows whichever arrived last. Failures are logged and dropped.

use super::{LocatorClient, LocatorState};
use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

/// Cloneable handle used to queue locator states.
#[derive(Debug, Clone)]
pub struct LocatorChannel {
    sender: mpsc::UnboundedSender<LocatorState>,
}

/// Drains a [`LocatorChannel`] into a [`LocatorClient`]. Run it with
/// `tokio::spawn(worker.run())`.
pub struct LocatorWorker {
    receiver: mpsc::UnboundedReceiver<LocatorState>,
    client: LocatorClient,
}

impl LocatorChannel {
    /// Creates the channel and the worker that will push to `client`.
    pub fn new(client: LocatorClient) -> (Self, LocatorWorker) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, LocatorWorker { receiver, client })
    }

    /// A channel with no controller behind it: states land on the returned
    /// receiver. Dropping the receiver turns every send into a no-op.
    pub fn detached() -> (Self, mpsc::UnboundedReceiver<LocatorState>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }

    /// Queue `state` for pushing. Never blocks and never fails.
    pub fn send(&self, state: LocatorState) {
        if self.sender.send(state).is_err() {
            debug!("Locator channel closed, state dropped");
        }
    }
}

impl LocatorWorker {
    /// Runs until every [`LocatorChannel`] clone is dropped, then waits for the
    /// pushes still in flight.
    pub async fn run(mut self) {
        info!(url = self.client.state_url(), "Locator worker started");
        let mut in_flight = JoinSet::new();

        loop {
            tokio::select! {
                next = self.receiver.recv() => match next {
                    Some(state) => {
                        let client = self.client.clone();
                        in_flight.spawn(async move {
                            if let Err(e) = client.push(&state).await {
                                warn!(error = %e, "Locator push failed");
                            }
                        });
                    }
                    None => break,
                },
                Some(_) = in_flight.join_next(), if !in_flight.is_empty() => {}
            }
        }

        while in_flight.join_next().await.is_some() {}
        info!("Locator worker stopped");
    }
}
