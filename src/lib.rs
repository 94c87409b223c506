//! # Stockroom
//!
//! > **Stock scanning and a lit storage rack for a small shop.**
//!
//! Scans move stock in and out of records owned by an inventory service. A
//! process-local record cache mirrors those records so the rack grid, box
//! contents and searches can be answered without a round trip. An
//! addressable-LED strip behind the rack lights the box an item lives in.
//!
//! ## 🏗️ Design Philosophy
//!
//! - **The service owns the data.** The cache is only ever written after a
//!   service call succeeds; a failed scan leaves it exactly as it was.
//! - **Lights are cosmetic.** Locator pushes go through a fire-and-forget
//!   queue and can never fail an inventory operation.
//! - **Not found is an answer.** An unknown barcode is
//!   [`Resolution::NotFound`](scan::Resolution::NotFound), distinct from an
//!   unreachable service.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Rack ([`rack`], [`locator`])
//! - **Role**: map `"C3"` to box 12 and light units 168..=181, build controller
//!   states, push them.
//! - **Key items**: [`RackLayout`](rack::RackLayout),
//!   [`LocatorState`](locator::LocatorState),
//!   [`LocatorChannel`](locator::LocatorChannel).
//!
//! ### 2. The Cache ([`inventory_actor`], [`clients`])
//! - **Role**: one [`ResourceActor`](actor_framework::ResourceActor) owning
//!   every known [`InventoryRecord`](model::InventoryRecord), reached through
//!   [`InventoryClient`](clients::InventoryClient).
//!
//! ### 3. The Service ([`backend`])
//! - **Role**: the [`InventoryBackend`](backend::InventoryBackend) trait and
//!   its HTTP implementation.
//!
//! ### 4. Scanning ([`scan`])
//! - **Role**: resolve a barcode or search, then apply the stock movement.
//! - **Key items**: [`ScanResolver`](scan::ScanResolver),
//!   [`ScanLedger`](scan::ScanLedger).
//!
//! ### 5. The Front ([`browser`], [`lifecycle`], [`config`])
//! - **Role**: the [`RackBrowser`](browser::RackBrowser) facade and the
//!   [`StockroomSystem`](lifecycle::StockroomSystem) that starts and stops it.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! STOCKROOM_BACKEND_URL=http://localhost:8000 RUST_LOG=info stockroom grid
//! ```
//!
//! ### Running Tests
//!
//! ```bash
//! cargo test
//! ```

pub mod backend;
pub mod browser;
pub mod clients;
pub mod config;
pub mod inventory_actor;
pub mod lifecycle;
pub mod locator;
pub mod model;
pub mod rack;
pub mod scan;
