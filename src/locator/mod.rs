//! # Physical Rack Locator
//!
//! Lights boxes on the storage rack through an addressable-LED controller.
//!
//! - [`state`] - pure builders for the highlight/reset and standby states
//! - [`client`] - [`LocatorClient`], one HTTP push per state
//! - [`channel`] - [`LocatorChannel`], the fire-and-forget queue inventory code talks to
//!
//! Lighting is cosmetic next to stock correctness: nothing in this module can
//! fail an inventory operation.

pub mod channel;
pub mod client;
pub mod state;

pub use channel::*;
pub use client::*;
pub use state::*;
