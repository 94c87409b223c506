//! Type-safe wrappers around [`ResourceClient`](actor_framework::ResourceClient).

pub mod inventory_client;

pub use inventory_client::*;
