//! Starting, wiring and stopping the stockroom runtime.

pub mod system;
pub mod tracing;

pub use system::StockroomSystem;
