//! Pure data structures (DTOs) exchanged with the inventory service and held in
//! the record cache. [`InventoryRecord`] implements
//! [`ActorEntity`](actor_framework::ActorEntity).

pub mod record;
pub mod scan;

pub use record::*;
pub use scan::*;
