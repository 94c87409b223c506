//! # Rack Coordinate Mapper
//!
//! Pure conversions between a human-readable rack coordinate (`"C3"`), the
//! zero-based box index used by the lighting strip, and the contiguous span of
//! light units each box owns.
//!
//! ```rust
//! use stockroom::rack::{RackCoordinate, RackLayout};
//!
//! let layout = RackLayout::default(); // rows A..E, columns 1..5, 14 units per box
//! let c3: RackCoordinate = "C3".parse().unwrap();
//! let index = layout.to_index(&c3).unwrap();
//! assert_eq!(index, 12);
//!
//! let range = layout.light_range(index).unwrap();
//! assert_eq!((range.start, range.stop), (168, 181));
//! assert_eq!(layout.to_coordinate(index).unwrap(), c3);
//! ```

mod coordinate;
mod error;
mod layout;

pub use coordinate::*;
pub use error::*;
pub use layout::*;
