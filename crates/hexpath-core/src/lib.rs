//! **hexpath-core**: geometry primitives for hexagonal simulation maps.
//!
//! The map is stored as a plain rectangle of `width × height` tiles. Hex
//! adjacency is expressed through six fixed offsets ([`HexDirection`]), so a
//! tile's neighbours are found by integer addition, with no cube or offset
//! coordinate conversion.

pub mod geom;
pub mod hex;

pub use geom::{Point, Range, RangeIter};
pub use hex::{HexDirection, hex_distance};
