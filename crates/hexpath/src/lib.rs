//! A* pathfinding for many moving actors on a hexagonal simulation map.
//!
//! The engine ([`HexAStar`]) is sized once for a fixed map and then reused
//! for every search: node state lives in flat parallel buffers indexed by
//! `y * width + x`, and the open list is an indexable binary heap
//! ([`MinHeap`]) that supports decrease-key. After construction a search
//! allocates nothing except the returned [`Path`].
//!
//! The map itself stays outside the engine. Callers plug it in through
//! [`PathMap`], which answers step costs, blocking and connectivity
//! partitions. [`TerrainGrid`] is a ready-made implementation backed by a
//! [`PartitionMap`].
//!
//! | Item | Role |
//! |---|---|
//! | [`FlatGrid`] | `(x, y)` ↔ flat index |
//! | [`MinHeap`] / [`Heapable`] | open list with externally stored ranks and slots |
//! | [`HexAStar`] | validation, search loop, path reconstruction |
//! | [`Path`] | immutable step list with a movement cursor |
//! | [`PathMap`] / [`PathRequester`] | adapter seams |

mod astar;
mod config;
mod coords;
mod error;
mod heap;
mod partition;
mod path;
mod store;
mod terrain;
mod traits;

pub use astar::{HexAStar, SearchOutcome, SearchStats};
pub use config::AstarConfig;
pub use coords::FlatGrid;
pub use error::{ConfigError, PathError};
pub use heap::{Heapable, MinHeap, NOT_ENQUEUED};
pub use hexpath_core::{HexDirection, Point, Range, hex_distance};
pub use partition::PartitionMap;
pub use path::Path;
pub use terrain::TerrainGrid;
pub use traits::{PathMap, PathRequester};
