use hexpath_core::Point;

/// An entity asking for a path.
pub trait PathRequester {
    /// Tile the entity currently stands on.
    fn pos(&self) -> Point;

    /// Player the entity belongs to.
    fn player(&self) -> u8 {
        0
    }

    /// Whether the entity may only walk on ground owned by its player.
    fn needs_players_ground(&self) -> bool {
        false
    }
}

/// A bare position requests paths for an anonymous, unrestricted entity.
impl PathRequester for Point {
    fn pos(&self) -> Point {
        *self
    }
}

/// Map queries the search needs, implemented by the simulation's grid.
///
/// Only in-bounds positions are ever passed in.
pub trait PathMap<R: PathRequester + ?Sized> {
    /// Cost of moving from `from` to the adjacent tile `to`. Must be > 0.
    fn cost(&self, from: Point, to: Point) -> f32;

    /// Whether `p` currently blocks `requester`.
    fn is_blocked(&self, requester: &R, p: Point) -> bool;

    /// Connectivity partition of `p`. Unblocked tiles in different
    /// partitions can never reach each other. The label of a blocked tile
    /// is only compared when `p` is a search target.
    fn blocked_partition(&self, p: Point) -> u32;

    /// Called when the search first discovers `p`.
    fn mark_as_open(&mut self, _p: Point) {}

    /// Called when the search finalizes `p`.
    fn mark_as_closed(&mut self, _p: Point) {}
}
