use thiserror::Error;

/// Errors raised by the engine and the bundled map types.
///
/// A search that merely finds no route is not an error: `find_path`
/// returns `Ok(None)` for that.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PathError {
    /// The search was started from a tile outside the map. Callers are
    /// expected to validate entity positions, so this indicates a bug.
    #[error("start position ({x}, {y}) is out of bounds")]
    InvalidStartPosition { x: i32, y: i32 },

    #[error("unsupported map size {width}x{height}")]
    InvalidExtent { width: i32, height: i32 },

    #[error("tile ({x}, {y}) has invalid step cost {cost}; costs must be positive and finite")]
    InvalidCost { x: i32, y: i32, cost: f32 },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Rejected [`AstarConfig`](crate::AstarConfig) values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("heuristic factor `{name}` is {value}; it must be positive and finite")]
    InvalidFactor { name: &'static str, value: f32 },
}
