use crate::error::ConfigError;

/// Tuning knobs for [`HexAStar`](crate::HexAStar).
///
/// The two axis factors weight the heuristic slightly above the true hex
/// distance. Their difference decides which of several equally long routes
/// the search prefers, and swapping them between searches keeps actors that
/// walk similar routes from all taking the same staircase.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AstarConfig {
    /// Heuristic weight of the x displacement for the first search.
    pub x_factor: f32,
    /// Heuristic weight of the y displacement for the first search.
    pub y_factor: f32,
    /// Swap the two factors before every search.
    pub alternate_factors: bool,
}

impl Default for AstarConfig {
    fn default() -> Self {
        Self {
            x_factor: 1.01,
            y_factor: 1.02,
            alternate_factors: true,
        }
    }
}

impl AstarConfig {
    /// Check that both factors are usable weights.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [("x_factor", self.x_factor), ("y_factor", self.y_factor)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidFactor { name, value });
            }
        }
        Ok(())
    }
}
