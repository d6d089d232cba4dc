//! Runtime configuration read from environment variables.

use crate::types::DEFAULT_LANES;

/// Settings for an arena and the games played in it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BowlingConfig {
    /// Arena capacity.
    pub lanes: usize,
    /// Seed for random rolls; `None` lets the caller pick one.
    pub seed: Option<u32>,
    /// Delay between frames when a shell paces the display.
    pub pace_ms: u64,
    pub color: bool,
}

impl Default for BowlingConfig {
    fn default() -> Self {
        Self {
            lanes: DEFAULT_LANES,
            seed: None,
            pace_ms: 0,
            color: true,
        }
    }
}

impl BowlingConfig {
    /// Create config from environment variables
    ///
    /// - `BOWLING_LANES`: arena capacity (default 5)
    /// - `BOWLING_SEED`: roll seed (default: unset)
    /// - `BOWLING_PACE_MS`: delay between frames (default 0)
    /// - `BOWLING_DISABLE_COLOR`: `1` or `true` disables coloured output
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Create config from an arbitrary variable lookup.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let lanes = lookup("BOWLING_LANES")
            .and_then(|s| s.trim().parse().ok())
            .filter(|&n: &usize| n > 0)
            .unwrap_or(DEFAULT_LANES);

        let seed = lookup("BOWLING_SEED").and_then(|s| s.trim().parse().ok());

        let pace_ms = lookup("BOWLING_PACE_MS")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(0);

        let color = !lookup("BOWLING_DISABLE_COLOR")
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(false);

        Self {
            lanes,
            seed,
            pace_ms,
            color,
        }
    }
}
