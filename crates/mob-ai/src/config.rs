//! Chase configuration and tuning constants.

#[cfg(feature = "loaders")]
use std::path::Path;

use crate::error::{ConfigError, Result};

/// Parameters of a [`RunToTargetGoal`](crate::RunToTargetGoal).
///
/// Build it with [`ChaseConfig::new`], which orders the distance pair so
/// `engage_distance >= disengage_distance` always holds.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChaseConfig {
    /// Movement speed multiplier while chasing.
    pub speed_factor: f64,

    /// The chase may only start when the target is at least this far away.
    pub engage_distance: f64,

    /// The chase stops once the target is within `disengage_distance - 1`.
    pub disengage_distance: f64,

    /// Keep chasing without line of sight, bounded only by the mob's
    /// restriction region.
    #[cfg_attr(feature = "serde", serde(default))]
    pub ignore_visibility: bool,

    /// Back off route recomputation after routes that fall short of the
    /// target. Off by default.
    #[cfg_attr(feature = "serde", serde(default))]
    pub penalize_failed_paths: bool,
}

impl ChaseConfig {
    // ===== tuning constants =====
    /// Minimum ticks between two eligibility checks.
    pub const ELIGIBILITY_CHECK_INTERVAL: u64 = 20;
    /// Head rotation cap per tick, both yaw and pitch.
    pub const MAX_LOOK_TURN: f32 = 30.0;
    /// Base recompute delay is `RECOMPUTE_BASE_MIN + [0, RECOMPUTE_BASE_SPREAD)`.
    pub const RECOMPUTE_BASE_MIN: i32 = 4;
    pub const RECOMPUTE_BASE_SPREAD: i32 = 7;
    /// Per-tick chance of recomputing although the target did not move.
    pub const OPPORTUNISTIC_RECOMPUTE_CHANCE: f32 = 0.05;
    /// Squared distance the target must move to force a recompute.
    pub const TARGET_MOVED_SQR: f64 = 1.0;
    /// Extra delay when the move request is rejected.
    pub const MOVE_REJECTED_DELAY: i32 = 15;
    pub const FAR_TARGET_SQR: f64 = 1024.0;
    pub const FAR_TARGET_DELAY: i32 = 10;
    pub const MID_TARGET_SQR: f64 = 256.0;
    pub const MID_TARGET_DELAY: i32 = 5;
    /// Penalty growth per route that ends short of the target.
    pub const FAILED_PATH_PENALTY_STEP: i32 = 10;
    /// A route "reaches" the target when its end is within this squared
    /// distance.
    pub const PATH_END_REACH_SQR: f64 = 1.0;

    /// Creates a config, ordering the two distances. A NaN distance is kept
    /// as given so [`validate`](Self::validate) can reject it.
    pub fn new(speed_factor: f64, distance_a: f64, distance_b: f64, ignore_visibility: bool) -> Self {
        let (engage_distance, disengage_distance) = if distance_a < distance_b {
            (distance_b, distance_a)
        } else {
            (distance_a, distance_b)
        };
        Self {
            speed_factor,
            engage_distance,
            disengage_distance,
            ignore_visibility,
            penalize_failed_paths: false,
        }
    }

    pub fn with_failed_path_penalty(mut self, enabled: bool) -> Self {
        self.penalize_failed_paths = enabled;
        self
    }

    /// Restores the distance ordering, e.g. after deserializing.
    pub fn normalized(self) -> Self {
        Self::new(
            self.speed_factor,
            self.engage_distance,
            self.disengage_distance,
            self.ignore_visibility,
        )
        .with_failed_path_penalty(self.penalize_failed_paths)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.speed_factor.is_finite() && self.speed_factor > 0.0) {
            return Err(ConfigError::InvalidSpeed(self.speed_factor));
        }
        for (field, value) in [
            ("engage_distance", self.engage_distance),
            ("disengage_distance", self.disengage_distance),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::InvalidDistance { field, value });
            }
        }
        Ok(())
    }

    /// Parses, normalizes and validates a TOML config.
    #[cfg(feature = "loaders")]
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: ChaseConfig = toml::from_str(content)?;
        let config = config.normalized();
        config.validate()?;
        Ok(config)
    }

    /// Loads a TOML config from `path`.
    #[cfg(feature = "loaders")]
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loading chase config");
        Self::from_toml_str(&content)
    }
}
