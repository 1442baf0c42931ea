//! Scheduler tuning.

/// Tunable parameters of a [`GoalSelector`](crate::GoalSelector).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SelectorConfig {
    /// Full goal re-evaluation happens once every this many ticks. On the
    /// ticks in between only goals that require every-tick updates are
    /// ticked.
    pub evaluation_interval: u32,
}

impl SelectorConfig {
    pub const DEFAULT_EVALUATION_INTERVAL: u32 = 2;

    pub fn new() -> Self {
        Self {
            evaluation_interval: Self::DEFAULT_EVALUATION_INTERVAL,
        }
    }

    /// Creates a config with the given interval, clamped to at least 1.
    pub fn with_evaluation_interval(evaluation_interval: u32) -> Self {
        Self {
            evaluation_interval: evaluation_interval.max(1),
        }
    }
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self::new()
    }
}
