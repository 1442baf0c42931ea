//! Lifecycle state tracked for every scheduled goal.

/// Whether a goal is currently selected by its scheduler.
///
/// # Transitions
///
/// - `Idle -> Active` when `can_start` succeeds and the goal's flags are free
/// - `Active -> Idle` when `can_continue` fails, a flag is disabled, or a
///   higher-priority goal takes over one of its flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GoalState {
    /// The goal is not selected. `start` has not run, or `stop` has.
    #[default]
    Idle,

    /// The goal is selected and receives `tick` calls.
    Active,
}

impl GoalState {
    /// Returns `true` if this state is `Active`.
    #[inline]
    pub fn is_active(self) -> bool {
        matches!(self, GoalState::Active)
    }

    /// Returns `true` if this state is `Idle`.
    #[inline]
    pub fn is_idle(self) -> bool {
        matches!(self, GoalState::Idle)
    }
}
