//! Priority scheduler for a mob's goals.
//!
//! The [`GoalSelector`] is the host-side adapter that turns the [`Goal`]
//! hooks into a state machine. Goals are evaluated in registration order;
//! when two goals compete for a [`GoalFlags`] channel the lower priority
//! number wins, provided the current owner is interruptible.

use crate::{Goal, GoalFlags, GoalState, SelectorConfig};

/// A registered goal together with its scheduling state.
struct ScheduledGoal<C> {
    priority: u32,
    goal: Box<dyn Goal<C>>,
    state: GoalState,
}

impl<C> ScheduledGoal<C> {
    fn start(&mut self, ctx: &mut C) {
        tracing::debug!(goal = self.goal.name(), priority = self.priority, "starting goal");
        self.state = GoalState::Active;
        self.goal.start(ctx);
    }

    fn stop(&mut self, ctx: &mut C) {
        if self.state.is_idle() {
            return;
        }
        tracing::debug!(goal = self.goal.name(), priority = self.priority, "stopping goal");
        self.state = GoalState::Idle;
        self.goal.stop(ctx);
    }

    /// Whether `priority` may take a flag this goal currently owns.
    fn can_be_replaced_by(&self, priority: u32) -> bool {
        self.state.is_idle() || (self.goal.is_interruptible() && priority < self.priority)
    }
}

/// Schedules the goals of a single mob.
///
/// # Semantics
///
/// Each [`tick`](GoalSelector::tick):
/// 1. Active goals whose flags were disabled, or whose `can_continue` fails,
///    are stopped
/// 2. Flag locks held by idle goals are released
/// 3. Each idle goal whose flags are all enabled and all replaceable, and
///    whose `can_start` succeeds, displaces the current owners and starts
/// 4. Every active goal is ticked
///
/// # Example
///
/// ```rust,ignore
/// let mut selector = GoalSelector::new();
/// selector.add_goal(1, Box::new(FloatGoal::new()));
/// selector.add_goal(2, Box::new(RunToTargetGoal::new(1.2, 12.0, 4.0, false)));
///
/// selector.step(&mut mob, game_time);
/// ```
pub struct GoalSelector<C> {
    goals: Vec<ScheduledGoal<C>>,
    locks: [Option<usize>; GoalFlags::COUNT],
    disabled: GoalFlags,
    config: SelectorConfig,
}

impl<C> GoalSelector<C> {
    /// Creates an empty selector with the default config.
    pub fn new() -> Self {
        Self::with_config(SelectorConfig::default())
    }

    /// Creates an empty selector with the given config.
    pub fn with_config(config: SelectorConfig) -> Self {
        Self {
            goals: Vec::new(),
            locks: [None; GoalFlags::COUNT],
            disabled: GoalFlags::empty(),
            config,
        }
    }

    /// Registers a goal and returns its index.
    ///
    /// Lower `priority` values win flag conflicts. Goals are evaluated in
    /// registration order, so register them by ascending priority.
    pub fn add_goal(&mut self, priority: u32, goal: Box<dyn Goal<C>>) -> usize {
        self.goals.push(ScheduledGoal {
            priority,
            goal,
            state: GoalState::Idle,
        });
        self.goals.len() - 1
    }

    /// Stops every active goal and removes all goals.
    pub fn clear(&mut self, ctx: &mut C) {
        for goal in &mut self.goals {
            goal.stop(ctx);
        }
        self.goals.clear();
        self.locks = [None; GoalFlags::COUNT];
    }

    pub fn len(&self) -> usize {
        self.goals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.goals.is_empty()
    }

    pub fn config(&self) -> &SelectorConfig {
        &self.config
    }

    /// Returns the state of the goal at `index`, if registered.
    pub fn state(&self, index: usize) -> Option<GoalState> {
        self.goals.get(index).map(|goal| goal.state)
    }

    /// Returns `true` if the goal at `index` is active.
    pub fn is_active(&self, index: usize) -> bool {
        self.state(index).is_some_and(GoalState::is_active)
    }

    /// Iterates over active goals with their priorities.
    pub fn active_goals(&self) -> impl Iterator<Item = (u32, &(dyn Goal<C> + 'static))> + '_ {
        self.goals
            .iter()
            .filter(|goal| goal.state.is_active())
            .map(|goal| (goal.priority, goal.goal.as_ref()))
    }

    /// Returns the index of the goal that owns `flag`, if any.
    pub fn lock_owner(&self, flag: GoalFlags) -> Option<usize> {
        if flag.bits().count_ones() != 1 {
            return None;
        }
        self.locks[flag.slot()]
    }

    /// Disables the given flags. Goals using them are stopped on the next
    /// tick and cannot start while the flags stay disabled.
    pub fn disable_flag(&mut self, flags: GoalFlags) {
        self.disabled.insert(flags);
    }

    /// Re-enables the given flags.
    pub fn enable_flag(&mut self, flags: GoalFlags) {
        self.disabled.remove(flags);
    }

    pub fn set_flag(&mut self, flags: GoalFlags, enabled: bool) {
        if enabled {
            self.enable_flag(flags);
        } else {
            self.disable_flag(flags);
        }
    }

    /// Runs a full evaluation pass, then ticks every active goal.
    pub fn tick(&mut self, ctx: &mut C) {
        let disabled = self.disabled;

        for goal in &mut self.goals {
            if goal.state.is_active()
                && (goal.goal.flags().intersects(disabled) || !goal.goal.can_continue(ctx))
            {
                goal.stop(ctx);
            }
        }

        for slot in &mut self.locks {
            if slot.is_some_and(|owner| self.goals[owner].state.is_idle()) {
                *slot = None;
            }
        }

        for index in 0..self.goals.len() {
            let candidate = &self.goals[index];
            if candidate.state.is_active() || candidate.goal.flags().intersects(disabled) {
                continue;
            }
            if !self.can_replace_all(index) {
                continue;
            }
            if !self.goals[index].goal.can_start(ctx) {
                continue;
            }

            let flags = self.goals[index].goal.flags();
            for flag in flags.iter() {
                if let Some(owner) = self.locks[flag.slot()] {
                    self.release(owner, ctx);
                }
                self.locks[flag.slot()] = Some(index);
            }
            self.goals[index].start(ctx);
        }

        self.tick_running_goals(ctx, true);
    }

    /// Ticks active goals.
    ///
    /// With `force_all` unset only goals that require every-tick updates are
    /// ticked.
    pub fn tick_running_goals(&mut self, ctx: &mut C, force_all: bool) {
        for goal in &mut self.goals {
            if goal.state.is_active() && (force_all || goal.goal.requires_update_every_tick()) {
                goal.goal.tick(ctx);
            }
        }
    }

    /// Advances the selector by one simulation tick.
    ///
    /// Runs a full [`tick`](GoalSelector::tick) on ticks that are a multiple
    /// of the configured evaluation interval, and only every-tick goals
    /// otherwise.
    pub fn step(&mut self, ctx: &mut C, game_time: u64) {
        let interval = u64::from(self.config.evaluation_interval.max(1));
        if game_time % interval == 0 {
            self.tick(ctx);
        } else {
            self.tick_running_goals(ctx, false);
        }
    }

    fn can_replace_all(&self, index: usize) -> bool {
        let candidate = &self.goals[index];
        candidate.goal.flags().iter().all(|flag| match self.locks[flag.slot()] {
            None => true,
            Some(owner) => self.goals[owner].can_be_replaced_by(candidate.priority),
        })
    }

    /// Stops `owner` and frees every lock it holds.
    fn release(&mut self, owner: usize, ctx: &mut C) {
        self.goals[owner].stop(ctx);
        for slot in &mut self.locks {
            if *slot == Some(owner) {
                *slot = None;
            }
        }
    }
}

impl<C> Default for GoalSelector<C> {
    fn default() -> Self {
        Self::new()
    }
}
