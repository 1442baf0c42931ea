//! Run-to-target goal.
//!
//! A mob with a hostile target runs toward it while the target is far away
//! and gives up once it gets close. The engage/disengage distance pair gives
//! the goal hysteresis so it does not flicker at a single threshold.

use goal_selector::{Goal, GoalFlags};

use crate::config::ChaseConfig;
use crate::host::{Mob, Navigation, Path, TargetInfo};
use crate::rng::MobRandom;
use crate::{Tick, Vec3};

/// Chases the mob's current target while it stays out of reach.
///
/// # Lifecycle
///
/// - **can_start**: at most once per [`ChaseConfig::ELIGIBILITY_CHECK_INTERVAL`]
///   ticks; needs a live target at least `engage_distance` away and a route
///   to it (or melee range)
/// - **can_continue**: stops inside `disengage_distance - 1`, then either
///   follows navigation progress or, with `ignore_visibility`, the mob's
///   restriction region
/// - **tick**: looks at the target and re-plans the route with a randomized,
///   distance-scaled delay
#[derive(Debug, Clone)]
pub struct RunToTargetGoal {
    config: ChaseConfig,
    last_eligibility_check: Option<Tick>,
    cached_path: Option<Path>,
    last_pathed_target: Option<Vec3>,
    ticks_until_recompute: i32,
    path_failure_penalty: i32,
}

impl RunToTargetGoal {
    /// Creates the goal. The two distances may be given in either order.
    pub fn new(
        speed_factor: f64,
        engage_distance: f64,
        disengage_distance: f64,
        ignore_visibility: bool,
    ) -> Self {
        Self::with_config(ChaseConfig::new(
            speed_factor,
            engage_distance,
            disengage_distance,
            ignore_visibility,
        ))
    }

    /// Creates the goal from a config, restoring the distance ordering.
    ///
    /// The config is not validated here. Run untrusted values through
    /// [`ChaseConfig::validate`] (or load them with
    /// [`ChaseConfig::from_toml_str`]) first; debug builds assert it.
    pub fn with_config(config: ChaseConfig) -> Self {
        debug_assert!(
            config.validate().is_ok(),
            "invalid chase config: {config:?}"
        );
        Self {
            config: config.normalized(),
            last_eligibility_check: None,
            cached_path: None,
            last_pathed_target: None,
            ticks_until_recompute: 0,
            path_failure_penalty: 0,
        }
    }

    pub fn config(&self) -> &ChaseConfig {
        &self.config
    }

    pub fn speed_factor(&self) -> f64 {
        self.config.speed_factor
    }

    pub fn engage_distance(&self) -> f64 {
        self.config.engage_distance
    }

    pub fn disengage_distance(&self) -> f64 {
        self.config.disengage_distance
    }

    /// Route found by the last eligibility check. `start` follows it, and it
    /// stays cached so a penalized restart inside the countdown can reuse it.
    pub fn cached_path(&self) -> Option<&Path> {
        self.cached_path.as_ref()
    }

    /// Target position the route was last recomputed toward.
    pub fn last_pathed_target(&self) -> Option<Vec3> {
        self.last_pathed_target
    }

    pub fn ticks_until_recompute(&self) -> i32 {
        self.ticks_until_recompute
    }

    pub fn path_failure_penalty(&self) -> i32 {
        self.path_failure_penalty
    }

    fn live_target<M: Mob>(mob: &M) -> Option<TargetInfo> {
        mob.target().filter(|target| target.alive)
    }

    fn base_recompute_delay<M: Mob>(mob: &mut M) -> i32 {
        ChaseConfig::RECOMPUTE_BASE_MIN + mob.random().next_int(ChaseConfig::RECOMPUTE_BASE_SPREAD)
    }

    /// Whether the route should be re-planned this tick.
    fn should_recompute<M: Mob>(&self, mob: &mut M, target: &TargetInfo) -> bool {
        if !self.config.ignore_visibility && !mob.has_line_of_sight(target) {
            return false;
        }
        if self.ticks_until_recompute > 0 {
            return false;
        }
        match self.last_pathed_target {
            None => true,
            Some(last) if target.position.distance_sqr(last) >= ChaseConfig::TARGET_MOVED_SQR => {
                true
            }
            Some(_) => mob.random().next_float() < ChaseConfig::OPPORTUNISTIC_RECOMPUTE_CHANCE,
        }
    }

    /// Grows or clears the failure penalty depending on whether the current
    /// route actually ends at the target.
    fn update_failure_penalty<M: Mob>(&mut self, mob: &M, target: &TargetInfo) {
        let reaches_target = mob
            .navigation()
            .current_path()
            .and_then(Path::end_node)
            .is_some_and(|end| {
                target.position.distance_sqr(end.as_vec3()) < ChaseConfig::PATH_END_REACH_SQR
            });

        if reaches_target {
            self.path_failure_penalty = 0;
        } else {
            self.path_failure_penalty += ChaseConfig::FAILED_PATH_PENALTY_STEP;
        }
    }

    fn recompute<M: Mob>(&mut self, mob: &mut M, target: &TargetInfo) {
        self.last_pathed_target = Some(target.position);
        let mut delay = Self::base_recompute_delay(mob);
        let distance_sqr = mob.position().distance_sqr(target.position);

        if self.config.penalize_failed_paths {
            delay += self.path_failure_penalty;
            self.update_failure_penalty(mob, target);
        }

        if distance_sqr > ChaseConfig::FAR_TARGET_SQR {
            delay += ChaseConfig::FAR_TARGET_DELAY;
        } else if distance_sqr > ChaseConfig::MID_TARGET_SQR {
            delay += ChaseConfig::MID_TARGET_DELAY;
        }

        let accepted = mob
            .navigation_mut()
            .move_to_entity(target, self.config.speed_factor);
        if !accepted {
            delay += ChaseConfig::MOVE_REJECTED_DELAY;
        }

        self.ticks_until_recompute = mob.adjusted_tick_delay(delay);
        tracing::trace!(
            mob = %mob.id(),
            target = %target.id,
            accepted,
            delay = self.ticks_until_recompute,
            "recomputed chase route"
        );
    }
}

impl<M: Mob> Goal<M> for RunToTargetGoal {
    fn name(&self) -> &'static str {
        "run_to_target"
    }

    fn can_start(&mut self, mob: &mut M) -> bool {
        let now = mob.game_time();
        if self.last_eligibility_check.is_some_and(|last| {
            now.since(last) < ChaseConfig::ELIGIBILITY_CHECK_INTERVAL
        }) {
            return false;
        }
        self.last_eligibility_check = Some(now);

        let Some(target) = Self::live_target(mob) else {
            return false;
        };
        if target.position.distance(mob.position()) < self.config.engage_distance {
            return false;
        }

        if self.config.penalize_failed_paths {
            self.ticks_until_recompute -= 1;
            if self.ticks_until_recompute > 0 {
                return true;
            }
            self.cached_path = mob.navigation_mut().create_path(&target, 0);
            self.ticks_until_recompute = Self::base_recompute_delay(mob);
            return self.cached_path.is_some();
        }

        self.cached_path = mob.navigation_mut().create_path(&target, 0);
        let eligible = self.cached_path.is_some() || mob.is_within_melee_attack_range(&target);
        tracing::debug!(
            mob = %mob.id(),
            target = %target.id,
            route = self.cached_path.is_some(),
            eligible,
            "chase eligibility checked"
        );
        eligible
    }

    fn can_continue(&mut self, mob: &mut M) -> bool {
        let Some(target) = Self::live_target(mob) else {
            return false;
        };
        if target.position.distance(mob.position()) <= self.config.disengage_distance - 1.0 {
            return false;
        }

        if !self.config.ignore_visibility {
            return !mob.navigation().is_done();
        }
        mob.is_within_restriction(target.position.block_pos()) && !target.is_exempt_observer()
    }

    fn start(&mut self, mob: &mut M) {
        mob.navigation_mut()
            .follow_path(self.cached_path.clone(), self.config.speed_factor);
        mob.set_aggressive(true);
        self.ticks_until_recompute = 0;
        if let Some(animated) = mob.animated() {
            animated.start_running();
        }
        tracing::debug!(mob = %mob.id(), "chase started");
    }

    fn stop(&mut self, mob: &mut M) {
        if mob
            .target()
            .is_some_and(|target| !target.is_exempt_observer())
        {
            mob.set_target(None);
        }
        mob.set_aggressive(false);
        mob.navigation_mut().stop();
        if let Some(animated) = mob.animated() {
            animated.stop_running();
        }
        tracing::debug!(mob = %mob.id(), "chase stopped");
    }

    fn requires_update_every_tick(&self) -> bool {
        true
    }

    fn tick(&mut self, mob: &mut M) {
        let Some(target) = mob.target() else {
            return;
        };

        mob.look_at(
            target.position,
            ChaseConfig::MAX_LOOK_TURN,
            ChaseConfig::MAX_LOOK_TURN,
        );
        self.ticks_until_recompute = (self.ticks_until_recompute - 1).max(0);

        if self.should_recompute(mob, &target) {
            self.recompute(mob, &target);
        }
    }

    fn flags(&self) -> GoalFlags {
        GoalFlags::MOVE | GoalFlags::LOOK
    }
}
