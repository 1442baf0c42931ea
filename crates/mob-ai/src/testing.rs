//! In-memory host fakes for exercising goals without an engine.

use std::collections::VecDeque;

use crate::host::{AnimatedMob, Mob, Navigation, Path, TargetInfo};
use crate::rng::{MobRandom, PcgRandom};
use crate::{BlockPos, EntityId, Tick, Vec3};

/// Random source that replays scripted draws.
///
/// Each queue yields its values in order and then keeps repeating the last
/// one. With a PCG fallback, exhausted queues draw from it instead.
#[derive(Clone, Debug)]
pub struct ScriptedRandom {
    ints: VecDeque<i32>,
    floats: VecDeque<f32>,
    last_int: i32,
    last_float: f32,
    fallback: Option<PcgRandom>,
}

impl ScriptedRandom {
    pub fn new(ints: Vec<i32>, floats: Vec<f32>) -> Self {
        Self {
            ints: ints.into(),
            floats: floats.into(),
            last_int: 0,
            // Never below the opportunistic recompute chance.
            last_float: 0.99,
            fallback: None,
        }
    }

    pub fn from_pcg(rng: PcgRandom) -> Self {
        Self {
            fallback: Some(rng),
            ..Self::new(Vec::new(), Vec::new())
        }
    }
}

impl Default for ScriptedRandom {
    fn default() -> Self {
        Self::new(Vec::new(), Vec::new())
    }
}

impl MobRandom for ScriptedRandom {
    fn next_u32(&mut self) -> u32 {
        self.fallback.as_mut().map_or(0, PcgRandom::next_u32)
    }

    fn next_int(&mut self, bound: i32) -> i32 {
        match self.ints.pop_front() {
            Some(value) => self.last_int = value,
            None => {
                if let Some(rng) = self.fallback.as_mut() {
                    return rng.next_int(bound);
                }
            }
        }
        self.last_int.clamp(0, (bound - 1).max(0))
    }

    fn next_float(&mut self) -> f32 {
        match self.floats.pop_front() {
            Some(value) => self.last_float = value,
            None => {
                if let Some(rng) = self.fallback.as_mut() {
                    return rng.next_float();
                }
            }
        }
        self.last_float
    }
}

/// Navigation that records every command it receives.
#[derive(Clone, Debug)]
pub struct FakeNavigation {
    /// Route handed out by `create_path`.
    pub planned: Option<Path>,
    /// Route reported by `current_path`.
    pub current: Option<Path>,
    pub accept_moves: bool,
    pub done: bool,
    pub create_calls: u32,
    pub stop_calls: u32,
    pub followed: Vec<(Option<Path>, f64)>,
    pub move_requests: Vec<(EntityId, f64)>,
}

impl Default for FakeNavigation {
    fn default() -> Self {
        Self {
            planned: None,
            current: None,
            accept_moves: true,
            done: true,
            create_calls: 0,
            stop_calls: 0,
            followed: Vec::new(),
            move_requests: Vec::new(),
        }
    }
}

impl Navigation for FakeNavigation {
    fn create_path(&mut self, _target: &TargetInfo, _accuracy: i32) -> Option<Path> {
        self.create_calls += 1;
        self.planned.clone()
    }

    fn follow_path(&mut self, path: Option<Path>, speed: f64) -> bool {
        self.followed.push((path.clone(), speed));
        self.done = path.is_none();
        !self.done
    }

    fn move_to_entity(&mut self, target: &TargetInfo, speed: f64) -> bool {
        self.move_requests.push((target.id, speed));
        if self.accept_moves {
            self.done = false;
        }
        self.accept_moves
    }

    fn is_done(&self) -> bool {
        self.done
    }

    fn stop(&mut self) {
        self.stop_calls += 1;
        self.done = true;
        self.current = None;
    }

    fn current_path(&self) -> Option<&Path> {
        self.current.as_ref()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FakeAnimation {
    pub running: bool,
}

impl AnimatedMob for FakeAnimation {
    fn start_running(&mut self) {
        self.running = true;
    }

    fn stop_running(&mut self) {
        self.running = false;
    }
}

/// A mob whose world is a handful of public fields.
#[derive(Clone, Debug)]
pub struct FakeMob {
    pub id: EntityId,
    pub position: Vec3,
    pub time: Tick,
    pub target: Option<TargetInfo>,
    pub aggressive: bool,
    pub navigation: FakeNavigation,
    pub line_of_sight: bool,
    pub line_of_sight_checks: u32,
    /// Center and radius of the restriction region; `None` is unrestricted.
    pub restriction: Option<(BlockPos, f64)>,
    pub melee_range: bool,
    pub random: ScriptedRandom,
    /// Multiplier the fake host applies to goal delays.
    pub delay_scale: i32,
    pub animation: Option<FakeAnimation>,
    pub looked_at: Vec<(Vec3, f32, f32)>,
}

impl FakeMob {
    pub fn new(id: EntityId, position: Vec3) -> Self {
        Self {
            id,
            position,
            time: Tick::ZERO,
            target: None,
            aggressive: false,
            navigation: FakeNavigation::default(),
            line_of_sight: true,
            line_of_sight_checks: 0,
            restriction: None,
            melee_range: false,
            random: ScriptedRandom::default(),
            delay_scale: 1,
            animation: None,
            looked_at: Vec::new(),
        }
    }
}

impl Mob for FakeMob {
    type Navigation = FakeNavigation;

    fn id(&self) -> EntityId {
        self.id
    }

    fn position(&self) -> Vec3 {
        self.position
    }

    fn game_time(&self) -> Tick {
        self.time
    }

    fn target(&self) -> Option<TargetInfo> {
        self.target
    }

    /// The fake only knows its current target, so any other id clears it.
    fn set_target(&mut self, target: Option<EntityId>) {
        self.target = target.and_then(|id| self.target.filter(|current| current.id == id));
    }

    fn set_aggressive(&mut self, aggressive: bool) {
        self.aggressive = aggressive;
    }

    fn navigation(&self) -> &FakeNavigation {
        &self.navigation
    }

    fn navigation_mut(&mut self) -> &mut FakeNavigation {
        &mut self.navigation
    }

    fn look_at(&mut self, position: Vec3, max_yaw: f32, max_pitch: f32) {
        self.looked_at.push((position, max_yaw, max_pitch));
    }

    fn has_line_of_sight(&mut self, _target: &TargetInfo) -> bool {
        self.line_of_sight_checks += 1;
        self.line_of_sight
    }

    fn is_within_restriction(&self, pos: BlockPos) -> bool {
        self.restriction.is_none_or(|(center, radius)| {
            pos.as_vec3().distance_sqr(center.as_vec3()) < radius * radius
        })
    }

    fn is_within_melee_attack_range(&self, _target: &TargetInfo) -> bool {
        self.melee_range
    }

    fn random(&mut self) -> &mut dyn MobRandom {
        &mut self.random
    }

    fn adjusted_tick_delay(&self, ticks: i32) -> i32 {
        ticks * self.delay_scale
    }

    fn animated(&mut self) -> Option<&mut dyn AnimatedMob> {
        self.animation
            .as_mut()
            .map(|animation| animation as &mut dyn AnimatedMob)
    }
}
