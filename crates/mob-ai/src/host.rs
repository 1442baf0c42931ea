//! Contract between mob goals and the host engine.
//!
//! Goals never compute routes, line of sight or animations themselves. They
//! read and command the mob through [`Mob`], whose implementation belongs
//! to the host engine.

use crate::rng::MobRandom;
use crate::{BlockPos, EntityId, Tick, Vec3};

/// Game mode of a player-controlled entity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum GameMode {
    #[default]
    Survival,
    Adventure,
    Creative,
    Spectator,
}

/// What kind of entity a target is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TargetKind {
    /// Any non-player living entity.
    Creature,
    /// A player-controlled entity.
    Player { mode: GameMode },
}

/// Snapshot of a mob's current target, taken when a goal queries it.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TargetInfo {
    pub id: EntityId,
    pub position: Vec3,
    pub alive: bool,
    pub kind: TargetKind,
}

impl TargetInfo {
    pub fn creature(id: EntityId, position: Vec3) -> Self {
        Self {
            id,
            position,
            alive: true,
            kind: TargetKind::Creature,
        }
    }

    pub fn player(id: EntityId, position: Vec3, mode: GameMode) -> Self {
        Self {
            id,
            position,
            alive: true,
            kind: TargetKind::Player { mode },
        }
    }

    /// A player in creative or spectator mode. Such targets are never chased.
    pub fn is_exempt_observer(&self) -> bool {
        matches!(
            self.kind,
            TargetKind::Player {
                mode: GameMode::Creative | GameMode::Spectator
            }
        )
    }
}

/// A route produced by the host's navigation.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    nodes: Vec<BlockPos>,
}

impl Path {
    pub fn new(nodes: Vec<BlockPos>) -> Self {
        Self { nodes }
    }

    pub fn nodes(&self) -> &[BlockPos] {
        &self.nodes
    }

    /// Terminal waypoint of the route.
    pub fn end_node(&self) -> Option<BlockPos> {
        self.nodes.last().copied()
    }
}

/// Route planning and following for one mob.
pub trait Navigation {
    /// Plans a route to `target`. `accuracy` is how close, in blocks, the
    /// route must end to the target. Returns `None` when unreachable.
    fn create_path(&mut self, target: &TargetInfo, accuracy: i32) -> Option<Path>;

    /// Starts following `path`. Returns `false` when there is nothing to
    /// follow.
    fn follow_path(&mut self, path: Option<Path>, speed: f64) -> bool;

    /// Plans and starts following a route to `target`. Returns `false` when
    /// the request is rejected.
    fn move_to_entity(&mut self, target: &TargetInfo, speed: f64) -> bool;

    /// Whether the current route is finished or absent.
    fn is_done(&self) -> bool;

    /// Abandons the current route.
    fn stop(&mut self);

    /// The route currently being followed.
    fn current_path(&self) -> Option<&Path>;
}

/// Optional visual state for mobs with a running animation.
pub trait AnimatedMob {
    fn start_running(&mut self);
    fn stop_running(&mut self);
}

/// A pathfinding mob as seen by its goals.
pub trait Mob {
    type Navigation: Navigation;

    fn id(&self) -> EntityId;

    fn position(&self) -> Vec3;

    /// Current simulation tick of the mob's world.
    fn game_time(&self) -> Tick;

    /// The entity this mob is hunting, if any.
    fn target(&self) -> Option<TargetInfo>;

    /// Replaces the target. `None` forgets it.
    fn set_target(&mut self, target: Option<EntityId>);

    fn set_aggressive(&mut self, aggressive: bool);

    fn navigation(&self) -> &Self::Navigation;

    fn navigation_mut(&mut self) -> &mut Self::Navigation;

    /// Turns the head toward `position`, rotating at most `max_yaw` and
    /// `max_pitch` degrees this tick.
    fn look_at(&mut self, position: Vec3, max_yaw: f32, max_pitch: f32);

    /// Whether the mob can currently see `target`.
    fn has_line_of_sight(&mut self, target: &TargetInfo) -> bool;

    /// Whether `pos` lies inside the region the mob is confined to.
    fn is_within_restriction(&self, pos: BlockPos) -> bool;

    fn is_within_melee_attack_range(&self, target: &TargetInfo) -> bool;

    fn random(&mut self) -> &mut dyn MobRandom;

    /// Host scaling applied to delays a goal computes.
    fn adjusted_tick_delay(&self, ticks: i32) -> i32 {
        ticks
    }

    /// The running-animation capability, for mobs that have one.
    fn animated(&mut self) -> Option<&mut dyn AnimatedMob> {
        None
    }
}
