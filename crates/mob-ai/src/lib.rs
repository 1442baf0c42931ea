//! Goals for pathfinding mobs, written against an abstract host engine.
//!
//! The host engine owns navigation, sensing, look control and animation;
//! goals here only decide *when* to use them. Every goal implements
//! [`goal_selector::Goal`] over a [`Mob`], so a host wires a mob in by
//! implementing the [`host`] traits and registering goals with a
//! [`GoalSelector`](goal_selector::GoalSelector).
//!
//! # Modules
//!
//! - [`chase`]: [`RunToTargetGoal`], run at a far-away target, give up up close
//! - [`host`]: [`Mob`], [`Navigation`] and the value types they exchange
//! - [`rng`]: [`MobRandom`] and the deterministic [`PcgRandom`]
//! - [`config`]: [`ChaseConfig`] and its tuning constants

pub mod chase;
pub mod config;
pub mod error;
pub mod host;
pub mod rng;
pub mod types;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;

pub use chase::RunToTargetGoal;
pub use config::ChaseConfig;
pub use error::{ConfigError, Result};
pub use host::{AnimatedMob, GameMode, Mob, Navigation, Path, TargetInfo, TargetKind};
pub use rng::{MobRandom, PcgRandom, seed_for};
pub use types::{BlockPos, EntityId, Tick, Vec3};
