//! Priority goal scheduling for tick-driven mob AI.
//!
//! A mob owns a list of goals. Each simulation tick the host asks a
//! [`GoalSelector`] to re-evaluate them: active goals that can no longer
//! continue are stopped, idle goals that can start claim their control
//! flags, and every active goal is ticked.
//!
//! - **Host-driven**: goals never schedule themselves; the selector (or any
//!   other host adapter) calls the hooks of the [`Goal`] trait
//! - **Flag locks**: goals claiming the same [`GoalFlags`] bit are mutually
//!   exclusive, lower priority numbers win
//! - **Generic context**: goals are evaluated against the mob type `C`
//!
//! # Architecture
//!
//! - [`Goal`]: Core trait with the lifecycle hooks
//! - [`GoalState`]: Idle or Active
//! - [`GoalFlags`]: Control channels a goal locks while active
//! - [`GoalSelector`]: Priority scheduler with flag arbitration

pub mod config;
pub mod flags;
pub mod goal;
pub mod selector;
pub mod state;

// Re-export core types for ergonomic API
pub use config::SelectorConfig;
pub use flags::GoalFlags;
pub use goal::{Goal, reduced_tick_delay};
pub use selector::GoalSelector;
pub use state::GoalState;
