//! Core goal trait.
//!
//! This module defines the [`Goal`] trait, the hook set a host scheduler
//! drives for one behavior of one mob. The trait is generic over a context
//! type `C`, normally the mob itself, so goals can read world state through
//! it and issue commands back.

use crate::GoalFlags;

/// A behavior a mob may pursue, driven by an external scheduler.
///
/// The scheduler owns the lifecycle: it polls [`can_start`](Goal::can_start)
/// while the goal is idle, calls [`start`](Goal::start) on selection, polls
/// [`can_continue`](Goal::can_continue) and calls [`tick`](Goal::tick) while
/// the goal is active, and calls [`stop`](Goal::stop) on deselection.
pub trait Goal<C>: Send + Sync {
    /// Label used in scheduler logs.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Whether the goal wants to become active now.
    fn can_start(&mut self, ctx: &mut C) -> bool;

    /// Whether an active goal wants to stay active.
    fn can_continue(&mut self, ctx: &mut C) -> bool {
        self.can_start(ctx)
    }

    /// Whether a higher-priority goal may take over this goal's flags.
    fn is_interruptible(&self) -> bool {
        true
    }

    /// Called once when the goal becomes active.
    fn start(&mut self, _ctx: &mut C) {}

    /// Called once when the goal stops being active.
    fn stop(&mut self, _ctx: &mut C) {}

    /// Whether [`tick`](Goal::tick) must run on every simulation tick rather
    /// than only on evaluation ticks.
    fn requires_update_every_tick(&self) -> bool {
        false
    }

    /// Called on ticks while the goal is active.
    fn tick(&mut self, _ctx: &mut C) {}

    /// Control channels this goal locks while active.
    fn flags(&self) -> GoalFlags {
        GoalFlags::empty()
    }
}

/// Blanket implementation for boxed goals.
///
/// This allows `Box<dyn Goal<C>>` to also implement `Goal<C>`, so wrappers
/// and heterogeneous goal lists can be built over trait objects.
impl<C> Goal<C> for Box<dyn Goal<C>> {
    #[inline]
    fn name(&self) -> &'static str {
        (**self).name()
    }

    #[inline]
    fn can_start(&mut self, ctx: &mut C) -> bool {
        (**self).can_start(ctx)
    }

    #[inline]
    fn can_continue(&mut self, ctx: &mut C) -> bool {
        (**self).can_continue(ctx)
    }

    #[inline]
    fn is_interruptible(&self) -> bool {
        (**self).is_interruptible()
    }

    #[inline]
    fn start(&mut self, ctx: &mut C) {
        (**self).start(ctx)
    }

    #[inline]
    fn stop(&mut self, ctx: &mut C) {
        (**self).stop(ctx)
    }

    #[inline]
    fn requires_update_every_tick(&self) -> bool {
        (**self).requires_update_every_tick()
    }

    #[inline]
    fn tick(&mut self, ctx: &mut C) {
        (**self).tick(ctx)
    }

    #[inline]
    fn flags(&self) -> GoalFlags {
        (**self).flags()
    }
}

/// Scales a delay for goals that are only ticked on evaluation ticks.
///
/// Such goals see every other tick, so a delay of `ticks` is halved and
/// rounded up. Goals that require every-tick updates use delays unchanged.
#[inline]
pub fn reduced_tick_delay(ticks: i32) -> i32 {
    ticks.div_euclid(2) + ticks.rem_euclid(2)
}
