//! Control channels a goal locks while it is active.

use bitflags::bitflags;

bitflags! {
    /// Control channels of a mob that at most one goal may drive at a time.
    ///
    /// A goal declares the channels it needs through [`Goal::flags`]. The
    /// selector keeps one owner per channel, so two goals that both declare
    /// `MOVE` can never be active together.
    ///
    /// [`Goal::flags`]: crate::Goal::flags
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct GoalFlags: u8 {
        const MOVE   = 1 << 0;
        const LOOK   = 1 << 1;
        const JUMP   = 1 << 2;
        const TARGET = 1 << 3;
    }
}

impl GoalFlags {
    /// Number of distinct single-bit flags.
    pub const COUNT: usize = 4;

    /// Slot of a single-bit flag in a per-flag table.
    ///
    /// Only meaningful for values yielded by [`GoalFlags::iter`].
    #[inline]
    pub(crate) fn slot(self) -> usize {
        self.bits().trailing_zeros() as usize
    }
}
