//! Logical input signals.
//!
//! The host owns device binding and flips these latches from its event loop;
//! the core samples them once per tick. The jump latch is special: the
//! controller clears it whenever a jump transition fires, so a held key
//! cannot retrigger every frame.

/// Pressed/released state of the logical movement controls.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputState {
    pub forward: bool,
    pub back: bool,
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    pub sprint: bool,
}

impl InputState {
    /// Release every latch, e.g. on window focus loss.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
