//! Mode state machine driven by the button.

use crate::button::PressLatch;
use crate::types::{Mode, ModeTransition};

/// Owns the active mode and advances it on each button press.
///
/// Starts in [`Mode::Temperature`]. Nothing is persisted, so every power-up
/// begins there again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ModeStateMachine {
    mode: Mode,
    latch: PressLatch,
}

impl ModeStateMachine {
    /// Creates a state machine in the initial mode with the button idle.
    pub const fn new() -> Self {
        Self {
            mode: Mode::Temperature,
            latch: PressLatch::new(),
        }
    }

    /// Feeds one raw button sample.
    ///
    /// On the rising edge the mode advances and `changed` is set. A button
    /// held across ticks advances once; release is required before it can
    /// advance again.
    pub fn tick(&mut self, button_pressed: bool) -> ModeTransition {
        let changed = self.latch.update(button_pressed);
        if changed {
            self.mode = self.mode.next();

            #[cfg(feature = "defmt")]
            defmt::debug!("mode changed to {}", self.mode);
        }

        ModeTransition {
            mode: self.mode,
            changed,
        }
    }

    /// Returns the active mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }
}
