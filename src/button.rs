//! Button edge detection.

/// Trait for abstracting the mode button.
pub trait ButtonInput {
    /// Returns true while the button is physically pressed.
    ///
    /// The signal must already be electrically clean. Any time-based
    /// debounce belongs in the implementation of this trait.
    fn is_pressed(&mut self) -> bool;
}

/// Level latch that reports one press per press-hold interval.
///
/// Holding the button for any number of samples produces a single press;
/// the button must be released before the next press can fire. This is
/// an edge detector, not a time-based debounce filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PressLatch {
    latched: bool,
}

impl PressLatch {
    /// Creates an idle latch.
    pub const fn new() -> Self {
        Self { latched: false }
    }

    /// Feeds one sample. Returns true only on the idle to pressed edge.
    pub fn update(&mut self, pressed: bool) -> bool {
        if pressed && !self.latched {
            self.latched = true;
            return true;
        } else if !pressed {
            self.latched = false;
        }
        false
    }

    /// Returns true while a press is latched.
    pub fn is_latched(&self) -> bool {
        self.latched
    }
}
