//! Millisecond tick abstraction.

use core::sync::atomic::{AtomicU32, Ordering};

/// Trait for abstracting the millisecond tick counter.
///
/// The core never interprets the value beyond passing it to the temperature
/// sensor, so any monotonically increasing (wrapping) counter will do.
pub trait TickSource {
    /// Returns the current tick count in milliseconds.
    fn now_millis(&self) -> u32;
}

/// Millisecond counter shared between a timer interrupt and the main loop.
///
/// The interrupt is the only writer and calls [`TickCounter::tick`]; the loop
/// only reads. A single atomic word is enough, no critical section is needed.
/// Wraps after ~49.7 days of continuous operation.
///
/// Can be placed in a `static`:
///
/// ```
/// use bargraph_monitor::{TickCounter, TickSource};
///
/// static TICKS: TickCounter = TickCounter::new();
///
/// TICKS.tick();
/// assert_eq!(TICKS.now_millis(), 1);
/// ```
#[derive(Debug, Default)]
pub struct TickCounter {
    millis: AtomicU32,
}

impl TickCounter {
    /// Creates a counter starting at zero.
    pub const fn new() -> Self {
        Self {
            millis: AtomicU32::new(0),
        }
    }

    /// Advances the counter by one millisecond.
    ///
    /// Call this from the 1 ms timer interrupt.
    #[inline]
    pub fn tick(&self) {
        // Load + store instead of fetch_add: single writer, and thumbv6m has no RMW atomics.
        let current = self.millis.load(Ordering::Relaxed);
        self.millis.store(current.wrapping_add(1), Ordering::Relaxed);
    }
}

impl TickSource for TickCounter {
    #[inline]
    fn now_millis(&self) -> u32 {
        self.millis.load(Ordering::Relaxed)
    }
}
