//! Core value types shared by the mapper, renderer and state machine.

/// The measurement currently shown by the monitor.
///
/// Exactly one mode is active at a time. Modes cycle in the fixed order
/// `Temperature -> Light -> Humidity -> Temperature`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Raw temperature units from the temperature sensor.
    #[default]
    Temperature,

    /// Raw ambient light units from the light sensor.
    Light,

    /// Raw ADC counts from the humidity channel.
    Humidity,
}

impl Mode {
    /// Number of modes in the cycle.
    pub const COUNT: usize = 3;

    /// All modes in cycle order.
    pub const ALL: [Mode; Mode::COUNT] = [Mode::Temperature, Mode::Light, Mode::Humidity];

    /// Returns the mode that follows this one in the cycle.
    #[inline]
    pub fn next(self) -> Self {
        match self {
            Mode::Temperature => Mode::Light,
            Mode::Light => Mode::Humidity,
            Mode::Humidity => Mode::Temperature,
        }
    }
}

/// Which half of the bicolor bar graph lights up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BarColor {
    /// Out-of-range reading. Fills from bit 0 upward.
    Red,

    /// In-range reading. Fills from bit 15 downward.
    Green,
}

/// A reading summarized for the bar graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BarLevel {
    /// Bar color.
    pub color: BarColor,

    /// Intensity in percent, always within 0-100.
    pub percent: u8,
}

impl BarLevel {
    /// Creates a bar level, clamping `percent` into 0-100.
    #[inline]
    pub fn new(color: BarColor, percent: i64) -> Self {
        Self {
            color,
            percent: percent.clamp(0, 100) as u8,
        }
    }
}

/// Result of feeding one button sample to the mode state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ModeTransition {
    /// The mode active after this sample.
    pub mode: Mode,

    /// True only on the tick the mode advanced. Readings and the bar graph
    /// must be reset when this is set.
    pub changed: bool,
}

/// One reading slot per mode, as held by the main loop.
///
/// Only the active mode's slot is refreshed each tick. All slots go back to
/// zero whenever the mode changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Readings {
    pub temperature: i32,
    pub light: i32,
    pub humidity: i32,
}

impl Readings {
    /// Returns the slot for `mode`.
    pub fn get(&self, mode: Mode) -> i32 {
        match mode {
            Mode::Temperature => self.temperature,
            Mode::Light => self.light,
            Mode::Humidity => self.humidity,
        }
    }

    /// Stores `value` in the slot for `mode`.
    pub fn set(&mut self, mode: Mode, value: i32) {
        match mode {
            Mode::Temperature => self.temperature = value,
            Mode::Light => self.light = value,
            Mode::Humidity => self.humidity = value,
        }
    }

    /// Zeroes every slot.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
