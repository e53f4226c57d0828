//! Reading to bar level mapping.
//!
//! Each mode has its own piecewise rule. The thresholds are tuning constants
//! for the board's sensors and are intentionally not symmetric across modes.
//! Every branch is clamped to 0-100 after evaluation, which matters for the
//! temperature-high and humidity-high branches on extreme inputs.

use crate::types::{BarColor, BarLevel, Mode};

/// Below this raw temperature the bar turns red and grows as it gets colder.
pub const TEMPERATURE_LOW: i32 = 150;

/// Above this raw temperature the bar turns red.
pub const TEMPERATURE_HIGH: i32 = 285;

/// Offset for the temperature-high branch: `percent = 385 - reading`.
pub const TEMPERATURE_HIGH_OFFSET: i32 = 385;

/// Raw light units per percent.
pub const LIGHT_UNITS_PER_PERCENT: i32 = 40;

/// Below this raw humidity the bar turns red and grows as it gets drier.
pub const HUMIDITY_LOW: i32 = 2000;

/// Above this raw humidity the bar turns red.
pub const HUMIDITY_HIGH: i32 = 3000;

/// Ceiling for the humidity-high branch: `percent = 100 - max(4000 - reading, 0) / 10`.
pub const HUMIDITY_CEILING: i32 = 4000;

/// Maps a raw reading for `mode` to a bar color and intensity.
///
/// Pure and total: defined for every `i32`, the percent is always within 0-100.
///
/// | Mode        | Condition      | Color | Percent                                 |
/// |-------------|----------------|-------|-----------------------------------------|
/// | Temperature | `< 150`        | Red   | `100 - round(100 * r / 150)`            |
/// | Temperature | `> 285`        | Red   | `385 - r`                               |
/// | Temperature | otherwise      | Green | `100`                                   |
/// | Light       | always         | Green | `r / 40`                                |
/// | Humidity    | `< 2000`       | Red   | `100 - round(100 * r / 2000)`           |
/// | Humidity    | `> 3000`       | Red   | `100 - max(4000 - r, 0) / 10`           |
/// | Humidity    | otherwise      | Green | `100`                                   |
pub fn map_level(mode: Mode, reading: i32) -> BarLevel {
    let r = i64::from(reading);

    match mode {
        Mode::Temperature => {
            if reading < TEMPERATURE_LOW {
                BarLevel::new(
                    BarColor::Red,
                    100 - div_round(100 * r, i64::from(TEMPERATURE_LOW)),
                )
            } else if reading > TEMPERATURE_HIGH {
                BarLevel::new(BarColor::Red, i64::from(TEMPERATURE_HIGH_OFFSET) - r)
            } else {
                BarLevel::new(BarColor::Green, 100)
            }
        }
        Mode::Light => BarLevel::new(BarColor::Green, r / i64::from(LIGHT_UNITS_PER_PERCENT)),
        Mode::Humidity => {
            if reading < HUMIDITY_LOW {
                BarLevel::new(
                    BarColor::Red,
                    100 - div_round(100 * r, i64::from(HUMIDITY_LOW)),
                )
            } else if reading > HUMIDITY_HIGH {
                let headroom = (i64::from(HUMIDITY_CEILING) - r).max(0);
                BarLevel::new(BarColor::Red, 100 - headroom / 10)
            } else {
                BarLevel::new(BarColor::Green, 100)
            }
        }
    }
}

/// Integer division rounding half away from zero. `d` must be positive.
#[inline]
fn div_round(n: i64, d: i64) -> i64 {
    if n >= 0 {
        (n + d / 2) / d
    } else {
        -((-n + d / 2) / d)
    }
}
