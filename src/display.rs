//! Text display layout.
//!
//! The screen shows one row per mode: a fixed label on the left and the
//! latest reading on the right. Values are padded to a fixed field width so
//! a shorter number fully overwrites a longer one drawn on a previous tick.

use crate::types::Mode;
use heapless::String;

/// Characters in a value field. Fits any `i32` in base 10.
pub const FIELD_WIDTH: usize = 11;

/// Trait for abstracting the text display.
pub trait TextDisplay {
    /// Clears the whole screen to the background color.
    fn clear(&mut self);

    /// Draws `text` with its top-left corner at (`x`, `y`) pixels.
    ///
    /// Handle any hardware errors internally - this method cannot fail.
    fn write_text(&mut self, x: u8, y: u8, text: &str);
}

/// Where labels and values are drawn, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayLayout {
    /// Column of the row labels.
    pub label_x: u8,

    /// Column of the value fields.
    pub value_x: u8,

    /// Row for temperature, light and humidity, in that order.
    pub rows: [u8; Mode::COUNT],
}

impl DisplayLayout {
    /// Row labels, indexed like `rows`.
    pub const LABELS: [&'static str; Mode::COUNT] = ["Temp   : ", "Light  : ", "Umidade: "];

    /// Row of the given mode.
    pub fn row(&self, mode: Mode) -> u8 {
        self.rows[Self::index(mode)]
    }

    /// Label of the given mode.
    pub fn label(mode: Mode) -> &'static str {
        Self::LABELS[Self::index(mode)]
    }

    fn index(mode: Mode) -> usize {
        match mode {
            Mode::Temperature => 0,
            Mode::Light => 1,
            Mode::Humidity => 2,
        }
    }
}

impl Default for DisplayLayout {
    /// 6 px wide font, 8 px rows, values after a 9 character label.
    fn default() -> Self {
        Self {
            label_x: 1,
            value_x: 1 + 9 * 6,
            rows: [1, 9, 17],
        }
    }
}

/// Pads `text` with trailing spaces to [`FIELD_WIDTH`] characters.
///
/// Longer text is truncated.
pub fn pad_field(text: &str) -> String<FIELD_WIDTH> {
    let mut field = String::new();
    for ch in text.chars().take(FIELD_WIDTH) {
        if field.push(ch).is_err() {
            break;
        }
    }
    while field.len() < FIELD_WIDTH {
        let _ = field.push(' ');
    }
    field
}
