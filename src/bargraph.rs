//! Bicolor LED bar graph rendering.
//!
//! The bar graph has 16 segments addressed by one bit each. Red segments
//! fill from bit 0 upward, green segments fill from bit 15 downward. A level
//! is shown with at most [`MAX_SEGMENTS`] segments of a single color.

use crate::types::{BarColor, BarLevel};

/// Percent covered by one lit segment.
pub const PERCENT_PER_SEGMENT: u8 = 12;

/// Most segments a single level can light (`100 / 12`).
pub const MAX_SEGMENTS: u8 = 100 / PERCENT_PER_SEGMENT;

/// Trait for abstracting the LED bar graph hardware.
///
/// Implement this for your LED driver (I2C expander, shift register, GPIO).
pub trait BarGraph {
    /// Lights exactly the segments set in `mask` and turns the rest off.
    ///
    /// Fire-and-forget: handle any hardware errors internally.
    fn set_mask(&mut self, mask: IlluminationMask);
}

/// One bit per bar graph segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct IlluminationMask(pub u16);

impl IlluminationMask {
    /// All segments off.
    pub const CLEAR: Self = IlluminationMask(0);

    /// Returns the raw bits.
    #[inline]
    pub fn bits(self) -> u16 {
        self.0
    }

    /// Returns true if no segment is lit.
    #[inline]
    pub fn is_clear(self) -> bool {
        self.0 == 0
    }

    /// Number of lit segments.
    #[inline]
    pub fn lit_segments(self) -> u32 {
        self.0.count_ones()
    }
}

impl From<IlluminationMask> for u16 {
    fn from(mask: IlluminationMask) -> Self {
        mask.0
    }
}

/// Number of segments lit for `percent` (`floor(percent / 12)`, 0-8).
#[inline]
pub fn segments_for(percent: u8) -> u8 {
    percent.min(100) / PERCENT_PER_SEGMENT
}

/// Renders a bar level to an illumination mask.
///
/// Zero segments produce [`IlluminationMask::CLEAR`].
pub fn render(level: BarLevel) -> IlluminationMask {
    let segments = u32::from(segments_for(level.percent));
    if segments == 0 {
        return IlluminationMask::CLEAR;
    }

    let run = (1u16 << segments) - 1;
    let bits = match level.color {
        BarColor::Red => run,
        BarColor::Green => run << (16 - segments),
    };

    IlluminationMask(bits)
}
