//! Shared test infrastructure for bargraph-monitor integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use bargraph_monitor::{BarGraph, ButtonInput, IlluminationMask, Sensors, TextDisplay, TickSource};
use core::cell::Cell;

// ============================================================================
// Mock Sensors
// ============================================================================

/// Mock sensors returning whatever values the test sets
#[derive(Debug, Default)]
pub struct MockSensors {
    pub temperature: i32,
    pub light: i32,
    pub humidity: i32,
    pub temperature_reads: u32,
    pub light_reads: u32,
    pub humidity_reads: u32,
    pub last_tick: Option<u32>,
}

impl MockSensors {
    pub fn new(temperature: i32, light: i32, humidity: i32) -> Self {
        Self {
            temperature,
            light,
            humidity,
            ..Self::default()
        }
    }
}

impl Sensors for MockSensors {
    fn read_temperature(&mut self, now_millis: u32) -> i32 {
        self.temperature_reads += 1;
        self.last_tick = Some(now_millis);
        self.temperature
    }

    fn read_light(&mut self) -> i32 {
        self.light_reads += 1;
        self.light
    }

    fn read_humidity(&mut self) -> i32 {
        self.humidity_reads += 1;
        self.humidity
    }
}

// ============================================================================
// Mock Bar Graph
// ============================================================================

/// Mock bar graph that records every mask pushed to it
pub struct MockBarGraph {
    current: IlluminationMask,
    history: heapless::Vec<IlluminationMask, 64>,
}

impl MockBarGraph {
    pub fn new() -> Self {
        Self {
            current: IlluminationMask::CLEAR,
            history: heapless::Vec::new(),
        }
    }

    pub fn current(&self) -> IlluminationMask {
        self.current
    }

    pub fn history(&self) -> &[IlluminationMask] {
        &self.history
    }
}

impl BarGraph for MockBarGraph {
    fn set_mask(&mut self, mask: IlluminationMask) {
        self.current = mask;
        let _ = self.history.push(mask);
    }
}

// ============================================================================
// Mock Display
// ============================================================================

/// One `write_text` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextWrite {
    pub x: u8,
    pub y: u8,
    pub text: heapless::String<16>,
}

/// Mock display that records clears and text writes
pub struct MockDisplay {
    pub clears: u32,
    writes: heapless::Vec<TextWrite, 128>,
}

impl MockDisplay {
    pub fn new() -> Self {
        Self {
            clears: 0,
            writes: heapless::Vec::new(),
        }
    }

    pub fn writes(&self) -> &[TextWrite] {
        &self.writes
    }

    /// Most recent text drawn at (`x`, `y`), trailing padding removed
    pub fn text_at(&self, x: u8, y: u8) -> Option<&str> {
        self.writes
            .iter()
            .rev()
            .find(|w| w.x == x && w.y == y)
            .map(|w| w.text.as_str().trim_end())
    }
}

impl TextDisplay for MockDisplay {
    fn clear(&mut self) {
        self.clears += 1;
    }

    fn write_text(&mut self, x: u8, y: u8, text: &str) {
        let mut stored = heapless::String::new();
        let _ = stored.push_str(text);
        let _ = self.writes.push(TextWrite { x, y, text: stored });
    }
}

// ============================================================================
// Mock Button
// ============================================================================

/// Mock button with a level the test flips
#[derive(Debug, Default)]
pub struct MockButton {
    pub pressed: bool,
}

impl ButtonInput for MockButton {
    fn is_pressed(&mut self) -> bool {
        self.pressed
    }
}

// ============================================================================
// Mock Tick Source
// ============================================================================

/// Mock tick source with controllable time advancement
pub struct MockTicks {
    now: Cell<u32>,
}

impl MockTicks {
    pub fn new() -> Self {
        Self { now: Cell::new(0) }
    }

    pub fn advance(&self, millis: u32) {
        self.now.set(self.now.get().wrapping_add(millis));
    }
}

impl TickSource for MockTicks {
    fn now_millis(&self) -> u32 {
        self.now.get()
    }
}
