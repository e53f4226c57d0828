//! Main loop pipeline over the monitor's hardware.
//!
//! Provides [`Monitor`], which runs one tick of the board's loop per call to
//! [`Monitor::service`]: sample the button, maybe advance the mode, read the
//! active sensor, update the bar graph and redraw the value fields. Also
//! defines the [`Sensors`] trait for hardware abstraction.

use crate::bargraph::{BarGraph, IlluminationMask, render};
use crate::button::ButtonInput;
use crate::display::{DisplayLayout, TextDisplay, pad_field};
use crate::encoder::{TextBuffer, VALUE_TEXT_CAPACITY};
use crate::level::map_level;
use crate::state::ModeStateMachine;
use crate::time::TickSource;
use crate::types::{BarLevel, Mode, Readings};

/// Delay the caller should leave between two ticks.
pub const DEFAULT_TICK_INTERVAL_MS: u32 = 100;

/// Base used for the value fields.
const DISPLAY_BASE: u32 = 10;

/// Trait for abstracting the three sensors.
///
/// Each read returns one raw sample and may block until the hardware has a
/// conversion ready. No timeout is applied by the monitor.
pub trait Sensors {
    /// Reads the raw temperature.
    ///
    /// `now_millis` is the current tick count, for sensors that time a
    /// pulse train against the millisecond counter.
    fn read_temperature(&mut self, now_millis: u32) -> i32;

    /// Reads the raw ambient light level.
    fn read_light(&mut self) -> i32;

    /// Reads the raw humidity ADC value.
    fn read_humidity(&mut self) -> i32;
}

/// What happened during one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickReport {
    /// Active mode after the button sample.
    pub mode: Mode,

    /// True if the mode advanced on this tick.
    pub changed: bool,

    /// Reading taken for the active mode.
    pub reading: i32,

    /// Bar level mapped from the reading.
    pub level: BarLevel,

    /// Mask pushed to the bar graph.
    pub mask: IlluminationMask,
}

/// Runs the sensor monitor over its hardware.
///
/// Owns the sensors, bar graph, display and button, and borrows the tick
/// source, which is typically a `static` [`TickCounter`](crate::TickCounter)
/// also written by the timer interrupt.
///
/// # Type Parameters
/// * `'t` - Lifetime of the tick source reference
/// * `S` - Sensors implementation type
/// * `G` - Bar graph implementation type
/// * `D` - Text display implementation type
/// * `B` - Button implementation type
/// * `C` - Tick source implementation type
pub struct Monitor<'t, S, G, D, B, C>
where
    S: Sensors,
    G: BarGraph,
    D: TextDisplay,
    B: ButtonInput,
    C: TickSource,
{
    sensors: S,
    bar_graph: G,
    display: D,
    button: B,
    ticks: &'t C,
    layout: DisplayLayout,
    state: ModeStateMachine,
    readings: Readings,
    text: TextBuffer<VALUE_TEXT_CAPACITY>,
    mask: IlluminationMask,
}

impl<'t, S, G, D, B, C> Monitor<'t, S, G, D, B, C>
where
    S: Sensors,
    G: BarGraph,
    D: TextDisplay,
    B: ButtonInput,
    C: TickSource,
{
    /// Creates a monitor with the default screen layout.
    ///
    /// See [`Monitor::with_layout`].
    pub fn new(sensors: S, bar_graph: G, display: D, button: B, ticks: &'t C) -> Self {
        Self::with_layout(sensors, bar_graph, display, button, ticks, DisplayLayout::default())
    }

    /// Creates a monitor and draws the startup screen.
    ///
    /// Clears the display, draws the row labels and turns the bar graph off.
    /// Starts in [`Mode::Temperature`] with every reading at zero.
    pub fn with_layout(
        sensors: S,
        mut bar_graph: G,
        mut display: D,
        button: B,
        ticks: &'t C,
        layout: DisplayLayout,
    ) -> Self {
        display.clear();
        for mode in Mode::ALL {
            display.write_text(layout.label_x, layout.row(mode), DisplayLayout::label(mode));
        }
        bar_graph.set_mask(IlluminationMask::CLEAR);

        Self {
            sensors,
            bar_graph,
            display,
            button,
            ticks,
            layout,
            state: ModeStateMachine::new(),
            readings: Readings::default(),
            text: TextBuffer::new(),
            mask: IlluminationMask::CLEAR,
        }
    }

    /// Runs one tick of the main loop.
    ///
    /// On a mode change all readings reset to zero and the bar graph is
    /// cleared before the new mode's reading is shown on the same tick.
    /// The caller waits [`DEFAULT_TICK_INTERVAL_MS`] (or its own interval)
    /// before the next call.
    pub fn service(&mut self) -> TickReport {
        let pressed = self.button.is_pressed();
        let transition = self.state.tick(pressed);

        if transition.changed {
            self.readings.reset();
            self.set_mask(IlluminationMask::CLEAR);
        }

        let mode = transition.mode;
        let reading = self.read(mode);
        self.readings.set(mode, reading);

        let level = map_level(mode, reading);
        let mask = render(level);
        self.set_mask(mask);

        self.draw_values();

        TickReport {
            mode,
            changed: transition.changed,
            reading,
            level,
            mask,
        }
    }

    /// Takes one reading for `mode`.
    fn read(&mut self, mode: Mode) -> i32 {
        match mode {
            Mode::Temperature => {
                let now = self.ticks.now_millis();
                self.sensors.read_temperature(now)
            }
            Mode::Light => self.sensors.read_light(),
            Mode::Humidity => self.sensors.read_humidity(),
        }
    }

    fn set_mask(&mut self, mask: IlluminationMask) {
        self.bar_graph.set_mask(mask);
        self.mask = mask;
    }

    /// Redraws all three value fields.
    fn draw_values(&mut self) {
        for mode in Mode::ALL {
            // On failure the previous text stays in the buffer and is drawn again.
            if let Err(_err) = self.text.encode(self.readings.get(mode), DISPLAY_BASE) {
                #[cfg(feature = "defmt")]
                defmt::warn!("cannot encode {} reading: {}", mode, _err);
            }

            let field = pad_field(self.text.as_str());
            self.display
                .write_text(self.layout.value_x, self.layout.row(mode), &field);
        }
    }

    /// Returns the active mode.
    pub fn mode(&self) -> Mode {
        self.state.mode()
    }

    /// Returns the reading slots as of the last tick.
    pub fn readings(&self) -> Readings {
        self.readings
    }

    /// Returns the mask last pushed to the bar graph.
    pub fn mask(&self) -> IlluminationMask {
        self.mask
    }

    /// Returns the screen layout.
    pub fn layout(&self) -> &DisplayLayout {
        &self.layout
    }

    /// Returns the sensors.
    pub fn sensors_mut(&mut self) -> &mut S {
        &mut self.sensors
    }

    /// Returns the bar graph.
    pub fn bar_graph(&self) -> &G {
        &self.bar_graph
    }

    /// Returns the display.
    pub fn display(&self) -> &D {
        &self.display
    }

    /// Returns the button.
    pub fn button_mut(&mut self) -> &mut B {
        &mut self.button
    }

    /// Consumes the monitor and hands back the owned hardware.
    pub fn release(self) -> (S, G, D, B) {
        (self.sensors, self.bar_graph, self.display, self.button)
    }
}
