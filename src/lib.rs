#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`Mode`**: The active measurement (`Temperature`, `Light` or `Humidity`)
//! - **`ModeStateMachine`**: Advances the mode once per button press
//! - **`PressLatch`**: Level latch that turns a held button into a single rising edge
//! - **`map_level`**: Maps a raw reading to a `BarLevel` (color + percent)
//! - **`render`**: Turns a `BarLevel` into an `IlluminationMask` for the LED bar
//! - **`encode`**: Writes a signed integer as text in any base from 2 to 36
//! - **`Monitor`**: Runs one tick of the main loop over your hardware
//! - **`Sensors`**, **`BarGraph`**, **`TextDisplay`**, **`ButtonInput`**, **`TickSource`**:
//!   Traits to implement for your hardware
//!
//! All pure functions are total over their inputs. The only fallible operation is
//! text encoding, which reports failure through `EncodeError` and never touches
//! the output buffer when it fails.

pub mod bargraph;
pub mod button;
pub mod display;
pub mod encoder;
pub mod level;
pub mod monitor;
pub mod state;
pub mod time;
pub mod types;

pub use bargraph::{BarGraph, IlluminationMask, MAX_SEGMENTS, PERCENT_PER_SEGMENT, render};
pub use button::{ButtonInput, PressLatch};
pub use display::{DisplayLayout, FIELD_WIDTH, TextDisplay};
pub use encoder::{EncodeError, TextBuffer, VALUE_TEXT_CAPACITY, encode};
pub use level::map_level;
pub use monitor::{DEFAULT_TICK_INTERVAL_MS, Monitor, Sensors, TickReport};
pub use state::ModeStateMachine;
pub use time::{TickCounter, TickSource};
pub use types::{BarColor, BarLevel, Mode, ModeTransition, Readings};
