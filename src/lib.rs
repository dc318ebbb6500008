//! Contour keyboard input core
//!
//! Scans the key matrix, debounces the raw readings into settled key state,
//! and projects that state into USB-style keyboard and mouse reports.  The
//! hardware around it (matrix GPIO, config storage, the USB stack, the
//! buzzer) is reached through the traits defined here.

#![cfg_attr(not(any(feature = "std", test)), no_std)]

use bitflags::bitflags;

pub use keystate::{KeyTracker, KeyVec, DEBOUNCE_MASK, KEYSTATE_COUNT};
pub use report::{KeyboardReport, Modifiers, MouseFilter, MouseReport};

pub mod config;
pub mod hidcode;
pub mod keystate;
pub mod layout;
pub mod report;

#[cfg(test)]
mod sim;
#[cfg(test)]
mod testlog;

cfg_if::cfg_if! {
    if #[cfg(feature = "defmt")] {
        mod log {
            pub use defmt::info;
        }
    } else {
        mod log {
            pub use log::info;
        }
    }
}

/// Identifies a physical key position, independent of the output code
/// currently assigned to it.  When the keypad layer is active, positions in
/// the layered block shift up by [`layout::KEYPAD_LAYER_SIZE`].
pub type LogicalKey = u8;

/// Sentinel for an unpopulated matrix cell or a free tracking slot.
pub const NO_KEY: LogicalKey = 0xff;

/// Row/column access to the matrix hardware.
///
/// A row stays selected across the `read_column` calls that follow, matching
/// the usual select-then-sample GPIO arrangement.
pub trait MatrixDriver {
    fn select_row(&mut self, row: usize);

    /// Raw electrical level of a column in the selected row; true means the
    /// contact reads closed.  No debouncing is expected here.
    fn read_column(&mut self, col: usize) -> bool;
}

/// The key-definition store consulted while rendering and scanning.
pub trait KeyConfig {
    /// Output code assigned to a logical key.  Every code the board's layout
    /// table can produce must have a definition; lookups outside that range
    /// are a contract violation by the caller.
    fn definition(&self, key: LogicalKey) -> u8;

    /// Snapshot of the runtime feature flags.
    fn flags(&self) -> ConfigFlags;
}

bitflags! {
    /// Runtime feature flags, packed the way they are stored.
    #[derive(Clone, Copy, PartialEq, Eq, Debug)]
    pub struct ConfigFlags: u8 {
        /// Click the buzzer when a key settles into the pressed state.
        const KEY_SOUND = 0x01;
    }
}

/// Fire-and-forget audio feedback.
pub trait Buzzer {
    fn buzz(&mut self, duration_ms: u16);
}

/// Buzzer for boards without a speaker, and for tests.
pub struct SilentBuzzer;

impl Buzzer for SilentBuzzer {
    fn buzz(&mut self, _duration_ms: u16) {}
}
