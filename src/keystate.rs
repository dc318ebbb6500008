//! Tracked key state.
//!
//! The tracker owns a small fixed table of the keys currently making (or
//! breaking) contact.  Each tracked key carries a shift register of its most
//! recent raw readings: a key counts as pressed only once the register
//! saturates to all ones, and releases only once it drains to all zeros, so
//! a transition needs an unbroken run of consistent readings in either
//! direction.  A single flicker mid-run restarts nothing but also changes
//! nothing; the settled state holds until the other rail is reached.
//!
//! The table bounds how many physical keys can be in flight at once, not
//! how many logical keys exist.  When it is full, new presses are dropped
//! until a slot frees, which keeps a bounce storm from claiming memory.

use arrayvec::ArrayVec;

use crate::layout::{
    self, KEYPAD_LAYER_SIZE, KEYPAD_LAYER_START, MATRIX_COLS, MATRIX_ROWS,
};
use crate::log::info;
use crate::{Buzzer, ConfigFlags, KeyConfig, LogicalKey, MatrixDriver, NO_KEY};

/// Simultaneously tracked physical keys.
pub const KEYSTATE_COUNT: usize = 14;

/// Debounce shift-register width, as a mask.  A key settles after four
/// consecutive consistent readings.
pub const DEBOUNCE_MASK: u8 = 0x0f;

/// Logical codes settled right now, bounded by the table size.
pub type KeyVec = ArrayVec<LogicalKey, KEYSTATE_COUNT>;

#[derive(Clone, Copy)]
struct KeyEntry {
    code: LogicalKey,
    debounce: u8,
    pressed: bool,
}

impl KeyEntry {
    const FREE: KeyEntry = KeyEntry {
        code: NO_KEY,
        debounce: 0,
        pressed: false,
    };
}

/// The scan/debounce engine and its key table.
pub struct KeyTracker {
    keys: [KeyEntry; KEYSTATE_COUNT],
    pressed_count: u8,
    keypad_mode: bool,
}

impl KeyTracker {
    pub fn new() -> Self {
        KeyTracker {
            keys: [KeyEntry::FREE; KEYSTATE_COUNT],
            pressed_count: 0,
            keypad_mode: false,
        }
    }

    /// Walk the whole matrix once, feeding one raw reading per populated
    /// cell into the key table.  Runs on every tick; all transitions in and
    /// out of the pressed state happen here.
    pub fn scan(
        &mut self,
        matrix: &mut dyn MatrixDriver,
        config: &dyn KeyConfig,
        buzzer: &mut dyn Buzzer,
    ) {
        for row in 0..MATRIX_ROWS {
            matrix.select_row(row);
            for col in 0..MATRIX_COLS {
                let mut code = layout::MATRIX_TO_LOGICAL[row][col];
                if code == NO_KEY {
                    continue;
                }
                if self.keypad_mode && code >= KEYPAD_LAYER_START {
                    code += KEYPAD_LAYER_SIZE;
                }
                let reading = matrix.read_column(col);
                self.track(code, reading, config, buzzer);
            }
        }
    }

    /// Feed one raw reading for `code` into the table.
    fn track(
        &mut self,
        code: LogicalKey,
        reading: bool,
        config: &dyn KeyConfig,
        buzzer: &mut dyn Buzzer,
    ) {
        let mut free_slot = None;
        for i in 0..KEYSTATE_COUNT {
            let key = &mut self.keys[i];
            if key.code == NO_KEY {
                if free_slot.is_none() {
                    free_slot = Some(i);
                }
            } else if key.code == code {
                key.debounce = DEBOUNCE_MASK & ((key.debounce << 1) | reading as u8);
                if key.debounce == 0 {
                    // Debounced up, or a press that never made it.
                    if key.pressed {
                        self.pressed_count -= 1;
                    }
                    *key = KeyEntry::FREE;
                } else if !key.pressed && key.debounce == DEBOUNCE_MASK {
                    key.pressed = true;
                    self.pressed_count += 1;
                    if config.flags().contains(ConfigFlags::KEY_SOUND) {
                        buzzer.buzz(1);
                    }
                }
                return;
            }
        }
        // Previously untracked.  Start tracking a closed contact if a slot
        // is free; with the table full the press is dropped until one opens.
        if reading {
            if let Some(i) = free_slot {
                self.keys[i] = KeyEntry {
                    code,
                    debounce: 0x1,
                    pressed: false,
                };
            }
        }
    }

    /// Flip keypad mode and drop tracked keys the new mode can no longer
    /// produce, so they cannot linger in reports.  Keys below the layered
    /// block are valid either way and stay put.
    pub fn toggle_keypad(&mut self) {
        self.keypad_mode = !self.keypad_mode;
        info!("keypad mode: {}", self.keypad_mode);
        for key in self.keys.iter_mut() {
            let code = key.code;
            if code == NO_KEY || code < KEYPAD_LAYER_START {
                continue;
            }
            let in_keypad_range = code >= KEYPAD_LAYER_START + KEYPAD_LAYER_SIZE;
            if in_keypad_range == self.keypad_mode {
                continue;
            }
            if key.pressed {
                self.pressed_count -= 1;
            }
            *key = KeyEntry::FREE;
        }
    }

    pub fn keypad_mode(&self) -> bool {
        self.keypad_mode
    }

    /// Number of keys currently settled as pressed.
    pub fn pressed_count(&self) -> usize {
        self.pressed_count as usize
    }

    /// Is this key settled as pressed?
    pub fn is_down(&self, key: LogicalKey) -> bool {
        self.keys.iter().any(|k| k.code == key && k.pressed)
    }

    /// Are all of these keys settled as pressed?
    pub fn all_down(&self, wanted: &[LogicalKey]) -> bool {
        // Asking for more keys than are down can't succeed.
        if wanted.len() > self.pressed_count as usize {
            return false;
        }
        wanted.iter().all(|&key| self.is_down(key))
    }

    /// Collect the settled keys, in table slot order.  Slot order follows
    /// allocation, which is not press order once slots get reused.
    pub fn pressed_keys(&self, out: &mut KeyVec) {
        out.clear();
        out.extend(self.settled());
    }

    pub(crate) fn settled(&self) -> impl Iterator<Item = LogicalKey> + '_ {
        self.keys.iter().filter(|k| k.pressed).map(|k| k.code)
    }
}

impl Default for KeyTracker {
    fn default() -> Self {
        Self::new()
    }
}
