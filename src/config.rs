//! Key definitions.
//!
//! The store maps every logical key to its current output code.  It is
//! seeded from the board's default layout and can be remapped at runtime;
//! loading and saving mappings from persistent storage is the owner's
//! problem, not handled here.

use usbd_human_interface_device::page::Keyboard;

use crate::hidcode;
use crate::layout::NUM_LOGICAL_KEYS;
use crate::log::info;
use crate::{ConfigFlags, KeyConfig, LogicalKey};

/// Encode a plain keycode definition.
const fn k(code: Keyboard) -> u8 {
    code as u8
}

/// Default logical to output mapping, indexed by logical code.  The second
/// half of the table is what the layered block produces in keypad mode.
static DEFAULT_DEFINITIONS: [u8; NUM_LOGICAL_KEYS] = [
    // Left thumb row.
    hidcode::PROGRAM,
    hidcode::KEYPAD_TOGGLE,
    k(Keyboard::LeftShift),
    k(Keyboard::LeftControl),
    k(Keyboard::LeftAlt),
    k(Keyboard::Space),
    k(Keyboard::ReturnEnter),
    k(Keyboard::DeleteBackspace),
    // Right thumb row.
    hidcode::MOUSE_BTN1,
    hidcode::MOUSE_BTN2,
    hidcode::MOUSE_BTN3,
    hidcode::MOUSE_FWD,
    hidcode::MOUSE_BACK,
    hidcode::MOUSE_LEFT,
    hidcode::MOUSE_RIGHT,
    k(Keyboard::RightShift),
    // Number row.
    k(Keyboard::Keyboard1),
    k(Keyboard::Keyboard2),
    k(Keyboard::Keyboard3),
    k(Keyboard::Keyboard4),
    k(Keyboard::Keyboard5),
    k(Keyboard::Keyboard6),
    k(Keyboard::Keyboard7),
    k(Keyboard::Keyboard8),
    // Letter rows.
    k(Keyboard::Q),
    k(Keyboard::W),
    k(Keyboard::E),
    k(Keyboard::R),
    k(Keyboard::T),
    k(Keyboard::Y),
    k(Keyboard::U),
    k(Keyboard::I),
    k(Keyboard::A),
    k(Keyboard::S),
    k(Keyboard::D),
    k(Keyboard::F),
    k(Keyboard::G),
    k(Keyboard::H),
    k(Keyboard::J),
    k(Keyboard::K),
    k(Keyboard::Z),
    k(Keyboard::X),
    k(Keyboard::C),
    k(Keyboard::V),
    k(Keyboard::B),
    k(Keyboard::N),
    k(Keyboard::M),
    k(Keyboard::Comma),
    // Symbol row.
    k(Keyboard::Escape),
    k(Keyboard::Minus),
    k(Keyboard::Equal),
    k(Keyboard::LeftBrace),
    k(Keyboard::RightBrace),
    k(Keyboard::Semicolon),
    k(Keyboard::Apostrophe),
    k(Keyboard::ForwardSlash),
    // Keypad layer over the number row: function keys.
    k(Keyboard::F1),
    k(Keyboard::F2),
    k(Keyboard::F3),
    k(Keyboard::F4),
    k(Keyboard::F5),
    k(Keyboard::F6),
    k(Keyboard::F7),
    k(Keyboard::F8),
    // Keypad layer, top letter row: nav block and numpad top.
    k(Keyboard::Insert),
    k(Keyboard::Home),
    k(Keyboard::PageUp),
    k(Keyboard::KeypadNumLockAndClear),
    k(Keyboard::Keypad7),
    k(Keyboard::Keypad8),
    k(Keyboard::Keypad9),
    k(Keyboard::KeypadSubtract),
    // Keypad layer, home row.
    k(Keyboard::DeleteForward),
    k(Keyboard::End),
    k(Keyboard::PageDown),
    k(Keyboard::KeypadDivide),
    k(Keyboard::Keypad4),
    k(Keyboard::Keypad5),
    k(Keyboard::Keypad6),
    k(Keyboard::KeypadAdd),
    // Keypad layer, bottom letter row.
    k(Keyboard::LeftArrow),
    k(Keyboard::UpArrow),
    k(Keyboard::DownArrow),
    k(Keyboard::KeypadMultiply),
    k(Keyboard::Keypad1),
    k(Keyboard::Keypad2),
    k(Keyboard::Keypad3),
    k(Keyboard::KeypadEnter),
    // Keypad layer, symbol row.
    k(Keyboard::Escape),
    k(Keyboard::PrintScreen),
    k(Keyboard::ScrollLock),
    k(Keyboard::Pause),
    k(Keyboard::RightArrow),
    k(Keyboard::Keypad0),
    k(Keyboard::KeypadDot),
    k(Keyboard::DeleteBackspace),
];

/// RAM-backed key-definition store.
pub struct KeyDefinitions {
    map: [u8; NUM_LOGICAL_KEYS],
    flags: ConfigFlags,
}

impl KeyDefinitions {
    pub fn new() -> Self {
        KeyDefinitions {
            map: DEFAULT_DEFINITIONS,
            flags: ConfigFlags::empty(),
        }
    }

    /// Remap a single key.
    pub fn set_definition(&mut self, key: LogicalKey, code: u8) {
        self.map[key as usize] = code;
    }

    /// Restore the board's default layout.
    pub fn reset_defaults(&mut self) {
        info!("key definitions reset to defaults");
        self.map = DEFAULT_DEFINITIONS;
    }

    pub fn set_flags(&mut self, flags: ConfigFlags) {
        self.flags = flags;
    }
}

impl Default for KeyDefinitions {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyConfig for KeyDefinitions {
    fn definition(&self, key: LogicalKey) -> u8 {
        self.map[key as usize]
    }

    fn flags(&self) -> ConfigFlags {
        self.flags
    }
}
