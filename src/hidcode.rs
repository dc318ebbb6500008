//! Output-code ranges.
//!
//! A key definition is a single byte.  Values below the modifier range are
//! plain HID usage-page-7 keycodes and go into report slots.  The eight
//! modifiers map to bits of the report's modifier byte.  Everything from
//! [`SPECIAL_START`] up never reaches the keyboard report; those codes are
//! claimed by the mouse renderer and the admin keys.

/// `Keyboard::LeftControl`; the modifier bit index is the code minus this.
pub const MODIFIER_FIRST: u8 = 0xe0;
pub const MODIFIER_LAST: u8 = 0xe7;

/// First code with no keyboard-report output.
pub const SPECIAL_START: u8 = 0xe8;

pub const MOUSE_BTN1: u8 = 0xe8;
pub const MOUSE_BTN2: u8 = 0xe9;
pub const MOUSE_BTN3: u8 = 0xea;
pub const MOUSE_BTN4: u8 = 0xeb;
pub const MOUSE_BTN5: u8 = 0xec;
pub const MOUSE_FWD: u8 = 0xed;
pub const MOUSE_BACK: u8 = 0xee;
pub const MOUSE_LEFT: u8 = 0xef;
pub const MOUSE_RIGHT: u8 = 0xf0;

pub const MOUSE_START: u8 = MOUSE_BTN1;
pub const MOUSE_END: u8 = MOUSE_RIGHT;

/// Arms the admin/program chords handled outside this crate.
pub const PROGRAM: u8 = 0xf1;

/// Toggles the keypad layer.
pub const KEYPAD_TOGGLE: u8 = 0xf2;
