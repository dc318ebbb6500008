//! Report projection.
//!
//! Two independent views of the settled key state: a 6-key-rollover
//! keyboard report and a relative mouse report.  Both walk the key table in
//! slot order and resolve each key through the definition store; neither
//! changes the table.  The mouse renderer keeps its own held-time counter,
//! which is the only state on this side of the crate.

use bitflags::bitflags;
use usbd_human_interface_device::page::Keyboard;

use crate::hidcode;
use crate::keystate::KeyTracker;
use crate::layout;
use crate::KeyConfig;

bitflags! {
    /// The report's modifier byte, one bit per HID modifier.
    #[derive(Clone, Copy, PartialEq, Eq, Debug)]
    pub struct Modifiers: u8 {
        const LEFT_CONTROL = 0x01;
        const LEFT_SHIFT = 0x02;
        const LEFT_ALT = 0x04;
        const LEFT_GUI = 0x08;
        const RIGHT_CONTROL = 0x10;
        const RIGHT_SHIFT = 0x20;
        const RIGHT_ALT = 0x40;
        const RIGHT_GUI = 0x80;
    }
}

/// 6-key-rollover keyboard report.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct KeyboardReport {
    pub modifier: Modifiers,
    pub keys: [Keyboard; 6],
}

impl KeyboardReport {
    pub fn new() -> Self {
        KeyboardReport {
            modifier: Modifiers::empty(),
            keys: [Keyboard::NoEventIndicated; 6],
        }
    }

    /// Project the settled keys into this report.
    ///
    /// Modifier codes set modifier bits, ordinary codes fill slots, special
    /// codes are skipped.  A seventh key past the six slots, or the program
    /// key at all, forces every slot to `ErrorRollOver`: program chords must
    /// never leak as typed characters, not even for one poll.
    pub fn fill(&mut self, keys: &KeyTracker, config: &dyn KeyConfig) {
        self.modifier = Modifiers::empty();
        self.keys = [Keyboard::NoEventIndicated; 6];

        let mut used = 0;
        let mut rollover = false;
        for code in keys.settled() {
            if used == 6 {
                rollover = true;
                break;
            }
            if code == layout::KEY_PROGRAM {
                rollover = true;
            }
            let output = config.definition(code);
            if output >= hidcode::SPECIAL_START {
                // Consumed by the mouse renderer or the admin layer.
                continue;
            }
            if output >= hidcode::MODIFIER_FIRST {
                self.modifier |=
                    Modifiers::from_bits_retain(1 << (output - hidcode::MODIFIER_FIRST));
            } else {
                self.keys[used] = output.into();
                used += 1;
            }
        }
        if rollover {
            self.keys = [Keyboard::ErrorRollOver; 6];
        }
    }
}

impl Default for KeyboardReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Relative mouse report.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct MouseReport {
    pub buttons: u8,
    pub x: i8,
    pub y: i8,
}

/// Mouse renderer state: the held-time counter driving acceleration and the
/// button mask from the previous poll.
pub struct MouseFilter {
    held_ticks: u16,
    last_buttons: u8,
}

impl MouseFilter {
    pub fn new() -> Self {
        MouseFilter {
            held_ticks: 1,
            last_buttons: 0,
        }
    }

    /// Project the settled mouse keys into `report` and say whether it is
    /// worth sending: true on any mouse activity this tick, and always on a
    /// button edge so releases are never missed.
    pub fn fill(
        &mut self,
        keys: &KeyTracker,
        config: &dyn KeyConfig,
        report: &mut MouseReport,
    ) -> bool {
        *report = MouseReport::default();

        let mut send = false;
        let mut moving = false;
        let accel = mouse_accel(self.held_ticks) as i8;
        for code in keys.settled() {
            let output = config.definition(code);
            if !(hidcode::MOUSE_START..=hidcode::MOUSE_END).contains(&output) {
                continue;
            }
            send = true;
            match output {
                hidcode::MOUSE_BTN1 => report.buttons |= 1 << 0,
                hidcode::MOUSE_BTN2 => report.buttons |= 1 << 1,
                hidcode::MOUSE_BTN3 => report.buttons |= 1 << 2,
                hidcode::MOUSE_BTN4 => report.buttons |= 1 << 3,
                hidcode::MOUSE_BTN5 => report.buttons |= 1 << 4,
                hidcode::MOUSE_FWD => {
                    moving = true;
                    report.y = report.y.saturating_sub(accel);
                }
                hidcode::MOUSE_BACK => {
                    moving = true;
                    report.y = report.y.saturating_add(accel);
                }
                hidcode::MOUSE_LEFT => {
                    moving = true;
                    report.x = report.x.saturating_sub(accel);
                }
                hidcode::MOUSE_RIGHT => {
                    moving = true;
                    report.x = report.x.saturating_add(accel);
                }
                _ => (),
            }
        }

        if moving {
            self.held_ticks = self.held_ticks.saturating_add(1);
        } else {
            self.held_ticks = 1;
        }

        if report.buttons != self.last_buttons {
            send = true;
        }
        self.last_buttons = report.buttons;

        send
    }
}

impl Default for MouseFilter {
    fn default() -> Self {
        Self::new()
    }
}

/// Bit length of `n`: floor(log2(n)) + 1, and 0 for 0.
fn bit_length(n: u16) -> u8 {
    (16 - n.leading_zeros()) as u8
}

/// Cursor speed for a movement key held `time` consecutive ticks.  Two
/// regimes: a gentle logarithmic ramp for short holds, then a doubled curve
/// for sustained movement.  The shifts and the 0x2f boundary are tuned by
/// feel; don't tidy them.
fn mouse_accel(time: u16) -> u8 {
    if time < 0x2f {
        bit_length(time >> 2) + 1
    } else {
        2 * bit_length(time >> 3)
    }
}
