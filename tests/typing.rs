//! End-to-end flows through the input core.
//!
//! These drive the tracker the way the firmware main loop does: raw
//! contacts go in through a fake matrix, scans run on a tick, and both
//! report renderers read the result.  The unit tests cover the individual
//! transitions; here we check that whole interactions come out right.

use contour_keys::config::KeyDefinitions;
use contour_keys::layout::{self, MATRIX_COLS, MATRIX_ROWS, MATRIX_TO_LOGICAL};
use contour_keys::{
    KeyConfig, KeyTracker, KeyboardReport, LogicalKey, MatrixDriver, Modifiers, MouseFilter,
    MouseReport, SilentBuzzer,
};
use usbd_human_interface_device::page::Keyboard;

/// Fake matrix wired like the board.
struct BenchMatrix {
    contacts: [[bool; MATRIX_COLS]; MATRIX_ROWS],
    selected: usize,
}

impl BenchMatrix {
    fn new() -> Self {
        BenchMatrix {
            contacts: [[false; MATRIX_COLS]; MATRIX_ROWS],
            selected: 0,
        }
    }

    fn set(&mut self, key: LogicalKey, closed: bool) {
        for row in 0..MATRIX_ROWS {
            for col in 0..MATRIX_COLS {
                if MATRIX_TO_LOGICAL[row][col] == key {
                    self.contacts[row][col] = closed;
                    return;
                }
            }
        }
        panic!("key {} is not on the board", key);
    }
}

impl MatrixDriver for BenchMatrix {
    fn select_row(&mut self, row: usize) {
        self.selected = row;
    }

    fn read_column(&mut self, col: usize) -> bool {
        self.contacts[self.selected][col]
    }
}

/// Scan until anything in flight has settled or cleared.
fn settle(keys: &mut KeyTracker, matrix: &mut BenchMatrix, config: &dyn KeyConfig) {
    let mut buzzer = SilentBuzzer;
    for _ in 0..8 {
        keys.scan(matrix, config, &mut buzzer);
    }
}

#[test]
fn shifted_typing_reaches_the_report() {
    let mut keys = KeyTracker::new();
    let mut matrix = BenchMatrix::new();
    let config = KeyDefinitions::new();
    let mut report = KeyboardReport::new();

    // Idle board, idle report.
    settle(&mut keys, &mut matrix, &config);
    report.fill(&keys, &config);
    assert_eq!(report, KeyboardReport::new());

    // Hold shift, then Q.
    matrix.set(layout::KEY_LSHIFT, true);
    settle(&mut keys, &mut matrix, &config);
    matrix.set(layout::KEY_Q, true);
    settle(&mut keys, &mut matrix, &config);

    report.fill(&keys, &config);
    assert_eq!(report.modifier, Modifiers::LEFT_SHIFT);
    assert_eq!(report.keys[0], Keyboard::Q);

    // Release both; the report empties again.
    matrix.set(layout::KEY_LSHIFT, false);
    matrix.set(layout::KEY_Q, false);
    settle(&mut keys, &mut matrix, &config);
    report.fill(&keys, &config);
    assert_eq!(report, KeyboardReport::new());
    assert_eq!(keys.pressed_count(), 0);
}

#[test]
fn keypad_mode_types_the_layered_legends() {
    let mut keys = KeyTracker::new();
    let mut matrix = BenchMatrix::new();
    let config = KeyDefinitions::new();
    let mut report = KeyboardReport::new();

    // The J position carries Keypad6 on the layer.
    keys.toggle_keypad();
    matrix.set(layout::KEY_J, true);
    settle(&mut keys, &mut matrix, &config);
    report.fill(&keys, &config);
    assert_eq!(report.keys[0], Keyboard::Keypad6);

    // Back to the base layer mid-hold: the key re-registers as J.
    keys.toggle_keypad();
    settle(&mut keys, &mut matrix, &config);
    report.fill(&keys, &config);
    assert_eq!(report.keys[0], Keyboard::J);
}

#[test]
fn program_chord_is_detectable_but_never_types() {
    let mut keys = KeyTracker::new();
    let mut matrix = BenchMatrix::new();
    let config = KeyDefinitions::new();

    matrix.set(layout::KEY_PROGRAM, true);
    matrix.set(layout::KEY_1, true);
    settle(&mut keys, &mut matrix, &config);

    // The admin layer sees the chord...
    assert!(keys.all_down(&[layout::KEY_PROGRAM, layout::KEY_1]));

    // ...and the host sees only the rollover sentinel.
    let mut report = KeyboardReport::new();
    report.fill(&keys, &config);
    assert_eq!(report.keys, [Keyboard::ErrorRollOver; 6]);
}

#[test]
fn dragging_with_the_mouse_cluster() {
    let mut keys = KeyTracker::new();
    let mut matrix = BenchMatrix::new();
    let config = KeyDefinitions::new();
    let mut mouse = MouseFilter::new();
    let mut report = MouseReport::default();

    // Button down, then drag right.
    matrix.set(layout::KEY_MOUSE_BTN1, true);
    settle(&mut keys, &mut matrix, &config);
    assert!(mouse.fill(&keys, &config, &mut report));
    assert_eq!(report.buttons, 0x01);
    assert_eq!((report.x, report.y), (0, 0));

    matrix.set(layout::KEY_MOUSE_RIGHT, true);
    settle(&mut keys, &mut matrix, &config);
    let mut total = 0i32;
    for _ in 0..30 {
        assert!(mouse.fill(&keys, &config, &mut report));
        assert_eq!(report.buttons, 0x01);
        total += i32::from(report.x);
    }
    assert!(total > 30, "drag should cover ground, moved {}", total);

    // Drop everything: one final report carries the button release.
    matrix.set(layout::KEY_MOUSE_BTN1, false);
    matrix.set(layout::KEY_MOUSE_RIGHT, false);
    settle(&mut keys, &mut matrix, &config);
    assert!(mouse.fill(&keys, &config, &mut report));
    assert_eq!(report.buttons, 0);
    assert!(!mouse.fill(&keys, &config, &mut report));
}

#[test]
fn mouse_and_keyboard_projections_are_disjoint() {
    let mut keys = KeyTracker::new();
    let mut matrix = BenchMatrix::new();
    let config = KeyDefinitions::new();

    matrix.set(layout::KEY_MOUSE_BTN2, true);
    matrix.set(layout::KEY_H, true);
    settle(&mut keys, &mut matrix, &config);

    let mut kb = KeyboardReport::new();
    kb.fill(&keys, &config);
    assert_eq!(kb.keys[0], Keyboard::H);
    assert_eq!(kb.keys[1], Keyboard::NoEventIndicated);

    let mut mouse = MouseFilter::new();
    let mut report = MouseReport::default();
    assert!(mouse.fill(&keys, &config, &mut report));
    assert_eq!(report.buttons, 0x02);
    assert_eq!((report.x, report.y), (0, 0));
}
