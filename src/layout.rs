//! Board data for the Contour controller.
//!
//! The matrix is wired 8x8 with the bottom row unpopulated.  Logical codes
//! are assigned in matrix order: the two thumb rows first, then the five
//! main rows.  The main block carries the keypad layer: while keypad mode is
//! active its positions produce their base code plus
//! [`KEYPAD_LAYER_SIZE`], which selects the second half of the definition
//! table.  Thumb and mouse keys are the same in both modes.

use crate::{LogicalKey, NO_KEY};

pub const MATRIX_ROWS: usize = 8;
pub const MATRIX_COLS: usize = 8;

/// First logical code with a keypad-layer duplicate.
pub const KEYPAD_LAYER_START: LogicalKey = 16;

/// Number of keys in the layered block; also the code offset applied while
/// keypad mode is active.
pub const KEYPAD_LAYER_SIZE: LogicalKey = 40;

/// Size of the logical code space, keypad layer included.
pub const NUM_LOGICAL_KEYS: usize =
    (KEYPAD_LAYER_START + 2 * KEYPAD_LAYER_SIZE) as usize;

// Left thumb row.
pub const KEY_PROGRAM: LogicalKey = 0;
pub const KEY_KEYPAD: LogicalKey = 1;
pub const KEY_LSHIFT: LogicalKey = 2;
pub const KEY_LCTRL: LogicalKey = 3;
pub const KEY_LALT: LogicalKey = 4;
pub const KEY_SPACE: LogicalKey = 5;
pub const KEY_ENTER: LogicalKey = 6;
pub const KEY_BACKSPACE: LogicalKey = 7;

// Right thumb row: mouse cluster plus the right shift.
pub const KEY_MOUSE_BTN1: LogicalKey = 8;
pub const KEY_MOUSE_BTN2: LogicalKey = 9;
pub const KEY_MOUSE_BTN3: LogicalKey = 10;
pub const KEY_MOUSE_FWD: LogicalKey = 11;
pub const KEY_MOUSE_BACK: LogicalKey = 12;
pub const KEY_MOUSE_LEFT: LogicalKey = 13;
pub const KEY_MOUSE_RIGHT: LogicalKey = 14;
pub const KEY_RSHIFT: LogicalKey = 15;

// Number row.
pub const KEY_1: LogicalKey = 16;
pub const KEY_2: LogicalKey = 17;
pub const KEY_3: LogicalKey = 18;
pub const KEY_4: LogicalKey = 19;
pub const KEY_5: LogicalKey = 20;
pub const KEY_6: LogicalKey = 21;
pub const KEY_7: LogicalKey = 22;
pub const KEY_8: LogicalKey = 23;

// Top letter row.
pub const KEY_Q: LogicalKey = 24;
pub const KEY_W: LogicalKey = 25;
pub const KEY_E: LogicalKey = 26;
pub const KEY_R: LogicalKey = 27;
pub const KEY_T: LogicalKey = 28;
pub const KEY_Y: LogicalKey = 29;
pub const KEY_U: LogicalKey = 30;
pub const KEY_I: LogicalKey = 31;

// Home row.
pub const KEY_A: LogicalKey = 32;
pub const KEY_S: LogicalKey = 33;
pub const KEY_D: LogicalKey = 34;
pub const KEY_F: LogicalKey = 35;
pub const KEY_G: LogicalKey = 36;
pub const KEY_H: LogicalKey = 37;
pub const KEY_J: LogicalKey = 38;
pub const KEY_K: LogicalKey = 39;

// Bottom letter row.
pub const KEY_Z: LogicalKey = 40;
pub const KEY_X: LogicalKey = 41;
pub const KEY_C: LogicalKey = 42;
pub const KEY_V: LogicalKey = 43;
pub const KEY_B: LogicalKey = 44;
pub const KEY_N: LogicalKey = 45;
pub const KEY_M: LogicalKey = 46;
pub const KEY_COMMA: LogicalKey = 47;

// Symbol row.
pub const KEY_ESC: LogicalKey = 48;
pub const KEY_MINUS: LogicalKey = 49;
pub const KEY_EQUAL: LogicalKey = 50;
pub const KEY_LBRACE: LogicalKey = 51;
pub const KEY_RBRACE: LogicalKey = 52;
pub const KEY_SEMI: LogicalKey = 53;
pub const KEY_APOST: LogicalKey = 54;
pub const KEY_SLASH: LogicalKey = 55;

/// Matrix position to base-layer logical code.  `NO_KEY` marks cells with
/// nothing wired to them.
pub static MATRIX_TO_LOGICAL: [[LogicalKey; MATRIX_COLS]; MATRIX_ROWS] = [
    [
        KEY_PROGRAM,
        KEY_KEYPAD,
        KEY_LSHIFT,
        KEY_LCTRL,
        KEY_LALT,
        KEY_SPACE,
        KEY_ENTER,
        KEY_BACKSPACE,
    ],
    [
        KEY_MOUSE_BTN1,
        KEY_MOUSE_BTN2,
        KEY_MOUSE_BTN3,
        KEY_MOUSE_FWD,
        KEY_MOUSE_BACK,
        KEY_MOUSE_LEFT,
        KEY_MOUSE_RIGHT,
        KEY_RSHIFT,
    ],
    [KEY_1, KEY_2, KEY_3, KEY_4, KEY_5, KEY_6, KEY_7, KEY_8],
    [KEY_Q, KEY_W, KEY_E, KEY_R, KEY_T, KEY_Y, KEY_U, KEY_I],
    [KEY_A, KEY_S, KEY_D, KEY_F, KEY_G, KEY_H, KEY_J, KEY_K],
    [KEY_Z, KEY_X, KEY_C, KEY_V, KEY_B, KEY_N, KEY_M, KEY_COMMA],
    [
        KEY_ESC,
        KEY_MINUS,
        KEY_EQUAL,
        KEY_LBRACE,
        KEY_RBRACE,
        KEY_SEMI,
        KEY_APOST,
        KEY_SLASH,
    ],
    [NO_KEY, NO_KEY, NO_KEY, NO_KEY, NO_KEY, NO_KEY, NO_KEY, NO_KEY],
];
