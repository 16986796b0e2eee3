//! Terminal feature toggles (DEC private modes)

use super::Toggle;

/// Report button presses and releases (mode 1000)
pub const MOUSE_TRACKING: Toggle = Toggle::new("\x1b[?1000h", "\x1b[?1000l");

/// Also report motion while a button is held (mode 1002)
pub const MOUSE_HOLD_TRACKING: Toggle = Toggle::new("\x1b[?1002h", "\x1b[?1002l");

/// Report all motion (mode 1003)
pub const MOUSE_MOVE_TRACKING: Toggle = Toggle::new("\x1b[?1003h", "\x1b[?1003l");

/// SGR extended mouse coordinates (mode 1006)
pub const EXTENDED_COORDINATES: Toggle = Toggle::new("\x1b[?1006h", "\x1b[?1006l");

pub const ALL: &[(&str, Toggle)] = &[
    ("mouse_tracking", MOUSE_TRACKING),
    ("mouse_hold_tracking", MOUSE_HOLD_TRACKING),
    ("mouse_move_tracking", MOUSE_MOVE_TRACKING),
    ("extended_coordinates", EXTENDED_COORDINATES),
];
