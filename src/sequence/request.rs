//! Queries the terminal answers on its input stream

/// Ask for the screen background color (OSC 11)
pub const SCREEN_BACKGROUND_COLOR: &str = "\x1b]11;?\x07";

/// Ask for the cursor position (DSR 6)
pub const CURSOR_POSITION: &str = super::cursor::REQUEST;
