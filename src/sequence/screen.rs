//! Screen control

use super::Toggle;

/// Full reset (RIS), then mouse tracking off and cursor shown
pub const RESET: &str = "\x1bc\x1b[?1000l\x1b[?25h";

/// Home the cursor and erase the display
pub const CLEAR: &str = "\x1b[H\x1b[J";

/// Erase from the cursor to the end of the display
pub const CLEAR_BELOW: &str = "\x1b[J";

/// Alternate screen buffer with saved cursor (mode 1049)
pub const ALTERNATE_SCREEN: Toggle = Toggle::new("\x1b[?1049h", "\x1b[?1049l");

/// Disable autowrap (DECAWM) while entered
pub const NO_WRAP: Toggle = Toggle::new("\x1b[?7l", "\x1b[?7h");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_sequences() {
        assert!(CLEAR.ends_with(CLEAR_BELOW));
        assert!(RESET.starts_with("\x1bc"));
    }

    #[test]
    fn test_no_wrap_disables_autowrap_on_enter() {
        assert_eq!(NO_WRAP.enter, "\x1b[?7l");
        assert_eq!(NO_WRAP.exit, "\x1b[?7h");
    }
}
