use crate::models::KeyEvent;

/// ASCII Group Separator, emitted by GS1 scanners in keyboard-wedge mode
pub const GROUP_SEPARATOR: u32 = 29;

/// Visible stand-in for the group separator
pub const GROUP_SEPARATOR_DISPLAY: &str = "*";

/// Substitute the non-printable group separator keystroke for display.
///
/// Returns `"*"` for char code 29, otherwise the key text unchanged.
pub fn check_invisible_chars<'a>(event: &KeyEvent<'a>) -> &'a str {
    if event.char_code == GROUP_SEPARATOR {
        GROUP_SEPARATOR_DISPLAY
    } else {
        event.key
    }
}
