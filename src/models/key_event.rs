/// Keyboard-wedge keystroke as reported by the host UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent<'a> {
    /// Character code of the keystroke
    pub char_code: u32,
    /// Key text the UI would display
    pub key: &'a str,
}

impl<'a> KeyEvent<'a> {
    /// Create a key event
    pub fn new(char_code: u32, key: &'a str) -> Self {
        Self { char_code, key }
    }
}
