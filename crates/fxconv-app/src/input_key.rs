//! Abstract input key event, independent of terminal library.
//!
//! The TUI converts crossterm key events into `InputKey` at its boundary, so
//! fxconv-app and the headless front end never depend on crossterm.

/// Abstract input key event, independent of terminal library.
///
/// The amount field only edits at its end, so there are no cursor keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputKey {
    // Character keys
    /// Regular character key (digits, letters, '.', '-')
    Char(char),
    /// Character with Ctrl modifier (Ctrl+c, Ctrl+x)
    CharCtrl(char),

    // Navigation
    Up,
    Down,

    // Action keys
    Enter,
    Esc,
    Tab,
    /// Shift+Tab
    BackTab,
    Backspace,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_key_equality() {
        assert_eq!(InputKey::Char('1'), InputKey::Char('1'));
        assert_ne!(InputKey::Char('x'), InputKey::CharCtrl('x'));
    }
}
