//! Sliding-window matcher for the cosmetic 10-key sequence (the classic
//! Konami code). A match toggles the full-page filter in the shell; the
//! matcher itself knows nothing about rendering.

use std::collections::VecDeque;

/// Key tokens the matcher understands, decoupled from any input backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyToken {
    Up,
    Down,
    Left,
    Right,
    Char(char),
}

/// ↑ ↑ ↓ ↓ ← → ← → b a
pub const SECRET_SEQUENCE: [KeyToken; 10] = [
    KeyToken::Up,
    KeyToken::Up,
    KeyToken::Down,
    KeyToken::Down,
    KeyToken::Left,
    KeyToken::Right,
    KeyToken::Left,
    KeyToken::Right,
    KeyToken::Char('b'),
    KeyToken::Char('a'),
];

/// Keeps the most recent ten keys; reports whether they exactly match the
/// secret sequence. The window is never cleared, so a botched attempt only
/// costs the keys already typed.
#[derive(Debug, Default)]
pub struct SequenceMatcher {
    window: VecDeque<KeyToken>,
}

impl SequenceMatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key press; true when the window now equals the sequence.
    pub fn push(&mut self, key: KeyToken) -> bool {
        if self.window.len() == SECRET_SEQUENCE.len() {
            self.window.pop_front();
        }
        self.window.push_back(key);
        self.window.len() == SECRET_SEQUENCE.len()
            && self.window.iter().eq(SECRET_SEQUENCE.iter())
    }
}
