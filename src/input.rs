use raylib::prelude::*;

use crate::session::NavEvent;

const NEXT_KEYS: [KeyboardKey; 4] = [
    KeyboardKey::KEY_RIGHT,
    KeyboardKey::KEY_DOWN,
    KeyboardKey::KEY_SPACE,
    KeyboardKey::KEY_PAGE_DOWN,
];

const PREVIOUS_KEYS: [KeyboardKey; 4] = [
    KeyboardKey::KEY_LEFT,
    KeyboardKey::KEY_UP,
    KeyboardKey::KEY_PAGE_UP,
    KeyboardKey::KEY_BACKSPACE,
];

const DIGIT_KEYS: [KeyboardKey; 10] = [
    KeyboardKey::KEY_ZERO,
    KeyboardKey::KEY_ONE,
    KeyboardKey::KEY_TWO,
    KeyboardKey::KEY_THREE,
    KeyboardKey::KEY_FOUR,
    KeyboardKey::KEY_FIVE,
    KeyboardKey::KEY_SIX,
    KeyboardKey::KEY_SEVEN,
    KeyboardKey::KEY_EIGHT,
    KeyboardKey::KEY_NINE,
];

/// Digits typed before Enter, read as a zero-based slide number.
#[derive(Debug, Default)]
pub struct JumpBuffer {
    digits: String,
}

impl JumpBuffer {
    pub fn push(&mut self, digit: u8) {
        // Anything longer cannot be a slide number.
        if digit < 10 && self.digits.len() < 6 {
            self.digits.push(char::from(b'0' + digit));
        }
    }

    pub fn pending(&self) -> &str {
        &self.digits
    }

    pub fn clear(&mut self) {
        self.digits.clear();
    }

    /// Enter pressed: a jump if digits were typed, otherwise a plain advance.
    pub fn submit(&mut self) -> NavEvent {
        let digits = std::mem::take(&mut self.digits);
        digits.parse().map_or(NavEvent::Next, NavEvent::JumpTo)
    }
}

pub fn poll(rl: &RaylibHandle, buffer: &mut JumpBuffer, slide_count: usize) -> Vec<NavEvent> {
    let mut events = Vec::new();

    for (digit, key) in DIGIT_KEYS.iter().enumerate() {
        if rl.is_key_pressed(*key) {
            buffer.push(digit as u8);
        }
    }

    if rl.is_key_pressed(KeyboardKey::KEY_ENTER) {
        events.push(buffer.submit());
    }
    if NEXT_KEYS.iter().any(|key| rl.is_key_pressed(*key)) {
        buffer.clear();
        events.push(NavEvent::Next);
    }
    if PREVIOUS_KEYS.iter().any(|key| rl.is_key_pressed(*key)) {
        buffer.clear();
        events.push(NavEvent::Previous);
    }
    if rl.is_key_pressed(KeyboardKey::KEY_HOME) {
        buffer.clear();
        events.push(NavEvent::JumpTo(0));
    }
    if rl.is_key_pressed(KeyboardKey::KEY_END) {
        buffer.clear();
        events.push(NavEvent::JumpTo(slide_count as isize - 1));
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_then_enter_jump() {
        let mut buffer = JumpBuffer::default();
        buffer.push(1);
        buffer.push(2);
        assert_eq!(buffer.submit(), NavEvent::JumpTo(12));
        assert_eq!(buffer.pending(), "");
    }

    #[test]
    fn test_enter_without_digits_advances() {
        let mut buffer = JumpBuffer::default();
        assert_eq!(buffer.submit(), NavEvent::Next);
    }

    #[test]
    fn test_buffer_ignores_overflow() {
        let mut buffer = JumpBuffer::default();
        for _ in 0..10 {
            buffer.push(9);
        }
        buffer.push(42);
        assert_eq!(buffer.submit(), NavEvent::JumpTo(999_999));
    }
}
