use rdev::Key;

use crate::domain::models::{Modifier, NamedKey};

/// Key plus whether Shift must be held, for a US keyboard layout
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Keystroke {
    pub key: Key,
    pub shift: bool,
}

impl Keystroke {
    fn plain(key: Key) -> Option<Self> {
        Some(Self { key, shift: false })
    }

    fn shifted(key: Key) -> Option<Self> {
        Some(Self { key, shift: true })
    }
}

pub fn named_key(key: NamedKey) -> Key {
    match key {
        NamedKey::Enter => Key::Return,
    }
}

pub fn modifier_key(modifier: Modifier) -> Key {
    match modifier {
        Modifier::Ctrl => Key::ControlLeft,
    }
}

pub fn char_to_keystroke(ch: char) -> Option<Keystroke> {
    if ch.is_ascii_alphabetic() {
        let key = letter_key(ch.to_ascii_lowercase())?;
        return if ch.is_ascii_uppercase() {
            Keystroke::shifted(key)
        } else {
            Keystroke::plain(key)
        };
    }
    if let Some(key) = digit_key(ch) {
        return Keystroke::plain(key);
    }

    match ch {
        ' ' => Keystroke::plain(Key::Space),
        '\n' | '\r' => Keystroke::plain(Key::Return),
        '\t' => Keystroke::plain(Key::Tab),
        '.' => Keystroke::plain(Key::Dot),
        ',' => Keystroke::plain(Key::Comma),
        ';' => Keystroke::plain(Key::SemiColon),
        '-' => Keystroke::plain(Key::Minus),
        '=' => Keystroke::plain(Key::Equal),
        '[' => Keystroke::plain(Key::LeftBracket),
        ']' => Keystroke::plain(Key::RightBracket),
        '\'' => Keystroke::plain(Key::Quote),
        '\\' => Keystroke::plain(Key::BackSlash),
        '/' => Keystroke::plain(Key::Slash),
        '`' => Keystroke::plain(Key::BackQuote),
        ':' => Keystroke::shifted(Key::SemiColon),
        '!' => Keystroke::shifted(Key::Num1),
        '@' => Keystroke::shifted(Key::Num2),
        '#' => Keystroke::shifted(Key::Num3),
        '$' => Keystroke::shifted(Key::Num4),
        '%' => Keystroke::shifted(Key::Num5),
        '^' => Keystroke::shifted(Key::Num6),
        '&' => Keystroke::shifted(Key::Num7),
        '*' => Keystroke::shifted(Key::Num8),
        '(' => Keystroke::shifted(Key::Num9),
        ')' => Keystroke::shifted(Key::Num0),
        '?' => Keystroke::shifted(Key::Slash),
        '_' => Keystroke::shifted(Key::Minus),
        '+' => Keystroke::shifted(Key::Equal),
        '{' => Keystroke::shifted(Key::LeftBracket),
        '}' => Keystroke::shifted(Key::RightBracket),
        '"' => Keystroke::shifted(Key::Quote),
        '|' => Keystroke::shifted(Key::BackSlash),
        '<' => Keystroke::shifted(Key::Comma),
        '>' => Keystroke::shifted(Key::Dot),
        '~' => Keystroke::shifted(Key::BackQuote),
        _ => None,
    }
}

pub fn letter_key(ch: char) -> Option<Key> {
    match ch.to_ascii_lowercase() {
        'a' => Some(Key::KeyA),
        'b' => Some(Key::KeyB),
        'c' => Some(Key::KeyC),
        'd' => Some(Key::KeyD),
        'e' => Some(Key::KeyE),
        'f' => Some(Key::KeyF),
        'g' => Some(Key::KeyG),
        'h' => Some(Key::KeyH),
        'i' => Some(Key::KeyI),
        'j' => Some(Key::KeyJ),
        'k' => Some(Key::KeyK),
        'l' => Some(Key::KeyL),
        'm' => Some(Key::KeyM),
        'n' => Some(Key::KeyN),
        'o' => Some(Key::KeyO),
        'p' => Some(Key::KeyP),
        'q' => Some(Key::KeyQ),
        'r' => Some(Key::KeyR),
        's' => Some(Key::KeyS),
        't' => Some(Key::KeyT),
        'u' => Some(Key::KeyU),
        'v' => Some(Key::KeyV),
        'w' => Some(Key::KeyW),
        'x' => Some(Key::KeyX),
        'y' => Some(Key::KeyY),
        'z' => Some(Key::KeyZ),
        _ => None,
    }
}

fn digit_key(ch: char) -> Option<Key> {
    match ch {
        '0' => Some(Key::Num0),
        '1' => Some(Key::Num1),
        '2' => Some(Key::Num2),
        '3' => Some(Key::Num3),
        '4' => Some(Key::Num4),
        '5' => Some(Key::Num5),
        '6' => Some(Key::Num6),
        '7' => Some(Key::Num7),
        '8' => Some(Key::Num8),
        '9' => Some(Key::Num9),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::Profile;

    #[test]
    fn test_letters_respect_case() {
        assert_eq!(
            char_to_keystroke('n'),
            Some(Keystroke { key: Key::KeyN, shift: false })
        );
        assert_eq!(
            char_to_keystroke('N'),
            Some(Keystroke { key: Key::KeyN, shift: true })
        );
    }

    #[test]
    fn test_shifted_symbols() {
        assert_eq!(
            char_to_keystroke(':'),
            Some(Keystroke { key: Key::SemiColon, shift: true })
        );
        assert_eq!(
            char_to_keystroke('.'),
            Some(Keystroke { key: Key::Dot, shift: false })
        );
    }

    #[test]
    fn test_unmapped_characters() {
        assert_eq!(char_to_keystroke('é'), None);
        assert_eq!(char_to_keystroke('€'), None);
    }

    #[test]
    fn test_every_profile_message_is_typeable() {
        for profile in [Profile::NextTask, Profile::FixErrors] {
            for message in profile.messages() {
                for ch in message.chars() {
                    assert!(char_to_keystroke(ch).is_some(), "no key for {:?}", ch);
                }
            }
        }
    }
}
