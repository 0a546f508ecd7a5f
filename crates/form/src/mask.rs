//! Phone input mask: `+7 (XXX) XXX-XX-XX`.

/// Number of subscriber digits after the `+7` country code.
const DIGITS: usize = 10;

/// Reformats whatever is in the phone field.
///
/// Non-digits are dropped and a single leading country/trunk digit (`7` or
/// `8`) is removed before the remaining digits are laid out. Returns `None`
/// when no digit is left, in which case the field keeps what was typed.
pub fn format_phone(raw: &str) -> Option<String> {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    let digits = digits.strip_prefix(['7', '8']).unwrap_or(&digits);

    if digits.is_empty() {
        return None;
    }

    let digits = &digits[..digits.len().min(DIGITS)];

    let mut formatted = format!("+7 ({}", group(digits, 0, 3));
    if digits.len() >= 4 {
        formatted.push_str(") ");
        formatted.push_str(group(digits, 3, 6));
    }
    if digits.len() >= 7 {
        formatted.push('-');
        formatted.push_str(group(digits, 6, 8));
    }
    if digits.len() >= 9 {
        formatted.push('-');
        formatted.push_str(group(digits, 8, 10));
    }

    Some(formatted)
}

fn group(digits: &str, from: usize, to: usize) -> &str {
    &digits[from..digits.len().min(to)]
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Backspace,
    Tab,
    Escape,
    Enter,
    Delete,
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Home,
    End,
    /// Top-row digit key
    Digit(u8),
    /// Numeric keypad digit
    Numpad(u8),
    Char(char),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyStroke {
    pub key: Key,
    pub ctrl: bool,
    pub shift: bool,
}

impl KeyStroke {
    pub fn new(key: Key) -> Self {
        Self {
            key,
            ctrl: false,
            shift: false,
        }
    }

    pub fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    pub fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyDecision {
    Allow,
    Suppress,
}

/// Keydown filter for the phone field.
pub fn filter_phone_key(stroke: KeyStroke) -> KeyDecision {
    let allowed = match stroke.key {
        Key::Backspace
        | Key::Tab
        | Key::Escape
        | Key::Enter
        | Key::Delete
        | Key::ArrowLeft
        | Key::ArrowRight
        | Key::ArrowUp
        | Key::ArrowDown
        | Key::Home
        | Key::End => true,
        Key::Char(c) => stroke.ctrl && matches!(c.to_ascii_lowercase(), 'a' | 'c' | 'v' | 'x'),
        Key::Digit(_) => !stroke.shift,
        Key::Numpad(_) => true,
    };

    if allowed {
        KeyDecision::Allow
    } else {
        KeyDecision::Suppress
    }
}
