//! Single-line text input

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a key did to a [`TextField`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldEvent {
    Changed,
    Submitted,
    Cancelled,
    Ignored,
}

/// Editable line of text with a character filter
#[derive(Debug, Clone)]
pub struct TextField {
    value: String,
    max_len: usize,
    accepts: fn(char) -> bool,
}

impl TextField {
    /// Field that only takes ASCII digits (goto-step prompt)
    pub fn digits() -> Self {
        TextField {
            value: String::new(),
            max_len: 6,
            accepts: |c| c.is_ascii_digit(),
        }
    }

    /// Field that takes any printable character (library filter)
    pub fn text() -> Self {
        TextField {
            value: String::new(),
            max_len: 64,
            accepts: |c| !c.is_control(),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> FieldEvent {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return FieldEvent::Ignored;
        }
        match key.code {
            KeyCode::Enter => FieldEvent::Submitted,
            KeyCode::Esc => FieldEvent::Cancelled,
            KeyCode::Backspace => {
                if self.value.pop().is_some() {
                    FieldEvent::Changed
                } else {
                    FieldEvent::Ignored
                }
            }
            KeyCode::Char(c) if (self.accepts)(c) && self.value.chars().count() < self.max_len => {
                self.value.push(c);
                FieldEvent::Changed
            }
            _ => FieldEvent::Ignored,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(field: &mut TextField, code: KeyCode) -> FieldEvent {
        field.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn digits_field_rejects_letters_and_space() {
        let mut field = TextField::digits();
        assert_eq!(press(&mut field, KeyCode::Char('4')), FieldEvent::Changed);
        assert_eq!(press(&mut field, KeyCode::Char('x')), FieldEvent::Ignored);
        assert_eq!(press(&mut field, KeyCode::Char(' ')), FieldEvent::Ignored);
        assert_eq!(field.value(), "4");
    }

    #[test]
    fn backspace_and_submit() {
        let mut field = TextField::text();
        press(&mut field, KeyCode::Char('s'));
        press(&mut field, KeyCode::Char('o'));
        assert_eq!(press(&mut field, KeyCode::Backspace), FieldEvent::Changed);
        assert_eq!(field.value(), "s");
        assert_eq!(press(&mut field, KeyCode::Enter), FieldEvent::Submitted);
        assert_eq!(press(&mut field, KeyCode::Esc), FieldEvent::Cancelled);
    }

    #[test]
    fn respects_max_len() {
        let mut field = TextField::digits();
        for _ in 0..10 {
            press(&mut field, KeyCode::Char('9'));
        }
        assert_eq!(field.value().len(), 6);
    }
}
