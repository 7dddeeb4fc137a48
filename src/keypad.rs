#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeypadKey {
    Digit(u8),
    Clear,
    Submit,
}

impl KeypadKey {
    pub fn label(&self) -> String {
        match self {
            KeypadKey::Digit(d) => d.to_string(),
            KeypadKey::Clear => "Clear".to_string(),
            KeypadKey::Submit => "OK".to_string(),
        }
    }
}

pub const KEYPAD_LAYOUT: [[KeypadKey; 3]; 4] = [
    [KeypadKey::Digit(7), KeypadKey::Digit(8), KeypadKey::Digit(9)],
    [KeypadKey::Digit(4), KeypadKey::Digit(5), KeypadKey::Digit(6)],
    [KeypadKey::Digit(1), KeypadKey::Digit(2), KeypadKey::Digit(3)],
    [KeypadKey::Clear, KeypadKey::Digit(0), KeypadKey::Submit],
];

/// Highlight position on the on-screen keypad.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeypadCursor {
    pub row: usize,
    pub col: usize,
}

impl KeypadCursor {
    pub fn up(&mut self) {
        self.row = self.row.saturating_sub(1);
    }

    pub fn down(&mut self) {
        if self.row < KEYPAD_LAYOUT.len() - 1 {
            self.row += 1;
        }
    }

    pub fn left(&mut self) {
        self.col = self.col.saturating_sub(1);
    }

    pub fn right(&mut self) {
        if self.col < KEYPAD_LAYOUT[0].len() - 1 {
            self.col += 1;
        }
    }

    pub fn selected(&self) -> KeypadKey {
        KEYPAD_LAYOUT[self.row][self.col]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_has_every_digit_once() {
        let mut digits: Vec<u8> = KEYPAD_LAYOUT
            .iter()
            .flatten()
            .filter_map(|key| match key {
                KeypadKey::Digit(d) => Some(*d),
                _ => None,
            })
            .collect();
        digits.sort();
        assert_eq!(digits, (0..=9).collect::<Vec<u8>>());
    }

    #[test]
    fn test_cursor_starts_top_left() {
        let cursor = KeypadCursor::default();
        assert_eq!(cursor.selected(), KeypadKey::Digit(7));
    }

    #[test]
    fn test_cursor_clamped_to_grid() {
        let mut cursor = KeypadCursor::default();
        cursor.up();
        cursor.left();
        assert_eq!(cursor, KeypadCursor { row: 0, col: 0 });

        for _ in 0..10 {
            cursor.down();
            cursor.right();
        }
        assert_eq!(cursor, KeypadCursor { row: 3, col: 2 });
        assert_eq!(cursor.selected(), KeypadKey::Submit);
    }

    #[test]
    fn test_bottom_row_controls() {
        let mut cursor = KeypadCursor { row: 3, col: 0 };
        assert_eq!(cursor.selected(), KeypadKey::Clear);
        cursor.right();
        assert_eq!(cursor.selected(), KeypadKey::Digit(0));
    }

    #[test]
    fn test_labels() {
        assert_eq!(KeypadKey::Digit(4).label(), "4");
        assert_eq!(KeypadKey::Clear.label(), "Clear");
        assert_eq!(KeypadKey::Submit.label(), "OK");
    }
}
