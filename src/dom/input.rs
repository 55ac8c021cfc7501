use unicode_width::UnicodeWidthStr;

/// Value and caret of a single-line text input. `cursor` is a byte offset
/// that always sits on a char boundary.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextInput {
    pub text: String,
    pub cursor: usize,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
        self.cursor = self.text.len();
    }

    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn delete_back(&mut self) {
        if self.cursor > 0 {
            let prev = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.text.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    pub fn delete_forward(&mut self) {
        if self.cursor < self.text.len() {
            let next = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
            self.text.drain(self.cursor..next);
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.text.len() {
            self.cursor = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }

    pub fn delete_word_back(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let mut pos = self.cursor;
        // Skip trailing whitespace
        while pos > 0 && self.text.as_bytes().get(pos - 1) == Some(&b' ') {
            pos -= 1;
        }
        while pos > 0 && self.text.as_bytes().get(pos - 1) != Some(&b' ') {
            pos -= 1;
        }
        self.text.drain(pos..self.cursor);
        self.cursor = pos;
    }

    /// Terminal columns between the start of the text and the caret.
    pub fn cursor_column(&self) -> u16 {
        u16::try_from(self.text[..self.cursor].width()).unwrap_or(u16::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multibyte_editing() {
        let mut input = TextInput::new();
        for c in "Zoë".chars() {
            input.insert_char(c);
        }
        assert_eq!(input.cursor, "Zoë".len());
        input.delete_back();
        assert_eq!(input.text, "Zo");
        input.move_home();
        input.delete_forward();
        assert_eq!(input.text, "o");
        assert_eq!(input.cursor, 0);
    }

    #[test]
    fn test_cursor_column_counts_wide_chars() {
        let mut input = TextInput::new();
        input.set_text("名前a");
        assert_eq!(input.cursor_column(), 5);
        input.move_left();
        assert_eq!(input.cursor_column(), 4);
    }

    #[test]
    fn test_cursor_column_saturates() {
        let mut input = TextInput::new();
        input.set_text(&"a".repeat(70_000));
        assert_eq!(input.cursor_column(), u16::MAX);
    }

    #[test]
    fn test_delete_word_back() {
        let mut input = TextInput::new();
        input.set_text("Ada Lovelace  ");
        input.delete_word_back();
        assert_eq!(input.text, "Ada ");
        input.delete_word_back();
        assert_eq!(input.text, "");
    }
}
