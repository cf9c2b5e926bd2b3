/// Which pane has keyboard focus.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Pane {
    #[default]
    Goals,
    Todos,
}

impl Pane {
    pub fn toggle(self) -> Self {
        match self {
            Pane::Goals => Pane::Todos,
            Pane::Todos => Pane::Goals,
        }
    }
}

/// Single-line text input with a byte-offset cursor kept on char boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextInput {
    pub value: String,
    pub cursor: usize,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, c: char) {
        self.value.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn backspace(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.value.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    /// Delete the character under the cursor.
    pub fn delete(&mut self) {
        if let Some(next) = self.next_boundary() {
            self.value.drain(self.cursor..next);
        }
    }

    pub fn move_left(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.cursor = prev;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(next) = self.next_boundary() {
            self.cursor = next;
        }
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }

    pub fn end(&mut self) {
        self.cursor = self.value.len();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// (before, after) the cursor, for rendering a caret.
    pub fn split_at_cursor(&self) -> (&str, &str) {
        self.value.split_at(self.cursor)
    }

    fn prev_boundary(&self) -> Option<usize> {
        self.value[..self.cursor]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
    }

    fn next_boundary(&self) -> Option<usize> {
        self.value[self.cursor..]
            .chars()
            .next()
            .map(|c| self.cursor + c.len_utf8())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(s: &str) -> TextInput {
        let mut input = TextInput::new();
        s.chars().for_each(|c| input.insert(c));
        input
    }

    #[test]
    fn insert_in_the_middle() {
        let mut input = typed("Rn");
        input.move_left();
        input.insert('u');
        assert_eq!(input.value, "Run");
        assert_eq!(input.split_at_cursor(), ("Ru", "n"));
    }

    #[test]
    fn backspace_and_delete_respect_multibyte_chars() {
        let mut input = typed("Läs");
        input.move_left();
        input.backspace();
        assert_eq!(input.value, "Ls");
        assert_eq!(input.cursor, 1);

        input.delete();
        assert_eq!(input.value, "L");
        input.delete();
        assert_eq!(input.value, "L");
    }

    #[test]
    fn cursor_stays_in_bounds() {
        let mut input = typed("ab");
        input.move_right();
        assert_eq!(input.cursor, 2);

        input.home();
        input.move_left();
        input.backspace();
        assert_eq!(input.cursor, 0);
        assert_eq!(input.value, "ab");

        input.end();
        input.clear();
        assert_eq!(input, TextInput::new());
    }

    #[test]
    fn pane_toggles() {
        assert_eq!(Pane::Goals.toggle(), Pane::Todos);
        assert_eq!(Pane::Todos.toggle(), Pane::Goals);
    }
}
