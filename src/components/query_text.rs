/// Single-line query buffer behind the search field. Caret positions are
/// char indices.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct QueryText {
    value: String,
    caret: usize,
}

impl QueryText {
    pub fn new(value: impl Into<String>) -> Self {
        let value = sanitize(&value.into());
        let caret = value.chars().count();
        Self { value, caret }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn len(&self) -> usize {
        self.value.chars().count()
    }

    pub fn caret(&self) -> usize {
        self.caret
    }

    pub fn before_caret(&self) -> &str {
        &self.value[..byte_index_at_char(&self.value, self.caret)]
    }

    pub fn after_caret(&self) -> &str {
        &self.value[byte_index_at_char(&self.value, self.caret)..]
    }

    /// Returns `true` when the value changed. Line breaks, tabs and other
    /// control characters are dropped.
    pub fn insert(&mut self, text: &str) -> bool {
        let text = sanitize(text);
        if text.is_empty() {
            return false;
        }
        let at = byte_index_at_char(&self.value, self.caret);
        self.value.insert_str(at, &text);
        self.caret += text.chars().count();
        true
    }

    pub fn delete_backward(&mut self) -> bool {
        if self.caret == 0 {
            return false;
        }
        let start = byte_index_at_char(&self.value, self.caret - 1);
        let end = byte_index_at_char(&self.value, self.caret);
        self.value.replace_range(start..end, "");
        self.caret -= 1;
        true
    }

    pub fn delete_forward(&mut self) -> bool {
        if self.caret >= self.len() {
            return false;
        }
        let start = byte_index_at_char(&self.value, self.caret);
        let end = byte_index_at_char(&self.value, self.caret + 1);
        self.value.replace_range(start..end, "");
        true
    }

    pub fn clear(&mut self) -> bool {
        if self.value.is_empty() {
            return false;
        }
        self.value.clear();
        self.caret = 0;
        true
    }

    pub fn move_left(&mut self) {
        self.caret = self.caret.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.caret = (self.caret + 1).min(self.len());
    }

    pub fn move_home(&mut self) {
        self.caret = 0;
    }

    pub fn move_end(&mut self) {
        self.caret = self.len();
    }
}

fn sanitize(text: &str) -> String {
    text.chars().filter(|ch| !ch.is_control()).collect()
}

fn byte_index_at_char(value: &str, char_index: usize) -> usize {
    value
        .char_indices()
        .nth(char_index)
        .map(|(index, _)| index)
        .unwrap_or(value.len())
}
