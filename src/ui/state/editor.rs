/// The only operations screens may perform on a Markdown editor.
pub trait EditorHandle {
    fn insert_text(&mut self, text: &str);
    fn value(&self) -> String;
}

/// Text buffer backing the Markdown textarea. `cursor` counts characters, not
/// bytes, and is clamped to the buffer on every use.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBuffer {
    text: String,
    cursor: usize,
}

impl TextBuffer {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            cursor: text.chars().count(),
        }
    }

    pub fn set_cursor(&mut self, cursor: usize) {
        self.cursor = cursor.min(self.text.chars().count());
    }

    fn byte_offset(&self) -> usize {
        self.text
            .char_indices()
            .nth(self.cursor)
            .map(|(offset, _)| offset)
            .unwrap_or(self.text.len())
    }
}

impl EditorHandle for TextBuffer {
    fn insert_text(&mut self, text: &str) {
        let offset = self.byte_offset();
        self.text.insert_str(offset, text);
        self.cursor += text.chars().count();
    }

    fn value(&self) -> String {
        self.text.clone()
    }
}

pub fn image_markdown(alt: &str, url: &str) -> String {
    format!("![{alt}]({url})")
}

/// Inserts an uploaded image on its own line.
pub fn insert_image<E: EditorHandle + ?Sized>(editor: &mut E, alt: &str, url: &str) {
    let current = editor.value();
    let prefix = if current.is_empty() || current.ends_with('\n') {
        ""
    } else {
        "\n"
    };
    editor.insert_text(&format!("{prefix}{}\n", image_markdown(alt, url)));
}
