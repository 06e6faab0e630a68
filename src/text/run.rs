use crate::{
    color::Color,
    formatting::Formatting,
    metrics::TextMetrics,
    style::TextStyle,
    text::{Offset, Size},
};

/// Span of characters sharing one [`Formatting`], font and character size.
///
/// Runs are created by [`RichText::append`](crate::text::RichText::append)
/// from the current formatting cursor, or by a [`Line`](crate::text::Line)
/// when it isolates a single character. Lengths and offsets are counted in
/// `char`s, not bytes.
#[derive(Clone, Debug, PartialEq)]
pub struct Run {
    content: String,
    char_len: usize,
    formatting: Formatting,
    font: Option<fontdb::ID>,
    character_size: u32,
    local_offset: Offset,
}

impl Run {
    /// Creates a run; the offset stays at zero until a line places it.
    pub fn new(
        content: impl Into<String>,
        formatting: Formatting,
        font: Option<fontdb::ID>,
        character_size: u32,
    ) -> Self {
        let content = content.into();
        Self {
            char_len: content.chars().count(),
            content,
            formatting,
            font,
            character_size,
            local_offset: Offset::zero(),
        }
    }

    /// Copies every attribute of `self` onto new content.
    fn with_content(&self, content: &str) -> Self {
        Self {
            content: content.to_owned(),
            char_len: content.chars().count(),
            local_offset: Offset::zero(),
            ..*self
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Number of characters in the run.
    pub fn len(&self) -> usize {
        self.char_len
    }

    pub fn is_empty(&self) -> bool {
        self.char_len == 0
    }

    pub fn char_at(&self, index: usize) -> Option<char> {
        self.content.chars().nth(index)
    }

    pub fn formatting(&self) -> &Formatting {
        &self.formatting
    }

    pub fn fill_color(&self) -> Color {
        self.formatting.fill
    }

    pub fn outline_color(&self) -> Color {
        self.formatting.outline
    }

    pub fn outline_thickness(&self) -> f32 {
        self.formatting.outline_thickness
    }

    pub fn style(&self) -> TextStyle {
        self.formatting.style
    }

    pub fn font(&self) -> Option<fontdb::ID> {
        self.font
    }

    pub fn character_size(&self) -> u32 {
        self.character_size
    }

    /// Offset of the run inside its line, as of the line's last layout.
    pub fn local_offset(&self) -> Offset {
        self.local_offset
    }

    /// Asks `metrics` for the rendered extent of this run.
    pub fn measure<M: TextMetrics + ?Sized>(&self, metrics: &M) -> Size {
        metrics.measure(self)
    }
}

/// Mutation is reserved to the owning line so its bounds stay in sync.
impl Run {
    pub(crate) fn set_fill_color(&mut self, color: Color) {
        self.formatting.fill = color;
    }

    pub(crate) fn set_style(&mut self, style: TextStyle) {
        self.formatting.style = style;
    }

    pub(crate) fn set_font(&mut self, font: Option<fontdb::ID>) {
        self.font = font;
    }

    pub(crate) fn set_character_size(&mut self, size: u32) {
        self.character_size = size;
    }

    pub(crate) fn set_local_offset(&mut self, offset: Offset) {
        self.local_offset = offset;
    }

    /// Byte index of the `index`-th character, or the content length past the end.
    fn byte_index(&self, index: usize) -> usize {
        self.content
            .char_indices()
            .nth(index)
            .map(|(byte, _)| byte)
            .unwrap_or(self.content.len())
    }

    /// Replaces the character at `index` with `replacement`.
    ///
    /// `index` must be below [`Self::len`]. The replacement may be empty or
    /// longer than one character.
    pub(crate) fn replace_char(&mut self, index: usize, replacement: &str) {
        debug_assert!(index < self.char_len);
        let start = self.byte_index(index);
        let end = self.byte_index(index + 1);
        self.content.replace_range(start..end, replacement);
        self.char_len = self.char_len - 1 + replacement.chars().count();
    }

    /// Splits the run around the character at `index`.
    ///
    /// Returns the characters before it, the character itself and the
    /// characters after it, each carrying this run's attributes. Empty sides
    /// are `None`.
    pub(crate) fn split_around(&self, index: usize) -> (Option<Run>, Run, Option<Run>) {
        debug_assert!(index < self.char_len);
        let start = self.byte_index(index);
        let end = self.byte_index(index + 1);

        let prefix = (start > 0).then(|| self.with_content(&self.content[..start]));
        let target = self.with_content(&self.content[start..end]);
        let suffix = (end < self.content.len()).then(|| self.with_content(&self.content[end..]));

        (prefix, target, suffix)
    }
}
