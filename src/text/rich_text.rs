use std::collections::HashSet;

use crate::{
    color::Color,
    error::{Result, RichTextError},
    formatting::{Formatting, Outline, Stroke},
    metrics::TextMetrics,
    renderer::RunRenderer,
    style::TextStyle,
    text::{Bounds, Line, LineWidthPolicy, Point, Run, Size, Transform},
};

/// Configuration used when creating a [`RichText`].
#[derive(Clone, Debug, PartialEq)]
pub struct RichTextConfig {
    pub character_size: u32,
    pub font: Option<fontdb::ID>,
    /// Formatting cursor the block starts with.
    pub formatting: Formatting,
    /// Characters that end a line in appended text. They are not stored.
    pub linebreak_char: HashSet<char, fxhash::FxBuildHasher>,
    pub line_width_policy: LineWidthPolicy,
}

impl Default for RichTextConfig {
    fn default() -> Self {
        let mut linebreak_char: HashSet<char, fxhash::FxBuildHasher> = HashSet::default();
        linebreak_char.insert('\n');

        Self {
            character_size: 30,
            font: None,
            formatting: Formatting::default(),
            linebreak_char,
            line_width_policy: LineWidthPolicy::default(),
        }
    }
}

/// Multi-line block of text whose characters carry their own color, outline
/// and style.
///
/// Text is appended with the current formatting cursor (see
/// [`Self::with_color`] and friends); line breaks start new [`Line`]s. Any
/// character can later be addressed by `(line, offset)` to read or change
/// its color, style or content.
///
/// Font and character size are uniform over the whole block. All bounds are
/// recomputed eagerly through the `M` metrics provider, so they are always
/// consistent with the content when a method returns. A method that fails
/// leaves the block unchanged.
///
/// ```
/// use irodori::{Color, FixedMetrics, RichText};
///
/// let mut text = RichText::new(FixedMetrics::default());
/// text.append("Hi").with_color(Color::RED).append("!");
///
/// assert_eq!(text.character_color(0, 0).unwrap(), Color::WHITE);
/// assert_eq!(text.character_color(0, 2).unwrap(), Color::RED);
/// ```
#[derive(Clone, Debug)]
pub struct RichText<M> {
    metrics: M,
    lines: Vec<Line>,
    font: Option<fontdb::ID>,
    character_size: u32,
    formatting: Formatting,
    linebreak_char: HashSet<char, fxhash::FxBuildHasher>,
    line_width_policy: LineWidthPolicy,
    size: Size,
    position: Point,
}

impl<M: TextMetrics> RichText<M> {
    /// Creates an empty block with the default configuration.
    pub fn new(metrics: M) -> Self {
        Self::with_config(metrics, RichTextConfig::default())
    }

    /// Creates an empty block measured by `metrics`.
    pub fn with_config(metrics: M, config: RichTextConfig) -> Self {
        Self {
            metrics,
            lines: Vec::new(),
            font: config.font,
            character_size: config.character_size,
            formatting: config.formatting,
            linebreak_char: config.linebreak_char,
            line_width_policy: config.line_width_policy,
            size: Size::zero(),
            position: Point::origin(),
        }
    }

    pub fn metrics(&self) -> &M {
        &self.metrics
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn line(&self, line: usize) -> Result<&Line> {
        self.lines
            .get(line)
            .ok_or_else(|| RichTextError::line(line, self.lines.len()))
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn character_count(&self, line: usize) -> Result<usize> {
        self.line(line).map(Line::len)
    }

    pub fn font(&self) -> Option<fontdb::ID> {
        self.font
    }

    pub fn character_size(&self) -> u32 {
        self.character_size
    }

    pub fn line_width_policy(&self) -> LineWidthPolicy {
        self.line_width_policy
    }

    /// Bounds enclosing every line: widest line by summed line heights.
    pub fn local_bounds(&self) -> Bounds {
        Bounds::new(Point::origin(), self.size)
    }

    pub fn global_bounds(&self) -> Bounds {
        self.local_bounds().translate(self.position.to_vector())
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn set_position(&mut self, position: Point) {
        self.position = position;
    }
}

/// formatting cursor
///
/// These only affect text appended afterwards.
impl<M: TextMetrics> RichText<M> {
    pub fn formatting(&self) -> &Formatting {
        &self.formatting
    }

    pub fn set_formatting(&mut self, formatting: Formatting) -> &mut Self {
        self.formatting = formatting;
        self
    }

    /// Sets the fill color of upcoming text.
    pub fn with_color(&mut self, color: Color) -> &mut Self {
        self.formatting = self.formatting.with_fill(color);
        self
    }

    /// Sets the outline color and thickness of upcoming text.
    pub fn with_outline(&mut self, outline: Outline) -> &mut Self {
        self.formatting = self.formatting.with_outline(outline);
        self
    }

    /// Sets fill, outline color and outline thickness of upcoming text.
    pub fn with_stroke(&mut self, stroke: Stroke) -> &mut Self {
        self.formatting = self.formatting.with_stroke(stroke);
        self
    }

    pub fn with_style(&mut self, style: TextStyle) -> &mut Self {
        self.formatting = self.formatting.with_style(style);
        self
    }
}

/// appending
impl<M: TextMetrics> RichText<M> {
    /// Appends `text` with the current formatting.
    ///
    /// The text before the first line break extends the last line (creating
    /// it if the block is empty); every following piece starts a new line.
    /// Empty input is a no-op.
    pub fn append(&mut self, text: &str) -> &mut Self {
        if text.is_empty() {
            return self;
        }

        let pieces: Vec<&str> = text
            .split(|c: char| self.linebreak_char.contains(&c))
            .collect();

        for (index, piece) in pieces.into_iter().enumerate() {
            if index == 0 && !self.lines.is_empty() {
                let run = self.create_run(piece);
                if let Some(line) = self.lines.last_mut() {
                    line.append_run(run, &self.metrics);
                }
            } else {
                let mut line = self.create_line();
                line.append_run(self.create_run(piece), &self.metrics);
                self.lines.push(line);
            }
        }

        self.update_geometry();
        self
    }

    fn create_run(&self, content: &str) -> Run {
        Run::new(
            content,
            self.formatting,
            self.font,
            self.character_size,
        )
    }

    fn create_line(&self) -> Line {
        Line::new(
            self.font,
            self.character_size,
            self.line_width_policy,
            &self.metrics,
        )
    }
}

/// per-character access
impl<M: TextMetrics> RichText<M> {
    /// Runs `edit` on one line, then restacks the block.
    fn edit_line(
        &mut self,
        line: usize,
        edit: impl FnOnce(&mut Line, &M) -> Result<()>,
    ) -> Result<()> {
        let len = self.lines.len();
        let target = self
            .lines
            .get_mut(line)
            .ok_or_else(|| RichTextError::line(line, len))?;
        edit(target, &self.metrics)?;
        self.update_geometry();
        Ok(())
    }

    pub fn set_character_color(&mut self, line: usize, pos: usize, color: Color) -> Result<()> {
        self.edit_line(line, |target, metrics| {
            target.set_character_color(pos, color, metrics)
        })
    }

    pub fn set_character_style(&mut self, line: usize, pos: usize, style: TextStyle) -> Result<()> {
        self.edit_line(line, |target, metrics| {
            target.set_character_style(pos, style, metrics)
        })
    }

    /// Replaces one character with `replacement`, which may be empty or longer.
    ///
    /// Line break characters in `replacement` are stored as-is; they do not
    /// split the line.
    pub fn set_character(&mut self, line: usize, pos: usize, replacement: &str) -> Result<()> {
        self.edit_line(line, |target, metrics| {
            target.set_character(pos, replacement, metrics)
        })
    }

    pub fn character(&self, line: usize, pos: usize) -> Result<char> {
        self.line(line)?.character(pos)
    }

    pub fn character_color(&self, line: usize, pos: usize) -> Result<Color> {
        self.line(line)?.character_color(pos)
    }

    pub fn character_style(&self, line: usize, pos: usize) -> Result<TextStyle> {
        self.line(line)?.character_style(pos)
    }

    pub fn character_formatting(&self, line: usize, pos: usize) -> Result<Formatting> {
        self.line(line)?.character_formatting(pos)
    }

    /// Text of `line` without formatting.
    pub fn line_content(&self, line: usize) -> Result<String> {
        self.line(line).map(Line::content)
    }
}

/// block-wide changes
impl<M: TextMetrics> RichText<M> {
    /// Applies `size` to every run. Setting the current size is a no-op.
    pub fn set_character_size(&mut self, size: u32) {
        if self.character_size == size {
            return;
        }

        self.character_size = size;
        for line in &mut self.lines {
            line.set_character_size(size, &self.metrics);
        }
        self.update_geometry();

        log::debug!("Character size changed to {size}, {} lines relaid.", self.lines.len());
    }

    /// Applies `font` to every run. Setting the current font is a no-op.
    pub fn set_font(&mut self, font: fontdb::ID) {
        if self.font == Some(font) {
            return;
        }

        self.font = Some(font);
        for line in &mut self.lines {
            line.set_font(Some(font), &self.metrics);
        }
        self.update_geometry();

        log::debug!("Font changed to {font:?}, {} lines relaid.", self.lines.len());
    }

    /// Drops every line. The formatting cursor is kept.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.size = Size::zero();

        log::trace!("Rich text cleared.");
    }

    /// Stacks the lines top to bottom and recomputes the block size.
    fn update_geometry(&mut self) {
        let mut size = Size::zero();
        for line in &mut self.lines {
            line.set_position(Point::new(0.0, size.height));
            size.height += line.height();
            size.width = size.width.max(line.width());
        }
        self.size = size;
    }
}

impl<M: TextMetrics> RichText<M> {
    /// Draws every run, top line first.
    ///
    /// The block position is applied inside `transform`, then each line's
    /// position and each run's offset.
    pub fn draw(&self, renderer: &mut dyn RunRenderer, transform: &Transform) {
        let transform = transform.pre_translate(self.position.to_vector());
        for line in &self.lines {
            line.draw(renderer, &transform);
        }
    }
}
