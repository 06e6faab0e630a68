use crate::{
    color::Color,
    error::{Result, RichTextError},
    formatting::Formatting,
    metrics::TextMetrics,
    renderer::RunRenderer,
    style::TextStyle,
    text::{Bounds, Offset, Point, Run, Size, Transform},
};

/// How a line derives its width from its runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LineWidthPolicy {
    /// Legacy layout: each run is placed at the width computed so far, then
    /// the width is *replaced* by that run's measured width. A line with
    /// several runs therefore reports the width of its last run only.
    #[default]
    LastRun,
    /// Runs are placed side by side and the line width is the sum of their
    /// widths.
    Accumulate,
}

/// One row of a [`RichText`](crate::text::RichText).
///
/// A line owns an ordered list of [`Run`]s. Characters are addressed by a
/// flat 0-based offset over the concatenated run contents. Setting the color
/// or style of a single character splits its run so the character gets a
/// run of its own; runs are never merged back.
///
/// Bounds are recomputed eagerly on every mutation, so [`Self::local_bounds`]
/// is always consistent with the runs.
#[derive(Clone, Debug, PartialEq)]
pub struct Line {
    runs: Vec<Run>,
    size: Size,
    position: Point,
    font: Option<fontdb::ID>,
    character_size: u32,
    width_policy: LineWidthPolicy,
}

impl Line {
    /// Creates an empty line.
    ///
    /// `font` and `character_size` give the line its height while it holds no
    /// run, so blank rows still take vertical space.
    pub fn new<M: TextMetrics + ?Sized>(
        font: Option<fontdb::ID>,
        character_size: u32,
        width_policy: LineWidthPolicy,
        metrics: &M,
    ) -> Self {
        let mut line = Self {
            runs: Vec::new(),
            size: Size::zero(),
            position: Point::origin(),
            font,
            character_size,
            width_policy,
        };
        line.update_geometry(metrics);
        line
    }

    pub fn runs(&self) -> &[Run] {
        &self.runs
    }

    /// Number of characters over all runs.
    pub fn len(&self) -> usize {
        self.runs.iter().map(Run::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// The line's text with run boundaries removed.
    pub fn content(&self) -> String {
        self.runs.iter().map(Run::content).collect()
    }

    pub fn font(&self) -> Option<fontdb::ID> {
        self.font
    }

    pub fn character_size(&self) -> u32 {
        self.character_size
    }

    pub fn width_policy(&self) -> LineWidthPolicy {
        self.width_policy
    }

    pub fn position(&self) -> Point {
        self.position
    }

    /// Set by the owning block during layout.
    pub(crate) fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    pub fn width(&self) -> f32 {
        self.size.width
    }

    pub fn height(&self) -> f32 {
        self.size.height
    }

    /// Bounds in the line's own coordinate space.
    pub fn local_bounds(&self) -> Bounds {
        Bounds::new(Point::origin(), self.size)
    }

    /// Bounds translated by the line's position inside its block.
    pub fn global_bounds(&self) -> Bounds {
        self.local_bounds().translate(self.position.to_vector())
    }
}

/// run management
impl Line {
    /// Adds `run` after the last run and extends the bounds with it.
    ///
    /// Empty runs are dropped.
    pub fn append_run<M: TextMetrics + ?Sized>(&mut self, mut run: Run, metrics: &M) {
        if run.is_empty() {
            return;
        }

        if self.runs.is_empty() {
            // the blank-row height no longer applies
            self.size = Size::zero();
        }

        Self::place_run(&mut self.size, &mut run, self.width_policy, metrics);
        self.runs.push(run);
    }

    /// Applies `size` to every run and lays the line out again.
    pub fn set_character_size<M: TextMetrics + ?Sized>(&mut self, size: u32, metrics: &M) {
        self.character_size = size;
        for run in &mut self.runs {
            run.set_character_size(size);
        }
        self.update_geometry(metrics);
    }

    /// Applies `font` to every run and lays the line out again.
    pub fn set_font<M: TextMetrics + ?Sized>(&mut self, font: Option<fontdb::ID>, metrics: &M) {
        self.font = font;
        for run in &mut self.runs {
            run.set_font(font);
        }
        self.update_geometry(metrics);
    }

    /// Recomputes run offsets and the line size from scratch.
    fn update_geometry<M: TextMetrics + ?Sized>(&mut self, metrics: &M) {
        self.size = Size::zero();

        if self.runs.is_empty() {
            self.size.height = metrics
                .line_spacing(self.font, self.character_size)
                .floor();
            return;
        }

        for run in &mut self.runs {
            Self::place_run(&mut self.size, run, self.width_policy, metrics);
        }
    }

    fn place_run<M: TextMetrics + ?Sized>(
        size: &mut Size,
        run: &mut Run,
        policy: LineWidthPolicy,
        metrics: &M,
    ) {
        let measured = run.measure(metrics);
        let line_spacing = metrics
            .line_spacing(run.font(), run.character_size())
            .floor();

        run.set_local_offset(Offset::new(size.width, 0.0));
        size.height = size.height.max(line_spacing);
        size.width = match policy {
            LineWidthPolicy::LastRun => measured.width,
            LineWidthPolicy::Accumulate => size.width + measured.width,
        };
    }
}

/// character addressing
impl Line {
    /// Maps a line offset to `(run index, offset inside that run)`.
    fn locate(&self, pos: usize) -> Result<(usize, usize)> {
        let mut local = pos;
        for (index, run) in self.runs.iter().enumerate() {
            if local < run.len() {
                return Ok((index, local));
            }
            local -= run.len();
        }
        Err(RichTextError::character(pos, self.len()))
    }

    fn run_at(&self, pos: usize) -> Result<(&Run, usize)> {
        let (index, local) = self.locate(pos)?;
        Ok((&self.runs[index], local))
    }

    /// Gives the character at `pos` a run of its own and returns that run's index.
    ///
    /// The owning run is replaced, in place, by up to three runs with its
    /// formatting: the characters before `pos`, the character itself and the
    /// characters after it. A run that already holds a single character is
    /// left alone.
    fn isolate_character(&mut self, pos: usize) -> Result<usize> {
        let (index, local) = self.locate(pos)?;
        let run = &self.runs[index];
        if run.len() == 1 {
            return Ok(index);
        }

        let (prefix, target, suffix) = run.split_around(local);
        let target_index = index + usize::from(prefix.is_some());
        self.runs.splice(
            index..=index,
            prefix.into_iter().chain(Some(target)).chain(suffix),
        );

        Ok(target_index)
    }

    pub fn set_character_color<M: TextMetrics + ?Sized>(
        &mut self,
        pos: usize,
        color: Color,
        metrics: &M,
    ) -> Result<()> {
        let index = self.isolate_character(pos)?;
        self.runs[index].set_fill_color(color);
        self.update_geometry(metrics);
        Ok(())
    }

    pub fn set_character_style<M: TextMetrics + ?Sized>(
        &mut self,
        pos: usize,
        style: TextStyle,
        metrics: &M,
    ) -> Result<()> {
        let index = self.isolate_character(pos)?;
        self.runs[index].set_style(style);
        self.update_geometry(metrics);
        Ok(())
    }

    /// Replaces the character at `pos` with `replacement`, keeping the
    /// formatting of the run that owns it.
    ///
    /// The replacement may hold any number of characters. An empty
    /// replacement deletes the character, and the run with it if it was the
    /// run's last one.
    pub fn set_character<M: TextMetrics + ?Sized>(
        &mut self,
        pos: usize,
        replacement: &str,
        metrics: &M,
    ) -> Result<()> {
        let (index, local) = self.locate(pos)?;
        let run = &mut self.runs[index];
        run.replace_char(local, replacement);
        if run.is_empty() {
            self.runs.remove(index);
        }
        self.update_geometry(metrics);
        Ok(())
    }

    pub fn character(&self, pos: usize) -> Result<char> {
        let (run, local) = self.run_at(pos)?;
        run.char_at(local)
            .ok_or_else(|| RichTextError::character(pos, self.len()))
    }

    pub fn character_color(&self, pos: usize) -> Result<Color> {
        self.run_at(pos).map(|(run, _)| run.fill_color())
    }

    pub fn character_style(&self, pos: usize) -> Result<TextStyle> {
        self.run_at(pos).map(|(run, _)| run.style())
    }

    /// Full attribute set of the run owning `pos`.
    pub fn character_formatting(&self, pos: usize) -> Result<Formatting> {
        self.run_at(pos).map(|(run, _)| *run.formatting())
    }
}

impl Line {
    /// Hands every run to `renderer`, in reading order.
    ///
    /// `transform` maps the owning block's space; the line position and each
    /// run's offset are applied on top of it.
    pub fn draw(&self, renderer: &mut dyn RunRenderer, transform: &Transform) {
        let transform = transform.pre_translate(self.position.to_vector());
        for run in &self.runs {
            renderer.draw_run(run, &transform.pre_translate(run.local_offset()));
        }
    }
}

#[allow(clippy::unwrap_used)]
#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::IndexKind, metrics::FixedMetrics};

    // One unit per character at size 10, lines 15 tall.
    const METRICS: FixedMetrics = FixedMetrics {
        advance: 0.1,
        line_spacing: 1.5,
    };

    fn run(content: &str, fill: Color) -> Run {
        Run::new(content, Formatting::default().with_fill(fill), None, 10)
    }

    fn line_of(runs: &[(&str, Color)], policy: LineWidthPolicy) -> Line {
        let mut line = Line::new(None, 10, policy, &METRICS);
        for (content, fill) in runs {
            line.append_run(run(content, *fill), &METRICS);
        }
        line
    }

    fn contents(line: &Line) -> Vec<&str> {
        line.runs().iter().map(Run::content).collect()
    }

    #[test]
    fn test_empty_line_keeps_row_height() {
        let line = Line::new(None, 10, LineWidthPolicy::LastRun, &METRICS);
        assert_eq!(line.len(), 0);
        assert_eq!(line.local_bounds().size, Size::new(0.0, 15.0));
    }

    #[test]
    fn test_append_skips_empty_run() {
        let line = line_of(&[("", Color::RED)], LineWidthPolicy::LastRun);
        assert!(line.is_empty());
    }

    #[test]
    fn test_last_run_width_policy() {
        let line = line_of(
            &[("abcd", Color::WHITE), ("xy", Color::RED)],
            LineWidthPolicy::LastRun,
        );

        assert_eq!(line.len(), 6);
        assert_eq!(line.width(), 2.0);
        assert_eq!(line.height(), 15.0);
        assert_eq!(line.runs()[1].local_offset(), Offset::new(4.0, 0.0));
    }

    #[test]
    fn test_last_run_policy_places_third_run_at_previous_width() {
        let line = line_of(
            &[("abcd", Color::WHITE), ("xy", Color::RED), ("z", Color::BLUE)],
            LineWidthPolicy::LastRun,
        );

        assert_eq!(line.runs()[2].local_offset(), Offset::new(2.0, 0.0));
        assert_eq!(line.width(), 1.0);
    }

    #[test]
    fn test_accumulate_width_policy() {
        let line = line_of(
            &[("abcd", Color::WHITE), ("xy", Color::RED), ("z", Color::BLUE)],
            LineWidthPolicy::Accumulate,
        );

        assert_eq!(line.width(), 7.0);
        assert_eq!(line.runs()[2].local_offset(), Offset::new(6.0, 0.0));
    }

    #[test]
    fn test_height_is_floored_max_spacing() {
        let metrics = FixedMetrics::new(0.1, 1.25);
        let mut line = Line::new(None, 10, LineWidthPolicy::LastRun, &metrics);
        line.append_run(run("a", Color::WHITE), &metrics);
        line.append_run(Run::new("b", Formatting::default(), None, 2), &metrics);

        // max(floor(12.5), floor(2.5))
        assert_eq!(line.height(), 12.0);
    }

    #[test]
    fn test_isolate_middle_makes_three_runs() {
        let mut line = line_of(&[("abcde", Color::WHITE)], LineWidthPolicy::LastRun);
        line.set_character_color(2, Color::RED, &METRICS).unwrap();

        assert_eq!(contents(&line), ["ab", "c", "de"]);
        assert_eq!(line.len(), 5);
        assert_eq!(line.character_color(1).unwrap(), Color::WHITE);
        assert_eq!(line.character_color(2).unwrap(), Color::RED);
        assert_eq!(line.character_color(3).unwrap(), Color::WHITE);
    }

    #[test]
    fn test_isolate_edges_make_two_runs() {
        let mut line = line_of(&[("abc", Color::WHITE)], LineWidthPolicy::LastRun);
        line.set_character_style(0, TextStyle::BOLD, &METRICS).unwrap();
        assert_eq!(contents(&line), ["a", "bc"]);

        let mut line = line_of(&[("abc", Color::WHITE)], LineWidthPolicy::LastRun);
        line.set_character_style(2, TextStyle::BOLD, &METRICS).unwrap();
        assert_eq!(contents(&line), ["ab", "c"]);
        assert_eq!(line.character_style(2).unwrap(), TextStyle::BOLD);
        assert_eq!(line.character_style(1).unwrap(), TextStyle::REGULAR);
    }

    #[test]
    fn test_isolate_single_char_run_does_not_split() {
        let mut line = line_of(
            &[("ab", Color::WHITE), ("c", Color::WHITE), ("de", Color::WHITE)],
            LineWidthPolicy::LastRun,
        );
        line.set_character_color(2, Color::GREEN, &METRICS).unwrap();

        assert_eq!(contents(&line), ["ab", "c", "de"]);
        assert_eq!(line.character_color(2).unwrap(), Color::GREEN);
    }

    #[test]
    fn test_isolate_in_later_run_uses_local_offset() {
        let mut line = line_of(
            &[("ab", Color::WHITE), ("cdef", Color::BLUE)],
            LineWidthPolicy::LastRun,
        );
        line.set_character_color(4, Color::RED, &METRICS).unwrap();

        assert_eq!(contents(&line), ["ab", "cd", "e", "f"]);
        assert_eq!(line.character_color(3).unwrap(), Color::BLUE);
        assert_eq!(line.character_color(4).unwrap(), Color::RED);
        assert_eq!(line.content(), "abcdef");
    }

    #[test]
    fn test_set_character_replaces_in_owning_run() {
        let mut line = line_of(
            &[("ab", Color::WHITE), ("cd", Color::RED)],
            LineWidthPolicy::LastRun,
        );
        line.set_character(3, "XY", &METRICS).unwrap();

        assert_eq!(contents(&line), ["ab", "cXY"]);
        assert_eq!(line.character(4).unwrap(), 'Y');
        assert_eq!(line.character_color(4).unwrap(), Color::RED);
        assert_eq!(line.width(), 3.0);
    }

    #[test]
    fn test_set_character_empty_removes_drained_run() {
        let mut line = line_of(
            &[("ab", Color::WHITE), ("c", Color::RED)],
            LineWidthPolicy::LastRun,
        );
        line.set_character(2, "", &METRICS).unwrap();

        assert_eq!(contents(&line), ["ab"]);
        assert_eq!(line.len(), 2);
        assert!(line.runs().iter().all(|run| !run.is_empty()));
    }

    #[test]
    fn test_out_of_range_leaves_line_untouched() {
        let mut line = line_of(&[("abc", Color::WHITE)], LineWidthPolicy::LastRun);
        let before = line.clone();

        let err = line.set_character_color(3, Color::RED, &METRICS).unwrap_err();
        assert_eq!(
            err,
            RichTextError::IndexOutOfRange {
                kind: IndexKind::Character,
                index: 3,
                len: 3,
            }
        );
        assert!(line.set_character_style(9, TextStyle::BOLD, &METRICS).is_err());
        assert!(line.set_character(3, "x", &METRICS).is_err());
        assert!(line.character(3).is_err());
        assert_eq!(line, before);
    }

    #[test]
    fn test_set_character_size_relayouts() {
        let mut line = line_of(&[("abcd", Color::WHITE)], LineWidthPolicy::LastRun);
        line.set_character_size(20, &METRICS);

        assert_eq!(line.character_size(), 20);
        assert!(line.runs().iter().all(|run| run.character_size() == 20));
        assert_eq!(line.local_bounds().size, Size::new(8.0, 30.0));
    }

    #[test]
    fn test_global_bounds_follow_position() {
        let mut line = line_of(&[("ab", Color::WHITE)], LineWidthPolicy::LastRun);
        line.set_position(Point::new(0.0, 30.0));

        let bounds = line.global_bounds();
        assert_eq!(bounds.origin, Point::new(0.0, 30.0));
        assert_eq!(bounds.size, line.local_bounds().size);
    }

    #[test]
    fn test_draw_applies_line_and_run_offsets() {
        let mut line = line_of(
            &[("ab", Color::WHITE), ("c", Color::RED)],
            LineWidthPolicy::Accumulate,
        );
        line.set_position(Point::new(0.0, 15.0));

        let mut origins = Vec::new();
        let mut collect = |run: &Run, transform: &Transform| {
            origins.push((run.content().to_owned(), transform.transform_point(Point::origin())));
        };
        line.draw(&mut collect, &Transform::identity());

        assert_eq!(
            origins,
            [
                ("ab".to_owned(), Point::new(0.0, 15.0)),
                ("c".to_owned(), Point::new(2.0, 15.0)),
            ]
        );
    }
}
