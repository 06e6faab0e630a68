use std::sync::Arc;

use crate::text::{Run, Size};

/// Font metrics needed to keep line and block bounds up to date.
///
/// Implementors only answer questions; they never see the line structure.
/// [`FontSystem`](crate::FontSystem) answers them from real fonts and
/// [`FixedMetrics`] from two constants.
pub trait TextMetrics {
    /// Vertical advance of one line of text at `character_size`.
    ///
    /// Lines use the floor of this value as their height contribution.
    fn line_spacing(&self, font: Option<fontdb::ID>, character_size: u32) -> f32;

    /// Rendered extent of the run's content with its font, size and outline.
    fn measure(&self, run: &Run) -> Size;
}

impl<T: TextMetrics + ?Sized> TextMetrics for &T {
    fn line_spacing(&self, font: Option<fontdb::ID>, character_size: u32) -> f32 {
        (**self).line_spacing(font, character_size)
    }

    fn measure(&self, run: &Run) -> Size {
        (**self).measure(run)
    }
}

impl<T: TextMetrics + ?Sized> TextMetrics for Arc<T> {
    fn line_spacing(&self, font: Option<fontdb::ID>, character_size: u32) -> f32 {
        (**self).line_spacing(font, character_size)
    }

    fn measure(&self, run: &Run) -> Size {
        (**self).measure(run)
    }
}

/// Horizontal room taken by the outline on both sides of a run.
pub(crate) fn outline_padding(run: &Run) -> f32 {
    2.0 * run.outline_thickness().max(0.0)
}

/// Monospace metrics that need no font data.
///
/// Every character advances by `advance * character_size` and a line is
/// `line_spacing * character_size` tall, whatever the font. Useful for
/// headless layout and for tests.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedMetrics {
    pub advance: f32,
    pub line_spacing: f32,
}

impl Default for FixedMetrics {
    fn default() -> Self {
        Self {
            advance: 0.5,
            line_spacing: 1.25,
        }
    }
}

impl FixedMetrics {
    pub fn new(advance: f32, line_spacing: f32) -> Self {
        Self {
            advance,
            line_spacing,
        }
    }
}

impl TextMetrics for FixedMetrics {
    fn line_spacing(&self, _font: Option<fontdb::ID>, character_size: u32) -> f32 {
        self.line_spacing * character_size as f32
    }

    fn measure(&self, run: &Run) -> Size {
        let size = run.character_size() as f32;
        Size::new(
            self.advance * size * run.len() as f32 + outline_padding(run),
            self.line_spacing * size,
        )
    }
}
