use crate::{
    formatting::Formatting,
    text::{Run, Transform},
};

/// Receives runs during a draw traversal.
///
/// [`RichText::draw`](crate::text::RichText::draw) calls [`Self::draw_run`]
/// once per run, top line first and left to right, with the transform that
/// maps the run's own space to the caller's. Rasterization and batching are
/// up to the implementor.
///
/// Any `FnMut(&Run, &Transform)` closure is a renderer.
pub trait RunRenderer {
    fn draw_run(&mut self, run: &Run, transform: &Transform);
}

impl<F> RunRenderer for F
where
    F: FnMut(&Run, &Transform),
{
    fn draw_run(&mut self, run: &Run, transform: &Transform) {
        self(run, transform)
    }
}

/// One recorded [`RunRenderer::draw_run`] call.
#[derive(Clone, Debug, PartialEq)]
pub struct DrawCommand {
    pub content: String,
    pub formatting: Formatting,
    pub font: Option<fontdb::ID>,
    pub character_size: u32,
    pub transform: Transform,
}

/// Renderer that stores what it is asked to draw.
///
/// Handy to hand a frame to another thread, or to inspect a traversal.
#[derive(Clone, Debug, Default)]
pub struct DrawRecorder {
    pub commands: Vec<DrawCommand>,
}

impl DrawRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl RunRenderer for DrawRecorder {
    fn draw_run(&mut self, run: &Run, transform: &Transform) {
        self.commands.push(DrawCommand {
            content: run.content().to_owned(),
            formatting: *run.formatting(),
            font: run.font(),
            character_size: run.character_size(),
            transform: *transform,
        });
    }
}
