/// A row of runs addressed by flat character offset.
pub mod line;
/// The multi-line rich text block and its configuration.
pub mod rich_text;
/// Uniformly formatted span of characters.
pub mod run;

pub use line::{Line, LineWidthPolicy};
pub use rich_text::{RichText, RichTextConfig};
pub use run::Run;

/// Axis-aligned box in layout space. **Y-axis goes down.**
pub type Bounds = euclid::default::Rect<f32>;
/// Width/height pair returned by measurement.
pub type Size = euclid::default::Size2D<f32>;
/// Position of a line inside its block, or of a block inside its parent.
pub type Point = euclid::default::Point2D<f32>;
/// Translation of a run inside its line.
pub type Offset = euclid::default::Vector2D<f32>;
/// Transform accumulated while drawing.
pub type Transform = euclid::default::Transform2D<f32>;
