use crate::{color::Color, style::TextStyle};

/// Attribute set shared by every character of a run.
///
/// The same type serves as the formatting cursor of a
/// [`RichText`](crate::text::RichText): whatever it holds when text is
/// appended is copied into the new runs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Formatting {
    pub fill: Color,
    pub outline: Color,
    pub outline_thickness: f32,
    pub style: TextStyle,
}

impl Default for Formatting {
    fn default() -> Self {
        Self {
            fill: Color::WHITE,
            outline: Color::TRANSPARENT,
            outline_thickness: 0.0,
            style: TextStyle::REGULAR,
        }
    }
}

impl Formatting {
    pub fn with_fill(mut self, fill: Color) -> Self {
        self.fill = fill;
        self
    }

    pub fn with_outline(mut self, outline: Outline) -> Self {
        self.outline = outline.color;
        self.outline_thickness = outline.thickness;
        self
    }

    /// Replaces fill, outline color and outline thickness at once.
    ///
    /// The style flags are left untouched.
    pub fn with_stroke(mut self, stroke: Stroke) -> Self {
        self.fill = stroke.fill;
        self.outline = stroke.outline;
        self.outline_thickness = stroke.thickness;
        self
    }

    pub fn with_style(mut self, style: TextStyle) -> Self {
        self.style = style;
        self
    }

    pub fn outline(&self) -> Outline {
        Outline::new(self.outline, self.outline_thickness)
    }
}

/// Outline color and thickness pair.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Outline {
    pub color: Color,
    pub thickness: f32,
}

impl Outline {
    pub fn new(color: Color, thickness: f32) -> Self {
        Self { color, thickness }
    }
}

/// Fill and outline bundle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub fill: Color,
    pub outline: Color,
    pub thickness: f32,
}

impl Default for Stroke {
    fn default() -> Self {
        Self {
            fill: Color::WHITE,
            outline: Color::TRANSPARENT,
            thickness: 0.0,
        }
    }
}
