/// 8-bit RGBA color used for run fill and outline.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const RED: Self = Self::rgb(255, 0, 0);
    pub const GREEN: Self = Self::rgb(0, 255, 0);
    pub const BLUE: Self = Self::rgb(0, 0, 255);
    pub const YELLOW: Self = Self::rgb(255, 255, 0);
    pub const MAGENTA: Self = Self::rgb(255, 0, 255);
    pub const CYAN: Self = Self::rgb(0, 255, 255);
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);

    /// Opaque color from its red, green and blue components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Components normalized to `0.0..=1.0`, in `[r, g, b, a]` order.
    ///
    /// This is the layout GPU backends usually expect for vertex colors.
    pub fn to_f32_array(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a as f32 / 255.0,
        ]
    }
}

impl From<Color> for [f32; 4] {
    fn from(color: Color) -> Self {
        color.to_f32_array()
    }
}

#[cfg(feature = "palette")]
impl From<Color> for palette::Srgba<u8> {
    fn from(color: Color) -> Self {
        palette::Srgba::new(color.r, color.g, color.b, color.a)
    }
}

#[cfg(feature = "palette")]
impl From<palette::Srgba<u8>> for Color {
    fn from(color: palette::Srgba<u8>) -> Self {
        Self::rgba(color.red, color.green, color.blue, color.alpha)
    }
}
