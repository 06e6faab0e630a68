use bitflags::bitflags;

bitflags! {
    /// Style flags applied to a whole run.
    ///
    /// An empty set is the regular style. Flags combine with `|`.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct TextStyle: u8 {
        const BOLD           = 0b0001;
        const ITALIC         = 0b0010;
        const UNDERLINED     = 0b0100;
        const STRIKE_THROUGH = 0b1000;
    }
}

impl TextStyle {
    /// No decoration at all.
    pub const REGULAR: Self = Self::empty();

    pub fn is_regular(self) -> bool {
        self.is_empty()
    }
}
