/// Which kind of index a [`RichTextError::IndexOutOfRange`] refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IndexKind {
    Line,
    Character,
}

impl std::fmt::Display for IndexKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Line => f.write_str("line"),
            Self::Character => f.write_str("character"),
        }
    }
}

/// Errors returned by [`Line`](crate::text::Line) and
/// [`RichText`](crate::text::RichText).
///
/// Every check runs before anything is mutated, so an error always leaves
/// the text untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RichTextError {
    #[error("{kind} index {index} out of range (length {len})")]
    IndexOutOfRange {
        kind: IndexKind,
        index: usize,
        len: usize,
    },
}

impl RichTextError {
    pub(crate) fn line(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange {
            kind: IndexKind::Line,
            index,
            len,
        }
    }

    pub(crate) fn character(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange {
            kind: IndexKind::Character,
            index,
            len,
        }
    }
}

pub type Result<T> = std::result::Result<T, RichTextError>;
