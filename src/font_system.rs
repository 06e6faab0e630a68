use std::{path::PathBuf, sync::Arc};

use parking_lot::Mutex;

use crate::{
    font_storage::FontStorage,
    metrics::{TextMetrics, outline_padding},
    text::{Run, Size},
};

/// Shared font metrics backed by real font files.
///
/// Wraps a [`FontStorage`] in a `Mutex` so one system can serve many
/// [`RichText`](crate::text::RichText) blocks, typically as
/// `RichText<Arc<FontSystem>>` or `RichText<&FontSystem>`.
///
/// The field is public to allow direct access to the underlying storage when
/// necessary.
pub struct FontSystem {
    /// The underlying font storage.
    pub font_storage: Mutex<FontStorage>,
}

impl Default for FontSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl FontSystem {
    /// Creates a font system with an empty storage.
    pub fn new() -> Self {
        Self {
            font_storage: Mutex::new(FontStorage::new()),
        }
    }
}

/// font storage initialization
impl FontSystem {
    /// Loads the system fonts into the storage.
    pub fn load_system_fonts(&self) {
        self.font_storage.lock().load_system_fonts();
    }

    /// Loads a font from binary data.
    pub fn load_font_binary(&self, data: impl Into<Vec<u8>>) {
        self.font_storage.lock().load_font_binary(data);
    }

    /// Loads a font from a file path.
    pub fn load_font_file(&self, path: PathBuf) -> Result<(), std::io::Error> {
        self.font_storage.lock().load_font_file(path)
    }

    /// Loads all fonts from a directory.
    pub fn load_fonts_dir(&self, dir: PathBuf) {
        self.font_storage.lock().load_fonts_dir(dir)
    }

    /// Removes a face by ID.
    pub fn remove_face(&self, id: fontdb::ID) {
        self.font_storage.lock().remove_face(id);
    }

    pub fn is_empty(&self) -> bool {
        self.font_storage.lock().is_empty()
    }

    pub fn len(&self) -> usize {
        self.font_storage.lock().len()
    }
}

/// font querying
impl FontSystem {
    /// Queries for a font matching the description.
    pub fn query(&self, query: &fontdb::Query) -> Option<(fontdb::ID, Arc<fontdue::Font>)> {
        self.font_storage.lock().query(query)
    }

    /// Retrieves a loaded font by ID.
    pub fn font(&self, id: fontdb::ID) -> Option<Arc<fontdue::Font>> {
        self.font_storage.lock().font(id)
    }

    /// Returns a vec over all available faces.
    ///
    /// # Performance
    /// This method clones all face info to avoid holding a lock on the storage.
    /// If you need to iterate without allocation, lock `font_storage` directly.
    pub fn faces(&self) -> Vec<fontdb::FaceInfo> {
        self.font_storage.lock().faces().cloned().collect()
    }
}

impl TextMetrics for FontSystem {
    fn line_spacing(&self, font: Option<fontdb::ID>, character_size: u32) -> f32 {
        let Some(id) = font else {
            return 0.0;
        };

        self.font_storage
            .lock()
            .line_spacing(id, character_size as f32)
            .unwrap_or_else(|| {
                log::warn!("No line metrics for font (id: {:?}).", id);
                0.0
            })
    }

    fn measure(&self, run: &Run) -> Size {
        let Some(id) = run.font() else {
            log::warn!("Measured a run without a font: {:?}", run.content());
            return Size::zero();
        };

        let Some(mut size) =
            self.font_storage
                .lock()
                .measure_text(id, run.character_size() as f32, run.content())
        else {
            log::warn!("Measured a run with an unavailable font (id: {:?}).", id);
            return Size::zero();
        };

        size.width += outline_padding(run);
        size
    }
}
