use std::{collections::HashMap, path::PathBuf, sync::Arc};

use crate::text::Size;

/// Font database plus the `fontdue` faces loaded from it so far.
///
/// Faces are parsed lazily the first time a measurement asks for them and
/// kept for the lifetime of the storage.
pub struct FontStorage {
    /// This is the font set that has been loaded by fontdb.
    font_db: fontdb::Database,
    /// Parsed faces. Not all fonts in fontdb are necessarily loaded here.
    loaded_font: HashMap<fontdb::ID, Arc<fontdue::Font>, fxhash::FxBuildHasher>,
}

impl Default for FontStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl FontStorage {
    /// Creates a new empty font storage.
    pub fn new() -> Self {
        Self {
            font_db: fontdb::Database::new(),
            loaded_font: HashMap::with_hasher(fxhash::FxBuildHasher::default()),
        }
    }
}

/// Loading fonts into fontdb.
impl FontStorage {
    /// Loads a font from binary data.
    pub fn load_font_binary(&mut self, data: impl Into<Vec<u8>>) {
        self.font_db.load_font_data(data.into());
    }

    /// Loads a font from a file path.
    pub fn load_font_file(&mut self, path: PathBuf) -> Result<(), std::io::Error> {
        self.font_db.load_font_file(path)
    }

    /// Loads all fonts from a directory.
    pub fn load_fonts_dir(&mut self, dir: PathBuf) {
        self.font_db.load_fonts_dir(dir)
    }

    /// Loads the system fonts.
    pub fn load_system_fonts(&mut self) {
        self.font_db.load_system_fonts();
    }

    /// Removes a face by ID, dropping its parsed data too.
    pub fn remove_face(&mut self, id: fontdb::ID) {
        self.font_db.remove_face(id);
        self.loaded_font.remove(&id);
    }

    /// Checks if the storage is empty.
    pub fn is_empty(&self) -> bool {
        self.font_db.is_empty()
    }

    /// Returns the number of loaded faces.
    pub fn len(&self) -> usize {
        self.font_db.len()
    }
}

/// Get `Font`
impl FontStorage {
    /// Queries for a font matching the description.
    ///
    /// Returns the ID and the loaded font if found.
    pub fn query(&mut self, query: &fontdb::Query) -> Option<(fontdb::ID, Arc<fontdue::Font>)> {
        let id = self.font_db.query(query)?;
        self.font(id).map(|font| (id, font))
    }

    /// Retrieves a loaded font by ID, loading it if necessary.
    pub fn font(&mut self, id: fontdb::ID) -> Option<Arc<fontdue::Font>> {
        use std::collections::hash_map::Entry;

        match self.loaded_font.entry(id) {
            Entry::Occupied(entry) => Some(Arc::clone(entry.get())),
            Entry::Vacant(entry) => {
                let font_result = self.font_db.with_face_data(id, |data, index| {
                    fontdue::Font::from_bytes(
                        data,
                        fontdue::FontSettings {
                            collection_index: index,
                            scale: 40.0,
                            load_substitutions: true,
                        },
                    )
                })?;

                match font_result {
                    Ok(font) => {
                        let r: &mut Arc<fontdue::Font> = entry.insert(Arc::new(font));
                        Some(Arc::clone(r))
                    }
                    Err(e) => {
                        log::error!("Failed to load font (id: {:?}): {}", id, e);
                        None
                    }
                }
            }
        }
    }

    /// Returns an iterator over all available faces.
    pub fn faces(&self) -> impl Iterator<Item = &fontdb::FaceInfo> {
        self.font_db.faces()
    }

    /// Returns face info for an ID.
    pub fn face(&self, id: fontdb::ID) -> Option<&fontdb::FaceInfo> {
        self.font_db.face(id)
    }
}

/// Measuring
impl FontStorage {
    /// Distance between two baselines at `font_size`, gap included.
    pub fn line_spacing(&mut self, id: fontdb::ID, font_size: f32) -> Option<f32> {
        let font = self.font(id)?;
        font.horizontal_line_metrics(font_size)
            .map(|metrics| metrics.new_line_size)
    }

    /// Advance-based extent of `content` laid out on one line.
    ///
    /// The width is the sum of glyph advances, kerned between neighbors, so
    /// trailing whitespace counts. The height is the line spacing.
    pub fn measure_text(&mut self, id: fontdb::ID, font_size: f32, content: &str) -> Option<Size> {
        let font = self.font(id)?;
        let height = font
            .horizontal_line_metrics(font_size)
            .map(|metrics| metrics.new_line_size)
            .unwrap_or(0.0);

        let mut width = 0.0f32;
        let mut last_glyph: Option<u16> = None;
        for ch in content.chars() {
            let glyph_idx = font.lookup_glyph_index(ch);
            let metrics = font.metrics_indexed(glyph_idx, font_size);
            let kerning = last_glyph
                .and_then(|last| font.horizontal_kern_indexed(last, glyph_idx, font_size))
                .unwrap_or(0.0);

            width += metrics.advance_width + kerning;
            last_glyph = Some(glyph_idx);
        }

        Some(Size::new(width.max(0.0), height))
    }
}
