//! # Irodori
//!
//! Rich text blocks whose characters carry their own fill color, outline and
//! style, while the block still reads as one string addressed by
//! `(line, character)`.
//!
//! ## Overview
//!
//! A [`RichText`] is a list of [`Line`](text::Line)s; a line is a list of
//! [`Run`](text::Run)s, spans of characters that share one
//! [`Formatting`]. Appending text uses the current formatting cursor.
//! Formatting a single character later splits its run so the character gets
//! a run of its own.
//!
//! Bounds are kept up to date through a [`TextMetrics`] provider:
//! [`FontSystem`] for real fonts (via `fontdb` and `fontdue`),
//! [`FixedMetrics`] for monospace layout without font data. Drawing is left
//! to a [`RunRenderer`](renderer::RunRenderer), which receives every run with
//! its transform.
//!
//! ## Usage
//!
//! ```rust
//! use irodori::{Color, FixedMetrics, RichText, TextStyle};
//!
//! let mut text = RichText::new(FixedMetrics::default());
//! text.append("Hello, ")
//!     .with_color(Color::RED)
//!     .with_style(TextStyle::BOLD)
//!     .append("world\n!");
//!
//! assert_eq!(text.line_count(), 2);
//! assert_eq!(text.character(0, 7).unwrap(), 'w');
//!
//! text.set_character_color(0, 0, Color::GREEN).unwrap();
//! assert_eq!(text.character_color(0, 0).unwrap(), Color::GREEN);
//! assert_eq!(text.character_color(0, 1).unwrap(), Color::WHITE);
//! ```
//!
//! With system fonts:
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use irodori::{FontSystem, RichText, fontdb};
//!
//! let font_system = Arc::new(FontSystem::new());
//! font_system.load_system_fonts();
//!
//! let (font, _) = font_system
//!     .query(&fontdb::Query {
//!         families: &[fontdb::Family::SansSerif],
//!         ..Default::default()
//!     })
//!     .unwrap();
//!
//! let mut text = RichText::new(Arc::clone(&font_system));
//! text.set_font(font);
//! text.append("measured with real glyphs");
//! ```

pub mod color;
pub mod error;
pub mod font_storage;
pub mod font_system;
pub mod formatting;
pub mod metrics;
pub mod renderer;
pub mod style;
pub mod text;

// common re-exports
pub use color::Color;
pub use error::{IndexKind, Result, RichTextError};
pub use font_storage::FontStorage;
pub use font_system::FontSystem;
pub use formatting::{Formatting, Outline, Stroke};
pub use metrics::{FixedMetrics, TextMetrics};
pub use style::TextStyle;
pub use text::{RichText, RichTextConfig};

// re-export dependencies
pub use euclid;
pub use fontdb;
pub use fontdue;
pub use parking_lot;
