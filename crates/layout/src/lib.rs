//! The laid-out paragraph model.
//!
//! A layout engine breaks a paragraph into [`AttributedLine`]s made of [`Run`]s of
//! positioned glyphs. The compositor reads these structures once per render pass
//! and never mutates them.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FontError {
    #[error("Failed to read font file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Font data could not be parsed: {0}")]
    Parse(String),
}

pub mod builder;
pub mod elements;
pub mod fonts;

pub use self::builder::LineBuilder;
pub use self::elements::{
    Attachment, AttributedLine, DecorationLine, Glyph, GlyphId, GlyphPosition, ImageResource,
    Paragraph, Run, RunAttributes,
};
pub use self::fonts::{FixedGlyphFont, FontRef, FontResource, TtfFont};

// Re-export geometry types used by the model to prevent type mismatches
pub use quire_types::geometry::{Point, Rect, Size};
