//! Quire composes laid-out paragraphs into drawing primitives.
//!
//! The compositor lives in [`quire_render_core`]; this crate ties it to JSON
//! documents and the lopdf page surface.

pub mod compose;
pub mod config;
pub mod document;
pub mod error;
pub mod output;

pub use compose::{compose_document, compose_to_pdf};
pub use config::PageConfig;
pub use document::{ComposedParagraph, Document, DocumentSpec};
pub use error::QuireError;

pub use quire_idf::InlineNode;
pub use quire_layout::{AttributedLine, FixedGlyphFont, FontResource, LineBuilder, Paragraph, Run, RunAttributes, TtfFont};
pub use quire_render_core::{ComposeConfig, DrawCall, RecordingSurface, RenderError, Surface, render_paragraph};
pub use quire_render_lopdf::{PageOutput, PdfPageSurface};
