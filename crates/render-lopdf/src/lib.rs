//! A [`Surface`](quire_render_core::Surface) that writes PDF page content with lopdf.
//!
//! [`PdfPageSurface`] turns compositor calls into content-stream operations for
//! one page, interning the resources it references (fonts, images, opacity
//! graphics states) and collecting link and note annotations. Assembling the
//! page into a document is left to the caller.

mod helpers;
mod surface;

pub use helpers::{annotation_rect, link_annotation, note_annotation, pdf_text_string};
pub use surface::{PageOutput, PdfPageSurface};

#[cfg(test)]
mod surface_test;
