//! The compositor passes.
//!
//! A paragraph is drawn line by line. Each line gets two independent frames:
//! one at the text baseline for backgrounds and glyph runs, one at the line
//! top for decoration lines. Floating notes are placed once all lines are down.

use crate::config::ComposeConfig;
use crate::traits::Surface;
use quire_idf::InlineNode;
use quire_layout::Paragraph;

pub mod attachment;
pub mod background;
pub mod decoration;
pub mod line;
pub mod notes;
pub mod run;

pub use line::{render_block, render_line};

/// Draws every line of `paragraph`, then the notes anchored in `nodes`.
///
/// `nodes` is the inline content the paragraph was laid out from; pass an
/// empty slice when there are no notes to place.
pub fn render_paragraph<S: Surface + ?Sized>(
    surface: &mut S,
    paragraph: &Paragraph,
    nodes: &[InlineNode],
    config: &ComposeConfig,
) {
    log::trace!("Rendering paragraph with {} line(s)", paragraph.lines.len());
    render_block(surface, paragraph);
    notes::render_notes(surface, paragraph, nodes, config);
}
