use crate::document::Document;
use quire_render_core::{FrameGuard, Surface, render_paragraph};
use quire_render_lopdf::{PageOutput, PdfPageSurface};

/// Draws every paragraph of `document` onto `surface`, offset by the page origin.
pub fn compose_document<S: Surface + ?Sized>(surface: &mut S, document: &Document) {
    let origin = document.page.origin;
    let mut frame = FrameGuard::new(surface);
    frame.translate(origin.x, origin.y);
    for (index, composed) in document.paragraphs.iter().enumerate() {
        log::debug!("Composing paragraph {}", index);
        render_paragraph(&mut *frame, &composed.paragraph, &composed.content, &document.compose);
    }
}

/// Composes `document` onto a fresh PDF page.
pub fn compose_to_pdf(document: &Document) -> PageOutput {
    let mut surface = PdfPageSurface::new(document.page.size());
    compose_document(&mut surface, document);
    surface.finish()
}
