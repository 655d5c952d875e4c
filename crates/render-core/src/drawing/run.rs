use super::attachment::substitute_attachments;
use crate::traits::Surface;
use crate::types::LinkTarget;
use quire_layout::Run;
use quire_style::resolve_optional_color;
use quire_types::{Point, Rect};

/// Draws one run at the current origin and leaves the frame advanced past it.
///
/// Runs without glyphs are a no-op. Runs without a font only advance the
/// frame, so the runs after them stay where layout put them.
pub fn render_run<S: Surface + ?Sized>(surface: &mut S, run: &Run) {
    if !run.has_glyphs() {
        return;
    }
    let Some(font) = run.font() else {
        log::debug!("Run {:?} has no font, skipping", run.range());
        surface.translate(run.x_advance, 0.0);
        return;
    };
    let attrs = &run.attributes;

    let color = resolve_optional_color(attrs.color.as_deref());
    surface.fill_color(color.value);
    surface.fill_opacity(attrs.opacity.unwrap_or(color.opacity));

    if let Some(link) = &attrs.link {
        let rect = Rect::new(0.0, -(run.height + run.descent), run.x_advance, run.height);
        surface.link(rect, &LinkTarget::classify(link));
    }

    // The run is shared layout output; substitution works on a copy.
    let mut glyphs = run.glyphs.clone();
    if let Some(attachment) = &attrs.attachment {
        substitute_attachments(surface, &**font, attachment, &mut glyphs, &run.positions);
    }

    surface.select_font(&**font, attrs.font_size);
    if let Err(e) = surface.draw_glyphs(&glyphs, &run.positions, Point::zero()) {
        log::error!("Failed to draw run {:?} in font '{}': {}", run.range(), font.name(), e);
    }

    surface.translate(run.x_advance, 0.0);
}
