use crate::frame::FrameGuard;
use crate::traits::Surface;
use crate::types::{HAlign, ImagePlacement, VAlign};
use quire_layout::{Attachment, FontResource, Glyph, GlyphPosition};
use quire_types::Rect;

/// Draws `attachment` over every object-replacement glyph in `glyphs` and
/// blanks those glyphs with the font's space glyph.
///
/// The glyph count never changes. The advance accumulator resets after each
/// substitution because the frame has already been moved past it.
pub fn substitute_attachments<S: Surface + ?Sized>(
    surface: &mut S,
    font: &dyn FontResource,
    attachment: &Attachment,
    glyphs: &mut [Glyph],
    positions: &[GlyphPosition],
) {
    let placeholder = font.object_replacement_glyph();
    let space = font.space_glyph();
    let placement = ImagePlacement {
        bounds: Rect::new(0.0, -attachment.height, attachment.width, attachment.height),
        h_align: HAlign::Center,
        v_align: VAlign::Bottom,
    };

    let mut frame = FrameGuard::new(surface);
    let mut advance = 0.0;
    for (glyph, position) in glyphs.iter_mut().zip(positions) {
        advance += position.x_advance;
        if glyph.id != placeholder {
            continue;
        }

        frame.translate(advance, 0.0);
        {
            let mut image_frame = FrameGuard::new(&mut *frame);
            image_frame.translate(-attachment.width + attachment.x_offset, attachment.y_offset);
            if let Err(e) = image_frame.image(&attachment.image, &placement) {
                log::warn!("Failed to draw attachment '{}': {}", attachment.image.uri, e);
            }
        }

        *glyph = Glyph::with_code_point(space, 0x20);
        advance = 0.0;
    }
}
