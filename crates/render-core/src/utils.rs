use crate::types::{HAlign, ImagePlacement, VAlign};
use quire_types::{Rect, Size};

/// Scales `intrinsic` to fit inside the placement box, preserving aspect ratio,
/// and aligns the result within the box.
pub fn fit_image(intrinsic: Size, placement: &ImagePlacement) -> Rect {
    let bounds = placement.bounds;
    if intrinsic.is_empty() {
        return bounds;
    }
    let scale = (bounds.width / intrinsic.width).min(bounds.height / intrinsic.height);
    let width = intrinsic.width * scale;
    let height = intrinsic.height * scale;

    let x = match placement.h_align {
        HAlign::Left => bounds.x,
        HAlign::Center => bounds.x + (bounds.width - width) / 2.0,
        HAlign::Right => bounds.right() - width,
    };
    let y = match placement.v_align {
        VAlign::Top => bounds.y,
        VAlign::Center => bounds.y + (bounds.height - height) / 2.0,
        VAlign::Bottom => bounds.bottom() - height,
    };
    Rect::new(x, y, width, height)
}

/// Convert a y-down coordinate to PDF's y-up space (flip origin).
pub fn flip_y(y: f32, page_height: f32) -> f32 {
    page_height - y
}
