use crate::frame::FrameGuard;
use crate::traits::Surface;
use quire_layout::DecorationLine;
use quire_style::{DecorationStyle, resolve_color};
use quire_types::Point;

/// Segment layout of a wavy decoration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveGeometry {
    /// Vertical distance of the control points from the center line.
    pub amplitude: f32,
    /// Half the horizontal span of one segment.
    pub step: f32,
    pub segments: usize,
}

/// Computes a wave whose segments exactly span `width`.
pub fn wave_geometry(width: f32, thickness: f32) -> WaveGeometry {
    let amplitude = thickness.max(2.0);
    let mut step = 1.1 * amplitude;
    let segments = (width / (2.0 * step)).floor().max(0.0) as usize;
    if segments > 0 {
        step += (width - segments as f32 * 2.0 * step) / segments as f32 / 2.0;
    }
    WaveGeometry {
        amplitude,
        step,
        segments,
    }
}

/// Strokes one decoration line. Coordinates are relative to the line top.
pub fn render_decoration_line<S: Surface + ?Sized>(surface: &mut S, decoration: &DecorationLine) {
    let rect = decoration.rect;
    let style = decoration.style;

    let mut frame = FrameGuard::new(surface);
    frame.line_width(rect.height);
    frame.stroke_opacity(decoration.opacity);

    if style.contains(DecorationStyle::DASHED) {
        frame.dash(3.0 * rect.height);
    } else if style.contains(DecorationStyle::DOTTED) {
        frame.dash(rect.height);
    }

    if style.contains(DecorationStyle::WAVY) {
        let wave = wave_geometry(rect.width, rect.height);
        let mut x = rect.x;
        frame.move_to(x, rect.y);
        for _ in 0..wave.segments {
            frame.bezier_curve_to(
                Point::new(x + wave.step, rect.y + wave.amplitude),
                Point::new(x + wave.step, rect.y - wave.amplitude),
                Point::new(x + 2.0 * wave.step, rect.y),
            );
            x += 2.0 * wave.step;
        }
    } else {
        frame.move_to(rect.x, rect.y);
        frame.line_to(rect.right(), rect.y);
        if style.contains(DecorationStyle::DOUBLE) {
            let y = rect.y + 2.0 * rect.height;
            frame.move_to(rect.x, y);
            frame.line_to(rect.right(), y);
        }
    }

    frame.stroke(resolve_color(&decoration.color).value);
}
