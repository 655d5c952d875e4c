use crate::frame::FrameGuard;
use crate::traits::Surface;
use quire_layout::AttributedLine;
use quire_style::resolve_color;
use quire_types::Rect;

/// The background box of run `index` in `line`, in the run's own frame.
///
/// It spans the full line box height starting at the top of the ascent. The
/// last run of a line is trimmed by the line's right overflow.
pub fn background_rect(line: &AttributedLine, index: usize, line_height: f32) -> Rect {
    let Some(run) = line.runs.get(index) else {
        return Rect::default();
    };
    let width = if index + 1 == line.runs.len() {
        run.x_advance - line.overflow_right
    } else {
        run.x_advance
    };
    Rect::new(0.0, -line.ascent, width, line_height)
}

pub fn render_background<S: Surface + ?Sized>(surface: &mut S, rect: Rect, color: &str) {
    let color = resolve_color(color);
    let mut frame = FrameGuard::new(surface);
    frame.fill_opacity(color.opacity);
    frame.fill_color(color.value);
    frame.fill_rect(rect);
}
