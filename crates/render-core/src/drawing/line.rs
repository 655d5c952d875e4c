use super::background::{background_rect, render_background};
use super::decoration::render_decoration_line;
use super::run::render_run;
use crate::frame::FrameGuard;
use crate::traits::Surface;
use quire_layout::{AttributedLine, Paragraph};

/// Draws one line: backgrounds and runs from the baseline, then decorations
/// from the line top. Lines without a box are skipped.
pub fn render_line<S: Surface + ?Sized>(surface: &mut S, line: &AttributedLine) {
    let Some(bounds) = line.bounds else {
        return;
    };

    {
        let mut frame = FrameGuard::new(surface);
        frame.translate(bounds.x, bounds.y + line.ascent);
        for (index, run) in line.runs.iter().enumerate() {
            if let Some(color) = &run.attributes.background_color {
                render_background(&mut *frame, background_rect(line, index, bounds.height), color);
            }
            render_run(&mut *frame, run);
        }
    }

    if line.decoration_lines.is_empty() {
        return;
    }
    let mut frame = FrameGuard::new(surface);
    frame.translate(bounds.x, bounds.y);
    for decoration in &line.decoration_lines {
        render_decoration_line(&mut *frame, decoration);
    }
}

pub fn render_block<S: Surface + ?Sized>(surface: &mut S, paragraph: &Paragraph) {
    for line in &paragraph.lines {
        render_line(surface, line);
    }
}
