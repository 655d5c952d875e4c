//! A surface that records every call it receives.
//!
//! Useful for tests, for debugging draw order, and for dry runs that only need
//! to know what would be drawn.

use crate::error::RenderError;
use crate::traits::Surface;
use crate::types::{ImagePlacement, LinkTarget, NoteMarker};
use quire_layout::{FontResource, Glyph, GlyphId, GlyphPosition, ImageResource};
use quire_types::{Color, Point, Rect, ResourceUri};

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Save,
    Restore,
    Translate { dx: f32, dy: f32 },
    FillColor(Color),
    FillOpacity(f32),
    StrokeOpacity(f32),
    LineWidth(f32),
    Dash(f32),
    MoveTo(Point),
    LineTo(Point),
    BezierCurveTo { cp1: Point, cp2: Point, to: Point },
    Rect(Rect),
    Fill,
    Stroke(Color),
    Image { uri: ResourceUri, placement: ImagePlacement },
    SelectFont { name: String, size: f32 },
    DrawGlyphs { glyphs: Vec<GlyphId>, advances: Vec<f32>, origin: Point },
    Link { rect: Rect, target: LinkTarget },
    Note(NoteMarker),
}

impl DrawCall {
    /// Whether the call puts marks on the page (as opposed to changing state).
    pub fn is_paint(&self) -> bool {
        matches!(
            self,
            DrawCall::Fill | DrawCall::Stroke(_) | DrawCall::Image { .. } | DrawCall::DrawGlyphs { .. }
        )
    }
}

#[derive(Debug, Default)]
pub struct RecordingSurface {
    calls: Vec<DrawCall>,
    /// Translation stack mirroring save/restore; the last entry is current.
    offsets: Vec<(f32, f32)>,
    depth: isize,
    min_depth: isize,
    /// `draw_glyphs` fails for any sequence containing this glyph.
    fail_on_glyph: Option<GlyphId>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self {
            offsets: vec![(0.0, 0.0)],
            ..Default::default()
        }
    }

    /// Makes `draw_glyphs` fail whenever the sequence contains `glyph`.
    pub fn failing_on(glyph: GlyphId) -> Self {
        Self {
            fail_on_glyph: Some(glyph),
            ..Self::new()
        }
    }

    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    pub fn into_calls(self) -> Vec<DrawCall> {
        self.calls
    }

    pub fn count(&self, pred: impl Fn(&DrawCall) -> bool) -> usize {
        self.calls.iter().filter(|c| pred(c)).count()
    }

    /// Current accumulated translation.
    pub fn translation(&self) -> (f32, f32) {
        self.offsets.last().copied().unwrap_or((0.0, 0.0))
    }

    /// True when every save had a matching restore and no restore came first.
    pub fn is_balanced(&self) -> bool {
        self.depth == 0 && self.min_depth >= 0
    }

    pub fn clear(&mut self) {
        *self = Self {
            fail_on_glyph: self.fail_on_glyph,
            ..Self::new()
        };
    }
}

impl Surface for RecordingSurface {
    fn save(&mut self) {
        self.depth += 1;
        self.offsets.push(self.translation());
        self.calls.push(DrawCall::Save);
    }

    fn restore(&mut self) {
        self.depth -= 1;
        self.min_depth = self.min_depth.min(self.depth);
        if self.offsets.len() > 1 {
            self.offsets.pop();
        }
        self.calls.push(DrawCall::Restore);
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        if let Some(top) = self.offsets.last_mut() {
            top.0 += dx;
            top.1 += dy;
        }
        self.calls.push(DrawCall::Translate { dx, dy });
    }

    fn fill_color(&mut self, color: Color) {
        self.calls.push(DrawCall::FillColor(color));
    }

    fn fill_opacity(&mut self, opacity: f32) {
        self.calls.push(DrawCall::FillOpacity(opacity));
    }

    fn stroke_opacity(&mut self, opacity: f32) {
        self.calls.push(DrawCall::StrokeOpacity(opacity));
    }

    fn line_width(&mut self, width: f32) {
        self.calls.push(DrawCall::LineWidth(width));
    }

    fn dash(&mut self, length: f32) {
        self.calls.push(DrawCall::Dash(length));
    }

    fn move_to(&mut self, x: f32, y: f32) {
        self.calls.push(DrawCall::MoveTo(Point::new(x, y)));
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.calls.push(DrawCall::LineTo(Point::new(x, y)));
    }

    fn bezier_curve_to(&mut self, cp1: Point, cp2: Point, to: Point) {
        self.calls.push(DrawCall::BezierCurveTo { cp1, cp2, to });
    }

    fn rect(&mut self, rect: Rect) {
        self.calls.push(DrawCall::Rect(rect));
    }

    fn fill(&mut self) {
        self.calls.push(DrawCall::Fill);
    }

    fn stroke(&mut self, color: Color) {
        self.calls.push(DrawCall::Stroke(color));
    }

    fn image(&mut self, image: &ImageResource, placement: &ImagePlacement) -> Result<(), RenderError> {
        self.calls.push(DrawCall::Image {
            uri: image.uri.clone(),
            placement: *placement,
        });
        Ok(())
    }

    fn select_font(&mut self, font: &dyn FontResource, size: f32) {
        self.calls.push(DrawCall::SelectFont {
            name: font.name().to_string(),
            size,
        });
    }

    fn draw_glyphs(
        &mut self,
        glyphs: &[Glyph],
        positions: &[GlyphPosition],
        origin: Point,
    ) -> Result<(), RenderError> {
        if let Some(bad) = self.fail_on_glyph {
            if glyphs.iter().any(|g| g.id == bad) {
                return Err(RenderError::Surface(format!("cannot draw glyph {}", bad.0)));
            }
        }
        self.calls.push(DrawCall::DrawGlyphs {
            glyphs: glyphs.iter().map(|g| g.id).collect(),
            advances: positions.iter().map(|p| p.x_advance).collect(),
            origin,
        });
        Ok(())
    }

    fn link(&mut self, rect: Rect, target: &LinkTarget) {
        self.calls.push(DrawCall::Link {
            rect,
            target: target.clone(),
        });
    }

    fn note(&mut self, marker: &NoteMarker) {
        self.calls.push(DrawCall::Note(marker.clone()));
    }
}
