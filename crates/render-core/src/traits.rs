use crate::error::RenderError;
use crate::types::{ImagePlacement, LinkTarget, NoteMarker};
use quire_layout::{FontResource, Glyph, GlyphPosition, ImageResource};
use quire_types::{Color, Point, Rect};

/// The drawing primitives the compositor emits, in a y-down coordinate space.
///
/// A surface is a single mutable resource visited in strict program order.
/// `save`/`restore` must nest; the compositor only calls them through
/// [`FrameGuard`](crate::FrameGuard).
pub trait Surface {
    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, dx: f32, dy: f32);

    fn fill_color(&mut self, color: Color);
    fn fill_opacity(&mut self, opacity: f32);
    fn stroke_opacity(&mut self, opacity: f32);
    fn line_width(&mut self, width: f32);
    /// Sets a dash pattern with equal on and off lengths.
    fn dash(&mut self, length: f32);

    fn move_to(&mut self, x: f32, y: f32);
    fn line_to(&mut self, x: f32, y: f32);
    fn bezier_curve_to(&mut self, cp1: Point, cp2: Point, to: Point);
    fn rect(&mut self, rect: Rect);
    /// Fills the current path with the current fill color.
    fn fill(&mut self);
    /// Strokes the current path with `color`.
    fn stroke(&mut self, color: Color);

    fn fill_rect(&mut self, rect: Rect) {
        self.rect(rect);
        self.fill();
    }

    fn image(&mut self, image: &ImageResource, placement: &ImagePlacement) -> Result<(), RenderError>;

    fn select_font(&mut self, font: &dyn FontResource, size: f32);

    /// Draws `glyphs` starting at `origin`, moving the pen by each position after its glyph.
    fn draw_glyphs(
        &mut self,
        glyphs: &[Glyph],
        positions: &[GlyphPosition],
        origin: Point,
    ) -> Result<(), RenderError>;

    /// An invisible interactive region.
    fn link(&mut self, rect: Rect, target: &LinkTarget);

    fn note(&mut self, marker: &NoteMarker);
}
