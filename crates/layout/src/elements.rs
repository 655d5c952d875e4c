use crate::fonts::FontRef;
use quire_style::DecorationStyle;
use quire_types::{Rect, ResourceUri};
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// A font-specific glyph identifier. Only comparable within one font resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GlyphId(pub u16);

/// A shaped glyph. Equality is identifier equality.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Glyph {
    pub id: GlyphId,
    /// The code points this glyph was shaped from.
    #[serde(default)]
    pub code_points: Vec<u32>,
}

impl PartialEq for Glyph {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Glyph {}

impl Glyph {
    pub fn new(id: GlyphId) -> Self {
        Self {
            id,
            code_points: Vec::new(),
        }
    }

    pub fn with_code_point(id: GlyphId, code_point: u32) -> Self {
        Self {
            id,
            code_points: vec![code_point],
        }
    }
}

/// Pen movement applied after drawing the corresponding glyph.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlyphPosition {
    #[serde(default)]
    pub x_advance: f32,
    #[serde(default)]
    pub y_offset: f32,
}

impl GlyphPosition {
    pub fn advance(x_advance: f32) -> Self {
        Self {
            x_advance,
            y_offset: 0.0,
        }
    }
}

/// An image resource with its intrinsic pixel size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageResource {
    pub uri: ResourceUri,
    pub width: f32,
    pub height: f32,
}

/// An inline image drawn in place of a run's object-replacement glyph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    pub image: ImageResource,
    pub width: f32,
    pub height: f32,
    #[serde(default)]
    pub x_offset: f32,
    #[serde(default)]
    pub y_offset: f32,
}

/// The attribute bag shared by every glyph of a run.
#[derive(Debug, Clone)]
pub struct RunAttributes {
    /// Font fallback list. Only the first entry is used for metrics and drawing.
    pub fonts: Vec<FontRef>,
    pub font_size: f32,
    pub color: Option<String>,
    /// Explicit opacity; overrides the alpha encoded in `color`.
    pub opacity: Option<f32>,
    pub link: Option<String>,
    pub background_color: Option<String>,
    pub attachment: Option<Attachment>,
}

impl Default for RunAttributes {
    fn default() -> Self {
        Self {
            fonts: Vec::new(),
            font_size: 12.0,
            color: None,
            opacity: None,
            link: None,
            background_color: None,
            attachment: None,
        }
    }
}

/// A maximal span of glyphs sharing one attribute set.
#[derive(Debug, Clone, Default)]
pub struct Run {
    pub glyphs: Vec<Glyph>,
    /// Parallel to `glyphs`.
    pub positions: Vec<GlyphPosition>,
    /// Start of the run's character range, relative to the start of its line.
    pub start: usize,
    /// Exclusive end of the run's character range.
    pub end: usize,
    /// Total horizontal advance of the run.
    pub x_advance: f32,
    /// Height above the baseline.
    pub height: f32,
    pub descent: f32,
    pub attributes: RunAttributes,
}

impl Run {
    /// The font used for drawing; the first entry of the fallback list.
    pub fn font(&self) -> Option<&FontRef> {
        self.attributes.fonts.first()
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    pub fn char_len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Whether there is anything to draw.
    pub fn has_glyphs(&self) -> bool {
        !self.glyphs.is_empty() && !self.positions.is_empty()
    }

    /// Horizontal distance from the run origin to the glyph at `local_offset`
    /// characters into the run.
    pub fn advance_before(&self, local_offset: usize) -> f32 {
        self.positions
            .iter()
            .take(local_offset)
            .map(|p| p.x_advance)
            .sum()
    }
}

/// An underline or strike-through class stroke. `rect.height` is the stroke width.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecorationLine {
    pub rect: Rect,
    #[serde(default)]
    pub style: DecorationStyle,
    pub color: String,
    #[serde(default = "default_opacity")]
    pub opacity: f32,
}

fn default_opacity() -> f32 {
    1.0
}

/// One laid-out line of a paragraph.
#[derive(Debug, Clone, Default)]
pub struct AttributedLine {
    pub runs: Vec<Run>,
    /// The line box. Lines without one are not drawn.
    pub bounds: Option<Rect>,
    pub ascent: f32,
    /// Width of text overflowing the line box on the right.
    pub overflow_right: f32,
    pub decoration_lines: Vec<DecorationLine>,
}

impl AttributedLine {
    /// Number of characters the line covers: the end bound of its final run.
    pub fn char_len(&self) -> usize {
        self.runs.last().map_or(0, |run| run.end)
    }

    pub fn x_advance(&self) -> f32 {
        self.runs.iter().map(|run| run.x_advance).sum()
    }
}

/// A laid-out paragraph.
#[derive(Debug, Clone, Default)]
pub struct Paragraph {
    pub lines: Vec<AttributedLine>,
    /// Horizontal offset applied by text alignment.
    pub align_offset: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(start: usize, end: usize, advances: &[f32]) -> Run {
        Run {
            glyphs: advances.iter().map(|_| Glyph::new(GlyphId(1))).collect(),
            positions: advances.iter().copied().map(GlyphPosition::advance).collect(),
            start,
            end,
            x_advance: advances.iter().sum(),
            ..Default::default()
        }
    }

    #[test]
    fn glyph_equality_ignores_shaping_data() {
        assert_eq!(Glyph::with_code_point(GlyphId(4), 65), Glyph::new(GlyphId(4)));
        assert_ne!(Glyph::new(GlyphId(4)), Glyph::new(GlyphId(5)));
    }

    #[test]
    fn line_length_is_last_run_end() {
        let line = AttributedLine {
            runs: vec![run(0, 3, &[1.0, 1.0, 1.0]), run(3, 5, &[2.0, 2.0])],
            ..Default::default()
        };
        assert_eq!(line.char_len(), 5);
        assert_eq!(line.x_advance(), 7.0);
        assert_eq!(AttributedLine::default().char_len(), 0);
    }

    #[test]
    fn advance_before_sums_preceding_positions() {
        let r = run(0, 3, &[1.5, 2.0, 4.0]);
        assert_eq!(r.advance_before(0), 0.0);
        assert_eq!(r.advance_before(2), 3.5);
        assert_eq!(r.advance_before(10), 7.5);
    }

    #[test]
    fn decoration_line_from_json() {
        let json = r##"{"rect": {"x": 0, "y": 12, "width": 40, "height": 1}, "style": "wavy", "color": "#f00"}"##;
        let line: DecorationLine = serde_json::from_str(json).unwrap();
        assert_eq!(line.style, DecorationStyle::WAVY);
        assert_eq!(line.opacity, 1.0);
    }
}
