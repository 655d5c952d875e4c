//! Builds [`AttributedLine`]s from plain text.
//!
//! The mapping here is a naive one glyph per character through the font's cmap,
//! with no kerning, ligatures or bidi. It exists for fixtures, the CLI and
//! benchmarks; real paragraphs come from a layout engine.

use crate::elements::{AttributedLine, DecorationLine, Glyph, GlyphPosition, Run, RunAttributes};
use quire_types::Rect;

/// Maps `text` to a run whose character range starts at `start`.
pub fn shape_run(text: &str, start: usize, attributes: RunAttributes) -> Run {
    let char_count = text.chars().count();
    let size = attributes.font_size;
    let Some(font) = attributes.fonts.first().cloned() else {
        log::debug!("Run '{}' has no font; producing an empty glyph run", text);
        return Run {
            start,
            end: start + char_count,
            attributes,
            ..Default::default()
        };
    };

    let (glyphs, positions): (Vec<Glyph>, Vec<GlyphPosition>) = text
        .chars()
        .map(|c| {
            let id = font.glyph_for_code_point(c as u32);
            let advance = attributes
                .attachment
                .as_ref()
                .filter(|_| c == '\u{FFFC}')
                .map_or_else(|| font.advance_width(id, size), |att| att.width);
            (Glyph::with_code_point(id, c as u32), GlyphPosition::advance(advance))
        })
        .unzip();

    Run {
        x_advance: positions.iter().map(|p| p.x_advance).sum(),
        height: font.ascent(size),
        descent: font.descent(size),
        glyphs,
        positions,
        start,
        end: start + char_count,
        attributes,
    }
}

/// Assembles one line run by run, keeping character ranges contiguous.
#[derive(Debug, Default)]
pub struct LineBuilder {
    bounds: Option<Rect>,
    ascent: Option<f32>,
    overflow_right: f32,
    runs: Vec<Run>,
    decoration_lines: Vec<DecorationLine>,
    cursor: usize,
}

impl LineBuilder {
    pub fn new(bounds: Rect) -> Self {
        Self {
            bounds: Some(bounds),
            ..Default::default()
        }
    }

    /// A line with no box; the compositor skips it.
    pub fn unplaced() -> Self {
        Self::default()
    }

    /// Overrides the ascent; by default it is the tallest run's height.
    pub fn ascent(mut self, ascent: f32) -> Self {
        self.ascent = Some(ascent);
        self
    }

    pub fn overflow_right(mut self, overflow: f32) -> Self {
        self.overflow_right = overflow;
        self
    }

    pub fn text(mut self, text: &str, attributes: RunAttributes) -> Self {
        let run = shape_run(text, self.cursor, attributes);
        self.cursor = run.end;
        self.runs.push(run);
        self
    }

    /// Appends a prepared run, rebasing its range onto the end of the line.
    pub fn run(mut self, mut run: Run) -> Self {
        let len = run.char_len();
        run.start = self.cursor;
        run.end = self.cursor + len;
        self.cursor = run.end;
        self.runs.push(run);
        self
    }

    pub fn decoration(mut self, decoration: DecorationLine) -> Self {
        self.decoration_lines.push(decoration);
        self
    }

    pub fn build(self) -> AttributedLine {
        let ascent = self
            .ascent
            .unwrap_or_else(|| self.runs.iter().map(|r| r.height).fold(0.0, f32::max));
        AttributedLine {
            runs: self.runs,
            bounds: self.bounds,
            ascent,
            overflow_right: self.overflow_right,
            decoration_lines: self.decoration_lines,
        }
    }
}
