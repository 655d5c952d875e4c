//! Font resources as the compositor sees them.
//!
//! Glyph identifiers are font specific, so anything that compares glyphs against a
//! code point (the object-replacement placeholder, the space used to blank it) asks
//! the run's own font through [`FontResource::glyph_for_code_point`].

use crate::FontError;
use crate::elements::GlyphId;
use std::fmt;
use std::sync::Arc;

pub const SPACE: u32 = 0x20;
pub const OBJECT_REPLACEMENT: u32 = 0xFFFC;

/// The capability a font backend exposes to the compositor.
pub trait FontResource: fmt::Debug + Send + Sync {
    /// Stable name used to select the font on a surface (e.g. the PostScript name).
    fn name(&self) -> &str;

    /// Maps a code point to this font's glyph id; unmapped code points give `.notdef` (0).
    fn glyph_for_code_point(&self, code_point: u32) -> GlyphId;

    /// Horizontal advance of `glyph` at `font_size`.
    fn advance_width(&self, glyph: GlyphId, font_size: f32) -> f32;

    /// Distance from the baseline to the top of the em box at `font_size`.
    fn ascent(&self, font_size: f32) -> f32 {
        font_size * 0.8
    }

    /// Distance from the baseline to the bottom of the em box at `font_size`.
    fn descent(&self, font_size: f32) -> f32 {
        font_size * 0.2
    }

    fn space_glyph(&self) -> GlyphId {
        self.glyph_for_code_point(SPACE)
    }

    fn object_replacement_glyph(&self) -> GlyphId {
        self.glyph_for_code_point(OBJECT_REPLACEMENT)
    }
}

pub type FontRef = Arc<dyn FontResource>;

/// A TrueType/OpenType font backed by `ttf-parser`.
pub struct TtfFont {
    data: Arc<Vec<u8>>,
    index: u32,
    postscript_name: String,
    units_per_em: u16,
    ascender: i16,
    descender: i16,
}

impl fmt::Debug for TtfFont {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TtfFont")
            .field("postscript_name", &self.postscript_name)
            .field("data_len", &self.data.len())
            .finish()
    }
}

impl TtfFont {
    /// Parses the face at `index` in `data`, validating it once up front.
    pub fn from_bytes(data: Vec<u8>, index: u32) -> Result<Self, FontError> {
        let data = Arc::new(data);
        let (postscript_name, units_per_em, ascender, descender) = {
            let face = ttf_parser::Face::parse(&data, index).map_err(|e| FontError::Parse(e.to_string()))?;
            let name = face
                .names()
                .into_iter()
                .filter(|n| n.name_id == ttf_parser::name_id::POST_SCRIPT_NAME)
                .find_map(|n| n.to_string())
                .unwrap_or_else(|| format!("Font{}", index));
            (name, face.units_per_em(), face.ascender(), face.descender())
        };
        log::debug!("Loaded font '{}' ({} bytes, {} units/em)", postscript_name, data.len(), units_per_em);
        Ok(Self {
            data,
            index,
            postscript_name,
            units_per_em,
            ascender,
            descender,
        })
    }

    pub fn load(path: &str) -> Result<Self, FontError> {
        let data = std::fs::read(path).map_err(|source| FontError::Io {
            path: path.to_string(),
            source,
        })?;
        Self::from_bytes(data, 0)
    }

    /// Creates a lightweight Face view over the font data.
    fn as_face(&self) -> Option<ttf_parser::Face<'_>> {
        ttf_parser::Face::parse(&self.data, self.index).ok()
    }

    fn scale(&self, font_size: f32) -> f32 {
        font_size / self.units_per_em.max(1) as f32
    }

    pub fn data(&self) -> &Arc<Vec<u8>> {
        &self.data
    }
}

impl FontResource for TtfFont {
    fn name(&self) -> &str {
        &self.postscript_name
    }

    fn glyph_for_code_point(&self, code_point: u32) -> GlyphId {
        char::from_u32(code_point)
            .and_then(|c| self.as_face()?.glyph_index(c))
            .map_or(GlyphId(0), |g| GlyphId(g.0))
    }

    fn advance_width(&self, glyph: GlyphId, font_size: f32) -> f32 {
        self.as_face()
            .and_then(|face| face.glyph_hor_advance(ttf_parser::GlyphId(glyph.0)))
            .map_or(0.0, |adv| adv as f32 * self.scale(font_size))
    }

    fn ascent(&self, font_size: f32) -> f32 {
        self.ascender as f32 * self.scale(font_size)
    }

    fn descent(&self, font_size: f32) -> f32 {
        -(self.descender as f32) * self.scale(font_size)
    }
}

/// A synthetic monospaced font with a deterministic cmap.
///
/// Space maps to glyph 1 and U+FFFC to glyph 2; every other code point maps
/// to a glyph id of 3 or above. Used for fixtures, benchmarks and dry runs
/// where no font file is at hand.
#[derive(Debug, Clone)]
pub struct FixedGlyphFont {
    name: String,
    /// Advance of every glyph, in ems.
    advance_em: f32,
}

impl FixedGlyphFont {
    pub fn new(name: impl Into<String>, advance_em: f32) -> Self {
        Self {
            name: name.into(),
            advance_em,
        }
    }
}

impl Default for FixedGlyphFont {
    fn default() -> Self {
        Self::new("QuireMono", 0.5)
    }
}

impl FontResource for FixedGlyphFont {
    fn name(&self) -> &str {
        &self.name
    }

    fn glyph_for_code_point(&self, code_point: u32) -> GlyphId {
        match code_point {
            SPACE => GlyphId(1),
            OBJECT_REPLACEMENT => GlyphId(2),
            other => GlyphId((other % OBJECT_REPLACEMENT) as u16 + 3),
        }
    }

    fn advance_width(&self, _glyph: GlyphId, font_size: f32) -> f32 {
        self.advance_em * font_size
    }
}
