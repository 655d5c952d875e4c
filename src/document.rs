//! JSON paragraph documents.
//!
//! A document lists fonts, then paragraphs whose lines are given run by run as
//! plain text. Runs are mapped to glyphs through their font's cmap, one glyph
//! per character, which is enough for fixtures and previews of laid-out text.
//!
//! ```json
//! {
//!   "page": { "origin": { "x": 72, "y": 72 } },
//!   "fonts": { "body": { "path": "fonts/Body.ttf" } },
//!   "paragraphs": [{
//!     "content": [{ "type": "Text", "content": "Hello" }],
//!     "lines": [{
//!       "box": { "x": 0, "y": 0, "width": 400, "height": 14 },
//!       "runs": [{ "text": "Hello", "fonts": ["body"], "fontSize": 12 }]
//!     }]
//!   }]
//! }
//! ```

use crate::config::PageConfig;
use crate::error::QuireError;
use quire_idf::InlineNode;
use quire_layout::{
    Attachment, AttributedLine, DecorationLine, FixedGlyphFont, FontRef, LineBuilder, Paragraph, RunAttributes,
    TtfFont,
};
use quire_render_core::ComposeConfig;
use quire_types::Rect;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// The font key runs fall back to when they name none.
pub const DEFAULT_FONT: &str = "default";

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum FontSource {
    /// A TrueType/OpenType file, relative to the document.
    File { path: PathBuf },
    /// The built-in monospaced font.
    Builtin {
        builtin: String,
        #[serde(default = "default_advance", rename = "advanceEm")]
        advance_em: f32,
    },
}

fn default_advance() -> f32 {
    0.5
}

fn default_font_size() -> f32 {
    12.0
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunSpec {
    pub text: String,
    /// Font keys; only the first is used.
    #[serde(default)]
    pub fonts: Vec<String>,
    #[serde(default = "default_font_size")]
    pub font_size: f32,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub opacity: Option<f32>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub background_color: Option<String>,
    #[serde(default)]
    pub attachment: Option<Attachment>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineSpec {
    /// Line box relative to the page origin; lines without one are not drawn.
    #[serde(default, rename = "box")]
    pub bounds: Option<Rect>,
    /// Defaults to the tallest run's ascent.
    #[serde(default)]
    pub ascent: Option<f32>,
    #[serde(default)]
    pub overflow_right: f32,
    #[serde(default)]
    pub runs: Vec<RunSpec>,
    #[serde(default)]
    pub decorations: Vec<DecorationLine>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParagraphSpec {
    #[serde(default)]
    pub align_offset: f32,
    /// The inline content the lines were laid out from; read for notes.
    #[serde(default)]
    pub content: Vec<InlineNode>,
    #[serde(default)]
    pub lines: Vec<LineSpec>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentSpec {
    #[serde(default)]
    pub page: PageConfig,
    #[serde(default)]
    pub compose: ComposeConfig,
    #[serde(default)]
    pub fonts: BTreeMap<String, FontSource>,
    #[serde(default)]
    pub paragraphs: Vec<ParagraphSpec>,
}

/// A paragraph ready for the compositor, with the inline tree it came from.
#[derive(Debug, Clone)]
pub struct ComposedParagraph {
    pub paragraph: Paragraph,
    pub content: Vec<InlineNode>,
}

#[derive(Debug, Clone)]
pub struct Document {
    pub page: PageConfig,
    pub compose: ComposeConfig,
    pub paragraphs: Vec<ComposedParagraph>,
}

impl Document {
    pub fn from_json(json: &str) -> Result<Self, QuireError> {
        let spec: DocumentSpec = serde_json::from_str(json)?;
        Self::from_spec(spec, Path::new("."))
    }

    /// Loads a document file; font paths resolve against its directory.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, QuireError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let spec: DocumentSpec = serde_json::from_str(&json)?;
        let base = path.parent().unwrap_or_else(|| Path::new("."));
        Self::from_spec(spec, base)
    }

    pub fn from_spec(spec: DocumentSpec, base: &Path) -> Result<Self, QuireError> {
        let fonts = load_fonts(&spec.fonts, base)?;
        let paragraphs = spec
            .paragraphs
            .into_iter()
            .map(|p| build_paragraph(p, &fonts))
            .collect::<Result<Vec<_>, _>>()?;
        log::debug!("Loaded document with {} paragraph(s) and {} font(s)", paragraphs.len(), fonts.len());
        Ok(Self {
            page: spec.page,
            compose: spec.compose,
            paragraphs,
        })
    }
}

fn load_fonts(sources: &BTreeMap<String, FontSource>, base: &Path) -> Result<BTreeMap<String, FontRef>, QuireError> {
    let mut fonts: BTreeMap<String, FontRef> = BTreeMap::new();
    for (key, source) in sources {
        let font: FontRef = match source {
            FontSource::File { path } => {
                let full = base.join(path);
                Arc::new(TtfFont::load(&full.to_string_lossy())?)
            }
            FontSource::Builtin { builtin, advance_em } => Arc::new(FixedGlyphFont::new(builtin.clone(), *advance_em)),
        };
        fonts.insert(key.clone(), font);
    }
    fonts
        .entry(DEFAULT_FONT.to_string())
        .or_insert_with(|| Arc::new(FixedGlyphFont::default()));
    Ok(fonts)
}

fn build_paragraph(spec: ParagraphSpec, fonts: &BTreeMap<String, FontRef>) -> Result<ComposedParagraph, QuireError> {
    let lines = spec
        .lines
        .into_iter()
        .map(|line| -> Result<AttributedLine, QuireError> {
            let mut builder = match line.bounds {
                Some(bounds) => LineBuilder::new(bounds),
                None => LineBuilder::unplaced(),
            };
            if let Some(ascent) = line.ascent {
                builder = builder.ascent(ascent);
            }
            builder = builder.overflow_right(line.overflow_right);
            for run in line.runs {
                let attributes = run_attributes(&run, fonts)?;
                builder = builder.text(&run.text, attributes);
            }
            for decoration in line.decorations {
                builder = builder.decoration(decoration);
            }
            Ok(builder.build())
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ComposedParagraph {
        paragraph: Paragraph {
            lines,
            align_offset: spec.align_offset,
        },
        content: spec.content,
    })
}

fn run_attributes(run: &RunSpec, fonts: &BTreeMap<String, FontRef>) -> Result<RunAttributes, QuireError> {
    let keys: Vec<&str> = if run.fonts.is_empty() {
        vec![DEFAULT_FONT]
    } else {
        run.fonts.iter().map(String::as_str).collect()
    };
    let resolved = keys
        .into_iter()
        .map(|key| {
            fonts
                .get(key)
                .cloned()
                .ok_or_else(|| QuireError::Document(format!("run '{}' uses unknown font '{}'", run.text, key)))
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(RunAttributes {
        fonts: resolved,
        font_size: run.font_size,
        color: run.color.clone(),
        opacity: run.opacity,
        link: run.link.clone(),
        background_color: run.background_color.clone(),
        attachment: run.attachment.clone(),
    })
}
