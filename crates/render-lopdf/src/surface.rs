use crate::helpers::{link_annotation, note_annotation};
use lopdf::content::{Content, Operation};
use lopdf::{Dictionary, Object, StringFormat, dictionary};
use quire_layout::{FontResource, Glyph, GlyphPosition, ImageResource};
use quire_render_core::utils::fit_image;
use quire_render_core::{ImagePlacement, LinkTarget, NoteMarker, RenderError, Surface};
use quire_types::{Color, Point, Rect, Size};
use std::collections::BTreeMap;

/// Cached graphics state, so redundant operators are not repeated.
/// Saved and restored together with the PDF graphics state.
#[derive(Debug, Default, Clone, PartialEq)]
struct PageState {
    fill_color: Option<Color>,
    stroke_color: Option<Color>,
    fill_alpha: Option<f32>,
    stroke_alpha: Option<f32>,
    /// Resource name and size.
    font: Option<(String, f32)>,
    /// Accumulated translation in the flipped page frame.
    offset: (f32, f32),
}

/// Alpha value and whether it applies to strokes.
type AlphaKey = (u32, bool);

/// Everything one composed page produced.
pub struct PageOutput {
    pub content: Content,
    /// The page `Resources` dictionary (`Font`, `ExtGState`, `XObject`).
    pub resources: Dictionary,
    pub annotations: Vec<Dictionary>,
    /// Image resource names mapped to the URIs they stand for.
    pub images: BTreeMap<String, String>,
}

/// A single PDF page as a drawing surface.
///
/// Coordinates coming in are y-down with the origin at the top-left of the
/// page; the first operation of the stream flips the CTM so they can be
/// written unchanged.
pub struct PdfPageSurface {
    page_size: Size,
    content: Content,
    state: PageState,
    saved: Vec<PageState>,
    /// PostScript name to resource name (`F1`, `F2`, ...).
    fonts: BTreeMap<String, String>,
    /// URI to resource name (`Im1`, ...).
    images: BTreeMap<String, String>,
    ext_gstates: BTreeMap<AlphaKey, String>,
    annotations: Vec<Dictionary>,
}

impl PdfPageSurface {
    pub fn new(page_size: Size) -> Self {
        let mut content = Content { operations: vec![] };
        content.operations.push(Operation::new(
            "cm",
            vec![1.into(), 0.into(), 0.into(), (-1).into(), 0.into(), page_size.height.into()],
        ));
        Self {
            page_size,
            content,
            state: PageState::default(),
            saved: Vec::new(),
            fonts: BTreeMap::new(),
            images: BTreeMap::new(),
            ext_gstates: BTreeMap::new(),
            annotations: Vec::new(),
        }
    }

    pub fn page_size(&self) -> Size {
        self.page_size
    }

    pub fn operations(&self) -> &[Operation] {
        &self.content.operations
    }

    pub fn annotations(&self) -> &[Dictionary] {
        &self.annotations
    }

    fn push(&mut self, operator: &str, operands: Vec<Object>) {
        self.content.operations.push(Operation::new(operator, operands));
    }

    fn rgb_operands(color: Color) -> Vec<Object> {
        color.to_unit_rgb().into_iter().map(Object::from).collect()
    }

    fn font_resource(&mut self, postscript_name: &str) -> String {
        let next = self.fonts.len() + 1;
        self.fonts
            .entry(postscript_name.to_string())
            .or_insert_with(|| format!("F{}", next))
            .clone()
    }

    fn image_resource(&mut self, uri: &str) -> String {
        let next = self.images.len() + 1;
        self.images
            .entry(uri.to_string())
            .or_insert_with(|| format!("Im{}", next))
            .clone()
    }

    fn set_alpha(&mut self, alpha: f32, stroke: bool) {
        let alpha = alpha.clamp(0.0, 1.0);
        let current = if stroke {
            &mut self.state.stroke_alpha
        } else {
            &mut self.state.fill_alpha
        };
        if *current == Some(alpha) {
            return;
        }
        *current = Some(alpha);

        let next = self.ext_gstates.len() + 1;
        let name = self
            .ext_gstates
            .entry((alpha.to_bits(), stroke))
            .or_insert_with(|| format!("GS{}", next))
            .clone();
        self.push("gs", vec![Object::Name(name.into_bytes())]);
    }

    /// Translates a rectangle in the current frame to page space (still y-down).
    fn to_page(&self, rect: Rect) -> Rect {
        rect.translate(self.state.offset.0, self.state.offset.1)
    }

    fn resources(&self) -> Dictionary {
        let mut resources = Dictionary::new();

        if !self.fonts.is_empty() {
            let mut fonts = Dictionary::new();
            for (postscript_name, name) in &self.fonts {
                fonts.set(
                    name.as_bytes(),
                    dictionary! {
                        "Type" => "Font",
                        "Subtype" => "Type0",
                        "BaseFont" => Object::Name(postscript_name.as_bytes().to_vec()),
                        "Encoding" => "Identity-H",
                    },
                );
            }
            resources.set("Font", fonts);
        }

        if !self.ext_gstates.is_empty() {
            let mut states = Dictionary::new();
            for ((bits, stroke), name) in &self.ext_gstates {
                let key = if *stroke { "CA" } else { "ca" };
                let mut state = dictionary! { "Type" => "ExtGState" };
                state.set(key, f32::from_bits(*bits));
                states.set(name.as_bytes(), state);
            }
            resources.set("ExtGState", states);
        }

        if !self.images.is_empty() {
            // Image data is supplied by the caller; only the names are reserved here.
            let mut xobjects = Dictionary::new();
            for (uri, name) in &self.images {
                xobjects.set(
                    name.as_bytes(),
                    Object::String(uri.as_bytes().to_vec(), StringFormat::Literal),
                );
            }
            resources.set("XObject", xobjects);
        }

        resources
    }

    pub fn finish(self) -> PageOutput {
        if !self.saved.is_empty() {
            log::warn!("Page finished with {} unrestored graphics state(s)", self.saved.len());
        }
        let resources = self.resources();
        PageOutput {
            content: self.content,
            resources,
            annotations: self.annotations,
            images: self.images.into_iter().map(|(uri, name)| (name, uri)).collect(),
        }
    }
}

impl Surface for PdfPageSurface {
    fn save(&mut self) {
        self.saved.push(self.state.clone());
        self.push("q", vec![]);
    }

    fn restore(&mut self) {
        match self.saved.pop() {
            Some(state) => {
                self.state = state;
                self.push("Q", vec![]);
            }
            None => log::warn!("Ignoring restore without a matching save"),
        }
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        self.state.offset.0 += dx;
        self.state.offset.1 += dy;
        self.push(
            "cm",
            vec![1.into(), 0.into(), 0.into(), 1.into(), dx.into(), dy.into()],
        );
    }

    fn fill_color(&mut self, color: Color) {
        if self.state.fill_color != Some(color) {
            self.push("rg", Self::rgb_operands(color));
            self.state.fill_color = Some(color);
        }
    }

    fn fill_opacity(&mut self, opacity: f32) {
        self.set_alpha(opacity, false);
    }

    fn stroke_opacity(&mut self, opacity: f32) {
        self.set_alpha(opacity, true);
    }

    fn line_width(&mut self, width: f32) {
        self.push("w", vec![width.into()]);
    }

    fn dash(&mut self, length: f32) {
        self.push("d", vec![vec![length.into(), length.into()].into(), 0.into()]);
    }

    fn move_to(&mut self, x: f32, y: f32) {
        self.push("m", vec![x.into(), y.into()]);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.push("l", vec![x.into(), y.into()]);
    }

    fn bezier_curve_to(&mut self, cp1: Point, cp2: Point, to: Point) {
        self.push(
            "c",
            vec![cp1.x.into(), cp1.y.into(), cp2.x.into(), cp2.y.into(), to.x.into(), to.y.into()],
        );
    }

    fn rect(&mut self, rect: Rect) {
        self.push(
            "re",
            vec![rect.x.into(), rect.y.into(), rect.width.into(), rect.height.into()],
        );
    }

    fn fill(&mut self) {
        self.push("f", vec![]);
    }

    fn stroke(&mut self, color: Color) {
        if self.state.stroke_color != Some(color) {
            self.push("RG", Self::rgb_operands(color));
            self.state.stroke_color = Some(color);
        }
        self.push("S", vec![]);
    }

    fn image(&mut self, image: &ImageResource, placement: &ImagePlacement) -> Result<(), RenderError> {
        let intrinsic = Size::new(image.width, image.height);
        if intrinsic.is_empty() {
            return Err(RenderError::Image {
                uri: image.uri.to_string(),
                reason: "image has no intrinsic size".into(),
            });
        }
        let rect = fit_image(intrinsic, placement);
        let name = self.image_resource(image.uri.as_str());
        // The unit square is mapped bottom-up, hence the negative height.
        self.push("q", vec![]);
        self.push(
            "cm",
            vec![
                rect.width.into(),
                0.into(),
                0.into(),
                (-rect.height).into(),
                rect.x.into(),
                rect.bottom().into(),
            ],
        );
        self.push("Do", vec![Object::Name(name.into_bytes())]);
        self.push("Q", vec![]);
        Ok(())
    }

    fn select_font(&mut self, font: &dyn FontResource, size: f32) {
        let name = self.font_resource(font.name());
        if self.state.font.as_ref() != Some(&(name.clone(), size)) {
            self.push("Tf", vec![Object::Name(name.as_bytes().to_vec()), size.into()]);
            self.state.font = Some((name, size));
        }
    }

    fn draw_glyphs(
        &mut self,
        glyphs: &[Glyph],
        positions: &[GlyphPosition],
        origin: Point,
    ) -> Result<(), RenderError> {
        if self.state.font.is_none() {
            return Err(RenderError::Surface("no font selected before drawing glyphs".into()));
        }
        self.push("BT", vec![]);
        let mut x = origin.x;
        for (glyph, position) in glyphs.iter().zip(positions) {
            let y = origin.y - position.y_offset;
            // Text space is flipped back upright inside the y-down page frame.
            self.push(
                "Tm",
                vec![1.into(), 0.into(), 0.into(), (-1).into(), x.into(), y.into()],
            );
            self.push(
                "Tj",
                vec![Object::String(glyph.id.0.to_be_bytes().to_vec(), StringFormat::Hexadecimal)],
            );
            x += position.x_advance;
        }
        self.push("ET", vec![]);
        Ok(())
    }

    fn link(&mut self, rect: Rect, target: &LinkTarget) {
        let page_rect = self.to_page(rect);
        self.annotations
            .push(link_annotation(page_rect, target, self.page_size.height));
    }

    fn note(&mut self, marker: &NoteMarker) {
        let placed = NoteMarker {
            rect: self.to_page(marker.rect),
            ..marker.clone()
        };
        self.annotations.push(note_annotation(&placed, self.page_size.height));
    }
}
