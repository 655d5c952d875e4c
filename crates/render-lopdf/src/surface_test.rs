#![cfg(test)]

use crate::PdfPageSurface;
use lopdf::Object;
use lopdf::content::Operation;
use quire_idf::InlineNode;
use quire_layout::{
    DecorationLine, FixedGlyphFont, FontRef, GlyphId, Glyph, GlyphPosition, LineBuilder, Paragraph,
    RunAttributes,
};
use quire_render_core::{ComposeConfig, FrameGuard, LinkTarget, Surface, render_paragraph};
use quire_style::DecorationStyle;
use quire_types::{Color, Point, Rect, Size};
use std::sync::Arc;

const A4: Size = Size {
    width: 595.0,
    height: 842.0,
};

fn operators(ops: &[Operation]) -> Vec<&str> {
    ops.iter().map(|op| op.operator.as_str()).collect()
}

fn floats(op: &Operation) -> Vec<f32> {
    op.operands.iter().map(|o| o.as_float().unwrap()).collect()
}

fn font() -> FontRef {
    Arc::new(FixedGlyphFont::default())
}

#[test]
fn page_starts_with_flip() {
    let surface = PdfPageSurface::new(A4);
    let first = &surface.operations()[0];
    assert_eq!(first.operator, "cm");
    assert_eq!(floats(first), vec![1.0, 0.0, 0.0, -1.0, 0.0, 842.0]);
}

#[test]
fn repeated_state_is_not_reemitted() {
    let mut surface = PdfPageSurface::new(A4);
    surface.fill_color(Color::BLACK);
    surface.fill_color(Color::BLACK);
    surface.fill_opacity(0.5);
    surface.fill_opacity(0.5);
    surface.select_font(&FixedGlyphFont::default(), 12.0);
    surface.select_font(&FixedGlyphFont::default(), 12.0);
    assert_eq!(operators(surface.operations()), vec!["cm", "rg", "gs", "Tf"]);
}

#[test]
fn restore_forgets_cached_state() {
    let mut surface = PdfPageSurface::new(A4);
    {
        let mut frame = FrameGuard::new(&mut surface);
        frame.fill_color(Color::rgb(255, 0, 0));
    }
    surface.fill_color(Color::rgb(255, 0, 0));
    assert_eq!(operators(surface.operations()), vec!["cm", "q", "rg", "Q", "rg"]);
}

#[test]
fn opacities_share_graphics_states() {
    let mut surface = PdfPageSurface::new(A4);
    surface.fill_opacity(0.5);
    surface.stroke_opacity(0.5);
    surface.fill_opacity(1.0);
    surface.fill_opacity(0.5);
    let output = surface.finish();
    let states = output
        .resources
        .get(b"ExtGState")
        .and_then(Object::as_dict)
        .unwrap();
    assert_eq!(states.len(), 3);
    let gs1 = states.get(b"GS1").and_then(Object::as_dict).unwrap();
    assert_eq!(gs1.get(b"ca").and_then(Object::as_float).unwrap(), 0.5);
    let gs2 = states.get(b"GS2").and_then(Object::as_dict).unwrap();
    assert_eq!(gs2.get(b"CA").and_then(Object::as_float).unwrap(), 0.5);
}

#[test]
fn glyphs_are_written_as_hex_ids() {
    let mut surface = PdfPageSurface::new(A4);
    surface.select_font(&FixedGlyphFont::default(), 10.0);
    let glyphs = vec![Glyph::new(GlyphId(0x0102)), Glyph::new(GlyphId(7))];
    let positions = vec![GlyphPosition::advance(6.0), GlyphPosition::advance(6.0)];
    surface
        .draw_glyphs(&glyphs, &positions, Point::new(10.0, 20.0))
        .unwrap();

    let ops = surface.operations();
    assert_eq!(
        operators(ops),
        vec!["cm", "Tf", "BT", "Tm", "Tj", "Tm", "Tj", "ET"]
    );
    assert_eq!(floats(&ops[5]), vec![1.0, 0.0, 0.0, -1.0, 16.0, 20.0]);
    assert_eq!(ops[4].operands[0].as_str().unwrap(), &[0x01, 0x02]);
    assert_eq!(ops[6].operands[0].as_str().unwrap(), &[0x00, 0x07]);
}

#[test]
fn drawing_without_font_fails() {
    let mut surface = PdfPageSurface::new(A4);
    let result = surface.draw_glyphs(&[Glyph::new(GlyphId(3))], &[GlyphPosition::advance(1.0)], Point::zero());
    assert!(result.is_err());
}

#[test]
fn link_rectangles_follow_translation() {
    let mut surface = PdfPageSurface::new(A4);
    {
        let mut frame = FrameGuard::new(&mut surface);
        frame.translate(50.0, 100.0);
        frame.link(
            Rect::new(0.0, -10.0, 20.0, 8.0),
            &LinkTarget::External("https://example.com".into()),
        );
    }
    let output = surface.finish();
    assert_eq!(output.annotations.len(), 1);
    let rect: Vec<f32> = output.annotations[0]
        .get(b"Rect")
        .and_then(Object::as_array)
        .unwrap()
        .iter()
        .map(|o| o.as_float().unwrap())
        .collect();
    // y-down [90, 98] on an 842pt page.
    assert_eq!(rect, vec![50.0, 744.0, 70.0, 752.0]);
}

#[test]
fn composed_paragraph_is_balanced() {
    let attrs = RunAttributes {
        fonts: vec![font()],
        font_size: 10.0,
        color: Some("navy".into()),
        link: Some("#top".into()),
        background_color: Some("#ffff0080".into()),
        ..Default::default()
    };
    let paragraph = Paragraph {
        lines: vec![
            LineBuilder::new(Rect::new(72.0, 72.0, 400.0, 12.0))
                .text("Hello", attrs.clone())
                .decoration(DecorationLine {
                    rect: Rect::new(0.0, 11.0, 25.0, 1.0),
                    style: DecorationStyle::WAVY,
                    color: "red".into(),
                    opacity: 0.8,
                })
                .build(),
        ],
        align_offset: 72.0,
    };
    let nodes = vec![InlineNode::text("Hel"), InlineNode::note("aside", None), InlineNode::text("lo")];

    let mut surface = PdfPageSurface::new(A4);
    render_paragraph(&mut surface, &paragraph, &nodes, &ComposeConfig::default());
    let output = surface.finish();

    let ops = operators(&output.content.operations);
    let saves = ops.iter().filter(|op| **op == "q").count();
    let restores = ops.iter().filter(|op| **op == "Q").count();
    assert_eq!(saves, restores);
    assert!(ops.contains(&"c"));
    assert!(ops.contains(&"Tj"));
    assert_eq!(output.annotations.len(), 2);
    assert!(output.resources.get(b"Font").is_ok());
    assert!(output.content.encode().is_ok());
}

#[test]
fn images_get_resource_names() {
    let mut surface = PdfPageSurface::new(A4);
    let image = quire_layout::ImageResource {
        uri: "logo.png".into(),
        width: 100.0,
        height: 50.0,
    };
    let placement = quire_render_core::ImagePlacement {
        bounds: Rect::new(0.0, -20.0, 20.0, 20.0),
        h_align: Default::default(),
        v_align: Default::default(),
    };
    surface.image(&image, &placement).unwrap();
    surface.image(&image, &placement).unwrap();
    let placed = surface
        .operations()
        .iter()
        .filter(|op| op.operator == "cm")
        .nth(1)
        .map(floats)
        .unwrap();
    assert_eq!(placed, vec![20.0, 0.0, 0.0, -10.0, 0.0, 0.0]);
    let output = surface.finish();
    assert_eq!(output.images.len(), 1);
    assert_eq!(output.images.get("Im1").map(String::as_str), Some("logo.png"));
}
