//! Annotation dictionaries and string encoding.

use lopdf::{Dictionary, Object, StringFormat, dictionary};
use quire_render_core::utils::flip_y;
use quire_render_core::{LinkTarget, NoteMarker};
use quire_types::{Color, Rect};

/// Converts a y-down rectangle, already offset to page space, into a PDF
/// `Rect` array `[llx lly urx ury]`.
pub fn annotation_rect(rect: Rect, page_height: f32) -> Vec<Object> {
    vec![
        rect.x.into(),
        flip_y(rect.bottom(), page_height).into(),
        rect.right().into(),
        flip_y(rect.y, page_height).into(),
    ]
}

/// Encodes `s` as a PDF text string: literal bytes when it is ASCII,
/// otherwise UTF-16BE with a byte order mark.
pub fn pdf_text_string(s: &str) -> Object {
    if s.is_ascii() {
        return Object::String(s.as_bytes().to_vec(), StringFormat::Literal);
    }
    let mut bytes = vec![0xFE, 0xFF];
    for unit in s.encode_utf16() {
        bytes.extend_from_slice(&unit.to_be_bytes());
    }
    Object::String(bytes, StringFormat::Hexadecimal)
}

fn color_array(color: Color) -> Vec<Object> {
    color.to_unit_rgb().into_iter().map(Object::from).collect()
}

pub fn link_annotation(rect: Rect, target: &LinkTarget, page_height: f32) -> Dictionary {
    let action = match target {
        LinkTarget::Internal(anchor) => dictionary! {
            "Type" => "Action",
            "S" => "GoTo",
            "D" => pdf_text_string(anchor.as_str()),
        },
        LinkTarget::External(uri) => dictionary! {
            "Type" => "Action",
            "S" => "URI",
            "URI" => Object::String(uri.as_bytes().to_vec(), StringFormat::Literal),
        },
    };
    dictionary! {
        "Type" => "Annot",
        "Subtype" => "Link",
        "Rect" => annotation_rect(rect, page_height),
        "Border" => vec![0.into(), 0.into(), 0.into()],
        "A" => action,
    }
}

pub fn note_annotation(marker: &NoteMarker, page_height: f32) -> Dictionary {
    let mut annot = dictionary! {
        "Type" => "Annot",
        "Subtype" => "Text",
        "Rect" => annotation_rect(marker.rect, page_height),
        "Contents" => pdf_text_string(&marker.contents),
        "Name" => "Comment",
        "Open" => false,
    };
    if let Some(color) = marker.color {
        annot.set("C", color_array(color));
    }
    annot
}

#[cfg(test)]
mod tests {
    use super::*;
    use quire_types::AnchorId;

    fn floats(objects: &[Object]) -> Vec<f32> {
        objects.iter().map(|o| o.as_float().unwrap()).collect()
    }

    #[test]
    fn rect_is_flipped_to_page_space() {
        let rect = annotation_rect(Rect::new(10.0, 20.0, 30.0, 5.0), 100.0);
        assert_eq!(floats(&rect), vec![10.0, 75.0, 40.0, 80.0]);
    }

    #[test]
    fn non_ascii_text_is_utf16() {
        assert!(matches!(
            pdf_text_string("\u{e9}"),
            Object::String(ref bytes, StringFormat::Hexadecimal) if bytes == &[0xFE, 0xFF, 0x00, 0xE9]
        ));
        assert!(matches!(
            pdf_text_string("ok"),
            Object::String(ref bytes, StringFormat::Literal) if bytes == b"ok"
        ));
    }

    #[test]
    fn internal_link_uses_goto() {
        let annot = link_annotation(Rect::default(), &LinkTarget::Internal(AnchorId::new("intro")), 842.0);
        let action = annot.get(b"A").and_then(Object::as_dict).unwrap();
        assert_eq!(action.get(b"S").and_then(Object::as_name).unwrap(), b"GoTo");
        assert_eq!(action.get(b"D").and_then(Object::as_str).unwrap(), b"intro");
    }

    #[test]
    fn external_link_uses_uri_action() {
        let target = LinkTarget::External("https://example.com".into());
        let annot = link_annotation(Rect::default(), &target, 842.0);
        let action = annot.get(b"A").and_then(Object::as_dict).unwrap();
        assert_eq!(action.get(b"S").and_then(Object::as_name).unwrap(), b"URI");
        assert_eq!(
            action.get(b"URI").and_then(Object::as_str).unwrap(),
            b"https://example.com"
        );
    }

    #[test]
    fn note_carries_color() {
        let marker = NoteMarker {
            rect: Rect::new(0.0, 0.0, 16.0, 16.0),
            contents: "hello".into(),
            color: Some(Color::rgb(255, 0, 0)),
        };
        let annot = note_annotation(&marker, 842.0);
        let color = annot.get(b"C").and_then(Object::as_array).unwrap();
        assert_eq!(floats(color), vec![1.0, 0.0, 0.0]);
        assert_eq!(annot.get(b"Subtype").and_then(Object::as_name).unwrap(), b"Text");
    }
}
