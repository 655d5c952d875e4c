//! Floating note placement.
//!
//! Notes live in the inline tree, not in the laid-out lines. Each one is
//! anchored at the character offset where it appears in the flattened text;
//! that offset is then mapped back onto the lines to find a position.

use crate::config::ComposeConfig;
use crate::traits::Surface;
use crate::types::NoteMarker;
use quire_idf::{InlineNode, NoteNode};
use quire_layout::{AttributedLine, Paragraph};
use quire_style::resolve_color;
use quire_types::{Point, Rect};

/// A note together with the character offset it is anchored at.
#[derive(Debug, Clone, PartialEq)]
pub struct NoteAnchor {
    pub note: NoteNode,
    pub index: usize,
}

/// Walks `nodes` in document order starting the character counter at `start`.
///
/// Returns the notes found and the counter after the last node. Text advances
/// the counter by its character count, images and line breaks by one; a note
/// records the counter without advancing it.
pub fn collect_notes(nodes: &[InlineNode], start: usize) -> (Vec<NoteAnchor>, usize) {
    let mut anchors = Vec::new();
    let mut index = start;
    for node in nodes {
        match node {
            InlineNode::Note(note) => anchors.push(NoteAnchor {
                note: note.clone(),
                index,
            }),
            InlineNode::StyledSpan { children } | InlineNode::Hyperlink { children, .. } => {
                let (nested, next) = collect_notes(children, index);
                anchors.extend(nested);
                index = next;
            }
            leaf => index += leaf.char_len(),
        }
    }
    (anchors, index)
}

/// Maps a paragraph character offset to a point at the top of its line.
///
/// The x coordinate is measured from the start of the line's first run; the
/// line box only contributes its y.
///
/// Returns `None` when no line covers `index`, or when the covering line has
/// no box.
pub fn resolve_note_position(lines: &[AttributedLine], index: usize) -> Option<Point> {
    let mut offset = 0;
    for line in lines {
        let len = line.char_len();
        if (offset..offset + len).contains(&index) {
            let bounds = line.bounds?;
            let local = index - offset;
            let mut run_x = 0.0;
            for run in &line.runs {
                if run.range().contains(&local) {
                    let delta = run.advance_before(local - run.start);
                    return Some(Point::new(run_x + delta, bounds.y));
                }
                run_x += run.x_advance;
            }
            return None;
        }
        offset += len;
    }
    None
}

/// Where notes go when their offset cannot be resolved.
pub fn default_anchor(paragraph: &Paragraph) -> Point {
    let y = paragraph
        .lines
        .first()
        .and_then(|line| line.bounds)
        .map_or(0.0, |bounds| bounds.y);
    Point::new(paragraph.align_offset, y)
}

/// Resolves every note in `nodes` against the lines of `paragraph`.
pub fn locate_notes(paragraph: &Paragraph, nodes: &[InlineNode]) -> Vec<(NoteAnchor, Point)> {
    let (anchors, _) = collect_notes(nodes, 0);
    anchors
        .into_iter()
        .map(|anchor| {
            let position = resolve_note_position(&paragraph.lines, anchor.index).unwrap_or_else(|| {
                log::debug!("Note at offset {} is outside the laid-out text", anchor.index);
                default_anchor(paragraph)
            });
            (anchor, position)
        })
        .collect()
}

pub fn render_notes<S: Surface + ?Sized>(
    surface: &mut S,
    paragraph: &Paragraph,
    nodes: &[InlineNode],
    config: &ComposeConfig,
) {
    for (anchor, position) in locate_notes(paragraph, nodes) {
        let marker = NoteMarker {
            rect: Rect::new(position.x, position.y, config.note_size, config.note_size),
            contents: anchor.note.value,
            color: anchor
                .note
                .background_color
                .as_deref()
                .map(|spec| resolve_color(spec).value),
        };
        surface.note(&marker);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quire_layout::{GlyphPosition, Run};

    fn line(start_x: f32, y: f32, run_lengths: &[usize]) -> AttributedLine {
        let mut cursor = 0;
        let runs = run_lengths
            .iter()
            .map(|&len| {
                let run = Run {
                    positions: vec![GlyphPosition::advance(2.0); len],
                    start: cursor,
                    end: cursor + len,
                    x_advance: 2.0 * len as f32,
                    ..Default::default()
                };
                cursor += len;
                run
            })
            .collect();
        AttributedLine {
            runs,
            bounds: Some(Rect::new(start_x, y, 100.0, 12.0)),
            ..Default::default()
        }
    }

    #[test]
    fn note_index_is_offset_before_it() {
        let nodes = vec![
            InlineNode::span(vec![
                InlineNode::text("abcde"),
                InlineNode::note("first", None),
                InlineNode::text("fgh"),
            ]),
            InlineNode::image("pic.png"),
            InlineNode::note("second", Some("#ff0")),
        ];
        let (anchors, end) = collect_notes(&nodes, 0);
        assert_eq!(anchors.len(), 2);
        assert_eq!(anchors[0].index, 5);
        assert_eq!(anchors[1].index, 9);
        assert_eq!(end, 9);
    }

    #[test]
    fn nested_containers_thread_the_counter() {
        let nodes = vec![InlineNode::Hyperlink {
            href: "#x".into(),
            children: vec![InlineNode::span(vec![InlineNode::text("ab")]), InlineNode::note("n", None)],
        }];
        let (anchors, end) = collect_notes(&nodes, 10);
        assert_eq!(anchors[0].index, 12);
        assert_eq!(end, 12);
    }

    #[test]
    fn resolves_into_second_line() {
        let lines = vec![line(0.0, 0.0, &[10]), line(0.0, 14.0, &[4, 4])];
        // Local offset 2 in the second line, first run.
        assert_eq!(resolve_note_position(&lines, 12), Some(Point::new(4.0, 14.0)));
        // Local offset 5 is one glyph into the second run.
        assert_eq!(resolve_note_position(&lines, 15), Some(Point::new(10.0, 14.0)));
    }

    #[test]
    fn offset_past_all_lines_is_unresolved() {
        let lines = vec![line(0.0, 0.0, &[10]), line(0.0, 14.0, &[8])];
        assert_eq!(resolve_note_position(&lines, 20), None);
        assert_eq!(resolve_note_position(&lines, 18), None);
    }

    #[test]
    fn x_is_relative_to_the_first_run() {
        let lines = vec![line(30.0, 5.0, &[3])];
        assert_eq!(resolve_note_position(&lines, 1), Some(Point::new(2.0, 5.0)));
    }

    #[test]
    fn default_anchor_uses_alignment_and_first_line() {
        let paragraph = Paragraph {
            lines: vec![line(0.0, 40.0, &[1])],
            align_offset: 7.5,
        };
        assert_eq!(default_anchor(&paragraph), Point::new(7.5, 40.0));
        assert_eq!(default_anchor(&Paragraph::default()), Point::new(0.0, 0.0));
    }
}
