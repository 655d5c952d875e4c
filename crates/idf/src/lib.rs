//! Intermediate Document Format (IDF)
//!
//! The inline content of a paragraph as it existed before layout flattened it
//! into an attributed string. The compositor only reads this tree, to find
//! the character offsets at which floating notes are anchored.

use serde::{Deserialize, Serialize};

/// A string type for the document.
pub type TextStr = String;

/// A floating note attached to a position in the paragraph text.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteNode {
    /// The text shown when the note is opened.
    pub value: TextStr,
    /// Marker background color specification.
    #[serde(default)]
    pub background_color: Option<TextStr>,
}

/// Represents an inline-level element within a paragraph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum InlineNode {
    /// A run of plain text.
    Text { content: TextStr },
    /// A styled `<span>`.
    StyledSpan {
        #[serde(default)]
        children: Vec<InlineNode>,
    },
    /// A hyperlink `<a>`.
    Hyperlink {
        href: TextStr,
        #[serde(default)]
        children: Vec<InlineNode>,
    },
    /// An inline image; occupies one object-replacement character.
    Image { src: TextStr },
    /// A floating note; occupies no characters.
    Note(NoteNode),
    /// A soft line break.
    LineBreak,
}

impl InlineNode {
    pub fn text(content: impl Into<TextStr>) -> Self {
        InlineNode::Text {
            content: content.into(),
        }
    }

    pub fn span(children: Vec<InlineNode>) -> Self {
        InlineNode::StyledSpan { children }
    }

    pub fn image(src: impl Into<TextStr>) -> Self {
        InlineNode::Image { src: src.into() }
    }

    pub fn note(value: impl Into<TextStr>, background_color: Option<&str>) -> Self {
        InlineNode::Note(NoteNode {
            value: value.into(),
            background_color: background_color.map(str::to_string),
        })
    }

    /// Number of characters this node leaves in the flattened paragraph text.
    ///
    /// Images leave one object-replacement character, line breaks a `\n`.
    pub fn char_len(&self) -> usize {
        match self {
            InlineNode::Text { content } => content.chars().count(),
            InlineNode::Image { .. } | InlineNode::LineBreak => 1,
            InlineNode::Note(_) => 0,
            InlineNode::StyledSpan { children } | InlineNode::Hyperlink { children, .. } => {
                children.iter().map(InlineNode::char_len).sum()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn char_len_counts_scalar_values() {
        let nodes = vec![
            InlineNode::text("héllo"),
            InlineNode::note("n", None),
            InlineNode::span(vec![InlineNode::text("ab"), InlineNode::image("x.png")]),
            InlineNode::LineBreak,
        ];
        let lens: Vec<usize> = nodes.iter().map(InlineNode::char_len).collect();
        assert_eq!(lens, vec![5, 0, 3, 1]);
    }

    #[test]
    fn deserializes_tagged_json() {
        let json = r##"[
            {"type": "Text", "content": "Hi"},
            {"type": "Note", "value": "remember", "backgroundColor": "#ff0"},
            {"type": "Hyperlink", "href": "#top", "children": [{"type": "Image", "src": "a.png"}]},
            {"type": "LineBreak"}
        ]"##;
        let nodes: Vec<InlineNode> = serde_json::from_str(json).unwrap();
        assert_eq!(nodes.len(), 4);
        assert_eq!(nodes[1], InlineNode::note("remember", Some("#ff0")));
        assert!(matches!(&nodes[2], InlineNode::Hyperlink { children, .. } if children.len() == 1));
        assert_eq!(nodes[3], InlineNode::LineBreak);
    }
}
