use quire_types::{AnchorId, Color, Rect};

/// Where an interactive region leads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkTarget {
    /// A destination in the same document (`#name` links).
    Internal(AnchorId),
    /// Any other link value, passed through verbatim.
    External(String),
}

impl LinkTarget {
    /// `#` followed by at least one character is internal; everything else is external.
    pub fn classify(link: &str) -> Self {
        match link.strip_prefix('#') {
            Some(anchor) if !anchor.is_empty() => LinkTarget::Internal(AnchorId::new(anchor)),
            _ => LinkTarget::External(link.to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HAlign {
    Left,
    #[default]
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VAlign {
    Top,
    Center,
    #[default]
    Bottom,
}

/// A box an image is scaled to fit (preserving aspect ratio) and aligned within.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImagePlacement {
    pub bounds: Rect,
    pub h_align: HAlign,
    pub v_align: VAlign,
}

/// A floating note marker.
#[derive(Debug, Clone, PartialEq)]
pub struct NoteMarker {
    pub rect: Rect,
    pub contents: String,
    pub color: Option<Color>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_internal_anchor() {
        assert_eq!(
            LinkTarget::classify("#chapter2"),
            LinkTarget::Internal(AnchorId::new("chapter2"))
        );
    }

    #[test]
    fn classifies_external_reference() {
        assert_eq!(
            LinkTarget::classify("https://example.com"),
            LinkTarget::External("https://example.com".into())
        );
        assert_eq!(LinkTarget::classify("#"), LinkTarget::External("#".into()));
        assert_eq!(
            LinkTarget::classify("page#top"),
            LinkTarget::External("page#top".into())
        );
    }
}
