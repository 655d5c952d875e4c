use serde::{Deserialize, Deserializer, Serialize, Serializer};
use crate::parsers::parse_decoration_style;
use std::fmt;

/// The set of style tags on a decoration line.
///
/// `DASHED` and `DOTTED` are line textures, `WAVY` picks the path shape and
/// `DOUBLE` adds a second straight line. An empty set draws a solid line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DecorationStyle(u8);

impl DecorationStyle {
    pub const SOLID: DecorationStyle = DecorationStyle(1);
    pub const DASHED: DecorationStyle = DecorationStyle(1 << 1);
    pub const DOTTED: DecorationStyle = DecorationStyle(1 << 2);
    pub const WAVY: DecorationStyle = DecorationStyle(1 << 3);
    pub const DOUBLE: DecorationStyle = DecorationStyle(1 << 4);

    const KEYWORDS: [(&'static str, DecorationStyle); 5] = [
        ("solid", Self::SOLID),
        ("dashed", Self::DASHED),
        ("dotted", Self::DOTTED),
        ("wavy", Self::WAVY),
        ("double", Self::DOUBLE),
    ];

    pub const fn empty() -> Self {
        DecorationStyle(0)
    }

    pub const fn union(self, other: DecorationStyle) -> Self {
        DecorationStyle(self.0 | other.0)
    }

    pub const fn contains(self, other: DecorationStyle) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Lenient tag matching: every keyword occurring anywhere in `tag` is set.
    ///
    /// This accepts the compound tags layout engines emit (`"dashedDouble"`,
    /// `"wavy underline"`) where the strict parser would reject them.
    pub fn from_tag(tag: &str) -> Self {
        let lower = tag.to_ascii_lowercase();
        Self::KEYWORDS
            .iter()
            .filter(|(keyword, _)| lower.contains(keyword))
            .fold(Self::empty(), |acc, (_, style)| acc.union(*style))
    }
}

impl fmt::Display for DecorationStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names = Self::KEYWORDS
            .iter()
            .filter(|(_, style)| self.contains(*style))
            .map(|(keyword, _)| *keyword);
        match names.next() {
            None => f.write_str("solid"),
            Some(first) => {
                f.write_str(first)?;
                for name in names {
                    write!(f, " {}", name)?;
                }
                Ok(())
            }
        }
    }
}

impl Serialize for DecorationStyle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Keyword lists parse strictly; anything else falls back to [`DecorationStyle::from_tag`].
impl<'de> Deserialize<'de> for DecorationStyle {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Ok(parse_decoration_style(&tag).unwrap_or_else(|_| Self::from_tag(&tag)))
    }
}
