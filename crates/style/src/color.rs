//! Color resolution for drawing.
//!
//! Run and decoration attributes carry colors as free-form specification strings.
//! Resolution never fails: anything unparsable becomes opaque black.

use crate::parsers::parse_color_spec;
use quire_types::Color;

/// A surface-drawable color with its transparency split out as an opacity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedColor {
    /// The color with alpha forced to 1.0.
    pub value: Color,
    /// The alpha the specification encoded, or 1.0.
    pub opacity: f32,
}

impl Default for ResolvedColor {
    fn default() -> Self {
        Self {
            value: Color::BLACK,
            opacity: 1.0,
        }
    }
}

impl From<Color> for ResolvedColor {
    fn from(color: Color) -> Self {
        Self {
            value: color.opaque(),
            opacity: color.a,
        }
    }
}

/// Resolves a color specification, falling back to opaque black.
pub fn resolve_color(spec: &str) -> ResolvedColor {
    match parse_color_spec(spec) {
        Ok(color) => color.into(),
        Err(e) => {
            log::warn!("Unresolvable color '{}', using default: {}", spec, e);
            ResolvedColor::default()
        }
    }
}

/// Resolves an optional specification; an absent color is the default color.
pub fn resolve_optional_color(spec: Option<&str>) -> ResolvedColor {
    spec.map(resolve_color).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opaque_spec_has_full_opacity() {
        let resolved = resolve_color("#336699");
        assert_eq!(resolved.value, Color::rgb(0x33, 0x66, 0x99));
        assert_eq!(resolved.opacity, 1.0);
    }

    #[test]
    fn alpha_moves_into_opacity() {
        let resolved = resolve_color("rgba(255, 0, 0, 0.5)");
        assert_eq!(resolved.value, Color::rgb(255, 0, 0));
        assert_eq!(resolved.value.a, 1.0);
        assert_eq!(resolved.opacity, 0.5);
    }

    #[test]
    fn malformed_spec_falls_back_to_black() {
        for spec in ["", "#12", "rgb(", "not-a-color"] {
            assert_eq!(resolve_color(spec), ResolvedColor::default(), "spec {:?}", spec);
        }
    }

    #[test]
    fn missing_spec_is_default() {
        assert_eq!(resolve_optional_color(None), ResolvedColor::default());
        assert_eq!(resolve_optional_color(Some("white")).value, Color::WHITE);
    }
}
