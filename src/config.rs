use quire_types::{Point, Size};
use serde::Deserialize;

/// Page geometry for composed output, in points.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageConfig {
    pub width: f32,
    pub height: f32,
    /// Where paragraph coordinates start, measured from the top-left corner.
    pub origin: Point,
}

impl PageConfig {
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

impl Default for PageConfig {
    /// A4 with the origin at the top-left corner.
    fn default() -> Self {
        Self {
            width: 595.0,
            height: 842.0,
            origin: Point::zero(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_keeps_defaults() {
        let config: PageConfig = serde_json::from_str(r#"{"origin": {"x": 72, "y": 36}}"#).unwrap();
        assert_eq!(config.size(), Size::new(595.0, 842.0));
        assert_eq!(config.origin, Point::new(72.0, 36.0));
    }
}
