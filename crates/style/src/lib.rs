pub mod color;
pub mod parsers;
pub mod text;

pub use color::{ResolvedColor, resolve_color, resolve_optional_color};
pub use parsers::{StyleParseError, parse_color_spec, parse_decoration_style};
pub use text::DecorationStyle;
