//! Foundation value types shared by every quire crate.

pub mod color;
pub mod geometry;
pub mod ids;

pub use color::Color;
pub use geometry::{Point, Rect, Size};
pub use ids::{AnchorId, ResourceUri};
