//! Core rendering abstractions and the attributed-text compositor.
//!
//! This crate provides:
//! - the [`Surface`] trait, the drawing primitives a backend must support
//! - [`FrameGuard`], scoped save/restore of the surface coordinate frame
//! - the compositor passes in [`drawing`]: runs, inline attachments, backgrounds,
//!   decoration lines, line/block composition and floating note placement
//! - [`RecordingSurface`], a backend that records calls for inspection

mod config;
mod error;
mod frame;
mod traits;
mod types;
pub mod drawing;
pub mod recording;
pub mod utils;

pub use config::ComposeConfig;
pub use drawing::{render_block, render_line, render_paragraph};
pub use error::RenderError;
pub use frame::FrameGuard;
pub use recording::{DrawCall, RecordingSurface};
pub use traits::Surface;
pub use types::{HAlign, ImagePlacement, LinkTarget, NoteMarker, VAlign};
