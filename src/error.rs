use quire_layout::FontError;
use quire_render_core::RenderError;
use thiserror::Error;

/// Errors from loading a document and writing composed output.
///
/// Composition itself does not fail; these cover the edges around it.
#[derive(Error, Debug)]
pub enum QuireError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Document is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Font loading failed: {0}")]
    Font(#[from] FontError),

    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("Document is invalid: {0}")]
    Document(String),
}

impl From<lopdf::Error> for QuireError {
    fn from(e: lopdf::Error) -> Self {
        QuireError::Render(RenderError::from(e))
    }
}
