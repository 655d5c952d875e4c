pub mod fixtures;
pub mod op_assertions;

use lopdf::Dictionary;
use lopdf::content::Operation;
use quire::{Document, DrawCall, QuireError, RecordingSurface, compose_document, compose_to_pdf};
use serde_json::Value;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// A document composed onto both a recording surface and a PDF page.
pub struct ComposedPage {
    pub calls: Vec<DrawCall>,
    pub balanced: bool,
    pub operations: Vec<Operation>,
    pub annotations: Vec<Dictionary>,
    pub content_bytes: Vec<u8>,
}

impl ComposedPage {
    pub fn count_calls(&self, pred: impl Fn(&DrawCall) -> bool) -> usize {
        self.calls.iter().filter(|c| pred(c)).count()
    }

    /// Save the content stream to a file for manual debugging
    #[allow(dead_code)]
    pub fn save_for_debug(&self, name: &str) -> std::io::Result<()> {
        std::fs::write(format!("test_output_{}.txt", name), &self.content_bytes)
    }
}

/// Compose a JSON document
pub fn compose_json(document: &Value) -> Result<ComposedPage, QuireError> {
    let doc = Document::from_json(&serde_json::to_string(document)?)?;

    let mut recording = RecordingSurface::new();
    compose_document(&mut recording, &doc);
    let balanced = recording.is_balanced();

    let page = compose_to_pdf(&doc);
    let content_bytes = page.content.encode()?;
    Ok(ComposedPage {
        calls: recording.into_calls(),
        balanced,
        operations: page.content.operations,
        annotations: page.annotations,
        content_bytes,
    })
}
