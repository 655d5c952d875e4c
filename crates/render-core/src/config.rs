use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ComposeConfig {
    /// Side length of the square marker drawn for each floating note, in points.
    ///
    /// Defaults to `16.0`.
    pub note_size: f32,
}

impl Default for ComposeConfig {
    fn default() -> Self {
        Self { note_size: 16.0 }
    }
}
