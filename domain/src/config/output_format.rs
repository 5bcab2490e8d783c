//! Output format value object

use serde::{Deserialize, Serialize};

/// Output format for generated questions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Rendered markdown question, or the could-not-parse block (default)
    #[default]
    Markdown,
    /// JSON object with the parsed fields and the raw text
    Json,
    /// Normalized model output only
    Raw,
}
