//! Generation log settings from TOML (`[log]` section)

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLogConfig {
    /// JSONL file receiving one record per generation event; unset disables it
    pub generation_log: Option<String>,
}
