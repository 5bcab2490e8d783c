//! Configuration file loading for mcq-generator
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. `MCQ_`-prefixed environment variables
//! 3. Project root: `./mcq.toml` or `./.mcq.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/mcq-generator/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileBehaviorConfig, FileConfig, FileGenerationConfig, FileLocalConfig,
    FileLogConfig, FileModelConfig, FileOpenAiConfig, FileOutputConfig, FileProvidersConfig,
    FileReplConfig, KNOWN_PROVIDERS,
};
pub use loader::ConfigLoader;
