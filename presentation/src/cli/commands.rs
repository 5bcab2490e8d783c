//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for generated questions
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Rendered question, or the raw text when parsing fails
    Markdown,
    /// JSON object with the parsed fields and the raw text
    Json,
    /// Normalized model output only
    Raw,
}

impl From<OutputFormat> for mcq_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Markdown => mcq_domain::OutputFormat::Markdown,
            OutputFormat::Json => mcq_domain::OutputFormat::Json,
            OutputFormat::Raw => mcq_domain::OutputFormat::Raw,
        }
    }
}

/// CLI arguments for mcq-generator
#[derive(Parser, Debug)]
#[command(name = "mcq-generator")]
#[command(author, version, about = "Generate JEE-style multiple-choice questions with an LLM")]
#[command(long_about = r#"
MCQ Generator turns a short concept into one JEE-style multiple-choice
question with four options.

The concept is wrapped in an instruction prompt and sent to a model
backend: a local inference server (flan-t5, Mistral GPTQ/GGUF) or the
OpenAI API (gpt-4o-mini). The reply is cleaned up and carved into a
question plus options (a)-(d). When that fails, the raw text is shown.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./mcq.toml          Project-level config
3. ~/.config/mcq-generator/config.toml   Global config

Example:
  mcq-generator "Projectile motion"
  mcq-generator -m gpt-4o-mini --temperature 0.3 "Le Chatelier's principle"
  mcq-generator -o json "Rolling without slipping"
  mcq-generator --interactive
"#)]
pub struct Cli {
    /// The concept to write a question about (not required in interactive mode)
    pub concept: Option<String>,

    /// Model to generate with (preset name or any identifier the backend serves)
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Upper bound on generated tokens
    #[arg(long, value_name = "N")]
    pub max_new_tokens: Option<u32>,

    /// Sampling temperature (0.0 - 2.0)
    #[arg(long, value_name = "T")]
    pub temperature: Option<f32>,

    /// Nucleus sampling cutoff (0.0 - 1.0)
    #[arg(long, value_name = "P")]
    pub top_p: Option<f32>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Start interactive mode
    #[arg(short, long)]
    pub interactive: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the banner and progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// List the models the configured backends offer and exit
    #[arg(long)]
    pub list_models: bool,

    /// Append a JSONL record of each generation to this file
    #[arg(long, value_name = "PATH")]
    pub generation_log: Option<PathBuf>,
}
