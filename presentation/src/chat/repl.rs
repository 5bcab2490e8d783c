//! REPL (Read-Eval-Print Loop) for interactive question generation

use crate::{ConsoleFormatter, ProgressReporter};
use colored::Colorize;
use mcq_application::{GenerateMcqError, GenerateMcqInput, GenerateMcqUseCase, LlmGateway};
use mcq_domain::GenerationParams;
use reedline::{DefaultPrompt, DefaultPromptSegment, FileBackedHistory, Reedline, Signal};
use std::error::Error;
use std::path::{Path, PathBuf};

const HISTORY_CAPACITY: usize = 1000;

/// Open the history file, creating its parent directory if needed
fn open_history(path: &Path) -> Result<FileBackedHistory, Box<dyn Error>> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    Ok(FileBackedHistory::with_file(HISTORY_CAPACITY, path.to_path_buf())?)
}

/// Slash commands understood by the REPL
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Help,
    Model,
    Quit,
    Unknown(String),
}

impl ReplCommand {
    /// Parse a `/command` line; anything else is not a command.
    pub fn parse(line: &str) -> Option<Self> {
        let rest = line.strip_prefix('/')?;
        let name = rest.split_whitespace().next().unwrap_or_default();
        Some(match name {
            "help" | "h" | "?" => ReplCommand::Help,
            "model" => ReplCommand::Model,
            "quit" | "exit" | "q" => ReplCommand::Quit,
            other => ReplCommand::Unknown(format!("/{}", other)),
        })
    }
}

/// One line of REPL input, classified
#[derive(Debug, PartialEq, Eq)]
pub enum ReplInput<'a> {
    Empty,
    Command(ReplCommand),
    Concept(&'a str),
}

impl<'a> ReplInput<'a> {
    pub fn classify(line: &'a str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            ReplInput::Empty
        } else if let Some(command) = ReplCommand::parse(line) {
            ReplInput::Command(command)
        } else {
            ReplInput::Concept(line)
        }
    }
}

/// Interactive MCQ REPL
///
/// Every generate action goes through the same use case, so the model
/// session is created on the first question and reused afterwards.
pub struct McqRepl<G: LlmGateway + 'static> {
    use_case: GenerateMcqUseCase<G>,
    params: GenerationParams,
    backend: String,
    show_progress: bool,
    history_path: Option<PathBuf>,
}

impl<G: LlmGateway + 'static> McqRepl<G> {
    /// Create a new McqRepl
    pub fn new(use_case: GenerateMcqUseCase<G>, backend: impl Into<String>) -> Self {
        Self {
            use_case,
            params: GenerationParams::default(),
            backend: backend.into(),
            show_progress: true,
            history_path: None,
        }
    }

    pub fn with_params(mut self, params: GenerationParams) -> Self {
        self.params = params;
        self
    }

    /// Set whether to show progress
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Persist input history to this file
    pub fn with_history(mut self, path: Option<PathBuf>) -> Self {
        self.history_path = path;
        self
    }

    /// Run the interactive REPL
    pub async fn run(&self) -> std::io::Result<()> {
        let mut editor = self.editor();
        let prompt = DefaultPrompt::new(
            DefaultPromptSegment::Basic("mcq".to_string()),
            DefaultPromptSegment::Empty,
        );

        self.print_welcome();

        loop {
            match editor.read_line(&prompt)? {
                Signal::Success(line) => match ReplInput::classify(&line) {
                    ReplInput::Empty => {
                        println!("{}", GenerateMcqError::EmptyPrompt.to_string().yellow());
                    }
                    ReplInput::Command(command) => {
                        if self.handle_command(&command) {
                            break;
                        }
                    }
                    ReplInput::Concept(concept) => self.process_concept(concept).await,
                },
                Signal::CtrlD => {
                    println!("Bye!");
                    break;
                }
                _ => println!("^C"),
            }
        }

        Ok(())
    }

    fn editor(&self) -> Reedline {
        let editor = Reedline::create();
        let Some(path) = &self.history_path else {
            return editor;
        };

        match open_history(path) {
            Ok(history) => editor.with_history(Box::new(history)),
            Err(e) => {
                eprintln!("{} History disabled: {}", "!".yellow(), e);
                editor
            }
        }
    }

    fn print_welcome(&self) {
        println!();
        println!("{}", ConsoleFormatter::header("JEE MCQ Generator"));
        println!();
        println!("Enter a concept (e.g. \"Projectile motion\") to get a question.");
        println!(
            "Model: {} {}",
            self.use_case.model(),
            format!("({})", self.backend).dimmed()
        );
        println!();
        Self::print_help();
    }

    fn print_help() {
        println!("Commands:");
        println!("  /help, /h, /?     - Show this help");
        println!("  /model            - Show the current model");
        println!("  /quit, /exit, /q  - Exit");
        println!();
    }

    /// Handle slash commands. Returns true if should exit.
    fn handle_command(&self, command: &ReplCommand) -> bool {
        match command {
            ReplCommand::Quit => {
                println!("Bye!");
                true
            }
            ReplCommand::Help => {
                println!();
                Self::print_help();
                false
            }
            ReplCommand::Model => {
                println!();
                println!(
                    "{}",
                    ConsoleFormatter::footer(self.use_case.model(), &self.backend)
                );
                println!();
                false
            }
            ReplCommand::Unknown(name) => {
                println!("Unknown command: {} (try /help)", name);
                false
            }
        }
    }

    async fn process_concept(&self, concept: &str) {
        let input = GenerateMcqInput::new(concept).with_params(self.params.clone());

        let result = if self.show_progress {
            let progress = ProgressReporter::new();
            self.use_case.execute_with_progress(input, &progress).await
        } else {
            self.use_case.execute(input).await
        };

        match result {
            Ok(output) => {
                println!();
                println!("{}", ConsoleFormatter::format_quiet(&output, &self.backend));
            }
            Err(e) => eprintln!("{} {}", "Error:".red().bold(), e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_empty() {
        assert_eq!(ReplInput::classify(""), ReplInput::Empty);
        assert_eq!(ReplInput::classify("  \t "), ReplInput::Empty);
    }

    #[test]
    fn test_classify_commands() {
        assert_eq!(
            ReplInput::classify("/quit"),
            ReplInput::Command(ReplCommand::Quit)
        );
        assert_eq!(
            ReplInput::classify(" /h "),
            ReplInput::Command(ReplCommand::Help)
        );
        assert_eq!(
            ReplInput::classify("/model gpt-4o-mini"),
            ReplInput::Command(ReplCommand::Model)
        );
        assert_eq!(
            ReplInput::classify("/models"),
            ReplInput::Command(ReplCommand::Unknown("/models".to_string()))
        );
    }

    #[test]
    fn test_classify_concept_is_trimmed() {
        assert_eq!(
            ReplInput::classify("  Projectile motion \n"),
            ReplInput::Concept("Projectile motion")
        );
        // A slash inside the text does not make it a command
        assert_eq!(
            ReplInput::classify("Work/energy theorem"),
            ReplInput::Concept("Work/energy theorem")
        );
    }

    #[test]
    fn test_open_history_creates_parent_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("history.txt");

        assert!(open_history(&path).is_ok());
        assert!(dir.path().join("nested").is_dir());
    }

    #[test]
    fn test_open_history_reports_unusable_parent() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "not a directory").unwrap();

        assert!(open_history(&blocker.join("history.txt")).is_err());
    }
}
