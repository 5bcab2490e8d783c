//! Progress reporting for a generate action

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use mcq_application::ports::progress::ProgressNotifier;
use mcq_domain::Model;
use std::sync::Mutex;
use std::time::Duration;

/// Reports progress with a spinner on stderr
pub struct ProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    /// Replace the current spinner with a fresh one showing `message`.
    fn start(&self, message: String) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_message(message);
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut slot) = self.spinner.lock()
            && let Some(previous) = slot.replace(pb)
        {
            previous.finish_and_clear();
        }
    }

    fn stop(&self) {
        if let Ok(mut slot) = self.spinner.lock()
            && let Some(pb) = slot.take()
        {
            pb.finish_and_clear();
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_model_load_start(&self, model: &Model) {
        self.start(format!("Loading {}...", model));
    }

    fn on_model_loaded(&self, model: &Model, success: bool) {
        self.stop();
        if success {
            eprintln!("{} {} ready", "v".green(), model);
        } else {
            eprintln!("{} {} could not be loaded", "x".red(), model);
        }
    }

    fn on_generation_start(&self, _model: &Model) {
        self.start("Generating MCQ...".to_string());
    }

    fn on_generation_complete(&self, _model: &Model, parsed: bool) {
        self.stop();
        if !parsed {
            eprintln!(
                "{} Could not find a question with four options in the reply",
                "!".yellow()
            );
        }
    }

    fn on_generation_failed(&self, _model: &Model, _error: &str) {
        self.stop();
    }
}

/// Simple text-based progress (no spinner)
pub struct SimpleProgress;

impl ProgressNotifier for SimpleProgress {
    fn on_model_load_start(&self, model: &Model) {
        eprintln!("{} Loading {}...", "->".cyan(), model.short_name().bold());
    }

    fn on_model_loaded(&self, model: &Model, success: bool) {
        if success {
            eprintln!("  {} {}", "v".green(), model);
        } else {
            eprintln!("  {} {} (failed)", "x".red(), model);
        }
    }

    fn on_generation_start(&self, _model: &Model) {
        eprintln!("{} Generating MCQ...", "->".cyan());
    }

    fn on_generation_complete(&self, _model: &Model, parsed: bool) {
        if parsed {
            eprintln!("  {} parsed", "v".green());
        } else {
            eprintln!("  {} unparsed, showing raw output", "!".yellow());
        }
    }

    fn on_generation_failed(&self, _model: &Model, error: &str) {
        eprintln!("  {} {}", "x".red(), error);
    }
}
