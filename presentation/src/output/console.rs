//! Console output formatter for generated questions

use colored::Colorize;
use mcq_application::GenerateMcqOutput;
use mcq_domain::Model;

const TITLE: &str = "JEE MCQ Generator";

/// Formats generation results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Banner, rendered outcome and footer
    pub fn format(output: &GenerateMcqOutput, backend: &str) -> String {
        format!(
            "{}\n\n{}",
            Self::header(TITLE),
            Self::format_quiet(output, backend)
        )
    }

    /// Rendered outcome and footer, without the banner
    pub fn format_quiet(output: &GenerateMcqOutput, backend: &str) -> String {
        let body = if output.is_structured() {
            output.render()
        } else {
            format!(
                "{}\n{}",
                "Showing the model output as-is.".yellow(),
                output.render()
            )
        };
        format!("{}\n\n{}\n", body, Self::footer(&output.model, backend))
    }

    /// Format as JSON
    pub fn format_json(output: &GenerateMcqOutput) -> String {
        let structured = output.structured();
        let value = serde_json::json!({
            "concept": output.concept.content(),
            "model": output.model.as_str(),
            "parsed": output.is_structured(),
            "question": structured.as_ref().map(|s| s.question()),
            "options": structured
                .as_ref()
                .map(|s| s.options().to_vec())
                .unwrap_or_default(),
            "normalized": output.normalized,
            "raw": output.raw,
        });
        serde_json::to_string_pretty(&value).unwrap_or_else(|_| "{}".to_string())
    }

    /// Normalized model output only
    pub fn format_raw(output: &GenerateMcqOutput) -> String {
        output.normalized.clone()
    }

    pub fn footer(model: &Model, backend: &str) -> String {
        format!("Model: {} • Powered by {}", model, backend)
            .dimmed()
            .to_string()
    }

    pub fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }
}
