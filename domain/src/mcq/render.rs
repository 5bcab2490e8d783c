//! Markdown rendering of extraction outcomes.

use super::entities::{Extraction, StructuredQuestion};

/// Render a structured question in the fixed markdown layout.
pub fn render_question(question: &StructuredQuestion) -> String {
    let mut output = format!("**Question:** {}\n\n**Options:**", question.question());
    for (label, option) in question.labeled_options() {
        output.push_str(&format!("\n- ({}) {}", label, option));
    }
    output
}

/// Render the could-not-parse block around the normalized model output.
pub fn render_fallback(normalized: &str) -> String {
    format!(
        "**Could not parse the model output into a multiple-choice question.**\n\nRaw output:\n\n```text\n{}\n```",
        normalized
    )
}

/// Structured rendering on success, the fallback block otherwise.
pub fn render_outcome(extraction: &Extraction, normalized: &str) -> String {
    match extraction.to_structured() {
        Some(question) => render_question(&question),
        None => render_fallback(normalized),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mcq::extract_question;

    #[test]
    fn test_render_question_layout() {
        let question = extract_question("Unit of power?\n(A) Watt (B) Joule (C) Newton (D) Volt")
            .into_structured()
            .unwrap();
        assert_eq!(
            render_question(&question),
            "**Question:** Unit of power?\n\n**Options:**\n- (a) Watt\n- (b) Joule\n- (c) Newton\n- (d) Volt"
        );
    }

    #[test]
    fn test_render_fallback_wraps_text() {
        let rendered = render_fallback("just some text");
        assert_eq!(
            rendered,
            "**Could not parse the model output into a multiple-choice question.**\n\nRaw output:\n\n```text\njust some text\n```"
        );
    }

    #[test]
    fn test_render_outcome_picks_fallback_on_failure() {
        let normalized = "Question: Q?\n(a) 1 (b) 2 (c) 3";
        let extraction = extract_question(normalized);
        let rendered = render_outcome(&extraction, normalized);
        assert!(rendered.contains("Could not parse"));
        assert!(rendered.contains(normalized));
    }
}
