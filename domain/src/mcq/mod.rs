//! Multiple-choice question extraction from free-form model output.
//!
//! These functions turn the unstructured text a backend returns into a
//! question plus four options. They are pure text scanning with
//! no I/O.
//!
//! # Pipeline
//!
//! | Step | Function | Fails? |
//! |------|----------|--------|
//! | Clean cosmetic noise | [`normalize_output`] | never |
//! | Find question and options | [`extract_question`] | signals via [`Extraction::success`] |
//! | Format for display | [`render_outcome`] | never (falls back to raw text) |

mod entities;
mod extract;
mod normalize;
mod render;

pub use entities::{Extraction, OPTION_LABELS, StructuredQuestion};
pub use extract::extract_question;
pub use normalize::normalize_output;
pub use render::{render_fallback, render_outcome, render_question};

#[cfg(test)]
mod tests {
    use super::*;

    const FORCE_SAMPLE: &str = "Subject: Physics\nQuestion: What is the SI unit of force?\n(a) Joule (b) Newton (c) Watt (d) Pascal";

    #[test]
    fn test_end_to_end_force_sample() {
        let normalized = normalize_output(FORCE_SAMPLE);
        assert!(!normalized.contains("Subject: Physics"));

        let extraction = extract_question(&normalized);
        assert!(extraction.success);
        assert_eq!(extraction.question, "What is the SI unit of force?");
        assert_eq!(extraction.options, vec!["Joule", "Newton", "Watt", "Pascal"]);

        let rendered = render_outcome(&extraction, &normalized);
        assert_eq!(
            rendered,
            "**Question:** What is the SI unit of force?\n\n**Options:**\n- (a) Joule\n- (b) Newton\n- (c) Watt\n- (d) Pascal"
        );
    }

    #[test]
    fn test_end_to_end_escaped_newlines() {
        let raw = r"Question: Which gas is evolved when zinc reacts with dilute HCl?\n\n\n(A) Oxygen\n(B) Hydrogen\n(C) Chlorine\n(D) Nitrogen";
        let normalized = normalize_output(raw);
        assert!(!normalized.contains("\n\n"));

        let structured = extract_question(&normalized).into_structured().unwrap();
        assert_eq!(
            structured.question(),
            "Which gas is evolved when zinc reacts with dilute HCl?"
        );
        assert_eq!(structured.options()[1], "Hydrogen");
    }

    #[test]
    fn test_end_to_end_fallback() {
        let raw = "The answer is Newton.";
        let normalized = normalize_output(raw);
        let extraction = extract_question(&normalized);
        assert!(!extraction.success);

        let rendered = render_outcome(&extraction, &normalized);
        assert!(rendered.starts_with("**Could not parse"));
        assert!(rendered.contains("The answer is Newton."));
    }

    #[test]
    fn test_end_to_end_empty() {
        let normalized = normalize_output("");
        assert_eq!(normalized, "");
        assert!(!extract_question(&normalized).success);
    }
}
