//! Cosmetic clean-up of raw model output.

use regex::Regex;
use std::sync::LazyLock;

/// `Subject: <word>` label; spaces/tabs after the colon are consumed, line breaks are not.
static SUBJECT_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Subject:[ \t]*\w+").expect("subject label pattern"));

/// Two or more line breaks separated only by whitespace.
static BLANK_LINE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\n").expect("blank line pattern"));

/// Clean cosmetic noise from raw model output before extraction.
///
/// Steps, in order:
/// 1. strip every `Subject: <word>` label
/// 2. turn literal `\n` (and `\r\n`) escape sequences into real line breaks
/// 3. collapse runs of blank lines into a single line break
/// 4. trim surrounding whitespace
///
/// Never fails; empty input yields an empty string.
///
/// # Examples
///
/// ```
/// use mcq_domain::mcq::normalize_output;
///
/// assert_eq!(
///     normalize_output("Subject: Physics\\nQuestion: What is g?"),
///     "Question: What is g?"
/// );
/// assert_eq!(normalize_output(""), "");
/// ```
pub fn normalize_output(raw: &str) -> String {
    let without_subject = SUBJECT_LABEL.replace_all(raw, "");
    let unescaped = without_subject.replace("\\r\\n", "\n").replace("\\n", "\n");
    let collapsed = BLANK_LINE_RUN.replace_all(&unescaped, "\n");
    collapsed.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_subject_label_anywhere() {
        assert_eq!(
            normalize_output("Subject: Physics\nQuestion: What is g?"),
            "Question: What is g?"
        );
        assert_eq!(
            normalize_output("Intro Subject: Chemistry and more"),
            "Intro  and more"
        );
        assert_eq!(
            normalize_output("A Subject:Math B Subject:\tPhysics C"),
            "A  B  C"
        );
    }

    #[test]
    fn test_subject_label_does_not_eat_next_line() {
        assert_eq!(
            normalize_output("Subject:\nQuestion: Why?"),
            "Subject:\nQuestion: Why?"
        );
    }

    #[test]
    fn test_subject_label_is_case_sensitive() {
        assert_eq!(
            normalize_output("the subject: matter is tricky"),
            "the subject: matter is tricky"
        );
    }

    #[test]
    fn test_escaped_newlines_become_real() {
        assert_eq!(normalize_output(r"line one\nline two"), "line one\nline two");
        assert_eq!(normalize_output(r"line one\r\nline two"), "line one\nline two");
    }

    #[test]
    fn test_blank_line_runs_collapse() {
        assert_eq!(normalize_output("a\n\nb"), "a\nb");
        assert_eq!(normalize_output("a\n\n\n\nb"), "a\nb");
        assert_eq!(normalize_output("a\n   \n\t\nb"), "a\nb");
        assert_eq!(normalize_output(r"a\n\n\nb"), "a\nb");
    }

    #[test]
    fn test_no_blank_line_survives() {
        let raw = "Subject: Physics\n\n\nQuestion: Q?\\n\\n(a) 1\n\n(b) 2\n \n(c) 3\n\n\n(d) 4\n\n";
        let normalized = normalize_output(raw);
        assert!(!normalized.contains("\n\n"));
        assert!(normalized.lines().all(|line| !line.trim().is_empty()));
    }

    #[test]
    fn test_trims_and_handles_empty() {
        assert_eq!(normalize_output(""), "");
        assert_eq!(normalize_output("   \n\t "), "");
        assert_eq!(normalize_output("  hello  "), "hello");
    }
}
