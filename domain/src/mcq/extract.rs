//! Question/option extraction as a small marker grammar.
//!
//! The scanner recognizes a bounded set of ASCII marker tokens:
//!
//! | Token | Match |
//! |-------|-------|
//! | `Question:` | case-insensitive label |
//! | `Options:` | case-insensitive label |
//! | `(a)`..`(d)` | parenthesized option tag, any case |
//!
//! Extraction then slices the text between markers. Since every marker
//! is ASCII, byte offsets from the scanner are always char boundaries.

use super::entities::{Extraction, OPTION_LABELS};

const QUESTION_LABEL: &[u8] = b"question:";
const OPTIONS_LABEL: &[u8] = b"options:";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MarkerKind {
    QuestionLabel,
    OptionsLabel,
    /// Lowercased letter as captured; not used for relabeling
    OptionTag(char),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Marker {
    kind: MarkerKind,
    start: usize,
    end: usize,
}

impl Marker {
    /// Markers that end the question text
    fn is_boundary(&self) -> bool {
        matches!(
            self.kind,
            MarkerKind::OptionsLabel | MarkerKind::OptionTag(_)
        )
    }

    fn is_option_tag(&self) -> bool {
        matches!(self.kind, MarkerKind::OptionTag(_))
    }
}

fn starts_with_ignore_case(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.len() >= needle.len() && haystack[..needle.len()].eq_ignore_ascii_case(needle)
}

fn option_tag_at(bytes: &[u8], at: usize) -> Option<char> {
    match bytes.get(at..at + 3) {
        Some([b'(', letter, b')']) => {
            let letter = letter.to_ascii_lowercase();
            matches!(letter, b'a'..=b'd').then_some(letter as char)
        }
        _ => None,
    }
}

/// Scan left to right for markers; matched tokens never overlap.
fn scan_markers(text: &str) -> Vec<Marker> {
    let bytes = text.as_bytes();
    let mut markers = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        let found = if let Some(letter) = option_tag_at(bytes, i) {
            Some((MarkerKind::OptionTag(letter), 3))
        } else if starts_with_ignore_case(&bytes[i..], QUESTION_LABEL) {
            Some((MarkerKind::QuestionLabel, QUESTION_LABEL.len()))
        } else if starts_with_ignore_case(&bytes[i..], OPTIONS_LABEL) {
            Some((MarkerKind::OptionsLabel, OPTIONS_LABEL.len()))
        } else {
            None
        };

        match found {
            Some((kind, len)) => {
                markers.push(Marker {
                    kind,
                    start: i,
                    end: i + len,
                });
                i += len;
            }
            None => i += 1,
        }
    }

    markers
}

/// Recover a question and up to four options from normalized text.
///
/// The question is the text between an optional `Question:` label and the
/// first boundary (`Options:` label or option tag). Options are the texts
/// following each option tag after the boundary, up to the next tag or the
/// end of input. Empty option texts are skipped; the list is truncated to
/// four. Options are relabeled a–d by position, not by their captured letter.
///
/// # Examples
///
/// ```
/// use mcq_domain::mcq::extract_question;
///
/// let extraction = extract_question("Question: 2 + 2 = ?\n(A) 3 (B) 4 (C) 5 (D) 22");
/// assert!(extraction.success);
/// assert_eq!(extraction.question, "2 + 2 = ?");
/// assert_eq!(extraction.options, vec!["3", "4", "5", "22"]);
///
/// assert!(!extract_question("no markers here").success);
/// ```
pub fn extract_question(text: &str) -> Extraction {
    let markers = scan_markers(text);

    let Some(boundary) = markers.iter().position(Marker::is_boundary) else {
        return Extraction::empty();
    };

    let question_start = markers[..boundary]
        .iter()
        .find(|m| m.kind == MarkerKind::QuestionLabel)
        .map_or(0, |m| m.end);
    let question = text[question_start..markers[boundary].start]
        .trim()
        .to_string();

    let tags: Vec<&Marker> = markers[boundary..]
        .iter()
        .filter(|m| m.is_option_tag())
        .collect();

    let options: Vec<String> = tags
        .iter()
        .enumerate()
        .map(|(idx, tag)| {
            let end = tags.get(idx + 1).map_or(text.len(), |next| next.start);
            text[tag.end..end].trim()
        })
        .filter(|option| !option.is_empty())
        .take(OPTION_LABELS.len())
        .map(str::to_string)
        .collect();

    Extraction::new(question, options)
}
