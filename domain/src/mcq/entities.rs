//! Extraction result and the structured question it may yield.

use serde::{Deserialize, Serialize};

/// Labels given to options by position, regardless of the source labels.
pub const OPTION_LABELS: [char; 4] = ['a', 'b', 'c', 'd'];

/// Outcome of scanning normalized text for a question and options.
///
/// `success` is true only when the question text is non-empty and four
/// options were recovered. A failed extraction still carries whatever
/// was found, for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extraction {
    pub question: String,
    /// At most four options, in discovery order
    pub options: Vec<String>,
    pub success: bool,
}

impl Extraction {
    pub(crate) fn new(question: String, options: Vec<String>) -> Self {
        let success = !question.is_empty() && options.len() >= OPTION_LABELS.len();
        Self {
            question,
            options,
            success,
        }
    }

    /// Nothing recoverable (no question boundary in the text)
    pub(crate) fn empty() -> Self {
        Self::new(String::new(), Vec::new())
    }

    /// Convert into a [`StructuredQuestion`] when extraction succeeded.
    pub fn into_structured(self) -> Option<StructuredQuestion> {
        if !self.success {
            return None;
        }
        let options: [String; 4] = self.options.try_into().ok()?;
        Some(StructuredQuestion {
            question: self.question,
            options,
        })
    }

    /// Borrowing variant of [`into_structured`](Self::into_structured).
    pub fn to_structured(&self) -> Option<StructuredQuestion> {
        if !self.success {
            return None;
        }
        let options: &[String; 4] = self.options.as_slice().try_into().ok()?;
        Some(StructuredQuestion {
            question: self.question.clone(),
            options: options.clone(),
        })
    }
}

/// A question with exactly four options labeled a–d (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuredQuestion {
    question: String,
    options: [String; 4],
}

impl StructuredQuestion {
    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn options(&self) -> &[String; 4] {
        &self.options
    }

    /// Options paired with their positional labels `a`..`d`.
    pub fn labeled_options(&self) -> impl Iterator<Item = (char, &str)> {
        OPTION_LABELS
            .into_iter()
            .zip(self.options.iter().map(String::as_str))
    }
}
