//! Prompt templates for MCQ generation

/// Templates for generating backend prompts
pub struct PromptTemplate;

impl PromptTemplate {
    /// System prompt for chat-completion backends
    pub fn system() -> &'static str {
        r#"You are an exam setter for the JEE (Joint Entrance Examination).
You write single multiple-choice questions in Physics, Chemistry, or Math.
Follow the formatting rules in the user message exactly."#
    }

    /// Instruction prompt wrapping the user's concept
    pub fn mcq_prompt(concept: &str) -> String {
        format!(
            r#"Generate one JEE multiple-choice question based on the concept: "{}"

Rules:
- Clearly state the subject (Physics, Chemistry, or Math) only if needed.
- Provide one question only.
- Write four options: (a), (b), (c), (d)
- Do NOT include explanation or answer
- Output must be concise and exam-style.
"#,
            concept
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mcq_prompt_embeds_concept() {
        let prompt = PromptTemplate::mcq_prompt("Projectile motion and radius of curvature");
        assert!(prompt.starts_with(
            "Generate one JEE multiple-choice question based on the concept: \"Projectile motion and radius of curvature\""
        ));
        assert!(prompt.contains("- Write four options: (a), (b), (c), (d)"));
        assert!(prompt.ends_with("- Output must be concise and exam-style.\n"));
    }

    #[test]
    fn test_system_prompt_mentions_format() {
        assert!(PromptTemplate::system().contains("multiple-choice"));
    }
}
