//! Operator prompting.
//!
//! The session suspends on each prompt and resumes when one line of input
//! arrives; there is no timeout and no parallel prompt. The trait seam lets
//! tests drive a session from a scripted answer list.

use anyhow::Result;
use dialoguer::Input;

/// One line of operator input per call.
pub trait PromptSource {
    fn line(&mut self, prompt: &str) -> Result<String>;
}

/// Terminal-backed prompt source.
#[derive(Default)]
pub struct TermPrompt;

impl TermPrompt {
    pub fn new() -> Self {
        Self
    }
}

impl PromptSource for TermPrompt {
    fn line(&mut self, prompt: &str) -> Result<String> {
        let answer: String = Input::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?;
        Ok(answer)
    }
}

/// Whether an answer means "yes".
///
/// Only a lone `y` (case-insensitive, after trim) is affirmative; every
/// other answer means "stop", never an error.
pub fn is_affirmative(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("y")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_y_is_affirmative() {
        assert!(is_affirmative("y"));
        assert!(is_affirmative("Y"));
        assert!(is_affirmative(" y "));
    }

    #[test]
    fn everything_else_means_stop() {
        assert!(!is_affirmative(""));
        assert!(!is_affirmative("n"));
        assert!(!is_affirmative("yes"));
        assert!(!is_affirmative("sure"));
        assert!(!is_affirmative("q"));
    }
}
