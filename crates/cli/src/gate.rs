//! Confirmation gates: the y/N prompts guarding each write stage.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// A single yes/no gate. Returns `true` only on an affirmative answer.
pub trait ConfirmationGate {
    fn confirm(&mut self, prompt: &str) -> io::Result<bool>;
}

/// Only a trimmed, case-insensitive `y` proceeds; anything else,
/// including an empty line, declines.
fn is_affirmative(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("y")
}

/// Prints the prompt on stdout and blocks for one line from stdin.
pub struct InteractiveGate;

impl ConfirmationGate for InteractiveGate {
    fn confirm(&mut self, prompt: &str) -> io::Result<bool> {
        print!("{prompt}");
        io::stdout().flush()?;

        let mut answer = String::new();
        io::stdin().lock().read_line(&mut answer)?;
        Ok(is_affirmative(&answer))
    }
}

/// Answers from a predetermined script, so the flow can run without a
/// terminal. Records every prompt it was asked; declines once the script
/// runs out.
#[derive(Debug, Default)]
pub struct ScriptedGate {
    answers: VecDeque<bool>,
    pub prompts: Vec<String>,
}

impl ScriptedGate {
    pub fn new(answers: &[bool]) -> Self {
        Self {
            answers: answers.iter().copied().collect(),
            prompts: Vec::new(),
        }
    }
}

impl ConfirmationGate for ScriptedGate {
    fn confirm(&mut self, prompt: &str) -> io::Result<bool> {
        self.prompts.push(prompt.to_string());
        Ok(self.answers.pop_front().unwrap_or(false))
    }
}
