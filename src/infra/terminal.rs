use std::io::{self, BufRead, Write};

use crate::error::AppResult;
use crate::services::PromptService;

/// Interactive stdin/stdout prompt. Secrets go through `rpassword` so the
/// typed value never reaches the terminal.
pub struct TerminalPrompt;

impl TerminalPrompt {
    pub fn new() -> Self {
        Self
    }

    fn read_line() -> AppResult<String> {
        let mut input = String::new();
        io::stdin().lock().read_line(&mut input)?;
        Ok(input.trim().to_string())
    }
}

impl PromptService for TerminalPrompt {
    fn confirm(&self, question: &str, default_yes: bool) -> AppResult<bool> {
        let hint = if default_yes { "Y/n" } else { "y/N" };
        print!("--> {question} {hint}: ");
        io::stdout().flush()?;

        let answer = Self::read_line()?;
        if answer.is_empty() {
            return Ok(default_yes);
        }
        Ok(answer.eq_ignore_ascii_case("y"))
    }

    fn solicit(&self, label: &str) -> AppResult<String> {
        print!("--> {label}: ");
        io::stdout().flush()?;
        Self::read_line()
    }

    fn solicit_secret(&self, label: &str) -> AppResult<String> {
        let value = rpassword::prompt_password(format!("--> {label}: "))?;
        Ok(value.trim().to_string())
    }
}
