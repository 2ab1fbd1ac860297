//! Interactive prompts
//!
//! dialoguer drives the prompts when stderr is a terminal. Otherwise the
//! question is written to stderr and the answer is read as a line from
//! stdin, so `echo y | clitodo remove 1` works.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use console::Term;
use dialoguer::{theme::ColorfulTheme, Confirm, Input};

use crate::error::Result;

/// Whether dialoguer can talk to a terminal
pub fn is_interactive() -> bool {
    Term::stderr().is_term()
}

/// Ask a yes/no question, defaulting to no
pub fn confirm(prompt: &str) -> Result<bool> {
    if is_interactive() {
        let answer = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .default(false)
            .interact()?;
        return Ok(answer);
    }

    let stdin = io::stdin();
    confirm_from(&mut stdin.lock(), &mut io::stderr(), prompt)
}

/// Ask where the database should live, offering `default`
pub fn database_location(default: &Path) -> Result<PathBuf> {
    let answer = Input::<String>::with_theme(&ColorfulTheme::default())
        .with_prompt("to-do database location?")
        .default(default.display().to_string())
        .interact_text()?;
    Ok(PathBuf::from(answer))
}

fn confirm_from(input: &mut impl BufRead, output: &mut impl Write, prompt: &str) -> Result<bool> {
    loop {
        write!(output, "{prompt} [y/N]: ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            // EOF
            writeln!(output)?;
            return Ok(false);
        }

        match line.trim().to_ascii_lowercase().as_str() {
            "y" | "yes" => return Ok(true),
            "" | "n" | "no" => return Ok(false),
            _ => writeln!(output, "Error: invalid input")?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn answer(input: &str) -> (bool, String) {
        let mut output = Vec::new();
        let result = confirm_from(&mut Cursor::new(input), &mut output, "Delete all to-dos?")
            .unwrap();
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn yes_answers_are_accepted() {
        assert!(answer("y\n").0);
        assert!(answer("YES\n").0);
        assert!(answer("  y  \n").0);
    }

    #[test]
    fn empty_or_eof_means_no() {
        assert!(!answer("\n").0);
        assert!(!answer("").0);
        assert!(!answer("n\n").0);
    }

    #[test]
    fn invalid_input_asks_again() {
        let (result, output) = answer("maybe\ny\n");
        assert!(result);
        assert_eq!(output.matches("Delete all to-dos? [y/N]: ").count(), 2);
        assert!(output.contains("Error: invalid input"));
    }
}
