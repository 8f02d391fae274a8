use std::io::{self, BufRead, Write};
use crate::errors::{ResultExt, SchoolError, SchoolResult};

/// Line-oriented questions on stdout, answers from any reader.
pub struct TerminalPrompt<R: BufRead> {
    input: R,
}

impl TerminalPrompt<io::StdinLock<'static>> {
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock())
    }
}

impl<R: BufRead> TerminalPrompt<R> {
    pub fn new(input: R) -> Self {
        Self { input }
    }

    /// One trimmed line. End of input is an error so loops cannot spin.
    pub fn ask(&mut self, label: &str) -> SchoolResult<String> {
        print!("{}: ", label);
        io::stdout().flush().with_operation("write prompt")?;

        let mut line = String::new();
        if self.input.read_line(&mut line).with_operation("read answer")? == 0 {
            return Err(SchoolError::user_input_error(label, "a line of input", "Input closed; run the command again"));
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Like `ask`, keeping `default` when the answer is empty.
    pub fn ask_or(&mut self, label: &str, default: &str) -> SchoolResult<String> {
        let answer = self.ask(&format!("{} [{}]", label, default))?;
        if answer.trim().is_empty() {
            Ok(default.to_string())
        } else {
            Ok(answer)
        }
    }

    /// `y`/`yes` confirms; anything else declines.
    pub fn confirm(&mut self, question: &str) -> SchoolResult<bool> {
        let answer = self.ask(&format!("{} (y/N)", question))?;
        Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn reads_lines_and_defaults() {
        let mut prompt = TerminalPrompt::new(Cursor::new("Asha\n\n  \nY\nno\n"));
        assert_eq!(prompt.ask("Name").unwrap(), "Asha");
        assert_eq!(prompt.ask_or("Duration", "3 Months").unwrap(), "3 Months");
        assert_eq!(prompt.ask_or("Fees", "999").unwrap(), "999");
        assert!(prompt.confirm("Delete?").unwrap());
        assert!(!prompt.confirm("Delete?").unwrap());
    }

    #[test]
    fn closed_input_is_an_error() {
        let mut prompt = TerminalPrompt::new(Cursor::new(""));
        assert!(matches!(prompt.ask("Email"), Err(SchoolError::UserInputError { .. })));
    }
}
