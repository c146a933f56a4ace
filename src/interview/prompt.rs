use anyhow::{Context, Result};
use std::io::{BufRead, Write};

/// Line-oriented question/answer helper over any reader/writer pair.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print a line of text.
    pub fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{}", text).context("Failed to write output")
    }

    /// Prompt user with a message and return their trimmed input.
    pub fn prompt(&mut self, message: &str) -> Result<String> {
        write!(self.output, "{}", message).context("Failed to write prompt")?;
        self.output.flush().context("Failed to flush output")?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read input")?;
        if read == 0 {
            anyhow::bail!("Input ended before the estimate was complete");
        }
        Ok(line.trim().to_string())
    }

    /// Prompt user with a yes/no question. Returns bool based on input and default.
    pub fn prompt_yes_no(&mut self, message: &str, default_yes: bool) -> Result<bool> {
        let hint = if default_yes { "Y/n" } else { "y/N" };
        loop {
            let input = self.prompt(&format!("{} [{}]: ", message, hint))?.to_lowercase();
            match input.as_str() {
                "" => return Ok(default_yes),
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => self.say("  Please answer y or n.")?,
            }
        }
    }

    /// Prompt for a non-negative integer, re-asking until the input parses.
    pub fn prompt_count(&mut self, message: &str, default: u32) -> Result<u32> {
        loop {
            let input = self.prompt(&format!("{} [{}]: ", message, default))?;
            if input.is_empty() {
                return Ok(default);
            }
            match input.parse::<u32>() {
                Ok(v) => return Ok(v),
                Err(_) => self.say("  Invalid: must be a non-negative whole number. Try again.")?,
            }
        }
    }

    /// Let the user pick one of `choices`, by 1-based index or by name.
    pub fn prompt_choice<T: Copy>(
        &mut self,
        message: &str,
        choices: &[T],
        name: impl Fn(&T) -> &str,
    ) -> Result<T> {
        self.say(message)?;
        for (i, choice) in choices.iter().enumerate() {
            self.say(&format!("  {}. {}", i + 1, name(choice)))?;
        }

        loop {
            let input = self.prompt("> ")?;
            if let Ok(index) = input.parse::<usize>() {
                if (1..=choices.len()).contains(&index) {
                    return Ok(choices[index - 1]);
                }
            }
            if let Some(choice) = choices.iter().find(|c| name(*c).eq_ignore_ascii_case(&input)) {
                return Ok(*choice);
            }
            self.say(&format!(
                "  Invalid choice. Enter a number between 1 and {} or a name.",
                choices.len()
            ))?;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_prompt_trims_input() {
        let mut p = prompter("  hello  \n");
        assert_eq!(p.prompt("? ").unwrap(), "hello");
    }

    #[test]
    fn test_prompt_errors_on_eof() {
        let mut p = prompter("");
        assert!(p.prompt("? ").is_err());
    }

    #[test]
    fn test_yes_no_default_and_retry() {
        let mut p = prompter("\nmaybe\nYES\nn\n");
        assert!(p.prompt_yes_no("Continue?", true).unwrap());
        assert!(p.prompt_yes_no("Continue?", false).unwrap());
        assert!(!p.prompt_yes_no("Continue?", true).unwrap());
    }

    #[test]
    fn test_count_rejects_negative() {
        let mut p = prompter("-1\nabc\n4\n\n");
        assert_eq!(p.prompt_count("Dependencies", 0).unwrap(), 4);
        assert_eq!(p.prompt_count("Dependencies", 0).unwrap(), 0);
    }

    #[test]
    fn test_choice_by_index_and_name() {
        let choices = ["low", "medium", "high"];
        let mut p = prompter("2\nHIGH\n9\nlow\n");
        assert_eq!(p.prompt_choice("Pick", &choices, |c| *c).unwrap(), "medium");
        assert_eq!(p.prompt_choice("Pick", &choices, |c| *c).unwrap(), "high");
        assert_eq!(p.prompt_choice("Pick", &choices, |c| *c).unwrap(), "low");
    }
}
