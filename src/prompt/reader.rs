//! Line-oriented prompt provider reading from any `BufRead`
//!
//! Used when stdin is not a terminal (piped input) and by tests. Every
//! question consumes one line; reaching the end of the input before a
//! question is answered fails the prompt.

use super::interface::{TextPromptConfig, TextPrompter};
use crate::error::{Error, Result};
use std::cell::RefCell;
use std::io::{BufRead, Stderr, Write};

#[derive(Debug)]
pub struct ReaderPrompter<R: BufRead, W: Write = Stderr> {
    reader: RefCell<R>,
    /// Where prompt texts are shown
    output: RefCell<W>,
}

impl<R: BufRead> ReaderPrompter<R> {
    pub fn new(reader: R) -> Self {
        Self::with_output(reader, std::io::stderr())
    }
}

impl<R: BufRead, W: Write> ReaderPrompter<R, W> {
    pub fn with_output(reader: R, output: W) -> Self {
        Self { reader: RefCell::new(reader), output: RefCell::new(output) }
    }

    /// Returns the output the prompts were written to.
    pub fn into_output(self) -> W {
        self.output.into_inner()
    }

    /// Reads one line without its terminator, `None` at end of input.
    fn next_line(&self) -> Result<Option<String>> {
        let mut buf = String::new();
        let read = self.reader.borrow_mut().read_line(&mut buf)?;
        if read == 0 {
            return Ok(None);
        }
        let line = buf.trim_end_matches(['\n', '\r']).to_string();
        Ok(Some(line))
    }

    fn show_prompt(&self, config: &TextPromptConfig) -> Result<()> {
        let mut output = self.output.borrow_mut();
        match &config.default {
            Some(default) => write!(output, "{} [{}]: ", config.prompt, default)?,
            None => write!(output, "{}: ", config.prompt)?,
        }
        output.flush()?;
        Ok(())
    }
}

impl<R: BufRead, W: Write> TextPrompter for ReaderPrompter<R, W> {
    fn prompt_text(&self, config: &TextPromptConfig) -> Result<String> {
        loop {
            self.show_prompt(config)?;

            let Some(line) = self.next_line()? else {
                writeln!(self.output.borrow_mut())?;
                return Err(Error::InputClosed(format!(
                    "no answer for '{}'",
                    config.prompt
                )));
            };

            match (line.is_empty(), &config.default) {
                (false, _) => return Ok(line),
                (true, Some(default)) => return Ok(default.clone()),
                (true, None) => {
                    log::debug!("Empty answer for '{}', asking again", config.prompt)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn config(prompt: &str, default: Option<&str>) -> TextPromptConfig {
        TextPromptConfig { prompt: prompt.to_string(), default: default.map(String::from) }
    }

    #[test]
    fn reads_one_line_per_question() {
        let prompter = ReaderPrompter::new(Cursor::new("first\r\nsecond\n"));
        assert_eq!(prompter.prompt_text(&config("A", None)).unwrap(), "first");
        assert_eq!(prompter.prompt_text(&config("B", None)).unwrap(), "second");
    }

    #[test]
    fn empty_line_uses_default() {
        let prompter = ReaderPrompter::new(Cursor::new("\n"));
        assert_eq!(prompter.prompt_text(&config("Currency", Some("USD"))).unwrap(), "USD");
    }

    #[test]
    fn empty_line_without_default_asks_again() {
        let prompter = ReaderPrompter::new(Cursor::new("\n\nabc123\n"));
        assert_eq!(prompter.prompt_text(&config("Client id", None)).unwrap(), "abc123");
    }

    #[test]
    fn end_of_input_is_an_error() {
        let prompter = ReaderPrompter::new(Cursor::new(""));
        let err = prompter.prompt_text(&config("Client id", Some("x"))).unwrap_err();
        assert!(matches!(err, Error::InputClosed(_)));
    }

    #[test]
    fn last_line_without_newline_still_counts() {
        let prompter = ReaderPrompter::new(Cursor::new("tok_map_1"));
        assert_eq!(prompter.prompt_text(&config("Token", None)).unwrap(), "tok_map_1");
    }

    #[test]
    fn answered_prompts_print_no_blank_lines() {
        let prompter = ReaderPrompter::with_output(Cursor::new("abc123\n\n"), Vec::new());
        prompter.prompt_text(&config("Client id", None)).unwrap();
        prompter.prompt_text(&config("Currency", Some("USD"))).unwrap();

        let shown = String::from_utf8(prompter.into_output()).unwrap();
        assert_eq!(shown, "Client id: Currency [USD]: ");
    }

    #[test]
    fn end_of_input_terminates_the_prompt_line() {
        let prompter = ReaderPrompter::with_output(Cursor::new(""), Vec::new());
        assert!(prompter.prompt_text(&config("Client id", None)).is_err());

        let shown = String::from_utf8(prompter.into_output()).unwrap();
        assert_eq!(shown, "Client id: \n");
    }
}
