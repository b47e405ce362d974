//! Interactive terminal shell
//!
//! Presents the converter form, lets the user edit fields by number and
//! runs a conversion on `c`. Field values survive between runs. The shell
//! reads no commands while a conversion is in flight, so only one runs at
//! a time.

pub mod form;
pub mod worker;

pub use form::{Field, Form};
pub use worker::ConversionJob;

use crate::convert::{ConversionOutcome, Converter};
use crate::report::Notice;
use crate::Result;
use log::debug;
use std::io::{BufRead, Write};
use std::sync::Arc;

/// Line that ends multi-line input
const END_OF_INPUT: &str = ".";

const HELP: &str = "\
Commands:
  1-5   edit the numbered field
  c     convert with the current values
  h     show this help
  q     quit

Field 2 accepts several lines; finish with a line containing only '.'.
Source types: File name, URL, Text. Languages: Español, English, Français.
";

/// Result of handling one command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellAction {
    Continue,
    Quit,
}

/// Terminal front end over a [`Converter`]
pub struct Shell<R, W> {
    input: R,
    output: W,
    form: Form,
    converter: Arc<Converter>,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W, converter: Arc<Converter>) -> Self {
        Self {
            input,
            output,
            form: Form::new(),
            converter,
        }
    }

    pub fn form(&self) -> &Form {
        &self.form
    }

    /// Loop until `q` or end of input
    pub fn run(&mut self) -> Result<()> {
        write!(self.output, "{}", self.form.render())?;
        self.print_menu()?;

        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                writeln!(self.output)?;
                break;
            };

            if self.handle_command(line.trim())? == ShellAction::Quit {
                break;
            }
        }

        debug!("Shell finished");
        Ok(())
    }

    /// Dispatch a single command typed at the prompt
    pub fn handle_command(&mut self, command: &str) -> Result<ShellAction> {
        if let Some(field) = Field::from_key(command) {
            self.edit(field)?;
            write!(self.output, "{}", self.form.render())?;
            return Ok(ShellAction::Continue);
        }

        match command.to_lowercase().as_str() {
            "" => {}
            "c" | "convert" => {
                self.convert()?;
                write!(self.output, "{}", self.form.render())?;
            }
            "h" | "help" | "?" => write!(self.output, "{}", HELP)?,
            "q" | "quit" | "exit" => return Ok(ShellAction::Quit),
            other => {
                writeln!(self.output, "Unknown command '{}'. Type h for help.", other)?;
            }
        }
        Ok(ShellAction::Continue)
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(
            self.output,
            "\n [1-5] edit field  [c] convert  [h] help  [q] quit"
        )?;
        Ok(())
    }

    fn edit(&mut self, field: Field) -> Result<()> {
        match field.choices() {
            Some(choices) => writeln!(self.output, "{} [{}]:", field.label(), choices)?,
            None => writeln!(self.output, "{}:", field.label())?,
        }

        if field.is_multiline() {
            writeln!(
                self.output,
                "(finish with a line containing only '{}')",
                END_OF_INPUT
            )?;
            self.output.flush()?;

            let mut lines = Vec::new();
            while let Some(line) = self.read_line()? {
                if line.trim_end() == END_OF_INPUT {
                    break;
                }
                lines.push(line);
            }
            self.form.set(field, lines.join("\n").trim());
        } else {
            self.output.flush()?;
            if let Some(line) = self.read_line()? {
                self.form.set(field, line.trim());
            }
        }
        Ok(())
    }

    fn convert(&mut self) -> Result<()> {
        let request = self.form.request();
        debug!("Convert requested: {:?}", request);

        write!(self.output, "Converting")?;
        self.output.flush()?;

        let job = ConversionJob::spawn(Arc::clone(&self.converter), request)?;
        let output = &mut self.output;
        let (outcome, notices) = job.wait(|| {
            let _ = write!(output, ".");
            let _ = output.flush();
        })?;
        writeln!(self.output)?;

        self.show_notices(&notices)?;
        self.show_outcome(&outcome)?;
        Ok(())
    }

    fn show_notices(&mut self, notices: &[Notice]) -> Result<()> {
        for notice in notices {
            let kind = if notice.is_error() { "Error" } else { "Success" };
            writeln!(self.output, "[{}] {}", kind, notice)?;
        }
        Ok(())
    }

    fn show_outcome(&mut self, outcome: &ConversionOutcome) -> Result<()> {
        if let Some(path) = &outcome.text_file {
            writeln!(self.output, "Text saved to {}", path.display())?;
        }
        Ok(())
    }

    /// Next line without its terminator, `None` at end of input
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(|c: char| c == '\n' || c == '\r').len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}
