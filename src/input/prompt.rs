use crate::core::{GarageError, Result};
use crate::input::validator::validate_number_bounded;
use crate::vehicle::VehicleColor;
use std::fmt::Display;
use std::io::{self, BufRead, Write};

/// Prompt/validate/retry loops over any line-oriented reader and writer.
///
/// Tests drive it with a `Cursor` and a `Vec<u8>`; the binary uses stdio.
pub struct Prompter<R, W> {
    reader: R,
    writer: W,
}

impl Prompter<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }

    /// Print one line of output.
    pub fn say(&mut self, line: impl Display) -> Result<()> {
        writeln!(self.writer, "{}", line)?;
        Ok(())
    }

    fn read_line(&mut self, prompt: &str) -> Result<String> {
        write!(self.writer, "{}", prompt)?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(GarageError::InputClosed);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Ask until `validator` accepts the answer.
    ///
    /// Retryable errors are printed and the prompt repeats; anything else
    /// (closed input included) is returned.
    pub fn retrieve_input<T, F>(&mut self, prompt: &str, mut validator: F) -> Result<T>
    where
        F: FnMut(&str) -> Result<T>,
    {
        loop {
            let line = self.read_line(prompt)?;
            match validator(&line) {
                Ok(value) => return Ok(value),
                Err(err) if err.is_retryable() => self.say(&err)?,
                Err(err) => return Err(err),
            }
        }
    }

    /// Numbered menu; returns the value of the chosen entry.
    pub fn select_from_menu<'a, D, T>(
        &mut self,
        group: &str,
        options: &'a [(D, T)],
    ) -> Result<&'a T>
    where
        D: Display,
    {
        if options.is_empty() {
            return Err(GarageError::Validation(format!("No {} to choose from", group)));
        }

        self.say(format_args!("Select {}", group))?;
        for (index, (description, _)) in options.iter().enumerate() {
            self.say(format_args!("{}. {}", index, description))?;
        }

        let last = (options.len() - 1) as u32;
        let choice = self.retrieve_input("Choice: ", |s| validate_number_bounded(s, 0, last))?;
        Ok(&options[choice as usize].1)
    }

    pub fn select_color(&mut self) -> Result<VehicleColor> {
        let options = VehicleColor::ALL.map(|color| (color, color));
        self.select_from_menu("Color", &options).copied()
    }
}
