//! Line-oriented question/answer loops over an input stream.

use std::io::{self, BufRead, BufReader, Cursor, Read, Stdin, Stdout, Write};

use crate::error::InputError;

/// Source of answer lines.
pub trait LineSource {
    /// Append one line to `buf`, returning the bytes read (0 at end of input).
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize>;
}

/// Process stdin. Each read takes the global stdin lock only for the
/// duration of the call, so several prompters can share it.
pub struct StdinLines(Stdin);

impl StdinLines {
    pub fn new() -> Self {
        StdinLines(io::stdin())
    }
}

impl Default for StdinLines {
    fn default() -> Self {
        Self::new()
    }
}

impl LineSource for StdinLines {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        self.0.read_line(buf)
    }
}

impl<T: AsRef<[u8]>> LineSource for Cursor<T> {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        BufRead::read_line(self, buf)
    }
}

impl<R: Read> LineSource for BufReader<R> {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        BufRead::read_line(self, buf)
    }
}

/// Asks questions on `output` and reads trimmed answers from `input`.
pub struct Prompter<I, W> {
    input: I,
    output: W,
}

impl Prompter<StdinLines, Stdout> {
    pub fn stdio() -> Self {
        Prompter::new(StdinLines::new(), io::stdout())
    }
}

impl<I: LineSource, W: Write> Prompter<I, W> {
    pub fn new(input: I, output: W) -> Self {
        Prompter { input, output }
    }

    /// Print `prompt` without a newline and read one trimmed answer.
    ///
    /// Yields `None` for a line that is not valid UTF-8. That line has
    /// already been consumed, so the caller can simply ask again.
    pub fn ask(&mut self, prompt: &str) -> Result<Option<String>, InputError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => Err(InputError::Closed),
            Ok(_) => Ok(Some(line.trim().to_string())),
            Err(e) if e.kind() == io::ErrorKind::InvalidData => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Print a full line
    pub fn say(&mut self, message: &str) -> Result<(), InputError> {
        writeln!(self.output, "{message}")?;
        Ok(())
    }

    /// Ask `prompt` until `parse` accepts the answer, printing `complaint`
    /// after every rejected or unreadable answer.
    pub fn ask_until<T>(
        &mut self,
        prompt: &str,
        complaint: &str,
        mut parse: impl FnMut(&str) -> Option<T>,
    ) -> Result<T, InputError> {
        loop {
            match self.ask(prompt)? {
                Some(answer) => {
                    if let Some(value) = parse(&answer) {
                        return Ok(value);
                    }
                    tracing::debug!(answer = %answer, "rejected answer");
                }
                None => tracing::debug!("unreadable answer"),
            }
            self.say(complaint)?;
        }
    }

    pub fn output(&self) -> &W {
        &self.output
    }
}
