//! Host I/O implementations.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use crate::prelude::*;

/// Prompt written before every numeric read from an interactive host
pub const INPUT_PROMPT: &str = "enter number: ";

/// The I/O surface used by the interpreter
pub trait HostIo {
    /// Write one value to the host's output as a `=> value` line
    fn print(&mut self, value: &Value) -> Result<()>;

    /// Read one integer from the host's input
    fn read_number(&mut self) -> Result<i64>;
}

impl<H: HostIo + ?Sized> HostIo for &mut H {
    fn print(&mut self, value: &Value) -> Result<()> {
        (**self).print(value)
    }

    fn read_number(&mut self) -> Result<i64> {
        (**self).read_number()
    }
}

impl<H: HostIo + ?Sized> HostIo for Box<H> {
    fn print(&mut self, value: &Value) -> Result<()> {
        (**self).print(value)
    }

    fn read_number(&mut self) -> Result<i64> {
        (**self).read_number()
    }
}

fn parse_number(line: &str) -> Result<i64> {
    line.trim()
        .parse()
        .map_err(|_| Error::invalid_number_input("Input is not an integer"))
}

/// Host backed by a line reader and a writer, normally stdin and stdout
#[derive(Debug)]
pub struct StdioHost<R, W> {
    reader: R,
    writer: W,
}

impl StdioHost<io::StdinLock<'static>, io::Stdout> {
    /// Host bound to the process's standard streams
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> StdioHost<R, W> {
    /// Host over arbitrary streams
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Give back the underlying streams
    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }
}

impl<R: BufRead, W: Write> HostIo for StdioHost<R, W> {
    fn print(&mut self, value: &Value) -> Result<()> {
        writeln!(self.writer, "=> {value}").map_err(|_| Error::io_error("Failed to write output"))
    }

    fn read_number(&mut self) -> Result<i64> {
        self.writer
            .write_all(INPUT_PROMPT.as_bytes())
            .and_then(|()| self.writer.flush())
            .map_err(|_| Error::io_error("Failed to write prompt"))?;

        let mut line = String::new();
        let read = self
            .reader
            .read_line(&mut line)
            .map_err(|_| Error::io_error("Failed to read input"))?;
        if read == 0 {
            return Err(urt_error::input_exhausted_error("End of input"));
        }
        parse_number(&line)
    }
}

/// Host with scripted input and captured output
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BufferedHost {
    input:  VecDeque<i64>,
    output: Vec<String>,
}

impl BufferedHost {
    /// Host with no input
    pub fn new() -> Self {
        Self::default()
    }

    /// Host that answers `getnumber` from `input`, in order
    pub fn with_input(input: impl IntoIterator<Item = i64>) -> Self {
        Self {
            input:  input.into_iter().collect(),
            output: Vec::new(),
        }
    }

    /// Captured output lines
    pub fn output(&self) -> &[String] {
        &self.output
    }

    /// Input not yet consumed
    pub fn remaining_input(&self) -> usize {
        self.input.len()
    }
}

impl HostIo for BufferedHost {
    fn print(&mut self, value: &Value) -> Result<()> {
        self.output.push(format!("=> {value}"));
        Ok(())
    }

    fn read_number(&mut self) -> Result<i64> {
        let number = self
            .input
            .pop_front()
            .ok_or(urt_error::input_exhausted_error("Scripted input exhausted"))?;
        tracing::trace!(number, "scripted input");
        Ok(number)
    }
}
