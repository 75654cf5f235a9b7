// src/console.rs
use std::fmt::Display;
use std::io::{self, Stderr, Stdout, Write};

/// Operator-facing output: results on `out`, failures on `err`.
pub struct Console<O: Write, E: Write> {
    out: O,
    err: E,
}

impl Console<Stdout, Stderr> {
    pub fn stdio() -> Self {
        Self::new(io::stdout(), io::stderr())
    }
}

impl<O: Write, E: Write> Console<O, E> {
    pub fn new(out: O, err: E) -> Self {
        Self { out, err }
    }

    pub fn info(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.out, "{}", message)
    }

    pub fn error(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.err, "{}", message)
    }

    /// Writes a rendered block (such as a table) as-is.
    pub fn write_block(&mut self, block: &impl Display) -> io::Result<()> {
        write!(self.out, "{}", block)?;
        self.out.flush()
    }

    pub fn into_parts(self) -> (O, E) {
        (self.out, self.err)
    }
}
