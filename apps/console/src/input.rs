//! # Input Reader
//!
//! Typed, re-prompting parser over a line-oriented input stream.
//!
//! ## Reading Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  stdin:  "abc 7 rest\n"  "Marta\n"                                      │
//! │                                                                         │
//! │  read_int()                                                             │
//! │    token "abc"  → not a number → "Ingrese un número válido: "          │
//! │    token "7"    → Ok(7), " rest" discarded                              │
//! │                                                                         │
//! │  read_line()    → "Marta"                                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Numbers are whitespace-delimited tokens and may sit on a later line than
//! the prompt. Integers must fit in 32 bits. Once a number is accepted, the
//! rest of its line is dropped so the next `read_line` starts on a fresh line.

use std::io::{BufRead, Write};
use std::str::FromStr;

use tracing::trace;

use crate::error::{ConsoleError, ConsoleResult};

/// Written once for every token that does not parse.
pub const REPROMPT: &str = "Ingrese un número válido: ";

/// Line reader with integer and decimal helpers.
#[derive(Debug)]
pub struct InputReader<R> {
    source: R,
    /// Unconsumed tail of the current line, if a token was taken from it.
    pending: Option<String>,
}

impl<R: BufRead> InputReader<R> {
    pub fn new(source: R) -> Self {
        InputReader {
            source,
            pending: None,
        }
    }

    /// Returns the next line without its line terminator.
    ///
    /// Inner and leading whitespace is kept as typed.
    ///
    /// ## Errors
    /// `InputExhausted` at end of input.
    pub fn read_line(&mut self) -> ConsoleResult<String> {
        match self.pending.take() {
            Some(rest) => Ok(rest),
            None => self.next_raw_line(),
        }
    }

    /// Reads tokens until one parses as a signed 32-bit integer.
    ///
    /// Every rejected token writes [`REPROMPT`] to `out`, including numbers
    /// too wide for 32 bits. The value is widened to `i64` for the caller.
    pub fn read_int<W: Write>(&mut self, out: &mut W) -> ConsoleResult<i64> {
        self.read_parsed(out, |token| i32::from_str(token).ok().map(i64::from))
    }

    /// Reads tokens until one parses as a finite decimal (`.` separator).
    pub fn read_decimal<W: Write>(&mut self, out: &mut W) -> ConsoleResult<f64> {
        self.read_parsed(out, |token| {
            f64::from_str(token).ok().filter(|value| value.is_finite())
        })
    }

    fn read_parsed<T, W, F>(&mut self, out: &mut W, parse: F) -> ConsoleResult<T>
    where
        W: Write,
        F: Fn(&str) -> Option<T>,
    {
        loop {
            let token = self.next_token()?;
            if let Some(value) = parse(&token) {
                // Discard the remainder of the line
                self.pending = None;
                return Ok(value);
            }
            trace!(%token, "Rejected numeric token");
            write!(out, "{}", REPROMPT)?;
            out.flush()?;
        }
    }

    /// Next whitespace-delimited token, crossing line boundaries as needed.
    fn next_token(&mut self) -> ConsoleResult<String> {
        loop {
            let line = match self.pending.take() {
                Some(rest) => rest,
                None => self.next_raw_line()?,
            };

            let trimmed = line.trim_start();
            if trimmed.is_empty() {
                continue;
            }

            let end = trimmed.find(char::is_whitespace).unwrap_or(trimmed.len());
            let (token, rest) = trimmed.split_at(end);
            self.pending = Some(rest.to_string());
            return Ok(token.to_string());
        }
    }

    fn next_raw_line(&mut self) -> ConsoleResult<String> {
        let mut buf = String::new();
        if self.source.read_line(&mut buf)? == 0 {
            return Err(ConsoleError::InputExhausted);
        }

        if buf.ends_with('\n') {
            buf.pop();
            if buf.ends_with('\r') {
                buf.pop();
            }
        }
        Ok(buf)
    }
}
