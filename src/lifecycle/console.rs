//! # Line-Oriented Console
//!
//! [`Console`] wraps an async reader/writer pair and speaks in whole lines. The
//! binaries hand it Tokio's stdin/stdout; tests hand it byte slices and a
//! `Vec<u8>`.
//!
//! Observers run synchronously and cannot await the writer, so they write into an
//! [`OutputChannel`] instead. The console drains that channel into the writer
//! whenever it is flushed, keeping observer lines in order with everything else.

use std::sync::{Arc, Mutex, PoisonError};
use tokio::io::{self, AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

/// Mutex-guarded queue of pending output lines, shared with synchronous writers.
///
/// The lock guards the output only. Poisoning is recovered by taking the inner
/// value, since a half-pushed line cannot exist.
#[derive(Debug, Clone, Default)]
pub struct OutputChannel {
    pending: Arc<Mutex<Vec<String>>>,
}

impl OutputChannel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues one line.
    pub fn emit(&self, line: impl Into<String>) {
        self.pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(line.into());
    }

    /// Queues several lines under one lock so nothing lands between them.
    pub fn emit_all<I>(&self, lines: I)
    where
        I: IntoIterator<Item = String>,
    {
        self.pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend(lines);
    }

    /// Takes every queued line, oldest first.
    pub fn drain(&self) -> Vec<String> {
        std::mem::take(&mut *self.pending.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

pub struct Console<R, W> {
    reader: R,
    writer: W,
    output: OutputChannel,
}

impl<R, W> Console<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            output: OutputChannel::new(),
        }
    }

    /// A handle for synchronous writers whose lines should reach this console.
    pub fn output_channel(&self) -> OutputChannel {
        self.output.clone()
    }

    /// Reads one line without its terminator. `None` means end of input.
    pub async fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line).await? == 0 {
            return Ok(None);
        }
        let len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(len);
        Ok(Some(line))
    }

    /// Writes `text` without a newline, flushes, then reads the answer.
    pub async fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        self.write(text).await?;
        self.flush().await?;
        self.read_line().await
    }

    pub async fn write(&mut self, text: &str) -> io::Result<()> {
        self.writer.write_all(text.as_bytes()).await
    }

    /// Writes `line` followed by a newline.
    pub async fn say(&mut self, line: &str) -> io::Result<()> {
        self.writer.write_all(line.as_bytes()).await?;
        self.writer.write_all(b"\n").await
    }

    pub async fn say_all(&mut self, lines: &[String]) -> io::Result<()> {
        for line in lines {
            self.say(line).await?;
        }
        Ok(())
    }

    /// Drains pending channel output into the writer, then flushes it.
    pub async fn flush(&mut self) -> io::Result<()> {
        let pending = self.output.drain();
        self.say_all(&pending).await?;
        self.writer.flush().await
    }

    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }
}
