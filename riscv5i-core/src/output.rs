//! Output writer: sinks one encoded word at a time as either four
//! little-endian bytes or a `0x%08x\n` text line.

use std::io::{self, Write};

use crate::context::OutputFormat;
use crate::raw_instruction::RawInstruction;

/// Wraps any `Write` and emits words in the configured format. Called
/// exactly once per emitted instruction word.
pub struct OutputSink<'w> {
    writer: &'w mut dyn Write,
    format: OutputFormat,
    words_written: usize,
}

impl<'w> OutputSink<'w> {
    pub fn new(writer: &'w mut dyn Write, format: OutputFormat) -> Self {
        OutputSink {
            writer,
            format,
            words_written: 0,
        }
    }

    pub fn write_word(&mut self, word: RawInstruction) -> io::Result<()> {
        match self.format {
            OutputFormat::Binary => self.writer.write_all(&word.to_le_bytes())?,
            OutputFormat::Hex => self.writer.write_all(word.to_hex_line().as_bytes())?,
        }
        self.words_written += 1;
        Ok(())
    }

    /// Total words sunk so far, used by `assembler::assemble`'s return value.
    pub fn words_written(&self) -> usize {
        self.words_written
    }
}
