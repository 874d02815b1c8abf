//! The engine's explicit run configuration.
//!
//! Bundles the symbol table, instruction index, output sink, and options
//! that a process-wide-globals design would otherwise scatter across
//! mutable statics into one `AssemblerContext` value passed explicitly
//! through every function. That removes hidden coupling and lets multiple
//! files assemble concurrently. Only the read-only configuration lives
//! here; the symbol table and running instruction index are still owned
//! by whichever pass is using them (see `pass1`/`pass2`), since they are
//! mutated during a single pass rather than fixed for the run.

use crate::constants::DEFAULT_START_OF_MEMORY;
use crate::error::ErrorKind;

/// Output encoding selected by the `format` CLI option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Raw concatenation of 32-bit little-endian words.
    Binary,
    /// One `0x%08x\n` line per word.
    Hex,
}

impl OutputFormat {
    /// Parses the four accepted synonyms: `binary`/`bin` and
    /// `hex`/`hexadecimal`.
    pub fn parse(s: &str) -> Option<OutputFormat> {
        match s {
            "binary" | "bin" => Some(OutputFormat::Binary),
            "hex" | "hexadecimal" => Some(OutputFormat::Hex),
            _ => None,
        }
    }

    /// The default output file extension for this format.
    pub fn default_extension(self) -> &'static str {
        match self {
            OutputFormat::Binary => "bin.riscv5i",
            OutputFormat::Hex => "hex.riscv5i",
        }
    }
}

/// The per-run configuration threaded explicitly through both passes.
#[derive(Debug, Clone, Copy)]
pub struct AssemblerContext {
    pub start_of_memory: u32,
    pub format: OutputFormat,
    pub verbose: bool,
}

impl AssemblerContext {
    pub fn new(start_of_memory: u32, format: OutputFormat) -> Result<Self, ErrorKind> {
        if start_of_memory % crate::constants::WORD_SIZE_BYTES != 0 {
            return Err(ErrorKind::MisalignedStartOfMemory(start_of_memory));
        }
        Ok(AssemblerContext {
            start_of_memory,
            format,
            verbose: false,
        })
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Byte address of the instruction at `instruction_index`:
    /// `startOfMemory + 4·i`.
    pub fn byte_address(&self, instruction_index: i64) -> i64 {
        self.start_of_memory as i64 + crate::constants::WORD_SIZE_BYTES as i64 * instruction_index
    }
}

impl Default for AssemblerContext {
    fn default() -> Self {
        AssemblerContext {
            start_of_memory: DEFAULT_START_OF_MEMORY,
            format: OutputFormat::Binary,
            verbose: false,
        }
    }
}
