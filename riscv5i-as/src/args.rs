//! Command-line surface for the assembler binary.

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(about = "Two-pass assembler for the riscv5i base integer instruction subset")]
pub struct Cli {
    /// Source file to assemble. Reads from stdin when omitted.
    pub input_filename: Option<PathBuf>,

    /// Destination for the assembled output. Defaults to the input file's
    /// stem with an extension chosen from `format`.
    #[arg(short, long)]
    pub output_filename: Option<PathBuf>,

    /// Output encoding: `binary`/`bin` or `hex`/`hexadecimal`.
    #[arg(short, long, default_value = "binary")]
    pub format: String,

    /// Base address (in bytes) instructions are assumed to load at.
    #[arg(short = 's', long, default_value_t = 0)]
    pub start_of_memory: u32,

    /// Trace each assembled line to stderr as it is encoded.
    #[arg(short, long)]
    pub verbose: bool,
}
