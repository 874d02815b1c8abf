//! Core two-pass assembler engine for the riscv5i reduced instruction set.
//! No I/O beyond writing to a caller-supplied `Write`; the `riscv5i-as`
//! binary crate owns file handling, CLI parsing, and diagnostic
//! formatting.

pub mod assembler;
pub mod constants;
pub mod context;
pub mod error;
pub mod instruction;
pub mod line_reader;
pub mod operand;
pub mod output;
pub mod pass1;
pub mod pass2;
pub mod raw_instruction;
pub mod session;
pub mod symbol;
pub mod token;

pub use assembler::{assemble, assemble_to_vec};
pub use context::{AssemblerContext, OutputFormat};
pub use error::{AssemblerError, ErrorKind, LineError};
pub use raw_instruction::RawInstruction;
pub use symbol::SymbolTable;
