//! Engine-level error kinds and the source-line wrapper around them.
//!
//! A flat `Display`-able enum is returned from every fallible assembler
//! function, and `LineError` pairs one with a 1-based source line number
//! rather than a byte span, since the engine works line-at-a-time rather
//! than token-at-a-time.

use std::fmt;

/// Every way the assembler can fail.
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorKind {
    /// The dispatcher could not match the mnemonic in slot 0.
    UnknownMnemonic(String),
    /// An S-type immediate's magnitude exceeded 4095.
    ImmediateOutOfRange(i64),
    /// A B-type offset exceeded 20 signed bits (well beyond trampoline range).
    BranchTooFar(i64),
    /// A B-type offset exceeded 11 signed bits but fit in 20; trampoline
    /// synthesis is explicitly unimplemented.
    BranchNeedsTrampoline(i64),
    /// A J-type offset exceeded 20 signed bits.
    JumpTooFar(i64),
    /// A label was referenced that was never declared anywhere in the source.
    UndefinedLabel(String),
    /// A label name was declared a second time.
    DuplicateLabel {
        name: String,
        first_declared_on: i32,
    },
    /// `startOfMemory` was not a multiple of the word size.
    MisalignedStartOfMemory(u32),
    /// A token that should have been a register (`x<N>`) wasn't.
    InvalidRegister(String),
    /// A token that should have been a base-10/hex/binary immediate wasn't.
    InvalidImmediate(String),
    /// An instruction line did not carry enough operand tokens for its format.
    MissingOperand { mnemonic: String, expected: usize },
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::UnknownMnemonic(m) => write!(f, "unknown mnemonic `{}`", m),
            ErrorKind::ImmediateOutOfRange(imm) => write!(
                f,
                "immediate {} out of range (magnitude must not exceed 4095)",
                imm
            ),
            ErrorKind::BranchTooFar(off) => write!(
                f,
                "branch offset {} half-words exceeds the 20-bit signed range",
                off
            ),
            ErrorKind::BranchNeedsTrampoline(off) => write!(
                f,
                "branch offset {} half-words exceeds the 11-bit branch range; \
                 trampoline synthesis is not implemented",
                off
            ),
            ErrorKind::JumpTooFar(off) => write!(
                f,
                "jump offset {} half-words exceeds the 20-bit signed range",
                off
            ),
            ErrorKind::UndefinedLabel(name) => write!(f, "undefined label `{}`", name),
            ErrorKind::DuplicateLabel {
                name,
                first_declared_on,
            } => write!(
                f,
                "label `{}` was already declared on line {}",
                name, first_declared_on
            ),
            ErrorKind::MisalignedStartOfMemory(addr) => write!(
                f,
                "startOfMemory {} is not a multiple of the {}-byte word size",
                addr,
                crate::constants::WORD_SIZE_BYTES
            ),
            ErrorKind::InvalidRegister(tok) => write!(f, "`{}` is not a valid register (expected x0-x31)", tok),
            ErrorKind::InvalidImmediate(tok) => write!(f, "`{}` is not a valid immediate", tok),
            ErrorKind::MissingOperand { mnemonic, expected } => write!(
                f,
                "`{}` expects {} operand(s) but the line did not supply them",
                mnemonic, expected
            ),
        }
    }
}

impl std::error::Error for ErrorKind {}

/// Pairs an `ErrorKind` with the 1-based source line it was raised on.
#[derive(Debug, Clone, PartialEq)]
pub struct LineError {
    pub line: i32,
    pub kind: ErrorKind,
}

impl LineError {
    pub fn new(line: i32, kind: ErrorKind) -> Self {
        LineError { line, kind }
    }
}

impl fmt::Display for LineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.kind)
    }
}

impl std::error::Error for LineError {}

pub type AssembleResult<T> = Result<T, ErrorKind>;

/// Top-level error returned by the public `assemble` entry point: either a
/// source-level failure pinned to a line, or an I/O failure writing output.
#[derive(Debug)]
pub enum AssemblerError {
    Source(LineError),
    Io(std::io::Error),
}

impl fmt::Display for AssemblerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssemblerError::Source(e) => write!(f, "{}", e),
            AssemblerError::Io(e) => write!(f, "i/o error: {}", e),
        }
    }
}

impl std::error::Error for AssemblerError {}

impl From<LineError> for AssemblerError {
    fn from(e: LineError) -> Self {
        AssemblerError::Source(e)
    }
}

impl From<std::io::Error> for AssemblerError {
    fn from(e: std::io::Error) -> Self {
        AssemblerError::Io(e)
    }
}
