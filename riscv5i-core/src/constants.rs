//! Shared numeric constants for the riscv5i assembler engine.

/// Every encoded instruction word is exactly one memory word wide.
pub const WORD_SIZE_BYTES: u32 = 4;

/// Number of general-purpose registers (`x0`..`x31`).
pub const REGISTER_COUNT: u32 = 32;

/// Default base address used when the CLI does not override `startOfMemory`.
pub const DEFAULT_START_OF_MEMORY: u32 = 0;

/// Sentinel passed to the I-type encoder's `imm_high_override` parameter when
/// no override applies. `slli`/`srli`/`srai` pass `Some(_)` instead.
pub type ImmHighOverride = Option<u32>;

/// S-type immediates are rejected once their magnitude exceeds this bound
/// (`ImmediateOutOfRange` past `|imm| > 4095`).
pub const S_TYPE_IMM_ABS_MAX: i64 = 4095;

/// B-type branch offsets (in half-words) that still fit the real 11-bit
/// signed branch range encode directly; beyond that but within 20 signed
/// bits a trampoline would be required (`BranchNeedsTrampoline`, unimplemented).
pub const B_TYPE_RANGE_BITS: u32 = 11;
/// Beyond this many signed bits of half-word offset, even a trampoline
/// could not help (`BranchTooFar`).
pub const B_TYPE_MAX_BITS: u32 = 20;
/// J-type jump offsets (in half-words) beyond this many signed bits fail
/// with `JumpTooFar`.
pub const J_TYPE_MAX_BITS: u32 = 20;
