//! The static mnemonic dispatch table.
//!
//! A `LazyLock<HashMap<&str, &MnemonicEntry>>` built once from a flat
//! slice, where each entry carries exactly what a format encoder needs:
//! opcode, funct3, optional funct7, the I-type operand ordering, and an
//! immediate-high override for `slli`/`srli`/`srai`. Opcodes/funct3/funct7
//! below are the real RV32I base-ISA values, since riscv5i's bit layouts
//! are literally that ISA's.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::constants::ImmHighOverride;

/// Which instruction format a mnemonic dispatches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    I(IKind),
    R,
    S,
    B,
    U,
    J,
}

/// I-type mnemonics read their operands in one of three source orders;
/// the dispatcher reorders into `(rd, rs1, imm)` before calling the
/// encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IKind {
    /// `addi rd, rs1, imm` — already in encoder order.
    Arithmetic,
    /// `lw rd, imm(rs1)` as written, tokenizes to `rd, imm, rs1`.
    Load,
    /// `jalr rd, imm, rs1` — same source order as `Load`.
    Jalr,
    /// `ecall`/`ebreak` — no operands; rd/rs1 are fixed at `x0`.
    System { imm: i64 },
}

#[derive(Debug, Clone, Copy)]
pub struct MnemonicEntry {
    pub format: Format,
    pub opcode: u32,
    pub funct3: u32,
    pub funct7: u32,
    pub imm_high_override: ImmHighOverride,
}

const fn entry(format: Format, opcode: u32, funct3: u32, funct7: u32) -> MnemonicEntry {
    MnemonicEntry {
        format,
        opcode,
        funct3,
        funct7,
        imm_high_override: None,
    }
}

const fn entry_with_override(
    format: Format,
    opcode: u32,
    funct3: u32,
    funct7: u32,
    high: u32,
) -> MnemonicEntry {
    MnemonicEntry {
        format,
        opcode,
        funct3,
        funct7,
        imm_high_override: Some(high),
    }
}

const OP_IMM: u32 = 0b0010011;
const LOAD: u32 = 0b0000011;
const JALR: u32 = 0b1100111;
const SYSTEM: u32 = 0b1110011;
const OP: u32 = 0b0110011;
const STORE: u32 = 0b0100011;
const BRANCH: u32 = 0b1100011;
const LUI: u32 = 0b0110111;
const AUIPC: u32 = 0b0010111;
const JAL: u32 = 0b1101111;

const MNEMONICS: &[(&str, MnemonicEntry)] = &[
    // I-type, arithmetic/immediate ordering.
    ("addi", entry(Format::I(IKind::Arithmetic), OP_IMM, 0x0, 0)),
    ("xori", entry(Format::I(IKind::Arithmetic), OP_IMM, 0x4, 0)),
    ("ori", entry(Format::I(IKind::Arithmetic), OP_IMM, 0x6, 0)),
    ("andi", entry(Format::I(IKind::Arithmetic), OP_IMM, 0x7, 0)),
    ("slti", entry(Format::I(IKind::Arithmetic), OP_IMM, 0x2, 0)),
    ("sltiu", entry(Format::I(IKind::Arithmetic), OP_IMM, 0x3, 0)),
    (
        "slli",
        entry_with_override(Format::I(IKind::Arithmetic), OP_IMM, 0x1, 0, 0x00),
    ),
    (
        "srli",
        entry_with_override(Format::I(IKind::Arithmetic), OP_IMM, 0x5, 0, 0x00),
    ),
    (
        "srai",
        entry_with_override(Format::I(IKind::Arithmetic), OP_IMM, 0x5, 0, 0x20),
    ),
    // I-type, load ordering (`rd, imm(rs1)`).
    ("lw", entry(Format::I(IKind::Load), LOAD, 0x2, 0)),
    ("lh", entry(Format::I(IKind::Load), LOAD, 0x1, 0)),
    ("lb", entry(Format::I(IKind::Load), LOAD, 0x0, 0)),
    ("lbu", entry(Format::I(IKind::Load), LOAD, 0x4, 0)),
    ("lhu", entry(Format::I(IKind::Load), LOAD, 0x5, 0)),
    // I-type, jalr ordering (`rd, imm, rs1`).
    ("jalr", entry(Format::I(IKind::Jalr), JALR, 0x0, 0)),
    // I-type, no operands.
    (
        "ecall",
        entry(Format::I(IKind::System { imm: 0 }), SYSTEM, 0x0, 0),
    ),
    (
        "ebreak",
        entry(Format::I(IKind::System { imm: 1 }), SYSTEM, 0x0, 0),
    ),
    // R-type.
    ("add", entry(Format::R, OP, 0x0, 0x00)),
    ("sub", entry(Format::R, OP, 0x0, 0x20)),
    ("sll", entry(Format::R, OP, 0x1, 0x00)),
    ("slt", entry(Format::R, OP, 0x2, 0x00)),
    ("sltu", entry(Format::R, OP, 0x3, 0x00)),
    ("xor", entry(Format::R, OP, 0x4, 0x00)),
    ("srl", entry(Format::R, OP, 0x5, 0x00)),
    ("sra", entry(Format::R, OP, 0x5, 0x20)),
    ("or", entry(Format::R, OP, 0x6, 0x00)),
    ("and", entry(Format::R, OP, 0x7, 0x00)),
    // S-type.
    ("sw", entry(Format::S, STORE, 0x2, 0)),
    ("sh", entry(Format::S, STORE, 0x1, 0)),
    ("sb", entry(Format::S, STORE, 0x0, 0)),
    // B-type.
    ("beq", entry(Format::B, BRANCH, 0x0, 0)),
    ("bne", entry(Format::B, BRANCH, 0x1, 0)),
    ("blt", entry(Format::B, BRANCH, 0x4, 0)),
    ("bge", entry(Format::B, BRANCH, 0x5, 0)),
    ("bltu", entry(Format::B, BRANCH, 0x6, 0)),
    ("bgeu", entry(Format::B, BRANCH, 0x7, 0)),
    // U-type.
    ("lui", entry(Format::U, LUI, 0, 0)),
    ("auipc", entry(Format::U, AUIPC, 0, 0)),
    // J-type.
    ("jal", entry(Format::J, JAL, 0, 0)),
];

pub static MNEMONIC_TABLE: LazyLock<HashMap<&'static str, MnemonicEntry>> =
    LazyLock::new(|| MNEMONICS.iter().copied().collect());

pub fn lookup(mnemonic: &str) -> Option<MnemonicEntry> {
    MNEMONIC_TABLE.get(mnemonic).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_every_documented_mnemonic() {
        for name in [
            "addi", "xori", "ori", "andi", "slli", "srli", "srai", "slti", "sltiu", "jalr",
            "ecall", "ebreak", "lw", "lh", "lb", "lbu", "lhu", "add", "sub", "xor", "or", "and",
            "sll", "srl", "sra", "slt", "sltu", "sw", "sh", "sb", "beq", "bne", "blt", "bge",
            "bltu", "bgeu", "lui", "auipc", "jal",
        ] {
            assert!(lookup(name).is_some(), "missing mnemonic {name}");
        }
    }

    #[test]
    fn rejects_unknown_mnemonic() {
        assert!(lookup("frobnicate").is_none());
    }

    #[test]
    fn srai_carries_sub_opcode_override() {
        let e = lookup("srai").unwrap();
        assert_eq!(e.imm_high_override, Some(0x20));
    }
}
