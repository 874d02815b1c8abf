//! The instruction subsystem: format encoders, the mnemonic dispatch
//! table, and pseudo-instruction expansion.

pub mod formats;
pub mod mnemonic_table;
pub mod pseudo;

use crate::error::ErrorKind;
use crate::instruction::formats::{b_type, i_type, j_type, r_type, s_type, u_type};
use crate::instruction::mnemonic_table::{Format, IKind, MnemonicEntry};
use crate::operand::{parse_immediate, parse_register};
use crate::raw_instruction::RawInstruction;
use crate::symbol::SymbolTable;
use crate::token::TokenSlots;

/// Resolves a B-type/J-type `target` operand to a signed halfword offset
/// from `current_byte_address`. A target that parses as a plain integer
/// is a literal byte address; otherwise it must name a declared label.
fn resolve_target_offset(
    target: &str,
    symbols: &SymbolTable,
    start_of_memory: u32,
    current_byte_address: i64,
) -> Result<i64, ErrorKind> {
    let target_byte_address = if let Ok(literal) = parse_immediate(target) {
        literal
    } else {
        let label = symbols
            .get(target)
            .ok_or_else(|| ErrorKind::UndefinedLabel(target.to_string()))?;
        start_of_memory as i64 + crate::constants::WORD_SIZE_BYTES as i64 * label.instruction_index as i64
    };
    Ok((target_byte_address - current_byte_address) / 2)
}

/// Encodes one already-expanded real instruction line into a 32-bit word.
///
/// `tokens` is the (possibly pseudo-expanded) token slice for a single
/// real instruction, slot 0 holding its lowercase mnemonic. `symbols` and
/// the current byte address are needed only by the branch/jump formats.
pub fn encode_real_instruction(
    tokens: &TokenSlots,
    symbols: &SymbolTable,
    start_of_memory: u32,
    current_byte_address: i64,
) -> Result<RawInstruction, ErrorKind> {
    let mnemonic = tokens.get(0);
    let entry: MnemonicEntry = mnemonic_table::lookup(mnemonic)
        .ok_or_else(|| ErrorKind::UnknownMnemonic(mnemonic.to_string()))?;

    match entry.format {
        Format::I(kind) => encode_i(tokens, mnemonic, &entry, kind),
        Format::R => encode_r(tokens, mnemonic, &entry),
        Format::S => encode_s(tokens, mnemonic, &entry),
        Format::B => encode_b(tokens, mnemonic, &entry, symbols, start_of_memory, current_byte_address),
        Format::U => encode_u(tokens, mnemonic, &entry),
        Format::J => encode_j(tokens, mnemonic, &entry, symbols, start_of_memory, current_byte_address),
    }
}

fn missing(mnemonic: &str, expected: usize) -> ErrorKind {
    ErrorKind::MissingOperand {
        mnemonic: mnemonic.to_string(),
        expected,
    }
}

fn encode_i(
    tokens: &TokenSlots,
    mnemonic: &str,
    entry: &MnemonicEntry,
    kind: IKind,
) -> Result<RawInstruction, ErrorKind> {
    let (rd, rs1, imm) = match kind {
        IKind::Arithmetic => {
            let rd = parse_register(tokens.get(1)).map_err(|_| missing(mnemonic, 3))?;
            let rs1 = parse_register(tokens.get(2)).map_err(|_| missing(mnemonic, 3))?;
            let imm = parse_immediate(tokens.get(3)).map_err(|_| missing(mnemonic, 3))?;
            (rd, rs1, imm)
        }
        IKind::Load | IKind::Jalr => {
            let rd = parse_register(tokens.get(1)).map_err(|_| missing(mnemonic, 3))?;
            let imm = parse_immediate(tokens.get(2)).map_err(|_| missing(mnemonic, 3))?;
            let rs1 = parse_register(tokens.get(3)).map_err(|_| missing(mnemonic, 3))?;
            (rd, rs1, imm)
        }
        IKind::System { imm } => (0, 0, imm),
    };

    i_type::encode(i_type::IArgs {
        opcode: entry.opcode,
        funct3: entry.funct3,
        rd,
        rs1,
        imm,
        imm_high_override: entry.imm_high_override,
    })
}

fn encode_r(tokens: &TokenSlots, mnemonic: &str, entry: &MnemonicEntry) -> Result<RawInstruction, ErrorKind> {
    let rd = parse_register(tokens.get(1)).map_err(|_| missing(mnemonic, 3))?;
    let rs1 = parse_register(tokens.get(2)).map_err(|_| missing(mnemonic, 3))?;
    let rs2 = parse_register(tokens.get(3)).map_err(|_| missing(mnemonic, 3))?;

    r_type::encode(r_type::RArgs {
        opcode: entry.opcode,
        funct3: entry.funct3,
        funct7: entry.funct7,
        rd,
        rs1,
        rs2,
    })
}

fn encode_s(tokens: &TokenSlots, mnemonic: &str, entry: &MnemonicEntry) -> Result<RawInstruction, ErrorKind> {
    // Source order `sw rs2, imm, rs1`, i.e. `sw rs2, imm(rs1)`.
    let rs2 = parse_register(tokens.get(1)).map_err(|_| missing(mnemonic, 3))?;
    let imm = parse_immediate(tokens.get(2)).map_err(|_| missing(mnemonic, 3))?;
    let rs1 = parse_register(tokens.get(3)).map_err(|_| missing(mnemonic, 3))?;

    s_type::encode(s_type::SArgs {
        opcode: entry.opcode,
        funct3: entry.funct3,
        rs1,
        rs2,
        imm,
    })
}

fn encode_b(
    tokens: &TokenSlots,
    mnemonic: &str,
    entry: &MnemonicEntry,
    symbols: &SymbolTable,
    start_of_memory: u32,
    current_byte_address: i64,
) -> Result<RawInstruction, ErrorKind> {
    let rs1 = parse_register(tokens.get(1)).map_err(|_| missing(mnemonic, 3))?;
    let rs2 = parse_register(tokens.get(2)).map_err(|_| missing(mnemonic, 3))?;
    let target = tokens.get(3);
    if target.is_empty() {
        return Err(missing(mnemonic, 3));
    }
    let halfword_offset = resolve_target_offset(target, symbols, start_of_memory, current_byte_address)?;

    b_type::encode(b_type::BArgs {
        opcode: entry.opcode,
        funct3: entry.funct3,
        rs1,
        rs2,
        halfword_offset,
    })
}

fn encode_u(tokens: &TokenSlots, mnemonic: &str, entry: &MnemonicEntry) -> Result<RawInstruction, ErrorKind> {
    let rd = parse_register(tokens.get(1)).map_err(|_| missing(mnemonic, 2))?;
    let imm = parse_immediate(tokens.get(2)).map_err(|_| missing(mnemonic, 2))?;

    u_type::encode(u_type::UArgs {
        opcode: entry.opcode,
        rd,
        imm,
    })
}

fn encode_j(
    tokens: &TokenSlots,
    mnemonic: &str,
    entry: &MnemonicEntry,
    symbols: &SymbolTable,
    start_of_memory: u32,
    current_byte_address: i64,
) -> Result<RawInstruction, ErrorKind> {
    let rd = parse_register(tokens.get(1)).map_err(|_| missing(mnemonic, 2))?;
    let target = tokens.get(2);
    if target.is_empty() {
        return Err(missing(mnemonic, 2));
    }
    let halfword_offset = resolve_target_offset(target, symbols, start_of_memory, current_byte_address)?;

    j_type::encode(j_type::JArgs {
        opcode: entry.opcode,
        rd,
        halfword_offset,
    })
}
