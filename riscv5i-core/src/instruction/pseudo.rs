//! Pseudo-instruction expansion.
//!
//! Expansion returns an explicit tagged value — a real instruction's
//! tokens, or the list of real instructions a pseudo expands to — rather
//! than mutating a shared buffer in place and recursing back into the
//! dispatcher. That lets pass one and pass two share the exact same
//! expansion and therefore agree on how many words a line produces,
//! instead of a mutate-in-place expander letting the two counts drift.

use crate::error::ErrorKind;
use crate::operand::parse_immediate;
use crate::token::TokenSlots;

/// The result of resolving one line's mnemonic: either it was already a
/// real instruction, or it was a pseudo-instruction that expands to one or
/// more real instructions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expansion {
    Real(TokenSlots),
    Pseudo(Vec<TokenSlots>),
}

impl Expansion {
    /// How many instruction words this line ultimately produces. Pass one
    /// uses this to advance `instructionIndex` by the true count instead of
    /// always by one, so a multi-word pseudo-instruction can never leave
    /// pass one and pass two disagreeing about later instruction indices.
    pub fn word_count(&self) -> i32 {
        match self {
            Expansion::Real(_) => 1,
            Expansion::Pseudo(words) => words.len() as i32,
        }
    }
}

/// Resolves slot 0 of `tokens`, expanding it if it names a pseudo-instruction.
/// `tokens` must already have been shifted left past any label, as
/// `classify` leaves it.
pub fn expand(tokens: &TokenSlots) -> Result<Expansion, ErrorKind> {
    match tokens.get(0) {
        "mv" => Ok(Expansion::Pseudo(vec![expand_mv(tokens)?])),
        "jr" => Ok(Expansion::Pseudo(vec![expand_jr(tokens)?])),
        "nop" | "noop" => Ok(Expansion::Pseudo(vec![expand_nop()])),
        "li" => Ok(Expansion::Pseudo(expand_li(tokens)?)),
        _ => Ok(Expansion::Real(tokens.clone())),
    }
}

fn require_operand<'a>(
    tokens: &'a TokenSlots,
    slot: usize,
    mnemonic: &str,
    expected: usize,
) -> Result<&'a str, ErrorKind> {
    let value = tokens.get(slot);
    if value.is_empty() {
        return Err(ErrorKind::MissingOperand {
            mnemonic: mnemonic.to_string(),
            expected,
        });
    }
    Ok(value)
}

/// `mv rd, rs1` -> `addi rd, rs1, 0`.
fn expand_mv(tokens: &TokenSlots) -> Result<TokenSlots, ErrorKind> {
    let rd = require_operand(tokens, 1, "mv", 2)?;
    let rs1 = require_operand(tokens, 2, "mv", 2)?;
    Ok(TokenSlots::from_strs(&["addi", rd, rs1, "0"]))
}

/// `jr rs1` -> `jalr x0, 0, rs1`.
fn expand_jr(tokens: &TokenSlots) -> Result<TokenSlots, ErrorKind> {
    let rs1 = require_operand(tokens, 1, "jr", 1)?;
    Ok(TokenSlots::from_strs(&["jalr", "x0", "0", rs1]))
}

/// `nop` / `noop` -> `addi x0, x0, 0`.
fn expand_nop() -> TokenSlots {
    TokenSlots::from_strs(&["addi", "x0", "x0", "0"])
}

/// `li rd, imm` -> `lui rd, upper20(imm)` then `addi rd, rd, lower12(imm)`,
/// compensating `upper20` by one when bit 11 of `imm` is set, since `addi`
/// sign-extends its 12-bit immediate.
fn expand_li(tokens: &TokenSlots) -> Result<Vec<TokenSlots>, ErrorKind> {
    let rd = require_operand(tokens, 1, "li", 2)?;
    let imm_tok = require_operand(tokens, 2, "li", 2)?;
    let imm = parse_immediate(imm_tok)?;

    let lower12 = (imm & 0xFFF) as i64;
    let bit11_set = imm & 0x800 != 0;
    let mut upper20 = (imm >> 12) & 0xFFFFF;
    if bit11_set {
        upper20 = (upper20 - 1) & 0xFFFFF;
    }

    Ok(vec![
        TokenSlots::from_strs(&["lui", rd, &upper20.to_string()]),
        TokenSlots::from_strs(&["addi", rd, rd, &lower12.to_string()]),
    ])
}
