//! U-type: `imm[31:12] | rd[4:0] | opcode[6:0]`. The immediate is taken as
//! the already-shifted upper 20 bits (`lui x1, 3` encodes to `0x000030b7`).

use crate::error::ErrorKind;
use crate::raw_instruction::RawInstruction;

#[derive(Debug, Clone, Copy)]
pub struct UArgs {
    pub opcode: u32,
    pub rd: u32,
    pub imm: i64,
}

pub fn encode(args: UArgs) -> Result<RawInstruction, ErrorKind> {
    let imm_field = (args.imm as i32 as u32) & 0xFFFFF;
    let word = (imm_field << 12) | ((args.rd & 0x1F) << 7) | (args.opcode & 0x7F);
    Ok(RawInstruction::new(word))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lui_x1_3() {
        let word = encode(UArgs {
            opcode: 0b0110111,
            rd: 1,
            imm: 3,
        })
        .unwrap();
        assert_eq!(word.raw, 0x000030b7);
    }
}
