//! `RawInstruction`: a newtype wrapping a finished 32-bit word, exposing
//! the byte/hex rendering each output format needs. riscv5i words are
//! little-endian.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawInstruction {
    pub raw: u32,
}

impl RawInstruction {
    pub fn new(raw: u32) -> RawInstruction {
        RawInstruction { raw }
    }

    /// Four little-endian bytes, for `binary` output.
    pub fn to_le_bytes(self) -> [u8; 4] {
        self.raw.to_le_bytes()
    }

    /// `0x%08x` text rendering, for `hex` output.
    pub fn to_hex_line(self) -> String {
        format!("0x{:08x}\n", self.raw)
    }
}

impl From<u32> for RawInstruction {
    fn from(raw: u32) -> Self {
        RawInstruction::new(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_hex_line() {
        assert_eq!(RawInstruction::new(0x00310093).to_hex_line(), "0x00310093\n");
    }

    #[test]
    fn little_endian_bytes() {
        assert_eq!(
            RawInstruction::new(0x00310093).to_le_bytes(),
            [0x93, 0x00, 0x31, 0x00]
        );
    }
}
