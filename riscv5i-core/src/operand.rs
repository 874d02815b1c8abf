//! Register and immediate decoding.
//!
//! Operand tokens are parsed straight from the token slots at encode
//! time rather than onto a separate typed AST: decode once here, then
//! hand the format encoder a plain integer.

use crate::error::ErrorKind;

/// Decodes a register reference token of the form `x<N>`, `N` in
/// `[0, 31]`. The 5-bit mask is applied by the format encoders, not
/// here; this function only validates the `x` prefix and that the
/// remainder parses as a non-negative integer.
pub fn parse_register(token: &str) -> Result<u32, ErrorKind> {
    let digits = token
        .strip_prefix('x')
        .ok_or_else(|| ErrorKind::InvalidRegister(token.to_string()))?;
    digits
        .parse::<u32>()
        .map_err(|_| ErrorKind::InvalidRegister(token.to_string()))
}

/// Decodes an immediate operand. Accepts base-10 as well as `0x`/`0b`
/// literals, each with an optional leading `-`.
pub fn parse_immediate(token: &str) -> Result<i64, ErrorKind> {
    let (negative, unsigned) = match token.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, token),
    };

    let value = if let Some(hex) = unsigned.strip_prefix("0x").or_else(|| unsigned.strip_prefix("0X")) {
        i64::from_str_radix(hex, 16).map_err(|_| ErrorKind::InvalidImmediate(token.to_string()))?
    } else if let Some(bin) = unsigned.strip_prefix("0b").or_else(|| unsigned.strip_prefix("0B")) {
        i64::from_str_radix(bin, 2).map_err(|_| ErrorKind::InvalidImmediate(token.to_string()))?
    } else {
        unsigned
            .parse::<i64>()
            .map_err(|_| ErrorKind::InvalidImmediate(token.to_string()))?
    };

    Ok(if negative { -value } else { value })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_plain_register() {
        assert_eq!(parse_register("x0").unwrap(), 0);
        assert_eq!(parse_register("x31").unwrap(), 31);
    }

    #[test]
    fn rejects_register_without_x_prefix() {
        assert!(parse_register("5").is_err());
    }

    #[test]
    fn decodes_decimal_immediate() {
        assert_eq!(parse_immediate("3").unwrap(), 3);
        assert_eq!(parse_immediate("-12").unwrap(), -12);
    }

    #[test]
    fn decodes_hex_and_binary_immediates() {
        assert_eq!(parse_immediate("0xFF").unwrap(), 255);
        assert_eq!(parse_immediate("0b101").unwrap(), 5);
        assert_eq!(parse_immediate("-0x10").unwrap(), -16);
    }

    #[test]
    fn rejects_garbage_immediate() {
        assert!(parse_immediate("abc").is_err());
    }
}
