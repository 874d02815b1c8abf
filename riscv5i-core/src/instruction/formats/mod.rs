//! The five bitfield encoders, one per instruction format: a small `*Args`
//! struct paired with an `encode` function that takes already-decoded
//! integers (register numbers, immediates) and returns a `RawInstruction`.

pub mod b_type;
pub mod i_type;
pub mod j_type;
pub mod r_type;
pub mod s_type;
pub mod u_type;

/// True when `value`'s magnitude fits within `bits` bits, checked
/// symmetrically in both directions rather than as an asymmetric
/// two's-complement range. A branch or jump offset of exactly
/// `+(1 << (bits - 1))` halfwords must encode just as successfully as
/// `-(1 << (bits - 1))` does; a plain two's-complement range check would
/// accept the negative boundary but reject the positive one a word short.
pub(crate) fn fits_signed_bits(value: i64, bits: u32) -> bool {
    let bound = 1i64 << (bits - 1);
    value >= -bound && value <= bound
}
