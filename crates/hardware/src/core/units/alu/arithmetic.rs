//! ALU arithmetic operations.
//!
//! Implements 32-bit addition and subtraction (no overflow traps), and the
//! multiply/divide family that produces a HI/LO result pair.
//!
//! Multiplication is built from four 16x16 partial products so that no
//! intermediate value needs more than 32 bits; the signed variant multiplies
//! magnitudes and negates the 64-bit result when the operand signs differ.

use crate::common::constants::DIV_BY_ZERO_RESULT;
use crate::core::pipeline::signals::ExecOp;

const HALF_BITS: u32 = 16;
const HALF_MASK: u32 = 0xffff;

/// Executes an addition or subtraction with wrap-around.
///
/// # Arguments
///
/// * `op` - `ExecOp::Add` or `ExecOp::Sub`.
/// * `a`  - First operand.
/// * `b`  - Second operand.
///
/// # Returns
///
/// The 32-bit result. Returns `0` for other opcodes.
pub const fn add_sub(op: ExecOp, a: u32, b: u32) -> u32 {
    match op {
        ExecOp::Add => a.wrapping_add(b),
        ExecOp::Sub => a.wrapping_sub(b),
        _ => 0,
    }
}

/// Unsigned 32x32 to 64-bit multiply.
///
/// # Returns
///
/// `(hi, lo)` halves of the product.
pub const fn multu(a: u32, b: u32) -> (u32, u32) {
    let (a_hi, a_lo) = (a >> HALF_BITS, a & HALF_MASK);
    let (b_hi, b_lo) = (b >> HALF_BITS, b & HALF_MASK);

    let ll = a_lo * b_lo;
    let lh = a_lo * b_hi;
    let hl = a_hi * b_lo;
    let hh = a_hi * b_hi;

    // Bits 16..47 of the product before the carry out of the middle column.
    let mid = (ll >> HALF_BITS) + (lh & HALF_MASK) + (hl & HALF_MASK);
    let lo = (ll & HALF_MASK) | (mid << HALF_BITS);
    let hi = hh + (lh >> HALF_BITS) + (hl >> HALF_BITS) + (mid >> HALF_BITS);
    (hi, lo)
}

/// Signed 32x32 to 64-bit multiply.
///
/// # Returns
///
/// `(hi, lo)` halves of the two's complement product.
pub const fn mult(a: u32, b: u32) -> (u32, u32) {
    let (sa, sb) = (a as i32, b as i32);
    let negative = (sa < 0) != (sb < 0);
    let (hi, lo) = multu(sa.unsigned_abs(), sb.unsigned_abs());
    if negative {
        let lo_neg = (!lo).wrapping_add(1);
        let carry = if lo == 0 { 1 } else { 0 };
        ((!hi).wrapping_add(carry), lo_neg)
    } else {
        (hi, lo)
    }
}

/// Signed division.
///
/// A zero divisor does not fault; both halves are set to `0x7fffffff`.
///
/// # Returns
///
/// `(hi, lo)` = `(remainder, quotient)`.
pub const fn div(a: u32, b: u32) -> (u32, u32) {
    if b == 0 {
        return (DIV_BY_ZERO_RESULT, DIV_BY_ZERO_RESULT);
    }
    let (sa, sb) = (a as i32, b as i32);
    (sa.wrapping_rem(sb) as u32, sa.wrapping_div(sb) as u32)
}

/// Unsigned division.
///
/// A zero divisor does not fault; both halves are set to `0x7fffffff`.
///
/// # Returns
///
/// `(hi, lo)` = `(remainder, quotient)`.
pub const fn divu(a: u32, b: u32) -> (u32, u32) {
    if b == 0 {
        return (DIV_BY_ZERO_RESULT, DIV_BY_ZERO_RESULT);
    }
    (a % b, a / b)
}
